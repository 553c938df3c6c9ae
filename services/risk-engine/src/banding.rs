//! Score banding
//!
//! Maps a numeric risk score onto a Low/Medium/High rating.

use risk_types::errors::AssessmentError;
use risk_types::level::RiskRating;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper bounds (inclusive) of the Low and Medium bands
///
/// | Score                        | Rating |
/// |------------------------------|--------|
/// | score <= low_max             | Low    |
/// | low_max < score <= medium_max| Medium |
/// | score > medium_max           | High   |
///
/// Defaults (3, 6) give the 3×3 table: 1–3 Low, 4–6 Medium, 7–9 High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub low_max: Decimal,
    pub medium_max: Decimal,
}

impl BandThresholds {
    /// Create thresholds, rejecting negative or non-increasing bounds
    pub fn new(low_max: Decimal, medium_max: Decimal) -> Result<Self, AssessmentError> {
        let thresholds = Self { low_max, medium_max };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check `0 <= low_max < medium_max`
    pub fn validate(&self) -> Result<(), AssessmentError> {
        if self.low_max < Decimal::ZERO {
            return Err(AssessmentError::InvalidConfig(format!(
                "low_max must be non-negative, got {}",
                self.low_max
            )));
        }
        if self.low_max >= self.medium_max {
            return Err(AssessmentError::InvalidConfig(format!(
                "low_max ({}) must be below medium_max ({})",
                self.low_max, self.medium_max
            )));
        }
        Ok(())
    }

    /// Classify a score
    pub fn band(&self, score: Decimal) -> RiskRating {
        if score <= self.low_max {
            RiskRating::Low
        } else if score <= self.medium_max {
            RiskRating::Medium
        } else {
            RiskRating::High
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            low_max: Decimal::from(3),
            medium_max: Decimal::from(6),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
