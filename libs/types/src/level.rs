//! Ordinal assessment scales
//!
//! Likelihood and impact share one three-point scale; risk ratings are the
//! Low/Medium/High bands a score falls into.

use crate::errors::AssessmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal level used for inherent likelihood and impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Inherent likelihood of a risk event
pub type Likelihood = Level;

/// Inherent impact of a risk event
pub type Impact = Level;

impl Level {
    /// All levels in ascending order
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Ordinal value: Low=1, Medium=2, High=3
    pub fn ordinal(&self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl FromStr for Level {
    type Err = AssessmentError;

    /// Case-insensitive: accepts "low", "Medium", "HIGH", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            _ => Err(AssessmentError::invalid_input(
                "level",
                format!("unrecognized level '{}'", s),
            )),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Banded risk rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
