//! Bounded integer percentages
//!
//! Effectiveness, implementation maturity, control strength and control
//! weight are all whole percentages in `0..=100`.

use crate::errors::AssessmentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole percentage in `0..=100`
///
/// Invariant: value <= 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const FULL: Percentage = Percentage(100);

    /// Create a percentage, rejecting values outside `0..=100`
    pub fn try_new(value: i64) -> Result<Self, AssessmentError> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AssessmentError::invalid_input(
                "percentage",
                format!("{} is outside 0..=100", value),
            ))
        }
    }

    /// Create a percentage, saturating at 100
    pub fn saturating(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    /// Raw integer value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Value as a fraction: `value / 100`
    pub fn as_fraction(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Percentage {
    type Error = AssessmentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
