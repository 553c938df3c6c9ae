//! Control strength categories
//!
//! Each named category resolves to a fixed mitigation percentage.

use crate::errors::AssessmentError;
use crate::percentage::Percentage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Control strength category
///
/// | Category   | Strength |
/// |------------|----------|
/// | calculated | 68%      |
/// | assessed   | 44%      |
/// | effective  | 10%      |
/// | moderate   | 40%      |
/// | strong     | 90%      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlStrengthCategory {
    Calculated,
    Assessed,
    Effective,
    Moderate,
    Strong,
}

impl ControlStrengthCategory {
    /// All categories in selection order
    pub const ALL: [ControlStrengthCategory; 5] = [
        ControlStrengthCategory::Calculated,
        ControlStrengthCategory::Assessed,
        ControlStrengthCategory::Effective,
        ControlStrengthCategory::Moderate,
        ControlStrengthCategory::Strong,
    ];

    /// Fixed mitigation percentage for this category
    pub fn strength(&self) -> Percentage {
        let pct = match self {
            ControlStrengthCategory::Calculated => 68,
            ControlStrengthCategory::Assessed => 44,
            ControlStrengthCategory::Effective => 10,
            ControlStrengthCategory::Moderate => 40,
            ControlStrengthCategory::Strong => 90,
        };
        Percentage::saturating(pct)
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlStrengthCategory::Calculated => "calculated",
            ControlStrengthCategory::Assessed => "assessed",
            ControlStrengthCategory::Effective => "effective",
            ControlStrengthCategory::Moderate => "moderate",
            ControlStrengthCategory::Strong => "strong",
        }
    }

    /// Selection label, e.g. "Calculated (68%)"
    pub fn label(&self) -> String {
        let name = match self {
            ControlStrengthCategory::Calculated => "Calculated",
            ControlStrengthCategory::Assessed => "Assessed",
            ControlStrengthCategory::Effective => "Effective",
            ControlStrengthCategory::Moderate => "Moderate",
            ControlStrengthCategory::Strong => "Strong",
        };
        format!("{} ({})", name, self.strength())
    }
}

impl FromStr for ControlStrengthCategory {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| {
                AssessmentError::invalid_input(
                    "control_strength_category",
                    format!("unrecognized control strength category '{}'", s),
                )
            })
    }
}

impl fmt::Display for ControlStrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
