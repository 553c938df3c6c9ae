//! Risk assessment input and result records

use crate::control_strength::ControlStrengthCategory;
use crate::errors::AssessmentError;
use crate::level::{Impact, Likelihood, RiskRating};
use crate::percentage::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validated input to a single risk evaluation
///
/// Invariant: both percentages lie in `0..=100` (enforced by `Percentage`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskAssessmentInput {
    inherent_likelihood: Likelihood,
    inherent_impact: Impact,
    control_strength_category: ControlStrengthCategory,
    effectiveness_pct: Percentage,
    implemented_pct: Percentage,
}

impl RiskAssessmentInput {
    /// Create an input from already-validated parts
    pub fn new(
        inherent_likelihood: Likelihood,
        inherent_impact: Impact,
        control_strength_category: ControlStrengthCategory,
        effectiveness_pct: Percentage,
        implemented_pct: Percentage,
    ) -> Self {
        Self {
            inherent_likelihood,
            inherent_impact,
            control_strength_category,
            effectiveness_pct,
            implemented_pct,
        }
    }

    /// Create an input, validating raw percentages
    pub fn try_new(
        inherent_likelihood: Likelihood,
        inherent_impact: Impact,
        control_strength_category: ControlStrengthCategory,
        effectiveness_pct: i64,
        implemented_pct: i64,
    ) -> Result<Self, AssessmentError> {
        let effectiveness_pct = Percentage::try_new(effectiveness_pct)
            .map_err(|e| e.with_field("effectiveness_pct"))?;
        let implemented_pct = Percentage::try_new(implemented_pct)
            .map_err(|e| e.with_field("implemented_pct"))?;

        Ok(Self::new(
            inherent_likelihood,
            inherent_impact,
            control_strength_category,
            effectiveness_pct,
            implemented_pct,
        ))
    }

    pub fn inherent_likelihood(&self) -> Likelihood {
        self.inherent_likelihood
    }

    pub fn inherent_impact(&self) -> Impact {
        self.inherent_impact
    }

    pub fn control_strength_category(&self) -> ControlStrengthCategory {
        self.control_strength_category
    }

    pub fn effectiveness_pct(&self) -> Percentage {
        self.effectiveness_pct
    }

    pub fn implemented_pct(&self) -> Percentage {
        self.implemented_pct
    }
}

/// Unvalidated assessment as submitted by a form
///
/// Levels and category are free text, percentages are signed so that
/// negative entries are reported as invalid input rather than lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessmentRequest {
    pub inherent_likelihood: String,
    pub inherent_impact: String,
    pub control_strength_category: String,
    pub effectiveness_pct: i64,
    pub implemented_pct: i64,
}

impl TryFrom<&RiskAssessmentRequest> for RiskAssessmentInput {
    type Error = AssessmentError;

    fn try_from(request: &RiskAssessmentRequest) -> Result<Self, Self::Error> {
        let likelihood: Likelihood = request
            .inherent_likelihood
            .parse()
            .map_err(|e: AssessmentError| e.with_field("inherent_likelihood"))?;
        let impact: Impact = request
            .inherent_impact
            .parse()
            .map_err(|e: AssessmentError| e.with_field("inherent_impact"))?;
        let category: ControlStrengthCategory = request.control_strength_category.parse()?;

        RiskAssessmentInput::try_new(
            likelihood,
            impact,
            category,
            request.effectiveness_pct,
            request.implemented_pct,
        )
    }
}

/// Derived scores and bands for one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessmentResult {
    pub inherent_score: Decimal,
    pub inherent_label: RiskRating,
    pub control_strength_pct: Percentage,
    pub residual_score: Decimal,
    pub residual_label: RiskRating,
    /// Mean of effectiveness and implemented, as a fraction
    pub average_assurance: Decimal,
    pub current_score: Decimal,
    pub current_label: RiskRating,
}
