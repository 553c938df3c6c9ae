//! Status panel view model
//!
//! Every assessment tab shows the same row of fields: inherent likelihood,
//! impact and rating, control strength, residual risk, effectiveness,
//! implemented, current risk. `StatusPanel` builds that row once from an
//! input/result pair so renderers only map fields to markup.

use risk_types::assessment::{RiskAssessmentInput, RiskAssessmentResult};
use risk_types::level::{Level, RiskRating};
use risk_types::percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places shown for scores
pub const SCORE_DECIMALS: u32 = 4;

/// Badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl From<RiskRating> for Tone {
    fn from(rating: RiskRating) -> Self {
        match rating {
            RiskRating::Low => Tone::Green,
            RiskRating::Medium => Tone::Yellow,
            RiskRating::High => Tone::Red,
        }
    }
}

impl From<Level> for Tone {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => Tone::Green,
            Level::Medium => Tone::Yellow,
            Level::High => Tone::Red,
        }
    }
}

/// One labelled field of the status panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelField {
    pub label: &'static str,
    pub badge: Option<String>,
    pub tone: Tone,
    pub value: String,
}

impl PanelField {
    fn badged(label: &'static str, badge: impl Into<String>, tone: Tone, value: String) -> Self {
        Self {
            label,
            badge: Some(badge.into()),
            tone,
            value,
        }
    }

    fn plain(label: &'static str, value: String) -> Self {
        Self {
            label,
            badge: None,
            tone: Tone::Neutral,
            value,
        }
    }
}

/// Ordered fields of the assessment status panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPanel {
    pub fields: Vec<PanelField>,
}

impl StatusPanel {
    /// Build the panel for an evaluated assessment
    pub fn build(input: &RiskAssessmentInput, result: &RiskAssessmentResult) -> Self {
        let likelihood = input.inherent_likelihood();
        let impact = input.inherent_impact();
        let category = input.control_strength_category();

        let fields = vec![
            PanelField::badged(
                "Inherent Likelihood",
                likelihood.as_str(),
                likelihood.into(),
                format_score(Decimal::from(likelihood.ordinal())),
            ),
            PanelField::badged(
                "Inherent Impact",
                impact.as_str(),
                impact.into(),
                format_score(Decimal::from(impact.ordinal())),
            ),
            PanelField::badged(
                "Inherent Risk Rating",
                result.inherent_label.as_str(),
                result.inherent_label.into(),
                format_score(result.inherent_score),
            ),
            PanelField::badged(
                "Control Strength",
                category.label(),
                Tone::Neutral,
                format_percentage(result.control_strength_pct),
            ),
            PanelField::badged(
                "Residual Risk",
                result.residual_label.as_str(),
                result.residual_label.into(),
                format_score(result.residual_score),
            ),
            PanelField::plain("Effectiveness", format_percentage(input.effectiveness_pct())),
            PanelField::plain("Implemented", format_percentage(input.implemented_pct())),
            PanelField::badged(
                "Current Risk",
                result.current_label.as_str(),
                result.current_label.into(),
                format_score(result.current_score),
            ),
        ];

        Self { fields }
    }

    /// Look up a field by label
    pub fn field(&self, label: &str) -> Option<&PanelField> {
        self.fields.iter().find(|f| f.label == label)
    }
}

/// Format a score with exactly four decimals, rounding HALF_UP
pub fn format_score(score: Decimal) -> String {
    let mut rounded =
        score.round_dp_with_strategy(SCORE_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCORE_DECIMALS);
    rounded.to_string()
}

/// Format a percentage as "NN%"
pub fn format_percentage(pct: Percentage) -> String {
    pct.to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────
