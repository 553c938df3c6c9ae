//! Risk Scoring Engine — orchestrator
//!
//! Ties together scoring, banding and control assurance into a single
//! stateless evaluation.

use risk_types::assessment::{RiskAssessmentInput, RiskAssessmentRequest, RiskAssessmentResult};
use risk_types::control::Control;
use risk_types::control_strength::ControlStrengthCategory;
use risk_types::errors::AssessmentError;
use risk_types::level::{Impact, Likelihood};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::banding::BandThresholds;
use crate::controls::{self, ControlAssurance};
use crate::scoring;

/// Scoring engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Band table applied to inherent, residual and current scores
    #[serde(default)]
    pub bands: BandThresholds,
}

impl ScoringConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Thresholds are decimal strings, not JSON numbers:
    /// `{"bands": {"low_max": "3", "medium_max": "6"}}`.
    pub fn from_json(json: &str) -> Result<Self, AssessmentError> {
        let config: ScoringConfig = serde_json::from_str(json)
            .map_err(|e| AssessmentError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AssessmentError> {
        self.bands.validate()
    }
}

/// Risk scoring engine
///
/// Holds only immutable configuration; every evaluation is independent.
#[derive(Debug, Clone)]
pub struct RiskScoringEngine {
    config: ScoringConfig,
}

impl RiskScoringEngine {
    /// Create a new engine with the default band table
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Create a new engine with a custom configuration
    pub fn with_config(config: ScoringConfig) -> Result<Self, AssessmentError> {
        config.validate()?;
        info!(
            low_max = %config.bands.low_max,
            medium_max = %config.bands.medium_max,
            "Installed custom scoring configuration"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Evaluate a validated assessment.
    ///
    /// 1. inherent = likelihood × impact
    /// 2. residual = inherent × (1 - strength)
    /// 3. current  = residual × (1 - mean(effectiveness, implemented))
    ///
    /// Each score is banded with the configured thresholds.
    pub fn evaluate(&self, input: &RiskAssessmentInput) -> RiskAssessmentResult {
        let bands = &self.config.bands;

        let inherent_score =
            scoring::inherent_score(input.inherent_likelihood(), input.inherent_impact());
        let control_strength_pct = input.control_strength_category().strength();
        let residual_score = scoring::residual_score(inherent_score, control_strength_pct);
        let average_assurance =
            scoring::average_assurance(input.effectiveness_pct(), input.implemented_pct());
        let current_score = scoring::current_score(residual_score, average_assurance);

        let result = RiskAssessmentResult {
            inherent_score,
            inherent_label: bands.band(inherent_score),
            control_strength_pct,
            residual_score,
            residual_label: bands.band(residual_score),
            average_assurance,
            current_score,
            current_label: bands.band(current_score),
        };

        debug!(
            inherent = %result.inherent_score,
            residual = %result.residual_score,
            current = %result.current_score,
            current_label = %result.current_label,
            "Evaluated risk assessment"
        );

        result
    }

    /// Validate a raw request, then evaluate it.
    ///
    /// Fails with `InvalidInput` on out-of-range percentages or
    /// unrecognized level/category names.
    pub fn evaluate_request(
        &self,
        request: &RiskAssessmentRequest,
    ) -> Result<RiskAssessmentResult, AssessmentError> {
        let input = RiskAssessmentInput::try_from(request).map_err(|e| {
            warn!(error = %e, "Rejected risk assessment request");
            e
        })?;
        Ok(self.evaluate(&input))
    }

    /// Evaluate using assurance derived from a control set.
    ///
    /// Effectiveness and implemented come from the existing controls; with
    /// none in place both are zero and current equals residual.
    pub fn evaluate_with_controls(
        &self,
        likelihood: Likelihood,
        impact: Impact,
        category: ControlStrengthCategory,
        controls: &[Control],
    ) -> RiskAssessmentResult {
        let assurance =
            controls::existing_assurance(controls).unwrap_or_else(ControlAssurance::none);
        debug!(
            controls_considered = assurance.controls_considered,
            effectiveness = %assurance.effectiveness,
            implemented = %assurance.implemented,
            "Derived control assurance"
        );

        let input = RiskAssessmentInput::new(
            likelihood,
            impact,
            category,
            assurance.effectiveness,
            assurance.implemented,
        );
        self.evaluate(&input)
    }
}

impl Default for RiskScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_types::control::{ControlKind, ControlType};
    use risk_types::level::{Level, RiskRating};
    use risk_types::percentage::Percentage;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn make_input(
        likelihood: Level,
        impact: Level,
        category: ControlStrengthCategory,
        effectiveness: i64,
        implemented: i64,
    ) -> RiskAssessmentInput {
        RiskAssessmentInput::try_new(likelihood, impact, category, effectiveness, implemented)
            .unwrap()
    }

    fn make_request(category: &str, effectiveness: i64, implemented: i64) -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            inherent_likelihood: "High".to_string(),
            inherent_impact: "Medium".to_string(),
            control_strength_category: category.to_string(),
            effectiveness_pct: effectiveness,
            implemented_pct: implemented,
        }
    }

    // ── Evaluation tests ──

    #[test]
    fn test_evaluate_sample_assessment() {
        let engine = RiskScoringEngine::new();
        let input = make_input(
            Level::High,
            Level::Medium,
            ControlStrengthCategory::Calculated,
            85,
            92,
        );

        let result = engine.evaluate(&input);
        // Inherent = 3 × 2 = 6
        assert_eq!(result.inherent_score, Decimal::from(6));
        assert_eq!(result.inherent_label, RiskRating::Medium);
        assert_eq!(result.control_strength_pct.value(), 68);
        // Residual = 6 × 0.32 = 1.92
        assert_eq!(result.residual_score, dec("1.92"));
        assert_eq!(result.residual_label, RiskRating::Low);
        // Assurance = (85 + 92) / 2 / 100 = 0.885
        assert_eq!(result.average_assurance, dec("0.885"));
        // Current = 1.92 × 0.115 = 0.2208
        assert_eq!(result.current_score, dec("0.2208"));
        assert_eq!(result.current_label, RiskRating::Low);
    }

    #[test]
    fn test_evaluate_high_inherent() {
        let engine = RiskScoringEngine::new();
        let input = make_input(Level::High, Level::High, ControlStrengthCategory::Effective, 0, 0);

        let result = engine.evaluate(&input);
        // Residual = 9 × 0.9 = 8.1, no assurance
        assert_eq!(result.inherent_label, RiskRating::High);
        assert_eq!(result.residual_score, dec("8.1"));
        assert_eq!(result.residual_label, RiskRating::High);
        assert_eq!(result.current_score, result.residual_score);
    }

    #[test]
    fn test_strong_is_always_ninety() {
        let engine = RiskScoringEngine::new();
        for likelihood in Level::ALL {
            for impact in Level::ALL {
                let input = make_input(likelihood, impact, ControlStrengthCategory::Strong, 40, 60);
                assert_eq!(engine.evaluate(&input).control_strength_pct.value(), 90);
            }
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let engine = RiskScoringEngine::new();
        let input = make_input(
            Level::Medium,
            Level::High,
            ControlStrengthCategory::Moderate,
            33,
            71,
        );
        assert_eq!(engine.evaluate(&input), engine.evaluate(&input));
    }

    // ── Request validation tests ──

    #[test]
    fn test_request_passes() {
        let engine = RiskScoringEngine::new();
        let result = engine.evaluate_request(&make_request("calculated", 85, 92)).unwrap();
        assert_eq!(result.current_score, dec("0.2208"));
    }

    #[test]
    fn test_request_effectiveness_out_of_range() {
        let engine = RiskScoringEngine::new();
        let err = engine.evaluate_request(&make_request("calculated", 101, 92)).unwrap_err();
        match err {
            AssessmentError::InvalidInput { field, .. } => assert_eq!(field, "effectiveness_pct"),
            _ => panic!("Expected InvalidInput"),
        }
    }

    #[test]
    fn test_request_unknown_category() {
        let engine = RiskScoringEngine::new();
        let err = engine.evaluate_request(&make_request("unknown", 85, 92)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    // ── Control set tests ──

    #[test]
    fn test_evaluate_with_controls() {
        let engine = RiskScoringEngine::new();
        let pct = |v: i64| Percentage::try_new(v).unwrap();
        let controls = vec![
            Control::new(
                "ctrl-1",
                "Bill pay review",
                ControlKind::Existing,
                ControlType::Detective,
                pct(80),
                pct(90),
            ),
            Control::new(
                "ctrl-2",
                "EFT approval",
                ControlKind::Existing,
                ControlType::Preventative,
                pct(90),
                pct(94),
            ),
            Control::new(
                "rec-1",
                "Automated monitoring",
                ControlKind::Recommended,
                ControlType::Preventative,
                pct(10),
                pct(0),
            ),
        ];

        let result = engine.evaluate_with_controls(
            Level::High,
            Level::Medium,
            ControlStrengthCategory::Calculated,
            &controls,
        );
        // Existing means: effectiveness 85, implemented 92
        assert_eq!(result.average_assurance, dec("0.885"));
        assert_eq!(result.current_score, dec("0.2208"));
    }

    #[test]
    fn test_evaluate_without_existing_controls() {
        let engine = RiskScoringEngine::new();
        let result = engine.evaluate_with_controls(
            Level::Low,
            Level::High,
            ControlStrengthCategory::Assessed,
            &[],
        );
        assert_eq!(result.average_assurance, Decimal::ZERO);
        assert_eq!(result.current_score, result.residual_score);
    }

    // ── Configuration tests ──

    #[test]
    fn test_custom_bands() {
        let config = ScoringConfig {
            bands: BandThresholds::new(Decimal::ONE, Decimal::from(2)).unwrap(),
        };
        let engine = RiskScoringEngine::with_config(config).unwrap();
        let input = make_input(
            Level::High,
            Level::Medium,
            ControlStrengthCategory::Calculated,
            85,
            92,
        );

        let result = engine.evaluate(&input);
        assert_eq!(result.inherent_label, RiskRating::High);
        assert_eq!(result.residual_label, RiskRating::Medium);
        assert_eq!(result.current_label, RiskRating::Low);
    }

    #[test]
    fn test_with_config_rejects_inverted_bands() {
        let config = ScoringConfig {
            bands: BandThresholds {
                low_max: Decimal::from(6),
                medium_max: Decimal::from(3),
            },
        };
        assert!(matches!(
            RiskScoringEngine::with_config(config),
            Err(AssessmentError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config =
            ScoringConfig::from_json(r#"{"bands": {"low_max": "2.5", "medium_max": "5"}}"#)
                .unwrap();
        assert_eq!(config.bands.low_max, dec("2.5"));
        assert_eq!(config.bands.medium_max, Decimal::from(5));

        let defaulted = ScoringConfig::from_json("{}").unwrap();
        assert_eq!(defaulted, ScoringConfig::default());
    }

    #[test]
    fn test_config_from_bad_json() {
        assert!(matches!(
            ScoringConfig::from_json("{bands"),
            Err(AssessmentError::InvalidConfig(_))
        ));
        let inverted = r#"{"bands": {"low_max": "7", "medium_max": "6"}}"#;
        assert!(ScoringConfig::from_json(inverted).is_err());
    }

    #[test]
    fn test_config_thresholds_must_be_strings() {
        let numeric = r#"{"bands": {"low_max": 3, "medium_max": 6}}"#;
        assert!(matches!(
            ScoringConfig::from_json(numeric),
            Err(AssessmentError::InvalidConfig(_))
        ));
    }

    // ── Thread safety ──

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Clone + Send + Sync>() {}
        assert_send_sync::<RiskScoringEngine>();
        assert_send_sync::<ScoringConfig>();

        let engine = std::sync::Arc::new(RiskScoringEngine::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || {
                    let input = RiskAssessmentInput::try_new(
                        Level::High,
                        Level::Medium,
                        ControlStrengthCategory::Calculated,
                        85,
                        92,
                    )
                    .unwrap();
                    engine.evaluate(&input)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().current_score, dec("0.2208"));
        }
    }
}
