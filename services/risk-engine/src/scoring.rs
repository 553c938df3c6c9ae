//! Risk score calculations
//!
//! Deterministic score computations on fixed-point Decimal arithmetic.
//! Every function is pure; the engine composes them.

use risk_types::level::{Impact, Likelihood};
use risk_types::percentage::Percentage;
use rust_decimal::Decimal;

/// Inherent score: `ordinal(likelihood) × ordinal(impact)`
///
/// On the three-point scale the result is one of 1, 2, 3, 4, 6, 9.
pub fn inherent_score(likelihood: Likelihood, impact: Impact) -> Decimal {
    Decimal::from(likelihood.ordinal()) * Decimal::from(impact.ordinal())
}

/// Residual score: `inherent × (1 - strength / 100)`, floored at zero
pub fn residual_score(inherent: Decimal, control_strength: Percentage) -> Decimal {
    discount(inherent, control_strength.as_fraction())
}

/// Average assurance: `(effectiveness + implemented) / 2 / 100`
pub fn average_assurance(effectiveness: Percentage, implemented: Percentage) -> Decimal {
    let sum = Decimal::from(effectiveness.value()) + Decimal::from(implemented.value());
    sum / Decimal::from(2) / Decimal::ONE_HUNDRED
}

/// Current score: `residual × (1 - assurance)`, floored at zero
pub fn current_score(residual: Decimal, assurance: Decimal) -> Decimal {
    discount(residual, assurance)
}

/// Reduce `score` by `fraction` of itself, never going below zero.
///
/// Trailing zeros are stripped so 0.60 and 0.6 render identically.
fn discount(score: Decimal, fraction: Decimal) -> Decimal {
    let discounted = score * (Decimal::ONE - fraction);
    discounted.max(Decimal::ZERO).normalize()
}

// ── Tests ────────────────────────────────────────────────────────────────
