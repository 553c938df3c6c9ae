//! Control assurance
//!
//! Derives the effectiveness and implemented percentages of a risk from the
//! controls attached to it. Only existing controls count; recommended ones
//! are not in place yet.

use risk_types::control::Control;
use risk_types::percentage::Percentage;
use serde::{Deserialize, Serialize};

/// Aggregate assurance of the existing controls on a risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAssurance {
    pub effectiveness: Percentage,
    pub implemented: Percentage,
    /// Number of existing controls averaged
    pub controls_considered: usize,
}

impl ControlAssurance {
    /// Assurance of a risk with no controls in place
    pub fn none() -> Self {
        Self {
            effectiveness: Percentage::ZERO,
            implemented: Percentage::ZERO,
            controls_considered: 0,
        }
    }
}

/// Mean effectiveness and implemented percentages over existing controls.
///
/// Means are rounded half-up to whole percentages. Returns `None` if no
/// existing control is present.
pub fn existing_assurance(controls: &[Control]) -> Option<ControlAssurance> {
    let existing: Vec<&Control> = controls.iter().filter(|c| c.is_existing()).collect();
    if existing.is_empty() {
        return None;
    }

    let effectiveness = mean_percentage(existing.iter().map(|c| c.effectiveness));
    let implemented = mean_percentage(existing.iter().map(|c| c.implemented));

    Some(ControlAssurance {
        effectiveness,
        implemented,
        controls_considered: existing.len(),
    })
}

/// Recommended controls, in input order
pub fn recommended(controls: &[Control]) -> impl Iterator<Item = &Control> {
    controls.iter().filter(|c| !c.is_existing())
}

/// Integer mean with HALF_UP rounding. Empty input yields zero.
fn mean_percentage(values: impl Iterator<Item = Percentage>) -> Percentage {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), pct| {
        (sum + u64::from(pct.value()), count + 1)
    });
    if count == 0 {
        return Percentage::ZERO;
    }
    // round(sum / count) = floor((2·sum + count) / (2·count)), never above 100
    let mean = (2 * sum + count) / (2 * count);
    Percentage::saturating(mean.min(100) as u32)
}

// ── Tests ────────────────────────────────────────────────────────────────
