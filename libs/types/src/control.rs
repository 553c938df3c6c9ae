//! Control records
//!
//! A control is a procedure that mitigates a risk. Existing controls are in
//! place; recommended controls are candidates that have not been adopted.

use crate::percentage::Percentage;
use serde::{Deserialize, Serialize};

/// Whether a control is in place or only proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Existing,
    Recommended,
}

/// How a control acts on a risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Preventative,
    Detective,
}

/// A control attached to a risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub name: String,
    pub kind: ControlKind,
    pub control_type: ControlType,
    pub effectiveness: Percentage,
    pub implemented: Percentage,
    pub weight: Percentage,
    pub strength: Percentage,
}

impl Control {
    /// Create a control with zero weight and strength
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ControlKind,
        control_type: ControlType,
        effectiveness: Percentage,
        implemented: Percentage,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            control_type,
            effectiveness,
            implemented,
            weight: Percentage::ZERO,
            strength: Percentage::ZERO,
        }
    }

    pub fn with_weight(mut self, weight: Percentage) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_strength(mut self, strength: Percentage) -> Self {
        self.strength = strength;
        self
    }

    /// Check if the control is in place
    pub fn is_existing(&self) -> bool {
        self.kind == ControlKind::Existing
    }
}
