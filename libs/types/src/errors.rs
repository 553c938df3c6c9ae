//! Error types for risk assessment scoring
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Top-level assessment error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// A caller-supplied value violates an input invariant
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Scoring configuration is malformed or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AssessmentError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Re-attribute an `InvalidInput` error to a named request field.
    ///
    /// Parsers only know the kind of value they rejected; the request
    /// conversion knows which field it came from.
    pub fn with_field(self, field: &'static str) -> Self {
        match self {
            Self::InvalidInput { reason, .. } => Self::InvalidInput { field, reason },
            other => other,
        }
    }

    /// True if this is an input validation failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
