//! Types library for risk assessment scoring
//!
//! This library provides the validated value types shared by the scoring
//! engine and its callers. Every type that carries an invariant enforces it
//! at construction, so downstream code never re-checks ranges.
//!
//! # Modules
//! - `level`: Ordinal likelihood/impact scale and banded risk ratings
//! - `percentage`: Whole percentages bounded to 0..=100
//! - `control_strength`: Named control strength categories
//! - `control`: Existing and recommended control records
//! - `assessment`: Assessment input, raw request, and result records
//! - `errors`: Error taxonomy

// Public modules
pub mod level;
pub mod percentage;
pub mod control_strength;
pub mod control;
pub mod assessment;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::level::*;
    pub use crate::percentage::*;
    pub use crate::control_strength::*;
    pub use crate::control::*;
    pub use crate::assessment::*;
    pub use crate::errors::*;
}
