//! Risk Scoring Engine
//!
//! Converts qualitative risk inputs (likelihood, impact, control strength
//! category) and assurance percentages (effectiveness, implemented) into
//! banded inherent, residual and current risk scores.
//!
//! Provides the pure score calculations, a configurable band table,
//! assurance derived from control sets, and the status panel view model
//! shared by every assessment tab.
//!
//! ```text
//! likelihood × impact ──► inherent ──► × (1 - strength) ──► residual
//!                                                              │
//!                       × (1 - mean(effectiveness, implemented))
//!                                                              ▼
//!                                                           current
//! ```

pub mod scoring;
pub mod banding;
pub mod controls;
pub mod panel;
pub mod engine;

pub use engine::{RiskScoringEngine, ScoringConfig};
