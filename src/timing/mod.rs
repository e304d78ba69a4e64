//! Cubic-bezier timing functions.
//!
//! This module provides:
//! - `TimingCurve`, an immutable timing function pinned at (0,0) and (1,1)
//! - `Preset`, the five named curves in display order
//! - `SolverOptions`, configuration for the root finder behind evaluation

mod curve;
mod preset;
mod solver;

pub use curve::{NonConvergentEvaluation, ParseCurveError, TimingCurve};
pub use preset::{Preset, UnknownPresetError, presets};
pub use solver::SolverOptions;
