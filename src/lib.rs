//! Easewright - cubic-bezier timing functions for animation
//!
//! This library models timing curves pinned at (0,0) and (1,1), evaluates
//! eased progress for a normalized time, and projects curves into drawing
//! rectangles for display.

pub mod point;
pub mod timing;

#[cfg(feature = "geometry")]
pub mod geometry;

#[cfg(feature = "animation")]
pub mod animation;

// Re-export commonly used types at the crate root
pub use point::{Point, Rect, Size};
pub use timing::{
    NonConvergentEvaluation, ParseCurveError, Preset, SolverOptions, TimingCurve,
    UnknownPresetError, presets,
};

#[cfg(feature = "geometry")]
pub use geometry::{CurveGeometry, Path, PathElement, StrokeStyle};

#[cfg(feature = "animation")]
pub use animation::{Frame, Frames, PositionAnimation};

#[cfg(feature = "macros")]
pub use easewright_macros::timing;
