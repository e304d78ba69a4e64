//! Positional animation driven by a timing curve.
//!
//! The core never runs a clock. A caller owns the clock and either asks a
//! [`PositionAnimation`] for the offset at an elapsed time or walks its
//! [`Frames`] at a fixed frame rate.

mod position;

pub use position::{Frame, Frames, PositionAnimation};
