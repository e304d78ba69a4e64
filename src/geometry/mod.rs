//! Renderable geometry for timing curves.
//!
//! This module turns a [`TimingCurve`](crate::TimingCurve) into paths that an
//! external renderer can stroke: the curve itself and its tangent handles.

mod path;
mod projection;

pub use path::{Path, PathElement, StrokeStyle};
pub use projection::CurveGeometry;
