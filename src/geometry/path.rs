//! Minimal path description handed to an external renderer.

use crate::Point;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Starts a new subpath at the point
    MoveTo(Point),
    /// Straight segment from the current point
    LineTo(Point),
    /// Cubic bezier segment from the current point
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
}

/// How a path should be stroked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Alternating painted and unpainted lengths, in drawing units
    Dashed { on: f64, off: f64 },
}

impl StrokeStyle {
    /// Dash pattern used for tangent handles.
    pub const HANDLE_DASH: StrokeStyle = StrokeStyle::Dashed { on: 5.0, off: 2.0 };
}

/// An ordered list of drawing commands with a stroke style.
///
/// # Examples
///
/// ```
/// use easewright::{Path, Point};
///
/// let mut path = Path::new();
/// path.move_to(Point::new(0.0, 10.0));
/// path.line_to(Point::new(5.0, 0.0));
/// assert_eq!(path.to_svg_data(), "M0 10 L5 0");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: Vec<PathElement>,
    stroke: StrokeStyle,
}

impl Path {
    /// Creates an empty, solid path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.elements.push(PathElement::CurveTo { ctrl1, ctrl2, to });
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn stroke(&self) -> StrokeStyle {
        self.stroke
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Formats the path as SVG path data (the `d` attribute).
    pub fn to_svg_data(&self) -> String {
        self.elements
            .iter()
            .map(|element| match element {
                PathElement::MoveTo(p) => format!("M{} {}", p.x, p.y),
                PathElement::LineTo(p) => format!("L{} {}", p.x, p.y),
                PathElement::CurveTo { ctrl1, ctrl2, to } => format!(
                    "C{} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
