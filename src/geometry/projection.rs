//! Projection of a timing curve into a drawing rectangle.

use super::path::{Path, StrokeStyle};
use crate::{Point, Rect, TimingCurve};

/// Drawable geometry for a timing curve.
///
/// Holds the four control points in drawing space, the curve itself as a
/// single cubic segment and the two tangent handles as dashed line segments.
/// Drawing space grows downward, so the curve is flipped vertically: the
/// pinned start `(0, 0)` lands on the bottom-left corner of the bounds and the
/// pinned end `(1, 1)` on the top-right.
///
/// # Examples
///
/// ```
/// use easewright::{CurveGeometry, Point, Rect, TimingCurve};
///
/// let curve = TimingCurve::new(0.25, 0.1, 0.25, 1.0);
/// let geometry = CurveGeometry::project(&curve, Rect::from_size(200.0, 100.0));
///
/// assert_eq!(geometry.control_points()[0], Point::new(0.0, 100.0));
/// assert_eq!(geometry.control_points()[3], Point::new(200.0, 0.0));
/// assert!(!geometry.curve_path().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGeometry {
    control_points: [Point; 4],
    curve_path: Path,
    tangent_path: Path,
}

impl CurveGeometry {
    /// Geometry with nothing to draw.
    ///
    /// Renderers should replace whatever they drew before with these empty
    /// paths.
    pub fn empty() -> Self {
        Self {
            control_points: [Point::ZERO; 4],
            curve_path: Path::new(),
            tangent_path: Path::new().with_stroke(StrokeStyle::HANDLE_DASH),
        }
    }

    /// Maps `curve` into `bounds`.
    ///
    /// Each unit-square control point `(x, y)` becomes
    /// `(origin.x + x * width, origin.y + (1 - y) * height)`. A zero-sized
    /// rectangle collapses every point onto its origin.
    pub fn project(curve: &TimingCurve, bounds: Rect) -> Self {
        let (p1, p2) = curve.control_points();
        let unit = [Point::ZERO, p1, p2, Point::new(1.0, 1.0)];
        let control_points = unit.map(|p| denormalize(p, bounds));
        let [start, ctrl1, ctrl2, end] = control_points;

        let mut curve_path = Path::new();
        curve_path.move_to(start);
        curve_path.curve_to(ctrl1, ctrl2, end);

        let mut tangent_path = Path::new().with_stroke(StrokeStyle::HANDLE_DASH);
        tangent_path.move_to(start);
        tangent_path.line_to(ctrl1);
        tangent_path.move_to(end);
        tangent_path.line_to(ctrl2);

        Self {
            control_points,
            curve_path,
            tangent_path,
        }
    }

    /// Maps `curve` into `bounds`, or returns [`CurveGeometry::empty`] when
    /// there is no curve.
    pub fn project_optional(curve: Option<&TimingCurve>, bounds: Rect) -> Self {
        match curve {
            Some(curve) => Self::project(curve, bounds),
            None => Self::empty(),
        }
    }

    /// The start point, both handles and the end point, in drawing space.
    pub fn control_points(&self) -> &[Point; 4] {
        &self.control_points
    }

    /// The curve as one cubic segment.
    pub fn curve_path(&self) -> &Path {
        &self.curve_path
    }

    /// Start-to-first-handle and end-to-second-handle segments.
    pub fn tangent_path(&self) -> &Path {
        &self.tangent_path
    }

    pub fn is_empty(&self) -> bool {
        self.curve_path.is_empty() && self.tangent_path.is_empty()
    }
}

impl Default for CurveGeometry {
    fn default() -> Self {
        Self::empty()
    }
}

fn denormalize(point: Point, bounds: Rect) -> Point {
    Point::new(
        bounds.origin.x + point.x * bounds.width(),
        bounds.origin.y + (1.0 - point.y) * bounds.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathElement;
    use crate::Preset;

    #[test]
    fn test_project_flips_y() {
        let curve = TimingCurve::new(0.25, 0.0, 0.75, 1.0);
        let geometry = CurveGeometry::project(&curve, Rect::from_size(100.0, 50.0));

        assert_eq!(
            geometry.control_points(),
            &[
                Point::new(0.0, 50.0),
                Point::new(25.0, 50.0),
                Point::new(75.0, 0.0),
                Point::new(100.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_project_translates_by_origin() {
        let curve = Preset::Linear.curve();
        let geometry = CurveGeometry::project(&curve, Rect::new(10.0, 20.0, 100.0, 100.0));

        assert_eq!(geometry.control_points()[0], Point::new(10.0, 120.0));
        assert_eq!(geometry.control_points()[3], Point::new(110.0, 20.0));
    }

    #[test]
    fn test_curve_path_shape() {
        let curve = TimingCurve::default();
        let geometry = CurveGeometry::project(&curve, Rect::from_size(1.0, 1.0));
        let [p0, p1, p2, p3] = *geometry.control_points();

        assert_eq!(
            geometry.curve_path().elements(),
            &[
                PathElement::MoveTo(p0),
                PathElement::CurveTo { ctrl1: p1, ctrl2: p2, to: p3 },
            ]
        );
        assert_eq!(geometry.curve_path().stroke(), StrokeStyle::Solid);
    }

    #[test]
    fn test_tangent_path_is_two_dashed_segments() {
        let curve = TimingCurve::new(0.1, 0.7, 1.0, 0.1);
        let geometry = CurveGeometry::project(&curve, Rect::from_size(10.0, 10.0));
        let [p0, p1, p2, p3] = *geometry.control_points();

        assert_eq!(
            geometry.tangent_path().elements(),
            &[
                PathElement::MoveTo(p0),
                PathElement::LineTo(p1),
                PathElement::MoveTo(p3),
                PathElement::LineTo(p2),
            ]
        );
        assert_eq!(geometry.tangent_path().stroke(), StrokeStyle::HANDLE_DASH);
    }

    #[test]
    fn test_overshoot_projects_outside_bounds() {
        let curve = TimingCurve::new(0.25, 1.5, 0.75, -0.5);
        let geometry = CurveGeometry::project(&curve, Rect::from_size(100.0, 100.0));

        assert_eq!(geometry.control_points()[1], Point::new(25.0, -50.0));
        assert_eq!(geometry.control_points()[2], Point::new(75.0, 150.0));
    }

    #[test]
    fn test_zero_size_bounds_collapse() {
        let curve = TimingCurve::default();
        let geometry = CurveGeometry::project(&curve, Rect::new(5.0, 5.0, 0.0, 0.0));

        for point in geometry.control_points() {
            assert_eq!(*point, Point::new(5.0, 5.0));
        }
        assert!(!geometry.is_empty());
    }

    #[test]
    fn test_project_is_deterministic() {
        let curve = TimingCurve::new(0.2, 0.9, 0.4, 0.1);
        let bounds = Rect::new(3.0, 4.0, 320.0, 180.0);
        assert_eq!(
            CurveGeometry::project(&curve, bounds),
            CurveGeometry::project(&curve, bounds)
        );
    }

    #[test]
    fn test_project_without_curve_clears_paths() {
        let geometry = CurveGeometry::project_optional(None, Rect::from_size(100.0, 100.0));
        assert!(geometry.is_empty());
        assert!(geometry.curve_path().is_empty());
        assert!(geometry.tangent_path().is_empty());
    }

    #[test]
    fn test_project_optional_with_curve() {
        let curve = Preset::EaseIn.curve();
        let bounds = Rect::from_size(64.0, 64.0);
        assert_eq!(
            CurveGeometry::project_optional(Some(&curve), bounds),
            curve.project(bounds)
        );
    }
}
