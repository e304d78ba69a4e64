//! Plain 2D value types shared by the timing and geometry modules.

/// A point in 2D space.
///
/// Used both for control points in the unit square and for projected points
/// in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in drawing space.
///
/// Drawing space has its y axis growing downward, so `origin` is the top-left
/// corner.
///
/// # Examples
///
/// ```
/// use easewright::Rect;
///
/// let bounds = Rect::from_size(200.0, 100.0);
/// assert_eq!(bounds.width(), 200.0);
/// assert_eq!(bounds.origin.x, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle anchored at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_tuple_conversion() {
        let p: Point = (0.25, 0.1).into();
        assert_eq!(p, Point::new(0.25, 0.1));

        let (x, y): (f64, f64) = p.into();
        assert_eq!(x, 0.25);
        assert_eq!(y, 0.1);
    }

    #[test]
    fn test_rect_from_size() {
        let r = Rect::from_size(320.0, 240.0);
        assert_eq!(r.origin, Point::ZERO);
        assert_eq!(r.width(), 320.0);
        assert_eq!(r.height(), 240.0);
    }

    #[test]
    fn test_default_rect_is_degenerate() {
        let r = Rect::default();
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
    }
}
