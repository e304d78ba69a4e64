//! Cubic-bezier timing curve and its evaluation.

use std::fmt;
use std::str::FromStr;

use super::preset::{Preset, UnknownPresetError};
use super::solver::{self, SolverOptions, UnitCubic};
use crate::Point;

/// Error returned by [`TimingCurve::try_evaluate`] when the root finder runs
/// out of iterations.
///
/// Carries the best-effort value: the curve's y at the last bisection
/// midpoint. [`TimingCurve::evaluate`] logs this case and returns that value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonConvergentEvaluation {
    /// The time that was being evaluated
    pub input: f64,
    /// Progress at the last bisection midpoint
    pub best_effort: f64,
    /// Iterations spent before giving up
    pub iterations: u32,
}

impl fmt::Display for NonConvergentEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timing curve evaluation at t={} did not converge after {} iterations (best effort {})",
            self.input, self.iterations, self.best_effort
        )
    }
}

impl std::error::Error for NonConvergentEvaluation {}

/// Error type for parsing a timing curve from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCurveError {
    /// The input looked like a preset name but is not one
    UnknownPreset(UnknownPresetError),
    /// The input is not a preset name or a `cubic-bezier(...)` expression
    Malformed(String),
    /// A control-point coordinate is not a finite number
    InvalidNumber(String),
}

impl fmt::Display for ParseCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCurveError::UnknownPreset(e) => write!(f, "{}", e),
            ParseCurveError::Malformed(s) => write!(f, "malformed timing curve: '{}'", s),
            ParseCurveError::InvalidNumber(s) => write!(f, "invalid control point value: '{}'", s),
        }
    }
}

impl std::error::Error for ParseCurveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseCurveError::UnknownPreset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownPresetError> for ParseCurveError {
    fn from(e: UnknownPresetError) -> Self {
        ParseCurveError::UnknownPreset(e)
    }
}

/// A timing function: a cubic bezier from `(0, 0)` to `(1, 1)` shaped by two
/// interior control points.
///
/// The x axis is the elapsed-time fraction and the y axis the eased-progress
/// fraction. Control points are not clamped. With an x coordinate outside
/// `[0, 1]` the curve may fold back on itself in x, in which case
/// [`evaluate`](TimingCurve::evaluate) returns the progress at one of the
/// matching points; y outside `[0, 1]` produces overshoot.
///
/// Curves are immutable. Build a new one whenever a control point changes.
///
/// # Examples
///
/// ```
/// use easewright::TimingCurve;
///
/// let curve = TimingCurve::new(0.42, 0.0, 0.58, 1.0);
/// assert_eq!(curve.evaluate(0.0), 0.0);
/// assert!((curve.evaluate(0.5) - 0.5).abs() < 1e-4);
/// assert_eq!(curve.evaluate(1.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    p1: Point,
    p2: Point,
}

impl TimingCurve {
    /// Creates a timing curve from the coordinates of its two interior
    /// control points.
    ///
    /// Any finite values are accepted.
    ///
    /// # Arguments
    ///
    /// * `x1`, `y1` - First control point, the handle leaving `(0, 0)`
    /// * `x2`, `y2` - Second control point, the handle entering `(1, 1)`
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }

    /// Creates a timing curve from a preset identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use easewright::{Point, TimingCurve};
    ///
    /// let curve = TimingCurve::from_preset("default").unwrap();
    /// assert_eq!(curve.control_points(), (Point::new(0.25, 0.1), Point::new(0.25, 1.0)));
    ///
    /// assert!(TimingCurve::from_preset("bogus").is_err());
    /// ```
    pub fn from_preset(name: &str) -> Result<Self, UnknownPresetError> {
        Preset::from_name(name).map(Preset::curve)
    }

    /// Returns the two interior control points.
    pub fn control_points(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    /// Returns one of the four bezier control points.
    ///
    /// Index 0 is the pinned start `(0, 0)`, 1 and 2 are the interior points
    /// and 3 is the pinned end `(1, 1)`.
    pub fn control_point(&self, index: usize) -> Option<Point> {
        match index {
            0 => Some(Point::ZERO),
            1 => Some(self.p1),
            2 => Some(self.p2),
            3 => Some(Point::new(1.0, 1.0)),
            _ => None,
        }
    }

    /// Returns true when time maps to a single progress value, i.e. both
    /// control points have x in `[0, 1]`.
    pub fn is_monotonic(&self) -> bool {
        (0.0..=1.0).contains(&self.p1.x) && (0.0..=1.0).contains(&self.p2.x)
    }

    /// Evaluates eased progress at normalized time `t`.
    ///
    /// `t <= 0` returns exactly `0.0` and `t >= 1` exactly `1.0`. If the
    /// root finder does not converge, a warning is logged and the progress at
    /// its last estimate is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use easewright::TimingCurve;
    ///
    /// let linear = TimingCurve::from_preset("linear").unwrap();
    /// assert!((linear.evaluate(0.3) - 0.3).abs() < 1e-4);
    /// ```
    pub fn evaluate(&self, t: f64) -> f64 {
        self.evaluate_with(t, &SolverOptions::default())
    }

    /// Like [`evaluate`](TimingCurve::evaluate), with explicit solver options.
    pub fn evaluate_with(&self, t: f64, options: &SolverOptions) -> f64 {
        self.try_evaluate_with(t, options).unwrap_or_else(|miss| {
            log::warn!("{miss}");
            miss.best_effort
        })
    }

    /// Evaluates eased progress at `t`, reporting non-convergence as an error.
    pub fn try_evaluate(&self, t: f64) -> Result<f64, NonConvergentEvaluation> {
        self.try_evaluate_with(t, &SolverOptions::default())
    }

    /// Like [`try_evaluate`](TimingCurve::try_evaluate), with explicit solver
    /// options.
    pub fn try_evaluate_with(
        &self,
        t: f64,
        options: &SolverOptions,
    ) -> Result<f64, NonConvergentEvaluation> {
        if t.is_nan() {
            return Ok(f64::NAN);
        }
        if t <= 0.0 {
            return Ok(0.0);
        }
        if t >= 1.0 {
            return Ok(1.0);
        }

        let x = UnitCubic::new(self.p1.x, self.p2.x);
        let y = UnitCubic::new(self.p1.y, self.p2.y);

        match solver::solve_parameter(&x, t, options) {
            Ok(u) => Ok(y.sample(u)),
            Err(miss) => Err(NonConvergentEvaluation {
                input: t,
                best_effort: y.sample(miss.parameter),
                iterations: miss.iterations,
            }),
        }
    }

    /// Projects this curve into `bounds` for drawing.
    ///
    /// Shorthand for [`CurveGeometry::project`](crate::CurveGeometry::project).
    #[cfg(feature = "geometry")]
    pub fn project(&self, bounds: crate::Rect) -> crate::CurveGeometry {
        crate::CurveGeometry::project(self, bounds)
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Preset::Default.curve()
    }
}

impl fmt::Display for TimingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

impl FromStr for TimingCurve {
    type Err = ParseCurveError;

    /// Parses a preset identifier or a `cubic-bezier(x1, y1, x2, y2)`
    /// expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use easewright::TimingCurve;
    ///
    /// let a: TimingCurve = "ease-in".parse().unwrap();
    /// let b: TimingCurve = "cubic-bezier(0.42, 0, 1, 1)".parse().unwrap();
    /// assert_eq!(a, b);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let Some(args) = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            if s.contains(['(', ')', ',']) {
                return Err(ParseCurveError::Malformed(s.to_string()));
            }
            return Ok(Preset::from_name(s)?.curve());
        };

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let [x1, y1, x2, y2] = parts.as_slice() else {
            return Err(ParseCurveError::Malformed(s.to_string()));
        };

        let parse = |part: &&str| -> Result<f64, ParseCurveError> {
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseCurveError::InvalidNumber(part.to_string()))
        };

        Ok(TimingCurve::new(
            parse(x1)?,
            parse(y1)?,
            parse(x2)?,
            parse(y2)?,
        ))
    }
}
