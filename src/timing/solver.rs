//! Inverse solve of the x-polynomial of a unit-square cubic bezier.
//!
//! A timing curve is defined as y as a function of x, but the bezier is
//! parameterized by `u`. Evaluating it therefore means finding `u` such that
//! `x(u) == t` first. There is no convenient closed form for arbitrary control
//! points, so this uses a few Newton-Raphson steps and falls back to
//! bisection over `[0, 1]`.

/// Derivatives smaller than this stall Newton-Raphson.
const DERIVATIVE_EPSILON: f64 = 1e-12;

/// Configuration for the root finder used by curve evaluation.
///
/// Both phases have a fixed iteration budget, so evaluation always
/// terminates.
///
/// # Examples
///
/// ```
/// use easewright::{SolverOptions, TimingCurve};
///
/// let precise = SolverOptions::default()
///     .with_tolerance(1e-12)
///     .with_bisection_iterations(128);
///
/// let curve = TimingCurve::new(0.42, 0.0, 0.58, 1.0);
/// assert!((curve.evaluate_with(0.5, &precise) - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    tolerance: f64,
    newton_iterations: u32,
    bisection_iterations: u32,
}

impl SolverOptions {
    /// Default accepted error on x and on the bezier parameter.
    pub const DEFAULT_TOLERANCE: f64 = 1e-7;
    /// Default number of Newton-Raphson steps before bisecting.
    pub const DEFAULT_NEWTON_ITERATIONS: u32 = 8;
    /// Default number of bisection steps.
    pub const DEFAULT_BISECTION_ITERATIONS: u32 = 64;

    /// Sets the accepted absolute error between `x(u)` and the input time,
    /// which also bounds the error in the solved parameter `u`.
    ///
    /// Negative values are treated as zero, which can never be met and
    /// always exhausts the iteration budget.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Sets how many Newton-Raphson steps are tried before bisecting.
    pub fn with_newton_iterations(mut self, iterations: u32) -> Self {
        self.newton_iterations = iterations;
        self
    }

    /// Sets how many bisection steps are tried before giving up.
    pub fn with_bisection_iterations(mut self, iterations: u32) -> Self {
        self.bisection_iterations = iterations;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn newton_iterations(&self) -> u32 {
        self.newton_iterations
    }

    pub fn bisection_iterations(&self) -> u32 {
        self.bisection_iterations
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            newton_iterations: Self::DEFAULT_NEWTON_ITERATIONS,
            bisection_iterations: Self::DEFAULT_BISECTION_ITERATIONS,
        }
    }
}

/// One axis of a cubic bezier pinned at 0 and 1, in polynomial form.
///
/// `f(u) = ((a * u + b) * u + c) * u`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitCubic {
    a: f64,
    b: f64,
    c: f64,
}

impl UnitCubic {
    /// Builds the polynomial from the two interior control values of an axis.
    pub(crate) fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    pub(crate) fn sample(&self, u: f64) -> f64 {
        ((self.a * u + self.b) * u + self.c) * u
    }

    pub(crate) fn derivative(&self, u: f64) -> f64 {
        (3.0 * self.a * u + 2.0 * self.b) * u + self.c
    }
}

/// The root finder ran out of iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NearMiss {
    /// Last bisection midpoint.
    pub parameter: f64,
    /// Total iterations spent across both phases.
    pub iterations: u32,
}

/// Finds `u` in `[0, 1]` with `x(u) == target` within the configured tolerance.
///
/// The tolerance bounds both the residual on x and the error in `u`: bisection
/// also stops once its bracket is narrower than the tolerance.
///
/// `target` must lie in `[0, 1]`. Since `x(0) == 0` and `x(1) == 1`, a root
/// always exists there, and bisection keeps it bracketed even when the curve
/// is not monotonic in x.
pub(crate) fn solve_parameter(
    x: &UnitCubic,
    target: f64,
    options: &SolverOptions,
) -> Result<f64, NearMiss> {
    let tolerance = options.tolerance;
    let mut iterations = 0;

    // Newton-Raphson, seeded at the input time
    let mut u = target;
    for _ in 0..options.newton_iterations {
        iterations += 1;
        let error = x.sample(u) - target;
        let slope = x.derivative(u);
        if is_settled(error, slope, tolerance) {
            return Ok(u);
        }

        if slope.abs() < DERIVATIVE_EPSILON {
            break;
        }

        u -= error / slope;
        if !(0.0..=1.0).contains(&u) {
            break;
        }
    }

    // Bisection, keeping x(lo) < target < x(hi)
    let mut lo = 0.0;
    let mut hi = 1.0;
    u = target;
    for _ in 0..options.bisection_iterations {
        iterations += 1;
        let value = x.sample(u);
        if is_settled(value - target, x.derivative(u), tolerance) {
            return Ok(u);
        }

        if value < target {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);

        if hi - lo < tolerance {
            return Ok(u);
        }
    }

    Err(NearMiss {
        parameter: u,
        iterations,
    })
}

/// A root estimate is settled when both the residual on x and the implied
/// distance to the root in `u` (`error / slope`) are within tolerance.
///
/// Where the slope of x vanishes a tiny residual can still sit far from the
/// root in `u`, so the residual alone is not enough.
fn is_settled(error: f64, slope: f64, tolerance: f64) -> bool {
    error.abs() < tolerance && (error == 0.0 || (error / slope).abs() < tolerance)
}
