//! Result types shared by the rules, the dispatcher and the error analyzer.

use crate::rule::QuadratureRule;

/// Where a rule evaluated the integrand on one subinterval, plus the
/// subinterval's extent for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// Abscissa at which f was evaluated.
    pub x: f64,
    /// f(x).
    pub y: f64,
    /// Left edge of the subinterval (`a + i·Δx`).
    pub left_x: f64,
    /// Signed subinterval width Δx.
    pub width: f64,
    /// f at the right edge; only the trapezoidal rule sets this.
    pub right_y: Option<f64>,
}

impl SamplePoint {
    /// Creates a rectangle-style sample.
    pub fn new(x: f64, y: f64, left_x: f64, width: f64) -> Self {
        Self {
            x,
            y,
            left_x,
            width,
            right_y: None,
        }
    }

    /// Attaches the right-edge value, turning the sample into a trapezoid.
    pub fn with_right_y(mut self, right_y: f64) -> Self {
        self.right_y = Some(right_y);
        self
    }

    /// Right edge of the subinterval.
    pub fn right_x(&self) -> f64 {
        self.left_x + self.width
    }

    /// Returns true if every value a renderer would draw is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.right_y.map_or(true, f64::is_finite)
    }
}

/// Output of a single quadrature computation.
///
/// `areas` and `sample_points` always have `n` entries (none for a degenerate
/// interval). For every rule except Simpson, `areas` sums to `approximation`.
/// Simpson's areas are midpoint rectangles kept for display only.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadratureResult {
    /// Approximate value of ∫ₐᵇ f(x) dx.
    pub approximation: f64,
    /// Signed area attributed to each subinterval.
    pub areas: Vec<f64>,
    /// One sample per subinterval.
    pub sample_points: Vec<SamplePoint>,
    /// Subdivision count actually used; may differ from the request.
    pub n: usize,
    /// Signed subinterval width `(b - a) / n`, or 0 for a degenerate interval.
    pub delta_x: f64,
}

impl QuadratureResult {
    /// The zero-valued result of a degenerate interval.
    pub fn degenerate(n: usize) -> Self {
        Self {
            approximation: 0.0,
            areas: Vec::new(),
            sample_points: Vec::new(),
            n,
            delta_x: 0.0,
        }
    }

    /// Returns true if this is the degenerate short-circuit result.
    pub fn is_degenerate(&self) -> bool {
        self.sample_points.is_empty() && self.delta_x == 0.0
    }

    /// Sum of the per-subinterval areas.
    pub fn area_sum(&self) -> f64 {
        self.areas.iter().sum()
    }

    /// Returns true if the approximation and all samples are finite.
    pub fn is_finite(&self) -> bool {
        self.approximation.is_finite() && self.sample_points.iter().all(SamplePoint::is_finite)
    }

    /// Samples safe to draw, skipping those where f was non-finite.
    pub fn finite_sample_points(&self) -> impl Iterator<Item = &SamplePoint> {
        self.sample_points.iter().filter(|sample| sample.is_finite())
    }
}

/// Approximation paired with its error against an exact reference.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    /// Approximate value of the integral.
    pub approximation: f64,
    /// Exact value, when a reference was supplied.
    pub exact_value: Option<f64>,
    /// `|approximation - exact|`.
    pub absolute_error: Option<f64>,
    /// Absolute error scaled by `|exact|`; equals the absolute error when
    /// `|exact|` is too close to zero to divide by.
    pub relative_error: Option<f64>,
    /// Rule that produced the approximation.
    pub method: QuadratureRule,
    /// Subdivision count actually used.
    pub n: usize,
}

impl EvaluationResult {
    /// Creates a result with no error information.
    pub fn new(approximation: f64, method: QuadratureRule, n: usize) -> Self {
        Self {
            approximation,
            exact_value: None,
            absolute_error: None,
            relative_error: None,
            method,
            n,
        }
    }

    /// Returns true if error fields are populated.
    pub fn has_reference(&self) -> bool {
        self.exact_value.is_some()
    }
}
