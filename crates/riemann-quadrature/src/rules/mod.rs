//! Rule Implementations
//!
//! Each rule turns `(f, a, b, n)` into a `QuadratureResult`: one signed area
//! and one sample per subinterval, with `Δx = (b - a) / n`. A reversed
//! interval gives a negative Δx, which flips the sign of every area.
//!
//! # Available Rules
//!
//! - **Left / Right / Midpoint**: rectangles, sampled at a fixed offset in
//!   each subinterval
//! - **Trapezoidal**: trapezoids through both edges; exact for affine f
//! - **Simpson**: composite 1/3 rule over an even number of subintervals
//!
//! Every rule clamps `n` into `[MIN_SUBDIVISIONS, MAX_SUBDIVISIONS]` before
//! sampling, so `result.n` is never zero. Degenerate intervals are not
//! special-cased here; `QuadratureDispatcher` short-circuits them.

pub mod rectangle;
pub mod simpson;
pub mod trapezoid;

pub use rectangle::{left_sum, midpoint_sum, rectangle_sum, right_sum};
pub use simpson::{even_subdivisions, simpson};
pub use trapezoid::trapezoidal;

use crate::result::{QuadratureResult, SamplePoint};

/// Accumulates per-subinterval areas and samples in iteration order.
#[derive(Debug)]
pub(crate) struct SumBuilder {
    approximation: f64,
    areas: Vec<f64>,
    sample_points: Vec<SamplePoint>,
}

impl SumBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            approximation: 0.0,
            areas: Vec::with_capacity(n),
            sample_points: Vec::with_capacity(n),
        }
    }

    /// Records a sample and adds its area to the running total.
    pub(crate) fn push(&mut self, sample: SamplePoint, area: f64) {
        self.approximation += area;
        self.areas.push(area);
        self.sample_points.push(sample);
    }

    /// Records a display-only sample without touching the running total.
    pub(crate) fn push_display(&mut self, sample: SamplePoint, area: f64) {
        self.areas.push(area);
        self.sample_points.push(sample);
    }

    pub(crate) fn finish(self, n: usize, delta_x: f64) -> QuadratureResult {
        let approximation = self.approximation;
        self.finish_with(approximation, n, delta_x)
    }

    pub(crate) fn finish_with(
        self,
        approximation: f64,
        n: usize,
        delta_x: f64,
    ) -> QuadratureResult {
        QuadratureResult {
            approximation,
            areas: self.areas,
            sample_points: self.sample_points,
            n,
            delta_x,
        }
    }
}

/// Signed subinterval width. `n` has already been clamped by the caller.
#[inline]
pub(crate) fn step(a: f64, b: f64, n: usize) -> f64 {
    (b - a) / n as f64
}
