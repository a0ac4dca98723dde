//! Composite trapezoidal rule.

use super::{step, SumBuilder};
use crate::result::{QuadratureResult, SamplePoint};
use crate::validate::clamp_subdivisions;

/// Trapezoidal rule: area `(f(l) + f(r)) / 2 · Δx` on each subinterval.
///
/// The displayed sample is the left edge; `right_y` carries f at the right
/// edge so a renderer can draw the trapezoid. Second order in general, and
/// exact (up to rounding) for any affine integrand at every n.
///
/// Interior nodes are evaluated twice, once as a right edge and once as the
/// next left edge, keeping each subinterval self-contained.
pub fn trapezoidal<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> QuadratureResult {
    let n = clamp_subdivisions(n);
    let delta_x = step(a, b, n);
    let mut sum = SumBuilder::with_capacity(n);

    for i in 0..n {
        let left_x = a + i as f64 * delta_x;
        let right_x = left_x + delta_x;
        let left_y = f(left_x);
        let right_y = f(right_x);
        let area = 0.5 * (left_y + right_y) * delta_x;
        let sample = SamplePoint::new(left_x, left_y, left_x, delta_x).with_right_y(right_y);
        sum.push(sample, area);
    }

    sum.finish(n, delta_x)
}
