//! Rectangle rules: left, right and midpoint Riemann sums.
//!
//! All three share one loop and differ only in where inside the subinterval
//! the integrand is sampled.

use super::{step, SumBuilder};
use crate::result::{QuadratureResult, SamplePoint};
use crate::validate::clamp_subdivisions;

/// Riemann sum sampling f at `a + (i + offset)·Δx` in subinterval `i`.
///
/// `offset` is 0 for left, 1 for right and 0.5 for midpoint sums. Each area
/// is `f(x)·Δx`, so `areas` sums to `approximation`. `n` is clamped first.
pub fn rectangle_sum<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    offset: f64,
) -> QuadratureResult {
    let n = clamp_subdivisions(n);
    let delta_x = step(a, b, n);
    let mut sum = SumBuilder::with_capacity(n);

    for i in 0..n {
        let left_x = a + i as f64 * delta_x;
        let x = a + (i as f64 + offset) * delta_x;
        let y = f(x);
        sum.push(SamplePoint::new(x, y, left_x, delta_x), y * delta_x);
    }

    sum.finish(n, delta_x)
}

/// Left Riemann sum. First order; underestimates increasing integrands.
pub fn left_sum<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> QuadratureResult {
    rectangle_sum(f, a, b, n, 0.0)
}

/// Right Riemann sum. First order; overestimates increasing integrands.
pub fn right_sum<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> QuadratureResult {
    rectangle_sum(f, a, b, n, 1.0)
}

/// Midpoint sum. Second order.
pub fn midpoint_sum<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> QuadratureResult {
    rectangle_sum(f, a, b, n, 0.5)
}
