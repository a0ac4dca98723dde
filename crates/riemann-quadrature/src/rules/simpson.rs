//! Composite Simpson's 1/3 rule.
//!
//! The approximation is the true weighted sum
//!
//! (Δx/3) · [f(x₀) + 4f(x₁) + 2f(x₂) + 4f(x₃) + … + 4f(xₙ₋₁) + f(xₙ)]
//!
//! over an even number of subintervals. The returned samples and areas are a
//! separate midpoint-rectangle picture of each subinterval, since parabolic
//! arcs are not drawn. Those areas therefore do not sum to the approximation.

use super::{step, SumBuilder};
use crate::result::{QuadratureResult, SamplePoint};
use crate::validate::clamp_subdivisions;

/// Rounds an odd subdivision count up to the next even one.
pub fn even_subdivisions(n: usize) -> usize {
    if n % 2 == 1 {
        n + 1
    } else {
        n
    }
}

/// Simpson weight of node `i` out of `0..=n`.
fn weight(i: usize, n: usize) -> f64 {
    if i == 0 || i == n {
        1.0
    } else if i % 2 == 1 {
        4.0
    } else {
        2.0
    }
}

/// Simpson's rule. Fourth order on smooth integrands.
///
/// `n` is clamped, then an odd count is silently raised to `n + 1`; read
/// `result.n` for the count actually used.
pub fn simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, n: usize) -> QuadratureResult {
    let n = even_subdivisions(clamp_subdivisions(n));
    let delta_x = step(a, b, n);

    let weighted: f64 = (0..=n)
        .map(|i| weight(i, n) * f(a + i as f64 * delta_x))
        .sum();
    let approximation = delta_x / 3.0 * weighted;

    let mut display = SumBuilder::with_capacity(n);
    for i in 0..n {
        let left_x = a + i as f64 * delta_x;
        let x = a + (i as f64 + 0.5) * delta_x;
        let y = f(x);
        display.push_display(SamplePoint::new(x, y, left_x, delta_x), y * delta_x);
    }

    display.finish_with(approximation, n, delta_x)
}
