//! Free-function entry points using the default options.
//!
//! # Example
//!
//! ```
//! use riemann_quadrature::{compute_quadrature, evaluate, QuadratureRule};
//!
//! // ∫₀² x² dx with four midpoint rectangles
//! let result = compute_quadrature(&|x| x * x, 0.0, 2.0, 4, QuadratureRule::Midpoint);
//! assert!((result.approximation - 2.625).abs() < 1e-12);
//!
//! let exact = |a: f64, b: f64| (b.powi(3) - a.powi(3)) / 3.0;
//! let evaluation = evaluate(&|x| x * x, 0.0, 2.0, 4, QuadratureRule::Midpoint, Some(&exact));
//! assert!(evaluation.absolute_error.unwrap() < 0.05);
//! ```

use crate::dispatch::QuadratureDispatcher;
use crate::error::QuadratureError;
use crate::result::{EvaluationResult, QuadratureResult};
use crate::rule::QuadratureRule;

/// Approximates ∫ₐᵇ f(x) dx with `rule` over `n` subintervals.
///
/// See [`QuadratureDispatcher::compute`] for the validation applied to `n`
/// and to the interval.
pub fn compute_quadrature<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    rule: QuadratureRule,
) -> QuadratureResult {
    QuadratureDispatcher::new().compute(f, a, b, n, rule)
}

/// Like [`compute_quadrature`] with the rule given by name.
///
/// With the default options an unknown name integrates with the midpoint
/// rule, so this never returns an error; use a dispatcher configured with
/// `UnknownRulePolicy::Reject` to surface unknown names.
pub fn compute_quadrature_named<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    rule: &str,
) -> Result<QuadratureResult, QuadratureError> {
    QuadratureDispatcher::new().compute_named(f, a, b, n, rule)
}

/// Approximates the integral and its error against `exact_integral(a, b)`.
pub fn evaluate<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    rule: QuadratureRule,
    exact_integral: Option<&dyn Fn(f64, f64) -> f64>,
) -> EvaluationResult {
    QuadratureDispatcher::new().evaluate(f, a, b, n, rule, exact_integral)
}
