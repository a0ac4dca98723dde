//! Convergence sweeps and side-by-side rule comparison.
//!
//! An animation that steps n, or a table of errors per rule, is just a
//! sequence of independent evaluations; these helpers build that sequence.

use crate::dispatch::QuadratureDispatcher;
use crate::result::EvaluationResult;
use crate::rule::QuadratureRule;

impl QuadratureDispatcher {
    /// Evaluates `rule` once per requested count, in order.
    ///
    /// Each count is validated on its own, so the reported `n` values may
    /// repeat (e.g. after clamping) or differ from the request.
    pub fn convergence_sweep<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        rule: QuadratureRule,
        counts: &[usize],
        exact_integral: Option<&dyn Fn(f64, f64) -> f64>,
    ) -> Vec<EvaluationResult> {
        counts
            .iter()
            .map(|&n| self.evaluate(f, a, b, n, rule, exact_integral))
            .collect()
    }

    /// Evaluates every rule at the same `n`, in `QuadratureRule::ALL` order.
    pub fn compare_rules<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        n: usize,
        exact_integral: Option<&dyn Fn(f64, f64) -> f64>,
    ) -> Vec<EvaluationResult> {
        QuadratureRule::ALL
            .iter()
            .map(|&rule| self.evaluate(f, a, b, n, rule, exact_integral))
            .collect()
    }
}

/// Empirical convergence order between a coarse and a fine evaluation.
///
/// With errors e₁ at n₁ and e₂ at n₂, returns `ln(e₁/e₂) / ln(n₂/n₁)`.
/// Returns `None` if either error is missing, zero or non-finite, or if the
/// two counts are equal.
pub fn observed_order(coarse: &EvaluationResult, fine: &EvaluationResult) -> Option<f64> {
    let e1 = coarse.absolute_error?;
    let e2 = fine.absolute_error?;
    let usable = |e: f64| e.is_finite() && e > 0.0;
    if !usable(e1) || !usable(e2) || coarse.n == fine.n {
        return None;
    }
    Some((e1 / e2).ln() / (fine.n as f64 / coarse.n as f64).ln())
}
