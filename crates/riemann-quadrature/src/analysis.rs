//! Error Analyzer
//!
//! Compares an approximation against an exact value, typically obtained from
//! an antiderivative as F(b) − F(a).

use crate::dispatch::QuadratureDispatcher;
use crate::result::{EvaluationResult, QuadratureResult};
use crate::rule::QuadratureRule;
use crate::validate::DEGENERATE_TOLERANCE;

/// Absolute and relative error of an approximation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorEstimate {
    /// The exact reference value.
    pub exact: f64,
    /// `|approximation - exact|`.
    pub absolute: f64,
    /// `absolute / |exact|`, or `absolute` itself when `|exact|` is within
    /// tolerance of zero.
    pub relative: f64,
}

impl ErrorEstimate {
    /// Computes the error of `approximation` against `exact`, treating
    /// `|exact| <= DEGENERATE_TOLERANCE` as zero.
    pub fn between(approximation: f64, exact: f64) -> Self {
        Self::within(approximation, exact, DEGENERATE_TOLERANCE)
    }

    /// Like [`between`](Self::between) with a caller-chosen zero tolerance.
    pub fn within(approximation: f64, exact: f64, tolerance: f64) -> Self {
        let absolute = (approximation - exact).abs();
        let relative = if exact.abs() > tolerance {
            absolute / exact.abs()
        } else {
            absolute
        };
        Self {
            exact,
            absolute,
            relative,
        }
    }
}

impl EvaluationResult {
    /// Builds an evaluation from a quadrature result and an optional exact value.
    pub fn from_quadrature(
        result: &QuadratureResult,
        method: QuadratureRule,
        exact: Option<f64>,
    ) -> Self {
        let estimate = exact.map(|exact| ErrorEstimate::between(result.approximation, exact));
        Self::from_estimate(result, method, estimate)
    }

    fn from_estimate(
        result: &QuadratureResult,
        method: QuadratureRule,
        estimate: Option<ErrorEstimate>,
    ) -> Self {
        let evaluation = Self::new(result.approximation, method, result.n);
        match estimate {
            Some(estimate) => evaluation.with_estimate(estimate),
            None => evaluation,
        }
    }

    /// Fills in the error fields from an estimate.
    pub fn with_estimate(mut self, estimate: ErrorEstimate) -> Self {
        self.exact_value = Some(estimate.exact);
        self.absolute_error = Some(estimate.absolute);
        self.relative_error = Some(estimate.relative);
        self
    }
}

impl QuadratureDispatcher {
    /// Approximates the integral and, given `exact_integral(a, b)`, its error.
    ///
    /// Never fails: without an exact function the error fields stay `None`.
    /// The relative error falls back to the absolute error when `|exact|` is
    /// within the configured `degenerate_tolerance` of zero.
    pub fn evaluate<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        n: usize,
        rule: QuadratureRule,
        exact_integral: Option<&dyn Fn(f64, f64) -> f64>,
    ) -> EvaluationResult {
        let result = self.compute(f, a, b, n, rule);
        let tolerance = self.options().degenerate_tolerance;
        let estimate = exact_integral
            .map(|exact| ErrorEstimate::within(result.approximation, exact(a, b), tolerance));
        EvaluationResult::from_estimate(&result, rule, estimate)
    }
}
