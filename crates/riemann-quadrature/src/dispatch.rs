//! Quadrature dispatcher.
//!
//! Validates the request, short-circuits degenerate intervals, and routes to
//! the selected rule implementation.

use log::{debug, trace, warn};

use crate::error::QuadratureError;
use crate::options::{QuadratureOptions, UnknownRulePolicy};
use crate::result::QuadratureResult;
use crate::rule::QuadratureRule;
use crate::rules::{even_subdivisions, left_sum, midpoint_sum, right_sum, simpson, trapezoidal};

/// Dispatcher that validates input and routes to a rule implementation.
#[derive(Clone, Debug, Default)]
pub struct QuadratureDispatcher {
    options: QuadratureOptions,
}

impl QuadratureDispatcher {
    /// Creates a new dispatcher with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher with custom options.
    pub fn with_options(options: QuadratureOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    pub fn options(&self) -> &QuadratureOptions {
        &self.options
    }

    /// Approximates ∫ₐᵇ f(x) dx with `rule` over `n` subintervals.
    ///
    /// `n` is clamped into the configured range first. A degenerate interval
    /// returns a zero result carrying the clamped `n` without evaluating f.
    /// Simpson may raise `n` by one more to make it even; the returned
    /// `n` is always the count actually used.
    pub fn compute<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        n: usize,
        rule: QuadratureRule,
    ) -> QuadratureResult {
        let clamped = self.options.clamp(n);
        if clamped != n {
            debug!("subdivision count {n} clamped to {clamped}");
        }

        if self.options.is_degenerate(a, b) {
            debug!("degenerate interval [{a}, {b}]; returning zero");
            return QuadratureResult::degenerate(clamped);
        }

        if rule.requires_even_subdivisions() && even_subdivisions(clamped) != clamped {
            debug!(
                "{rule} needs an even subdivision count; using {} instead of {clamped}",
                clamped + 1
            );
        }

        let result = match rule {
            QuadratureRule::Left => left_sum(f, a, b, clamped),
            QuadratureRule::Right => right_sum(f, a, b, clamped),
            QuadratureRule::Midpoint => midpoint_sum(f, a, b, clamped),
            QuadratureRule::Trapezoidal => trapezoidal(f, a, b, clamped),
            QuadratureRule::Simpson => simpson(f, a, b, clamped),
        };

        trace!(
            "{rule} over [{a}, {b}] with n = {}: {}",
            result.n,
            result.approximation
        );
        result
    }

    /// Same as [`compute`](Self::compute) with a real-valued count, floored
    /// after clamping.
    pub fn compute_real<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        n: f64,
        rule: QuadratureRule,
    ) -> QuadratureResult {
        self.compute(f, a, b, self.options.clamp_real(n), rule)
    }

    /// Resolves a textual rule name according to the unknown-rule policy.
    pub fn resolve_rule(&self, name: &str) -> Result<QuadratureRule, QuadratureError> {
        match name.parse::<QuadratureRule>() {
            Ok(rule) => Ok(rule),
            Err(err) => match self.options.unknown_rule {
                UnknownRulePolicy::FallbackToMidpoint => {
                    warn!("{err}; falling back to midpoint");
                    Ok(QuadratureRule::Midpoint)
                }
                UnknownRulePolicy::Reject => Err(err),
            },
        }
    }

    /// Like [`compute`](Self::compute), selecting the rule by name.
    ///
    /// # Errors
    ///
    /// Returns `QuadratureError::UnknownRule` only under
    /// `UnknownRulePolicy::Reject`.
    pub fn compute_named<F: Fn(f64) -> f64>(
        &self,
        f: &F,
        a: f64,
        b: f64,
        n: usize,
        rule: &str,
    ) -> Result<QuadratureResult, QuadratureError> {
        let rule = self.resolve_rule(rule)?;
        Ok(self.compute(f, a, b, n, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn test_degenerate_interval() {
        let dispatcher = QuadratureDispatcher::new();
        let result = dispatcher.compute(&square, 5.0, 5.0, 50, QuadratureRule::Midpoint);
        assert_eq!(result, QuadratureResult::degenerate(50));
    }

    #[test]
    fn test_degenerate_reports_clamped_n() {
        let dispatcher = QuadratureDispatcher::new();
        let result = dispatcher.compute(&square, 1.0, 1.0, 0, QuadratureRule::Simpson);
        assert_eq!(result.n, 1);
        assert!(result.is_degenerate());
    }

    #[test]
    fn test_degenerate_does_not_evaluate() {
        let dispatcher = QuadratureDispatcher::new();
        let result = dispatcher.compute(
            &|_| -> f64 { panic!("integrand must not be evaluated") },
            2.0,
            2.0 + 1e-12,
            10,
            QuadratureRule::Left,
        );
        assert_eq!(result.approximation, 0.0);
    }

    #[test]
    fn test_clamping() {
        let dispatcher = QuadratureDispatcher::new();
        assert_eq!(dispatcher.compute(&square, 0.0, 1.0, 0, QuadratureRule::Left).n, 1);
        assert_eq!(dispatcher.compute(&square, 0.0, 1.0, 10_000, QuadratureRule::Left).n, 200);
    }

    #[test]
    fn test_simpson_even_correction() {
        let dispatcher = QuadratureDispatcher::new();
        let result = dispatcher.compute(&square, 0.0, 1.0, 5, QuadratureRule::Simpson);
        assert_eq!(result.n, 6);
        assert_eq!(dispatcher.compute(&square, 0.0, 1.0, 199, QuadratureRule::Simpson).n, 200);
    }

    #[test]
    fn test_simpson_past_odd_custom_maximum() {
        let options = QuadratureOptions::default().with_subdivision_range(1, 11);
        let dispatcher = QuadratureDispatcher::with_options(options);
        let result = dispatcher.compute(&square, 0.0, 1.0, 500, QuadratureRule::Simpson);
        assert_eq!(result.n, 12);
    }

    #[test]
    fn test_custom_maximum_cannot_exceed_global_cap() {
        let options = QuadratureOptions {
            max_subdivisions: 1_001,
            ..QuadratureOptions::default()
        };
        let dispatcher = QuadratureDispatcher::with_options(options);
        for rule in QuadratureRule::ALL {
            let result = dispatcher.compute(&square, 0.0, 1.0, 5_000, rule);
            assert_eq!(result.n, 200, "{rule}");
        }
    }

    #[test]
    fn test_every_rule_dispatches() {
        let dispatcher = QuadratureDispatcher::new();
        let expected = [
            (QuadratureRule::Left, 0.0),
            (QuadratureRule::Right, 1.0),
            (QuadratureRule::Midpoint, 0.25),
            (QuadratureRule::Trapezoidal, 0.5),
            (QuadratureRule::Simpson, 1.0 / 3.0),
        ];
        for (rule, value) in expected {
            let result = dispatcher.compute(&square, 0.0, 1.0, 1, rule);
            assert!(
                (result.approximation - value).abs() < 1e-12,
                "{rule}: {}",
                result.approximation
            );
        }
    }

    #[test]
    fn test_compute_real_floors() {
        let dispatcher = QuadratureDispatcher::new();
        let result = dispatcher.compute_real(&square, 0.0, 1.0, 12.8, QuadratureRule::Left);
        assert_eq!(result.n, 12);
    }

    #[test]
    fn test_unknown_name_falls_back_to_midpoint() {
        let dispatcher = QuadratureDispatcher::new();
        let named = dispatcher.compute_named(&square, 0.0, 2.0, 4, "gauss").unwrap();
        let midpoint = dispatcher.compute(&square, 0.0, 2.0, 4, QuadratureRule::Midpoint);
        assert_eq!(named, midpoint);
    }

    #[test]
    fn test_unknown_name_rejected_when_configured() {
        let options = QuadratureOptions::default().with_unknown_rule(UnknownRulePolicy::Reject);
        let dispatcher = QuadratureDispatcher::with_options(options);
        let err = dispatcher.compute_named(&square, 0.0, 2.0, 4, "gauss").unwrap_err();
        assert_eq!(err, QuadratureError::UnknownRule("gauss".to_string()));
        assert!(dispatcher.compute_named(&square, 0.0, 2.0, 4, "simpson").is_ok());
    }
}
