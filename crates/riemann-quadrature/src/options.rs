//! Dispatcher configuration.

use crate::validate::{self, DEGENERATE_TOLERANCE, MAX_SUBDIVISIONS, MIN_SUBDIVISIONS};

/// What to do when a rule is requested by a name that matches no rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownRulePolicy {
    /// Log a warning and integrate with the midpoint rule.
    #[default]
    FallbackToMidpoint,
    /// Return `QuadratureError::UnknownRule`.
    Reject,
}

/// Options for customizing dispatcher behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadratureOptions {
    /// Smallest subdivision count a rule will run with.
    pub min_subdivisions: usize,
    /// Largest subdivision count a rule will run with.
    pub max_subdivisions: usize,
    /// Intervals narrower than this integrate to zero.
    pub degenerate_tolerance: f64,
    /// Handling of unrecognized rule names.
    pub unknown_rule: UnknownRulePolicy,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            min_subdivisions: MIN_SUBDIVISIONS,
            max_subdivisions: MAX_SUBDIVISIONS,
            degenerate_tolerance: DEGENERATE_TOLERANCE,
            unknown_rule: UnknownRulePolicy::default(),
        }
    }
}

impl QuadratureOptions {
    /// Sets the subdivision range, narrowed to lie within
    /// `[MIN_SUBDIVISIONS, MAX_SUBDIVISIONS]`.
    pub fn with_subdivision_range(mut self, min: usize, max: usize) -> Self {
        self.min_subdivisions = min.clamp(MIN_SUBDIVISIONS, MAX_SUBDIVISIONS);
        self.max_subdivisions = max.min(MAX_SUBDIVISIONS);
        self
    }

    /// Sets the degenerate-interval tolerance.
    pub fn with_degenerate_tolerance(mut self, tolerance: f64) -> Self {
        self.degenerate_tolerance = tolerance;
        self
    }

    /// Sets the unknown-rule policy.
    pub fn with_unknown_rule(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rule = policy;
        self
    }

    /// Clamps `n` into the configured subdivision range.
    pub fn clamp(&self, n: usize) -> usize {
        let (min, max) = self.subdivision_bounds();
        validate::clamp_in(n, min, max)
    }

    /// Clamps and floors a real-valued subdivision request.
    pub fn clamp_real(&self, n: f64) -> usize {
        let (min, max) = self.subdivision_bounds();
        validate::clamp_real_in(n, min, max)
    }

    // The fields are public, so they are re-checked against the global range.
    fn subdivision_bounds(&self) -> (usize, usize) {
        (
            self.min_subdivisions.clamp(MIN_SUBDIVISIONS, MAX_SUBDIVISIONS),
            self.max_subdivisions.min(MAX_SUBDIVISIONS),
        )
    }

    /// Returns true if `[a, b]` is narrower than the configured tolerance.
    pub fn is_degenerate(&self, a: f64, b: f64) -> bool {
        validate::is_degenerate_within(a, b, self.degenerate_tolerance)
    }
}
