//! Function presets: an integrand bundled with its antiderivative.

use crate::interval::Interval;

/// A named test function with its exact antiderivative.
///
/// `antiderivative` must satisfy `d/dx antiderivative(x) = function(x)` on the
/// preset's view domain. This is a contract on catalog authors; nothing checks
/// it at runtime.
#[derive(Clone, Copy, Debug)]
pub struct FunctionPreset {
    /// Stable identifier used for lookup.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Plain-text formula, e.g. `"x^2"`.
    pub formula: &'static str,
    /// The integrand f.
    pub function: fn(f64) -> f64,
    /// An antiderivative F with F' = f.
    pub antiderivative: fn(f64) -> f64,
    /// Integration limits shown when the preset is first selected.
    pub default_bounds: Interval,
    /// Horizontal extent of the plot.
    pub view_domain: Interval,
}

impl FunctionPreset {
    /// Evaluates the integrand at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Evaluates the antiderivative at `x`.
    pub fn antiderivative_at(&self, x: f64) -> f64 {
        (self.antiderivative)(x)
    }

    /// Exact value of ∫ₐᵇ f(x) dx, computed as F(b) − F(a).
    ///
    /// No domain check is made: if `[a, b]` straddles a singularity of f the
    /// result is whatever F produces there (possibly NaN or infinite).
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative_at(b) - self.antiderivative_at(a)
    }

    /// Exact integral over the preset's default bounds.
    pub fn default_exact_integral(&self) -> f64 {
        self.exact_integral(self.default_bounds.a, self.default_bounds.b)
    }
}

impl std::fmt::Display for FunctionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (f(x) = {})", self.label, self.formula)
    }
}
