//! Entry points that combine catalog presets with quadrature.
//!
//! A preset supplies both the integrand and, through its antiderivative, the
//! exact value used as the error reference.

use log::debug;

use riemann_catalog::{self as catalog, FunctionPreset};
use riemann_quadrature::{EvaluationResult, QuadratureDispatcher, QuadratureResult, QuadratureRule};

use crate::error::RiemannError;

/// Looks up a preset by id.
pub fn lookup_preset(id: &str) -> Option<&'static FunctionPreset> {
    catalog::lookup(id)
}

/// Exact ∫ₐᵇ f(x) dx for preset `id`, via its antiderivative.
pub fn exact_integral_for_preset(id: &str, a: f64, b: f64) -> Option<f64> {
    catalog::exact_integral(id, a, b)
}

/// Approximates the integral of preset `id` over `[a, b]`.
///
/// # Errors
///
/// Returns `RiemannError::Catalog` if no preset has this id.
pub fn quadrature_for_preset(
    id: &str,
    a: f64,
    b: f64,
    n: usize,
    rule: QuadratureRule,
) -> Result<QuadratureResult, RiemannError> {
    let preset = catalog::require(id)?;
    Ok(QuadratureDispatcher::new().compute(&preset.function, a, b, n, rule))
}

/// Approximates the integral of preset `id` and its error against the exact
/// value F(b) − F(a).
///
/// # Errors
///
/// Returns `RiemannError::Catalog` if no preset has this id.
pub fn evaluate_preset(
    id: &str,
    a: f64,
    b: f64,
    n: usize,
    rule: QuadratureRule,
) -> Result<EvaluationResult, RiemannError> {
    let preset = catalog::require(id)?;
    Ok(evaluate_with(&QuadratureDispatcher::new(), preset, a, b, n, rule))
}

/// Like [`evaluate_preset`] over the preset's default bounds.
pub fn evaluate_preset_default(
    id: &str,
    n: usize,
    rule: QuadratureRule,
) -> Result<EvaluationResult, RiemannError> {
    let preset = catalog::require(id)?;
    let bounds = preset.default_bounds;
    Ok(evaluate_with(&QuadratureDispatcher::new(), preset, bounds.a, bounds.b, n, rule))
}

/// Evaluates preset `id` with a rule chosen by name, under the dispatcher's
/// unknown-rule policy.
///
/// This is the shape of a request coming from a controls layer, which holds
/// the preset id, both bounds, n and the rule as plain values.
///
/// # Errors
///
/// Returns `RiemannError::Catalog` for an unknown preset, and
/// `RiemannError::Quadrature` for an unknown rule if the dispatcher rejects
/// unknown names.
pub fn evaluate_preset_named(
    dispatcher: &QuadratureDispatcher,
    id: &str,
    a: f64,
    b: f64,
    n: usize,
    rule: &str,
) -> Result<EvaluationResult, RiemannError> {
    let preset = catalog::require(id)?;
    let rule = dispatcher.resolve_rule(rule)?;
    Ok(evaluate_with(dispatcher, preset, a, b, n, rule))
}

fn evaluate_with(
    dispatcher: &QuadratureDispatcher,
    preset: &FunctionPreset,
    a: f64,
    b: f64,
    n: usize,
    rule: QuadratureRule,
) -> EvaluationResult {
    debug!("evaluating preset '{}' on [{a}, {b}] with {rule}", preset.id);
    let exact = |a: f64, b: f64| preset.exact_integral(a, b);
    dispatcher.evaluate(&preset.function, a, b, n, rule, Some(&exact))
}
