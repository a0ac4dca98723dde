//! The preset table and its lookup operations.
//!
//! The table is a `static` array: loaded once, never mutated, safe to read
//! from any thread.

use std::f64::consts::{E, FRAC_PI_2, PI};

use thiserror::Error;

use crate::interval::Interval;
use crate::preset::FunctionPreset;

/// Errors from catalog lookups.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No preset is registered under the given id.
    #[error("unknown function preset '{0}'")]
    UnknownPreset(String),
}

fn square(x: f64) -> f64 {
    x * x
}

fn square_antiderivative(x: f64) -> f64 {
    x * x * x / 3.0
}

fn linear(x: f64) -> f64 {
    2.0 * x + 1.0
}

fn linear_antiderivative(x: f64) -> f64 {
    x * x + x
}

fn cubic(x: f64) -> f64 {
    x * x * x - 2.0 * x
}

fn cubic_antiderivative(x: f64) -> f64 {
    let x2 = x * x;
    x2 * x2 / 4.0 - x2
}

fn sine(x: f64) -> f64 {
    x.sin()
}

fn sine_antiderivative(x: f64) -> f64 {
    -x.cos()
}

fn cosine(x: f64) -> f64 {
    x.cos()
}

fn cosine_antiderivative(x: f64) -> f64 {
    x.sin()
}

fn exponential(x: f64) -> f64 {
    x.exp()
}

fn reciprocal(x: f64) -> f64 {
    1.0 / x
}

// ln|x|; both sides of the pole share it, so intervals crossing 0 are meaningless
fn reciprocal_antiderivative(x: f64) -> f64 {
    x.abs().ln()
}

fn square_root(x: f64) -> f64 {
    x.sqrt()
}

fn square_root_antiderivative(x: f64) -> f64 {
    2.0 / 3.0 * x * x.sqrt()
}

fn quartic(x: f64) -> f64 {
    let x2 = x * x;
    x2 * x2 - x2
}

fn quartic_antiderivative(x: f64) -> f64 {
    let x3 = x * x * x;
    x3 * x * x / 5.0 - x3 / 3.0
}

static PRESETS: [FunctionPreset; 9] = [
    FunctionPreset {
        id: "x-squared",
        label: "Parabola",
        formula: "x^2",
        function: square,
        antiderivative: square_antiderivative,
        default_bounds: Interval::new(0.0, 2.0),
        view_domain: Interval::new(-0.5, 2.5),
    },
    FunctionPreset {
        id: "linear",
        label: "Line",
        formula: "2x + 1",
        function: linear,
        antiderivative: linear_antiderivative,
        default_bounds: Interval::new(0.0, 3.0),
        view_domain: Interval::new(-0.5, 3.5),
    },
    FunctionPreset {
        id: "cubic",
        label: "Cubic",
        formula: "x^3 - 2x",
        function: cubic,
        antiderivative: cubic_antiderivative,
        default_bounds: Interval::new(-1.0, 2.0),
        view_domain: Interval::new(-1.5, 2.5),
    },
    FunctionPreset {
        id: "sine",
        label: "Sine",
        formula: "sin(x)",
        function: sine,
        antiderivative: sine_antiderivative,
        default_bounds: Interval::new(0.0, PI),
        view_domain: Interval::new(-0.5, 2.0 * PI),
    },
    FunctionPreset {
        id: "cosine",
        label: "Cosine",
        formula: "cos(x)",
        function: cosine,
        antiderivative: cosine_antiderivative,
        default_bounds: Interval::new(0.0, FRAC_PI_2),
        view_domain: Interval::new(-0.5, PI),
    },
    FunctionPreset {
        id: "exponential",
        label: "Exponential",
        formula: "e^x",
        function: exponential,
        antiderivative: exponential,
        default_bounds: Interval::new(0.0, 1.0),
        view_domain: Interval::new(-1.0, 2.0),
    },
    FunctionPreset {
        id: "reciprocal",
        label: "Reciprocal",
        formula: "1/x",
        function: reciprocal,
        antiderivative: reciprocal_antiderivative,
        default_bounds: Interval::new(1.0, E),
        view_domain: Interval::new(0.1, 4.0),
    },
    FunctionPreset {
        id: "square-root",
        label: "Square root",
        formula: "sqrt(x)",
        function: square_root,
        antiderivative: square_root_antiderivative,
        default_bounds: Interval::new(0.0, 4.0),
        view_domain: Interval::new(0.0, 4.5),
    },
    FunctionPreset {
        id: "quartic",
        label: "Quartic",
        formula: "x^4 - x^2",
        function: quartic,
        antiderivative: quartic_antiderivative,
        default_bounds: Interval::new(-1.2, 1.2),
        view_domain: Interval::new(-1.5, 1.5),
    },
];

/// All presets, in display order.
pub fn presets() -> &'static [FunctionPreset] {
    &PRESETS
}

/// Identifiers of all presets, in display order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.id)
}

/// Looks up a preset by id.
pub fn lookup(id: &str) -> Option<&'static FunctionPreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

/// Looks up a preset by id, reporting a missing id as an error.
pub fn require(id: &str) -> Result<&'static FunctionPreset, CatalogError> {
    lookup(id).ok_or_else(|| CatalogError::UnknownPreset(id.to_string()))
}

/// Exact value of ∫ₐᵇ f(x) dx for the preset `id`, or `None` if unknown.
pub fn exact_integral(id: &str, a: f64, b: f64) -> Option<f64> {
    lookup(id).map(|preset| preset.exact_integral(a, b))
}
