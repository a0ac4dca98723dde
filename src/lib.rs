//! # Riemann
//!
//! Numerical definite-integral approximation with Riemann-sum family rules.
//!
//! Riemann approximates ∫ₐᵇ f(x) dx, returns the per-subinterval samples a
//! renderer needs to draw rectangles or trapezoids, and measures the error
//! against an exact value when an antiderivative is known.
//!
//! ## Features
//!
//! - **Five rules**: left, right, midpoint, trapezoidal, Simpson
//! - **Visualization data**: one sample and one signed area per subinterval
//! - **Error analysis**: absolute and relative error via F(b) − F(a)
//! - **Function catalog**: test functions paired with exact antiderivatives
//!
//! ## Quick Start
//!
//! ```
//! use riemann::prelude::*;
//!
//! // ∫₀² x² dx with four midpoint rectangles
//! let evaluation = riemann::evaluate_preset("x-squared", 0.0, 2.0, 4, QuadratureRule::Midpoint)?;
//! assert!((evaluation.approximation - 2.625).abs() < 1e-12);
//! assert!((evaluation.absolute_error.unwrap() - 1.0 / 24.0).abs() < 1e-12);
//! # Ok::<(), riemann::RiemannError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod presets;

pub use riemann_catalog as catalog;
pub use riemann_quadrature as quadrature;

pub use error::RiemannError;
pub use presets::{
    evaluate_preset, evaluate_preset_default, evaluate_preset_named, exact_integral_for_preset,
    lookup_preset, quadrature_for_preset,
};
pub use riemann_quadrature::{compute_quadrature, evaluate};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use riemann_catalog::{FunctionPreset, Interval};
    pub use riemann_quadrature::{
        EvaluationResult, QuadratureDispatcher, QuadratureOptions, QuadratureResult,
        QuadratureRule, SamplePoint, UnknownRulePolicy,
    };
}
