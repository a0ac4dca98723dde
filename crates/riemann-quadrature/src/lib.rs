//! # riemann-quadrature
//!
//! Riemann-sum family quadrature for definite integrals, with the
//! per-subinterval data needed to draw the approximation.
//!
//! This crate provides:
//! - Left, right and midpoint rectangle sums
//! - The composite trapezoidal rule
//! - Composite Simpson's rule (even subdivision counts)
//! - Error analysis against an exact value F(b) − F(a)
//! - Convergence sweeps over n and side-by-side rule comparison
//!
//! ## Rule Selection
//!
//! | Rule | Error | Notes |
//! |---|---|---|
//! | left, right | O(1/n) | bracket the integral of a monotone f |
//! | midpoint | O(1/n²) | default |
//! | trapezoidal | O(1/n²) | exact for affine f |
//! | simpson | O(1/n⁴) | odd n is raised to n + 1 |
//!
//! Every call is pure and bounded: n is clamped to `1..=200` before any
//! evaluation of f.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod api;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod result;
pub mod rule;
pub mod rules;
pub mod sweep;
pub mod validate;

#[cfg(test)]
mod proptests;

pub use analysis::ErrorEstimate;
pub use api::{compute_quadrature, compute_quadrature_named, evaluate};
pub use dispatch::QuadratureDispatcher;
pub use error::QuadratureError;
pub use options::{QuadratureOptions, UnknownRulePolicy};
pub use result::{EvaluationResult, QuadratureResult, SamplePoint};
pub use rule::QuadratureRule;
pub use sweep::observed_order;
pub use validate::{
    clamp_subdivisions, clamp_subdivisions_real, is_degenerate, DEGENERATE_TOLERANCE,
    MAX_SUBDIVISIONS, MIN_SUBDIVISIONS,
};
