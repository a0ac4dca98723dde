//! # riemann-catalog
//!
//! Fixed catalog of test functions for Riemann sum demonstrations.
//!
//! Every preset pairs an integrand with its exact antiderivative, so the
//! definite integral over any interval can be obtained through the
//! Fundamental Theorem of Calculus:
//!
//! ∫ₐᵇ f(x) dx = F(b) − F(a)
//!
//! # Example
//!
//! ```
//! use riemann_catalog::{exact_integral, lookup};
//!
//! let preset = lookup("x-squared").unwrap();
//! assert_eq!(preset.evaluate(3.0), 9.0);
//!
//! // ∫₀² x² dx = 8/3
//! let exact = exact_integral("x-squared", 0.0, 2.0).unwrap();
//! assert!((exact - 8.0 / 3.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod interval;
pub mod preset;

#[cfg(test)]
mod proptests;

pub use catalog::{exact_integral, ids, lookup, presets, require, CatalogError};
pub use interval::Interval;
pub use preset::FunctionPreset;
