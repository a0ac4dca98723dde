//! Error type for the quadrature crate.

use thiserror::Error;

/// Errors that can occur when selecting a quadrature rule by name.
///
/// Numeric anomalies (degenerate intervals, out-of-range counts, NaN from the
/// integrand) are never reported here; they are corrected or propagated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuadratureError {
    /// No rule is registered under this name.
    #[error("unknown quadrature rule '{0}'")]
    UnknownRule(String),
}
