//! Top-level error type.

use thiserror::Error;

use riemann_catalog::CatalogError;
use riemann_quadrature::QuadratureError;

/// Errors surfaced by the preset-driven entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RiemannError {
    /// The requested preset does not exist.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The requested rule name was rejected.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}
