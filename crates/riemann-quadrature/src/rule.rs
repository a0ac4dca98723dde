//! The closed set of quadrature rules.

use std::str::FromStr;

use crate::error::QuadratureError;

/// A Riemann-sum family quadrature rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    /// Rectangles sampled at the left edge of each subinterval.
    Left,
    /// Rectangles sampled at the right edge of each subinterval.
    Right,
    /// Rectangles sampled at the centre of each subinterval.
    #[default]
    Midpoint,
    /// Trapezoids through both edges of each subinterval.
    Trapezoidal,
    /// Composite Simpson's 1/3 rule (parabolic arcs over subinterval pairs).
    Simpson,
}

impl QuadratureRule {
    /// Every rule, in declaration order.
    pub const ALL: [QuadratureRule; 5] = [
        QuadratureRule::Left,
        QuadratureRule::Right,
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoidal,
        QuadratureRule::Simpson,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            QuadratureRule::Left => "left",
            QuadratureRule::Right => "right",
            QuadratureRule::Midpoint => "midpoint",
            QuadratureRule::Trapezoidal => "trapezoidal",
            QuadratureRule::Simpson => "simpson",
        }
    }

    /// Exponent p of the global truncation error O(1/nᵖ) on smooth integrands.
    pub fn convergence_order(self) -> u32 {
        match self {
            QuadratureRule::Left | QuadratureRule::Right => 1,
            QuadratureRule::Midpoint | QuadratureRule::Trapezoidal => 2,
            QuadratureRule::Simpson => 4,
        }
    }

    /// Returns true if the rule only works with an even subdivision count.
    pub fn requires_even_subdivisions(self) -> bool {
        matches!(self, QuadratureRule::Simpson)
    }
}

impl std::fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuadratureRule {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(QuadratureRule::Left),
            "right" => Ok(QuadratureRule::Right),
            "midpoint" => Ok(QuadratureRule::Midpoint),
            "trapezoidal" | "trapezoid" => Ok(QuadratureRule::Trapezoidal),
            "simpson" => Ok(QuadratureRule::Simpson),
            _ => Err(QuadratureError::UnknownRule(s.to_string())),
        }
    }
}
