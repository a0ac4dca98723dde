//! Closed integration intervals.

/// An integration interval `[a, b]`.
///
/// No ordering is enforced: a reversed interval (`a > b`) is valid and
/// integrates to the negated value of its forward counterpart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Lower limit of integration.
    pub a: f64,
    /// Upper limit of integration.
    pub b: f64,
}

impl Interval {
    /// Creates the interval `[a, b]`.
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Signed width `b - a`.
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns true if the upper limit lies below the lower limit.
    pub fn is_reversed(&self) -> bool {
        self.a > self.b
    }

    /// Returns the same interval traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Returns true if `x` lies between the two limits, in either order.
    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = if self.is_reversed() {
            (self.b, self.a)
        } else {
            (self.a, self.b)
        };
        lo <= x && x <= hi
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}
