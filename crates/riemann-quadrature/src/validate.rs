//! Bounds and subdivision-count validation.
//!
//! Out-of-range input is corrected, never rejected: counts are clamped into
//! `[MIN_SUBDIVISIONS, MAX_SUBDIVISIONS]` and intervals narrower than
//! `DEGENERATE_TOLERANCE` are treated as empty.

/// Smallest subdivision count a rule will run with.
pub const MIN_SUBDIVISIONS: usize = 1;

/// Largest subdivision count a rule will run with.
///
/// Caps the O(n) cost of a single call so an interactive caller never stalls.
pub const MAX_SUBDIVISIONS: usize = 200;

/// Intervals with `|b - a|` below this width integrate to zero.
pub const DEGENERATE_TOLERANCE: f64 = 1e-10;

/// Clamps a subdivision count into `[MIN_SUBDIVISIONS, MAX_SUBDIVISIONS]`.
pub fn clamp_subdivisions(n: usize) -> usize {
    clamp_in(n, MIN_SUBDIVISIONS, MAX_SUBDIVISIONS)
}

/// Clamps a real-valued request (e.g. a slider position), then floors it.
///
/// NaN maps to `MIN_SUBDIVISIONS`.
pub fn clamp_subdivisions_real(n: f64) -> usize {
    clamp_real_in(n, MIN_SUBDIVISIONS, MAX_SUBDIVISIONS)
}

/// Returns true if `[a, b]` is numerically empty.
pub fn is_degenerate(a: f64, b: f64) -> bool {
    is_degenerate_within(a, b, DEGENERATE_TOLERANCE)
}

pub(crate) fn clamp_in(n: usize, min: usize, max: usize) -> usize {
    n.clamp(min, max.max(min))
}

pub(crate) fn clamp_real_in(n: f64, min: usize, max: usize) -> usize {
    if n.is_nan() {
        return min;
    }
    let max = max.max(min);
    // Saturating float-to-int cast after clamping; the floor is exact here
    n.clamp(min as f64, max as f64).floor() as usize
}

pub(crate) fn is_degenerate_within(a: f64, b: f64, tolerance: f64) -> bool {
    (b - a).abs() < tolerance
}
