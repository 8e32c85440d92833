//! Comparison by units in the last place.
//!
//! Counts how many representable values lie between two floats. Because the
//! count is independent of magnitude it works across the whole range without
//! a scale-dependent epsilon, at the cost of treating the largest finite
//! value and infinity as neighbours.

use crate::float::IeeeFloat;

/// Number of representable steps between `a` and `b`.
///
/// Returns [`None`] if either operand is NaN. `+0.0` and `-0.0` are zero
/// steps apart.
///
/// # Examples
///
/// ```
/// use nearly_equal::ulp_distance;
///
/// assert_eq!(ulp_distance(1.0_f64, 1.0_f64.next_up()), Some(1));
/// assert_eq!(ulp_distance(0.0_f32, -0.0_f32), Some(0));
/// assert_eq!(ulp_distance(f64::NAN, 1.0), None);
/// ```
#[must_use]
pub fn ulp_distance<F: IeeeFloat>(a: F, b: F) -> Option<u64> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    Some(a.ordered_bits().abs_diff(b.ordered_bits()))
}

/// Whether `a` and `b` are at most `max_ulps` representable values apart.
///
/// NaN is never nearly equal to anything, including itself.
///
/// # Examples
///
/// ```
/// use nearly_equal::nearly_equal_ulp;
///
/// let a = 0.15_f64 + 0.15;
/// let b = 0.1_f64 + 0.2;
/// assert!(nearly_equal_ulp(a, b, 4));
/// assert!(!nearly_equal_ulp(1.0_f64, 1.0001, 4));
/// ```
#[must_use]
pub fn nearly_equal_ulp<F: IeeeFloat>(a: F, b: F, max_ulps: u64) -> bool {
    ulp_distance(a, b).is_some_and(|d| d <= max_ulps)
}
