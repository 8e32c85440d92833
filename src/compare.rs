//! Approximate equality of two floating-point values.
//!
//! Three policies are offered, selected by [`ComparisonMode`]:
//! - [`Absolute`](ComparisonMode::Absolute) accepts any difference up to
//!   epsilon. Simple, but only meaningful when the operands' magnitude is
//!   known in advance.
//! - [`Relative`](ComparisonMode::Relative) scales the difference by the
//!   operands' combined magnitude and falls back to an absolute bound of
//!   `epsilon * MIN_NORMAL` near zero, where relative error is meaningless.
//! - [`Ulp`](ComparisonMode::Ulp) counts representable values between the
//!   operands; see [`crate::ulps`].

use crate::{
    float::IeeeFloat,
    tolerance::{InvalidToleranceError, Tolerance},
    ulps::nearly_equal_ulp,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::trace;

/// Policy used to decide whether two values are nearly equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// `|a - b| <= epsilon`.
    Absolute,
    /// Hybrid relative comparison with a near-zero absolute fallback.
    #[default]
    Relative,
    /// At most `floor(epsilon)` representable values apart.
    Ulp,
}

impl ComparisonMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Absolute, Self::Relative, Self::Ulp];

    /// Lowercase name accepted by [`FromStr`] and used by serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::Ulp => "ulp",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised [`ComparisonMode`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown comparison mode \"{0}\"; expected absolute, relative or ulp")]
pub struct UnknownModeError(pub String);

impl FromStr for ComparisonMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownModeError(trimmed.to_owned()))
    }
}

/// Decide whether `a` and `b` are nearly equal under `mode`.
///
/// NaN operands always compare unequal. Infinities compare equal only to an
/// infinity of the same sign, except in ULP mode where the largest finite
/// value sits one step from infinity.
///
/// # Examples
///
/// ```
/// use nearly_equal::{ComparisonMode, nearly_equal};
///
/// let a = 0.15_f64 + 0.15;
/// let b = 0.1_f64 + 0.2;
/// assert!(nearly_equal(a, b, 1e-9, ComparisonMode::Relative).unwrap());
/// assert!(!nearly_equal(1.0, 1.1, 1e-9, ComparisonMode::Relative).unwrap());
/// assert!(nearly_equal(1.0, 1.1, -1.0, ComparisonMode::Absolute).is_err());
/// ```
///
/// # Errors
///
/// Returns [`InvalidToleranceError`] if `epsilon` is NaN, not strictly
/// positive, or infinite.
pub fn nearly_equal<F: IeeeFloat>(
    a: F,
    b: F,
    epsilon: F,
    mode: ComparisonMode,
) -> Result<bool, InvalidToleranceError> {
    let tolerance = Tolerance::new(epsilon)?;
    Ok(nearly_equal_within(a, b, tolerance, mode))
}

/// [`nearly_equal`] with a tolerance that has already been validated.
#[must_use]
pub fn nearly_equal_within<F: IeeeFloat>(
    a: F,
    b: F,
    tolerance: Tolerance<F>,
    mode: ComparisonMode,
) -> bool {
    match mode {
        ComparisonMode::Absolute => absolute(a, b, tolerance.get()),
        ComparisonMode::Relative => relative(a, b, tolerance.get()),
        ComparisonMode::Ulp => nearly_equal_ulp(a, b, tolerance.ulps()),
    }
}

#[inline]
fn absolute<F: IeeeFloat>(a: F, b: F, epsilon: F) -> bool {
    a == b || (a - b).abs() <= epsilon
}

fn relative<F: IeeeFloat>(a: F, b: F, epsilon: F) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let zero = F::zero();
    if a == zero || b == zero || diff < F::min_normal() {
        trace!(
            a = a.widen(),
            b = b.widen(),
            "relative error undefined near zero; using absolute bound"
        );
        return diff < epsilon * F::min_normal();
    }
    let scale = (a.abs() + b.abs()).min(F::max_finite());
    diff / scale < epsilon
}
