//! Validated comparison tolerances.

use crate::float::IeeeFloat;
use thiserror::Error;
use tracing::debug;

/// Raised when a tolerance is NaN, not strictly positive, or infinite.
///
/// Every other floating-point edge case is answered with a boolean, so this
/// is the only error the comparison functions report.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidToleranceError {
    /// The tolerance was NaN.
    #[error("tolerance must be a number, found NaN")]
    NotANumber,
    /// The tolerance was zero or negative.
    #[error("tolerance must be greater than zero, found {value}")]
    NotPositive { value: f64 },
    /// The tolerance was infinite.
    #[error("tolerance must be finite, found {value}")]
    NotFinite { value: f64 },
}

/// A tolerance that is known to be positive and finite.
///
/// # Examples
///
/// ```
/// use nearly_equal::Tolerance;
///
/// let tol = Tolerance::new(1e-9_f64).unwrap();
/// assert_eq!(tol.get(), 1e-9);
/// assert!(Tolerance::new(-1.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance<F>(F);

impl<F: IeeeFloat> Tolerance<F> {
    /// Validate `epsilon`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToleranceError`] if `epsilon` is NaN, zero, negative
    /// or infinite.
    pub fn new(epsilon: F) -> Result<Self, InvalidToleranceError> {
        let err = if epsilon.is_nan() {
            InvalidToleranceError::NotANumber
        } else if epsilon <= F::zero() {
            InvalidToleranceError::NotPositive {
                value: epsilon.widen(),
            }
        } else if epsilon.is_infinite() {
            InvalidToleranceError::NotFinite {
                value: epsilon.widen(),
            }
        } else {
            return Ok(Self(epsilon));
        };
        debug!(epsilon = epsilon.widen(), error = %err, "rejected tolerance");
        Err(err)
    }

    /// The validated epsilon.
    #[inline]
    #[must_use]
    pub fn get(self) -> F {
        self.0
    }

    /// Whole number of ULPs this tolerance allows, rounding down.
    ///
    /// Saturates at `u64::MAX` for tolerances beyond its range.
    #[must_use]
    pub fn ulps(self) -> u64 {
        self.0.floor().to_u64().unwrap_or(u64::MAX)
    }
}
