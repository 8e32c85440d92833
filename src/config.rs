//! Serialisable comparison policy.

use crate::{
    compare::{ComparisonMode, nearly_equal},
    tolerance::{InvalidToleranceError, Tolerance},
};
use serde::{Deserialize, Serialize};

/// Comparison mode paired with its tolerance.
///
/// Lets the choice of "nearly equal" live in configuration rather than in
/// code. `mode` defaults to [`ComparisonMode::Relative`] when omitted.
///
/// # Examples
///
/// ```
/// use nearly_equal::{Comparator, ComparisonMode};
///
/// let cmp = Comparator::new(ComparisonMode::Relative, 1e-9).validate().unwrap();
/// assert!(cmp.compare(0.15 + 0.15, 0.1 + 0.2).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Comparator {
    #[serde(default)]
    pub mode: ComparisonMode,
    /// Must be positive and finite.
    pub epsilon: f64,
}

impl Comparator {
    #[must_use]
    pub const fn new(mode: ComparisonMode, epsilon: f64) -> Self {
        Self { mode, epsilon }
    }

    /// Ensure the tolerance is usable.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToleranceError`] if `epsilon` is NaN, not strictly
    /// positive, or infinite.
    #[must_use = "Validation should not be ignored"]
    pub fn validate(self) -> Result<Self, InvalidToleranceError> {
        Tolerance::new(self.epsilon).map(|_| self)
    }

    /// Compare two `f64` values under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToleranceError`] if the configured tolerance is
    /// invalid.
    pub fn compare(&self, a: f64, b: f64) -> Result<bool, InvalidToleranceError> {
        nearly_equal(a, b, self.epsilon, self.mode)
    }

    /// Compare two `f32` values under this policy.
    ///
    /// The tolerance is narrowed to `f32`, so an epsilon that only fits in
    /// `f64` is rejected as infinite or zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToleranceError`] if the narrowed tolerance is invalid.
    #[expect(clippy::cast_possible_truncation, reason = "tolerance narrowed to operand precision")]
    pub fn compare_f32(&self, a: f32, b: f32) -> Result<bool, InvalidToleranceError> {
        nearly_equal(a, b, self.epsilon as f32, self.mode)
    }
}
