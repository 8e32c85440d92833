//! Precision abstraction shared by every comparison.
//!
//! [`IeeeFloat`] extends [`num_traits::Float`] with the two pieces the
//! comparisons need that `num-traits` does not provide: a bit-level ordering
//! key for ULP distances and a lossless widening to `f64` for diagnostics.
//! The trait is sealed and implemented only for `f32` and `f64`.

use num_traits::Float;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// An IEEE-754 binary floating-point type.
pub trait IeeeFloat: Float + sealed::Sealed + core::fmt::Debug {
    /// Map the bit pattern onto a signed integer that increases
    /// monotonically with the numeric value.
    ///
    /// IEEE-754 stores values in sign-magnitude form, so the raw bits of
    /// negative numbers sort backwards. Positive values keep their bits and
    /// negative values become the negated magnitude, which places `-0.0` and
    /// `+0.0` on the same key. NaN payloads map beyond the infinities; callers
    /// filter NaN before relying on the ordering.
    fn ordered_bits(self) -> i64;

    /// Widen to `f64` for error reporting and logging.
    fn widen(self) -> f64;

    /// Smallest positive normal magnitude.
    #[inline]
    #[must_use]
    fn min_normal() -> Self {
        Self::min_positive_value()
    }

    /// Largest finite magnitude.
    #[inline]
    #[must_use]
    fn max_finite() -> Self {
        Self::max_value()
    }
}

macro_rules! impl_ieee_float {
    ($float:ty, $signed:ty) => {
        impl IeeeFloat for $float {
            #[inline]
            #[expect(clippy::cast_possible_wrap, reason = "bit reinterpretation")]
            fn ordered_bits(self) -> i64 {
                let bits = self.to_bits() as $signed;
                let key = if bits < 0 {
                    -(bits & <$signed>::MAX)
                } else {
                    bits
                };
                i64::from(key)
            }

            #[inline]
            fn widen(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_ieee_float!(f32, i32);
impl_ieee_float!(f64, i64);
