//! Approximate equality for IEEE-754 floating-point values.
//!
//! Exact `==` on floats is rarely what callers want: `0.1 + 0.2` and `0.3`
//! differ in their last bit. This crate offers three notions of "nearly
//! equal", chosen per call with [`ComparisonMode`]:
//!
//! ```
//! use nearly_equal::{ComparisonMode, nearly_equal, nearly_equal_ulp};
//!
//! let a = 0.15_f64 + 0.15;
//! let b = 0.1_f64 + 0.2;
//! assert!(nearly_equal(a, b, 1e-9, ComparisonMode::Relative).unwrap());
//! assert!(nearly_equal_ulp(a, b, 4));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod compare;
pub mod config;
pub mod float;
pub mod tolerance;
pub mod ulps;

#[cfg(feature = "cli")]
pub use cli::NearlyEqArgs;
pub use compare::{ComparisonMode, UnknownModeError, nearly_equal, nearly_equal_within};
pub use config::Comparator;
pub use float::IeeeFloat;
pub use tolerance::{InvalidToleranceError, Tolerance};
pub use ulps::{nearly_equal_ulp, ulp_distance};
