#![allow(dead_code, reason = "each test binary uses a subset of helpers")]

use nearly_equal::{ComparisonMode, nearly_equal};

/// Parse a decimal operand written in a test fixture.
#[must_use]
pub fn operand(text: &str) -> f64 {
    text.trim()
        .parse()
        .unwrap_or_else(|e| panic!("invalid operand {text:?}: {e}"))
}

/// Compare with a tolerance the test expects to be valid.
#[must_use]
pub fn compare(a: f64, b: f64, epsilon: f64, mode: ComparisonMode) -> bool {
    nearly_equal(a, b, epsilon, mode)
        .unwrap_or_else(|e| panic!("expected valid tolerance {epsilon}: {e}"))
}
