//! BDD tests for `nearly_equal`.

use nearly_equal::{ComparisonMode, InvalidToleranceError, nearly_equal};
mod support;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};
use support::operand;

#[derive(Default)]
struct CompareContext {
    lhs: Cell<Option<f64>>,
    rhs: Cell<Option<f64>>,
    epsilon: Cell<Option<f64>>,
    mode: Cell<ComparisonMode>,
    result: RefCell<Option<Result<bool, InvalidToleranceError>>>,
}

#[fixture]
fn compare_context() -> CompareContext {
    CompareContext::default()
}

#[given("the left operand {value}")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "BDD macro injects owned value"
)]
fn given_lhs(value: String, #[from(compare_context)] ctx: &CompareContext) {
    ctx.lhs.set(Some(operand(&value)));
}

#[given("the right operand {value}")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "BDD macro injects owned value"
)]
fn given_rhs(value: String, #[from(compare_context)] ctx: &CompareContext) {
    ctx.rhs.set(Some(operand(&value)));
}

#[given("the {mode} mode")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "BDD macro injects owned value"
)]
fn given_mode(mode: String, #[from(compare_context)] ctx: &CompareContext) {
    let parsed = mode
        .parse::<ComparisonMode>()
        .unwrap_or_else(|e| panic!("scenario uses a known mode: {e}"));
    ctx.mode.set(parsed);
}

#[given("a tolerance of {epsilon}")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "BDD macro injects owned value"
)]
fn given_tolerance(epsilon: String, #[from(compare_context)] ctx: &CompareContext) {
    ctx.epsilon.set(Some(operand(&epsilon)));
}

#[when("the operands are compared")]
fn when_compared(#[from(compare_context)] ctx: &CompareContext) {
    let lhs = ctx.lhs.get().unwrap_or_else(|| panic!("left operand to be set"));
    let rhs = ctx.rhs.get().unwrap_or_else(|| panic!("right operand to be set"));
    let epsilon = ctx
        .epsilon
        .get()
        .unwrap_or_else(|| panic!("tolerance to be set"));
    ctx.result
        .replace(Some(nearly_equal(lhs, rhs, epsilon, ctx.mode.get())));
}

#[then("they are nearly equal")]
fn then_equal(#[from(compare_context)] ctx: &CompareContext) {
    assert!(matches!(ctx.result.borrow().as_ref(), Some(Ok(true))));
}

#[then("they are not nearly equal")]
fn then_not_equal(#[from(compare_context)] ctx: &CompareContext) {
    assert!(matches!(ctx.result.borrow().as_ref(), Some(Ok(false))));
}

#[then("an invalid tolerance error is returned")]
fn then_invalid(#[from(compare_context)] ctx: &CompareContext) {
    assert!(matches!(
        ctx.result.borrow().as_ref(),
        Some(Err(InvalidToleranceError::NotPositive { .. }))
    ));
}

#[scenario(path = "tests/features/comparison.feature", index = 0)]
fn rounding_noise(compare_context: CompareContext) {
    let _ = compare_context;
}

#[scenario(path = "tests/features/comparison.feature", index = 1)]
fn opposite_tiny_values(compare_context: CompareContext) {
    let _ = compare_context;
}

#[scenario(path = "tests/features/comparison.feature", index = 2)]
fn naive_absolute(compare_context: CompareContext) {
    let _ = compare_context;
}

#[scenario(path = "tests/features/comparison.feature", index = 3)]
fn neighbouring_values(compare_context: CompareContext) {
    let _ = compare_context;
}

#[scenario(path = "tests/features/comparison.feature", index = 4)]
fn negative_tolerance(compare_context: CompareContext) {
    let _ = compare_context;
}
