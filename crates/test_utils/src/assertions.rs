//! Custom Test Assertions
//!
//! Assertion helpers for domain types with more useful failure messages
//! than the standard macros.

use core_kernel::Money;
use domain_order::Order;

/// Asserts that two Money values are exactly equal
///
/// # Panics
///
/// Panics with both formatted amounts on mismatch
pub fn assert_money_eq(actual: Money, expected: Money) {
    assert_eq!(
        actual, expected,
        "Money mismatch: actual={}, expected={}",
        actual, expected
    );
}

/// Asserts that the order carries exactly one store-credit adjustment of
/// the given applied (positive) magnitude
pub fn assert_applied_credit(order: &Order, expected: Money) {
    let count = order.store_credit_adjustments().count();
    assert_eq!(
        count, 1,
        "Expected exactly one store-credit adjustment, found {}",
        count
    );
    assert_money_eq(order.store_credit_total(), expected);
}

/// Asserts that the order carries no store-credit adjustment
pub fn assert_no_applied_credit(order: &Order) {
    let count = order.store_credit_adjustments().count();
    assert_eq!(
        count, 0,
        "Expected no store-credit adjustment, found {} (applied={})",
        count,
        order.store_credit_total()
    );
}
