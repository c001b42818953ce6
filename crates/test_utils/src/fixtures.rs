//! Pre-built test data for common entities
//!
//! Fixed amounts and labels used across suites so scenario numbers stay
//! recognizable between tests.

use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Common monetary fixtures
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The standard order subtotal used in scenario tests
    pub fn subtotal() -> Money {
        Money::new(dec!(50.00), Currency::USD)
    }

    /// A credit balance large enough that it never binds
    pub fn deep_credit() -> Money {
        Money::new(dec!(1000.00), Currency::USD)
    }

    /// A small credit balance that always binds
    pub fn shallow_credit() -> Money {
        Money::new(dec!(10.00), Currency::USD)
    }

    /// Convenience constructor for USD amounts
    pub fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }
}

/// Common string fixtures
pub struct StringFixtures;

impl StringFixtures {
    /// A deterministic customer email
    pub fn email() -> &'static str {
        "customer@example.com"
    }

    /// A deterministic line item description
    pub fn line_item() -> &'static str {
        "Blue widget"
    }
}
