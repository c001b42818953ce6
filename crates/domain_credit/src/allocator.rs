//! Credit allocation
//!
//! The allocator decides how much store credit may legally be applied to an
//! order. It is a pure clamping function: out-of-range requests are pulled
//! into range, never rejected.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// An explicit request to change the credit applied to an order
///
/// Carried as an optional field on the save call rather than hidden state
/// on the order: a save with `None` never touches credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRequest {
    /// Requested amount to apply
    pub amount: Money,
    /// Strip all applied credit from the order
    pub remove: bool,
}

impl CreditRequest {
    /// Requests that `amount` of credit be applied
    pub fn apply(amount: Money) -> Self {
        Self {
            amount,
            remove: false,
        }
    }

    /// Requests removal of all applied credit
    pub fn removal(currency: Currency) -> Self {
        Self {
            amount: Money::zero(currency),
            remove: true,
        }
    }
}

/// Outcome of an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allocation {
    /// Apply this positive amount as a credit adjustment
    Apply(Money),
    /// Remove any credit adjustment from the order
    Remove,
}

impl Allocation {
    /// The amount to apply, if this allocation applies one
    pub fn applied_amount(&self) -> Option<Money> {
        match self {
            Allocation::Apply(amount) => Some(*amount),
            Allocation::Remove => None,
        }
    }
}

/// Computes the credit amount legally applicable to one order
#[derive(Debug, Default)]
pub struct CreditAllocator;

impl CreditAllocator {
    /// Clamps a credit request against every cap that binds it
    ///
    /// The requested amount is rounded half-to-even to two decimal places,
    /// then bounded by:
    ///
    /// - the customer's total available credit,
    /// - the order total before any previously applied credit
    ///   (`order_total + currently_applied`), and
    /// - the ceiling `item_subtotal - 0.01` (see [`Self::credit_ceiling`]).
    ///
    /// A non-positive result, or an explicit remove flag, yields
    /// [`Allocation::Remove`].
    pub fn allocate(
        request: &CreditRequest,
        currently_applied: Money,
        item_subtotal: Money,
        order_total: Money,
        available_credit: Money,
    ) -> Allocation {
        if request.remove {
            return Allocation::Remove;
        }

        let requested = request.amount.round_half_even(2);
        let pre_credit_total = order_total + currently_applied;

        let amount = requested
            .min(available_credit)
            .min(pre_credit_total)
            .min(Self::credit_ceiling(item_subtotal));

        if amount.is_positive() {
            Allocation::Apply(amount)
        } else {
            Allocation::Remove
        }
    }

    /// The most credit any order may ever carry: item subtotal less one
    /// minor currency unit
    ///
    /// Some gateways (PayPal among them) reject zero-amount captures, so
    /// the payable total must stay strictly positive.
    pub fn credit_ceiling(item_subtotal: Money) -> Money {
        item_subtotal - Money::minor_unit(item_subtotal.currency())
    }

    /// The usable cap to surface to a customer: the ceiling bounded by
    /// their available credit (negative balances count as zero)
    pub fn max_usable_credit(item_subtotal: Money, available_credit: Money) -> Money {
        Self::credit_ceiling(item_subtotal).min(available_credit.max_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_subtotal_ceiling_binds() {
        // subtotal 50.00, total 50.00, credit 1000.00, request 50.00
        let allocation = CreditAllocator::allocate(
            &CreditRequest::apply(usd(dec!(50.00))),
            Money::zero(Currency::USD),
            usd(dec!(50.00)),
            usd(dec!(50.00)),
            usd(dec!(1000.00)),
        );

        assert_eq!(allocation, Allocation::Apply(usd(dec!(49.99))));
    }

    #[test]
    fn test_available_credit_binds() {
        // total 30.00, credit 10.00, request 30.00
        let allocation = CreditAllocator::allocate(
            &CreditRequest::apply(usd(dec!(30.00))),
            Money::zero(Currency::USD),
            usd(dec!(30.00)),
            usd(dec!(30.00)),
            usd(dec!(10.00)),
        );

        assert_eq!(allocation, Allocation::Apply(usd(dec!(10.00))));
    }

    #[test]
    fn test_pre_credit_total_includes_existing_credit() {
        // 20.00 already applied against a 50.00 order: raising the request
        // to 35.00 is within the 50.00 pre-credit total
        let allocation = CreditAllocator::allocate(
            &CreditRequest::apply(usd(dec!(35.00))),
            usd(dec!(20.00)),
            usd(dec!(50.00)),
            usd(dec!(30.00)),
            usd(dec!(100.00)),
        );

        assert_eq!(allocation, Allocation::Apply(usd(dec!(35.00))));
    }

    #[test]
    fn test_request_rounds_half_even() {
        let allocation = CreditAllocator::allocate(
            &CreditRequest::apply(usd(dec!(10.125))),
            Money::zero(Currency::USD),
            usd(dec!(50.00)),
            usd(dec!(50.00)),
            usd(dec!(100.00)),
        );

        assert_eq!(allocation, Allocation::Apply(usd(dec!(10.12))));
    }

    #[test]
    fn test_zero_request_signals_removal() {
        let allocation = CreditAllocator::allocate(
            &CreditRequest::apply(Money::zero(Currency::USD)),
            Money::zero(Currency::USD),
            usd(dec!(50.00)),
            usd(dec!(50.00)),
            usd(dec!(100.00)),
        );

        assert_eq!(allocation, Allocation::Remove);
    }

    #[test]
    fn test_remove_flag_wins_over_amount() {
        let mut request = CreditRequest::apply(usd(dec!(10.00)));
        request.remove = true;

        let allocation = CreditAllocator::allocate(
            &request,
            Money::zero(Currency::USD),
            usd(dec!(50.00)),
            usd(dec!(50.00)),
            usd(dec!(100.00)),
        );

        assert_eq!(allocation, Allocation::Remove);
    }

    #[test]
    fn test_no_available_credit_signals_removal() {
        let allocation = CreditAllocator::allocate(
            &CreditRequest::apply(usd(dec!(10.00))),
            Money::zero(Currency::USD),
            usd(dec!(50.00)),
            usd(dec!(50.00)),
            Money::zero(Currency::USD),
        );

        assert_eq!(allocation, Allocation::Remove);
    }

    #[test]
    fn test_max_usable_credit_clamps_negative_balance() {
        let usable = CreditAllocator::max_usable_credit(usd(dec!(50.00)), usd(dec!(-5.00)));
        assert!(usable.is_zero());
    }

    #[test]
    fn test_max_usable_credit_prefers_smaller_cap() {
        assert_eq!(
            CreditAllocator::max_usable_credit(usd(dec!(50.00)), usd(dec!(20.00))),
            usd(dec!(20.00))
        );
        assert_eq!(
            CreditAllocator::max_usable_credit(usd(dec!(50.00)), usd(dec!(2000.00))),
            usd(dec!(49.99))
        );
    }
}
