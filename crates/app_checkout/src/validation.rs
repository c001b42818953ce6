//! Save-time validation
//!
//! The one rule that can actually block a save: stores may require a
//! minimum order value before store credit becomes usable. Everything
//! else about a credit request is clamped, never rejected.

use core_kernel::Money;
use domain_credit::CreditRequest;
use domain_order::Order;

use crate::error::CheckoutError;

/// Rejects credit requests on orders below a configured value floor
#[derive(Debug, Default)]
pub struct CreditMinimumValidator {
    minimum_item_total: Option<Money>,
}

impl CreditMinimumValidator {
    /// No floor: every credit request passes
    pub fn none() -> Self {
        Self {
            minimum_item_total: None,
        }
    }

    /// Requires the order's item subtotal to reach `minimum` before credit
    /// may be requested
    pub fn with_minimum(minimum: Money) -> Self {
        Self {
            minimum_item_total: Some(minimum),
        }
    }

    /// Validates a credit request against the floor
    ///
    /// Removal requests and non-positive amounts always pass; they take
    /// nothing off the order.
    pub fn validate(&self, order: &Order, request: &CreditRequest) -> Result<(), CheckoutError> {
        if request.remove || !request.amount.is_positive() {
            return Ok(());
        }

        if let Some(minimum) = self.minimum_item_total {
            if order.item_total() < minimum {
                return Err(CheckoutError::validation(
                    "store_credit_amount",
                    format!("order must be at least {} to use store credit", minimum),
                ));
            }
        }

        Ok(())
    }
}
