//! Order payments
//!
//! A payment record tracks one attempt to collect money for an order. The
//! reconciliation core only distinguishes "unprocessed" payments (still
//! mutable, gateway not yet invoked) from everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PaymentId};

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit card
    CreditCard,
    /// PayPal; rejects zero-amount captures
    PayPal,
    /// Bank transfer
    BankTransfer,
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentState {
    /// Created during checkout, amount still adjustable
    Checkout,
    /// Queued for capture, amount still adjustable
    Pending,
    /// Gateway capture in flight
    Processing,
    /// Captured successfully
    Completed,
    /// Capture failed
    Failed,
    /// Voided before capture
    Void,
}

/// A payment attached to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Amount owed through this payment
    pub amount: Money,
    /// Payment method
    pub method: PaymentMethod,
    /// Status
    pub state: PaymentState,
    /// When status changed to completed
    pub completed_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new checkout-stage payment
    pub fn new(amount: Money, method: PaymentMethod) -> Self {
        let now = Utc::now();
        Self {
            id: PaymentId::new_v7(),
            amount,
            method,
            state: PaymentState::Checkout,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true while the payment has not been sent to a gateway
    ///
    /// Only unprocessed payments may have their amount rewritten by the
    /// reconciler.
    pub fn is_unprocessed(&self) -> bool {
        matches!(self.state, PaymentState::Checkout | PaymentState::Pending)
    }

    /// Rewrites the amount owed
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Marks the payment as captured
    pub fn complete(&mut self) {
        self.state = PaymentState::Completed;
        self.completed_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Marks the payment as failed
    pub fn fail(&mut self) {
        self.state = PaymentState::Failed;
        self.updated_at = Utc::now();
    }

    /// Voids the payment before capture
    pub fn void(&mut self) {
        self.state = PaymentState::Void;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn payment(amount: &str) -> Payment {
        Payment::new(
            Money::new(amount.parse().unwrap(), Currency::USD),
            PaymentMethod::CreditCard,
        )
    }

    #[test]
    fn test_new_payment_is_unprocessed() {
        assert!(payment("50.00").is_unprocessed());
    }

    #[test]
    fn test_completed_payment_is_processed() {
        let mut p = payment("50.00");
        p.complete();

        assert!(!p.is_unprocessed());
        assert_eq!(p.state, PaymentState::Completed);
        assert!(p.completed_at.is_some());
    }

    #[test]
    fn test_set_amount_rewrites_amount() {
        let mut p = payment("50.00");
        p.set_amount(Money::new(dec!(0.01), Currency::USD));

        assert_eq!(p.amount.amount(), dec!(0.01));
    }

    #[test]
    fn test_void_payment_is_processed() {
        let mut p = payment("50.00");
        p.void();

        assert!(!p.is_unprocessed());
    }
}
