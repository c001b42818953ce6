//! Order totals and payment-state recomputation
//!
//! The updater is the single writer of the order's cached `total` and
//! derived `payment_state`. The reconciliation core calls it after every
//! adjustment mutation; nothing else recomputes totals.

use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Derived payment position of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPaymentState {
    /// Money is still owed
    BalanceDue,
    /// Captured payments cover the total exactly
    Paid,
    /// Captured payments exceed the total (e.g., credit applied after capture)
    CreditOwed,
}

/// Recomputes an order's cached monetary state
#[derive(Debug, Default)]
pub struct OrderUpdater;

impl OrderUpdater {
    /// Recomputes the payable total from line items and adjustments
    ///
    /// The total is clamped at zero; adjustments can never push an order
    /// negative.
    pub fn update(order: &mut Order) {
        let total = (order.item_total() + order.adjustment_total()).max_zero();
        order.total = total;
        order.updated_at = chrono::Utc::now();
    }

    /// Re-derives the payment state from captured payments and the total
    pub fn update_payment_state(order: &mut Order) {
        let paid = order.paid_total();
        order.payment_state = if paid > order.total {
            OrderPaymentState::CreditOwed
        } else if paid == order.total {
            OrderPaymentState::Paid
        } else {
            OrderPaymentState::BalanceDue
        };
        order.updated_at = chrono::Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustment::Adjustment;
    use crate::order::LineItem;
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;

    fn order_with_items() -> Order {
        let mut order = Order::new(Currency::USD);
        order.add_line_item(LineItem::new(
            "Widget",
            Money::new(dec!(50.00), Currency::USD),
        ));
        OrderUpdater::update(&mut order);
        order
    }

    #[test]
    fn test_update_includes_adjustments() {
        let mut order = order_with_items();
        assert_eq!(order.total.amount(), dec!(50.00));

        order.add_adjustment(Adjustment::store_credit(Money::new(
            dec!(20.00),
            Currency::USD,
        )));
        OrderUpdater::update(&mut order);

        assert_eq!(order.total.amount(), dec!(30.00));
    }

    #[test]
    fn test_update_clamps_total_at_zero() {
        let mut order = order_with_items();
        order.add_adjustment(Adjustment::store_credit(Money::new(
            dec!(80.00),
            Currency::USD,
        )));
        OrderUpdater::update(&mut order);

        assert!(order.total.is_zero());
    }

    #[test]
    fn test_payment_state_balance_due_then_paid() {
        use crate::payment::{Payment, PaymentMethod};

        let mut order = order_with_items();
        OrderUpdater::update_payment_state(&mut order);
        assert_eq!(order.payment_state, OrderPaymentState::BalanceDue);

        let mut payment = Payment::new(order.total, PaymentMethod::CreditCard);
        payment.complete();
        order.add_payment(payment);
        OrderUpdater::update_payment_state(&mut order);

        assert_eq!(order.payment_state, OrderPaymentState::Paid);
    }

    #[test]
    fn test_payment_state_credit_owed_after_late_credit() {
        use crate::payment::{Payment, PaymentMethod};

        let mut order = order_with_items();
        let mut payment = Payment::new(order.total, PaymentMethod::CreditCard);
        payment.complete();
        order.add_payment(payment);

        order.add_adjustment(Adjustment::store_credit(Money::new(
            dec!(10.00),
            Currency::USD,
        )));
        OrderUpdater::update(&mut order);
        OrderUpdater::update_payment_state(&mut order);

        assert_eq!(order.payment_state, OrderPaymentState::CreditOwed);
    }
}
