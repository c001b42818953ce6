//! Payment reconciliation
//!
//! After the adjustment list changes, the payable total moves; the open
//! payment must move with it or the gateway would capture a stale amount.

use tracing::debug;

use domain_order::{Order, OrderUpdater};

/// Re-derives order totals and pushes the result into the open payment
#[derive(Debug, Default)]
pub struct PaymentReconciler;

impl PaymentReconciler {
    /// Recomputes totals, then rewrites the first unprocessed payment
    ///
    /// Call only for orders that have been persisted; a never-persisted
    /// order cannot have payments. When several unprocessed payments
    /// exist, only the first (by insertion order) is rewritten; this core
    /// assumes single-payment orders and does not redistribute across
    /// splits.
    pub fn reconcile(order: &mut Order) {
        OrderUpdater::update(order);

        let total = order.total;
        if let Some(payment) = order.first_unprocessed_payment_mut() {
            debug!(payment_id = %payment.id, new_amount = %total, "syncing open payment to order total");
            payment.set_amount(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money};
    use domain_order::{Adjustment, LineItem, Payment, PaymentMethod};
    use rust_decimal_macros::dec;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn order_with_payment() -> Order {
        let mut order = Order::new(Currency::USD);
        order.add_line_item(LineItem::new("Widget", usd(dec!(50.00))));
        OrderUpdater::update(&mut order);
        order.add_payment(Payment::new(usd(dec!(50.00)), PaymentMethod::CreditCard));
        order
    }

    #[test]
    fn test_reconcile_syncs_open_payment() {
        let mut order = order_with_payment();
        order.add_adjustment(Adjustment::store_credit(usd(dec!(49.99))));

        PaymentReconciler::reconcile(&mut order);

        assert_eq!(order.total.amount(), dec!(0.01));
        assert_eq!(order.payments[0].amount.amount(), dec!(0.01));
    }

    #[test]
    fn test_reconcile_without_open_payment_is_noop_on_payments() {
        let mut order = order_with_payment();
        order.payments[0].complete();
        order.add_adjustment(Adjustment::store_credit(usd(dec!(10.00))));

        PaymentReconciler::reconcile(&mut order);

        assert_eq!(order.total.amount(), dec!(40.00));
        // captured payment keeps its original amount
        assert_eq!(order.payments[0].amount.amount(), dec!(50.00));
    }

    #[test]
    fn test_reconcile_touches_only_first_open_payment() {
        let mut order = order_with_payment();
        order.add_payment(Payment::new(usd(dec!(5.00)), PaymentMethod::PayPal));
        order.add_adjustment(Adjustment::store_credit(usd(dec!(20.00))));

        PaymentReconciler::reconcile(&mut order);

        assert_eq!(order.payments[0].amount.amount(), dec!(30.00));
        assert_eq!(order.payments[1].amount.amount(), dec!(5.00));
    }
}
