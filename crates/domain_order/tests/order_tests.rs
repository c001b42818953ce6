//! Comprehensive tests for domain_order

use rust_decimal_macros::dec;

use core_kernel::{Currency, CustomerId, Money};
use domain_order::adjustment::{Adjustment, AdjustmentSource};
use domain_order::order::{LineItem, Order};
use domain_order::payment::{Payment, PaymentMethod, PaymentState};
use domain_order::state::OrderState;
use domain_order::updater::{OrderPaymentState, OrderUpdater};

fn usd(amount: &str) -> Money {
    Money::new(amount.parse().unwrap(), Currency::USD)
}

fn order_with_subtotal(subtotal: &str) -> Order {
    let mut order = Order::new(Currency::USD);
    order.add_line_item(LineItem::new("Item", usd(subtotal)));
    OrderUpdater::update(&mut order);
    order
}

// ============================================================================
// Order Aggregate Tests
// ============================================================================

mod order_tests {
    use super::*;

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new(Currency::USD);

        assert_eq!(order.state, OrderState::Cart);
        assert!(order.number.starts_with("ORD-"));
        assert!(order.customer_id.is_none());
        assert!(order.line_items.is_empty());
        assert!(order.adjustments.is_empty());
        assert!(order.payments.is_empty());
        assert!(order.total.is_zero());
        assert_eq!(order.payment_state, OrderPaymentState::BalanceDue);
    }

    #[test]
    fn test_with_customer_attaches_customer() {
        let customer_id = CustomerId::new();
        let order = Order::new(Currency::USD).with_customer(customer_id);

        assert_eq!(order.customer_id, Some(customer_id));
    }

    #[test]
    fn test_item_total_multiplies_quantity() {
        let mut order = Order::new(Currency::USD);
        order.add_line_item(LineItem::new("Widget", usd("9.99")).with_quantity(dec!(2)));

        assert_eq!(order.item_total().amount(), dec!(19.98));
    }

    #[test]
    fn test_store_credit_queries() {
        let mut order = order_with_subtotal("100.00");
        order.add_adjustment(Adjustment::store_credit(usd("25.00")));
        order.add_adjustment(Adjustment::new(
            "Promo",
            usd("-5.00"),
            AdjustmentSource::Promotion,
        ));

        assert_eq!(order.store_credit_adjustments().count(), 1);
        assert_eq!(order.store_credit_total(), usd("25.00"));
        assert_eq!(order.adjustment_total(), usd("-30.00"));
    }

    #[test]
    fn test_first_unprocessed_payment_skips_processed() {
        let mut order = order_with_subtotal("100.00");

        let mut captured = Payment::new(usd("40.00"), PaymentMethod::CreditCard);
        captured.complete();
        let captured_id = captured.id;
        order.add_payment(captured);

        let open = Payment::new(usd("60.00"), PaymentMethod::PayPal);
        let open_id = open.id;
        order.add_payment(open);

        let first = order.first_unprocessed_payment_mut().unwrap();
        assert_eq!(first.id, open_id);
        assert_ne!(first.id, captured_id);
    }

    #[test]
    fn test_has_unprocessed_payment() {
        let mut order = order_with_subtotal("100.00");
        assert!(!order.has_unprocessed_payment());

        order.add_payment(Payment::new(usd("100.00"), PaymentMethod::CreditCard));
        assert!(order.has_unprocessed_payment());

        order.first_unprocessed_payment_mut().unwrap().void();
        assert!(!order.has_unprocessed_payment());
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_full_checkout_path() {
        let mut order = Order::new(Currency::USD);

        order.transition_to(OrderState::Payment).unwrap();
        order.transition_to(OrderState::Confirm).unwrap();
        order.transition_to(OrderState::Complete).unwrap();

        assert!(order.is_complete());
    }

    #[test]
    fn test_completion_is_one_shot() {
        let mut order = Order::new(Currency::USD);
        order.transition_to(OrderState::Payment).unwrap();
        order.transition_to(OrderState::Confirm).unwrap();
        order.transition_to(OrderState::Complete).unwrap();

        let err = order.transition_to(OrderState::Complete).unwrap_err();
        assert!(err.to_string().contains("Complete"));
    }

    #[test]
    fn test_canceled_order_cannot_complete() {
        let mut order = Order::new(Currency::USD);
        order.transition_to(OrderState::Canceled).unwrap();

        assert!(order.transition_to(OrderState::Complete).is_err());
    }
}

// ============================================================================
// Updater Tests
// ============================================================================

mod updater_tests {
    use super::*;

    #[test]
    fn test_apply_then_remove_credit_round_trips_total() {
        let mut order = order_with_subtotal("80.00");
        let before = order.total;

        order.add_adjustment(Adjustment::store_credit(usd("20.00")));
        OrderUpdater::update(&mut order);
        assert_eq!(order.total, usd("60.00"));

        order.remove_store_credit_adjustments();
        OrderUpdater::update(&mut order);
        assert_eq!(order.total, before);
    }

    #[test]
    fn test_total_never_negative() {
        let mut order = order_with_subtotal("10.00");
        order.add_adjustment(Adjustment::new(
            "Manual markdown",
            usd("-25.00"),
            AdjustmentSource::Manual,
        ));
        OrderUpdater::update(&mut order);

        assert!(order.total.is_zero());
    }

    #[test]
    fn test_payment_state_tracks_captures() {
        let mut order = order_with_subtotal("50.00");

        let mut payment = Payment::new(usd("50.00"), PaymentMethod::CreditCard);
        payment.complete();
        order.add_payment(payment);
        OrderUpdater::update_payment_state(&mut order);

        assert_eq!(order.payment_state, OrderPaymentState::Paid);
        assert_eq!(order.paid_total(), usd("50.00"));
    }

    #[test]
    fn test_unprocessed_payment_does_not_count_as_paid() {
        let mut order = order_with_subtotal("50.00");
        order.add_payment(Payment::new(usd("50.00"), PaymentMethod::CreditCard));
        OrderUpdater::update_payment_state(&mut order);

        assert_eq!(order.payment_state, OrderPaymentState::BalanceDue);
        assert_eq!(order.payments[0].state, PaymentState::Checkout);
    }
}
