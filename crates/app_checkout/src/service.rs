//! Checkout service
//!
//! The explicit save pipeline for orders carrying store credit:
//!
//! 1. validate the credit request (value floor),
//! 2. allocate and apply the credit adjustment,
//! 3. reconcile totals and the open payment (persisted orders only),
//! 4. persist the order,
//! 5. post-save, re-check that the customer's credit still covers what the
//!    order applied, compensating when it no longer does.
//!
//! A save with no credit request runs only steps 4-5; credit processing
//! never piggybacks on unrelated saves.

use tracing::{debug, instrument, warn};

use core_kernel::Money;
use domain_credit::{CreditAllocator, CreditRequest, Customer};
use domain_order::{Order, OrderState, OrderUpdater};

use crate::adjustments::AdjustmentManager;
use crate::error::CheckoutError;
use crate::lifecycle::{OrderLifecycle, TransitionContext};
use crate::ports::{CustomerStore, OrderStore};
use crate::reconciler::PaymentReconciler;
use crate::validation::CreditMinimumValidator;

/// Orchestrates order saves, credit application, and completion
pub struct CheckoutService<O, C> {
    orders: O,
    customers: C,
    validator: CreditMinimumValidator,
    lifecycle: OrderLifecycle,
}

impl<O: OrderStore, C: CustomerStore> CheckoutService<O, C> {
    /// Creates a service with no credit value floor and the standard
    /// lifecycle listeners
    pub fn new(orders: O, customers: C) -> Self {
        Self {
            orders,
            customers,
            validator: CreditMinimumValidator::none(),
            lifecycle: OrderLifecycle::standard(),
        }
    }

    /// Requires a minimum item subtotal before credit may be requested
    pub fn with_credit_minimum(mut self, minimum: Money) -> Self {
        self.validator = CreditMinimumValidator::with_minimum(minimum);
        self
    }

    /// Read access to the order store
    pub fn orders(&self) -> &O {
        &self.orders
    }

    /// Read access to the customer store
    pub fn customers(&self) -> &C {
        &self.customers
    }

    /// Saves an order, processing a credit request when one is present
    ///
    /// # Errors
    ///
    /// Fails on validation (value floor) or collaborator errors; a
    /// validation failure leaves the order unsaved.
    #[instrument(skip(self, order, credit), fields(order_id = %order.id))]
    pub fn save_order(
        &mut self,
        order: &mut Order,
        credit: Option<CreditRequest>,
    ) -> Result<(), CheckoutError> {
        if let Some(request) = credit {
            self.process_credit_request(order, &request)?;
        }

        self.orders.save(order)?;
        self.ensure_sufficient_credit(order)?;
        Ok(())
    }

    /// Drives the order into `Complete`, consuming the customer's credit
    ///
    /// The transition is validated by the state machine, so completion
    /// (and with it credit consumption) can happen at most once per order.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn complete_order(&mut self, order: &mut Order) -> Result<(), CheckoutError> {
        let mut customer = match order.customer_id {
            Some(id) => Some(self.customers.get(id)?),
            None => None,
        };

        let lifecycle = &self.lifecycle;
        let grants = &mut self.customers;
        let mut ctx = TransitionContext {
            order,
            customer: customer.as_mut(),
            grants,
        };
        lifecycle.transition(OrderState::Complete, &mut ctx)?;

        self.orders.save(order)?;
        Ok(())
    }

    /// Whether gateway processing can proceed for this order
    ///
    /// False when money is still owed but no unprocessed payment remains
    /// to collect it (e.g., credit removal raised the total after the
    /// payment was captured).
    pub fn can_process_payments(&self, order: &Order) -> bool {
        !(order.total.is_positive() && !order.has_unprocessed_payment())
    }

    /// Applies a credit request to the order's adjustment list
    ///
    /// Orders created from the admin console may not have a customer yet;
    /// those skip credit processing entirely.
    fn process_credit_request(
        &mut self,
        order: &mut Order,
        request: &CreditRequest,
    ) -> Result<(), CheckoutError> {
        let Some(customer_id) = order.customer_id else {
            return Ok(());
        };

        self.validator.validate(order, request)?;
        let customer = self.customers.get(customer_id)?;

        let allocation = CreditAllocator::allocate(
            request,
            order.store_credit_total(),
            order.item_total(),
            order.total,
            customer.store_credit_total(),
        );
        debug!(?allocation, "credit request allocated");
        AdjustmentManager::apply(order, allocation);

        // A never-persisted order has no payments to reconcile yet; its
        // totals settle on the next updater run.
        if self.orders.is_persisted(order.id) {
            PaymentReconciler::reconcile(order);
        }
        Ok(())
    }

    /// Post-save compensation: drop the credit when the customer can no
    /// longer cover it
    ///
    /// Credit spent elsewhere (a concurrent order completing first, an
    /// external revocation) invalidates this order's adjustment. The order
    /// loses the credit benefit and is re-persisted; the save itself never
    /// fails for this.
    fn ensure_sufficient_credit(&mut self, order: &mut Order) -> Result<(), CheckoutError> {
        if order.is_complete() {
            return Ok(());
        }
        let Some(customer_id) = order.customer_id else {
            return Ok(());
        };

        let applied = order.store_credit_total();
        if !applied.is_positive() {
            return Ok(());
        }

        let customer = self.customers.get(customer_id)?;
        if customer.store_credit_total() >= applied {
            return Ok(());
        }

        warn!(
            customer_id = %customer_id,
            applied = %applied,
            available = %customer.store_credit_total(),
            "customer credit no longer covers applied amount; dropping credit from order"
        );
        order.remove_store_credit_adjustments();
        OrderUpdater::update(order);
        OrderUpdater::update_payment_state(order);
        self.orders.save(order)?;
        Ok(())
    }
}

/// Store credit currently applied to the order
///
/// A pending request overrides the persisted adjustments until the order is
/// saved; with no request in flight, the applied amount is the summed
/// magnitude of existing store-credit adjustments.
pub fn applied_store_credit(order: &Order, pending: Option<&CreditRequest>) -> Money {
    match pending {
        Some(request) if !request.remove => request.amount.round_half_even(2).max_zero(),
        _ => order.store_credit_total(),
    }
}

/// Advisory cap for presentation: the most credit this order could carry
pub fn credit_ceiling(order: &Order) -> Money {
    CreditAllocator::credit_ceiling(order.item_total())
}

/// Advisory cap for presentation: the ceiling bounded by the customer's
/// available credit
pub fn max_usable_credit(order: &Order, customer: &Customer) -> Money {
    CreditAllocator::max_usable_credit(order.item_total(), customer.store_credit_total())
}
