//! Order lifecycle engine
//!
//! Drives the order's finite-state machine and fires typed listeners after
//! each successful transition. Credit consumption is one such listener,
//! registered for the move into `Complete`; the state machine's legality
//! table is what makes that move, and therefore consumption, one-shot.

use tracing::{debug, instrument};

use core_kernel::Money;
use domain_credit::{CreditConsumer, Customer, GrantWriter};
use domain_order::{Order, OrderState};

use crate::error::CheckoutError;

/// A completed state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OrderState,
    pub to: OrderState,
}

/// Mutable world handed to listeners after a transition
pub struct TransitionContext<'a> {
    /// The order that just transitioned
    pub order: &'a mut Order,
    /// The owning customer, when one is attached and loaded
    pub customer: Option<&'a mut Customer>,
    /// Durable per-grant write access
    pub grants: &'a mut dyn GrantWriter,
}

/// Reacts to completed lifecycle transitions
pub trait TransitionListener {
    /// Called after the order's state has changed
    fn after_transition(
        &self,
        transition: Transition,
        ctx: &mut TransitionContext<'_>,
    ) -> Result<(), CheckoutError>;
}

/// The order state machine plus its registered listeners
pub struct OrderLifecycle {
    listeners: Vec<Box<dyn TransitionListener>>,
}

impl OrderLifecycle {
    /// An engine with no listeners
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// The standard engine: credit consumption registered for `-> Complete`
    pub fn standard() -> Self {
        let mut lifecycle = Self::new();
        lifecycle.register(Box::new(ConsumeCreditOnCompletion));
        lifecycle
    }

    /// Registers a listener; listeners fire in registration order
    pub fn register(&mut self, listener: Box<dyn TransitionListener>) {
        self.listeners.push(listener);
    }

    /// Transitions the order and fires listeners
    ///
    /// # Errors
    ///
    /// Fails without firing any listener when the transition is illegal;
    /// listener failures propagate after the state change has happened
    /// (the transition itself is not rolled back; partial listener state
    /// is the caller's to inspect, matching the per-grant durability
    /// model).
    #[instrument(skip(self, ctx), fields(order_id = %ctx.order.id))]
    pub fn transition(
        &self,
        to: OrderState,
        ctx: &mut TransitionContext<'_>,
    ) -> Result<(), CheckoutError> {
        let from = ctx.order.state;
        ctx.order.transition_to(to)?;
        debug!(?from, ?to, "order transitioned");

        let transition = Transition { from, to };
        for listener in &self.listeners {
            listener.after_transition(transition, ctx)?;
        }
        Ok(())
    }
}

impl Default for OrderLifecycle {
    fn default() -> Self {
        Self::standard()
    }
}

/// Depletes the customer's grants when an order completes
///
/// No-op for transitions other than `-> Complete`, for orders without a
/// customer, and for orders carrying no applied credit.
pub struct ConsumeCreditOnCompletion;

impl TransitionListener for ConsumeCreditOnCompletion {
    fn after_transition(
        &self,
        transition: Transition,
        ctx: &mut TransitionContext<'_>,
    ) -> Result<(), CheckoutError> {
        if transition.to != OrderState::Complete {
            return Ok(());
        }
        let Some(customer) = ctx.customer.as_deref_mut() else {
            return Ok(());
        };

        let credit_used: Money = ctx.order.store_credit_total();
        if !credit_used.is_positive() {
            return Ok(());
        }

        debug!(customer_id = %customer.id, amount = %credit_used, "consuming store credit");
        CreditConsumer::consume(customer, credit_used, ctx.grants)?;
        Ok(())
    }
}
