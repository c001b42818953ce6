//! Order aggregate
//!
//! The order owns its line items, adjustments, and payments. It refers to
//! its customer by id only; the customer (and their credit grants) is
//! managed by the credit domain.
//!
//! # Invariants
//!
//! - At most one store-credit adjustment exists at any time
//! - `total` is non-negative and maintained by [`crate::OrderUpdater`]
//! - The lifecycle state only changes through [`Order::transition_to`]

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, CustomerId, LineItemId, Money, OrderId};

use crate::adjustment::Adjustment;
use crate::error::OrderError;
use crate::payment::Payment;
use crate::state::OrderState;
use crate::updater::OrderPaymentState;

/// A purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: OrderId,
    /// Order number (human-readable)
    pub number: String,
    /// Owning customer; an order may exist before a customer is attached
    pub customer_id: Option<CustomerId>,
    /// Currency for every monetary field on the order
    pub currency: Currency,
    /// Lifecycle state
    pub state: OrderState,
    /// Physical line items
    pub line_items: Vec<LineItem>,
    /// Signed adjustments against the total
    pub adjustments: Vec<Adjustment>,
    /// Payments collected or pending
    pub payments: Vec<Payment>,
    /// Payable total; recomputed by the updater after mutations
    pub total: Money,
    /// Derived payment state; recomputed by the updater
    pub payment_state: OrderPaymentState,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new cart-state order
    pub fn new(currency: Currency) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new_v7(),
            number: generate_order_number(),
            customer_id: None,
            currency,
            state: OrderState::Cart,
            line_items: Vec::new(),
            adjustments: Vec::new(),
            payments: Vec::new(),
            total: Money::zero(currency),
            payment_state: OrderPaymentState::BalanceDue,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches the owning customer
    pub fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Adds a line item
    ///
    /// The cached total is stale until the updater runs.
    pub fn add_line_item(&mut self, item: LineItem) {
        self.line_items.push(item);
        self.touch();
    }

    /// Adds an adjustment
    pub fn add_adjustment(&mut self, adjustment: Adjustment) {
        self.adjustments.push(adjustment);
        self.touch();
    }

    /// Adds a payment
    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
        self.touch();
    }

    /// Sum of line item amounts
    pub fn item_total(&self) -> Money {
        self.line_items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| acc + item.amount())
    }

    /// Sum of signed adjustment amounts
    pub fn adjustment_total(&self) -> Money {
        self.adjustments
            .iter()
            .fold(Money::zero(self.currency), |acc, adj| acc + adj.amount)
    }

    /// Store-credit adjustments currently on the order
    pub fn store_credit_adjustments(&self) -> impl Iterator<Item = &Adjustment> {
        self.adjustments.iter().filter(|a| a.is_store_credit())
    }

    /// Magnitude of store credit currently applied
    ///
    /// Store-credit adjustments are stored negative; this returns the
    /// positive applied amount.
    pub fn store_credit_total(&self) -> Money {
        self.store_credit_adjustments()
            .fold(Money::zero(self.currency), |acc, adj| acc + adj.amount.abs())
    }

    /// The store-credit adjustment, if one exists
    pub fn store_credit_adjustment_mut(&mut self) -> Option<&mut Adjustment> {
        self.adjustments.iter_mut().find(|a| a.is_store_credit())
    }

    /// Destroys every store-credit adjustment, returning how many were removed
    pub fn remove_store_credit_adjustments(&mut self) -> usize {
        let before = self.adjustments.len();
        self.adjustments.retain(|a| !a.is_store_credit());
        let removed = before - self.adjustments.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// First payment not yet sent to a gateway, if any
    pub fn first_unprocessed_payment_mut(&mut self) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|p| p.is_unprocessed())
    }

    /// Returns true if any payment is still unprocessed
    pub fn has_unprocessed_payment(&self) -> bool {
        self.payments.iter().any(|p| p.is_unprocessed())
    }

    /// Sum of captured payment amounts
    pub fn paid_total(&self) -> Money {
        self.payments
            .iter()
            .filter(|p| p.state == crate::payment::PaymentState::Completed)
            .fold(Money::zero(self.currency), |acc, p| acc + p.amount)
    }

    /// Moves the order to a new lifecycle state
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidTransition`] when the legality table
    /// forbids the move; in particular a completed order can never
    /// transition again.
    pub fn transition_to(&mut self, target: OrderState) -> Result<(), OrderError> {
        if !self.state.can_transition_to(target) {
            return Err(OrderError::InvalidTransition {
                from: format!("{:?}", self.state),
                to: format!("{:?}", target),
            });
        }
        self.state = target;
        self.touch();
        Ok(())
    }

    /// Returns true once the order has completed
    pub fn is_complete(&self) -> bool {
        self.state == OrderState::Complete
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A physical line item on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Item ID
    pub id: LineItemId,
    /// Description
    pub description: String,
    /// Quantity
    pub quantity: Decimal,
    /// Unit price
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a new line item with quantity one
    pub fn new(description: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: LineItemId::new_v7(),
            description: description.into(),
            quantity: Decimal::ONE,
            unit_price,
        }
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Extended amount for this line
    pub fn amount(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Generates a unique order number
fn generate_order_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("ORD-{}", duration.as_millis() % 10_000_000_000)
}
