//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use core_kernel::{Currency, CustomerId, Money};
use domain_credit::Customer;
use domain_order::{LineItem, Order, OrderState, OrderUpdater, Payment, PaymentMethod};

use crate::fixtures::StringFixtures;

/// Builder for test orders
///
/// The built order has its totals already recomputed; when an open payment
/// is requested it is seeded with the order's payable total.
pub struct OrderBuilder {
    currency: Currency,
    customer_id: Option<CustomerId>,
    line_items: Vec<LineItem>,
    state: OrderState,
    open_payment: bool,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBuilder {
    /// Creates a builder for an empty USD cart
    pub fn new() -> Self {
        Self {
            currency: Currency::USD,
            customer_id: None,
            line_items: Vec::new(),
            state: OrderState::Cart,
            open_payment: false,
        }
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Attaches the owning customer
    pub fn for_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Adds a line item
    pub fn with_line_item(mut self, description: impl Into<String>, unit_price: Money) -> Self {
        self.line_items.push(LineItem::new(description, unit_price));
        self
    }

    /// Adds a single line item producing the given subtotal
    pub fn with_subtotal(self, subtotal: Money) -> Self {
        self.with_line_item(StringFixtures::line_item(), subtotal)
    }

    /// Places the order directly into a lifecycle state
    pub fn in_state(mut self, state: OrderState) -> Self {
        self.state = state;
        self
    }

    /// Attaches one unprocessed credit-card payment covering the total
    pub fn with_open_payment(mut self) -> Self {
        self.open_payment = true;
        self
    }

    /// Builds the order
    pub fn build(self) -> Order {
        let mut order = Order::new(self.currency);
        order.customer_id = self.customer_id;
        for item in self.line_items {
            order.add_line_item(item);
        }
        OrderUpdater::update(&mut order);

        if self.open_payment {
            order.add_payment(Payment::new(order.total, PaymentMethod::CreditCard));
        }
        order.state = self.state;
        order
    }
}

/// Builder for test customers with credit ledgers
pub struct CustomerBuilder {
    email: String,
    grants: Vec<Money>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a builder with a deterministic email and no credit
    pub fn new() -> Self {
        Self {
            email: StringFixtures::email().to_string(),
            grants: Vec::new(),
        }
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Issues a grant; call order determines issuance order
    pub fn with_grant(mut self, amount: Money) -> Self {
        self.grants.push(amount);
        self
    }

    /// Builds the customer
    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.email);
        for amount in self.grants {
            customer.grant_credit(amount);
        }
        customer
    }
}
