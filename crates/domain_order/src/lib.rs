//! Order Domain - orders, adjustments, and payments
//!
//! This crate owns the order aggregate for the commerce credit system: the
//! order itself, its signed adjustments, its payment records, the lifecycle
//! state machine, and the totals updater that keeps the cached payable
//! total consistent with line items and adjustments.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_order::{Order, LineItem, Adjustment, OrderUpdater};
//!
//! let mut order = Order::new(Currency::USD);
//! order.add_line_item(LineItem::new("Widget", price));
//! order.add_adjustment(Adjustment::store_credit(applied));
//! OrderUpdater::update(&mut order);
//! ```

pub mod adjustment;
pub mod error;
pub mod order;
pub mod payment;
pub mod state;
pub mod updater;

pub use adjustment::{Adjustment, AdjustmentSource};
pub use error::OrderError;
pub use order::{LineItem, Order};
pub use payment::{Payment, PaymentMethod, PaymentState};
pub use state::OrderState;
pub use updater::{OrderPaymentState, OrderUpdater};
