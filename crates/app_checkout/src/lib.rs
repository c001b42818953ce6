//! Checkout Application Layer - store-credit reconciliation
//!
//! This crate wires the order and credit domains into the explicit
//! pipelines the reconciliation core runs:
//!
//! - **Save pipeline**: validate the credit request, clamp it through the
//!   allocator, maintain the single store-credit adjustment, reconcile the
//!   open payment, persist, then re-check sufficiency post-save.
//! - **Completion**: the order lifecycle engine fires typed listeners on
//!   each transition; the registered completion listener depletes the
//!   customer's grants oldest-first, exactly once per order.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_checkout::{CheckoutService, CreditRequest};
//!
//! let mut service = CheckoutService::new(orders, customers);
//! service.save_order(&mut order, Some(CreditRequest::apply(amount)))?;
//! service.complete_order(&mut order)?;
//! ```

pub mod adjustments;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod reconciler;
pub mod service;
pub mod validation;

pub use adjustments::AdjustmentManager;
pub use error::CheckoutError;
pub use lifecycle::{
    ConsumeCreditOnCompletion, OrderLifecycle, Transition, TransitionContext, TransitionListener,
};
pub use ports::{CustomerStore, OrderStore};
pub use reconciler::PaymentReconciler;
pub use service::{applied_store_credit, credit_ceiling, max_usable_credit, CheckoutService};
pub use validation::CreditMinimumValidator;

// Re-exported so callers of the save pipeline need only this crate.
pub use domain_credit::CreditRequest;
