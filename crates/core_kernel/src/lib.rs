//! Core Kernel - Foundational types for the commerce credit system
//!
//! This crate provides the building blocks shared by every domain module:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed entity identifiers
//! - The port error type used by collaborator interfaces

pub mod identifiers;
pub mod money;
pub mod ports;

pub use identifiers::{
    AdjustmentId, CreditGrantId, CustomerId, LineItemId, OrderId, PaymentId,
};
pub use money::{Currency, Money, MoneyError};
pub use ports::PortError;
