//! Credit Domain - store-credit grants and their application
//!
//! This crate owns the customer's credit ledger and the two hard pieces of
//! the reconciliation core:
//!
//! - **Allocation**: clamping a requested credit amount against the
//!   customer's balance, the order's pre-credit total, and the
//!   subtotal-minus-one-cent gateway ceiling.
//! - **Consumption**: depleting grants oldest-first when an order
//!   completes, persisting each grant as it is written.
//!
//! Allocation is pure; consumption touches storage only through the
//! [`GrantWriter`] port.

pub mod allocator;
pub mod consumer;
pub mod customer;
pub mod error;
pub mod grant;
pub mod ports;

pub use allocator::{Allocation, CreditAllocator, CreditRequest};
pub use consumer::CreditConsumer;
pub use customer::Customer;
pub use error::CreditError;
pub use grant::CreditGrant;
pub use ports::GrantWriter;
