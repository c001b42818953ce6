//! Checkout application ports
//!
//! Persistence is an external collaborator. The service only needs load,
//! save, and an "is this order already persisted" query; everything else
//! (transactions, hooks, indexing) belongs to the adapter.

use core_kernel::{CustomerId, OrderId, PortError};
use domain_credit::{Customer, GrantWriter};
use domain_order::Order;

/// Load/save access to orders
pub trait OrderStore {
    /// Loads an order by id
    fn get(&self, id: OrderId) -> Result<Order, PortError>;

    /// Persists the current state of an order
    fn save(&mut self, order: &Order) -> Result<(), PortError>;

    /// Returns true once the order has been persisted at least once
    ///
    /// Payment reconciliation is skipped for never-persisted orders: no
    /// payment can exist yet.
    fn is_persisted(&self, id: OrderId) -> bool;
}

/// Load/save access to customers and their credit ledgers
///
/// The `GrantWriter` supertrait lets the completion listener persist each
/// depleted grant individually through the same store.
pub trait CustomerStore: GrantWriter {
    /// Loads a customer by id
    fn get(&self, id: CustomerId) -> Result<Customer, PortError>;

    /// Persists the current state of a customer
    fn save(&mut self, customer: &Customer) -> Result<(), PortError>;
}
