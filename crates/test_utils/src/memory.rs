//! In-memory port adapters
//!
//! Hash-map-backed implementations of the checkout ports for tests. The
//! customer adapter persists grants individually, matching the durability
//! model the consumer relies on.

use std::collections::HashMap;

use app_checkout::{CustomerStore, OrderStore};
use core_kernel::{CustomerId, OrderId, PortError};
use domain_credit::{CreditGrant, Customer, GrantWriter};
use domain_order::Order;

/// In-memory order store
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: HashMap<OrderId, Order>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an order as already persisted
    pub fn insert(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// Number of persisted orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True when no order has been persisted
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, id: OrderId) -> Result<Order, PortError> {
        self.orders
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Order", id))
    }

    fn save(&mut self, order: &Order) -> Result<(), PortError> {
        self.orders.insert(order.id, order.clone());
        Ok(())
    }

    fn is_persisted(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }
}

/// In-memory customer store with per-grant writes
#[derive(Default)]
pub struct InMemoryCustomerStore {
    customers: HashMap<CustomerId, Customer>,
    grant_writes: usize,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a customer
    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id, customer);
    }

    /// How many individual grant writes have happened
    pub fn grant_writes(&self) -> usize {
        self.grant_writes
    }
}

impl GrantWriter for InMemoryCustomerStore {
    fn persist_grant(&mut self, grant: &CreditGrant) -> Result<(), PortError> {
        let customer = self
            .customers
            .get_mut(&grant.customer_id)
            .ok_or_else(|| PortError::not_found("Customer", grant.customer_id))?;

        match customer.grants.iter_mut().find(|g| g.id == grant.id) {
            Some(stored) => *stored = grant.clone(),
            None => customer.grants.push(grant.clone()),
        }
        self.grant_writes += 1;
        Ok(())
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn get(&self, id: CustomerId) -> Result<Customer, PortError> {
        self.customers
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Customer", id))
    }

    fn save(&mut self, customer: &Customer) -> Result<(), PortError> {
        self.customers.insert(customer.id, customer.clone());
        Ok(())
    }
}
