//! Customer credit ledger
//!
//! The customer owns an ordered collection of credit grants. Issuance
//! order is significant: consumption always walks grants oldest-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CreditGrantId, CustomerId, Money};

use crate::grant::CreditGrant;

/// A customer with a store-credit ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Contact email
    pub email: String,
    /// Credit grants in issuance order, oldest first
    pub grants: Vec<CreditGrant>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer with no credit
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CustomerId::new_v7(),
            email: email.into(),
            grants: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Issues a new credit grant, appended after all existing grants
    pub fn grant_credit(&mut self, amount: Money) -> CreditGrantId {
        let grant = CreditGrant::new(self.id, amount);
        let id = grant.id;
        self.grants.push(grant);
        self.updated_at = Utc::now();
        id
    }

    /// Derived total available credit: the sum of grant balances
    pub fn store_credit_total(&self) -> Money {
        self.grants.iter().fold(
            Money::zero(self.currency_hint()),
            |acc, grant| acc + grant.remaining,
        )
    }

    /// Currency of the ledger, taken from the first grant
    ///
    /// A customer's grants all share one currency; with no grants the
    /// ledger defaults to USD, and the zero total is currency-neutral in
    /// practice.
    fn currency_hint(&self) -> core_kernel::Currency {
        self.grants
            .first()
            .map(|g| g.remaining.currency())
            .unwrap_or(core_kernel::Currency::USD)
    }
}
