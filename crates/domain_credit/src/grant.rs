//! Credit grants
//!
//! A grant is one discrete balance record contributing to a customer's
//! total store credit. Grants are only ever depleted by the consumer at
//! order completion; nothing in this core replenishes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CreditGrantId, CustomerId, Money};

/// One store-credit balance issued to a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditGrant {
    /// Unique identifier
    pub id: CreditGrantId,
    /// Owning customer
    pub customer_id: CustomerId,
    /// Remaining balance; never negative
    pub remaining: Money,
    /// Why the grant was issued (refund, goodwill, promotion)
    pub memo: Option<String>,
    /// When the grant was issued
    pub issued_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl CreditGrant {
    /// Issues a new grant
    pub fn new(customer_id: CustomerId, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: CreditGrantId::new_v7(),
            customer_id,
            remaining: amount,
            memo: None,
            issued_at: now,
            updated_at: now,
        }
    }

    /// Attaches an issuance memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Depletes up to `want` from this grant, returning what was taken
    ///
    /// The remaining balance never goes below zero; a grant that cannot
    /// cover `want` is emptied and the shortfall is left for later grants.
    pub fn consume_up_to(&mut self, want: Money) -> Money {
        let take = self.remaining.min(want).max_zero();
        self.remaining = self.remaining - take;
        self.updated_at = Utc::now();
        take
    }
}
