//! Order adjustments
//!
//! An adjustment is a signed line modifying an order's payable total
//! independently of its physical line items. Store-credit adjustments carry
//! negative amounts; an order holds at most one of them at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AdjustmentId, Money};

/// What produced an adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentSource {
    /// Customer store credit applied against the total
    StoreCredit,
    /// Promotion or coupon
    Promotion,
    /// Manually entered by an operator
    Manual,
}

/// A signed modification to an order's payable total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    /// Unique identifier
    pub id: AdjustmentId,
    /// Human-readable label shown on the order
    pub label: String,
    /// Signed amount; negative amounts reduce the total
    pub amount: Money,
    /// What produced this adjustment
    pub source: AdjustmentSource,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Adjustment {
    /// Creates a new adjustment
    pub fn new(label: impl Into<String>, amount: Money, source: AdjustmentSource) -> Self {
        let now = Utc::now();
        Self {
            id: AdjustmentId::new_v7(),
            label: label.into(),
            amount,
            source,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a store-credit adjustment for an applied credit amount
    ///
    /// The applied amount is positive; the stored adjustment amount is its
    /// negation.
    pub fn store_credit(applied: Money) -> Self {
        Self::new("Store credit", -applied, AdjustmentSource::StoreCredit)
    }

    /// Mutates the amount in place
    ///
    /// Recalculation updates the existing record rather than replacing it,
    /// so identifiers held by callers stay valid.
    pub fn update_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Returns true for store-credit adjustments
    pub fn is_store_credit(&self) -> bool {
        self.source == AdjustmentSource::StoreCredit
    }
}
