//! Store-credit adjustment management
//!
//! Translates an allocation decision into the order's adjustment list,
//! maintaining the invariant that an order carries zero or one
//! store-credit adjustment.

use domain_credit::Allocation;
use domain_order::{Adjustment, Order};

/// Creates, updates, or removes the order's store-credit adjustment
#[derive(Debug, Default)]
pub struct AdjustmentManager;

impl AdjustmentManager {
    /// Applies an allocation result to the order
    ///
    /// - `Remove` destroys every store-credit adjustment.
    /// - `Apply` updates the existing adjustment's amount in place when one
    ///   exists (identifiers held by callers stay valid), otherwise creates
    ///   a new one.
    ///
    /// Postcondition: the order has exactly zero or one store-credit
    /// adjustment.
    pub fn apply(order: &mut Order, allocation: Allocation) {
        match allocation {
            Allocation::Remove => {
                order.remove_store_credit_adjustments();
            }
            Allocation::Apply(amount) => {
                if let Some(adjustment) = order.store_credit_adjustment_mut() {
                    adjustment.update_amount(-amount);
                } else {
                    order.add_adjustment(Adjustment::store_credit(amount));
                }
            }
        }
    }
}
