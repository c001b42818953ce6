//! Credit consumption at order completion
//!
//! The consumer depletes a customer's grants by the credit actually applied
//! to a completed order, walking grants oldest-first. Each grant is written
//! through the [`GrantWriter`] port as it is mutated, so a failure partway
//! leaves already-visited grants durably updated and the rest untouched.

use core_kernel::Money;

use crate::customer::Customer;
use crate::error::CreditError;
use crate::ports::GrantWriter;

/// Depletes a customer's credit grants, oldest first
#[derive(Debug, Default)]
pub struct CreditConsumer;

impl CreditConsumer {
    /// Consumes `amount` from the customer's grants in issuance order
    ///
    /// Empty grants are skipped; a grant larger than the outstanding
    /// amount is partially depleted and the walk stops. Returns the total
    /// actually consumed, which is less than `amount` when the ledger
    /// cannot cover it.
    ///
    /// One-shot per order: the caller fires this from the completion
    /// transition, which the lifecycle state machine allows at most once.
    ///
    /// # Errors
    ///
    /// Propagates the first grant-write failure; grants written before the
    /// failure stay written.
    pub fn consume(
        customer: &mut Customer,
        amount: Money,
        writer: &mut dyn GrantWriter,
    ) -> Result<Money, CreditError> {
        let mut outstanding = amount.max_zero();
        let mut consumed_total = Money::zero(amount.currency());

        for grant in customer.grants.iter_mut() {
            if outstanding.is_zero() {
                break;
            }
            if !grant.remaining.is_positive() {
                continue;
            }

            let taken = grant.consume_up_to(outstanding);
            writer.persist_grant(grant)?;

            outstanding = outstanding - taken;
            consumed_total = consumed_total + taken;
        }

        Ok(consumed_total)
    }
}
