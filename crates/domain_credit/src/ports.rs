//! Credit domain ports

use core_kernel::PortError;

use crate::grant::CreditGrant;

/// Durable write access to individual credit grants
///
/// Consumption persists each grant as it is mutated rather than batching,
/// so partial progress survives a failure. Implemented by the customer
/// store in the application layer and by in-memory adapters in tests.
pub trait GrantWriter {
    /// Persists the current state of one grant
    fn persist_grant(&mut self, grant: &CreditGrant) -> Result<(), PortError>;
}
