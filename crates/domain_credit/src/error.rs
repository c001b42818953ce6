//! Credit domain errors

use core_kernel::{MoneyError, PortError};
use thiserror::Error;

/// Errors that can occur in the credit domain
#[derive(Debug, Error)]
pub enum CreditError {
    /// Monetary arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// A grant write failed partway through consumption
    #[error("Grant persistence failed: {0}")]
    Port(#[from] PortError),
}
