//! Order domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the order domain
#[derive(Debug, Error)]
pub enum OrderError {
    /// Illegal lifecycle transition
    #[error("Invalid order state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Monetary arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
