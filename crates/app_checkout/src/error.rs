//! Checkout application errors

use core_kernel::PortError;
use domain_credit::CreditError;
use domain_order::OrderError;
use thiserror::Error;

/// Errors that can occur in the checkout application layer
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A save-time validation rule rejected the order
    #[error("Validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    /// Order domain failure (typically an illegal lifecycle transition)
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Credit domain failure
    #[error(transparent)]
    Credit(#[from] CreditError),

    /// A persistence collaborator failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl CheckoutError {
    /// Creates a field-level validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CheckoutError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
