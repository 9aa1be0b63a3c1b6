//! Core error types for the Trackfolio application.
//!
//! This module defines storage-agnostic error types. Data-source specific
//! failures are converted to these types by the repository layer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::auth::AuthError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Holdings calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors that occur during holding and portfolio calculations.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Negative quantity {quantity} for holding {holding_id}")]
    NegativeQuantity {
        holding_id: String,
        quantity: Decimal,
    },

    #[error("Negative purchase price {price} for holding {holding_id}")]
    NegativePurchasePrice { holding_id: String, price: Decimal },

    #[error("Negative current price {price} for holding {holding_id}")]
    NegativeCurrentPrice { holding_id: String, price: Decimal },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
