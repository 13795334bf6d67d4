//! Error types for the calculator.

use digitwise_core::NumberError;
use thiserror::Error;

/// Errors that can occur during calculator operations.
#[derive(Debug, Error)]
pub enum CalcError {
    /// An operand could not be turned into a number.
    #[error("invalid operand: {0}")]
    Operand(#[from] NumberError),

    /// A report could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
