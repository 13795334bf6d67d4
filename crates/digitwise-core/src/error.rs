//! Error types for the digitwise engine.
//!
//! Arithmetic on valid numbers is total. Everything here is raised while
//! building a [`BigUnsigned`](crate::BigUnsigned) from caller input, or while
//! converting one back into a fixed-width native integer.

use thiserror::Error;

/// Errors raised when input cannot become a `BigUnsigned`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("unsupported input type: {0}")]
    UnsupportedInputType(String),

    #[error("input is not an integer: {0}")]
    NotAnInteger(String),

    #[error("input cannot be negative: {0}")]
    Negative(String),

    #[error("input is empty")]
    EmptyInput,

    #[error("invalid digit string: found {found:?} at position {position}")]
    InvalidDigitString { position: usize, found: String },

    #[error("digit out of range at position {position}: {value} is not in 0..=9")]
    DigitOutOfRange { position: usize, value: i64 },

    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
}

/// Field-less discriminant of [`NumberError`], for callers that branch on the
/// failure without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedInputType,
    NotAnInteger,
    Negative,
    EmptyInput,
    InvalidDigitString,
    DigitOutOfRange,
    Overflow,
}

impl NumberError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumberError::UnsupportedInputType(_) => ErrorKind::UnsupportedInputType,
            NumberError::NotAnInteger(_) => ErrorKind::NotAnInteger,
            NumberError::Negative(_) => ErrorKind::Negative,
            NumberError::EmptyInput => ErrorKind::EmptyInput,
            NumberError::InvalidDigitString { .. } => ErrorKind::InvalidDigitString,
            NumberError::DigitOutOfRange { .. } => ErrorKind::DigitOutOfRange,
            NumberError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}
