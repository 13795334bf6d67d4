//! # Digitwise Core
//!
//! Arbitrary-precision non-negative integers stored as base-10 digits.
//!
//! This crate contains no I/O and no shared mutable state. Every operation is
//! a pure function from immutable operands to a freshly allocated result, so
//! values can be shared across threads for reading without coordination.
//!
//! ## Key Types
//!
//! - [`BigUnsigned`] - The number itself: normalized digits, most-significant first
//! - [`NumberInput`] - The accepted construction shapes
//! - [`NumberError`] - Why an input was rejected
//! - [`Grouping`] - Separator and group width for rendering
//!
//! ## Example
//!
//! ```rust
//! use digitwise_core::BigUnsigned;
//!
//! let a: BigUnsigned = "999".parse().unwrap();
//! let b = BigUnsigned::from(1u8);
//!
//! assert_eq!(a.add(&b).to_string(), "1,000");
//! assert_eq!(a.subtract(&b).to_string(), "998");
//! assert_eq!(a.multiply(&b).to_string(), "999");
//! ```
//!
//! ## Subtraction
//!
//! There is no signed representation. [`BigUnsigned::subtract`] returns the
//! magnitude of the difference; use [`BigUnsigned::compare_magnitude`] or
//! [`BigUnsigned::checked_subtract`] when the direction matters.

pub mod digits;
pub mod encoding;
pub mod error;
pub mod format;
pub mod input;
pub mod number;

pub use error::{ErrorKind, NumberError};
pub use format::Grouping;
pub use input::NumberInput;
pub use number::BigUnsigned;
