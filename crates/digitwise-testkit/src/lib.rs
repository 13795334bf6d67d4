//! # Digitwise Testkit
//!
//! Testing utilities for digitwise.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known operands with their expected sum, difference and product
//! - **Generators**: Proptest strategies for digit strings and numbers
//! - **Fixtures**: Seeded sources of large random operands
//!
//! ## Golden Vectors
//!
//! ```rust
//! use digitwise_testkit::vectors::{all_vectors, operands};
//!
//! for vector in all_vectors() {
//!     let (a, b) = operands(&vector).unwrap();
//!     assert_eq!(a.multiply(&b).to_string(), vector.product);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use digitwise_testkit::generators::big_unsigned;
//!
//! proptest! {
//!     #[test]
//!     fn add_is_commutative(a in big_unsigned(40), b in big_unsigned(40)) {
//!         prop_assert_eq!(a.add(&b), b.add(&a));
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use digitwise_testkit::fixtures::OperandFixture;
//!
//! let mut fixture = OperandFixture::with_seed(1);
//! let (a, b) = fixture.pair(100, 80);
//! assert_eq!(a.add(&b).subtract(&b), a);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{seeded_fixtures, OperandFixture};
pub use generators::{big_unsigned, digit_string};
pub use vectors::{all_vectors, operands, verify_all_vectors, GoldenVector};
