//! # Digitwise
//!
//! Arbitrary-precision non-negative integer arithmetic over decimal digits,
//! with a configurable calculator and a command-line driver.
//!
//! ## Overview
//!
//! - **Numbers**: [`BigUnsigned`] values are immutable digit sequences
//! - **Arithmetic**: addition, magnitude-only subtraction, long multiplication
//! - **Calculator**: evaluates all three for a pair of operands and renders
//!   the results with digit grouping
//!
//! ## Usage
//!
//! ```rust
//! use digitwise::{Calculator, CalculatorConfig};
//!
//! let calculator = Calculator::new(CalculatorConfig::default());
//! let report = calculator.evaluate_text("123", "456").unwrap();
//!
//! assert_eq!(report.sum_string(), "579");
//! assert_eq!(report.difference_string(), "-333");
//! assert_eq!(report.product_string(), "56,088");
//! ```
//!
//! ## Re-exports
//!
//! - `digitwise::core` - The engine (`BigUnsigned`, `NumberInput`, errors)

pub mod calculator;
pub mod error;
pub mod value;

// Re-export component crates
pub use digitwise_core as core;

// Re-export main types for convenience
pub use calculator::{Calculator, CalculatorConfig, Difference, RenderedReport, Report};
pub use error::{CalcError, Result};
pub use value::{classify, parse_operand};

// Re-export commonly used core types
pub use digitwise_core::{BigUnsigned, ErrorKind, Grouping, NumberError, NumberInput};
