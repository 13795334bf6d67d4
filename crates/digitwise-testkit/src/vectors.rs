//! Golden arithmetic vectors.
//!
//! Each vector pins the grouped rendering of the sum, the magnitude of the
//! difference, and the product of two operands. Operands are plain digit
//! strings so the vectors can be replayed through any entry point.

use digitwise_core::{BigUnsigned, NumberError};

/// A golden arithmetic vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// First operand, decimal digits.
    pub a: &'static str,
    /// Second operand, decimal digits.
    pub b: &'static str,
    /// Expected `a + b`, grouped.
    pub sum: &'static str,
    /// Expected `|a - b|`, grouped.
    pub difference: &'static str,
    /// Expected `a * b`, grouped.
    pub product: &'static str,
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "carry ripples into a new digit",
            a: "999",
            b: "1",
            sum: "1,000",
            difference: "998",
            product: "999",
        },
        GoldenVector {
            name: "borrow leaves leading zeros to strip",
            a: "500",
            b: "499",
            sum: "999",
            difference: "1",
            product: "249,500",
        },
        GoldenVector {
            name: "three by three digits",
            a: "123",
            b: "456",
            sum: "579",
            difference: "333",
            product: "56,088",
        },
        GoldenVector {
            name: "second operand larger",
            a: "7",
            b: "1000",
            sum: "1,007",
            difference: "993",
            product: "7,000",
        },
        GoldenVector {
            name: "both zero",
            a: "0",
            b: "0",
            sum: "0",
            difference: "0",
            product: "0",
        },
        GoldenVector {
            name: "equal operands",
            a: "1234919212",
            b: "1234919212",
            sum: "2,469,838,424",
            difference: "0",
            product: "1,525,025,460,166,700,944",
        },
        GoldenVector {
            name: "multiplier with interior zeros",
            a: "37",
            b: "2001",
            sum: "2,038",
            difference: "1,964",
            product: "74,037",
        },
        GoldenVector {
            name: "past u64",
            a: "18446744073709551615",
            b: "18446744073709551615",
            sum: "36,893,488,147,419,103,230",
            difference: "0",
            product: "340,282,366,920,938,463,426,481,119,284,349,108,225",
        },
        GoldenVector {
            name: "long nines",
            a: "99999999999999999999",
            b: "1",
            sum: "100,000,000,000,000,000,000",
            difference: "99,999,999,999,999,999,998",
            product: "99,999,999,999,999,999,999",
        },
    ]
}

/// Parse both operands of a vector.
pub fn operands(vector: &GoldenVector) -> Result<(BigUnsigned, BigUnsigned), NumberError> {
    Ok((vector.a.parse()?, vector.b.parse()?))
}

/// Check every vector against the engine.
///
/// Returns `(name, matches)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let matches = match operands(v) {
                Ok((a, b)) => {
                    a.add(&b).to_string() == v.sum
                        && a.subtract(&b).to_string() == v.difference
                        && a.multiply(&b).to_string() == v.product
                }
                Err(_) => false,
            };
            (v.name.to_string(), matches)
        })
        .collect()
}
