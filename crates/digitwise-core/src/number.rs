//! `BigUnsigned`: an arbitrary-precision non-negative integer stored as
//! decimal digits.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::digits;
use crate::error::NumberError;
use crate::format::{self, Grouping};
use crate::input::{self, NumberInput};

/// An arbitrary-precision non-negative integer.
///
/// The value is held as decimal digits, most-significant first. The sequence
/// is never empty and has no leading zero unless the value is zero, which is
/// exactly `[0]`.
///
/// Values are immutable: every arithmetic operation returns a new number and
/// leaves both operands untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUnsigned {
    digits: Vec<u8>,
}

impl BigUnsigned {
    /// Build a number from any accepted input shape.
    pub fn new(input: impl Into<NumberInput>) -> Result<Self, NumberError> {
        let digits = input.into().into_digits()?;
        Ok(Self::from_normalized(digits))
    }

    /// Wrap a digit vector the algorithms have already normalized.
    fn from_normalized(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.len() == 1 || digits[0] != 0);
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// The value zero.
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// The value one.
    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Check if the value is zero.
    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }

    /// Number of decimal digits (1 for zero).
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// A copy of the digits, most-significant first.
    ///
    /// The returned vector is independent of this number.
    pub fn digits(&self) -> Vec<u8> {
        self.digits.clone()
    }

    /// Borrow the digits, most-significant first.
    pub fn as_digits(&self) -> &[u8] {
        &self.digits
    }

    /// Three-way comparison of magnitudes.
    pub fn compare_magnitude(a: &Self, b: &Self) -> Ordering {
        digits::compare(&a.digits, &b.digits)
    }

    /// `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_normalized(digits::add(&self.digits, &other.digits))
    }

    /// Magnitude of the difference, `|self - other|`.
    ///
    /// The sign is discarded: `3.subtract(5)` and `5.subtract(3)` both return
    /// `2`. Call [`compare_magnitude`](Self::compare_magnitude) first when the
    /// direction matters, or use [`checked_subtract`](Self::checked_subtract).
    pub fn subtract(&self, other: &Self) -> Self {
        let digits = match Self::compare_magnitude(self, other) {
            Ordering::Equal => vec![0],
            Ordering::Greater => digits::sub(&self.digits, &other.digits),
            Ordering::Less => digits::sub(&other.digits, &self.digits),
        };
        Self::from_normalized(digits)
    }

    /// `self - other`, or `None` when `other` is larger.
    pub fn checked_subtract(&self, other: &Self) -> Option<Self> {
        match Self::compare_magnitude(self, other) {
            Ordering::Less => None,
            _ => Some(self.subtract(other)),
        }
    }

    /// `self * other` by long multiplication.
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_normalized(digits::mul(&self.digits, &other.digits))
    }

    /// Render with the given grouping.
    pub fn to_grouped_string(&self, grouping: &Grouping) -> String {
        format::render(&self.digits, grouping)
    }

    /// Render the bare digits with no separators.
    pub fn to_plain_string(&self) -> String {
        format::render(&self.digits, &Grouping::none())
    }
}

impl Default for BigUnsigned {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare_magnitude(self, other)
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders with `,` every three digits. The alternate form (`{:#}`) renders
/// the bare digits.
impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.to_plain_string())
        } else {
            f.write_str(&self.to_grouped_string(&Grouping::default()))
        }
    }
}

impl fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUnsigned({})", self.to_plain_string())
    }
}

impl FromStr for BigUnsigned {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for BigUnsigned {
    type Error = NumberError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for BigUnsigned {
    type Error = NumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<i64> for BigUnsigned {
    type Error = NumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i128> for BigUnsigned {
    type Error = NumberError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for BigUnsigned {
    type Error = NumberError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[i64]> for BigUnsigned {
    type Error = NumberError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<Vec<u8>> for BigUnsigned {
    type Error = NumberError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(values.into_iter().map(i64::from).collect::<Vec<_>>())
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigUnsigned {
                fn from(value: $t) -> Self {
                    Self::from_normalized(input::from_u128(value as u128))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_into_unsigned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&BigUnsigned> for $t {
                type Error = NumberError;

                fn try_from(number: &BigUnsigned) -> Result<Self, Self::Error> {
                    number.digits.iter().try_fold(0 as $t, |acc, &digit| {
                        acc.checked_mul(10)
                            .and_then(|acc| acc.checked_add(digit as $t))
                            .ok_or(NumberError::Overflow {
                                target: stringify!($t),
                            })
                    })
                }
            }
        )*
    };
}

impl_try_into_unsigned!(u64, u128);

// Operators are implemented on references only. An owned `Add` impl would
// shadow the inherent `add(&self, &Self)` during method lookup.
impl Add for &BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: Self) -> BigUnsigned {
        BigUnsigned::add(self, rhs)
    }
}

impl Mul for &BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: Self) -> BigUnsigned {
        self.multiply(rhs)
    }
}

impl Sum for BigUnsigned {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_normalized(digits::sum(iter.map(|n| n.digits)))
    }
}

impl<'a> Sum<&'a BigUnsigned> for BigUnsigned {
    fn sum<I: Iterator<Item = &'a BigUnsigned>>(iter: I) -> Self {
        Self::from_normalized(digits::sum(iter.map(|n| n.digits.clone())))
    }
}
