//! Construction inputs and their validation.
//!
//! A [`NumberInput`] names the shape of the caller's data explicitly. Each
//! variant has its own validation branch; all of them end in normalization.

use crate::digits;
use crate::error::NumberError;
use crate::number::BigUnsigned;

/// `2^64` as a float. Whole floats below it convert through `u64` exactly.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

const F64_MANTISSA_BITS: u32 = 52;
const F64_EXPONENT_BIAS: i32 = 1075;

/// The accepted input shapes for building a [`BigUnsigned`].
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// A whole number. Must not be negative.
    Integer(i128),
    /// A floating point number. Must be finite, whole and not negative.
    Float(f64),
    /// Decimal digits `0`-`9`, most-significant first. No signs, spaces or
    /// separators.
    DigitString(String),
    /// One integer per digit, most-significant first, each in `0..=9`.
    DigitSequence(Vec<i64>),
    /// An existing number, copied.
    Existing(BigUnsigned),
}

impl NumberInput {
    /// Validate and convert into a normalized digit vector.
    pub(crate) fn into_digits(self) -> Result<Vec<u8>, NumberError> {
        let mut out = match self {
            NumberInput::Integer(value) => from_integer(value)?,
            NumberInput::Float(value) => from_float(value)?,
            NumberInput::DigitString(text) => from_digit_str(&text)?,
            NumberInput::DigitSequence(values) => from_digit_values(&values)?,
            NumberInput::Existing(number) => number.digits(),
        };
        digits::normalize(&mut out);
        Ok(out)
    }
}

impl From<i128> for NumberInput {
    fn from(value: i128) -> Self {
        NumberInput::Integer(value)
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        NumberInput::Integer(value.into())
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<&str> for NumberInput {
    fn from(text: &str) -> Self {
        NumberInput::DigitString(text.to_owned())
    }
}

impl From<String> for NumberInput {
    fn from(text: String) -> Self {
        NumberInput::DigitString(text)
    }
}

impl From<Vec<i64>> for NumberInput {
    fn from(values: Vec<i64>) -> Self {
        NumberInput::DigitSequence(values)
    }
}

impl From<&[i64]> for NumberInput {
    fn from(values: &[i64]) -> Self {
        NumberInput::DigitSequence(values.to_vec())
    }
}

impl From<BigUnsigned> for NumberInput {
    fn from(number: BigUnsigned) -> Self {
        NumberInput::Existing(number)
    }
}

impl From<&BigUnsigned> for NumberInput {
    fn from(number: &BigUnsigned) -> Self {
        NumberInput::Existing(number.clone())
    }
}

/// Decimal digits of an unsigned value: repeated `% 10` and `/ 10`, then one
/// reverse. Zero maps to `[0]`.
pub(crate) fn from_u128(mut value: u128) -> Vec<u8> {
    let mut out = Vec::with_capacity(39);
    loop {
        out.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    out
}

fn from_integer(value: i128) -> Result<Vec<u8>, NumberError> {
    if value < 0 {
        return Err(NumberError::Negative(value.to_string()));
    }
    Ok(from_u128(value.unsigned_abs()))
}

fn from_float(value: f64) -> Result<Vec<u8>, NumberError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(NumberError::NotAnInteger(value.to_string()));
    }
    if value < 0.0 {
        return Err(NumberError::Negative(value.to_string()));
    }
    if value < TWO_POW_64 {
        // Whole and in range, so the cast is exact. `-0.0` lands here as 0.
        return Ok(from_u128(u128::from(value as u64)));
    }

    // Past 2^64 every float is `mantissa * 2^exponent` with a positive
    // exponent; expand it exactly rather than dividing in floating point.
    let bits = value.to_bits();
    let biased = ((bits >> F64_MANTISSA_BITS) & 0x7ff) as i32;
    let mantissa = (bits & ((1u64 << F64_MANTISSA_BITS) - 1)) | (1u64 << F64_MANTISSA_BITS);
    let exponent = (biased - F64_EXPONENT_BIAS) as u32;

    Ok(digits::mul(&from_u128(u128::from(mantissa)), &pow2(exponent)))
}

/// `2^exponent` by square-and-multiply over digit sequences.
fn pow2(mut exponent: u32) -> Vec<u8> {
    let mut result = vec![1];
    let mut base = vec![2];
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = digits::mul(&result, &base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = digits::mul(&base, &base);
        }
    }
    result
}

fn from_digit_str(text: &str) -> Result<Vec<u8>, NumberError> {
    if text.is_empty() {
        return Err(NumberError::EmptyInput);
    }

    text.chars()
        .enumerate()
        .map(|(position, c)| match c.to_digit(10) {
            Some(digit) if c.is_ascii_digit() => Ok(digit as u8),
            _ => Err(NumberError::InvalidDigitString {
                position,
                found: c.to_string(),
            }),
        })
        .collect()
}

fn from_digit_values(values: &[i64]) -> Result<Vec<u8>, NumberError> {
    if values.is_empty() {
        return Err(NumberError::EmptyInput);
    }

    values
        .iter()
        .enumerate()
        .map(|(position, &value)| match u8::try_from(value) {
            Ok(digit) if digit <= 9 => Ok(digit),
            _ => Err(NumberError::DigitOutOfRange { position, value }),
        })
        .collect()
}
