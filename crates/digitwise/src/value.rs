//! Dynamic operand classification.
//!
//! Operands that arrive as untyped text or JSON are sorted into a
//! [`NumberInput`] variant here, so every shape goes through the same
//! validation as typed construction. Anything that is not a number, a string
//! or an array is rejected as an unsupported input type.

use digitwise_core::{NumberError, NumberInput};
use serde_json::{Number, Value};

/// Largest whole float accepted as a per-digit array element. Anything this
/// large is out of digit range anyway.
const MAX_WHOLE_ELEMENT: f64 = 1e18;

/// Classify a JSON value as a construction input.
///
/// - numbers become [`NumberInput::Integer`] when integral, otherwise
///   [`NumberInput::Float`]
/// - strings become [`NumberInput::DigitString`]
/// - arrays become [`NumberInput::DigitSequence`]; every element must be an
///   integral number (`3` or `3.0`)
/// - objects, booleans and `null` fail with
///   [`NumberError::UnsupportedInputType`]
///
/// JSON integers beyond `u64` are parsed as floats by `serde_json` and lose
/// precision. Pass large values as strings.
pub fn classify(value: &Value) -> Result<NumberInput, NumberError> {
    match value {
        Value::Number(n) => Ok(number_input(n)),
        Value::String(s) => Ok(NumberInput::DigitString(s.clone())),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(position, item)| digit_element(position, item))
            .collect::<Result<Vec<_>, _>>()
            .map(NumberInput::DigitSequence),
        other => Err(NumberError::UnsupportedInputType(
            json_type_name(other).to_string(),
        )),
    }
}

/// Interpret a command-line operand.
///
/// Plain decimal digits are taken verbatim, so long values keep full
/// precision. Other text is parsed as JSON and classified; text that is not
/// JSON at all is treated as a digit string and rejected by digit validation.
/// Surrounding whitespace is never trimmed.
///
/// A number literal with a fraction or exponent (`42.0`, `1.5e3`) is expanded
/// from its text rather than through `f64`, so `9007199254740993.0` stays
/// exact. A nonzero fractional part fails with [`NumberError::NotAnInteger`].
pub fn parse_operand(text: &str) -> Result<NumberInput, NumberError> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(NumberInput::DigitString(text.to_owned()));
    }
    if text.trim() != text {
        return Ok(NumberInput::DigitString(text.to_owned()));
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Number(n)) if n.as_u64().is_none() && n.as_i64().is_none() => {
            decimal_literal(text)
        }
        Ok(value) => classify(&value),
        Err(_) => Ok(NumberInput::DigitString(text.to_owned())),
    }
}

/// Expand a JSON number literal into its exact decimal digits.
///
/// `serde_json` has already validated the grammar and rejected literals that
/// overflow `f64`, so a nonzero value has a scale of at most 308.
fn decimal_literal(text: &str) -> Result<NumberInput, NumberError> {
    let not_an_integer = || NumberError::NotAnInteger(text.to_owned());

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], &unsigned[at + 1..]),
        None => (unsigned, "0"),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = format!("{whole}{fraction}");
    if digits.bytes().all(|b| b == b'0') {
        return Ok(NumberInput::Integer(0));
    }

    let exponent: i64 = exponent.parse().map_err(|_| not_an_integer())?;
    let scale = exponent
        .checked_sub(fraction.len() as i64)
        .ok_or_else(not_an_integer)?;

    if scale >= 0 {
        digits.extend(std::iter::repeat('0').take(scale as usize));
    } else {
        let drop = usize::try_from(scale.unsigned_abs()).map_err(|_| not_an_integer())?;
        if drop >= digits.len() {
            return Err(not_an_integer());
        }
        let (kept, dropped) = digits.split_at(digits.len() - drop);
        if dropped.bytes().any(|b| b != b'0') {
            return Err(not_an_integer());
        }
        digits = kept.to_owned();
    }

    if negative {
        return Err(NumberError::Negative(text.to_owned()));
    }
    Ok(NumberInput::DigitString(digits))
}

fn number_input(n: &Number) -> NumberInput {
    if let Some(v) = n.as_u64() {
        NumberInput::Integer(v.into())
    } else if let Some(v) = n.as_i64() {
        NumberInput::Integer(v.into())
    } else {
        NumberInput::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn digit_element(position: usize, item: &Value) -> Result<i64, NumberError> {
    item.as_i64()
        .or_else(|| {
            item.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_WHOLE_ELEMENT)
                .map(|f| f as i64)
        })
        .ok_or_else(|| NumberError::InvalidDigitString {
            position,
            found: item.to_string(),
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
