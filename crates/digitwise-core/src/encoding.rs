//! Serde support.
//!
//! A number serializes as its plain decimal string, which survives formats
//! whose native integers are fixed width. Deserialization accepts the same
//! shapes as construction: a digit string, an integer, a whole float, or an
//! array of digits.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::input::NumberInput;
use crate::number::BigUnsigned;

impl Serialize for BigUnsigned {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for BigUnsigned {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigUnsignedVisitor)
    }
}

struct BigUnsignedVisitor;

impl BigUnsignedVisitor {
    fn build<E: de::Error>(input: NumberInput) -> Result<BigUnsigned, E> {
        BigUnsigned::new(input).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for BigUnsignedVisitor {
    type Value = BigUnsigned;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal digit string, a non-negative integer, or an array of digits")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigUnsigned::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(BigUnsigned::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::build(NumberInput::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Self::build(NumberInput::Integer(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Self::build(NumberInput::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Self::build(NumberInput::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<i64>()? {
            values.push(value);
        }
        Self::build(NumberInput::DigitSequence(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let n: BigUnsigned = "1234919212".parse().unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"1234919212\"");
    }

    #[test]
    fn test_deserialize_shapes() {
        let expected: BigUnsigned = "105".parse().unwrap();

        let from_str: BigUnsigned = serde_json::from_str("\"105\"").unwrap();
        let from_int: BigUnsigned = serde_json::from_str("105").unwrap();
        let from_float: BigUnsigned = serde_json::from_str("105.0").unwrap();
        let from_seq: BigUnsigned = serde_json::from_str("[0, 1, 0, 5]").unwrap();

        assert_eq!(from_str, expected);
        assert_eq!(from_int, expected);
        assert_eq!(from_float, expected);
        assert_eq!(from_seq, expected);
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        for bad in ["-3", "2.5", "\"\"", "\"12x\"", "[1, 10]", "{}", "true", "null"] {
            assert!(
                serde_json::from_str::<BigUnsigned>(bad).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_roundtrip_in_struct() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Ledger {
            total: BigUnsigned,
        }

        let ledger = Ledger {
            total: "99999999999999999999999999".parse().unwrap(),
        };
        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
