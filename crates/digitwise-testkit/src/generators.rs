//! Proptest generators for property-based testing.

use proptest::prelude::*;

use digitwise_core::BigUnsigned;

/// Generate a canonical digit string (no leading zeros) of up to `max_len`
/// digits.
pub fn digit_string(max_len: usize) -> impl Strategy<Value = String> {
    let tail = max_len.saturating_sub(1);
    prop_oneof![
        Just("0".to_string()),
        (1u8..=9, prop::collection::vec(0u8..=9, 0..=tail)).prop_map(|(head, rest)| {
            std::iter::once(head)
                .chain(rest)
                .map(|d| char::from(b'0' + d))
                .collect::<String>()
        }),
    ]
}

/// Generate a raw digit sequence, leading zeros allowed, of 1 to `max_len`
/// digits.
pub fn raw_digits(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..=9, 1..=max_len.max(1))
}

/// Generate a `BigUnsigned` of up to `max_len` digits.
pub fn big_unsigned(max_len: usize) -> impl Strategy<Value = BigUnsigned> {
    digit_string(max_len).prop_map(|s| BigUnsigned::new(s).expect("generated digits are valid"))
}

/// Generate a `BigUnsigned` that also fits in a `u64`, paired with it.
pub fn small_pair() -> impl Strategy<Value = (BigUnsigned, u64)> {
    any::<u64>().prop_map(|v| (BigUnsigned::from(v), v))
}

/// Generate a value outside `0..=9` for per-digit inputs.
pub fn out_of_range_digit() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 10i64..=i64::MAX]
}
