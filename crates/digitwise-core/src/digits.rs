//! Digit-wise algorithms over raw decimal digit slices.
//!
//! Every slice here is most-significant digit first, each element in `0..=9`.
//! Loops walk from the least-significant end, push into a `Vec`, and reverse
//! once at the end.
//!
//! These functions do not validate their input. [`BigUnsigned`] guarantees the
//! invariants before calling in.
//!
//! [`BigUnsigned`]: crate::BigUnsigned

use std::cmp::Ordering;

/// Strip leading zeros, leaving `[0]` for an all-zero (or empty) sequence.
pub fn normalize(digits: &mut Vec<u8>) {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    if leading == digits.len() {
        digits.clear();
        digits.push(0);
    } else if leading > 0 {
        digits.drain(..leading);
    }
}

/// Whether a normalized sequence is the value zero.
pub fn is_zero(digits: &[u8]) -> bool {
    matches!(digits, [0])
}

/// Three-way comparison of two normalized sequences.
///
/// A longer sequence is larger. Equal lengths compare digit by digit from the
/// most-significant end.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Sum of two sequences with carry propagation.
pub fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut lhs = a.iter().rev();
    let mut rhs = b.iter().rev();
    let mut carry = 0u8;

    loop {
        let (x, y) = match (lhs.next(), rhs.next()) {
            (None, None) => break,
            (x, y) => (x.copied().unwrap_or(0), y.copied().unwrap_or(0)),
        };

        let sum = x + y + carry;
        if sum >= 10 {
            out.push(sum - 10);
            carry = 1;
        } else {
            out.push(sum);
            carry = 0;
        }
    }

    if carry == 1 {
        out.push(1);
    }

    out.reverse();
    out
}

/// `big - small` with borrow propagation.
///
/// Requires `compare(big, small) != Ordering::Less`. The result is normalized,
/// so `500 - 499` yields `[1]` rather than `[0, 0, 1]`.
pub fn sub(big: &[u8], small: &[u8]) -> Vec<u8> {
    debug_assert_ne!(compare(big, small), Ordering::Less);

    let mut out = Vec::with_capacity(big.len());
    let mut rhs = small.iter().rev();
    let mut borrow = 0i8;

    // Once `small` runs out the borrow keeps travelling through `big`.
    for &x in big.iter().rev() {
        let y = rhs.next().copied().unwrap_or(0);
        let mut digit = x as i8 - borrow - y as i8;
        if digit < 0 {
            digit += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(digit as u8);
    }

    out.reverse();
    normalize(&mut out);
    out
}

/// Multiply a sequence by a single digit `0..=9`.
pub fn mul_digit(a: &[u8], multiplier: u8) -> Vec<u8> {
    debug_assert!(multiplier <= 9);

    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u8;

    for &digit in a.iter().rev() {
        // At most 9 * 9 + 8, no overflow in u8.
        let current = multiplier * digit + carry;
        out.push(current % 10);
        carry = current / 10;
    }

    if carry > 0 {
        out.push(carry);
    }

    out.reverse();
    out
}

/// Shift left by `places` decimal positions (append trailing zeros).
pub fn shift(digits: &mut Vec<u8>, places: usize) {
    digits.resize(digits.len() + places, 0);
}

/// Left fold of partial products through [`add`].
///
/// An empty list sums to `[0]`; a single term comes back unchanged.
pub fn sum<I>(terms: I) -> Vec<u8>
where
    I: IntoIterator<Item = Vec<u8>>,
{
    let mut terms = terms.into_iter();
    let Some(first) = terms.next() else {
        return vec![0];
    };
    terms.fold(first, |acc, term| add(&acc, &term))
}

/// Grade-school long multiplication.
///
/// Each non-zero digit of `b`, taken from the least-significant end at offset
/// `k`, contributes `a * digit` shifted by `k`. Zero digits are skipped.
pub fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let partials = b
        .iter()
        .rev()
        .enumerate()
        .filter(|(_, digit)| **digit != 0)
        .map(|(k, &digit)| {
            let mut partial = mul_digit(a, digit);
            shift(&mut partial, k);
            partial
        });

    let mut product = sum(partials);
    normalize(&mut product);
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_u128;
    use proptest::prelude::*;

    fn d(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_normalize() {
        let mut v = vec![0, 0, 5];
        normalize(&mut v);
        assert_eq!(v, vec![5]);

        let mut v = vec![0, 0, 0];
        normalize(&mut v);
        assert_eq!(v, vec![0]);

        let mut v = vec![];
        normalize(&mut v);
        assert_eq!(v, vec![0]);

        let mut v = vec![1, 0, 0];
        normalize(&mut v);
        assert_eq!(v, vec![1, 0, 0]);
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&d("1000"), &d("999")), Ordering::Greater);
        assert_eq!(compare(&d("12"), &d("123")), Ordering::Less);
        assert_eq!(compare(&d("456"), &d("456")), Ordering::Equal);
        assert_eq!(compare(&d("457"), &d("465")), Ordering::Less);
        assert_eq!(compare(&d("0"), &d("0")), Ordering::Equal);
    }

    #[test]
    fn test_add_carry_chain() {
        assert_eq!(add(&d("999"), &d("1")), d("1000"));
        assert_eq!(add(&d("1"), &d("999")), d("1000"));
        assert_eq!(add(&d("0"), &d("0")), d("0"));
        assert_eq!(add(&d("123"), &d("877")), d("1000"));
        assert_eq!(add(&d("45"), &d("54")), d("99"));
    }

    #[test]
    fn test_sub_borrow_and_strip() {
        assert_eq!(sub(&d("500"), &d("499")), d("1"));
        assert_eq!(sub(&d("1000"), &d("1")), d("999"));
        assert_eq!(sub(&d("1000"), &d("1000")), d("0"));
        assert_eq!(sub(&d("10001"), &d("2")), d("9999"));
        assert_eq!(sub(&d("7"), &d("0")), d("7"));
    }

    #[test]
    fn test_mul_digit() {
        assert_eq!(mul_digit(&d("123"), 9), d("1107"));
        assert_eq!(mul_digit(&d("99"), 9), d("891"));
        assert_eq!(mul_digit(&d("5"), 1), d("5"));
    }

    #[test]
    fn test_sum_edge_cases() {
        assert_eq!(sum(Vec::<Vec<u8>>::new()), d("0"));
        assert_eq!(sum(vec![d("42")]), d("42"));
        assert_eq!(sum(vec![d("1"), d("2"), d("3")]), d("6"));
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul(&d("123"), &d("456")), d("56088"));
        assert_eq!(mul(&d("123"), &d("0")), d("0"));
        assert_eq!(mul(&d("0"), &d("456")), d("0"));
        assert_eq!(mul(&d("1"), &d("987")), d("987"));
        assert_eq!(mul(&d("100"), &d("100")), d("10000"));
        assert_eq!(mul(&d("999"), &d("999")), d("998001"));
    }

    #[test]
    fn test_mul_skips_zero_digits() {
        // Only the 1 and the 2 contribute partial products.
        assert_eq!(mul(&d("37"), &d("2001")), d("74037"));
    }

    proptest! {
        #[test]
        fn test_agrees_with_native_arithmetic(a in any::<u64>(), b in any::<u64>()) {
            let (wide_a, wide_b) = (u128::from(a), u128::from(b));
            let (da, db) = (from_u128(wide_a), from_u128(wide_b));

            prop_assert_eq!(compare(&da, &db), a.cmp(&b));
            prop_assert_eq!(add(&da, &db), from_u128(wide_a + wide_b));
            prop_assert_eq!(mul(&da, &db), from_u128(wide_a * wide_b));

            let (big, small) = if a >= b { (&da, &db) } else { (&db, &da) };
            prop_assert_eq!(sub(big, small), from_u128(wide_a.abs_diff(wide_b)));
        }
    }
}
