//! Property tests driving every operation against `num_bigint::BigUint`.
//!
//! The oracle consumes big-endian bytes only, so every entry and exit goes
//! through the byte-order adapter, exactly how an external big-endian
//! integer type would be bridged.

use num_bigint::BigUint;
use num_traits::Zero;
use proptest::collection::vec;
use proptest::prelude::*;

use lebig::LeUint;

fn oracle_from_le(bytes: &[u8]) -> BigUint {
    let mut be = bytes.to_vec();
    be.reverse();
    BigUint::from_bytes_be(&be)
}

fn oracle_of(n: &LeUint) -> BigUint {
    BigUint::from_bytes_be(&n.to_be_bytes())
}

#[test]
fn round_trip_agrees_with_reference() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200))| {
        let n = LeUint::from_le_bytes(&bytes).unwrap();
        prop_assert_eq!(n.to_le_bytes(), oracle_from_le(&bytes).to_bytes_le());
    });
}

#[test]
fn word_load_agrees_with_reference() {
    proptest!(|(w: u64)| {
        let n = LeUint::from(w);
        prop_assert_eq!(n.as_u64(), w);
        prop_assert_eq!(oracle_of(&n), BigUint::from(w));
    });
}

#[test]
fn low_word_agrees_with_reference() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200))| {
        let n = LeUint::from_le_bytes(&bytes).unwrap();
        let low = oracle_from_le(&bytes).iter_u64_digits().next().unwrap_or(0);
        prop_assert_eq!(n.as_u64(), low);
    });
}

#[test]
fn bit_length_agrees_with_reference() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200))| {
        let n = LeUint::from_le_bytes(&bytes).unwrap();
        // the reference reports 0 bits for zero, this design says 1
        prop_assert_eq!(n.bit_length(), oracle_from_le(&bytes).bits().max(1));
    });
}

#[test]
fn small_shifts_agree_with_reference() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200), n in 0u32..=64)| {
        let expected = oracle_from_le(&bytes);

        let mut left = LeUint::from_le_bytes(&bytes).unwrap();
        left.small_shl(n);
        prop_assert_eq!(oracle_of(&left), &expected << n as usize);

        let mut right = LeUint::from_le_bytes(&bytes).unwrap();
        right.small_shr(n);
        prop_assert_eq!(oracle_of(&right), &expected >> n as usize);
    });
}

#[test]
fn arbitrary_shifts_agree_with_reference() {
    // amounts past one word and past the total bit length included
    proptest!(|(bytes in vec(any::<u8>(), 1..200), n in 0usize..2048)| {
        let expected = oracle_from_le(&bytes);

        let mut left = LeUint::from_le_bytes(&bytes).unwrap();
        left.shl(n as u64);
        prop_assert_eq!(oracle_of(&left), &expected << n);

        let mut right = LeUint::from_le_bytes(&bytes).unwrap();
        right.shr(n as u64);
        prop_assert_eq!(oracle_of(&right), &expected >> n);
    });
}

#[test]
fn shift_left_then_right_restores() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200), n in 0u64..2048)| {
        let orig = LeUint::from_le_bytes(&bytes).unwrap();
        let mut x = orig.clone();
        x.shl(n);
        x.shr(n);
        prop_assert_eq!(x, orig);
    });
}

#[test]
fn and_or_bytes_agree_with_reference() {
    proptest!(|(a in vec(any::<u8>(), 1..200), b in vec(any::<u8>(), 1..200))| {
        let expected_a = oracle_from_le(&a);
        let expected_b = oracle_from_le(&b);

        let mut and = LeUint::from_le_bytes(&a).unwrap();
        and.and_bytes(&b);
        prop_assert_eq!(oracle_of(&and), &expected_a & &expected_b);

        let mut or = LeUint::from_le_bytes(&a).unwrap();
        or.or_bytes(&b);
        prop_assert_eq!(oracle_of(&or), &expected_a | &expected_b);
    });
}

#[test]
fn and_or_u64_agree_with_reference() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200), w: u64)| {
        let expected = oracle_from_le(&bytes);
        let operand = BigUint::from(w);

        let mut and = LeUint::from_le_bytes(&bytes).unwrap();
        and.and_u64(w);
        prop_assert_eq!(oracle_of(&and), &expected & &operand);

        let mut or = LeUint::from_le_bytes(&bytes).unwrap();
        or.or_u64(w);
        prop_assert_eq!(oracle_of(&or), &expected | &operand);
    });
}

#[test]
fn width_asymmetry() {
    proptest!(|(a in vec(1u8..=255, 20..40), b in vec(1u8..=255, 1..10))| {
        // AND truncates to the shorter operand, OR extends to the longer
        let short = LeUint::from_le_bytes(&b).unwrap();

        let mut and = LeUint::from_le_bytes(&a).unwrap();
        and.and_bytes(&b);
        prop_assert!(and.word_length() <= short.word_length());

        let mut or = LeUint::from_le_bytes(&b).unwrap();
        or.or_bytes(&a);
        prop_assert_eq!(or.word_length(), lebig::size::words_for_bytes(a.len()));
    });
}

#[test]
fn be_bytes_agree_with_reference() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200))| {
        let n = LeUint::from_le_bytes(&bytes).unwrap();
        let big = oracle_from_le(&bytes);
        prop_assert_eq!(n.to_be_bytes(), big.to_bytes_be());

        let back = LeUint::from_be_bytes(&big.to_bytes_be()).unwrap();
        prop_assert_eq!(back, n);
    });
}

#[test]
fn zero_absorption() {
    proptest!(|(bytes in vec(any::<u8>(), 1..200), n in 0u64..2048)| {
        let orig = LeUint::from_le_bytes(&bytes).unwrap();

        let mut zero = LeUint::zero();
        zero.shr(n);
        prop_assert!(zero.is_zero());

        let mut and = orig.clone();
        and.and_bytes(&[0; 16]);
        prop_assert!(and.is_zero());
        prop_assert_eq!(and.to_le_bytes(), vec![0u8]);

        let mut or = orig.clone();
        or.or_bytes(&[0; 16]);
        prop_assert_eq!(or, orig);
    });
}

#[test]
fn canonical_zero_from_reference_zero() {
    let zero = BigUint::zero();
    let n = LeUint::from_be_bytes(&zero.to_bytes_be()).unwrap();
    assert!(n.is_zero());
    assert_eq!(n.to_le_bytes(), [0]);
    assert_eq!(n.words(), [0]);
}
