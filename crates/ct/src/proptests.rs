//! Property tests for the buffer primitives.
//!
//! Oracles:
//!
//! 1. **Integer semantics**: for buffers of up to 16 bytes, `u128` arithmetic on the little-endian
//!    value is the ground truth for `compare`, `increment`, and `add`.
//! 2. **Reversal**: for any length, little-endian `compare` equals lexicographic comparison of the
//!    reversed buffers.
//! 3. **Slice equality**: `equal` agrees with `==` for any contents.

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{add, compare, compare_i32, equal, increment, is_zero, zero};

fn le_value(buf: &[u8]) -> u128 {
  let mut wide = [0u8; 16];
  wide[..buf.len()].copy_from_slice(buf);
  u128::from_le_bytes(wide)
}

fn modulus_mask(len: usize) -> u128 {
  if len == 16 { u128::MAX } else { (1u128 << (8 * len)) - 1 }
}

/// Two byte vectors of the same length.
fn same_len_pair(max: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
  (0..=max).prop_flat_map(|len| {
    (
      proptest::collection::vec(any::<u8>(), len),
      proptest::collection::vec(any::<u8>(), len),
    )
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn equal_matches_slice_eq((a, b) in same_len_pair(256)) {
    prop_assert_eq!(equal(&a, &b), Ok(a == b));
    prop_assert_eq!(equal(&a, &b), equal(&b, &a));
    prop_assert_eq!(equal(&a, &a), Ok(true));
  }

  #[test]
  fn equal_rejects_any_length_difference(a in proptest::collection::vec(any::<u8>(), 0..64), extra in 1usize..8) {
    let mut b = a.clone();
    b.resize(a.len() + extra, 0);
    prop_assert!(equal(&a, &b).is_err());
    prop_assert!(compare(&a, &b).is_err());
  }

  #[test]
  fn compare_is_reversed_lexicographic((a, b) in same_len_pair(256)) {
    let ra: Vec<u8> = a.iter().rev().copied().collect();
    let rb: Vec<u8> = b.iter().rev().copied().collect();
    prop_assert_eq!(compare(&a, &b), Ok(ra.cmp(&rb)));
  }

  #[test]
  fn compare_is_antisymmetric((a, b) in same_len_pair(64)) {
    let ab = compare_i32(&a, &b).unwrap();
    let ba = compare_i32(&b, &a).unwrap();
    prop_assert_eq!(ab, -ba);
    prop_assert!((-1..=1).contains(&ab));
  }

  #[test]
  fn compare_matches_integer_order((a, b) in same_len_pair(16)) {
    prop_assert_eq!(compare(&a, &b), Ok(le_value(&a).cmp(&le_value(&b))));
  }

  #[test]
  fn increment_matches_integer_successor(a in proptest::collection::vec(any::<u8>(), 0..=16)) {
    let mut n = a.clone();
    increment(&mut n);
    let mask = modulus_mask(a.len());
    prop_assert_eq!(le_value(&n), le_value(&a).wrapping_add(1) & mask);
  }

  #[test]
  fn add_matches_modular_sum((a, b) in same_len_pair(16)) {
    let mut sum = a.clone();
    add(&mut sum, &b).unwrap();
    let mask = modulus_mask(a.len());
    prop_assert_eq!(le_value(&sum), le_value(&a).wrapping_add(le_value(&b)) & mask);
  }

  #[test]
  fn add_commutes_and_generalizes_increment((a, b) in same_len_pair(300)) {
    let mut ab = a.clone();
    add(&mut ab, &b).unwrap();
    let mut ba = b.clone();
    add(&mut ba, &a).unwrap();
    prop_assert_eq!(&ab, &ba);

    if !a.is_empty() {
      let mut one = std::vec![0u8; a.len()];
      one[0] = 1;
      let mut via_add = a.clone();
      add(&mut via_add, &one).unwrap();
      let mut via_inc = a.clone();
      increment(&mut via_inc);
      prop_assert_eq!(via_add, via_inc);
    }
  }

  #[test]
  fn zero_then_is_zero(mut a in proptest::collection::vec(any::<u8>(), 0..512)) {
    prop_assert_eq!(is_zero(&a), a.iter().all(|&b| b == 0));
    zero(&mut a);
    prop_assert!(a.iter().all(|&b| b == 0));
    prop_assert!(is_zero(&a));
  }
}

// The codec's owned variants need `alloc`.
#[cfg(feature = "alloc")]
mod hex_props {
  extern crate std;

  use std::{string::String, vec::Vec};

  use proptest::prelude::*;

  use crate::hex;

  proptest! {
    #[test]
    fn hex_round_trip(bin in proptest::collection::vec(any::<u8>(), 0..256)) {
      let encoded = hex::encode(&bin);
      prop_assert_eq!(encoded.len(), bin.len() * 2);
      prop_assert!(encoded.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
      prop_assert_eq!(hex::decode(&encoded, ""), Ok(bin));
    }

    #[test]
    fn hex_separators_are_transparent(bin in proptest::collection::vec(any::<u8>(), 0..128)) {
      // Upper case, one space between bytes: the shape of `% X` formatting.
      let spaced: String = bin
        .iter()
        .map(|b| std::format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
      prop_assert_eq!(hex::decode(&spaced, " "), hex::decode(&hex::encode(&bin), ""));
      prop_assert_eq!(hex::decode(&spaced, " "), Ok(bin));
    }
  }
}
