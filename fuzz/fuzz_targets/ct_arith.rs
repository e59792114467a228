#![no_main]

use core::cmp::Ordering;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (a, b) = input.split_at(input.len() / 2);
  let b = &b[..a.len()];

  // Little-endian compare is lexicographic compare of the reversed buffers.
  let ra: Vec<u8> = a.iter().rev().copied().collect();
  let rb: Vec<u8> = b.iter().rev().copied().collect();
  assert_eq!(ct::compare(a, b), Ok(ra.cmp(&rb)));
  assert_eq!(ct::equal(a, b), Ok(a == b));

  // a + b == b + a
  let mut ab = a.to_vec();
  ct::add(&mut ab, b).unwrap();
  let mut ba = b.to_vec();
  ct::add(&mut ba, a).unwrap();
  assert_eq!(ab, ba);

  // (a + 1) > a unless a was all 0xff, in which case it wraps to zero.
  let mut inc = a.to_vec();
  ct::increment(&mut inc);
  if a.iter().all(|&x| x == 0xff) {
    assert!(ct::is_zero(&inc));
  } else {
    assert_eq!(ct::compare(&inc, a), Ok(Ordering::Greater));
  }

  ct::zero(&mut inc);
  assert!(ct::is_zero(&inc));
});
