extern crate std;

use std::vec::Vec;

use blake2::digest::{Mac, Update as _, VariableOutput as _, consts::U32};

use super::{
  BLOCK_LEN, Blake2b, Blake2bParams,
  kernels::{ALL, Blake2bKernelId, compress_fn},
};

fn pattern(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

fn digest_with_kernel(id: Blake2bKernelId, params: &Blake2bParams<'_>, data: &[u8]) -> Vec<u8> {
  let mut h = Blake2b::with_kernel(params, compress_fn(id)).unwrap();
  h.update(data).unwrap();
  h.finalize().unwrap().to_vec()
}

fn oracle_unkeyed(out_len: usize, data: &[u8]) -> Vec<u8> {
  let mut h = blake2::Blake2bVar::new(out_len).unwrap();
  h.update(data);
  let mut out = std::vec![0u8; out_len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn oracle_keyed32(key: &[u8], data: &[u8]) -> Vec<u8> {
  let mut m = blake2::Blake2bMac::<U32>::new_with_salt_and_personal(key, &[], &[]).unwrap();
  Mac::update(&mut m, data);
  Mac::finalize(m).into_bytes().to_vec()
}

const LENS: [usize; 17] = [
  0, 1, 2, 3, 63, 64, 65, 127, 128, 129, 255, 256, 257, 1023, 1024, 1025, 10_000,
];
const CHUNKS: [usize; 10] = [1, 7, 31, 64, 127, 128, 129, 255, 1024, 4096];

#[test]
fn all_kernels_match_blake2_oracle_and_streaming_splits() {
  let key: Vec<u8> = (0u8..40).collect();

  for &id in ALL {
    for &len in &LENS {
      let msg = pattern(len);

      for out_len in [16usize, 32, 48, 64] {
        let params = Blake2bParams::new().output_len(out_len);
        let ours = digest_with_kernel(id, &params, &msg);
        assert_eq!(
          ours,
          oracle_unkeyed(out_len, &msg),
          "unkeyed oracle mismatch kernel={} len={len} out={out_len}",
          id.as_str()
        );
      }

      let keyed = Blake2bParams::new().key(&key);
      let ours = digest_with_kernel(id, &keyed, &msg);
      assert_eq!(
        ours,
        oracle_keyed32(&key, &msg),
        "keyed oracle mismatch kernel={} len={len}",
        id.as_str()
      );

      for &chunk in &CHUNKS {
        let mut h = Blake2b::with_kernel(&keyed, compress_fn(id)).unwrap();
        for part in msg.chunks(chunk) {
          h.update(part).unwrap();
        }
        assert_eq!(
          h.finalize().unwrap().to_vec(),
          ours,
          "streaming mismatch kernel={} len={len} chunk={chunk}",
          id.as_str()
        );
      }
    }
  }
}

#[test]
fn block_boundary_inputs_with_empty_updates() {
  for &id in ALL {
    let msg = pattern(3 * BLOCK_LEN);
    let params = Blake2bParams::new().output_len(64);
    let expected = digest_with_kernel(id, &params, &msg);

    let mut h = Blake2b::with_kernel(&params, compress_fn(id)).unwrap();
    for block in msg.chunks(BLOCK_LEN) {
      h.update(&[]).unwrap();
      h.update(block).unwrap();
    }
    h.update(&[]).unwrap();
    assert_eq!(h.finalize().unwrap().to_vec(), expected);
  }
}
