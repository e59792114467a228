//! BLAKE2b compression state and the portable compression function (RFC 7693).

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use zeroize::Zeroize;

use super::BLOCK_LEN;

/// Alignment of [`State`] in bytes.
///
/// Wide-word kernels load the chain value with aligned vector instructions.
pub(crate) const STATE_ALIGN: usize = 64;

pub(crate) const IV: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

const SIGMA: [[usize; 16]; 12] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// Raw compression state.
///
/// The alignment is requested explicitly and checked at compile time below;
/// wherever a `State` lives (stack, `Box`, `Vec`), the compiler and the
/// allocator honor it.
#[repr(C, align(64))]
pub(crate) struct State {
  /// Chain value.
  pub(crate) h: [u64; 8],
  /// Byte counter, 128 bits as `[low, high]`.
  pub(crate) t: [u64; 2],
  /// Finalization flags: `f[0]` marks the last block, `f[1]` the last node
  /// (always zero for sequential hashing).
  pub(crate) f: [u64; 2],
  /// Residual input not yet compressed.
  pub(crate) buf: [u8; BLOCK_LEN],
  pub(crate) buf_len: usize,
}

const _: () = assert!(core::mem::align_of::<State>() == STATE_ALIGN);
const _: () = assert!(core::mem::offset_of!(State, h) == 0);

impl State {
  /// Fresh state with the chain value `IV ^ param_words`.
  #[inline]
  pub(crate) fn new(param_words: &[u64; 8]) -> Self {
    let mut h = IV;
    for (word, p) in h.iter_mut().zip(param_words) {
      *word ^= p;
    }
    Self {
      h,
      t: [0; 2],
      f: [0; 2],
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
    }
  }

  #[cfg(test)]
  pub(crate) fn is_aligned(&self) -> bool {
    (core::ptr::from_ref(self) as usize) % STATE_ALIGN == 0
  }
}

impl Zeroize for State {
  fn zeroize(&mut self) {
    self.h.zeroize();
    self.t.zeroize();
    self.f.zeroize();
    self.buf.zeroize();
    self.buf_len.zeroize();
  }
}

#[inline(always)]
fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

#[inline(always)]
fn g(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64, x: u64, y: u64) {
  *a = a.wrapping_add(*b).wrapping_add(x);
  *d = rotr64(*d ^ *a, 32);
  *c = c.wrapping_add(*d);
  *b = rotr64(*b ^ *c, 24);
  *a = a.wrapping_add(*b).wrapping_add(y);
  *d = rotr64(*d ^ *a, 16);
  *c = c.wrapping_add(*d);
  *b = rotr64(*b ^ *c, 63);
}

#[inline(always)]
fn compress_block(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], t: &[u64; 2], f: &[u64; 2]) {
  let mut m = [0u64; 16];
  for (word, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(chunk);
    *word = u64::from_le_bytes(bytes);
  }

  let mut v0 = h[0];
  let mut v1 = h[1];
  let mut v2 = h[2];
  let mut v3 = h[3];
  let mut v4 = h[4];
  let mut v5 = h[5];
  let mut v6 = h[6];
  let mut v7 = h[7];

  let mut v8 = IV[0];
  let mut v9 = IV[1];
  let mut v10 = IV[2];
  let mut v11 = IV[3];
  let mut v12 = IV[4] ^ t[0];
  let mut v13 = IV[5] ^ t[1];
  let mut v14 = IV[6] ^ f[0];
  let mut v15 = IV[7] ^ f[1];

  macro_rules! round {
    ($r:expr) => {{
      let s = &SIGMA[$r];

      g(&mut v0, &mut v4, &mut v8, &mut v12, m[s[0]], m[s[1]]);
      g(&mut v1, &mut v5, &mut v9, &mut v13, m[s[2]], m[s[3]]);
      g(&mut v2, &mut v6, &mut v10, &mut v14, m[s[4]], m[s[5]]);
      g(&mut v3, &mut v7, &mut v11, &mut v15, m[s[6]], m[s[7]]);

      g(&mut v0, &mut v5, &mut v10, &mut v15, m[s[8]], m[s[9]]);
      g(&mut v1, &mut v6, &mut v11, &mut v12, m[s[10]], m[s[11]]);
      g(&mut v2, &mut v7, &mut v8, &mut v13, m[s[12]], m[s[13]]);
      g(&mut v3, &mut v4, &mut v9, &mut v14, m[s[14]], m[s[15]]);
    }};
  }

  round!(0);
  round!(1);
  round!(2);
  round!(3);
  round!(4);
  round!(5);
  round!(6);
  round!(7);
  round!(8);
  round!(9);
  round!(10);
  round!(11);

  h[0] ^= v0 ^ v8;
  h[1] ^= v1 ^ v9;
  h[2] ^= v2 ^ v10;
  h[3] ^= v3 ^ v11;
  h[4] ^= v4 ^ v12;
  h[5] ^= v5 ^ v13;
  h[6] ^= v6 ^ v14;
  h[7] ^= v7 ^ v15;

  m.zeroize();
}

#[inline(always)]
fn advance(t: &mut [u64; 2], by: u64) {
  let (lo, carry) = t[0].overflowing_add(by);
  t[0] = lo;
  t[1] = t[1].wrapping_add(u64::from(carry));
}

/// Portable kernel.
///
/// Interior blocks (`f[0] == 0`): compresses every 128-byte block in `blocks`,
/// advancing the counter by 128 before each. Final block (`f[0] != 0`):
/// `blocks` is exactly one zero-padded block holding `last_block_len` message
/// bytes.
pub(crate) fn compress_portable(h: &mut [u64; 8], blocks: &[u8], t: &mut [u64; 2], f: &[u64; 2], last_block_len: u32) {
  debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);
  if blocks.is_empty() {
    return;
  }

  if f[0] != 0 {
    debug_assert_eq!(blocks.len(), BLOCK_LEN);
    debug_assert!(last_block_len as usize <= BLOCK_LEN);
    advance(t, u64::from(last_block_len));
    if let Ok(block) = <&[u8; BLOCK_LEN]>::try_from(blocks) {
      compress_block(h, block, t, f);
    }
    return;
  }

  let mut chunks = blocks.chunks_exact(BLOCK_LEN);
  for chunk in &mut chunks {
    advance(t, BLOCK_LEN as u64);
    if let Ok(block) = <&[u8; BLOCK_LEN]>::try_from(chunk) {
      compress_block(h, block, t, f);
    }
  }
  debug_assert!(chunks.remainder().is_empty());
}
