use zeroize::Zeroize;

/// Overwrite every byte of `buf` with zero.
///
/// The write goes through [`zeroize`], so it survives dead-store elimination
/// even when `buf` is never read again. Use it to erase key material.
#[inline]
pub fn zero(buf: &mut [u8]) {
  buf.zeroize();
}

/// Constant-time test for an all-zero buffer. An empty buffer is zero.
#[inline]
#[must_use]
pub fn is_zero(buf: &[u8]) -> bool {
  let mut acc = 0u8;
  for &b in buf {
    acc |= b;
  }
  // 1 iff acc == 0, without a data-dependent branch.
  let zero = (u16::from(core::hint::black_box(acc)).wrapping_sub(1) >> 8) & 1;
  zero == 1
}
