use traits::Error;

use crate::size::check_same_len;

/// Add one to `n`, read as a little-endian unsigned integer, in place.
///
/// Arithmetic is modulo `2^(8·len)`: an all-`0xff` buffer wraps to all zero,
/// with no carry-out signal. The carry is propagated through every byte, so the
/// running time does not depend on how far it travels. Zero-length input is a
/// no-op. Typical use: advancing a nonce.
///
/// ```
/// let mut n = [0xff, 0xff];
/// ct::increment(&mut n);
/// assert_eq!(n, [0x00, 0x00]);
///
/// let mut n = [0xff, 0x00];
/// ct::increment(&mut n);
/// assert_eq!(n, [0x00, 0x01]);
/// ```
#[inline]
pub fn increment(n: &mut [u8]) {
  let mut carry = 1u16;
  for b in n.iter_mut() {
    carry += u16::from(*b);
    *b = carry as u8;
    carry >>= 8;
  }
}

/// `a = (a + b) mod 2^(8·len)`, both read as little-endian unsigned integers.
///
/// Constant time in the contents of both operands.
///
/// # Errors
///
/// [`Error::SizeMismatch`] if the lengths differ; `a` is left untouched.
///
/// ```
/// let mut a = [0x01, 0x00];
/// ct::add(&mut a, &[0xff, 0xff])?;
/// assert_eq!(a, [0x00, 0x00]);
/// # Ok::<(), ct::Error>(())
/// ```
#[inline]
pub fn add(a: &mut [u8], b: &[u8]) -> Result<(), Error> {
  check_same_len(a, b)?;
  let mut carry = 0u16;
  for (x, &y) in a.iter_mut().zip(b) {
    carry += u16::from(*x) + u16::from(y);
    *x = carry as u8;
    carry >>= 8;
  }
  Ok(())
}
