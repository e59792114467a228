use core::{cmp::Ordering, hint::black_box};

use traits::Error;

use crate::size::check_same_len;

/// Constant-time equality of two equal-length buffers.
///
/// Every byte is examined regardless of where the first difference is, so the
/// running time leaks only the length. Use this for authentication tags and
/// keys.
///
/// # Errors
///
/// [`Error::SizeMismatch`] if the lengths differ.
///
/// ```
/// assert_eq!(ct::equal(b"tag!", b"tag!"), Ok(true));
/// assert_eq!(ct::equal(b"tag!", b"tag?"), Ok(false));
/// assert!(ct::equal(b"tag", b"tag!").is_err());
/// ```
#[inline]
pub fn equal(a: &[u8], b: &[u8]) -> Result<bool, Error> {
  check_same_len(a, b)?;
  let mut diff = 0u8;
  for (&x, &y) in a.iter().zip(b) {
    diff |= x ^ y;
  }
  let eq = (u16::from(black_box(diff)).wrapping_sub(1) >> 8) & 1;
  Ok(eq == 1)
}

/// Constant-time comparison of two equal-length **little-endian** integers.
///
/// The *last* byte is the most significant, so this is lexicographic order
/// over the reversed buffers, not over the buffers as written.
///
/// # Errors
///
/// [`Error::SizeMismatch`] if the lengths differ.
///
/// ```
/// use core::cmp::Ordering;
///
/// assert_eq!(ct::compare(&[0xff, 0x00], &[0x00, 0x01]), Ok(Ordering::Less));
/// assert_eq!(ct::compare(&[0x00, 0x02], &[0xff, 0x01]), Ok(Ordering::Greater));
/// assert_eq!(ct::compare(&[], &[]), Ok(Ordering::Equal));
/// ```
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> Result<Ordering, Error> {
  Ok(compare_i32(a, b)?.cmp(&0))
}

/// [`compare`] in integer form: `-1` if `a < b`, `0` if equal, `1` if `a > b`.
///
/// # Errors
///
/// [`Error::SizeMismatch`] if the lengths differ.
pub fn compare_i32(a: &[u8], b: &[u8]) -> Result<i32, Error> {
  check_same_len(a, b)?;

  // Scan from the most significant byte. `eq` stays 1 while every byte seen so
  // far matched; `gt` latches the first difference where a's byte is larger.
  let mut gt = 0u16;
  let mut eq = 1u16;
  for (&x, &y) in a.iter().zip(b).rev() {
    let x1 = u16::from(x);
    let x2 = u16::from(y);
    gt |= (x2.wrapping_sub(x1) >> 8) & eq;
    eq &= (x2 ^ x1).wrapping_sub(1) >> 8;
  }
  let (gt, eq) = (black_box(gt) & 1, black_box(eq) & 1);
  Ok(i32::from(gt + gt + eq) - 1)
}
