//! Length checks shared by the primitives and by parameter validation.
//!
//! Lengths are public, so these checks branch freely.

use traits::Error;

/// `len ∈ [min, max]`, or [`Error::SizeOutOfRange`].
///
/// ```
/// assert!(ct::size::check_range("key", 32, 16, 64).is_ok());
/// assert!(ct::size::check_range("key", 65, 16, 64).is_err());
/// ```
#[inline]
pub const fn check_range(what: &'static str, len: usize, min: usize, max: usize) -> Result<(), Error> {
  if len < min || len > max {
    return Err(Error::SizeOutOfRange { what, len, min, max });
  }
  Ok(())
}

/// `len == expected`, or [`Error::SizeOutOfRange`] with `min == max`.
#[inline]
pub const fn check_exact(what: &'static str, len: usize, expected: usize) -> Result<(), Error> {
  if len != expected {
    return Err(Error::wrong_width(what, len, expected));
  }
  Ok(())
}

/// `len == 0 || len ∈ [min, max]`: an optional parameter whose empty form
/// means "absent".
#[inline]
pub const fn check_optional_range(what: &'static str, len: usize, min: usize, max: usize) -> Result<(), Error> {
  if len == 0 {
    return Ok(());
  }
  check_range(what, len, min, max)
}

/// Two operands share a length, or [`Error::SizeMismatch`].
#[inline]
pub const fn check_same_len(left: &[u8], right: &[u8]) -> Result<(), Error> {
  if left.len() != right.len() {
    return Err(Error::SizeMismatch {
      left: left.len(),
      right: right.len(),
    });
  }
  Ok(())
}
