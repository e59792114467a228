//! Fixed-width tag verification.
//!
//! MAC and one-time-authenticator tags come in a handful of standard widths.
//! These helpers check the width first (a public property) and then compare
//! the contents in constant time.

use traits::{Error, VerificationError};

use crate::{cmp::equal, size::check_exact};

/// Width accepted by [`verify16`].
pub const BYTES16: usize = 16;
/// Width accepted by [`verify32`].
pub const BYTES32: usize = 32;
/// Width accepted by [`verify64`].
pub const BYTES64: usize = 64;

#[inline]
fn verify_n(x: &[u8], y: &[u8], n: usize) -> Result<bool, Error> {
  check_exact("x", x.len(), n)?;
  check_exact("y", y.len(), n)?;
  equal(x, y)
}

/// Constant-time equality of two 16-byte values.
///
/// # Errors
///
/// [`Error::SizeOutOfRange`] if either input is not exactly 16 bytes.
#[inline]
pub fn verify16(x: &[u8], y: &[u8]) -> Result<bool, Error> {
  verify_n(x, y, BYTES16)
}

/// Constant-time equality of two 32-byte values.
///
/// # Errors
///
/// [`Error::SizeOutOfRange`] if either input is not exactly 32 bytes.
#[inline]
pub fn verify32(x: &[u8], y: &[u8]) -> Result<bool, Error> {
  verify_n(x, y, BYTES32)
}

/// Constant-time equality of two 64-byte values.
///
/// # Errors
///
/// [`Error::SizeOutOfRange`] if either input is not exactly 64 bytes.
#[inline]
pub fn verify64(x: &[u8], y: &[u8]) -> Result<bool, Error> {
  verify_n(x, y, BYTES64)
}

/// Check a computed tag against an expected one.
///
/// Any difference, including a length difference, is an opaque
/// [`VerificationError`].
///
/// ```
/// use ct::verify::verify_tag;
///
/// assert!(verify_tag(b"0123456789abcdef", b"0123456789abcdef").is_ok());
/// assert!(verify_tag(b"0123456789abcdef", b"0123456789abcdeF").is_err());
/// assert!(verify_tag(b"short", b"longer").is_err());
/// ```
#[inline]
pub fn verify_tag(computed: &[u8], expected: &[u8]) -> Result<(), VerificationError> {
  match equal(computed, expected) {
    Ok(true) => Ok(()),
    Ok(false) | Err(_) => Err(VerificationError::new()),
  }
}
