use core::fmt;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use traits::VerificationError;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BYTES_MAX;

/// A finished BLAKE2b digest of 16 to 64 bytes.
///
/// Equality is constant time, so a digest used as a MAC tag can be compared
/// with `==` directly. `Display` prints lower-case hex.
///
/// A keyed digest is a MAC tag, so the bytes are wiped on drop.
#[derive(Clone)]
pub struct Blake2bOutput {
  bytes: [u8; BYTES_MAX],
  len: usize,
}

impl Blake2bOutput {
  #[inline]
  pub(crate) const fn zeroed(len: usize) -> Self {
    Self {
      bytes: [0u8; BYTES_MAX],
      len,
    }
  }

  #[inline]
  pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
    self.bytes.get_mut(..self.len).unwrap_or(&mut [])
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..self.len).unwrap_or(&[])
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Compare against an expected tag in constant time.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] if the contents or the lengths differ.
  #[inline]
  pub fn verify(&self, expected: &[u8]) -> Result<(), VerificationError> {
    ct::verify::verify_tag(self.as_bytes(), expected)
  }

  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn to_vec(&self) -> Vec<u8> {
    self.as_bytes().to_vec()
  }
}

impl AsRef<[u8]> for Blake2bOutput {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq for Blake2bOutput {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    matches!(ct::equal(self.as_bytes(), other.as_bytes()), Ok(true))
  }
}

impl Eq for Blake2bOutput {}

impl PartialEq<[u8]> for Blake2bOutput {
  #[inline]
  fn eq(&self, other: &[u8]) -> bool {
    matches!(ct::equal(self.as_bytes(), other), Ok(true))
  }
}

impl Zeroize for Blake2bOutput {
  fn zeroize(&mut self) {
    self.bytes.zeroize();
    self.len.zeroize();
  }
}

impl Drop for Blake2bOutput {
  fn drop(&mut self) {
    self.zeroize();
  }
}

impl ZeroizeOnDrop for Blake2bOutput {}

impl fmt::Display for Blake2bOutput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &b in self.as_bytes() {
      let [hi, lo] = ct::hex::encode_byte(b);
      write!(f, "{}{}", char::from(hi), char::from(lo))?;
    }
    Ok(())
  }
}

impl fmt::Debug for Blake2bOutput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Blake2bOutput({self})")
  }
}
