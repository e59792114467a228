//! Engine parameters and their validation.
//!
//! [`Blake2bParams`] collects output length, key, salt and personalization,
//! and [`Blake2bParams::validate`] checks every length before anything is
//! computed. A validated set is turned into the eight parameter-block words
//! that are XORed into the IV.

use core::fmt;

use ct::size::{check_exact, check_optional_range, check_range};
use traits::Error;

use super::{BYTES, BYTES_MAX, BYTES_MIN, KEYBYTES_MAX, KEYBYTES_MIN, PERSONALBYTES, SALTBYTES};

/// Builder for a [`Blake2b`](super::Blake2b) engine.
///
/// Defaults: [`BYTES`] of output, no key, no salt, no personalization.
///
/// ```
/// use hashes::crypto::blake2b::{Blake2b, Blake2bParams};
///
/// let key = [0x42u8; 32];
/// let mut h = Blake2b::with_params(
///   &Blake2bParams::new()
///     .output_len(64)
///     .key(&key)
///     .salt(b"0123456789abcdef")
///     .personal(b"app v1 signature"),
/// )?;
/// h.update(b"message")?;
/// assert_eq!(h.finalize()?.as_ref().len(), 64);
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Blake2bParams<'a> {
  output_len: usize,
  key: &'a [u8],
  salt: Option<&'a [u8]>,
  personal: Option<&'a [u8]>,
}

impl Default for Blake2bParams<'_> {
  #[inline]
  fn default() -> Self {
    Self {
      output_len: BYTES,
      key: &[],
      salt: None,
      personal: None,
    }
  }
}

impl<'a> Blake2bParams<'a> {
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Digest length in bytes, `BYTES_MIN..=BYTES_MAX`.
  #[inline]
  #[must_use]
  pub const fn output_len(mut self, len: usize) -> Self {
    self.output_len = len;
    self
  }

  /// Key for keyed hashing. Empty means unkeyed.
  ///
  /// The key is borrowed only until the engine is constructed.
  #[inline]
  #[must_use]
  pub const fn key(mut self, key: &'a [u8]) -> Self {
    self.key = key;
    self
  }

  /// Salt, exactly [`SALTBYTES`]. Requires [`personal`](Self::personal).
  #[inline]
  #[must_use]
  pub const fn salt(mut self, salt: &'a [u8]) -> Self {
    self.salt = Some(salt);
    self
  }

  /// Personalization, exactly [`PERSONALBYTES`]. Requires [`salt`](Self::salt).
  #[inline]
  #[must_use]
  pub const fn personal(mut self, personal: &'a [u8]) -> Self {
    self.personal = Some(personal);
    self
  }

  #[inline]
  #[must_use]
  pub const fn get_output_len(&self) -> usize {
    self.output_len
  }

  #[inline]
  #[must_use]
  pub(crate) const fn key_bytes(&self) -> &'a [u8] {
    self.key
  }

  /// Check every length and the salt/personalization pairing.
  ///
  /// # Errors
  ///
  /// - [`Error::SizeOutOfRange`] for an output length outside `[BYTES_MIN, BYTES_MAX]`, a non-empty
  ///   key outside `[KEYBYTES_MIN, KEYBYTES_MAX]`, or a salt or personalization of the wrong width.
  /// - [`Error::MissingRequiredParameter`] when exactly one of salt and personalization is set.
  pub fn validate(&self) -> Result<(), Error> {
    check_range("output length", self.output_len, BYTES_MIN, BYTES_MAX)?;
    check_optional_range("key", self.key.len(), KEYBYTES_MIN, KEYBYTES_MAX)?;
    match (self.salt, self.personal) {
      (None, None) => Ok(()),
      (Some(salt), Some(personal)) => {
        check_exact("salt", salt.len(), SALTBYTES)?;
        check_exact("personalization", personal.len(), PERSONALBYTES)
      }
      (Some(_), None) => Err(Error::MissingRequiredParameter { what: "personalization" }),
      (None, Some(_)) => Err(Error::MissingRequiredParameter { what: "salt" }),
    }
  }

  /// Validate, then lay out the parameter block as eight little-endian words.
  ///
  /// Word 0 packs digest length, key length, fanout 1 and depth 1. Words 1-3
  /// (leaf length, node offset, node depth, inner length) stay zero for
  /// sequential hashing. Words 4-5 carry the salt, words 6-7 the
  /// personalization.
  pub(crate) fn param_words(&self) -> Result<[u64; 8], Error> {
    self.validate()?;

    let mut words = [0u64; 8];
    let [w0, _, _, _, s0, s1, p0, p1] = &mut words;
    *w0 = self.output_len as u64 | (self.key.len() as u64) << 8 | 1 << 16 | 1 << 24;
    if let (Some(salt), Some(personal)) = (self.salt, self.personal) {
      (*s0, *s1) = split_words(salt);
      (*p0, *p1) = split_words(personal);
    }
    Ok(words)
  }
}

/// Two little-endian words from a 16-byte field.
#[inline]
fn split_words(field: &[u8]) -> (u64, u64) {
  let mut words = [0u64; 2];
  for (word, chunk) in words.iter_mut().zip(field.chunks(8)) {
    let mut bytes = [0u8; 8];
    for (b, &c) in bytes.iter_mut().zip(chunk) {
      *b = c;
    }
    *word = u64::from_le_bytes(bytes);
  }
  let [lo, hi] = words;
  (lo, hi)
}

impl fmt::Debug for Blake2bParams<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2bParams")
      .field("output_len", &self.output_len)
      .field("key_len", &self.key.len())
      .field("salt", &self.salt.is_some())
      .field("personal", &self.personal.is_some())
      .finish()
  }
}
