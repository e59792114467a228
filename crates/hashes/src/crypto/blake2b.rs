//! BLAKE2b (RFC 7693) with keying, salt, personalization and variable output.
//!
//! # Lifecycle
//!
//! An engine binds its output length, key, salt and personalization at
//! construction. It then absorbs any number of [`update`](Blake2b::update)
//! calls and produces exactly one digest:
//!
//! ```text
//! new ──► Updating ──update*──► Updating ──finalize──► Finalized
//! ```
//!
//! After finalization the state is wiped and every further call fails with
//! [`Error::InvalidState`]. There is no way back: [`Blake2b::reset`] always
//! fails with [`Error::UnsupportedOperation`], and the engine is not `Clone`.
//!
//! # Example
//!
//! ```
//! use hashes::crypto::blake2b::Blake2b;
//!
//! let key = hashes::crypto::blake2b::generate_key();
//! let mut mac = Blake2b::new(32, key.as_slice())?;
//! mac.update(b"hello ")?;
//! mac.update(b"world")?;
//! let tag = mac.finalize()?;
//!
//! assert_eq!(tag, Blake2b::digest(32, key.as_slice(), b"hello world")?);
//! assert!(mac.update(b"more").is_err());
//! # Ok::<(), traits::Error>(())
//! ```

#![allow(clippy::indexing_slicing)] // Block buffer offsets are bounded by BLOCK_LEN

use core::fmt;

use rand_core::{CryptoRng, RngCore};
use traits::{Error, StreamingHash, VerificationError};
use zeroize::{Zeroize, Zeroizing};

pub(crate) mod dispatch;
#[cfg(test)]
mod kernel_test;
pub mod kernels;
mod output;
mod params;
mod state;

pub use dispatch::kernel_name;
use kernels::CompressFn;
pub use output::Blake2bOutput;
pub use params::Blake2bParams;
use state::State;

/// Smallest digest length.
pub const BYTES_MIN: usize = 16;
/// Largest digest length.
pub const BYTES_MAX: usize = 64;
/// Default digest length.
pub const BYTES: usize = 32;
/// Smallest non-empty key.
pub const KEYBYTES_MIN: usize = 16;
/// Largest key.
pub const KEYBYTES_MAX: usize = 64;
/// Length of keys from [`generate_key`].
pub const KEYBYTES: usize = 32;
/// Exact salt width.
pub const SALTBYTES: usize = 16;
/// Exact personalization width.
pub const PERSONALBYTES: usize = 16;
/// Compression block size.
pub const BLOCK_LEN: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
  Updating,
  Finalized,
}

/// Incremental BLAKE2b engine.
pub struct Blake2b {
  state: State,
  output_len: usize,
  phase: Phase,
  compress: CompressFn,
}

impl Blake2b {
  /// Block size in bytes.
  pub const BLOCK_SIZE: usize = BLOCK_LEN;

  /// Engine producing `output_len` bytes, keyed with `key` (empty for unkeyed).
  ///
  /// # Errors
  ///
  /// [`Error::SizeOutOfRange`] for an output length or key length out of range.
  #[inline]
  pub fn new(output_len: usize, key: &[u8]) -> Result<Self, Error> {
    Self::with_params(&Blake2bParams::new().output_len(output_len).key(key))
  }

  /// Engine with salt and personalization.
  ///
  /// # Errors
  ///
  /// [`Error::SizeOutOfRange`] for any length out of range, including a salt
  /// or personalization that is not exactly 16 bytes.
  #[inline]
  pub fn new_salt_personal(output_len: usize, key: &[u8], salt: &[u8], personal: &[u8]) -> Result<Self, Error> {
    Self::with_params(
      &Blake2bParams::new()
        .output_len(output_len)
        .key(key)
        .salt(salt)
        .personal(personal),
    )
  }

  /// Engine from a parameter set.
  ///
  /// # Errors
  ///
  /// Whatever [`Blake2bParams::validate`] reports.
  pub fn with_params(params: &Blake2bParams<'_>) -> Result<Self, Error> {
    crate::ensure_init();
    Self::with_kernel(params, dispatch::compress_fn_active())
  }

  pub(crate) fn with_kernel(params: &Blake2bParams<'_>, compress: CompressFn) -> Result<Self, Error> {
    let words = params.param_words()?;
    let mut engine = Self {
      state: State::new(&words),
      output_len: params.get_output_len(),
      phase: Phase::Updating,
      compress,
    };

    let key = params.key_bytes();
    if !key.is_empty() {
      let mut block = Zeroizing::new([0u8; BLOCK_LEN]);
      for (b, &k) in block.iter_mut().zip(key) {
        *b = k;
      }
      engine.absorb(block.as_slice());
    }
    Ok(engine)
  }

  /// One-shot keyed digest of `data`.
  ///
  /// # Errors
  ///
  /// As [`Blake2b::new`].
  #[inline]
  pub fn digest(output_len: usize, key: &[u8], data: &[u8]) -> Result<Blake2bOutput, Error> {
    let mut h = Self::new(output_len, key)?;
    h.update(data)?;
    h.finalize()
  }

  /// One-shot digest with salt and personalization.
  ///
  /// # Errors
  ///
  /// As [`Blake2b::new_salt_personal`].
  #[inline]
  pub fn digest_salt_personal(
    output_len: usize,
    key: &[u8],
    salt: &[u8],
    personal: &[u8],
    data: &[u8],
  ) -> Result<Blake2bOutput, Error> {
    let mut h = Self::new_salt_personal(output_len, key, salt, personal)?;
    h.update(data)?;
    h.finalize()
  }

  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    self.output_len
  }

  #[inline]
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.phase == Phase::Finalized
  }

  /// Absorb `data`.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidState`] after finalization.
  #[inline]
  pub fn update(&mut self, data: &[u8]) -> Result<(), Error> {
    if self.is_finalized() {
      return Err(Error::InvalidState);
    }
    self.absorb(data);
    Ok(())
  }

  /// Produce the digest and finalize the engine.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidState`] if the digest was already produced.
  #[inline]
  pub fn finalize(&mut self) -> Result<Blake2bOutput, Error> {
    let mut out = Blake2bOutput::zeroed(self.output_len);
    self.finalize_into(out.as_mut_slice())?;
    Ok(out)
  }

  /// Write the digest into `out`, which must be exactly
  /// [`output_len`](Self::output_len) bytes, and finalize the engine.
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidState`] if the digest was already produced.
  /// - [`Error::SizeMismatch`] if `out` has the wrong length; the engine is untouched.
  pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
    if self.is_finalized() {
      return Err(Error::InvalidState);
    }
    if out.len() != self.output_len {
      return Err(Error::SizeMismatch {
        left: out.len(),
        right: self.output_len,
      });
    }

    let compress = self.compress;
    let st = &mut self.state;
    let len = st.buf_len;
    st.buf[len..].fill(0);
    st.f[0] = u64::MAX;
    compress(&mut st.h, &st.buf, &mut st.t, &st.f, len as u32);

    let mut full = Zeroizing::new([0u8; BYTES_MAX]);
    for (chunk, word) in full.chunks_exact_mut(8).zip(st.h.iter()) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    out.copy_from_slice(&full[..self.output_len]);

    st.zeroize();
    self.phase = Phase::Finalized;
    Ok(())
  }

  /// Finalize and compare the digest with `expected` in constant time.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] on any mismatch, or if the engine was already
  /// finalized.
  #[inline]
  pub fn verify(&mut self, expected: &[u8]) -> Result<(), VerificationError> {
    let tag = self.finalize().map_err(|_| VerificationError::new())?;
    tag.verify(expected)
  }

  /// Always fails: the key binding is fixed for the engine's lifetime.
  ///
  /// # Errors
  ///
  /// Always [`Error::UnsupportedOperation`].
  #[inline]
  pub fn reset(&mut self) -> Result<(), Error> {
    Err(Error::UnsupportedOperation)
  }

  /// Streaming core. The last block seen is always held back in `buf` so
  /// that finalization can compress it with the last-block flag set.
  fn absorb(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }
    let compress = self.compress;
    let st = &mut self.state;

    if st.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - st.buf_len, data.len());
      st.buf[st.buf_len..st.buf_len + take].copy_from_slice(&data[..take]);
      st.buf_len += take;
      data = &data[take..];

      if st.buf_len == BLOCK_LEN && !data.is_empty() {
        compress(&mut st.h, &st.buf, &mut st.t, &st.f, 0);
        // The held-back block may be the padded key.
        st.buf.zeroize();
        st.buf_len = 0;
      }
    }

    let full_len = data.len() - (data.len() % BLOCK_LEN);
    if full_len != 0 {
      let (full, rest) = data.split_at(full_len);
      if rest.is_empty() {
        let (to_compress, last_full) = full.split_at(full_len - BLOCK_LEN);
        compress(&mut st.h, to_compress, &mut st.t, &st.f, 0);
        st.buf.copy_from_slice(last_full);
        st.buf_len = BLOCK_LEN;
      } else {
        compress(&mut st.h, full, &mut st.t, &st.f, 0);
      }
      data = rest;
    }

    if !data.is_empty() {
      st.buf[..data.len()].copy_from_slice(data);
      st.buf_len = data.len();
    }
  }
}

impl StreamingHash for Blake2b {
  const BLOCK_SIZE: usize = BLOCK_LEN;

  #[inline]
  fn output_len(&self) -> usize {
    self.output_len
  }

  #[inline]
  fn is_finalized(&self) -> bool {
    Blake2b::is_finalized(self)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> Result<(), Error> {
    Blake2b::update(self, data)
  }

  #[inline]
  fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
    Blake2b::finalize_into(self, out)
  }
}

impl Drop for Blake2b {
  fn drop(&mut self) {
    self.state.zeroize();
  }
}

impl fmt::Debug for Blake2b {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2b")
      .field("output_len", &self.output_len)
      .field("phase", &self.phase)
      .finish_non_exhaustive()
  }
}

/// Fill a fresh [`KEYBYTES`]-byte key from `rng`.
///
/// The key is wiped when the returned value is dropped.
#[inline]
#[must_use]
pub fn generate_key_with<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Zeroizing<[u8; KEYBYTES]> {
  let mut key = Zeroizing::new([0u8; KEYBYTES]);
  rng.fill_bytes(key.as_mut_slice());
  key
}

/// A fresh [`KEYBYTES`]-byte key from the operating system's CSPRNG.
#[cfg(feature = "rand")]
#[inline]
#[must_use]
pub fn generate_key() -> Zeroizing<[u8; KEYBYTES]> {
  crate::ensure_init();
  generate_key_with(&mut rand::rngs::OsRng)
}
