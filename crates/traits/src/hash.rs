//! Incremental hash engine trait.
//!
//! Shaped like a classic streaming digest (update, then finalize) with two
//! differences: every call is fallible, and finalization is terminal. An engine
//! binds its parameters (output length, key, salt, personalization) at
//! construction and cannot be reset or rewound afterwards.

use crate::Error;

/// Keyed, variable-output-length hash engine with a one-way lifecycle.
///
/// ```text
/// new ──► Updating ──update*──► Updating ──finalize──► Finalized
/// ```
///
/// # Implementor Requirements
///
/// - `update(a); update(b)` must produce the same digest as `update(a ‖ b)`.
/// - After a successful `finalize_into`, `update` and `finalize_into` return
///   [`Error::InvalidState`].
/// - A failing call leaves the engine state unchanged.
pub trait StreamingHash {
  /// Compression block size in bytes.
  const BLOCK_SIZE: usize;

  /// Number of bytes `finalize_into` writes.
  #[must_use]
  fn output_len(&self) -> usize;

  /// Whether the engine has already produced its digest.
  #[must_use]
  fn is_finalized(&self) -> bool;

  /// Absorb more input.
  fn update(&mut self, data: &[u8]) -> Result<(), Error>;

  /// Absorb multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<(), Error> {
    if self.is_finalized() {
      return Err(Error::InvalidState);
    }
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Absorb `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) -> Result<(), Error> {
    if self.is_finalized() {
      return Err(Error::InvalidState);
    }
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Produce the digest into `out` and move to the finalized state.
  ///
  /// `out` must be exactly [`output_len`](Self::output_len) bytes long,
  /// otherwise [`Error::SizeMismatch`] is returned and the engine is untouched.
  fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error>;

  /// Reset to the initial state.
  ///
  /// Not offered: the key binding is fixed at construction. Always returns
  /// [`Error::UnsupportedOperation`].
  #[inline]
  fn reset(&mut self) -> Result<(), Error> {
    Err(Error::UnsupportedOperation)
  }

  /// Wrap a writer so that every byte written is also absorbed.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::{Error, StreamingHash};
  /// # struct Sum { acc: u8, done: bool }
  /// # impl StreamingHash for Sum {
  /// #   const BLOCK_SIZE: usize = 1;
  /// #   fn output_len(&self) -> usize { 1 }
  /// #   fn is_finalized(&self) -> bool { self.done }
  /// #   fn update(&mut self, data: &[u8]) -> Result<(), Error> {
  /// #     if self.done { return Err(Error::InvalidState); }
  /// #     self.acc = data.iter().fold(self.acc, |a, &b| a.wrapping_add(b));
  /// #     Ok(())
  /// #   }
  /// #   fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
  /// #     if self.done { return Err(Error::InvalidState); }
  /// #     if out.len() != 1 { return Err(Error::SizeMismatch { left: out.len(), right: 1 }); }
  /// #     out[0] = self.acc;
  /// #     self.done = true;
  /// #     Ok(())
  /// #   }
  /// # }
  /// use std::io::Write;
  ///
  /// let mut writer = Sum { acc: 0, done: false }.writer(Vec::new());
  /// writer.write_all(&[1, 2, 3])?;
  /// let (out, mut hasher) = writer.into_parts();
  /// assert_eq!(out, vec![1, 2, 3]);
  ///
  /// let mut digest = [0u8; 1];
  /// hasher.finalize_into(&mut digest)?;
  /// assert_eq!(digest, [6]);
  /// # Ok::<(), Box<dyn std::error::Error>>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(self, inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner, self)
  }
}
