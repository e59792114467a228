//! I/O adapter for streaming hash engines.
//!
//! [`HashWriter`] wraps a [`std::io::Write`] and absorbs exactly the bytes the
//! inner writer accepted, so short writes never desynchronize the digest from
//! the data that actually went out.

use std::io;

use crate::{Error, StreamingHash};

#[inline]
fn to_io(e: Error) -> io::Error {
  io::Error::other(e)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8]) -> Result<(), Error>) -> io::Result<usize>
where
  W: io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data).map_err(to_io)?;
  }
  Ok(n)
}

#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[io::IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]) -> Result<(), Error>,
) -> io::Result<usize>
where
  W: io::Write,
{
  let n = inner.write_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data).map_err(to_io)?;
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Wraps a [`Write`](std::io::Write) and feeds a [`StreamingHash`].
///
/// # Write-Then-Hash Order
///
/// Bytes are absorbed only after the inner writer accepted them. Writing into a
/// finalized engine fails with an [`io::Error`] wrapping
/// [`Error::InvalidState`] before anything reaches the inner writer.
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamingHash> HashWriter<W, H> {
  /// Wrap `inner`, absorbing into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: W, hasher: H) -> Self {
    Self { inner, hasher }
  }

  /// The engine being fed.
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  /// Mutable access to the engine, e.g. to finalize it in place.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner writer and the engine.
  #[inline]
  pub fn into_parts(self) -> (W, H) {
    (self.inner, self.hasher)
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  fn ensure_open(&self) -> io::Result<()> {
    if self.hasher.is_finalized() {
      return Err(to_io(Error::InvalidState));
    }
    Ok(())
  }
}

impl<W: io::Write, H: StreamingHash> io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.ensure_open()?;
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[io::IoSlice<'_>]) -> io::Result<usize> {
    self.ensure_open()?;
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{io::Write, vec::Vec};

  use super::*;

  /// Byte-sum engine; enough to observe what was absorbed.
  struct Sum {
    acc: u64,
    seen: usize,
    done: bool,
  }

  impl Sum {
    fn new() -> Self {
      Self {
        acc: 0,
        seen: 0,
        done: false,
      }
    }
  }

  impl StreamingHash for Sum {
    const BLOCK_SIZE: usize = 1;

    fn output_len(&self) -> usize {
      8
    }

    fn is_finalized(&self) -> bool {
      self.done
    }

    fn update(&mut self, data: &[u8]) -> Result<(), Error> {
      if self.done {
        return Err(Error::InvalidState);
      }
      self.seen += data.len();
      self.acc = data.iter().fold(self.acc, |a, &b| a + u64::from(b));
      Ok(())
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
      if self.done {
        return Err(Error::InvalidState);
      }
      if out.len() != 8 {
        return Err(Error::SizeMismatch {
          left: out.len(),
          right: 8,
        });
      }
      out.copy_from_slice(&self.acc.to_le_bytes());
      self.done = true;
      Ok(())
    }
  }

  /// Accepts at most `limit` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn short_writes_hash_only_accepted_bytes() {
    let mut w = HashWriter::new(Trickle { out: Vec::new(), limit: 3 }, Sum::new());
    assert_eq!(w.write(&[1, 2, 3, 4, 5]).unwrap(), 3);
    assert_eq!(w.hasher().seen, 3);
    w.write_all(&[10, 20]).unwrap();
    let (inner, sum) = w.into_parts();
    assert_eq!(inner.out, [1, 2, 3, 10, 20]);
    assert_eq!(sum.acc, 36);
  }

  #[test]
  fn vectored_writes_feed_in_order() {
    let mut w = Sum::new().writer(Vec::new());
    let bufs = [io::IoSlice::new(b"ab"), io::IoSlice::new(b"c")];
    let n = w.write_vectored(&bufs).unwrap();
    assert!(n >= 1);
    assert_eq!(w.hasher().seen, n);
  }

  #[test]
  fn writing_after_finalize_fails_without_touching_inner() {
    let mut w = Sum::new().writer(Vec::new());
    w.write_all(b"x").unwrap();
    let mut out = [0u8; 8];
    w.hasher_mut().finalize_into(&mut out).unwrap();

    let err = w.write(b"y").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(w.inner().as_slice(), b"x");
  }

  #[test]
  fn default_reset_is_unsupported() {
    let mut s = Sum::new();
    assert_eq!(s.reset(), Err(Error::UnsupportedOperation));
    assert_eq!(s.update_vectored(&[b"ab", b"cd"]), Ok(()));
    assert_eq!(s.seen, 4);
  }
}
