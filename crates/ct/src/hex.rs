//! Constant-time hexadecimal codec.
//!
//! Encoding is lower-case, two characters per byte. Decoding accepts both
//! cases and an `ignore` set of separator characters.
//!
//! Digit values are computed without table lookups or data-dependent branches,
//! so hex-encoded keys can pass through here. Only the *validity* of each
//! character (and membership in `ignore`) steers control flow.
//!
//! # Decoding Rules
//!
//! - Characters in `ignore` are skipped only *between* bytes. A separator that splits the two
//!   digits of one byte is an error, as in `"a b"`.
//! - [`decode`] and [`decode_to_slice`] are strict: any other non-hex character is
//!   [`Error::InvalidHexDigit`], and a dangling final digit is [`Error::OddHexDigitCount`]. Nothing
//!   is silently truncated.
//! - [`decode_prefix`] is the lenient variant: it stops at the first character it cannot use and
//!   reports how much input it consumed.
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! let bytes = ct::hex::decode("DE:AD:be:ef", ":")?;
//! assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(ct::hex::encode(&bytes), "deadbeef");
//! # }
//! # Ok::<(), ct::Error>(())
//! ```

#[cfg(feature = "alloc")]
use alloc::{string::String, vec, vec::Vec};

use traits::Error;

/// Number of hex characters produced for `bin_len` input bytes.
#[inline]
#[must_use]
pub const fn encoded_len(bin_len: usize) -> usize {
  bin_len.saturating_mul(2)
}

#[inline(always)]
const fn nibble_to_hex(n: u8) -> u8 {
  let n = n as u32;
  // n < 10: the mask term wraps 87 + n to b'0' + n; otherwise b'a' + (n - 10).
  (87 + n + ((n.wrapping_sub(10) >> 8) & !38)) as u8
}

/// Encode one byte as two lower-case hex characters.
#[inline]
#[must_use]
pub const fn encode_byte(b: u8) -> [u8; 2] {
  [nibble_to_hex(b >> 4), nibble_to_hex(b & 0x0f)]
}

/// Returns `(value, mask)` where `mask` is `0xff` for a hex digit and `0` otherwise.
#[inline(always)]
const fn hex_to_nibble(c: u8) -> (u8, u8) {
  let num = c ^ b'0';
  let num_ok = ((num as u16).wrapping_sub(10) >> 8) as u8;
  let alpha = (c & !0x20).wrapping_sub(55);
  let alpha_ok = (((alpha as u16).wrapping_sub(10) ^ (alpha as u16).wrapping_sub(16)) >> 8) as u8;
  ((num_ok & num) | (alpha_ok & alpha), num_ok | alpha_ok)
}

/// Encode `bin` into `out`, returning the number of characters written.
///
/// # Errors
///
/// [`Error::OutputTooSmall`] if `out` is shorter than [`encoded_len`]`(bin.len())`.
pub fn encode_to_slice(bin: &[u8], out: &mut [u8]) -> Result<usize, Error> {
  let needed = encoded_len(bin.len());
  if out.len() < needed {
    return Err(Error::OutputTooSmall {
      needed,
      available: out.len(),
    });
  }
  for (pair, &b) in out.chunks_exact_mut(2).zip(bin) {
    pair.copy_from_slice(&encode_byte(b));
  }
  Ok(needed)
}

/// Encode `bin` as a lower-case hex string.
#[cfg(feature = "alloc")]
#[must_use]
pub fn encode(bin: &[u8]) -> String {
  let mut s = String::with_capacity(encoded_len(bin.len()));
  for &b in bin {
    let [hi, lo] = encode_byte(b);
    s.push(char::from(hi));
    s.push(char::from(lo));
  }
  s
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stop {
  /// Ran out of input.
  End,
  /// Hit a character that is neither a digit nor an ignorable separator.
  Invalid(usize),
  /// A new byte would not fit in the output.
  Full,
}

#[derive(Clone, Copy, Debug)]
struct Scan {
  written: usize,
  /// Input offset just past the last character used.
  consumed: usize,
  /// A high nibble was read but its low nibble never arrived.
  dangling: bool,
  stop: Stop,
}

fn scan(hex: &[u8], ignore: &[u8], out: &mut [u8]) -> Scan {
  let mut acc = 0u8;
  let mut high = true;
  let mut written = 0usize;
  let mut pos = 0usize;
  let mut stop = Stop::End;

  while let Some(&c) = hex.get(pos) {
    let (value, ok) = hex_to_nibble(c);
    if ok == 0 {
      if high && ignore.contains(&c) {
        pos += 1;
        continue;
      }
      stop = Stop::Invalid(pos);
      break;
    }
    if high {
      if written >= out.len() {
        stop = Stop::Full;
        break;
      }
      acc = value << 4;
    } else if let Some(slot) = out.get_mut(written) {
      *slot = acc | value;
      written += 1;
    }
    high = !high;
    pos += 1;
  }

  let dangling = !high;
  Scan {
    written,
    consumed: if dangling { pos - 1 } else { pos },
    dangling,
    stop,
  }
}

/// Strictly decode `hex` into `out`, skipping separators listed in `ignore`.
///
/// Returns the number of bytes written. On error, the contents of `out` are
/// unspecified.
///
/// # Errors
///
/// - [`Error::InvalidHexDigit`] for a character that is neither a hex digit nor in `ignore`
///   (including a separator between the two digits of one byte).
/// - [`Error::OddHexDigitCount`] if the filtered input ends mid-byte.
/// - [`Error::OutputTooSmall`] if `out` fills up before the input ends.
pub fn decode_to_slice(hex: &str, ignore: &str, out: &mut [u8]) -> Result<usize, Error> {
  let available = out.len();
  let s = scan(hex.as_bytes(), ignore.as_bytes(), out);
  match s.stop {
    Stop::Invalid(index) => Err(Error::InvalidHexDigit { index }),
    Stop::Full => Err(Error::OutputTooSmall {
      needed: s.written + 1,
      available,
    }),
    Stop::End if s.dangling => Err(Error::OddHexDigitCount),
    Stop::End => Ok(s.written),
  }
}

/// Strictly decode `hex` into a new vector, skipping separators in `ignore`.
///
/// # Errors
///
/// See [`decode_to_slice`]; [`Error::OutputTooSmall`] cannot occur.
#[cfg(feature = "alloc")]
pub fn decode(hex: &str, ignore: &str) -> Result<Vec<u8>, Error> {
  // Every output byte consumes at least two input characters.
  let mut out = vec![0u8; hex.len() / 2];
  let n = decode_to_slice(hex, ignore, &mut out)?;
  out.truncate(n);
  Ok(out)
}

/// Outcome of [`decode_prefix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexPrefix {
  /// Bytes written to the output.
  pub written: usize,
  /// Input characters consumed, including skipped separators. `hex[consumed..]`
  /// starts at the first character that was not used.
  pub consumed: usize,
}

/// Decode the longest valid prefix of `hex`.
///
/// Stops at the first character that is neither a hex digit nor an ignorable
/// separator. A trailing lone digit is not consumed.
///
/// ```
/// let mut out = [0u8; 8];
/// let p = ct::hex::decode_prefix("0a 0bzz", " ", &mut out)?;
/// assert_eq!(&out[..p.written], &[0x0a, 0x0b]);
/// assert_eq!(p.consumed, 5);
/// # Ok::<(), ct::Error>(())
/// ```
///
/// # Errors
///
/// [`Error::OutputTooSmall`] if `out` fills up while decodable input remains.
pub fn decode_prefix(hex: &str, ignore: &str, out: &mut [u8]) -> Result<HexPrefix, Error> {
  let available = out.len();
  let s = scan(hex.as_bytes(), ignore.as_bytes(), out);
  if s.stop == Stop::Full {
    return Err(Error::OutputTooSmall {
      needed: s.written + 1,
      available,
    });
  }
  Ok(HexPrefix {
    written: s.written,
    consumed: s.consumed,
  })
}
