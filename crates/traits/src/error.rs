//! Error types for buffer and hash operations.
//!
//! Every failure is detected synchronously at the offending call and reported
//! to the immediate caller. Nothing here carries secret data: only lengths,
//! parameter names, and input positions of non-secret encodings.

use core::fmt;

/// Failure of a buffer primitive, a parameter check, or a hash engine call.
///
/// Modular wraparound in `increment`/`add` is not an error; it is the defined
/// arithmetic of fixed-width little-endian integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// A length lies outside the closed interval `[min, max]`.
  ///
  /// Exact-width parameters (salt, personalization, fixed-size tags) report
  /// `min == max`.
  SizeOutOfRange {
    /// Name of the offending parameter.
    what: &'static str,
    /// Length that was supplied.
    len: usize,
    /// Smallest permitted length.
    min: usize,
    /// Largest permitted length.
    max: usize,
  },
  /// Two buffers that must share a length do not.
  SizeMismatch {
    /// Length of the first operand.
    left: usize,
    /// Length of the second operand.
    right: usize,
  },
  /// One of a pair of parameters that must be supplied together is missing.
  MissingRequiredParameter {
    /// Name of the parameter that was not supplied.
    what: &'static str,
  },
  /// The engine has already produced its digest.
  InvalidState,
  /// The operation is not offered; engines cannot be reset or rewound.
  UnsupportedOperation,
  /// A character that is neither a hex digit nor an ignored separator.
  InvalidHexDigit {
    /// Byte offset of the character in the input.
    index: usize,
  },
  /// The input ends halfway through a byte.
  OddHexDigitCount,
  /// The caller-provided output slice cannot hold the result.
  OutputTooSmall {
    /// Bytes required (a lower bound when the input is still being scanned).
    needed: usize,
    /// Bytes available in the output slice.
    available: usize,
  },
}

impl Error {
  /// Shorthand for an exact-width check failure.
  #[inline]
  #[must_use]
  pub const fn wrong_width(what: &'static str, len: usize, expected: usize) -> Self {
    Self::SizeOutOfRange {
      what,
      len,
      min: expected,
      max: expected,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::SizeOutOfRange { what, len, min, max } if min == max => {
        write!(f, "{what} must be {min} bytes, got {len}")
      }
      Self::SizeOutOfRange { what, len, min, max } => {
        write!(f, "{what} must be between {min} and {max} bytes, got {len}")
      }
      Self::SizeMismatch { left, right } => write!(f, "buffer lengths differ: {left} != {right}"),
      Self::MissingRequiredParameter { what } => write!(f, "missing required parameter: {what}"),
      Self::InvalidState => f.write_str("hash engine already finalized"),
      Self::UnsupportedOperation => f.write_str("operation not supported: hash engines cannot be reset"),
      Self::InvalidHexDigit { index } => write!(f, "invalid hex character at offset {index}"),
      Self::OddHexDigitCount => f.write_str("hex input ends with an incomplete byte"),
      Self::OutputTooSmall { needed, available } => {
        write!(f, "output buffer too small: need {needed} bytes, have {available}")
      }
    }
  }
}

impl core::error::Error for Error {}

/// Verification failed.
///
/// Returned when a computed tag does not match the expected one. Intentionally
/// opaque: the caller learns nothing about where or how the tags differ.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn check(tag_matches: bool) -> Result<(), VerificationError> {
///   if tag_matches { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// assert!(check(false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
