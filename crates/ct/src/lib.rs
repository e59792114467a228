//! Constant-time primitives over raw byte buffers.
//!
//! Every function here is pure, stateless, and reentrant: safe to call from any
//! number of threads with no setup. Running time depends on buffer *lengths*
//! only, never on their contents.
//!
//! # Operations
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`zero`] | Wipe a buffer; the write is never optimized away |
//! | [`equal`] | Constant-time equality of equal-length buffers |
//! | [`compare`] | Constant-time ordering of little-endian integers |
//! | [`is_zero`] | Constant-time all-zero test |
//! | [`increment`] | `n + 1 mod 2^(8·len)`, little-endian, in place |
//! | [`add`] | `a + b mod 2^(8·len)`, little-endian, in place |
//! | [`hex`] | Lower-case hex encoding, separator-tolerant decoding |
//! | [`verify`] | Fixed-width tag comparison |
//!
//! # Byte Order
//!
//! Buffers used as integers are **little-endian**: index 0 is the least
//! significant byte. This applies to [`compare`] too, which is the opposite of
//! the lexicographic (big-endian) comparison most libraries document:
//!
//! ```
//! use core::cmp::Ordering;
//!
//! // 1 < 256
//! assert_eq!(ct::compare(&[0x01, 0x00], &[0x00, 0x01]), Ok(Ordering::Less));
//! ```
//!
//! # Length Agreement
//!
//! Two-operand functions never truncate or pad: unequal lengths are reported as
//! [`Error::SizeMismatch`](traits::Error::SizeMismatch).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arith;
mod cmp;
pub mod hex;
mod mem;
pub mod size;
pub mod verify;

#[cfg(test)]
mod proptests;

pub use arith::{add, increment};
pub use cmp::{compare, compare_i32, equal};
pub use mem::{is_zero, zero};
pub use traits::{Error, VerificationError};
