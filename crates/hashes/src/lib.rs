//! Keyed, incremental BLAKE2b and the library bootstrap.
//!
//! This crate is `no_std` compatible. Dev-only dependencies are used for
//! oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The [`Blake2b`](crypto::Blake2b) engine, its parameter validation, and key
//!   generation.
//!
//! # Bootstrap
//!
//! [`init`] prepares process-wide state (the compression kernel selection)
//! exactly once. Calling it is optional: every engine constructor runs it on
//! demand. It exists so applications can pay the setup cost up front.
//!
//! ```
//! hashes::init();
//! assert!(hashes::is_initialized());
//! assert!(!hashes::init());
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use backend::ReadyFlag;

pub mod crypto;

pub use traits::{Error, StreamingHash, VerificationError};

static READY: ReadyFlag = ReadyFlag::new();

/// Initialize the library.
///
/// Idempotent and thread-safe. Returns `true` on the call that performed the
/// initialization and `false` on every later call, including calls that raced
/// with it; all of them return only once initialization has completed.
#[inline]
pub fn init() -> bool {
  READY.init(crypto::blake2b::dispatch::warm)
}

/// Whether [`init`] has completed, explicitly or through a constructor.
#[inline]
#[must_use]
pub fn is_initialized() -> bool {
  READY.is_ready()
}

#[inline]
pub(crate) fn ensure_init() {
  if !READY.is_ready() {
    let _ = init();
  }
}
