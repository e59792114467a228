//! Constant-time buffer primitives and a keyed, incremental BLAKE2b.
//!
//! `natrium` is `no_std` compatible and never branches on secret data in its
//! buffer primitives. It has two halves:
//!
//! - [`utils`]: wipe, compare, and do little-endian arithmetic on raw buffers, plus a hex codec.
//! - [`generichash`]: BLAKE2b with keys, salt, personalization and 16 to 64 bytes of output, fed
//!   incrementally.
//!
//! # Quick Start
//!
//! ```
//! use natrium::generichash::{Blake2b, generate_key};
//!
//! natrium::init();
//!
//! let key = generate_key();
//! let mut state = Blake2b::new(32, key.as_slice())?;
//! state.update(b"hello ")?;
//! state.update(b"world")?;
//! let tag = state.finalize()?;
//!
//! assert_eq!(tag, Blake2b::digest(32, key.as_slice(), b"hello world")?);
//! assert_eq!(natrium::utils::hex::encode(tag.as_ref()).len(), 64);
//! # Ok::<(), natrium::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io` adapters, `OnceLock`-backed caches |
//! | `alloc` | Yes | `String`/`Vec` returning helpers (implied by `std`) |
//! | `rand` | Yes | [`generichash::generate_key`] from the OS CSPRNG |
//! | `ct` | Yes | Buffer primitives in [`utils`] |
//! | `hashes` | Yes | BLAKE2b in [`generichash`], [`init`] |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! natrium = { version = "0.1", default-features = false, features = ["hashes"] }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use traits::{Error, StreamingHash, VerificationError};

// =============================================================================
// Bootstrap
// =============================================================================

#[cfg(feature = "hashes")]
pub use hashes::{init, is_initialized};

// =============================================================================
// Buffer primitives
// =============================================================================

#[cfg(feature = "ct")]
pub mod utils {
  //! Constant-time operations on raw byte buffers.
  //!
  //! Buffers used as integers are little-endian.

  pub use ct::{add, compare, compare_i32, equal, hex, increment, is_zero, size, verify, zero};
}

// =============================================================================
// Hashing
// =============================================================================

#[cfg(feature = "hashes")]
pub mod generichash {
  //! Keyed BLAKE2b.

  #[cfg(feature = "rand")]
  pub use hashes::crypto::blake2b::generate_key;
  pub use hashes::crypto::blake2b::{
    BLOCK_LEN, BYTES, BYTES_MAX, BYTES_MIN, Blake2b, Blake2bOutput, Blake2bParams, KEYBYTES, KEYBYTES_MAX,
    KEYBYTES_MIN, PERSONALBYTES, SALTBYTES, generate_key_with, kernel_name,
  };
}

#[cfg(feature = "hashes")]
pub use generichash::Blake2b;
