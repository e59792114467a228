//! Backend crate: lazy, once-only state for natrium.
//!
//! Two primitives live here:
//!
//! - [`OnceCache`]: a `Copy` value computed on first use and shared afterwards (the resolved
//!   compression kernel table, for example).
//! - [`ReadyFlag`]: a process-wide "library ready" flag whose initializer runs exactly once and
//!   which tells the caller whether *this* call performed the initialization.
//!
//! Both use `std::sync` primitives with the `std` feature and an atomic state
//! machine on `no_std` targets with atomics. On targets without atomics
//! (single-threaded embedded) they degrade to per-call computation.

// Fallibility discipline: deny unwrap/expect in production, allow in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod cache;
pub mod ready;

pub use cache::OnceCache;
pub use ready::ReadyFlag;
