//! Core traits and error types for natrium.
//!
//! This crate provides the vocabulary every other natrium crate speaks. It is
//! `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Error`] | Size, pairing, and lifecycle failures of buffer and hash operations |
//! | [`VerificationError`] | Opaque failure of a tag comparison |
//! | [`StreamingHash`] | Incremental hash engine with a one-way `Updating -> Finalized` lifecycle |
//!
//! With `std`, the [`io`] module adapts any [`StreamingHash`] into a
//! [`std::io::Write`] sink.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod hash;
#[cfg(feature = "std")]
pub mod io;

pub use error::{Error, VerificationError};
pub use hash::StreamingHash;
