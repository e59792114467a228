//! Cryptographic hash functions.

pub mod blake2b;

pub use blake2b::{Blake2b, Blake2bOutput, Blake2bParams};
