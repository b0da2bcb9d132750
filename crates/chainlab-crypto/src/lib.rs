//! Base58 codec and SHA-256 helpers.
//!
//! The Base58 codec is implemented from scratch; the reference `bs58`
//! crate is a dev-dependency used only to cross-check it in tests.

#![forbid(unsafe_code)]

pub mod base58;
pub mod sha256;
