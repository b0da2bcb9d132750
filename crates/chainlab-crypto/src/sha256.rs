//! SHA-256 and double SHA-256 digests.
//!
//! Thin layer over the `sha2` crate; double SHA-256 hashes the raw 32
//! digest bytes (the ledger convention for checksums and transaction
//! ids), not their hex rendering.

#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(data).into()
}

/// Compute SHA-256(SHA-256(`data`)).
pub fn sha256d(data: &[u8]) -> [u8; DIGEST_LEN] {
    sha256(&sha256(data))
}
