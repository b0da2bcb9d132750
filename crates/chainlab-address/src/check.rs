//! Base58Check encoding.
//!
//! Address format:
//! - Version byte (1 byte)
//! - Payload (arbitrary bytes)
//! - Checksum: sha256d(version || payload)[0:4] (4 bytes)
//! - Encoded: Base58(version || payload || checksum)

#![forbid(unsafe_code)]

use chainlab_core::{Error, Result};
use chainlab_crypto::{base58, sha256};

/// Checksum length in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Minimum decoded length: version byte plus checksum.
pub const MIN_CHECK_BYTES: usize = 1 + CHECKSUM_LEN;

/// Encode a version byte and payload as a Base58Check string.
pub fn encode_check(version: u8, payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    raw.push(version);
    raw.extend_from_slice(payload);

    let checksum = sha256::sha256d(&raw);
    raw.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    base58::encode(&raw)
}

/// Decode a Base58Check string, verifying length and checksum.
///
/// Returns the version byte and payload on success.
pub fn decode_check(text: &str) -> Result<(u8, Vec<u8>)> {
    let raw = base58::decode(text)?;
    if raw.len() < MIN_CHECK_BYTES {
        return Err(Error::PayloadTooShort {
            got: raw.len(),
            min: MIN_CHECK_BYTES,
        });
    }

    let (body, checksum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    let expected = sha256::sha256d(body);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(Error::InvalidChecksum);
    }

    Ok((body[0], body[1..].to_vec()))
}
