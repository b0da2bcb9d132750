//! Base58Check address encoding and mock keypair generation.

#![forbid(unsafe_code)]

pub mod check;
pub mod keypair;
pub mod network;

pub use check::{decode_check, encode_check, CHECKSUM_LEN, MIN_CHECK_BYTES};
pub use keypair::MockKeypair;
pub use network::Network;
