//! Mock keypair generation for the educational address demo.
//!
//! Nothing here is real key derivation: the "public key" is random
//! bytes shaped like a compressed SEC1 key, and the address payload is
//! a truncated SHA-256 of it rather than a hash160. Never use the
//! output for real transactions.

#![forbid(unsafe_code)]

use crate::check::encode_check;
use crate::network::Network;
use chainlab_crypto::sha256;
use rand::RngCore;

/// Private key length in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Mock compressed public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 33;

/// Address payload length in bytes (truncated SHA-256 of the pubkey).
pub const PAYLOAD_LEN: usize = 20;

/// A mock keypair with its derived demo address.
#[derive(Clone, Debug)]
pub struct MockKeypair {
    private_key: [u8; PRIVATE_KEY_LEN],
    public_key: [u8; PUBLIC_KEY_LEN],
    address: String,
}

impl MockKeypair {
    /// Generate a mock keypair for `network` from the given RNG.
    ///
    /// Deterministic for a seeded RNG, which the tests rely on.
    pub fn generate<R: RngCore>(rng: &mut R, network: Network) -> Self {
        let mut private_key = [0u8; PRIVATE_KEY_LEN];
        rng.fill_bytes(&mut private_key);

        // Compressed-key shape only: 0x02 prefix, random body
        let mut public_key = [0u8; PUBLIC_KEY_LEN];
        public_key[0] = 0x02;
        rng.fill_bytes(&mut public_key[1..]);

        let digest = sha256::sha256(&public_key);
        let address = encode_check(network.version_byte(), &digest[..PAYLOAD_LEN]);

        Self {
            private_key,
            public_key,
            address,
        }
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
