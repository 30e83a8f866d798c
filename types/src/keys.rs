//! Private key wrapper with zeroization.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A raw private key as produced by derivation or loaded from disk.
///
/// Wallet keys are the 32-byte Ed25519 seed, optionally carried in the
/// 64-byte `seed ‖ public-key` concatenated form; validator keys are a
/// 32-byte pairing-scheme scalar. The wrapper intentionally implements
/// neither `Debug` nor `Serialize`, and the bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Vec<u8>);

impl PrivateKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PrivateKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.to_vec())
    }
}
