//! Hardened-only hierarchical-deterministic key derivation.
//!
//! A restricted variant of standard HD derivation: every path segment is
//! hardened, so public-key (non-hardened) derivation is never possible, and
//! derivation never fails: any seed and any path produce a deterministic
//! extended key.

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha512 = Hmac<Sha512>;

/// High bit marking a path segment as hardened.
pub const HARDENED: u32 = 0x8000_0000;

/// BIP44 purpose segment.
const PURPOSE: u32 = 44;

/// Registered coin type for the network.
const COIN_TYPE: u32 = 508;

/// HMAC key used to initialize the derivation chain.
const MASTER_KEY: &[u8] = b"ed25519 seed";

/// An extended key: the derived key plus the chain code that produced it.
///
/// The chain code is only needed while walking the path; callers extract
/// `key` and drop the rest. Both halves are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    pub key: [u8; 32],
    pub chain_code: [u8; 32],
}

/// The fixed-shape derivation path `[44', 508', account', 0', index']`.
///
/// Only `account` and `address_index` vary; the constructor sets the high
/// bit on every segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivationPath([u32; 5]);

impl DerivationPath {
    pub fn new(account: u32, address_index: u32) -> Self {
        Self([
            PURPOSE | HARDENED,
            COIN_TYPE | HARDENED,
            account | HARDENED,
            HARDENED,
            address_index | HARDENED,
        ])
    }

    pub fn segments(&self) -> &[u32] {
        &self.0
    }
}

impl Default for DerivationPath {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Derive an extended key from a seed along a hardened path.
///
/// Initializes `(key, chain_code)` from `HMAC-SHA512("ed25519 seed", seed)`,
/// then for each segment rebuilds the 37-byte message
/// `0x00 ‖ key ‖ be32(segment)` and re-keys the HMAC with the chain code.
pub fn derive_extended_key(seed: &[u8], path: &DerivationPath) -> ExtendedKey {
    let digest = hmac_sha512(MASTER_KEY, seed);
    let mut key: [u8; 32] = split_lower(&digest);
    let mut chain_code: [u8; 32] = split_upper(&digest);

    for &segment in path.segments() {
        let mut message = [0u8; 37];
        message[1..33].copy_from_slice(&key);
        message[33..].copy_from_slice(&segment.to_be_bytes());

        let digest = hmac_sha512(&chain_code, &message);
        key = split_lower(&digest);
        chain_code = split_upper(&digest);
    }

    ExtendedKey { key, chain_code }
}

fn hmac_sha512(key: &[u8], data: &[u8]) -> [u8; 64] {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(data);
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    digest
}

fn split_lower(digest: &[u8; 64]) -> [u8; 32] {
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

fn split_upper(digest: &[u8; 64]) -> [u8; 32] {
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[32..]);
    half
}
