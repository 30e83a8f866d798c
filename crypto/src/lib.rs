//! Key derivation and signature schemes for the erdrs SDK.
//!
//! - **Hierarchical-deterministic derivation** (hardened-only, HMAC-SHA512
//!   chaining) from a BIP39 seed
//! - **Ed25519** for wallet and transaction signing
//! - **BLS12-381** (96-byte G2 public keys) for validator identity
//! - Mnemonic generation and mnemonic → private key convenience helpers
//!
//! The two signature schemes sit behind one [`SignatureScheme`] capability
//! trait; consumers receive an explicit scheme instance at construction
//! instead of reaching for a process-wide default.

pub mod error;
pub mod hd;
pub mod mnemonic;
pub mod scheme;

pub use error::CryptoError;
pub use hd::{derive_extended_key, DerivationPath, ExtendedKey};
pub use mnemonic::{generate_mnemonic, private_key_from_mnemonic, seed_from_mnemonic};
pub use scheme::{address_from_private_key, BlsScheme, Ed25519Scheme, SignatureScheme};
