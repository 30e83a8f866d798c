//! Wallet operations for the erdrs SDK.
//!
//! - **Shard assignment**: which shard an account address lives on
//! - **Transaction signing**: direct mode and hash mode (version 2 + options 1)
//! - **Encrypted keystore**: scrypt + AES-128-CTR + HMAC-SHA256, JSON v4
//! - **PEM key files**: plain hex key blocks for development wallets
//!
//! Everything here is synchronous, stateless computation; the only I/O is
//! the explicit file load/store helpers and the OS random source used for
//! keystore salts and IVs.

pub mod error;
pub mod keystore;
pub mod pem;
pub mod shard;
pub mod signer;

pub use error::{KeystoreError, PemError, ShardError, SignError};
pub use keystore::{
    decrypt_keystore, encrypt_keystore, load_keystore, save_keystore, KeystoreFile,
};
pub use pem::{load_from_pem, save_to_pem};
pub use shard::{shard_of, ShardCoordinator};
pub use signer::TxSigner;
