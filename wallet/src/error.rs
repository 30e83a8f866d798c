//! Error types for wallet operations.

use erdrs_crypto::CryptoError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShardError {
    #[error("number of shards must be at least 1")]
    InvalidNumberOfShards,

    #[error("invalid address: expected 32 bytes, got {0}")]
    InvalidAddress(usize),
}

#[derive(Debug, Error)]
pub enum SignError {
    #[error("transaction version must be {expected} for hash signing, got {actual}")]
    VersionMismatch { expected: u32, actual: u32 },

    #[error("transaction options must be {expected} for hash signing, got {actual}")]
    OptionsMismatch { expected: u32, actual: u32 },

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("cannot serialize transaction: {0}")]
    Serialization(String),
}

impl From<CryptoError> for SignError {
    fn from(e: CryptoError) -> Self {
        Self::SigningFailed(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum KeystoreError {
    #[error("wrong password")]
    WrongPassword,

    #[error("decrypted key does not match the address recorded in the file")]
    AccountMismatch,

    #[error("malformed keystore file: {0}")]
    MalformedKeystoreFile(String),

    #[error("key derivation failed: {0}")]
    Kdf(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("keystore file i/o: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PemError {
    #[error("invalid PEM file: {0}")]
    InvalidPemFile(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("PEM file i/o: {0}")]
    Io(#[from] std::io::Error),
}
