//! Error type for key derivation and signing.

use erdrs_types::AddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    #[error(transparent)]
    Address(#[from] AddressError),
}
