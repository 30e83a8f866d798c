//! Shared error types.

use thiserror::Error;

/// Errors produced by the address codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid public key: expected 32 bytes, got {0}")]
    InvalidPublicKey(usize),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
