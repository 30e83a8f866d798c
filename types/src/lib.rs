//! Fundamental types for the erdrs SDK.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: the bech32 address codec, key wrappers, the transaction struct
//! with its canonical signing serialization, and the shared error enums.

pub mod address;
pub mod error;
pub mod keys;
pub mod transaction;

pub use address::{is_valid_bech32_address, is_valid_public_key_hex, Address};
pub use error::AddressError;
pub use keys::PrivateKey;
pub use transaction::Transaction;
