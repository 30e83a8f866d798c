//! Bech32 address codec for 32-byte account public keys.
//!
//! Address format: bech32 with the `erd` human-readable prefix, classic
//! (non-m) checksum variant. The payload is a 32-byte public key repacked
//! into 5-bit groups with padding, which together with the prefix, separator
//! and 6-character checksum always yields a 62-character string.

use bech32::{FromBase32, ToBase32, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AddressError;

/// Human-readable prefix for all account addresses.
pub const ADDRESS_HRP: &str = "erd";

/// Length of every valid bech32 address string.
pub const BECH32_ADDRESS_LEN: usize = 62;

/// Length of the raw public key an address encodes.
pub const PUBKEY_LEN: usize = 32;

/// A 32-byte account address (the account's public key).
///
/// The bech32 string form is a pure encoding of these bytes; the two
/// representations convert losslessly in both directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; PUBKEY_LEN]);

impl Address {
    /// Create an address from raw public key bytes.
    ///
    /// Fails unless the slice is exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; PUBKEY_LEN] = bytes
            .try_into()
            .map_err(|_| AddressError::InvalidPublicKey(bytes.len()))?;
        Ok(Self(arr))
    }

    /// Parse a bech32 address string.
    ///
    /// The string must be exactly 62 characters, carry a valid classic
    /// bech32 checksum, use the `erd` prefix, and unpack to exactly
    /// 32 payload bytes.
    pub fn from_bech32(address: &str) -> Result<Self, AddressError> {
        if address.len() != BECH32_ADDRESS_LEN {
            return Err(AddressError::InvalidAddress(format!(
                "expected {} characters, got {}",
                BECH32_ADDRESS_LEN,
                address.len()
            )));
        }

        let (hrp, data, variant) = bech32::decode(address)
            .map_err(|e| AddressError::InvalidAddress(e.to_string()))?;
        if hrp != ADDRESS_HRP {
            return Err(AddressError::InvalidAddress(format!(
                "wrong prefix: expected {:?}, got {:?}",
                ADDRESS_HRP, hrp
            )));
        }
        if variant != Variant::Bech32 {
            return Err(AddressError::InvalidAddress(
                "wrong bech32 variant".to_string(),
            ));
        }

        let pubkey = Vec::<u8>::from_base32(&data)
            .map_err(|e| AddressError::InvalidAddress(e.to_string()))?;
        let arr: [u8; PUBKEY_LEN] = pubkey
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidAddress(format!(
                "payload is {} bytes, expected {}",
                pubkey.len(),
                PUBKEY_LEN
            )))?;
        Ok(Self(arr))
    }

    /// Encode this address as its bech32 string form.
    pub fn to_bech32(&self) -> String {
        // Encoding a fixed 32-byte payload under a fixed prefix cannot fail.
        bech32::encode(ADDRESS_HRP, self.0.to_base32(), Variant::Bech32)
            .expect("fixed hrp is valid")
    }

    /// The raw 32-byte public key this address encodes.
    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// Hex form of the public key, as recorded in keystore files.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bech32())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_bech32())
    }
}

/// Returns true iff `s` is valid hex for exactly 32 bytes of public key.
pub fn is_valid_public_key_hex(s: &str) -> bool {
    matches!(hex::decode(s), Ok(bytes) if bytes.len() == PUBKEY_LEN)
}

/// Returns true iff `s` parses as a valid account address.
pub fn is_valid_bech32_address(s: &str) -> bool {
    Address::from_bech32(s).is_ok()
}
