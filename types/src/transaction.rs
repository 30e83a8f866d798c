//! The transaction struct and its canonical signing serialization.
//!
//! Field order and omission rules are part of the wire contract: signatures
//! are computed over exactly these JSON bytes, so the serialized form must
//! stay stable. `gasPrice`, `gasLimit` and `options` are omitted when zero,
//! `data` when empty (base64 otherwise), `signature` when empty.

use serde::{Deserialize, Serialize};

/// Transaction version that mandates hash-mode signing.
pub const TX_VERSION_HASH_SIGNING: u32 = 2;

/// Transaction options value that mandates hash-mode signing.
pub const TX_OPTIONS_HASH_SIGNING: u32 = 1;

/// A transaction as assembled for signing and broadcast.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub nonce: u64,
    pub value: String,
    pub receiver: String,
    pub sender: String,
    #[serde(rename = "gasPrice", default, skip_serializing_if = "is_zero_u64")]
    pub gas_price: u64,
    #[serde(rename = "gasLimit", default, skip_serializing_if = "is_zero_u64")]
    pub gas_limit: u64,
    #[serde(with = "base64_bytes", default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub signature: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub options: u32,
}

impl Transaction {
    /// Serialize the transaction for signing: the signature field is cleared
    /// first, so the payload never depends on any previous signature.
    pub fn signing_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut unsigned = self.clone();
        unsigned.signature = String::new();
        serde_json::to_vec(&unsigned)
    }
}

fn is_zero_u64(v: &u64) -> bool {
    *v == 0
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
