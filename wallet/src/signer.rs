//! Transaction signing in the two protocol modes.
//!
//! Direct mode signs the canonical JSON serialization of the transaction.
//! Hash mode (mandated by `version == 2` together with `options == 1`)
//! signs the legacy Keccak-256 digest of that serialization instead. The
//! mode preconditions are checked before any cryptographic work, so a bad
//! version/options combination never leaves a partial signature behind.

use std::sync::Arc;

use erdrs_crypto::{Ed25519Scheme, SignatureScheme};
use erdrs_types::transaction::{TX_OPTIONS_HASH_SIGNING, TX_VERSION_HASH_SIGNING};
use erdrs_types::Transaction;
use sha3::{Digest, Keccak256};

use crate::error::SignError;

/// Signs transactions with an explicitly bound signature scheme.
pub struct TxSigner {
    scheme: Arc<dyn SignatureScheme>,
}

impl TxSigner {
    pub fn new(scheme: Arc<dyn SignatureScheme>) -> Self {
        Self { scheme }
    }

    /// A signer bound to the Ed25519 wallet scheme.
    pub fn ed25519() -> Self {
        Self::new(Arc::new(Ed25519Scheme))
    }

    /// Sign the transaction's serialized bytes directly (any version).
    ///
    /// The signature field is the only field mutated; it is cleared before
    /// serialization and set to the hex-encoded signature on success.
    pub fn sign_transaction(
        &self,
        tx: &mut Transaction,
        private_key: &[u8],
    ) -> Result<(), SignError> {
        tx.signature = String::new();
        let payload = self.unsigned_payload(tx)?;
        let signature = self.scheme.sign(private_key, &payload)?;
        tx.signature = hex::encode(signature);
        Ok(())
    }

    /// Sign the Keccak-256 digest of the transaction's serialized bytes.
    ///
    /// Requires `version == 2` and `options == 1`; both are validated
    /// up front.
    pub fn sign_transaction_hash(
        &self,
        tx: &mut Transaction,
        private_key: &[u8],
    ) -> Result<(), SignError> {
        if tx.version != TX_VERSION_HASH_SIGNING {
            return Err(SignError::VersionMismatch {
                expected: TX_VERSION_HASH_SIGNING,
                actual: tx.version,
            });
        }
        if tx.options != TX_OPTIONS_HASH_SIGNING {
            return Err(SignError::OptionsMismatch {
                expected: TX_OPTIONS_HASH_SIGNING,
                actual: tx.options,
            });
        }

        tx.signature = String::new();
        let payload = self.unsigned_payload(tx)?;
        let digest = Keccak256::digest(&payload);
        let signature = self.scheme.sign(private_key, &digest)?;
        tx.signature = hex::encode(signature);
        Ok(())
    }

    /// Public key bytes for a raw private key under the bound scheme.
    pub fn public_key(&self, private_key: &[u8]) -> Result<Vec<u8>, SignError> {
        Ok(self.scheme.public_key(private_key)?)
    }

    fn unsigned_payload(&self, tx: &Transaction) -> Result<Vec<u8>, SignError> {
        tx.signing_payload()
            .map_err(|e| SignError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SK_HEX: &str = "6ae10fed53a84029e53e35afdbe083688eea0917a09a9431951dd42fd4da14c4\
                          0d248169f4dd7c90537f05be1c49772ddbf8f7948b507ed17fb23284cf218b7d";

    fn test_tx(version: u32, options: u32) -> Transaction {
        Transaction {
            nonce: 0,
            value: "999".to_string(),
            receiver: "erd1l20m7kzfht5rhdnd4zvqr82egk7m4nvv3zk06yw82zqmrt9kf0zsf9esqq"
                .to_string(),
            sender: "erd1p5jgz605m47fq5mlqklpcjth9hdl3au53dg8a5tlkgegfnep3d7stdk09x"
                .to_string(),
            gas_price: 10,
            gas_limit: 100000,
            data: Vec::new(),
            signature: String::new(),
            chain_id: "integration test chain id".to_string(),
            version,
            options,
        }
    }

    #[test]
    fn direct_mode_known_vector() {
        let sk = hex::decode(SK_HEX).unwrap();
        let mut tx = test_tx(1, 0);
        TxSigner::ed25519().sign_transaction(&mut tx, &sk).unwrap();
        assert_eq!(
            tx.signature,
            "80e1b5476c5ea9567614d9c364e1a7380b7990b53e7b6fd8431bf8536d174c8b\
             3e73cc354b783a03e5ae0a53b128504a6bcf32c3b9bbc06f284afe1fac179e0d"
        );
    }

    #[test]
    fn hash_mode_requires_version_two() {
        let sk = hex::decode(SK_HEX).unwrap();
        let mut tx = test_tx(1, 1);
        let err = TxSigner::ed25519()
            .sign_transaction_hash(&mut tx, &sk)
            .unwrap_err();
        assert!(matches!(err, SignError::VersionMismatch { actual: 1, .. }));
        assert!(tx.signature.is_empty());
    }

    #[test]
    fn hash_mode_requires_options_one() {
        let sk = hex::decode(SK_HEX).unwrap();
        let mut tx = test_tx(2, 0);
        let err = TxSigner::ed25519()
            .sign_transaction_hash(&mut tx, &sk)
            .unwrap_err();
        assert!(matches!(err, SignError::OptionsMismatch { actual: 0, .. }));
        assert!(tx.signature.is_empty());
    }

    #[test]
    fn hash_mode_differs_from_direct_mode() {
        let sk = hex::decode(SK_HEX).unwrap();
        let signer = TxSigner::ed25519();

        let mut direct = test_tx(2, 1);
        signer.sign_transaction(&mut direct, &sk).unwrap();

        let mut hashed = test_tx(2, 1);
        signer.sign_transaction_hash(&mut hashed, &sk).unwrap();

        assert_eq!(hashed.signature.len(), 128);
        assert_ne!(direct.signature, hashed.signature);
    }

    #[test]
    fn stale_signature_does_not_affect_payload() {
        let sk = hex::decode(SK_HEX).unwrap();
        let signer = TxSigner::ed25519();

        let mut fresh = test_tx(1, 0);
        signer.sign_transaction(&mut fresh, &sk).unwrap();

        let mut stale = test_tx(1, 0);
        stale.signature = "de".repeat(64);
        signer.sign_transaction(&mut stale, &sk).unwrap();

        assert_eq!(fresh.signature, stale.signature);
    }

    #[test]
    fn malformed_key_is_signing_failure() {
        let mut tx = test_tx(1, 0);
        let err = TxSigner::ed25519()
            .sign_transaction(&mut tx, &[1u8; 5])
            .unwrap_err();
        assert!(matches!(err, SignError::SigningFailed(_)));
        assert!(tx.signature.is_empty());
    }
}
