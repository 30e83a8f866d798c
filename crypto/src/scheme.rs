//! Signature-scheme capability: Ed25519 for wallets, BLS for validators.
//!
//! Both schemes expose the same two operations over raw private key bytes.
//! Consumers (the transaction signer, the keystore, PEM export) receive a
//! scheme instance explicitly at construction; there is no process-wide
//! default to rebind.

use ed25519_dalek::{Signer, SigningKey};
use erdrs_types::Address;

use crate::error::CryptoError;

/// A signature scheme over raw private key bytes.
pub trait SignatureScheme: Send + Sync {
    /// Compute the public key for a raw private key.
    fn public_key(&self, raw: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Sign a message with a raw private key.
    fn sign(&self, raw: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// Ed25519 wallet scheme: 32-byte public keys, 64-byte signatures.
///
/// Accepts either the 32-byte seed or the 64-byte `seed ‖ public-key`
/// concatenated form produced by some key exports; in the latter case the
/// first 32 bytes are the seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Scheme;

const ED25519_SEED_LEN: usize = 32;
const ED25519_KEYPAIR_LEN: usize = 64;

impl Ed25519Scheme {
    fn signing_key(raw: &[u8]) -> Result<SigningKey, CryptoError> {
        if raw.len() != ED25519_SEED_LEN && raw.len() != ED25519_KEYPAIR_LEN {
            return Err(CryptoError::InvalidKeyEncoding(format!(
                "ed25519 private key must be {} or {} bytes, got {}",
                ED25519_SEED_LEN,
                ED25519_KEYPAIR_LEN,
                raw.len()
            )));
        }
        let mut seed = [0u8; ED25519_SEED_LEN];
        seed.copy_from_slice(&raw[..ED25519_SEED_LEN]);
        Ok(SigningKey::from_bytes(&seed))
    }
}

impl SignatureScheme for Ed25519Scheme {
    fn public_key(&self, raw: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = Self::signing_key(raw)?;
        Ok(signing_key.verifying_key().to_bytes().to_vec())
    }

    fn sign(&self, raw: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = Self::signing_key(raw)?;
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }
}

/// BLS12-381 validator scheme: 96-byte public keys on G2, 48-byte
/// signatures on G1 (blst `min_sig` variant).
#[derive(Clone, Copy, Debug, Default)]
pub struct BlsScheme;

const BLS_DST: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";

impl BlsScheme {
    fn secret_key(raw: &[u8]) -> Result<blst::min_sig::SecretKey, CryptoError> {
        blst::min_sig::SecretKey::from_bytes(raw)
            .map_err(|e| CryptoError::InvalidKeyEncoding(format!("bls scalar: {:?}", e)))
    }
}

impl SignatureScheme for BlsScheme {
    fn public_key(&self, raw: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let sk = Self::secret_key(raw)?;
        Ok(sk.sk_to_pk().to_bytes().to_vec())
    }

    fn sign(&self, raw: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let sk = Self::secret_key(raw)?;
        Ok(sk.sign(message, BLS_DST, &[]).to_bytes().to_vec())
    }
}

/// Derive the bech32 account address for a wallet private key.
pub fn address_from_private_key(
    scheme: &dyn SignatureScheme,
    raw_key: &[u8],
) -> Result<Address, CryptoError> {
    let public_key = scheme.public_key(raw_key)?;
    Ok(Address::from_bytes(&public_key)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_SK_HEX: &str =
        "413f42575f7f26fad3317a778771212fdb80245850981e48b58a4f25e344e8f9";
    const ALICE_BECH32: &str =
        "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

    #[test]
    fn ed25519_public_key_from_seed() {
        let sk = hex::decode(ALICE_SK_HEX).unwrap();
        let pk = Ed25519Scheme.public_key(&sk).unwrap();
        assert_eq!(pk.len(), 32);

        let address = address_from_private_key(&Ed25519Scheme, &sk).unwrap();
        assert_eq!(address.to_bech32(), ALICE_BECH32);
    }

    #[test]
    fn ed25519_accepts_concatenated_form() {
        let sk = hex::decode(ALICE_SK_HEX).unwrap();
        let pk = Ed25519Scheme.public_key(&sk).unwrap();

        let mut concatenated = sk.clone();
        concatenated.extend_from_slice(&pk);
        assert_eq!(Ed25519Scheme.public_key(&concatenated).unwrap(), pk);
    }

    #[test]
    fn ed25519_rejects_bad_lengths() {
        for len in [0usize, 16, 31, 33, 63, 65] {
            let raw = vec![1u8; len];
            assert!(matches!(
                Ed25519Scheme.public_key(&raw),
                Err(CryptoError::InvalidKeyEncoding(_))
            ));
        }
    }

    #[test]
    fn ed25519_signature_is_deterministic() {
        let sk = hex::decode(ALICE_SK_HEX).unwrap();
        let a = Ed25519Scheme.sign(&sk, b"message").unwrap();
        let b = Ed25519Scheme.sign(&sk, b"message").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn bls_public_key_is_96_bytes() {
        // A small nonzero scalar is always in range.
        let mut raw = [0u8; 32];
        raw[31] = 7;
        let pk = BlsScheme.public_key(&raw).unwrap();
        assert_eq!(pk.len(), 96);
    }

    #[test]
    fn bls_rejects_zero_scalar() {
        assert!(matches!(
            BlsScheme.public_key(&[0u8; 32]),
            Err(CryptoError::InvalidKeyEncoding(_))
        ));
    }

    #[test]
    fn bls_rejects_wrong_length() {
        assert!(BlsScheme.public_key(&[1u8; 31]).is_err());
        assert!(BlsScheme.sign(&[1u8; 48], b"m").is_err());
    }

    #[test]
    fn bls_sign_produces_48_bytes() {
        let mut raw = [0u8; 32];
        raw[31] = 7;
        let sig = BlsScheme.sign(&raw, b"validator message").unwrap();
        assert_eq!(sig.len(), 48);
    }

    #[test]
    fn bls_address_conversion_fails() {
        // 96-byte public keys cannot form a 32-byte account address.
        let mut raw = [0u8; 32];
        raw[31] = 9;
        assert!(address_from_private_key(&BlsScheme, &raw).is_err());
    }
}
