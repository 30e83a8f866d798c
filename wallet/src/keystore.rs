//! Password-encrypted keystore files (JSON v4).
//!
//! Layout is bit-exact for interoperability with other SDKs:
//! scrypt (N=4096, r=8, p=1, dklen=32) derives 32 bytes from the password;
//! the first half encrypts the raw key with AES-128-CTR, the second half
//! keys an HMAC-SHA256 over the ciphertext. The account address is recorded
//! twice (hex public key and bech32) and re-checked after decryption, so a
//! corrupt or foreign file is distinguishable from a wrong password.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use erdrs_crypto::{address_from_private_key, SignatureScheme};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use scrypt::Params as ScryptParams;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::path::Path;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::error::KeystoreError;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type HmacSha256 = Hmac<Sha256>;

const KEYSTORE_VERSION: u32 = 4;
const CIPHER_AES128_CTR: &str = "aes-128-ctr";
const KDF_SCRYPT: &str = "scrypt";

const SCRYPT_N: u32 = 4096;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;
const SCRYPT_DKLEN: u32 = 32;

const SALT_LEN: usize = 32;
const IV_LEN: usize = 16;

/// A v4 keystore file. Field names and nesting match the serialized JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeystoreFile {
    /// Hex-encoded public key of the stored account.
    pub address: String,
    /// Bech32 address of the stored account.
    pub bech32: String,
    pub crypto: CryptoSection,
    pub id: String,
    pub version: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptoSection {
    pub cipher: String,
    pub ciphertext: String,
    pub cipherparams: CipherParams,
    pub kdf: String,
    pub kdfparams: KdfParams,
    pub mac: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CipherParams {
    pub iv: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KdfParams {
    pub dklen: u32,
    pub salt: String,
    pub n: u32,
    pub r: u32,
    pub p: u32,
}

/// Encrypt a raw private key under a password.
///
/// The scheme is used only to derive the address recorded in the file.
pub fn encrypt_keystore(
    raw_key: &[u8],
    password: &str,
    scheme: &dyn SignatureScheme,
) -> Result<KeystoreFile, KeystoreError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let derived = derive_key(password, &salt, SCRYPT_N, SCRYPT_R, SCRYPT_P, SCRYPT_DKLEN)?;

    let mut ciphertext = raw_key.to_vec();
    apply_ctr(&derived[..16], &iv, &mut ciphertext)?;

    let mac = compute_mac(&derived[16..32], &ciphertext);

    let address = address_from_private_key(scheme, raw_key)?;

    Ok(KeystoreFile {
        address: address.to_hex(),
        bech32: address.to_bech32(),
        crypto: CryptoSection {
            cipher: CIPHER_AES128_CTR.to_string(),
            ciphertext: hex::encode(&ciphertext),
            cipherparams: CipherParams {
                iv: hex::encode(iv),
            },
            kdf: KDF_SCRYPT.to_string(),
            kdfparams: KdfParams {
                dklen: SCRYPT_DKLEN,
                salt: hex::encode(salt),
                n: SCRYPT_N,
                r: SCRYPT_R,
                p: SCRYPT_P,
            },
            mac: hex::encode(mac),
        },
        id: Uuid::new_v4().to_string(),
        version: KEYSTORE_VERSION,
    })
}

/// Decrypt a keystore file, returning the raw private key.
///
/// The KDF is re-run with the parameters stored in the file, so files
/// written with different cost settings keep decrypting. A MAC mismatch is
/// reported as a wrong password; an address mismatch after decryption as a
/// corrupt or foreign file.
pub fn decrypt_keystore(
    file: &KeystoreFile,
    password: &str,
    scheme: &dyn SignatureScheme,
) -> Result<Vec<u8>, KeystoreError> {
    let mac = decode_hex_field("mac", &file.crypto.mac)?;
    let iv = decode_hex_field("cipherparams.iv", &file.crypto.cipherparams.iv)?;
    let ciphertext = decode_hex_field("ciphertext", &file.crypto.ciphertext)?;
    let salt = decode_hex_field("kdfparams.salt", &file.crypto.kdfparams.salt)?;

    if iv.len() != IV_LEN {
        return Err(KeystoreError::MalformedKeystoreFile(format!(
            "iv must be {} bytes, got {}",
            IV_LEN,
            iv.len()
        )));
    }

    let params = &file.crypto.kdfparams;
    let derived = derive_key(password, &salt, params.n, params.r, params.p, params.dklen)?;
    if derived.len() < 32 {
        return Err(KeystoreError::Kdf(format!(
            "dklen {} too short for cipher and MAC keys",
            params.dklen
        )));
    }

    let expected_mac = compute_mac(&derived[16..32], &ciphertext);
    if !bool::from(expected_mac.ct_eq(&mac)) {
        return Err(KeystoreError::WrongPassword);
    }

    let mut raw_key = ciphertext;
    apply_ctr(&derived[..16], &iv, &mut raw_key)?;

    let address = address_from_private_key(scheme, &raw_key)?;
    let same_account = address.to_hex() == file.address && address.to_bech32() == file.bech32;
    if !same_account {
        return Err(KeystoreError::AccountMismatch);
    }

    Ok(raw_key)
}

/// Write a keystore to a JSON file.
pub fn save_keystore(file: &KeystoreFile, path: &Path) -> Result<(), KeystoreError> {
    let json = serde_json::to_string(file)
        .map_err(|e| KeystoreError::MalformedKeystoreFile(e.to_string()))?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), bech32 = %file.bech32, "keystore saved");
    Ok(())
}

/// Read a keystore from a JSON file.
pub fn load_keystore(path: &Path) -> Result<KeystoreFile, KeystoreError> {
    let json = std::fs::read_to_string(path)?;
    let file: KeystoreFile = serde_json::from_str(&json)
        .map_err(|e| KeystoreError::MalformedKeystoreFile(e.to_string()))?;
    tracing::debug!(path = %path.display(), bech32 = %file.bech32, "keystore loaded");
    Ok(file)
}

fn derive_key(
    password: &str,
    salt: &[u8],
    n: u32,
    r: u32,
    p: u32,
    dklen: u32,
) -> Result<Vec<u8>, KeystoreError> {
    if !n.is_power_of_two() || n < 2 {
        return Err(KeystoreError::Kdf(format!(
            "scrypt n must be a power of two > 1, got {}",
            n
        )));
    }
    let log_n = n.trailing_zeros() as u8;
    let params = ScryptParams::new(log_n, r, p, dklen as usize)
        .map_err(|e| KeystoreError::Kdf(e.to_string()))?;

    let mut derived = vec![0u8; dklen as usize];
    scrypt::scrypt(password.as_bytes(), salt, &params, &mut derived)
        .map_err(|e| KeystoreError::Kdf(e.to_string()))?;
    Ok(derived)
}

fn apply_ctr(key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<(), KeystoreError> {
    let mut cipher = Aes128Ctr::new_from_slices(key, iv)
        .map_err(|e| KeystoreError::MalformedKeystoreFile(format!("cipher setup: {}", e)))?;
    cipher.apply_keystream(buffer);
    Ok(())
}

fn compute_mac(mac_key: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(mac_key).expect("HMAC accepts any key length");
    mac.update(ciphertext);
    mac.finalize().into_bytes().to_vec()
}

fn decode_hex_field(name: &str, value: &str) -> Result<Vec<u8>, KeystoreError> {
    hex::decode(value)
        .map_err(|e| KeystoreError::MalformedKeystoreFile(format!("{}: {}", name, e)))
}
