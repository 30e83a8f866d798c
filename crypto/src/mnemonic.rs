//! BIP39 mnemonic generation and mnemonic → wallet key derivation.

use bip39::Mnemonic;
use erdrs_types::PrivateKey;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CryptoError;
use crate::hd::{derive_extended_key, DerivationPath};

/// Generate a new 24-word mnemonic from 256 bits of OS entropy.
pub fn generate_mnemonic() -> Result<String, CryptoError> {
    let mut entropy = [0u8; 32];
    OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| CryptoError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Compute the 64-byte BIP39 seed of a mnemonic phrase (empty passphrase).
pub fn seed_from_mnemonic(phrase: &str) -> Result<[u8; 64], CryptoError> {
    let mnemonic = Mnemonic::parse_normalized(phrase)
        .map_err(|e| CryptoError::InvalidMnemonic(e.to_string()))?;
    Ok(mnemonic.to_seed_normalized(""))
}

/// Derive the wallet private key for `(account, address_index)` from a
/// mnemonic phrase.
pub fn private_key_from_mnemonic(
    phrase: &str,
    account: u32,
    address_index: u32,
) -> Result<PrivateKey, CryptoError> {
    let seed = seed_from_mnemonic(phrase)?;
    let extended = derive_extended_key(&seed, &DerivationPath::new(account, address_index));
    Ok(PrivateKey::from(extended.key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{address_from_private_key, Ed25519Scheme};

    const TEST_MNEMONIC: &str = "moral volcano peasant pass circle pen over picture flat shop \
         clap goat never lyrics gather prepare woman film husband gravity behind test tiger improve";

    #[test]
    fn derives_known_wallet_keys() {
        // First three accounts of the well-known test mnemonic.
        let cases = [
            (0u32, "413f42575f7f26fad3317a778771212fdb80245850981e48b58a4f25e344e8f9"),
            (1u32, "b8ca6f8203fb4b545a8e83c5384da033c415db155b53fb5b8eba7ff5a039d639"),
            (2u32, "e253a571ca153dc2aee845819f74bcc9773b0586edead15a94cb7235a5027436"),
        ];
        for (index, expected_hex) in cases {
            let key = private_key_from_mnemonic(TEST_MNEMONIC, 0, index).unwrap();
            assert_eq!(hex::encode(key.as_bytes()), expected_hex);
        }
    }

    #[test]
    fn derived_key_maps_to_known_address() {
        let key = private_key_from_mnemonic(TEST_MNEMONIC, 0, 0).unwrap();
        let address = address_from_private_key(&Ed25519Scheme, key.as_bytes()).unwrap();
        assert_eq!(
            address.to_bech32(),
            "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th"
        );
    }

    #[test]
    fn generated_mnemonic_has_24_words() {
        let phrase = generate_mnemonic().unwrap();
        assert_eq!(phrase.split_whitespace().count(), 24);
        // A fresh mnemonic must itself derive.
        assert!(private_key_from_mnemonic(&phrase, 0, 0).is_ok());
    }

    #[test]
    fn invalid_phrase_is_rejected() {
        assert!(matches!(
            seed_from_mnemonic("definitely not a bip39 phrase"),
            Err(CryptoError::InvalidMnemonic(_))
        ));
    }
}
