//! PEM-style key files for development wallets.
//!
//! The block payload is the hex-encoded raw key (key ‖ public-key when the
//! raw key alone is no longer than a public key), and the block tag embeds
//! the bech32 address for human inspection. Nothing here is encrypted or
//! authenticated; loading only hex-decodes the block contents.

use erdrs_crypto::{address_from_private_key, SignatureScheme};
use pem::{EncodeConfig, LineEnding, Pem};
use std::path::Path;

use crate::error::PemError;

const PUBKEY_LEN: usize = 32;

/// Write a raw private key to a PEM file.
pub fn save_to_pem(
    raw_key: &[u8],
    path: &Path,
    scheme: &dyn SignatureScheme,
) -> Result<(), PemError> {
    let address = address_from_private_key(scheme, raw_key)?;

    let mut payload = raw_key.to_vec();
    if raw_key.len() <= PUBKEY_LEN {
        payload.extend_from_slice(address.as_bytes());
    }

    let block = Pem::new(
        format!("PRIVATE KEY for {}", address.to_bech32()),
        hex::encode(payload).into_bytes(),
    );
    let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
    std::fs::write(path, pem::encode_config(&block, config))?;
    tracing::debug!(path = %path.display(), bech32 = %address.to_bech32(), "key saved to PEM");
    Ok(())
}

/// Load a raw private key from a PEM file.
pub fn load_from_pem(path: &Path) -> Result<Vec<u8>, PemError> {
    let data = std::fs::read_to_string(path)?;
    let block = pem::parse(&data).map_err(|e| PemError::InvalidPemFile(e.to_string()))?;
    let raw_key = hex::decode(block.contents())
        .map_err(|e| PemError::InvalidPemFile(format!("payload is not hex: {}", e)))?;
    tracing::debug!(path = %path.display(), "key loaded from PEM");
    Ok(raw_key)
}
