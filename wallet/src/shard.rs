//! Deterministic shard assignment for account addresses.
//!
//! The shard of an address is a pure function of its last byte and the
//! number of shards. For shard counts that are not a power of two, a
//! two-tier mask folds the overflow bucket down into the low-mask range;
//! downstream systems depend on this exact rule, so it is reproduced
//! bit-for-bit rather than replaced with a uniform hash.

use erdrs_types::address::PUBKEY_LEN;
use erdrs_types::Address;

use crate::error::ShardError;

/// Compute the shard of a raw 32-byte address.
pub fn shard_of(address_bytes: &[u8], num_shards_without_meta: u32) -> Result<u32, ShardError> {
    if num_shards_without_meta == 0 {
        return Err(ShardError::InvalidNumberOfShards);
    }
    if address_bytes.len() != PUBKEY_LEN {
        return Err(ShardError::InvalidAddress(address_bytes.len()));
    }
    let last_byte = address_bytes[PUBKEY_LEN - 1];
    Ok(shard_of_last_byte(last_byte, num_shards_without_meta))
}

fn shard_of_last_byte(last_byte: u8, num_shards: u32) -> u32 {
    let (mask_high, mask_low) = shard_masks(num_shards);
    let candidate = u32::from(last_byte) & mask_high;
    if candidate > num_shards - 1 {
        u32::from(last_byte) & mask_low
    } else {
        candidate
    }
}

/// `(mask_high, mask_low)` for `n = ceil(log2(num_shards))` bits.
///
/// For a single shard both masks degenerate to zero and every address maps
/// to shard 0.
fn shard_masks(num_shards: u32) -> (u32, u32) {
    let n = if num_shards > 1 {
        32 - (num_shards - 1).leading_zeros()
    } else {
        0
    };
    let mask_high = ((1u64 << n) - 1) as u32;
    let mask_low = if n == 0 { 0 } else { ((1u64 << (n - 1)) - 1) as u32 };
    (mask_high, mask_low)
}

/// Shard lookup with the network's shard count fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct ShardCoordinator {
    num_shards_without_meta: u32,
}

impl ShardCoordinator {
    /// Create a coordinator for a network with the given number of
    /// non-metachain shards. Fails for a zero shard count.
    pub fn new(num_shards_without_meta: u32) -> Result<Self, ShardError> {
        if num_shards_without_meta == 0 {
            return Err(ShardError::InvalidNumberOfShards);
        }
        Ok(Self {
            num_shards_without_meta,
        })
    }

    pub fn num_shards(&self) -> u32 {
        self.num_shards_without_meta
    }

    /// The shard this address belongs to. The address type guarantees the
    /// 32-byte shape, so this cannot fail.
    pub fn compute_shard_id(&self, address: &Address) -> u32 {
        let last_byte = address.as_bytes()[PUBKEY_LEN - 1];
        shard_of_last_byte(last_byte, self.num_shards_without_meta)
    }
}
