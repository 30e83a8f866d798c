use proptest::prelude::*;

use erdrs_types::{Address, Transaction};
use erdrs_wallet::{shard_of, ShardCoordinator};

proptest! {
    /// Shard assignment stays in range for every address and shard count.
    #[test]
    fn shard_in_range(
        bytes in prop::array::uniform32(0u8..),
        num_shards in 1u32..64,
    ) {
        let shard = shard_of(&bytes, num_shards).unwrap();
        prop_assert!(shard < num_shards);
    }

    /// The coordinator agrees with the free function.
    #[test]
    fn coordinator_matches_free_function(
        bytes in prop::array::uniform32(0u8..),
        num_shards in 1u32..64,
    ) {
        let address = Address::from_bytes(&bytes).unwrap();
        let coordinator = ShardCoordinator::new(num_shards).unwrap();
        prop_assert_eq!(
            coordinator.compute_shard_id(&address),
            shard_of(&bytes, num_shards).unwrap()
        );
    }

    /// Power-of-two shard counts use the last byte's low bits directly.
    #[test]
    fn power_of_two_is_plain_mask(bytes in prop::array::uniform32(0u8..), bits in 0u32..5) {
        let num_shards = 1u32 << bits;
        let expected = u32::from(bytes[31]) & (num_shards - 1);
        prop_assert_eq!(shard_of(&bytes, num_shards).unwrap(), expected);
    }

    /// The signing payload never contains a signature field.
    #[test]
    fn signing_payload_never_carries_signature(sig in "[0-9a-f]{0,128}") {
        let tx = Transaction {
            value: "0".to_string(),
            chain_id: "T".to_string(),
            version: 1,
            signature: sig,
            ..Transaction::default()
        };
        let payload = String::from_utf8(tx.signing_payload().unwrap()).unwrap();
        prop_assert!(!payload.contains("signature"));
    }
}
