use serde::{Deserialize, Serialize};

use crypto::Hash256;

/// Read-only view of a block as recorded by the chain index
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockMeta {
    /// Height of the block (the genesis block is at height 0)
    pub height: u64,
    /// Block timestamp as Unix time
    pub timestamp: u64,
    /// Number of transactions from genesis up to and including this block
    pub cumulative_tx_count: u64,
    /// Block ID
    pub hash: Hash256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_index_dump_entries() {
        let json = r#"{
            "height": 25,
            "timestamp": 1386474927,
            "cumulative_tx_count": 31,
            "hash": "52424ba26dd18c2da10170054c8c39ec649d0ac2630585e53099ac70dc360721"
        }"#;
        let block: BlockMeta = serde_json::from_str(json).unwrap();
        assert_eq!(block.height, 25);
        assert_eq!(block.cumulative_tx_count, 31);
        assert_eq!(block.hash.to_string(), "52424ba26dd18c2da10170054c8c39ec649d0ac2630585e53099ac70dc360721");
    }
}
