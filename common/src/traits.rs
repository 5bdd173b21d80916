use std::collections::HashMap;

use crypto::Hash256;

use crate::BlockMeta;

/// Lookup of locally known blocks (main chain and side branches) by block ID
///
/// Implementors are expected to give a consistent snapshot for the duration of a call; any
/// locking this requires is the caller's responsibility
pub trait ChainIndexView {
    /// Gets the metadata of the block with the given ID, if it is known
    fn find_by_hash(&self, hash: &Hash256) -> Option<BlockMeta>;
}

impl ChainIndexView for HashMap<Hash256, BlockMeta> {
    fn find_by_hash(&self, hash: &Hash256) -> Option<BlockMeta> {
        self.get(hash).cloned()
    }
}
