use log::{debug, trace, warn};

use common::{BlockMeta, ChainIndexView};
use crypto::Hash256;

use crate::CheckpointDataset;

/// Checks candidate blocks against a checkpoint dataset
///
/// When `enabled` is false every check is permissive: all blocks are accepted and no rewind
/// boundary is reported
#[derive(Clone, Copy, Debug)]
pub struct BlockAcceptanceGuard<'a> {
    dataset: &'a CheckpointDataset,
    enabled: bool,
}

impl<'a> BlockAcceptanceGuard<'a> {
    /// Creates a guard over the given dataset
    pub fn new(dataset: &'a CheckpointDataset, enabled: bool) -> Self {
        BlockAcceptanceGuard { dataset, enabled }
    }

    /// Checks whether a block with ID `hash` may sit at `height`
    ///
    /// # Returns
    /// `false` only when a checkpoint exists at `height` and names a different block. Such a
    /// block contradicts the trusted chain and must be rejected as invalid
    pub fn check_block(&self, height: u64, hash: &Hash256) -> bool {
        if !self.enabled {
            return true;
        }
        match self.dataset.lookup(height) {
            None => true,
            Some(expected) if expected == hash => {
                debug!("Checkpoint passed for height {} {}", height, hash);
                true
            }
            Some(expected) => {
                warn!("Checkpoint failed for height {}. Expected block ID: {}, got: {}", height, expected, hash);
                false
            }
        }
    }

    /// Finds the highest checkpointed block present in the chain index
    ///
    /// The caller must not reorganize below the returned block
    ///
    /// # Returns
    /// `None` if checkpoints are disabled or none of the checkpointed blocks are known locally
    pub fn last_checkpoint_in<V>(&self, chain_index: &V) -> Option<BlockMeta>
    where
        V: ChainIndexView + ?Sized,
    {
        if !self.enabled {
            return None;
        }
        let found = self
            .dataset
            .entries()
            .iter()
            .rev()
            .find_map(|entry| chain_index.find_by_hash(&entry.hash));
        match &found {
            Some(block) => trace!("Rewind boundary at height {} {}", block.height, block.hash),
            None => trace!("No checkpointed block found in the chain index"),
        }
        found
    }
}
