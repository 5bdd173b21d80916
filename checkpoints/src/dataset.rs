use std::convert::TryFrom;

use serde::Serialize;

use crypto::Hash256;
use ensure_macro::ensure;

use crate::data;
use crate::{Error, Network, Result};

/// A trusted `(height, block ID)` pair
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckpointEntry {
    /// Height of the checkpointed block
    pub height: u64,
    /// ID of the block the canonical chain has at `height`
    pub hash: Hash256,
}

/// Figures recorded at the last checkpoint, used to estimate synchronization progress
///
/// These are authored alongside the checkpoint table and must describe its highest entry.
/// Nothing checks this correspondence at runtime
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Calibration {
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_timestamp: u64,
    /// Total number of transactions between genesis and the last checkpoint
    pub last_checkpoint_tx_count: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub estimated_tx_per_day: f64,
}

/// An immutable set of checkpoints for one network, ordered by height
#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointDataset {
    entries: Vec<CheckpointEntry>,
    calibration: Calibration,
}

impl CheckpointDataset {
    /// Creates a dataset from entries sorted by strictly increasing height
    ///
    /// # Errors
    /// If two entries are out of order or share a height, or if the calibration's transaction
    /// rate is not a positive number
    pub fn new(entries: Vec<CheckpointEntry>, calibration: Calibration) -> Result<Self> {
        for pair in entries.windows(2) {
            ensure!(
                pair[0].height < pair[1].height,
                Error::NonIncreasingHeight { previous: pair[0].height, height: pair[1].height }
            );
        }
        let rate = calibration.estimated_tx_per_day;
        ensure!(rate.is_finite() && rate > 0.0, Error::InvalidTransactionRate(rate));

        Ok(CheckpointDataset { entries, calibration })
    }

    /// Creates a dataset from a table of `(height, hex block ID)` pairs
    pub fn from_table(table: &[(u64, &str)], calibration: Calibration) -> Result<Self> {
        let entries = table
            .iter()
            .map(|&(height, hash)| {
                Hash256::try_from(hash)
                    .map(|hash| CheckpointEntry { height, hash })
                    .map_err(|source| Error::InvalidHash { height, source })
            })
            .collect::<Result<Vec<_>>>()?;
        CheckpointDataset::new(entries, calibration)
    }

    /// Gets the hardcoded dataset for the given network
    pub fn for_network(network: Network) -> Result<Self> {
        match network {
            Network::Mainnet => CheckpointDataset::from_table(data::MAINNET_CHECKPOINTS, data::MAINNET_CALIBRATION),
            Network::Testnet => CheckpointDataset::from_table(data::TESTNET_CHECKPOINTS, data::TESTNET_CALIBRATION),
        }
    }

    /// Gets the checkpoint entries in ascending height order
    pub fn entries(&self) -> &[CheckpointEntry] {
        &self.entries
    }

    /// Gets the progress calibration figures
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Gets the checkpointed block ID at exactly `height`, if there is one
    pub fn lookup(&self, height: u64) -> Option<&Hash256> {
        self.entries
            .binary_search_by_key(&height, |entry| entry.height)
            .ok()
            .map(|index| &self.entries[index].hash)
    }

    /// Gets the height of the last checkpoint
    ///
    /// # Errors
    /// If the dataset has no entries
    pub fn highest_height(&self) -> Result<u64> {
        self.entries.last().map(|entry| entry.height).ok_or(Error::EmptyDataset)
    }
}
