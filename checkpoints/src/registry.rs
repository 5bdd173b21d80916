use log::info;

use crate::{
    total_blocks_estimate,
    BlockAcceptanceGuard,
    CheckpointDataset,
    Config,
    Network,
    ProgressEstimator,
    Result
};

/// The checkpoint dataset of the active network and whether it is enforced
///
/// Built once at startup and passed to whatever needs checkpoints. The operator override is
/// read here and nowhere else
#[derive(Clone, Debug)]
pub struct CheckpointRegistry {
    network: Network,
    dataset: CheckpointDataset,
    enabled: bool,
    estimator: ProgressEstimator,
}

impl CheckpointRegistry {
    /// Creates a registry for the configured network
    ///
    /// # Errors
    /// If the hardcoded dataset is malformed or the sigcheck verification factor is invalid
    pub fn new(config: &Config) -> Result<Self> {
        let registry = CheckpointRegistry::with_dataset(
            config.network,
            CheckpointDataset::for_network(config.network)?,
            !config.no_checkpoints,
            ProgressEstimator::new(config.sigcheck_verification_factor)?,
        );
        if registry.enabled {
            info!(
                "Loaded {} {} checkpoints, last at height {}",
                registry.dataset.entries().len(),
                registry.network,
                registry.dataset.highest_height()?
            );
        } else {
            info!("Checkpoints disabled by operator");
        }
        Ok(registry)
    }

    /// Creates a registry over an arbitrary dataset
    pub fn with_dataset(network: Network, dataset: CheckpointDataset, enabled: bool, estimator: ProgressEstimator) -> Self {
        CheckpointRegistry { network, dataset, enabled, estimator }
    }

    /// Gets the network this registry was built for
    pub fn network(&self) -> Network {
        self.network
    }

    /// Gets the active dataset
    pub fn dataset(&self) -> &CheckpointDataset {
        &self.dataset
    }

    /// Gets whether checkpoints are enforced
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gets the progress estimator
    pub fn estimator(&self) -> &ProgressEstimator {
        &self.estimator
    }

    /// Gets a guard that enforces this registry's checkpoints
    pub fn guard(&self) -> BlockAcceptanceGuard<'_> {
        BlockAcceptanceGuard::new(&self.dataset, self.enabled)
    }

    /// Checks whether `height` is covered by checkpoints, i.e. at or below the last one
    ///
    /// Always false when checkpoints are disabled or the dataset is empty
    pub fn in_checkpoint_zone(&self, height: u64) -> bool {
        self.enabled && self.dataset.highest_height().map_or(false, |highest| height <= highest)
    }

    /// See [`total_blocks_estimate`]
    pub fn total_blocks_estimate(&self) -> Result<u64> {
        total_blocks_estimate(&self.dataset, self.enabled)
    }
}
