use common::BlockMeta;
use ensure_macro::ensure;

use crate::{Calibration, CheckpointDataset, Error, Result};

/// How many times slower transactions after the last checkpoint are expected to verify
///
/// A compromise: reindexing from a fast disk on a slow CPU can make it closer to 20, while
/// downloading over a slow network on a fast multicore CPU brings it near 1
pub const DEFAULT_SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Gets a conservative lower bound on the chain height during initial sync
///
/// # Returns
/// The height of the last checkpoint, or 0 if checkpoints are disabled
///
/// # Errors
/// If the dataset has no entries
pub fn total_blocks_estimate(dataset: &CheckpointDataset, enabled: bool) -> Result<u64> {
    if !enabled {
        return Ok(0);
    }
    dataset.highest_height()
}

/// Estimates how much of the chain verification work has been done
///
/// Work is counted per transaction: 1 unit for each transaction up to the last checkpoint,
/// and the sigcheck verification factor for each one after it. Only meant for user feedback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressEstimator {
    sigcheck_factor: f64,
}

impl Default for ProgressEstimator {
    fn default() -> Self {
        ProgressEstimator { sigcheck_factor: DEFAULT_SIGCHECK_VERIFICATION_FACTOR }
    }
}

impl ProgressEstimator {
    /// Creates an estimator with a custom sigcheck verification factor
    ///
    /// # Errors
    /// If the factor is not a positive number
    pub fn new(sigcheck_factor: f64) -> Result<Self> {
        ensure!(sigcheck_factor.is_finite() && sigcheck_factor > 0.0, Error::InvalidSigcheckFactor(sigcheck_factor));
        Ok(ProgressEstimator { sigcheck_factor })
    }

    /// Gets the sigcheck verification factor in use
    pub fn sigcheck_factor(&self) -> f64 {
        self.sigcheck_factor
    }

    /// Guesses how far verification has progressed once `block` is verified, at time `now`
    ///
    /// # Returns
    /// A fraction in `[0, 1]`. Exactly 0 when there is no block to measure
    pub fn estimate(&self, block: Option<&BlockMeta>, dataset: &CheckpointDataset, now: u64) -> f64 {
        let block = match block {
            Some(block) => block,
            None => return 0.0,
        };
        let calibration = dataset.calibration();
        let (work_before, work_after) = if block.cumulative_tx_count <= calibration.last_checkpoint_tx_count {
            self.work_up_to_checkpoint(block, calibration, now)
        } else {
            self.work_past_checkpoint(block, calibration, now)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        (work_before / total).max(0.0).min(1.0)
    }

    /// Work split for a block at or before the last checkpoint
    fn work_up_to_checkpoint(&self, block: &BlockMeta, calibration: &Calibration, now: u64) -> (f64, f64) {
        let cheap_before = block.cumulative_tx_count as f64;
        let cheap_after = calibration.last_checkpoint_tx_count.saturating_sub(block.cumulative_tx_count) as f64;
        let expensive_after = days_between(calibration.last_checkpoint_timestamp, now) * calibration.estimated_tx_per_day;
        (cheap_before, cheap_after + expensive_after * self.sigcheck_factor)
    }

    /// Work split for a block past the last checkpoint
    fn work_past_checkpoint(&self, block: &BlockMeta, calibration: &Calibration, now: u64) -> (f64, f64) {
        let cheap_before = calibration.last_checkpoint_tx_count as f64;
        let expensive_before = block.cumulative_tx_count.saturating_sub(calibration.last_checkpoint_tx_count) as f64;
        let expensive_after = days_between(block.timestamp, now) * calibration.estimated_tx_per_day;
        (
            cheap_before + expensive_before * self.sigcheck_factor,
            expensive_after * self.sigcheck_factor,
        )
    }
}

/// Days elapsed from `from` to `to`, or zero if `to` is not later (e.g. a skewed clock)
fn days_between(from: u64, to: u64) -> f64 {
    to.saturating_sub(from) as f64 / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckpointEntry;
    use crypto::Hash256;

    const T0: u64 = 1_400_000_000;
    const DAY: u64 = 86_400;

    fn dataset() -> CheckpointDataset {
        CheckpointDataset::new(
            vec![
                CheckpointEntry { height: 0, hash: Hash256::from([0xa; 32]) },
                CheckpointEntry { height: 100, hash: Hash256::from([0xb; 32]) },
            ],
            Calibration {
                last_checkpoint_timestamp: T0,
                last_checkpoint_tx_count: 1000,
                estimated_tx_per_day: 100.0,
            },
        ).unwrap()
    }

    fn block(height: u64, cumulative_tx_count: u64, timestamp: u64) -> BlockMeta {
        BlockMeta { height, timestamp, cumulative_tx_count, hash: Hash256::null_hash() }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn no_block_is_zero() {
        assert_eq!(ProgressEstimator::default().estimate(None, &dataset(), T0 + 10 * DAY), 0.0);
    }

    #[test]
    fn block_at_checkpoint() {
        let estimate = ProgressEstimator::default().estimate(Some(&block(100, 1000, T0)), &dataset(), T0 + 10 * DAY);
        assert_close(estimate, 1000.0 / 6000.0);
    }

    #[test]
    fn block_past_checkpoint() {
        let estimate = ProgressEstimator::default().estimate(Some(&block(150, 1500, T0 + 5 * DAY)), &dataset(), T0 + 10 * DAY);
        assert_close(estimate, 3500.0 / 6000.0);
    }

    #[test]
    fn branches_agree_at_checkpoint() {
        let estimator = ProgressEstimator::default();
        let dataset = dataset();
        let calibration = dataset.calibration();
        let at_checkpoint = block(100, 1000, T0);
        for &now in &[T0, T0 + DAY, T0 + 10 * DAY, T0 + 365 * DAY] {
            assert_eq!(
                estimator.work_up_to_checkpoint(&at_checkpoint, calibration, now),
                estimator.work_past_checkpoint(&at_checkpoint, calibration, now)
            );
        }
    }

    #[test]
    fn monotonic_in_transaction_count() {
        let estimator = ProgressEstimator::default();
        let dataset = dataset();
        let now = T0 + 30 * DAY;
        let mut previous = 0.0;
        for tx_count in (0..=3000).step_by(50) {
            let estimate = estimator.estimate(Some(&block(0, tx_count, T0 + DAY)), &dataset, now);
            assert!(estimate >= previous, "{} dropped below {} at {} transactions", estimate, previous, tx_count);
            assert!(estimate >= 0.0 && estimate <= 1.0);
            previous = estimate;
        }
    }

    #[test]
    fn clock_before_checkpoint_counts_no_remaining_work() {
        let estimator = ProgressEstimator::default();
        // Past the checkpoint, with the clock behind the block's own timestamp
        assert_eq!(estimator.estimate(Some(&block(150, 1500, T0 + 5 * DAY)), &dataset(), T0), 1.0);
        // Before the checkpoint, with the clock behind the checkpoint
        assert_close(estimator.estimate(Some(&block(50, 500, T0 - DAY)), &dataset(), T0 - DAY), 0.5);
    }

    #[test]
    fn no_work_at_all_is_zero() {
        let unmeasured = CheckpointDataset::new(
            dataset().entries().to_vec(),
            Calibration { last_checkpoint_tx_count: 0, ..*dataset().calibration() },
        ).unwrap();
        let estimate = ProgressEstimator::default().estimate(Some(&block(0, 0, T0)), &unmeasured, T0);
        assert_eq!(estimate, 0.0);
    }

    #[test]
    fn custom_sigcheck_factor() {
        let estimator = ProgressEstimator::new(1.0).unwrap();
        let estimate = estimator.estimate(Some(&block(100, 1000, T0)), &dataset(), T0 + 10 * DAY);
        assert_close(estimate, 0.5);
        assert!(matches!(ProgressEstimator::new(0.0), Err(Error::InvalidSigcheckFactor(_))));
        assert!(ProgressEstimator::new(std::f64::NAN).is_err());
    }

    #[test]
    fn total_blocks() {
        assert_eq!(total_blocks_estimate(&dataset(), true).unwrap(), 100);
        assert_eq!(total_blocks_estimate(&dataset(), false).unwrap(), 0);

        let empty = CheckpointDataset::new(Vec::new(), *dataset().calibration()).unwrap();
        assert!(matches!(total_blocks_estimate(&empty, true), Err(Error::EmptyDataset)));
        assert_eq!(total_blocks_estimate(&empty, false).unwrap(), 0);
    }
}
