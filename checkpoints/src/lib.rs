#![deny(missing_docs)]

//! # Checkpoints
//! Hardcoded `(height, block ID)` pairs that the node trusts as part of the canonical chain.
//!
//! The checkpoint set for the active network is loaded once into a [`CheckpointRegistry`] and
//! handed to the components that need it:
//!
//! * [`BlockAcceptanceGuard`] rejects blocks that contradict a checkpoint and finds the highest
//!   checkpoint present in the local chain index, below which reorganizations are refused
//! * [`ProgressEstimator`] guesses how far through initial synchronization the node is
//!
//! Enforcement can be switched off by the operator (`--no-checkpoints`), in which case every
//! check becomes permissive.

mod config;
mod data;
mod dataset;
mod error;
mod guard;
mod network;
mod progress;
mod registry;

pub use config::Config;
pub use dataset::{Calibration, CheckpointDataset, CheckpointEntry};
pub use error::{Error, Result};
pub use guard::BlockAcceptanceGuard;
pub use network::Network;
pub use progress::{total_blocks_estimate, ProgressEstimator, DEFAULT_SIGCHECK_VERIFICATION_FACTOR};
pub use registry::CheckpointRegistry;
