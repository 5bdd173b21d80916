use structopt::StructOpt;

use crate::Network;

/// Checkpoint configuration
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Network whose checkpoints are enforced (mainnet or testnet)
    #[structopt(long, default_value = "mainnet")]
    pub network: Network,

    /// Disables checkpoint enforcement. Blocks are then accepted regardless of checkpoints and
    /// reorganizations are not bounded by them
    #[structopt(long)]
    pub no_checkpoints: bool,

    /// How many times slower transactions after the last checkpoint are expected to verify
    #[structopt(long, default_value = "5.0")]
    pub sigcheck_verification_factor: f64,
}
