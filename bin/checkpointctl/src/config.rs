use std::path::PathBuf;

use structopt::StructOpt;

use bin_common::Config as BinCommonConfig;
use checkpoints::Config as CheckpointsConfig;
use crypto::Hash256;

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case", name = "checkpointctl")]
pub struct Config {
    #[structopt(flatten)]
    pub bin_common_config: BinCommonConfig,

    #[structopt(flatten)]
    pub checkpoints_config: CheckpointsConfig,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub enum Command {
    /// Prints the active network, enforcement state and calibration figures
    #[structopt(name = "summary")]
    Summary,

    /// Lists the active checkpoints
    #[structopt(name = "list")]
    List {
        /// Prints the checkpoints as JSON
        #[structopt(long)]
        json: bool,
    },

    /// Checks whether a block may sit at the given height
    #[structopt(name = "check")]
    Check {
        #[structopt(long)]
        height: u64,

        #[structopt(long)]
        hash: Hash256,
    },

    /// Estimates sync progress once the described block is verified
    #[structopt(name = "progress")]
    Progress {
        #[structopt(long)]
        height: u64,

        /// Transactions from genesis up to and including the block
        #[structopt(long)]
        tx_count: u64,

        /// Block timestamp (Unix time)
        #[structopt(long)]
        timestamp: u64,

        /// Time to estimate at (Unix time), defaults to now
        #[structopt(long)]
        now: Option<u64>,
    },

    /// Finds the highest checkpoint present in a JSON chain index dump
    #[structopt(name = "boundary")]
    Boundary {
        /// File holding a JSON array of block metadata
        #[structopt(long, parse(from_os_str))]
        index_file: PathBuf,
    },
}
