use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use log::{error, info};
use structopt::StructOpt;

use checkpoints::CheckpointRegistry;
use common::BlockMeta;
use crypto::Hash256;

mod config;
use config::{Command, Config};

fn main() {
    // Command Line Arguments
    let config = Config::from_args();

    // Logging
    if let Err(err) = bin_common::logger::init(&config.bin_common_config, "checkpointctl") {
        eprintln!("Failed to initialise logger: {}", err);
        std::process::exit(2);
    }

    // Main
    match run(config) {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(2);
        }
    }
}

/// Runs the requested command
///
/// # Returns
/// `false` if the command's check failed
fn run(config: Config) -> anyhow::Result<bool> {
    let registry = CheckpointRegistry::new(&config.checkpoints_config)?;

    match config.command {
        Command::Summary => summary(&registry)?,
        Command::List { json } => list(&registry, json)?,
        Command::Check { height, hash } => return Ok(check(&registry, height, &hash)),
        Command::Progress { height, tx_count, timestamp, now } => {
            let block = BlockMeta { height, timestamp, cumulative_tx_count: tx_count, hash: Hash256::null_hash() };
            let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp().max(0) as u64);
            let estimate = registry.estimator().estimate(Some(&block), registry.dataset(), now);
            println!("{:.2}%", estimate * 100.0);
        },
        Command::Boundary { index_file } => boundary(&registry, &index_file)?,
    }
    Ok(true)
}

fn summary(registry: &CheckpointRegistry) -> anyhow::Result<()> {
    let calibration = registry.dataset().calibration();
    println!("Network:\t\t\t{}", registry.network());
    println!("Enforced:\t\t\t{}", registry.is_enabled());
    println!("Checkpoints:\t\t\t{}", registry.dataset().entries().len());
    println!("Total blocks estimate:\t\t{}", registry.total_blocks_estimate()?);
    println!("Last checkpoint timestamp:\t{}", calibration.last_checkpoint_timestamp);
    println!("Last checkpoint transactions:\t{}", calibration.last_checkpoint_tx_count);
    println!("Estimated transactions/day:\t{}", calibration.estimated_tx_per_day);
    println!("Sigcheck verification factor:\t{}", registry.estimator().sigcheck_factor());
    Ok(())
}

fn list(registry: &CheckpointRegistry, json: bool) -> anyhow::Result<()> {
    let entries = registry.dataset().entries();
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for entry in entries {
            println!("{:>10}\t{}", entry.height, entry.hash);
        }
    }
    Ok(())
}

fn check(registry: &CheckpointRegistry, height: u64, hash: &Hash256) -> bool {
    let accepted = registry.guard().check_block(height, hash);
    if accepted {
        match registry.dataset().lookup(height) {
            Some(_) if registry.is_enabled() => println!("Block {} matches the checkpoint at height {}", hash, height),
            _ => println!("Block {} is not constrained at height {}", hash, height),
        }
    } else {
        println!("Block {} contradicts the checkpoint at height {}", hash, height);
    }
    accepted
}

fn boundary(registry: &CheckpointRegistry, index_file: &Path) -> anyhow::Result<()> {
    let file = File::open(index_file).with_context(|| format!("Failed to open {}", index_file.display()))?;
    let blocks: Vec<BlockMeta> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read chain index from {}", index_file.display()))?;
    info!("Read {} blocks from {}", blocks.len(), index_file.display());

    let chain_index: HashMap<Hash256, BlockMeta> = blocks.into_iter().map(|block| (block.hash.clone(), block)).collect();
    match registry.guard().last_checkpoint_in(&chain_index) {
        Some(block) => println!("Reorganizations are bounded at height {} ({})", block.height, block.hash),
        None => println!("No checkpointed block in the chain index"),
    }
    Ok(())
}
