#![deny(missing_docs)]

//! Logger setup shared by the binaries: console output plus a log file in the data directory

mod config;
/// Log level mapping, data directory resolution and logger installation
pub mod logger;

pub use config::Config;
