use std::path::PathBuf;
use structopt::StructOpt;

/// Logging configuration shared by the binaries
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Verbosity of both the console and the log file
    /// Any value above 3 is rejected when the logger starts:
    ///
    ///   0 - Warn
    ///   1 - Info
    ///   2 - Debug
    ///   3 - Trace
    #[structopt(long, default_value = "1")]
    pub log_level: u8,

    /// Directory holding `<binary>.log`, created if missing
    /// Defaults to the platform data directory for Unprll
    #[structopt(long)]
    pub data_directory: Option<PathBuf>
}
