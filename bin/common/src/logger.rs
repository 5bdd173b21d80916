use std::path::PathBuf;

use fern::colors::Color;
use log::info;

use crate::Config;

/// Errors that can occur while setting up logging
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured log level is not in `0..=3`
    #[error("Invalid log level {0}, expected 0 to 3")]
    InvalidLogLevel(u8),

    /// No data directory was configured and the platform default could not be determined
    #[error("Could not determine the default data directory")]
    NoDataDirectory,

    /// The log directory or file could not be created
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A logger was already installed
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Maps the numeric log level from the command line to a filter
pub fn level_filter(log_level: u8) -> Result<log::LevelFilter, Error> {
    match log_level {
        0 => Ok(log::LevelFilter::Warn),
        1 => Ok(log::LevelFilter::Info),
        2 => Ok(log::LevelFilter::Debug),
        3 => Ok(log::LevelFilter::Trace),
        _ => Err(Error::InvalidLogLevel(log_level))
    }
}

/// Gets the directory log files are written to, creating it if needed
pub fn data_directory(config: &Config) -> Result<PathBuf, Error> {
    let path = match &config.data_directory {
        Some(custom_data_directory) => custom_data_directory.to_path_buf(),
        None => directories::ProjectDirs::from("cash", "Unprll Project", "Unprll")
            .ok_or(Error::NoDataDirectory)?
            .data_dir()
            .to_path_buf()
    };
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Sends log records to stdout and to `<data directory>/<binary_name>.log`
pub fn init(config: &Config, binary_name: &str) -> Result<(), Error> {
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::Green)
        .trace(Color::Magenta);

    let log_level = level_filter(config.log_level)?;

    let mut log_file_path = data_directory(config)?;
    log_file_path.push(binary_name);
    log_file_path.set_extension("log");

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{date}][{target}][{level}{color_line}]\t{message}\x1B[0m",
                color_line = format_args!("\x1B[{}m", colors.get_color(&record.level()).to_fg_str()),
                date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                target = record.target(),
                level = colors.color(record.level()),
                message = message,
            ))
        })
        .level(log_level)
        .chain(std::io::stdout())
        .chain(fern::log_file(&log_file_path)?)
        .apply()?;

    info!("Logging events to {}", log_file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_log_levels() {
        assert_eq!(level_filter(0).unwrap(), log::LevelFilter::Warn);
        assert_eq!(level_filter(3).unwrap(), log::LevelFilter::Trace);
        assert!(matches!(level_filter(4), Err(Error::InvalidLogLevel(4))));
    }

    #[test]
    fn init_reports_bad_log_level() {
        let dir = std::env::temp_dir().join("bin_common_logger_bad_level");
        let config = Config { log_level: 9, data_directory: Some(dir.clone()) };
        assert!(matches!(init(&config, "checkpointctl"), Err(Error::InvalidLogLevel(9))));
        // Rejected before anything touches the filesystem
        assert!(!dir.join("checkpointctl.log").exists());
    }

    #[test]
    fn uses_custom_data_directory() {
        let dir = std::env::temp_dir().join("bin_common_logger_test");
        let config = Config { log_level: 1, data_directory: Some(dir.clone()) };
        assert_eq!(data_directory(&config).unwrap(), dir);
        assert!(dir.is_dir());
    }
}
