//! Logging setup for the hn_search binary.
//!
//! Logs go to `./hn_search.log` by default. The UI owns stdout, so the
//! terminal destination writes to stderr, which can be redirected
//! (`hn_search 2>trace.log`) or read after the UI exits.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILENAME: &str = "hn_search.log";

/// Destination for log output, chosen by `log_destination` in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    /// Write to the log file in the working directory.
    #[default]
    File,
    /// Write to stderr.
    Stderr,
    /// Write to both the log file and stderr.
    Both,
}

/// Installs the global logger for `destination`. A log file that cannot be
/// created is reported on stderr and the remaining loggers still run.
pub fn initialize(destination: LogDestination, log_path: &Path) {
    let loggers = build_loggers(destination, log_path, search_logging::default_level());
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(
    destination: LogDestination,
    log_path: &Path,
    level: LevelFilter,
) -> Vec<Box<dyn SharedLogger>> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Stderr | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            build_config(),
            TerminalMode::Stderr,
            ColorChoice::Never,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(file_logger) = create_file_logger(level, log_path) {
            loggers.push(file_logger);
        }
    }
    loggers
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        // reqwest/hyper internals are noise at debug level.
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("rustls")
        .build()
}

fn create_file_logger(level: LevelFilter, log_path: &Path) -> Option<Box<dyn SharedLogger>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, build_config(), file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_destination_creates_the_log_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILENAME);

        let loggers = build_loggers(LogDestination::File, &path, LevelFilter::Info);
        assert_eq!(loggers.len(), 1);
        assert!(path.exists());
    }

    #[test]
    fn stderr_destination_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILENAME);

        let loggers = build_loggers(LogDestination::Stderr, &path, LevelFilter::Info);
        assert_eq!(loggers.len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn both_destination_combines_file_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILENAME);

        let loggers = build_loggers(LogDestination::Both, &path, LevelFilter::Info);
        assert_eq!(loggers.len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_path_keeps_the_stderr_logger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(LOG_FILENAME);

        assert!(build_loggers(LogDestination::File, &path, LevelFilter::Info).is_empty());
        assert_eq!(build_loggers(LogDestination::Both, &path, LevelFilter::Info).len(), 1);
    }
}
