#![deny(missing_docs)]
//! Logging helpers shared by the hn_search crates.
//!
//! The `search_*` macros forward to the `log` facade so library crates never
//! pick a backend themselves. The binary installs a `simplelog` logger at
//! startup; tests call [`initialize_for_tests`].

use log::LevelFilter;

/// Logs a trace-level message through the `log` facade.
#[macro_export]
macro_rules! search_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message through the `log` facade.
#[macro_export]
macro_rules! search_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message through the `log` facade.
#[macro_export]
macro_rules! search_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message through the `log` facade.
#[macro_export]
macro_rules! search_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message through the `log` facade.
#[macro_export]
macro_rules! search_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Default verbosity: debug in debug builds, info in release builds.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs a terminal logger for tests.
///
/// Safe to call from every test: a second initialization is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
