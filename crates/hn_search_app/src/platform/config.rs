//! Optional `hn_search.ron` in the working directory.
//!
//! Every field has a default, so the file may list only what it overrides.
//! A missing file is normal; an unreadable or malformed one is replaced by
//! defaults. The file is read before the logger exists, so the outcome is
//! returned as a [`ConfigStatus`] and logged once logging is up.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hn_search_core::{
    ResponseOrdering, SearchSettings, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_QUERY,
};
use hn_search_engine::FetchSettings;
use search_logging::{search_info, search_warn};
use serde::Deserialize;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "hn_search.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OrderingSetting {
    #[default]
    LatestRequest,
    LastResolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub query: String,
    pub page_size: usize,
    pub ordering: OrderingSetting,
    pub request_timeout_ms: Option<u64>,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            ordering: OrderingSetting::default(),
            request_timeout_ms: None,
            max_bytes: FetchSettings::default().max_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            base_url: self.base_url.clone(),
            query: self.query.clone(),
            page_size: self.page_size,
            ordering: match self.ordering {
                OrderingSetting::LatestRequest => ResponseOrdering::LatestRequest,
                OrderingSetting::LastResolved => ResponseOrdering::LastResolved,
            },
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}

/// How the config file was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    Missing,
    Loaded(PathBuf),
    Unreadable { path: PathBuf, reason: String },
    Invalid { path: PathBuf, reason: String },
}

impl ConfigStatus {
    pub fn log(&self) {
        match self {
            ConfigStatus::Missing => {
                search_info!("No {} found, using defaults", CONFIG_FILENAME);
            }
            ConfigStatus::Loaded(path) => search_info!("Loaded config from {:?}", path),
            ConfigStatus::Unreadable { path, reason } => {
                search_warn!("Failed to read config from {:?}: {}", path, reason);
            }
            ConfigStatus::Invalid { path, reason } => {
                search_warn!("Failed to parse config from {:?}: {}", path, reason);
            }
        }
    }
}

pub fn load_config(dir: &Path) -> (AppConfig, ConfigStatus) {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), ConfigStatus::Missing);
        }
        Err(err) => {
            let reason = err.to_string();
            return (AppConfig::default(), ConfigStatus::Unreadable { path, reason });
        }
    };

    match ron::from_str::<AppConfig>(&content) {
        Ok(config) => (config, ConfigStatus::Loaded(path)),
        Err(err) => {
            let reason = err.to_string();
            (AppConfig::default(), ConfigStatus::Invalid { path, reason })
        }
    }
}
