//! Dataset configuration.
//!
//! The configuration lists zero or more datasets, each pointing at a
//! directory of result frames and a directory of search images. It is read
//! from `config.json` (camelCase keys) or, when the file ends in `.toml`,
//! from TOML with the same keys:
//!
//! ```json
//! {
//!   "defaultId": "episode-1",
//!   "datasets": [
//!     {
//!       "id": "episode-1",
//!       "label": "Episode 1",
//!       "resultsDir": "data/results/episode-1",
//!       "searchDir": "data/search/episode-1",
//!       "video": { "remote": "https://example.com/ep1.mp4", "fallback": "assets/ep1.mov" }
//!     }
//!   ]
//! }
//! ```
//!
//! Relative directories resolve against the directory holding the config
//! file.

mod dataset;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use dataset::{Dataset, DatasetPaths, VideoCandidate, VideoSource, DEFAULT_RESULTS_DIR, DEFAULT_SEARCH_DIR};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Dataset picked when none is requested explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_id: Option<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl Config {
    /// Read a config file. TOML is used for `.toml` files, JSON otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            toml::from_str(&text).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_json::from_str(&text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Read a config file, falling back to the built-in default dataset
    /// when it is missing, unreadable, or lists no datasets.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) if !config.datasets.is_empty() => config,
            Ok(_) => {
                tracing::warn!(path = %path.display(), "config lists no datasets, using default directories");
                Self::fallback()
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load config, using default directories");
                Self::fallback()
            }
        }
    }

    /// Single `default` dataset using the default directories.
    pub fn fallback() -> Self {
        Self {
            default_id: None,
            datasets: vec![Dataset::new("default")],
        }
    }

    pub fn dataset_by_id(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Choose the dataset to work with: the requested id if it exists, then
    /// `defaultId`, then the first dataset.
    pub fn pick_dataset(&self, requested: Option<&str>) -> Option<&Dataset> {
        requested
            .and_then(|id| self.dataset_by_id(id))
            .or_else(|| {
                self.default_id
                    .as_deref()
                    .and_then(|id| self.dataset_by_id(id))
            })
            .or_else(|| self.datasets.first())
    }
}

/// Directory that relative dataset paths resolve against.
pub fn config_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
