use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::manifest::{ListKind, MANIFEST_FILE};

/// Results directory used when a dataset does not name one.
pub const DEFAULT_RESULTS_DIR: &str = "data/results";
/// Search directory used when a dataset does not name one.
pub const DEFAULT_SEARCH_DIR: &str = "data/search";

/// One dataset: a pair of image directories plus an optional video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoSource>,
}

/// Where the dataset's video can be loaded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSource {
    /// URL tried first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Local path, relative to the config root, used when the remote fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// A video location to try, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoCandidate {
    Remote(String),
    Local(PathBuf),
}

/// Resolved directories and manifest paths of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub results_dir: PathBuf,
    pub search_dir: PathBuf,
}

impl DatasetPaths {
    pub fn dir(&self, kind: ListKind) -> &Path {
        match kind {
            ListKind::Results => &self.results_dir,
            ListKind::Search => &self.search_dir,
        }
    }

    pub fn manifest(&self, kind: ListKind) -> PathBuf {
        self.dir(kind).join(MANIFEST_FILE)
    }
}

impl Dataset {
    /// Dataset with default directories and no video.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            results_dir: None,
            search_dir: None,
            video: None,
        }
    }

    /// Label if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    pub fn paths(&self, root: &Path) -> DatasetPaths {
        let results = self
            .results_dir
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_RESULTS_DIR);
        let search = self
            .search_dir
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_SEARCH_DIR);
        DatasetPaths {
            results_dir: root.join(results),
            search_dir: root.join(search),
        }
    }

    /// Video sources in the order they should be tried.
    pub fn video_candidates(&self, root: &Path) -> Vec<VideoCandidate> {
        let Some(video) = &self.video else {
            return Vec::new();
        };
        let mut candidates = Vec::new();
        if let Some(remote) = video.remote.as_deref().filter(|r| !r.is_empty()) {
            candidates.push(VideoCandidate::Remote(remote.to_string()));
        }
        if let Some(fallback) = video.fallback.as_deref().filter(|f| !f.is_empty()) {
            candidates.push(VideoCandidate::Local(root.join(fallback)));
        }
        candidates
    }
}
