//! Manifest documents indexing exported images.
//!
//! A manifest is a JSON object written next to the images it lists:
//!
//! ```json
//! {
//!   "generatedAt": "2026-01-01T00:00:00.000Z",
//!   "count": 2,
//!   "files": [
//!     { "filename": "frame_1_t00m01s000ms.png", "frameNumber": 1, "timecode": "00m01s000ms", "seconds": 1.0 },
//!     "frame_2_t00m02s000ms.png"
//!   ]
//! }
//! ```
//!
//! Records may be bare filenames or structured objects (see
//! [`crate::entries::RawEntry`]).

mod builder;
mod error;

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entries::{self, FrameEntry, RawEntry, SearchEntry};

pub use builder::{build_dataset, build_list, BuildOutcome, SEARCH_EXTENSIONS};
pub use error::ManifestError;

/// File name of a manifest inside an image directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Which exported-image list a manifest describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ListKind {
    /// Matching-result frames (`frame_<N>_t<timecode>.png`)
    Results,
    /// Training/crop images
    Search,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Results, ListKind::Search];

    pub fn name(&self) -> &'static str {
        match self {
            ListKind::Results => "results",
            ListKind::Search => "search",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, deserialize_with = "files_or_empty")]
    pub files: Vec<RawEntry>,
}

/// `"files": null` reads as an empty list.
fn files_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RawEntry>, D::Error> {
    Ok(Option::<Vec<RawEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entries parsed from a manifest together with the count to display.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedList<T> {
    pub entries: Vec<T>,
    /// The manifest's own `count` when present, else the parsed entry count.
    pub total_count: usize,
}

impl<T> LoadedList<T> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for LoadedList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Manifest {
    /// New manifest stamped with the current UTC time.
    pub fn new(files: Vec<RawEntry>) -> Self {
        Self {
            generated_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            count: Some(files.len()),
            files,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Write as 2-space indented JSON.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| ManifestError::io(path, e))
    }

    /// Result frames sorted by time.
    pub fn frame_list(&self) -> LoadedList<FrameEntry> {
        let entries = entries::frame_entries(&self.files);
        LoadedList {
            total_count: self.count.unwrap_or(entries.len()),
            entries,
        }
    }

    /// Search images, timed ones first.
    pub fn search_list(&self) -> LoadedList<SearchEntry> {
        let entries = entries::search_entries(&self.files);
        LoadedList {
            total_count: self.count.unwrap_or(entries.len()),
            entries,
        }
    }
}
