//! Manifest generation by scanning image directories.

use std::fs;
use std::path::{Path, PathBuf};

use super::{ListKind, Manifest, ManifestError, MANIFEST_FILE};
use crate::config::Dataset;
use crate::entries::{FrameEntry, RawEntry, RawFields};

/// Image extensions listed in search manifests (lowercase, without dot).
pub const SEARCH_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp", "tiff", "tif"];

/// Outcome of building one manifest for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Written {
        kind: ListKind,
        path: PathBuf,
        count: usize,
    },
    /// The image directory does not exist.
    Skipped { kind: ListKind, dir: PathBuf },
}

/// Scan `dir` and write its `manifest.json`.
///
/// Returns the path written and the number of records.
pub fn build_list(kind: ListKind, dir: &Path) -> Result<(PathBuf, usize), ManifestError> {
    if !dir.is_dir() {
        return Err(ManifestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let names = list_image_names(kind, dir)?;
    let files: Vec<RawEntry> = match kind {
        ListKind::Results => names
            .iter()
            .filter_map(|name| FrameEntry::from_filename(name))
            .map(RawEntry::from)
            .collect(),
        ListKind::Search => names
            .into_iter()
            .map(|filename| {
                RawEntry::Structured(RawFields {
                    filename: Some(filename),
                    ..RawFields::default()
                })
            })
            .collect(),
    };

    let manifest = Manifest::new(files);
    let path = dir.join(MANIFEST_FILE);
    manifest.write(&path)?;
    let count = manifest.files.len();
    tracing::info!(kind = kind.name(), path = %path.display(), count, "wrote manifest");
    Ok((path, count))
}

/// Build the requested manifests of one dataset.
///
/// A missing directory is reported as [`BuildOutcome::Skipped`] so the
/// remaining lists and datasets still get built.
pub fn build_dataset(
    dataset: &Dataset,
    root: &Path,
    kinds: &[ListKind],
) -> Result<Vec<BuildOutcome>, ManifestError> {
    let paths = dataset.paths(root);
    let mut outcomes = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        let dir = paths.dir(kind);
        match build_list(kind, dir) {
            Ok((path, count)) => outcomes.push(BuildOutcome::Written { kind, path, count }),
            Err(ManifestError::DirectoryNotFound { path }) => {
                tracing::warn!(
                    dataset = %dataset.id,
                    kind = kind.name(),
                    dir = %path.display(),
                    "image directory not found"
                );
                outcomes.push(BuildOutcome::Skipped { kind, dir: path });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcomes)
}

/// Sorted names of the image files in `dir` that belong in a `kind` manifest.
fn list_image_names(kind: ListKind, dir: &Path) -> Result<Vec<String>, ManifestError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ManifestError::io(dir, e))? {
        let entry = entry.map_err(|e| ManifestError::io(dir, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 filename");
            continue;
        };
        if name == MANIFEST_FILE || !is_listed(kind, &name) {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

fn is_listed(kind: ListKind, name: &str) -> bool {
    match kind {
        ListKind::Results => name.to_lowercase().ends_with(".png"),
        ListKind::Search => Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SEARCH_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false),
    }
}
