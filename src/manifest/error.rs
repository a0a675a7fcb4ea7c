//! Manifest loading and building errors.

use std::path::PathBuf;

/// Errors that can occur while reading or writing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Manifest not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ManifestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ManifestError::NotFound { path }
        } else {
            ManifestError::Io { path, source }
        }
    }
}
