//! Error types for catalog loading.

use std::io;
use std::path::PathBuf;

/// Failure while resolving one folder, example or file.
///
/// Load errors never abort the catalog build. The affected subtree, example
/// or file is left out and the error is recorded as a [`LoadIssue`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Manifest is missing or unreadable.
    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Manifest is not valid JSON or lacks a required field.
    #[error("Malformed manifest {}: {source}", .path.display())]
    ManifestParse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Project file, expected output or help document is unreadable.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Folder manifest lists the same example or subfolder name twice.
    #[error("Duplicate entry {name} in {}", .manifest.display())]
    DuplicateName {
        /// Repeated name.
        name: String,
        /// Manifest declaring it.
        manifest: PathBuf,
    },
}

impl LoadError {
    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ManifestRead { .. } => "manifest-read",
            Self::ManifestParse { .. } => "manifest-parse",
            Self::FileRead { .. } => "file-read",
            Self::DuplicateName { .. } => "duplicate-name",
        }
    }
}

/// A recoverable failure recorded on the catalog.
#[derive(Debug, thiserror::Error)]
#[error("{location}: {error}")]
pub struct LoadIssue {
    /// Url of the folder or id of the example the failure belongs to.
    pub location: String,
    /// What went wrong.
    #[source]
    pub error: LoadError,
}

/// Fatal catalog error: nothing could be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Configured examples directory does not exist.
    #[error("Examples directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// Root manifest is missing, unreadable or malformed.
    #[error("Failed to load root folder: {0}")]
    RootManifest(#[source] LoadError),
}
