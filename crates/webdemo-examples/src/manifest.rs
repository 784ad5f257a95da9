//! Manifest deserialization.
//!
//! Every folder and project directory carries a JSON manifest. Folder
//! manifests declare shared files, subfolders and examples; project
//! manifests declare run settings and the project's own files.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Folder manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FolderManifest {
    pub task_folder: bool,
    /// Common files shared by every example below this folder.
    pub files: Vec<FileDescriptor>,
    pub folders: Vec<String>,
    pub examples: Vec<String>,
}

/// Project (example) manifest.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectManifest {
    #[serde(default)]
    pub args: String,
    pub conf_type: String,
    pub expected_output: Option<String>,
    pub expected_output_file: Option<String>,
    pub task_windows: Option<Vec<TaskWindow>>,
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

/// File entry of a manifest `files` list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileDescriptor {
    pub filename: String,
    pub modifiable: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub conf_type: Option<String>,
    #[serde(default)]
    pub skip_in_test_version: bool,
}

/// File descriptor bound to the file's location on disk.
///
/// Common files resolve against the folder that declares them, so their
/// path is fixed before they are passed down the tree.
#[derive(Clone, Debug)]
pub(crate) struct LocatedDescriptor {
    pub path: PathBuf,
    pub descriptor: FileDescriptor,
}

impl LocatedDescriptor {
    pub(crate) fn new(dir: &Path, descriptor: FileDescriptor) -> Self {
        Self {
            path: dir.join(&descriptor.filename),
            descriptor,
        }
    }
}

/// Editor annotation region of an example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWindow {
    /// Start line.
    pub line: u32,
    /// Start column.
    pub ch: u32,
    /// End line, if the region spans lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_line: Option<u32>,
    /// End column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_ch: Option<u32>,
}

/// Read and parse a manifest file.
pub(crate) fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
