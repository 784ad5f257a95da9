//! Project file loading.

use std::path::Path;

use serde::Serialize;

use crate::error::LoadError;
use crate::manifest::FileDescriptor;

/// Role of a file within an example.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    /// Regular Kotlin source.
    Source,
    /// Test file run against the learner's code.
    Test,
    /// Reference solution, only present in the test version.
    Solution,
    /// Task skeleton the learner edits.
    Task,
    /// Java source.
    Java,
}

impl FileType {
    /// Classify a manifest `type` string.
    ///
    /// A missing type means [`FileType::Source`]. Unknown strings also map to
    /// `Source`.
    #[must_use]
    pub fn from_manifest(value: Option<&str>) -> Self {
        match value {
            None => Self::Source,
            Some("kotlin-test") => Self::Test,
            Some("solution") => Self::Solution,
            Some("java") => Self::Java,
            Some("task") => Self::Task,
            Some(other) => {
                tracing::warn!(file_type = other, "Unknown file type, treating as source");
                Self::Source
            }
        }
    }

    /// Lowercase label, as used in JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Test => "test",
            Self::Solution => "solution",
            Self::Task => "task",
            Self::Java => "java",
        }
    }
}

/// A loaded example file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// File name as shown in the editor.
    pub name: String,
    /// Content with `\r\n` collapsed to `\n`.
    pub content: String,
    /// `<example id>/<name>` with spaces escaped.
    pub public_id: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_type: Option<String>,
    pub modifiable: bool,
    pub hidden: bool,
}

/// Escape the spaces of an identifier. Other characters are kept as is.
#[must_use]
pub fn encode_id(value: &str) -> String {
    value.replace(' ', "%20")
}

/// Public identifier of a file inside an example.
#[must_use]
pub fn public_id(example_id: &str, file_name: &str) -> String {
    format!("{example_id}/{}", encode_id(file_name))
}

/// Collapse Windows line endings.
#[must_use]
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Read a text file, normalizing line endings.
pub(crate) fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path)
        .map(|content| normalize_line_endings(&content))
        .map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Load a file declared in a manifest.
pub(crate) fn load_project_file(
    path: &Path,
    example_id: &str,
    descriptor: &FileDescriptor,
) -> Result<ProjectFile, LoadError> {
    let content = read_text(path)?;

    Ok(ProjectFile {
        public_id: public_id(example_id, &descriptor.filename),
        name: descriptor.filename.clone(),
        content,
        file_type: FileType::from_manifest(descriptor.file_type.as_deref()),
        conf_type: descriptor.conf_type.clone(),
        modifiable: descriptor.modifiable,
        hidden: descriptor.hidden,
    })
}

/// Load a conventional file found in the project directory.
pub(crate) fn load_default_file(
    path: &Path,
    name: &str,
    example_id: &str,
    file_type: FileType,
) -> Result<ProjectFile, LoadError> {
    let content = read_text(path)?;

    Ok(ProjectFile {
        name: name.to_owned(),
        content,
        public_id: public_id(example_id, name),
        file_type,
        conf_type: None,
        modifiable: file_type != FileType::Test,
        hidden: false,
    })
}
