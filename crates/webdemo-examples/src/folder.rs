//! Folder nodes of the catalog tree.

use std::path::{Path, PathBuf};

use crate::catalog::{ExampleId, FolderId};
use crate::manifest::LocatedDescriptor;

/// A folder of examples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    /// Directory name.
    pub name: String,
    /// Path-like identifier: `/` for the root, `/<name>/` nesting below it.
    pub url: String,
    /// Whether the folder holds tasks rather than plain examples.
    pub task_folder: bool,
    pub(crate) parent: Option<FolderId>,
    pub(crate) examples: Vec<ExampleId>,
    pub(crate) subfolders: Vec<FolderId>,
}

impl Folder {
    /// Parent folder, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<FolderId> {
        self.parent
    }

    /// Examples in manifest declaration order.
    #[must_use]
    pub fn examples(&self) -> &[ExampleId] {
        &self.examples
    }

    /// Subfolders in manifest declaration order.
    #[must_use]
    pub fn subfolders(&self) -> &[FolderId] {
        &self.subfolders
    }
}

/// Folder waiting on the loader's work stack.
#[derive(Debug)]
pub(crate) struct PendingFolder {
    pub dir: PathBuf,
    pub name: String,
    pub url: String,
    /// Common files declared by every ancestor.
    pub inherited: Vec<LocatedDescriptor>,
    pub parent: Option<FolderId>,
}

impl PendingFolder {
    pub(crate) fn root(dir: &Path) -> Self {
        let name = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            dir: dir.to_path_buf(),
            name,
            url: "/".to_owned(),
            inherited: Vec::new(),
            parent: None,
        }
    }

    /// Work item for a declared subfolder.
    pub(crate) fn child(
        &self,
        name: &str,
        common: Vec<LocatedDescriptor>,
        parent: FolderId,
    ) -> Self {
        Self {
            dir: self.dir.join(name),
            name: name.to_owned(),
            url: format!("{}{name}/", self.url),
            inherited: common,
            parent: Some(parent),
        }
    }
}
