//! Immutable examples catalog.
//!
//! # Architecture
//!
//! Folders and examples are stored in flat vectors. Parent/child and sibling
//! relationships are tracked by [`FolderId`] and [`ExampleId`] indices into
//! those vectors. This provides:
//! - O(1) example lookups by public id via `id_index`
//! - O(1) previous/next sibling navigation
//! - No reference cycles, so the catalog is trivially `Send + Sync`

use std::collections::HashMap;

use crate::error::LoadIssue;
use crate::example::Example;
use crate::folder::Folder;

/// Index of a folder in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderId(pub(crate) usize);

/// Index of an example in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExampleId(pub(crate) usize);

/// Examples catalog built by [`CatalogLoader`](crate::CatalogLoader).
///
/// Read-only once built. The root folder always exists.
#[derive(Debug)]
pub struct Catalog {
    folders: Vec<Folder>,
    examples: Vec<Example>,
    id_index: HashMap<String, ExampleId>,
    issues: Vec<LoadIssue>,
}

impl Catalog {
    /// The root folder (url `/`).
    #[must_use]
    pub fn root(&self) -> &Folder {
        &self.folders[0]
    }

    /// Id of the root folder.
    #[must_use]
    pub fn root_id(&self) -> FolderId {
        FolderId(0)
    }

    /// Get folder by id.
    ///
    /// # Panics
    ///
    /// Panics if the id belongs to another catalog.
    #[must_use]
    pub fn folder(&self, id: FolderId) -> &Folder {
        &self.folders[id.0]
    }

    /// Get example by id.
    ///
    /// # Panics
    ///
    /// Panics if the id belongs to another catalog.
    #[must_use]
    pub fn example(&self, id: ExampleId) -> &Example {
        &self.examples[id.0]
    }

    /// All folders, root first.
    #[must_use]
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// All examples.
    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Look up an example by its public id (e.g. `/Basics/Hello%20World`).
    #[must_use]
    pub fn find_example(&self, id: &str) -> Option<&Example> {
        self.find_example_id(id).map(|id| self.example(id))
    }

    /// Look up an example index by its public id.
    #[must_use]
    pub fn find_example_id(&self, id: &str) -> Option<ExampleId> {
        self.id_index.get(id).copied()
    }

    /// Look up a folder by url.
    #[must_use]
    pub fn find_folder(&self, url: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.url == url)
    }

    /// Subfolder of `folder` with the given name.
    #[must_use]
    pub fn subfolder(&self, folder: FolderId, name: &str) -> Option<FolderId> {
        self.folder(folder)
            .subfolders
            .iter()
            .copied()
            .find(|&child| self.folder(child).name == name)
    }

    /// Example of `folder` with the given name.
    #[must_use]
    pub fn folder_example(&self, folder: FolderId, name: &str) -> Option<ExampleId> {
        self.folder(folder)
            .examples
            .iter()
            .copied()
            .find(|&child| self.example(child).name == name)
    }

    /// Preceding sibling in the parent folder's example sequence.
    #[must_use]
    pub fn previous_example(&self, id: ExampleId) -> Option<ExampleId> {
        self.example(id).previous
    }

    /// Following sibling in the parent folder's example sequence.
    #[must_use]
    pub fn next_example(&self, id: ExampleId) -> Option<ExampleId> {
        let siblings = &self.folder(self.example(id).folder).examples;
        let position = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(position + 1).copied()
    }

    /// Recoverable failures encountered while loading.
    ///
    /// Empty when every manifest and file was loaded.
    #[must_use]
    pub fn issues(&self) -> &[LoadIssue] {
        &self.issues
    }
}

/// Builder for constructing [`Catalog`] instances.
pub(crate) struct CatalogBuilder {
    folders: Vec<Folder>,
    examples: Vec<Example>,
    issues: Vec<LoadIssue>,
}

impl CatalogBuilder {
    pub(crate) fn new() -> Self {
        Self {
            folders: Vec::new(),
            examples: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Add a folder, registering it with its parent.
    ///
    /// The first folder added becomes the root.
    pub(crate) fn add_folder(
        &mut self,
        name: String,
        url: String,
        task_folder: bool,
        parent: Option<FolderId>,
    ) -> FolderId {
        let id = FolderId(self.folders.len());

        self.folders.push(Folder {
            name,
            url,
            task_folder,
            parent,
            examples: Vec::new(),
            subfolders: Vec::new(),
        });

        if let Some(parent) = parent {
            self.folders[parent.0].subfolders.push(id);
        }

        id
    }

    /// Add an example to the folder recorded in [`Example::folder`].
    pub(crate) fn add_example(&mut self, example: Example) -> ExampleId {
        let id = ExampleId(self.examples.len());
        self.folders[example.folder.0].examples.push(id);
        self.examples.push(example);
        id
    }

    pub(crate) fn add_issue(&mut self, issue: LoadIssue) {
        self.issues.push(issue);
    }

    pub(crate) fn build(self) -> Catalog {
        let mut id_index = HashMap::with_capacity(self.examples.len());
        for (i, example) in self.examples.iter().enumerate() {
            id_index.entry(example.id.clone()).or_insert(ExampleId(i));
        }

        Catalog {
            folders: self.folders,
            examples: self.examples,
            id_index,
            issues: self.issues,
        }
    }
}
