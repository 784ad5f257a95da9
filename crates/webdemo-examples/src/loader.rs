//! Catalog loading from an examples directory.
//!
//! Provides [`CatalogLoader`] for building a [`Catalog`] from a tree of
//! manifests.
//!
//! # Architecture
//!
//! Folders are visited depth-first through an explicit work stack, so deep
//! trees never grow the call stack. Each folder:
//! - appends its declared common files to the list inherited from its parent
//! - resolves its examples in declaration order, chaining `previous` links
//! - pushes its subfolders with the extended common-file list
//!
//! A broken subfolder or example is left out and recorded as a
//! [`LoadIssue`]. Only a missing root directory or an unusable root manifest
//! fails the whole load.
//!
//! # Example
//!
//! ```no_run
//! use webdemo_examples::{CatalogLoader, CatalogLoaderConfig};
//!
//! let catalog = CatalogLoader::new(CatalogLoaderConfig::new("examples")).load()?;
//! for issue in catalog.issues() {
//!     eprintln!("{issue}");
//! }
//! # Ok::<(), webdemo_examples::CatalogError>(())
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::catalog::{Catalog, CatalogBuilder};
use crate::error::{CatalogError, LoadError, LoadIssue};
use crate::example::{ExampleSource, resolve_example};
use crate::file::encode_id;
use crate::folder::PendingFolder;
use crate::manifest::{FolderManifest, LocatedDescriptor, read_manifest};

/// Convert Duration to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Configuration for [`CatalogLoader`].
#[derive(Clone, Debug)]
pub struct CatalogLoaderConfig {
    /// Root directory of the examples tree.
    pub root_dir: PathBuf,
    /// Load the test version (solutions instead of task skeletons).
    pub test_version: bool,
    /// Manifest filename in every folder and project directory.
    pub manifest_name: String,
    /// Help document filename in project directories.
    pub help_file: String,
    /// Extension of the conventional `Test`, `Solution` and `Task` files.
    pub default_file_extension: String,
}

impl CatalogLoaderConfig {
    /// Create a configuration with default file names for `root_dir`.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            test_version: false,
            manifest_name: "manifest.json".to_owned(),
            help_file: "task.md".to_owned(),
            default_file_extension: "kt".to_owned(),
        }
    }
}

/// Builds a [`Catalog`] from an examples directory.
pub struct CatalogLoader {
    config: CatalogLoaderConfig,
}

impl CatalogLoader {
    /// Create a new catalog loader.
    #[must_use]
    pub fn new(config: CatalogLoaderConfig) -> Self {
        Self { config }
    }

    /// Loader configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogLoaderConfig {
        &self.config
    }

    /// Walk the examples tree and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RootNotFound`] if the root directory does not
    /// exist and [`CatalogError::RootManifest`] if its manifest cannot be
    /// read or parsed. Every other failure is recorded in
    /// [`Catalog::issues`].
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let start = Instant::now();
        let root_dir = &self.config.root_dir;
        if !root_dir.is_dir() {
            return Err(CatalogError::RootNotFound(root_dir.clone()));
        }

        let mut builder = CatalogBuilder::new();
        let mut issues = Vec::new();
        let mut stack = vec![PendingFolder::root(root_dir)];

        while let Some(mut pending) = stack.pop() {
            let manifest_path = pending.dir.join(&self.config.manifest_name);
            let manifest: FolderManifest = match read_manifest(&manifest_path) {
                Ok(manifest) => manifest,
                Err(error) if pending.parent.is_none() => {
                    return Err(CatalogError::RootManifest(error));
                }
                Err(error) => {
                    tracing::warn!(folder = %pending.url, error = %error, "Failed to load folder");
                    issues.push(LoadIssue {
                        location: pending.url,
                        error,
                    });
                    continue;
                }
            };

            let mut common = std::mem::take(&mut pending.inherited);
            common.extend(
                manifest
                    .files
                    .into_iter()
                    .map(|descriptor| LocatedDescriptor::new(&pending.dir, descriptor)),
            );

            let folder_id = builder.add_folder(
                pending.name.clone(),
                pending.url.clone(),
                manifest.task_folder,
                pending.parent,
            );

            let mut previous = None;
            let mut seen = HashSet::new();
            for name in &manifest.examples {
                if !seen.insert(name.as_str()) {
                    let location = encode_id(&format!("{}{name}", pending.url));
                    issues.push(duplicate_issue(location, name, &manifest_path));
                    continue;
                }
                let dir = pending.dir.join(name);
                let source = ExampleSource {
                    dir: &dir,
                    name,
                    parent_url: &pending.url,
                    common: &common,
                    folder: folder_id,
                };
                match resolve_example(&self.config, &source, previous, &mut issues) {
                    Ok(example) => previous = Some(builder.add_example(example)),
                    Err(error) => {
                        let location = encode_id(&format!("{}{name}", pending.url));
                        tracing::warn!(example = %location, error = %error, "Failed to load example");
                        issues.push(LoadIssue { location, error });
                    }
                }
            }

            let mut seen = HashSet::new();
            let mut subfolders = Vec::with_capacity(manifest.folders.len());
            for name in &manifest.folders {
                if seen.insert(name.as_str()) {
                    subfolders.push(name);
                } else {
                    let location = format!("{}{name}/", pending.url);
                    issues.push(duplicate_issue(location, name, &manifest_path));
                }
            }

            // Reverse so subfolders pop in declaration order
            for name in subfolders.into_iter().rev() {
                stack.push(pending.child(name, common.clone(), folder_id));
            }
        }

        for issue in issues {
            builder.add_issue(issue);
        }
        let catalog = builder.build();

        tracing::info!(
            root = %root_dir.display(),
            test_version = self.config.test_version,
            folder_count = catalog.folders().len(),
            example_count = catalog.examples().len(),
            issue_count = catalog.issues().len(),
            elapsed_ms = elapsed_ms(start),
            "Catalog loaded"
        );

        Ok(catalog)
    }
}

/// Issue for a repeated manifest entry; the first occurrence is kept.
fn duplicate_issue(location: String, name: &str, manifest: &Path) -> LoadIssue {
    tracing::warn!(entry = %location, "Skipping duplicate manifest entry");
    LoadIssue {
        location,
        error: LoadError::DuplicateName {
            name: name.to_owned(),
            manifest: manifest.to_path_buf(),
        },
    }
}
