//! Example resolution.
//!
//! An example's file set is the merge of the files its own manifest declares
//! and the common files inherited from every ancestor folder, followed by the
//! conventional `Test`, `Solution` and `Task` files found in the project
//! directory.

use std::path::Path;

use serde::Serialize;

use crate::CatalogLoaderConfig;
use crate::catalog::{ExampleId, FolderId};
use crate::error::{LoadError, LoadIssue};
use crate::file::{FileType, ProjectFile, encode_id, load_default_file, load_project_file};
use crate::manifest::{LocatedDescriptor, ProjectManifest, TaskWindow, read_manifest};

/// A resolved example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Public id: parent folder url plus name, spaces escaped.
    pub id: String,
    pub name: String,
    /// Program arguments, empty when not declared.
    pub args: String,
    /// Run configuration (`confType` of the manifest).
    pub run_configuration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    /// Visible files in editor order.
    pub files: Vec<ProjectFile>,
    pub hidden_files: Vec<ProjectFile>,
    /// Names of non-modifiable files, in load order.
    pub read_only_file_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_windows: Option<Vec<TaskWindow>>,
    /// Rendered help document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_html: Option<String>,
    #[serde(skip)]
    pub(crate) previous: Option<ExampleId>,
    #[serde(skip)]
    pub(crate) folder: FolderId,
}

impl Example {
    /// Folder the example belongs to.
    #[must_use]
    pub fn folder(&self) -> FolderId {
        self.folder
    }

    /// Visible and hidden files.
    pub fn all_files(&self) -> impl Iterator<Item = &ProjectFile> {
        self.files.iter().chain(&self.hidden_files)
    }

    /// Get a visible or hidden file by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&ProjectFile> {
        self.all_files().find(|file| file.name == name)
    }
}

/// Where an example comes from.
pub(crate) struct ExampleSource<'a> {
    pub dir: &'a Path,
    pub name: &'a str,
    /// Url of the containing folder.
    pub parent_url: &'a str,
    /// Common files of the containing folder and its ancestors.
    pub common: &'a [LocatedDescriptor],
    pub folder: FolderId,
}

/// Accumulates an example's files while enforcing unique names.
#[derive(Default)]
struct FileSet {
    files: Vec<ProjectFile>,
    hidden_files: Vec<ProjectFile>,
    read_only_file_names: Vec<String>,
}

impl FileSet {
    fn contains(&self, name: &str) -> bool {
        self.files
            .iter()
            .chain(&self.hidden_files)
            .any(|file| file.name == name)
    }

    fn mark_read_only(&mut self, file: &ProjectFile) {
        if !file.modifiable && !self.read_only_file_names.contains(&file.name) {
            self.read_only_file_names.push(file.name.clone());
        }
    }

    fn push(&mut self, file: ProjectFile) {
        self.mark_read_only(&file);
        if file.hidden {
            self.hidden_files.push(file);
        } else {
            self.files.push(file);
        }
    }

    /// Default files keep their own `modifiable` flag but are never listed
    /// in `read_only_file_names`.
    fn prepend(&mut self, file: ProjectFile) {
        self.files.insert(0, file);
    }
}

/// Resolve one example directory.
///
/// File-level failures are logged, pushed onto `issues` and skipped. Manifest,
/// expected output and help document failures fail the whole example.
pub(crate) fn resolve_example(
    config: &CatalogLoaderConfig,
    source: &ExampleSource<'_>,
    previous: Option<ExampleId>,
    issues: &mut Vec<LoadIssue>,
) -> Result<Example, LoadError> {
    let manifest: ProjectManifest = read_manifest(&source.dir.join(&config.manifest_name))?;
    let id = encode_id(&format!("{}{}", source.parent_url, source.name));

    let expected_output = match (manifest.expected_output, manifest.expected_output_file) {
        (Some(text), _) => Some(text),
        (None, Some(file)) => Some(read_raw(&source.dir.join(file))?),
        (None, None) => None,
    };

    let help_path = source.dir.join(&config.help_file);
    let help_html = if help_path.exists() {
        Some(webdemo_renderer::render_help(&read_raw(&help_path)?))
    } else {
        None
    };

    let own: Vec<LocatedDescriptor> = manifest
        .files
        .into_iter()
        .map(|descriptor| LocatedDescriptor::new(source.dir, descriptor))
        .collect();

    let mut set = FileSet::default();
    for located in own.iter().chain(source.common) {
        let descriptor = &located.descriptor;
        if config.test_version && descriptor.skip_in_test_version {
            continue;
        }
        if !config.test_version
            && FileType::from_manifest(descriptor.file_type.as_deref()) == FileType::Solution
        {
            continue;
        }
        if set.contains(&descriptor.filename) {
            tracing::debug!(example = %id, file = %descriptor.filename, "Skipping duplicate file");
            continue;
        }
        match load_project_file(&located.path, &id, descriptor) {
            Ok(file) => set.push(file),
            Err(error) => record_file_issue(&id, error, issues),
        }
    }

    inject_default_files(config, source.dir, &id, &mut set, issues);

    Ok(Example {
        id,
        name: source.name.to_owned(),
        args: manifest.args,
        run_configuration: manifest.conf_type,
        expected_output,
        files: set.files,
        hidden_files: set.hidden_files,
        read_only_file_names: set.read_only_file_names,
        task_windows: manifest.task_windows,
        help_html,
        previous,
        folder: source.folder,
    })
}

/// Prepend conventional files that exist on disk but were not declared.
///
/// `Test` goes first, then `Solution` (test version) or `Task` is prepended
/// in front of it.
fn inject_default_files(
    config: &CatalogLoaderConfig,
    dir: &Path,
    id: &str,
    set: &mut FileSet,
    issues: &mut Vec<LoadIssue>,
) {
    let defaults = [
        ("Test", FileType::Test),
        if config.test_version {
            ("Solution", FileType::Solution)
        } else {
            ("Task", FileType::Task)
        },
    ];

    for (stem, file_type) in defaults {
        let name = format!("{stem}.{}", config.default_file_extension);
        let path = dir.join(&name);
        if !path.exists() || set.contains(&name) {
            continue;
        }
        match load_default_file(&path, &name, id, file_type) {
            Ok(file) => set.prepend(file),
            Err(error) => record_file_issue(id, error, issues),
        }
    }
}

fn record_file_issue(id: &str, error: LoadError, issues: &mut Vec<LoadIssue>) {
    tracing::warn!(example = %id, error = %error, "Failed to load example file");
    issues.push(LoadIssue {
        location: id.to_owned(),
        error,
    });
}

/// Read a file verbatim.
fn read_raw(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
