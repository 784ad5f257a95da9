//! Examples catalog for the web demo.
//!
//! Walks a directory tree of JSON manifests and builds an immutable
//! [`Catalog`] of folders and examples. Folders share common files with every
//! example below them; each example merges those with its own files, the
//! conventional `Test`/`Solution`/`Task` files and an optional rendered help
//! document.
//!
//! # Quick Start
//!
//! ```no_run
//! use webdemo_examples::{CatalogLoader, CatalogLoaderConfig};
//!
//! let config = CatalogLoaderConfig {
//!     test_version: true,
//!     ..CatalogLoaderConfig::new("examples")
//! };
//! let catalog = CatalogLoader::new(config).load()?;
//!
//! if let Some(example) = catalog.find_example("/Getting%20Started/Hello") {
//!     for file in &example.files {
//!         println!("{} ({:?})", file.name, file.file_type);
//!     }
//! }
//! # Ok::<(), webdemo_examples::CatalogError>(())
//! ```

mod catalog;
mod error;
mod example;
mod file;
mod folder;
mod loader;
mod manifest;

pub use catalog::{Catalog, ExampleId, FolderId};
pub use error::{CatalogError, LoadError, LoadIssue};
pub use example::Example;
pub use file::{FileType, ProjectFile, encode_id, normalize_line_endings, public_id};
pub use folder::Folder;
pub use loader::{CatalogLoader, CatalogLoaderConfig};
pub use manifest::TaskWindow;
