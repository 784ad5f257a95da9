//! `webdemo tree` command implementation.

use std::fmt::Write as _;
use std::io::{self, Write as _};

use clap::Args;
use webdemo_examples::Catalog;

use super::CatalogArgs;
use crate::error::CliError;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl TreeArgs {
    /// Execute the tree command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let catalog = self.catalog.load()?;
        write!(io::stdout().lock(), "{}", render_tree(&catalog))?;
        Ok(())
    }
}

/// Render folders and examples as an indented outline.
///
/// Each folder lists its examples before its subfolders, both in manifest
/// order.
fn render_tree(catalog: &Catalog) -> String {
    let mut out = String::new();
    let mut stack = vec![(catalog.root_id(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let folder = catalog.folder(id);
        let indent = "  ".repeat(depth);
        let marker = if folder.task_folder { " [tasks]" } else { "" };
        writeln!(out, "{indent}{}{marker}", folder.url).unwrap();

        for &example_id in folder.examples() {
            let example = catalog.example(example_id);
            writeln!(
                out,
                "{indent}  {} ({} files)",
                example.id,
                example.all_files().count()
            )
            .unwrap();
        }

        for &child in folder.subfolders().iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    out
}
