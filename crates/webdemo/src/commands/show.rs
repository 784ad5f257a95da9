//! `webdemo show` command implementation.

use std::fmt::Write as _;
use std::io::{self, Write as _};

use clap::Args;
use serde::Serialize;
use webdemo_examples::{Catalog, Example, ExampleId, ProjectFile};

use super::CatalogArgs;
use crate::error::CliError;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Example id, e.g. `/Getting%20Started/Hello`.
    id: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Print the example as JSON.
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let catalog = self.catalog.load()?;
        let id = catalog
            .find_example_id(&self.id)
            .ok_or_else(|| CliError::ExampleNotFound(self.id.clone()))?;
        let view = ExampleView::new(&catalog, id);

        let mut stdout = io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &view)?;
            writeln!(stdout)?;
        } else {
            write!(stdout, "{}", view.render())?;
        }
        Ok(())
    }
}

/// Example together with its sibling links.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExampleView<'a> {
    #[serde(flatten)]
    example: &'a Example,
    previous: Option<&'a str>,
    next: Option<&'a str>,
}

impl<'a> ExampleView<'a> {
    fn new(catalog: &'a Catalog, id: ExampleId) -> Self {
        let sibling_id = move |sibling: Option<ExampleId>| {
            sibling.map(|sibling| catalog.example(sibling).id.as_str())
        };

        Self {
            example: catalog.example(id),
            previous: sibling_id(catalog.previous_example(id)),
            next: sibling_id(catalog.next_example(id)),
        }
    }

    /// Human-readable summary.
    fn render(&self) -> String {
        let example = self.example;
        let mut out = String::new();

        writeln!(out, "id: {}", example.id).unwrap();
        writeln!(out, "name: {}", example.name).unwrap();
        writeln!(out, "run configuration: {}", example.run_configuration).unwrap();
        if !example.args.is_empty() {
            writeln!(out, "args: {}", example.args).unwrap();
        }
        writeln!(out, "previous: {}", self.previous.unwrap_or("-")).unwrap();
        writeln!(out, "next: {}", self.next.unwrap_or("-")).unwrap();
        if example.expected_output.is_some() {
            writeln!(out, "expected output: yes").unwrap();
        }
        if example.help_html.is_some() {
            writeln!(out, "help: yes").unwrap();
        }

        write_files(&mut out, "files", &example.files);
        if !example.hidden_files.is_empty() {
            write_files(&mut out, "hidden files", &example.hidden_files);
        }

        out
    }
}

fn write_files(out: &mut String, title: &str, files: &[ProjectFile]) {
    writeln!(out, "{title}:").unwrap();
    for file in files {
        let access = if file.modifiable { "" } else { ", read-only" };
        writeln!(out, "  {} ({}{access})", file.name, file.file_type.as_str()).unwrap();
    }
}
