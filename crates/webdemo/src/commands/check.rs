//! `webdemo check` command implementation.

use clap::Args;

use super::CatalogArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Exit with an error when any folder, example or file failed to load.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, or in strict mode
    /// if it loaded with issues.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let catalog = self.catalog.load()?;

        output.catalog_summary(&catalog);

        let issues = catalog.issues();
        if issues.is_empty() {
            output.success("No load issues");
            return Ok(());
        }

        output.separator();
        for issue in issues {
            output.issue(issue);
        }
        output.separator();

        if self.strict {
            return Err(CliError::Issues(issues.len()));
        }
        output.warning(&format!("{} load issue(s)", issues.len()));
        Ok(())
    }
}
