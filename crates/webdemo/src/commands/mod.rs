//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod show;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use webdemo_config::{CliSettings, Config, ExamplesConfig};
use webdemo_examples::{Catalog, CatalogLoader, CatalogLoaderConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use show::ShowArgs;
pub(crate) use tree::TreeArgs;

/// Options shared by every command that loads the catalog.
#[derive(Args)]
pub(crate) struct CatalogArgs {
    /// Path to configuration file (default: auto-discover webdemo.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Examples root directory (overrides config).
    #[arg(short, long, env = "WEBDEMO_EXAMPLES_DIR")]
    dir: Option<PathBuf>,

    /// Load the test version: solutions instead of task skeletons (overrides config).
    #[arg(long)]
    test_version: bool,

    /// Enable verbose output (show load timing and per-file warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CatalogArgs {
    /// Resolve configuration and load the catalog.
    pub(crate) fn load(&self) -> Result<Catalog, CliError> {
        let cli_settings = CliSettings {
            examples_dir: self.dir.clone(),
            test_version: self.test_version.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config = ?config.config_path,
            dir = %config.examples_resolved.dir.display(),
            "Configuration loaded"
        );

        let catalog = CatalogLoader::new(loader_config(&config.examples_resolved)).load()?;
        Ok(catalog)
    }
}

/// Map resolved configuration onto loader settings.
fn loader_config(examples: &ExamplesConfig) -> CatalogLoaderConfig {
    CatalogLoaderConfig {
        root_dir: examples.dir.clone(),
        test_version: examples.test_version,
        manifest_name: examples.manifest_name.clone(),
        help_file: examples.help_file.clone(),
        default_file_extension: examples.default_file_extension.clone(),
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_loader_config_copies_examples_config() {
        let examples = ExamplesConfig {
            dir: PathBuf::from("/srv/examples"),
            test_version: true,
            manifest_name: "project.json".to_owned(),
            help_file: "README.md".to_owned(),
            default_file_extension: "java".to_owned(),
        };

        let loader = loader_config(&examples);

        assert_eq!(loader.root_dir, PathBuf::from("/srv/examples"));
        assert!(loader.test_version);
        assert_eq!(loader.manifest_name, "project.json");
        assert_eq!(loader.help_file, "README.md");
        assert_eq!(loader.default_file_extension, "java");
    }
}
