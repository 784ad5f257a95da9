//! CLI error types.

use webdemo_config::ConfigError;
use webdemo_examples::CatalogError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Example not found: {0}")]
    ExampleNotFound(String),

    #[error("Catalog loaded with {0} issue(s)")]
    Issues(usize),
}
