//! Configuration management for the examples catalog.
//!
//! Parses `webdemo.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `examples.dir` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override examples root directory.
    pub examples_dir: Option<PathBuf>,
    /// Override test-version flag.
    pub test_version: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "webdemo.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Examples configuration (dir is a relative string from TOML).
    examples: ExamplesConfigRaw,

    /// Resolved examples configuration (set after loading).
    #[serde(skip)]
    pub examples_resolved: ExamplesConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw examples configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExamplesConfigRaw {
    dir: Option<String>,
    test_version: Option<bool>,
    manifest_name: Option<String>,
    help_file: Option<String>,
    default_file_extension: Option<String>,
}

/// Resolved examples configuration with an absolute root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplesConfig {
    /// Root directory of the examples tree.
    pub dir: PathBuf,
    /// Resolve the grading (solution) view instead of the learner (task) view.
    pub test_version: bool,
    /// Manifest filename looked up in every folder and project directory.
    pub manifest_name: String,
    /// Help document filename looked up in every project directory.
    pub help_file: String,
    /// Extension of the conventional `Test`, `Solution` and `Task` files.
    pub default_file_extension: String,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("examples"),
            test_version: false,
            manifest_name: "manifest.json".to_owned(),
            help_file: "task.md".to_owned(),
            default_file_extension: "kt".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`examples.dir`").
        field: String,
        /// Error message (e.g., "${`EXAMPLES_HOME`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string field to be a bare file name (no path separators).
fn require_file_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.contains('/') || value.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "{field} must be a file name, not a path"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `webdemo.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(dir) = &settings.examples_dir {
            self.examples_resolved.dir.clone_from(dir);
        }
        if let Some(test_version) = settings.test_version {
            self.examples_resolved.test_version = test_version;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            examples: ExamplesConfigRaw::default(),
            examples_resolved: ExamplesConfig {
                dir: base.join("examples"),
                ..ExamplesConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let examples = &self.examples_resolved;
        require_non_empty(&examples.manifest_name, "examples.manifest_name")?;
        require_file_name(&examples.manifest_name, "examples.manifest_name")?;
        require_non_empty(&examples.help_file, "examples.help_file")?;
        require_file_name(&examples.help_file, "examples.help_file")?;
        require_non_empty(
            &examples.default_file_extension,
            "examples.default_file_extension",
        )?;
        if examples.default_file_extension.contains('.') {
            return Err(ConfigError::Validation(
                "examples.default_file_extension must not contain '.'".to_owned(),
            ));
        }
        require_file_name(
            &examples.default_file_extension,
            "examples.default_file_extension",
        )?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.examples.dir {
            self.examples.dir = Some(expand::expand_env(dir, "examples.dir")?);
        }
        Ok(())
    }

    /// Resolve raw values against defaults and the config file directory.
    fn resolve(&mut self, config_dir: &Path) {
        let defaults = ExamplesConfig::default();
        let raw = &self.examples;

        self.examples_resolved = ExamplesConfig {
            dir: config_dir.join(raw.dir.as_deref().unwrap_or("examples")),
            test_version: raw.test_version.unwrap_or(defaults.test_version),
            manifest_name: raw.manifest_name.clone().unwrap_or(defaults.manifest_name),
            help_file: raw.help_file.clone().unwrap_or(defaults.help_file),
            default_file_extension: raw
                .default_file_extension
                .clone()
                .unwrap_or(defaults.default_file_extension),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        let examples = &config.examples_resolved;
        assert_eq!(examples.dir, PathBuf::from("/test/examples"));
        assert!(!examples.test_version);
        assert_eq!(examples.manifest_name, "manifest.json");
        assert_eq!(examples.help_file, "task.md");
        assert_eq!(examples.default_file_extension, "kt");
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve(Path::new("/project"));
        assert_eq!(
            config.examples_resolved.dir,
            PathBuf::from("/project/examples")
        );
        assert_eq!(config.examples_resolved.manifest_name, "manifest.json");
    }

    #[test]
    fn test_parse_examples_config() {
        let toml = r#"
[examples]
dir = "content/examples"
test_version = true
manifest_name = "project.json"
help_file = "README.md"
default_file_extension = "java"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));

        assert_eq!(
            config.examples_resolved,
            ExamplesConfig {
                dir: PathBuf::from("/project/content/examples"),
                test_version: true,
                manifest_name: "project.json".to_owned(),
                help_file: "README.md".to_owned(),
                default_file_extension: "java".to_owned(),
            }
        );
    }

    #[test]
    fn test_absolute_dir_kept() {
        let toml = r#"
[examples]
dir = "/srv/examples"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));
        assert_eq!(config.examples_resolved.dir, PathBuf::from("/srv/examples"));
    }

    #[test]
    fn test_validate_empty_manifest_name() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.examples_resolved.manifest_name = String::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("examples.manifest_name"));
    }

    #[test]
    fn test_validate_help_file_with_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.examples_resolved.help_file = "docs/task.md".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("examples.help_file"));
    }

    #[test]
    fn test_validate_extension_with_dot() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.examples_resolved.default_file_extension = ".kt".to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_file_extension"));
    }

    #[test]
    fn test_apply_cli_settings_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            examples_dir: Some(PathBuf::from("/custom/examples")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.examples_resolved.dir,
            PathBuf::from("/custom/examples")
        );
        assert!(!config.examples_resolved.test_version); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_test_version() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            test_version: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(config.examples_resolved.test_version);
        assert_eq!(
            config.examples_resolved.dir,
            PathBuf::from("/test/examples")
        );
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/webdemo.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("webdemo.toml");
        std::fs::write(
            &config_path,
            "[examples]\ndir = \"samples\"\ntest_version = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();

        assert_eq!(config.examples_resolved.dir, temp_dir.path().join("samples"));
        assert!(config.examples_resolved.test_version);
        assert_eq!(config.config_path, Some(config_path));
    }

    #[test]
    fn test_load_from_file_cli_overrides_win() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("webdemo.toml");
        std::fs::write(&config_path, "[examples]\ntest_version = true\n").unwrap();

        let overrides = CliSettings {
            test_version: Some(false),
            ..Default::default()
        };
        let config = Config::load(Some(&config_path), Some(&overrides)).unwrap();

        assert!(!config.examples_resolved.test_version);
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("webdemo.toml");
        std::fs::write(&config_path, "[examples\n").unwrap();

        let result = Config::load(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
