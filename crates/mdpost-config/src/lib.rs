//! Configuration management for mdpost.
//!
//! Parses `mdpost.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support `~` and `${VAR}` expansion; an unset variable is a
//! configuration error.
//!
//! Expanded fields:
//! - `paths.input_dir`
//! - `paths.site_root`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the generated docs input directory.
    pub input_dir: Option<PathBuf>,
    /// Override the site root directory.
    pub site_root: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdpost.toml";

/// Default input directory, relative to the config file or working directory.
const DEFAULT_INPUT_DIR: &str = "sdk/docs";

/// Default site root, relative to the config file or working directory.
const DEFAULT_SITE_ROOT: &str = "site";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path configuration (relative strings from TOML).
    #[serde(default)]
    paths: PathsConfigRaw,

    /// Resolved path configuration (set after loading).
    #[serde(skip)]
    pub paths_resolved: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw path configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PathsConfigRaw {
    input_dir: Option<String>,
    site_root: Option<String>,
}

/// Resolved path configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PathsConfig {
    /// Directory containing the generated SDK docs.
    pub input_dir: PathBuf,
    /// Root of the static site tree.
    pub site_root: PathBuf,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., `paths.input_dir`).
        field: String,
        /// Error message (e.g., `${MDPOST_DOCS} not set`).
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdpost.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
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
        if let Some(input_dir) = &settings.input_dir {
            self.paths_resolved.input_dir.clone_from(input_dir);
        }
        if let Some(site_root) = &settings.site_root {
            self.paths_resolved.site_root.clone_from(site_root);
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
            paths: PathsConfigRaw::default(),
            paths_resolved: PathsConfig {
                input_dir: base.join(DEFAULT_INPUT_DIR),
                site_root: base.join(DEFAULT_SITE_ROOT),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref raw) = self.paths.input_dir {
            self.paths.input_dir = Some(expand::expand_path(raw, "paths.input_dir")?);
        }
        if let Some(ref raw) = self.paths.site_root {
            self.paths.site_root = Some(expand::expand_path(raw, "paths.site_root")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths_resolved = PathsConfig {
            input_dir: resolve(self.paths.input_dir.as_deref(), DEFAULT_INPUT_DIR),
            site_root: resolve(self.paths.site_root.as_deref(), DEFAULT_SITE_ROOT),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(
            config.paths_resolved.input_dir,
            PathBuf::from("/test/sdk/docs")
        );
        assert_eq!(config.paths_resolved.site_root, PathBuf::from("/test/site"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.paths.input_dir.is_none());
        assert!(config.paths.site_root.is_none());
    }

    #[test]
    fn test_parse_paths_config() {
        let toml = r#"
[paths]
input_dir = "generated/docs"
site_root = "website"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.paths.input_dir.as_deref(), Some("generated/docs"));
        assert_eq!(config.paths.site_root.as_deref(), Some("website"));
    }

    #[test]
    fn test_resolve_paths_relative_to_config_dir() {
        let toml = r#"
[paths]
input_dir = "generated/docs"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.paths_resolved.input_dir,
            PathBuf::from("/project/generated/docs")
        );
        assert_eq!(
            config.paths_resolved.site_root,
            PathBuf::from("/project/site")
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdpost.toml");
        fs::write(&config_path, "[paths]\nsite_root = \"www\"\n").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();

        assert_eq!(config.paths_resolved.site_root, temp_dir.path().join("www"));
        assert_eq!(
            config.paths_resolved.input_dir,
            temp_dir.path().join("sdk/docs")
        );
        assert_eq!(config.config_path, Some(config_path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/mdpost.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdpost.toml");
        fs::write(&config_path, "[paths\ninput_dir = ").unwrap();

        let result = Config::load(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_cli_settings_override_file_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdpost.toml");
        fs::write(&config_path, "[paths]\ninput_dir = \"from-file\"\n").unwrap();

        let settings = CliSettings {
            input_dir: Some(PathBuf::from("/from-cli")),
            site_root: None,
        };
        let config = Config::load(Some(&config_path), Some(&settings)).unwrap();

        assert_eq!(config.paths_resolved.input_dir, PathBuf::from("/from-cli"));
        assert_eq!(
            config.paths_resolved.site_root,
            temp_dir.path().join("site")
        );
    }

    #[test]
    fn test_unset_env_var_fails_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("mdpost.toml");
        fs::write(
            &config_path,
            "[paths]\ninput_dir = \"${MDPOST_UNSET_TEST_VAR}/docs\"\n",
        )
        .unwrap();

        let result = Config::load(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::EnvVar { .. })));
    }
}
