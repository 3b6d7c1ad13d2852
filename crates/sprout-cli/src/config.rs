//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPROUT_<SECTION>__<KEY>`, e.g.
//!    `SPROUT_SCAFFOLD__GIT=false`
//! 3. Config file: `--config` / `SPROUT_CONFIG`, else [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use sprout_core::domain::Blueprint;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Scaffold behaviour switches.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// User-defined layouts, keyed by name.
    pub layouts: BTreeMap<String, LayoutConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Root directory name when `sprout new` gets no NAME.
    pub root_name: String,
    /// Kind or layout used when neither `--kind` nor `--layout` is given.
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Run `git init` after creating the skeleton.
    pub git: bool,
    /// Create `.gitignore` and `README.md` after a successful `git init`.
    pub baseline_files: bool,
    /// Exit non-zero when any path fails.
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

/// One `[layouts.<name>]` table. Both keys are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            root_name: "foo".into(),
            kind: "terraform".into(),
        }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            git: true,
            baseline_files: false,
            strict: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl LayoutConfig {
    pub fn to_blueprint(&self, name: &str) -> Blueprint {
        Blueprint::new(name)
            .with_description(self.description.clone())
            .with_directories(self.dirs.iter().map(PathBuf::from))
            .with_files(self.files.iter().map(PathBuf::from))
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `SPROUT_*`.
    ///
    /// `config_file` is the path the user passed via `--config` (or
    /// `SPROUT_CONFIG`); it must exist. Without it the default location is
    /// read if present.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Environment::with_prefix("SPROUT"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to read {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

        settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid configuration in {}: {e}", path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Custom layouts as blueprints, in name order.
    pub fn layout_blueprints(&self) -> Vec<Blueprint> {
        self.layouts
            .iter()
            .map(|(name, layout)| layout.to_blueprint(name))
            .collect()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sprout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "sprout", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sprout.toml"))
    }
}
