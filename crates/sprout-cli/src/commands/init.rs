//! `sprout init` — create a default configuration file.

use std::path::Path;

use chrono::Utc;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Commented example appended to the generated file.
const LAYOUT_EXAMPLE: &str = r#"
# Custom layouts are selected with `sprout new NAME --layout <name>`.
# Directories are created in order, one level at a time; every file's
# folder must be listed in `dirs`.
#
# [layouts.go-service]
# description = "Go service"
# dirs = ["cmd", "internal"]
# files = ["go.mod", "cmd/main.go"]
"#;

/// Create a default Sprout configuration file.
///
/// Writes to `--config` / `SPROUT_CONFIG` when given, else the platform
/// default location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = global.config.unwrap_or_else(AppConfig::config_path);

    if write_default_config(&config_path, args.force)? {
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    } else {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    }

    Ok(())
}

/// Write the default configuration to `path`.
///
/// Returns `false` without touching anything when the file exists and
/// `force` is not set.
fn write_default_config(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| {
        CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        }
    })?;
    let contents = format!(
        "# Sprout configuration, generated {}\n\n{toml}{LAYOUT_EXAMPLE}",
        Utc::now().format("%Y-%m-%d")
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_defaults_into_new_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        assert!(write_default_config(&path, false).unwrap());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Sprout configuration"));
        assert!(written.contains("root_name = \"foo\""));
        assert!(written.contains("# [layouts.go-service]"));
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nkind = \"html\"\n").unwrap();

        assert!(!write_default_config(&path, false).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("html"));
    }

    #[test]
    fn force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "garbage").unwrap();

        assert!(write_default_config(&path, true).unwrap());
        assert!(!std::fs::read_to_string(&path).unwrap().contains("garbage"));
    }
}
