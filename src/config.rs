//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsvp/rsvp.toml`
//! 3. Environment variables: `RSVP_*` prefix
//! 4. `--file` CLI flag (applied by the caller via `with_data_file`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;

/// Default roster filename, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "RSVP.dat";

/// Unified configuration for rsvp.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Roster file path (default: ./RSVP.dat)
    pub data_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified" and inherit from the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
}

/// Get the XDG config directory for rsvp.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsvp").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsvp.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some,
    /// otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay
                .data_file
                .clone()
                .unwrap_or_else(|| self.data_file.clone()),
        }
    }

    /// Apply RSVP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("RSVP"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_file.to_string_lossy().as_ref());
        self.data_file = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/rsvp/rsvp.toml`
    /// 3. Environment variables: `RSVP_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Override the roster file from the CLI flag (highest precedence).
    pub fn with_data_file(mut self, file: PathBuf) -> Self {
        self.data_file = file;
        self.expand_paths();
        self
    }
}

/// Expand environment variables in a path string (`$VAR`, `${VAR}`, `~`).
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overrides_when_default_then_rsvp_dat_in_cwd() {
        assert_eq!(Settings::default().data_file, PathBuf::from("RSVP.dat"));
    }

    #[test]
    fn given_empty_overlay_when_merge_then_base_kept() {
        let base = Settings::default();
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn given_overlay_with_data_file_when_merge_then_overlay_wins() {
        let base = Settings::default();
        let overlay = RawSettings {
            data_file: Some(PathBuf::from("/tmp/party.dat")),
        };
        assert_eq!(
            base.merge_with(&overlay).data_file,
            PathBuf::from("/tmp/party.dat")
        );
    }

    #[test]
    fn given_cli_flag_when_with_data_file_then_replaces_and_expands() {
        let settings = Settings::default().with_data_file(PathBuf::from("/data/RSVP.dat"));
        assert_eq!(settings.data_file, PathBuf::from("/data/RSVP.dat"));
    }

    #[test]
    fn given_toml_content_when_parsed_then_raw_settings_populated() {
        let raw: RawSettings = toml::from_str("data_file = \"guests.dat\"").unwrap();
        assert_eq!(raw.data_file, Some(PathBuf::from("guests.dat")));
    }
}
