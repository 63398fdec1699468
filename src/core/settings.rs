//! core::settings
//!
//! Settings for the `gitbind` binary itself (not git configuration).
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITBIND_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitbind/config.toml`
//! 3. `~/.gitbind/config.toml`
//!
//! # Precedence
//!
//! Defaults, then the settings file, then CLI flags (applied by the caller).
//!
//! # Example
//!
//! ```toml
//! repo = "/home/me/src/project"
//! bare = false
//! debug = false
//! value_type = "string"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::value::ValueKind;

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV: &str = "GITBIND_CONFIG";

/// Errors from loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid settings value: {0}")]
    InvalidValue(String),
}

/// Settings file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Repository used when `--repo` is not given
    pub repo: Option<PathBuf>,

    /// Default for `init --bare`
    pub bare: Option<bool>,

    /// Enable debug output by default
    pub debug: Option<bool>,

    /// Default `--type` for `get` and `set`
    pub value_type: Option<ValueKind>,
}

/// Settings plus the file they came from.
#[derive(Debug, Default)]
pub struct SettingsLoadResult {
    pub settings: Settings,
    /// `None` when no file was found and defaults are in effect
    pub loaded_from: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the standard locations.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<SettingsLoadResult, SettingsError> {
        let explicit = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        match locate(explicit, xdg, dirs::home_dir()) {
            Some(path) => {
                let settings = Self::load_from(&path)?;
                Ok(SettingsLoadResult {
                    settings,
                    loaded_from: Some(path),
                })
            }
            None => Ok(SettingsLoadResult::default()),
        }
    }

    /// Read, parse and validate one settings file.
    pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| SettingsError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(repo) = &self.repo {
            if repo.as_os_str().is_empty() {
                return Err(SettingsError::InvalidValue(
                    "repo must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Default bare flag for `init`. Defaults to `false`.
    pub fn bare(&self) -> bool {
        self.bare.unwrap_or(false)
    }

    /// Whether debug output is on by default. Defaults to `false`.
    pub fn debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Default value type for `get`/`set`. Defaults to string.
    pub fn value_type(&self) -> ValueKind {
        self.value_type.unwrap_or_default()
    }
}

/// Pick the settings file from the candidate locations.
fn locate(
    explicit: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    let candidates = [
        explicit,
        xdg_config_home.map(|p| p.join("gitbind/config.toml")),
        home.map(|p| p.join(".gitbind/config.toml")),
    ];
    candidates.into_iter().flatten().find(|p| p.exists())
}
