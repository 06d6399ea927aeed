//! Persisted user settings.
//!
//! The last-used brewing parameters and cue toggles live in a small JSON
//! file under the user's configuration directory:
//!
//! ```text
//! ~/.config/pourover/settings.json      (Linux)
//! ~/Library/Application Support/pourover/settings.json   (macOS)
//! ```
//!
//! Loading is forgiving: a missing or corrupt file yields defaults.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use error::SettingsError;

use crate::types::BrewingParameters;

const APP_DIR: &str = "pourover";
const SETTINGS_FILE: &str = "settings.json";

fn default_true() -> bool {
    true
}

// ============================================================================
// Settings
// ============================================================================

/// Everything remembered between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Last-used brewing parameters.
    #[serde(default)]
    pub parameters: BrewingParameters,

    /// Whether pour and finish chimes play.
    #[serde(default = "default_true")]
    pub sound_enabled: bool,

    /// Whether haptic cues fire.
    #[serde(default = "default_true")]
    pub haptics_enabled: bool,

    /// Optional sound file used instead of the built-in pour chime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chime_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parameters: BrewingParameters::default(),
            sound_enabled: true,
            haptics_enabled: true,
            chime_file: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_parameters(mut self, parameters: BrewingParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns a copy with parameters forced into their valid ranges.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            parameters: self.parameters.clamped(),
            ..self.clone()
        }
    }
}

// ============================================================================
// SettingsStore
// ============================================================================

/// Reads and writes [`Settings`] at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at [`SettingsStore::default_path`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoConfigDir`] if the platform has no
    /// configuration directory.
    pub fn open_default() -> Result<Self, SettingsError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<config dir>/pourover/settings.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoConfigDir`] if the platform has no
    /// configuration directory.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, falling back to defaults on any problem.
    pub fn load(&self) -> Settings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", self.path.display());
                return Settings::default();
            }
            Err(e) => {
                warn!(
                    "Failed to read settings from {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                return Settings::default();
            }
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                debug!("Loaded settings from {}", self.path.display());
                settings.clamped()
            }
            Err(e) => {
                warn!(
                    "Ignoring malformed settings at {}: {}",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Writes `settings` as pretty JSON, creating the parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the directory or file cannot be
    /// written.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Overwrites the file with defaults and returns them.
    ///
    /// # Errors
    ///
    /// Propagates [`SettingsStore::save`] failures.
    pub fn reset(&self) -> Result<Settings, SettingsError> {
        let settings = Settings::default();
        self.save(&settings)?;
        Ok(settings)
    }
}
