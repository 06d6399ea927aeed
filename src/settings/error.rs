//! Settings persistence error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while saving settings.
///
/// Loading never fails; a bad file is logged and replaced by defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform exposes no per-user configuration directory.
    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    /// Reading or writing the settings file failed.
    #[error("Settings I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be encoded as JSON.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SettingsError {
    /// Returns a hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::NoConfigDir => "Pass --settings <path> to choose a settings file",
            Self::Io { .. } => "Check that the settings directory is writable",
            Self::Serialize(_) => "Run `pourover settings reset` to restore defaults",
        }
    }
}
