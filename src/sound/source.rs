//! Sound source management.
//!
//! A chime is either a synthesized tone (always available) or a sound file
//! chosen by the user. File playback falls back to the built-in tone.

use std::path::{Path, PathBuf};

use super::error::SoundError;

/// Supported audio file extensions.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["aiff", "wav", "mp3", "flac", "ogg"];

/// Pitch of the pour-complete chime.
const POUR_CHIME_HZ: u32 = 880;
const POUR_CHIME_MS: u64 = 250;

/// Pitch of the brew-finished chime.
const FINISH_CHIME_HZ: u32 = 660;
const FINISH_CHIME_MS: u64 = 600;

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk.
    File {
        /// Display name (file stem).
        name: String,
        /// Full path to the sound file.
        path: PathBuf,
    },
    /// A sine tone synthesized at playback time.
    Tone {
        name: String,
        frequency_hz: u32,
        duration_ms: u64,
    },
}

impl SoundSource {
    /// Creates a file source without checking the path.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a file source named after the file stem, checking the extension.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::UnsupportedFormat` if the extension is not one of
    /// [`SUPPORTED_EXTENSIONS`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pourover::sound::SoundSource;
    ///
    /// assert!(SoundSource::file_validated("/tmp/ding.wav").is_ok());
    /// assert!(SoundSource::file_validated("/tmp/notes.txt").is_err());
    /// ```
    pub fn file_validated(path: impl AsRef<Path>) -> Result<Self, SoundError> {
        let path = path.as_ref();
        let supported = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(SoundError::UnsupportedFormat(path.display().to_string()));
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chime".to_string());
        Ok(Self::file(name, path))
    }

    /// Creates a synthesized tone.
    #[must_use]
    pub fn tone(name: impl Into<String>, frequency_hz: u32, duration_ms: u64) -> Self {
        Self::Tone {
            name: name.into(),
            frequency_hz,
            duration_ms,
        }
    }

    /// Short high chime played when a pour completes.
    #[must_use]
    pub fn pour_chime() -> Self {
        Self::tone("pour", POUR_CHIME_HZ, POUR_CHIME_MS)
    }

    /// Longer, lower chime played when the brew finishes.
    #[must_use]
    pub fn finish_chime() -> Self {
        Self::tone("finish", FINISH_CHIME_HZ, FINISH_CHIME_MS)
    }

    /// Returns the name of the sound source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Tone { name, .. } => name,
        }
    }

    /// Returns true if this is a sound file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Returns true if this is a synthesized tone.
    #[must_use]
    pub fn is_tone(&self) -> bool {
        matches!(self, Self::Tone { .. })
    }

    /// Returns the file path if this is a sound file.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Tone { .. } => None,
        }
    }
}
