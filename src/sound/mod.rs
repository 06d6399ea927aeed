//! Chime playback for brew cues.
//!
//! ```text
//! TimerEvent::PourComplete ─┐
//!                           ├─▶ SoundPlayer::play(SoundSource)
//! TimerEvent::Finished ─────┘        │
//!                                    ├─▶ Tone (SineWave, always available)
//!                                    └─▶ File (decoded, falls back to tone)
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use pourover::sound::{RodioSoundPlayer, SoundPlayer, SoundSource};
//!
//! let player = RodioSoundPlayer::new().expect("audio init");
//! player.play(&SoundSource::pour_chime()).expect("playback failed");
//! ```

mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use source::{SoundSource, SUPPORTED_EXTENSIONS};

/// Abstraction over chime playback so the brew loop can run without audio.
pub trait SoundPlayer: Send + Sync {
    /// Plays a sound without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }
}

/// Recording sound player for tests.
#[derive(Debug)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<SoundSource>>,
    should_fail: AtomicBool,
}

impl Default for MockSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent `play` return `SoundError::PlaybackError`.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.calls().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.calls().clone()
    }

    pub fn clear_calls(&self) {
        self.calls().clear();
    }

    fn calls(&self) -> std::sync::MutexGuard<'_, Vec<SoundSource>> {
        self.play_calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("mock failure".to_string()));
        }
        self.calls().push(source.clone());
        Ok(())
    }
}
