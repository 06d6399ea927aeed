//! Chime player backed by rodio.
//!
//! Tones are synthesized with `rodio::source::SineWave`; files are decoded
//! with `rodio::Decoder` and fall back to the matching tone when they cannot
//! be played.
//!
//! The output stream is not `Send`, so it lives on a dedicated audio thread
//! for as long as the player exists. The player keeps only the stream handle.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::SoundSource;

/// Output gain applied to synthesized tones.
const TONE_GAIN: f32 = 0.25;

/// A sound player that uses rodio for audio playback.
///
/// Playback is non-blocking; each chime is appended to a detached sink.
pub struct RodioSoundPlayer {
    stream_handle: OutputStreamHandle,
    /// Dropping this lets the audio thread close the output stream.
    _shutdown: mpsc::Sender<()>,
    /// Tone used when a sound file cannot be played.
    fallback: SoundSource,
}

impl RodioSoundPlayer {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (handle_tx, handle_rx) = mpsc::sync_channel(1);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        thread::Builder::new()
            .name("pourover-audio".to_string())
            .spawn(move || match OutputStream::try_default() {
                Ok((stream, handle)) => {
                    if handle_tx.send(Ok(handle)).is_ok() {
                        // Blocks until the player is dropped.
                        let _ = shutdown_rx.recv();
                    }
                    drop(stream);
                    debug!("Audio output stream closed");
                }
                Err(e) => {
                    let _ = handle_tx.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
                }
            })
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        let stream_handle = handle_rx
            .recv()
            .map_err(|e| SoundError::StreamError(e.to_string()))??;

        debug!("Audio output stream initialized");

        Ok(Self {
            stream_handle,
            _shutdown: shutdown_tx,
            fallback: SoundSource::pour_chime(),
        })
    }

    /// Sets the tone played when a sound file fails.
    #[must_use]
    pub fn with_fallback(mut self, fallback: SoundSource) -> Self {
        self.fallback = fallback;
        self
    }

    /// Plays a sound from the given source.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink cannot be created, or if a file
    /// fails and the fallback tone fails as well.
    pub fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        match source {
            SoundSource::File { name, path } => {
                debug!("Playing sound file: {}", name);
                match self.play_file(path) {
                    Ok(()) => Ok(()),
                    Err(e) if e.should_fallback_to_tone() => {
                        warn!("Failed to play '{}': {}, falling back to tone", name, e);
                        self.play_fallback()
                    }
                    Err(e) => Err(e),
                }
            }
            SoundSource::Tone {
                name,
                frequency_hz,
                duration_ms,
            } => {
                debug!("Playing tone '{}' at {} Hz", name, frequency_hz);
                self.play_tone(*frequency_hz, *duration_ms)
            }
        }
    }

    fn play_file(&self, path: &Path) -> Result<(), SoundError> {
        let file = File::open(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| SoundError::DecodeError(e.to_string()))?;

        self.append(decoder)
    }

    fn play_fallback(&self) -> Result<(), SoundError> {
        match &self.fallback {
            SoundSource::Tone {
                frequency_hz,
                duration_ms,
                ..
            } => self.play_tone(*frequency_hz, *duration_ms),
            SoundSource::File { .. } => {
                let chime = SoundSource::pour_chime();
                self.play(&chime)
            }
        }
    }

    fn play_tone(&self, frequency_hz: u32, duration_ms: u64) -> Result<(), SoundError> {
        let tone = SineWave::new(frequency_hz as f32)
            .take_duration(Duration::from_millis(duration_ms))
            .amplify(TONE_GAIN);
        self.append(tone)
    }

    fn append<S>(&self, source: S) -> Result<(), SoundError>
    where
        S: Source + Send + 'static,
        S::Item: rodio::Sample + Send,
        f32: rodio::cpal::FromSample<S::Item>,
    {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        sink.append(source);
        sink.detach();

        Ok(())
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// A warning is logged when the device cannot be opened; brewing continues
/// without chimes.
#[must_use]
pub fn try_create_player() -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new() {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, chimes disabled: {}", e);
            None
        }
    }
}
