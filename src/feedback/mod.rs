//! Pour and finish cues.
//!
//! [`FeedbackDispatcher`] turns [`TimerEvent`]s into a chime and a haptic
//! pulse. Cue failures are logged and dropped; they never reach the timer.

mod haptic;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

pub use haptic::{HapticDriver, HapticError, HapticPattern, MockHaptic, TerminalBell};

use crate::sound::{SoundPlayer, SoundSource};
use crate::timer::TimerEvent;

// ============================================================================
// FeedbackConfig
// ============================================================================

/// Which cues fire, and which sounds they use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub sound_enabled: bool,
    pub haptics_enabled: bool,
    /// Played on every `PourComplete`
    pub pour_chime: SoundSource,
    /// Played once on `Finished`
    pub finish_chime: SoundSource,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            haptics_enabled: true,
            pour_chime: SoundSource::pour_chime(),
            finish_chime: SoundSource::finish_chime(),
        }
    }
}

impl FeedbackConfig {
    #[must_use]
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_pour_chime(mut self, source: SoundSource) -> Self {
        self.pour_chime = source;
        self
    }
}

// ============================================================================
// FeedbackDispatcher
// ============================================================================

/// Routes timer events to the sound player and haptic driver.
pub struct FeedbackDispatcher {
    config: FeedbackConfig,
    sound: Option<Arc<dyn SoundPlayer>>,
    haptic: Option<Arc<dyn HapticDriver>>,
}

impl FeedbackDispatcher {
    /// Creates a dispatcher with no outputs attached.
    #[must_use]
    pub fn new(config: FeedbackConfig) -> Self {
        Self {
            config,
            sound: None,
            haptic: None,
        }
    }

    #[must_use]
    pub fn with_sound_player(mut self, player: Arc<dyn SoundPlayer>) -> Self {
        self.sound = Some(player);
        self
    }

    #[must_use]
    pub fn with_haptic_driver(mut self, driver: Arc<dyn HapticDriver>) -> Self {
        self.haptic = Some(driver);
        self
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Fires the cues for a single event.
    pub fn handle(&self, event: &TimerEvent) {
        match event {
            TimerEvent::PourComplete {
                label,
                target_water_grams,
                ..
            } => {
                debug!(
                    "Pour complete: {} (target {:?} g)",
                    label.as_str(),
                    target_water_grams
                );
                self.chime(&self.config.pour_chime);
                self.pulse(HapticPattern::Pour);
            }
            TimerEvent::Finished => {
                debug!("Brew finished");
                self.chime(&self.config.finish_chime);
                self.pulse(HapticPattern::Finish);
            }
            _ => {}
        }
    }

    /// Consumes events until every sender is dropped.
    pub async fn run(self, mut rx: mpsc::UnboundedReceiver<TimerEvent>) {
        while let Some(event) = rx.recv().await {
            self.handle(&event);
        }
        debug!("Feedback channel closed");
    }

    fn chime(&self, source: &SoundSource) {
        if !self.config.sound_enabled {
            return;
        }
        if let Some(player) = &self.sound {
            if let Err(e) = player.play(source) {
                warn!("Failed to play chime '{}': {}", source.name(), e);
            }
        }
    }

    fn pulse(&self, pattern: HapticPattern) {
        if !self.config.haptics_enabled {
            return;
        }
        if let Some(driver) = &self.haptic {
            if let Err(e) = driver.pulse(pattern) {
                warn!("Failed to deliver haptic cue: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for FeedbackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackDispatcher")
            .field("config", &self.config)
            .field("sound", &self.sound.is_some())
            .field("haptic", &self.haptic.is_some())
            .finish()
    }
}
