//! Timer control error types.

use thiserror::Error;

/// Rejected timer transitions.
///
/// None of these leave the timer in a different state; callers can log and
/// carry on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// `start` while a brew is running or paused.
    #[error("A brew is already in progress")]
    AlreadyActive,

    /// `pause` while not running.
    #[error("The brew timer is not running")]
    NotRunning,

    /// `resume` while not paused.
    #[error("The brew timer is not paused")]
    NotPaused,
}

impl TimerError {
    /// Returns a short hint for the person at the kettle.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::AlreadyActive => "Reset the current brew before starting a new one",
            Self::NotRunning => "Start or resume the brew first",
            Self::NotPaused => "Only a paused brew can be resumed",
        }
    }
}
