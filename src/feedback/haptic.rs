//! Haptic cue drivers.
//!
//! A terminal has no vibration motor, so the stock driver rings the terminal
//! bell. Drivers are trait objects so tests can count pulses.

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::debug;

/// Errors raised by a haptic driver.
#[derive(Debug, Error)]
pub enum HapticError {
    #[error("Haptic device not available: {0}")]
    Unavailable(String),

    #[error("Failed to write haptic cue: {0}")]
    Io(#[from] std::io::Error),
}

/// Shape of a haptic cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// Single short pulse at the end of a pour
    Pour,
    /// Double pulse when the brew finishes
    Finish,
}

impl HapticPattern {
    /// Number of pulses in the pattern.
    #[must_use]
    pub fn pulses(self) -> usize {
        match self {
            HapticPattern::Pour => 1,
            HapticPattern::Finish => 2,
        }
    }
}

/// Something that can deliver a physical or audible nudge.
pub trait HapticDriver: Send + Sync {
    /// Delivers `pattern` without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the cue could not be delivered.
    fn pulse(&self, pattern: HapticPattern) -> Result<(), HapticError>;
}

// ============================================================================
// TerminalBell
// ============================================================================

/// Rings the terminal bell (BEL) on stderr once per pulse.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl TerminalBell {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ring(&self, out: &mut impl Write, pattern: HapticPattern) -> Result<(), HapticError> {
        for _ in 0..pattern.pulses() {
            out.write_all(b"\x07")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl HapticDriver for TerminalBell {
    fn pulse(&self, pattern: HapticPattern) -> Result<(), HapticError> {
        debug!("Ringing terminal bell: {:?}", pattern);
        self.ring(&mut std::io::stderr().lock(), pattern)
    }
}

// ============================================================================
// MockHaptic
// ============================================================================

/// Recording haptic driver for tests.
#[derive(Debug, Default)]
pub struct MockHaptic {
    pulses: Mutex<Vec<HapticPattern>>,
    pulse_count: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockHaptic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of successful `pulse` calls.
    #[must_use]
    pub fn pulse_count(&self) -> usize {
        self.pulse_count.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn patterns(&self) -> Vec<HapticPattern> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HapticDriver for MockHaptic {
    fn pulse(&self, pattern: HapticPattern) -> Result<(), HapticError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(HapticError::Unavailable("mock failure".to_string()));
        }
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(pattern);
        self.pulse_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
