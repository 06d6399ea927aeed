//! Real-time driver for [`BrewTimer`].
//!
//! A [`BrewSession`] owns one timer and, while the brew is running, one tick
//! task on a `tokio::time::interval`. The task is held by a [`TickGuard`]; it
//! is acquired on `start`/`resume` and released by dropping the guard on
//! `pause`, `reset`, completion or when the session itself is dropped.
//!
//! Subscribers:
//! - `TimerEvent`s go out on the unbounded channel passed to [`BrewSession::new`]
//! - `TimerState` snapshots are published on a `watch` channel after every change

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, trace};

use super::engine::{BrewTimer, TimerEvent};
use super::error::TimerError;
use crate::types::{BrewPlan, TimerState};

/// Default wall-clock tick period.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

// ============================================================================
// TimerConfig
// ============================================================================

/// Tick source configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Wall-clock period between ticks; each tick advances the brew by the same amount
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl TimerConfig {
    /// Sets the tick period in milliseconds.
    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval_ms = millis;
        self
    }

    /// Tick period, never shorter than one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

// ============================================================================
// Shared
// ============================================================================

/// State shared between the session and its tick task.
#[derive(Clone)]
struct Shared {
    timer: Arc<Mutex<BrewTimer>>,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    state_tx: Arc<watch::Sender<TimerState>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, BrewTimer> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one tick if the guard is still active.
    ///
    /// Returns false once the tick source should stop.
    fn tick(&self, active: &AtomicBool, delta: Duration) -> bool {
        let mut timer = self.lock();
        // Checked under the lock so a stopped guard can never touch a newer run.
        if !active.load(Ordering::SeqCst) || !timer.is_running() {
            return false;
        }
        let events = timer.tick(delta);
        self.publish(&timer, events);
        timer.is_running()
    }

    fn publish(&self, timer: &BrewTimer, events: Vec<TimerEvent>) {
        for event in events {
            trace!(?event, "Timer event");
            if self.event_tx.send(event).is_err() {
                debug!("Timer event receiver dropped");
                break;
            }
        }
        self.state_tx.send_replace(timer.state());
    }
}

// ============================================================================
// TickGuard
// ============================================================================

/// Owns the running tick task; dropping it stops the task.
struct TickGuard {
    active: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl TickGuard {
    fn spawn(shared: Shared, period: Duration) -> Self {
        let active = Arc::new(AtomicBool::new(true));
        let task_active = Arc::clone(&active);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if !shared.tick(&task_active, period) {
                    break;
                }
            }
            debug!("Tick source stopped");
        });

        Self { active, handle }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst) && !self.handle.is_finished()
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        self.handle.abort();
    }
}

// ============================================================================
// BrewSession
// ============================================================================

/// One brew on a real clock.
pub struct BrewSession {
    shared: Shared,
    config: TimerConfig,
    ticker: Option<TickGuard>,
}

impl BrewSession {
    /// Creates an idle session publishing events on `event_tx`.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        let (state_tx, _) = watch::channel(TimerState::default());
        Self {
            shared: Shared {
                timer: Arc::new(Mutex::new(BrewTimer::new())),
                event_tx,
                state_tx: Arc::new(state_tx),
            },
            config,
            ticker: None,
        }
    }

    /// Subscribes to state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.state_tx.subscribe()
    }

    /// Starts `plan` and acquires the tick source.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::AlreadyActive`] if a brew is running or paused.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&mut self, plan: &BrewPlan) -> Result<(), TimerError> {
        let running = {
            let mut timer = self.shared.lock();
            let events = timer.start(plan)?;
            self.shared.publish(&timer, events);
            timer.is_running()
        };
        if running {
            self.spawn_ticker();
        } else {
            self.stop_ticker();
        }
        Ok(())
    }

    /// Pauses the brew and releases the tick source.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotRunning`] if the brew is not running.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        self.stop_ticker();
        let mut timer = self.shared.lock();
        let events = timer.pause()?;
        self.shared.publish(&timer, events);
        Ok(())
    }

    /// Resumes a paused brew and reacquires the tick source.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotPaused`] if the brew is not paused.
    pub fn resume(&mut self) -> Result<(), TimerError> {
        {
            let mut timer = self.shared.lock();
            let events = timer.resume()?;
            self.shared.publish(&timer, events);
        }
        self.spawn_ticker();
        Ok(())
    }

    /// Stops ticking and returns to idle. Idempotent.
    pub fn reset(&mut self) {
        self.stop_ticker();
        let mut timer = self.shared.lock();
        let events = timer.reset();
        if !events.is_empty() {
            self.shared.publish(&timer, events);
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> TimerState {
        self.shared.lock().state()
    }

    /// Returns true while a tick task is live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(TickGuard::is_active)
    }

    fn spawn_ticker(&mut self) {
        self.stop_ticker();
        self.ticker = Some(TickGuard::spawn(
            self.shared.clone(),
            self.config.tick_interval(),
        ));
    }

    /// The single release path for the tick source.
    fn stop_ticker(&mut self) {
        drop(self.ticker.take());
    }
}

impl Drop for BrewSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

// ============================================================================
// Tests
// ============================================================================
