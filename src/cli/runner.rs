//! Interactive brew loop for `pourover brew`.
//!
//! Wires a [`BrewSession`] to the terminal:
//! - state snapshots redraw the progress line
//! - timer events print messages and fire cues
//! - stdin lines `p`, `r` and `q` pause, resume and abort
//! - Ctrl-C aborts

use std::io::BufRead;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::display::Display;
use crate::feedback::FeedbackDispatcher;
use crate::timer::{BrewSession, TimerConfig, TimerEvent};
use crate::types::BrewPlan;

// ============================================================================
// Control
// ============================================================================

/// A keyboard command typed during the brew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Pause,
    Resume,
    /// Toggle between pause and resume (empty line)
    Toggle,
    Quit,
}

impl Control {
    /// Parses one input line; unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" | "pause" => Some(Control::Pause),
            "r" | "resume" => Some(Control::Resume),
            "" => Some(Control::Toggle),
            "q" | "quit" | "stop" => Some(Control::Quit),
            _ => None,
        }
    }
}

/// How a brew ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewOutcome {
    Finished,
    Aborted,
}

/// Reads stdin on a plain thread and forwards parsed commands.
///
/// The thread ends at EOF or when the receiver is dropped.
pub fn spawn_stdin_controls() -> mpsc::UnboundedReceiver<Control> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match Control::parse(&line) {
                Some(control) => {
                    if tx.send(control).is_err() {
                        break;
                    }
                }
                None => debug!("Ignoring input: {:?}", line),
            }
        }
    });
    rx
}

// ============================================================================
// Brew Loop
// ============================================================================

/// Runs `plan` to completion or until aborted.
///
/// # Errors
///
/// Returns an error if the session cannot be started.
pub async fn run_brew(
    plan: &BrewPlan,
    timer_config: TimerConfig,
    feedback: &FeedbackDispatcher,
    mut controls: mpsc::UnboundedReceiver<Control>,
) -> Result<BrewOutcome> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut session = BrewSession::new(timer_config, event_tx);
    let mut state_rx = session.subscribe();

    session.start(plan).context("Failed to start brew")?;

    let mut controls_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let outcome = loop {
        tokio::select! {
            Some(event) = event_rx.recv() => {
                Display::show_event(&event);
                feedback.handle(&event);
                if event == TimerEvent::Finished {
                    break BrewOutcome::Finished;
                }
            }
            Ok(()) = state_rx.changed() => {
                let state = state_rx.borrow_and_update().clone();
                if !state.finished {
                    Display::show_progress(&state, plan);
                }
            }
            control = controls.recv(), if controls_open => {
                match control {
                    Some(Control::Quit) => break BrewOutcome::Aborted,
                    Some(control) => apply_control(&mut session, control),
                    None => {
                        debug!("Input closed, brewing without keyboard control");
                        controls_open = false;
                    }
                }
            }
            result = &mut ctrl_c => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl-C: {}", e);
                }
                break BrewOutcome::Aborted;
            }
        }
    };

    if outcome == BrewOutcome::Aborted {
        session.reset();
        while let Ok(event) = event_rx.try_recv() {
            Display::show_event(&event);
        }
    }

    Ok(outcome)
}

fn apply_control(session: &mut BrewSession, control: Control) {
    let result = match control {
        Control::Pause => session.pause(),
        Control::Resume => session.resume(),
        Control::Toggle => {
            if session.state().running {
                session.pause()
            } else {
                session.resume()
            }
        }
        Control::Quit => Ok(()),
    };

    if let Err(e) = result {
        Display::show_error(&format!("{} ({})", e, e.suggestion()));
    }
}
