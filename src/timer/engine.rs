//! Brew timer state machine.
//!
//! This module provides the pure core of the brew timer:
//! - State transitions (Idle → Running ⇄ Paused → Finished)
//! - `tick(delta)` advancing elapsed time and deriving the current step
//! - Edge-triggered step/pour completion events returned from each call
//! - Point-in-time remaining-time and progress queries
//!
//! Nothing here touches a clock. [`super::BrewSession`] drives `tick` from a
//! tokio interval; tests drive it directly.

use std::time::Duration;

use tracing::debug;

use super::error::TimerError;
use crate::types::{BrewPlan, BrewStep, StepKind, StepLabel, TimerPhase, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Events produced by timer transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A brew started
    Started {
        /// Number of steps in the brew
        step_count: usize,
    },
    /// The step at `index` ran to its end time
    StepCompleted {
        index: usize,
        label: StepLabel,
        kind: StepKind,
    },
    /// A pour step finished; drives the chime and haptic pulse
    PourComplete {
        index: usize,
        label: StepLabel,
        /// Water that should now be in the vessel
        target_water_grams: Option<u32>,
    },
    /// Timer paused
    Paused,
    /// Timer resumed
    Resumed,
    /// Timer reset to idle
    Reset,
    /// Elapsed time reached the total duration
    Finished,
}

impl TimerEvent {
    /// Returns true for events crossing a step boundary.
    pub fn is_step_completed(&self) -> bool {
        matches!(self, TimerEvent::StepCompleted { .. })
    }

    /// Returns true for pour completion events.
    pub fn is_pour_complete(&self) -> bool {
        matches!(self, TimerEvent::PourComplete { .. })
    }
}

// ============================================================================
// BrewTimer
// ============================================================================

/// Single-timeline countdown over a fixed list of brew steps.
///
/// Elapsed time is kept in whole milliseconds so repeated 0.1 s ticks do not
/// accumulate rounding error.
#[derive(Debug, Clone, Default)]
pub struct BrewTimer {
    steps: Vec<BrewStep>,
    /// Cumulative end time of each step
    end_times_ms: Vec<u64>,
    elapsed_ms: u64,
    current_step_index: usize,
    phase: TimerPhase,
}

impl BrewTimer {
    /// Creates an idle timer with no plan loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `plan` and starts counting from zero.
    ///
    /// A plan with zero total duration finishes immediately.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::AlreadyActive`] if a brew is running or paused.
    pub fn start(&mut self, plan: &BrewPlan) -> Result<Vec<TimerEvent>, TimerError> {
        self.start_steps(plan.steps.clone())
    }

    /// Starts counting through an arbitrary step sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::AlreadyActive`] if a brew is running or paused.
    pub fn start_steps(&mut self, steps: Vec<BrewStep>) -> Result<Vec<TimerEvent>, TimerError> {
        if matches!(self.phase, TimerPhase::Running | TimerPhase::Paused) {
            return Err(TimerError::AlreadyActive);
        }

        self.end_times_ms = steps
            .iter()
            .scan(0u64, |end, step| {
                *end = end.saturating_add(seconds_to_millis(step.duration_seconds));
                Some(*end)
            })
            .collect();
        self.steps = steps;
        self.elapsed_ms = 0;
        self.current_step_index = 0;
        self.phase = TimerPhase::Running;

        debug!(
            steps = self.steps.len(),
            total_ms = self.total_ms(),
            "Brew timer started"
        );

        let mut events = vec![TimerEvent::Started {
            step_count: self.steps.len(),
        }];
        // Zero-length brews have nothing to count.
        events.extend(self.tick(Duration::ZERO));
        Ok(events)
    }

    /// Pauses the timer, freezing elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotRunning`] if the timer is not running.
    pub fn pause(&mut self) -> Result<Vec<TimerEvent>, TimerError> {
        if self.phase != TimerPhase::Running {
            return Err(TimerError::NotRunning);
        }
        self.phase = TimerPhase::Paused;
        debug!(elapsed_ms = self.elapsed_ms, "Brew timer paused");
        Ok(vec![TimerEvent::Paused])
    }

    /// Resumes a paused timer from the frozen elapsed time.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotPaused`] if the timer is not paused.
    pub fn resume(&mut self) -> Result<Vec<TimerEvent>, TimerError> {
        if self.phase != TimerPhase::Paused {
            return Err(TimerError::NotPaused);
        }
        self.phase = TimerPhase::Running;
        debug!(elapsed_ms = self.elapsed_ms, "Brew timer resumed");
        Ok(vec![TimerEvent::Resumed])
    }

    /// Returns to idle and unloads the plan.
    ///
    /// Safe to call any number of times; an idle timer yields no event.
    pub fn reset(&mut self) -> Vec<TimerEvent> {
        if self.phase == TimerPhase::Idle {
            return Vec::new();
        }
        *self = Self::default();
        debug!("Brew timer reset");
        vec![TimerEvent::Reset]
    }

    /// Advances elapsed time by `delta` while running.
    ///
    /// Returns one `StepCompleted` per boundary crossed (plus `PourComplete`
    /// for pour steps), in step order, and `Finished` once the total duration
    /// is reached. Ticks that stay inside the current step return nothing.
    ///
    /// The last step still completes when the brew finishes, so a plan that
    /// ends in a pour fires its `PourComplete` with the index left pinned.
    pub fn tick(&mut self, delta: Duration) -> Vec<TimerEvent> {
        if self.phase != TimerPhase::Running {
            return Vec::new();
        }

        let delta_ms = u64::try_from(delta.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        let previous = self.current_step_index;
        let finished = self.elapsed_ms >= self.total_ms();
        let next = self.index_at(self.elapsed_ms);
        // The final step completes with the brew even though the index stays pinned.
        let completed_until = if finished { self.steps.len() } else { next };

        let mut events = Vec::new();
        for index in previous..completed_until {
            let step = &self.steps[index];
            events.push(TimerEvent::StepCompleted {
                index,
                label: step.label,
                kind: step.kind,
            });
            if step.kind == StepKind::Pour {
                events.push(TimerEvent::PourComplete {
                    index,
                    label: step.label,
                    target_water_grams: step.target_water_grams,
                });
            }
        }
        self.current_step_index = next;

        if finished {
            self.phase = TimerPhase::Finished;
            debug!(elapsed_ms = self.elapsed_ms, "Brew finished");
            events.push(TimerEvent::Finished);
        }

        events
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Current phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Returns true while the tick source should be advancing the timer.
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    /// Returns true once the brew has run to completion.
    pub fn is_finished(&self) -> bool {
        self.phase == TimerPhase::Finished
    }

    /// Loaded steps (empty while idle).
    pub fn steps(&self) -> &[BrewStep] {
        &self.steps
    }

    /// Index of the step in progress; pinned to the last step once finished.
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The step in progress, if a plan is loaded.
    pub fn current_step(&self) -> Option<&BrewStep> {
        self.steps.get(self.current_step_index)
    }

    /// Seconds since the brew started.
    pub fn elapsed_seconds(&self) -> f64 {
        millis_to_seconds(self.elapsed_ms)
    }

    /// Total brew length in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        millis_to_seconds(self.total_ms())
    }

    /// `max(0, total - elapsed)` in seconds.
    pub fn time_remaining_total(&self) -> f64 {
        millis_to_seconds(self.total_ms().saturating_sub(self.elapsed_ms))
    }

    /// Whole seconds left in the current step, rounded up for display.
    pub fn current_step_time_remaining(&self) -> u32 {
        let Some(&end) = self.end_times_ms.get(self.current_step_index) else {
            return 0;
        };
        let remaining_ms = end.saturating_sub(self.elapsed_ms);
        u32::try_from(remaining_ms.div_ceil(1000)).unwrap_or(u32::MAX)
    }

    /// Progress through the current step, 0-100.
    ///
    /// A zero-length step reports 100 once reached.
    pub fn current_step_progress_percent(&self) -> f64 {
        let Some(&end) = self.end_times_ms.get(self.current_step_index) else {
            return 0.0;
        };
        let start = self.step_start_ms(self.current_step_index);
        let length = end - start;
        if length == 0 {
            return 100.0;
        }
        let within = self.elapsed_ms.saturating_sub(start) as f64;
        (within / length as f64 * 100.0).min(100.0)
    }

    /// Snapshot for tick subscribers.
    pub fn state(&self) -> TimerState {
        TimerState {
            phase: self.phase,
            elapsed_seconds: self.elapsed_seconds(),
            current_step_index: self.current_step_index,
            running: self.is_running(),
            finished: self.is_finished(),
            step_remaining_seconds: self.current_step_time_remaining(),
            total_remaining_seconds: self.time_remaining_total(),
            step_progress_percent: self.current_step_progress_percent(),
        }
    }

    fn total_ms(&self) -> u64 {
        self.end_times_ms.last().copied().unwrap_or(0)
    }

    fn step_start_ms(&self, index: usize) -> u64 {
        match index {
            0 => 0,
            i => self.end_times_ms[i - 1],
        }
    }

    /// First step whose end time is past `elapsed_ms`, else the last step.
    fn index_at(&self, elapsed_ms: u64) -> usize {
        self.end_times_ms
            .iter()
            .position(|&end| end > elapsed_ms)
            .unwrap_or_else(|| self.steps.len().saturating_sub(1))
    }
}

fn seconds_to_millis(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

fn millis_to_seconds(millis: u64) -> f64 {
    millis as f64 / 1000.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::calculate_brew_plan;
    use crate::types::BrewingParameters;

    fn default_plan() -> BrewPlan {
        // 30 + 16 + 30 + 24 + 45 = 145 s
        calculate_brew_plan(&BrewingParameters::default())
    }

    fn started_timer() -> BrewTimer {
        let mut timer = BrewTimer::new();
        timer.start(&default_plan()).unwrap();
        timer
    }

    /// Ticks `count` times by `step_ms`, collecting every event.
    fn tick_n(timer: &mut BrewTimer, count: usize, step_ms: u64) -> Vec<TimerEvent> {
        (0..count)
            .flat_map(|_| timer.tick(Duration::from_millis(step_ms)))
            .collect()
    }

    /// Runs the default plan to completion at a given tick size.
    fn run_to_end(step_ms: u64) -> Vec<TimerEvent> {
        let mut timer = started_timer();
        let mut events = Vec::new();
        while !timer.is_finished() {
            events.extend(timer.tick(Duration::from_millis(step_ms)));
        }
        events
    }

    // ------------------------------------------------------------------------
    // TimerEvent Tests
    // ------------------------------------------------------------------------

    mod timer_event_tests {
        use super::*;

        #[test]
        fn test_predicates() {
            let completed = TimerEvent::StepCompleted {
                index: 0,
                label: StepLabel::Bloom,
                kind: StepKind::Pour,
            };
            let pour = TimerEvent::PourComplete {
                index: 0,
                label: StepLabel::Bloom,
                target_water_grams: Some(30),
            };

            assert!(completed.is_step_completed());
            assert!(!completed.is_pour_complete());
            assert!(pour.is_pour_complete());
            assert!(!TimerEvent::Finished.is_step_completed());
        }

        #[test]
        fn test_event_debug() {
            assert_eq!(format!("{:?}", TimerEvent::Paused), "Paused");
        }
    }

    // ------------------------------------------------------------------------
    // Transition Tests
    // ------------------------------------------------------------------------

    mod transition_tests {
        use super::*;

        #[test]
        fn test_new_timer_is_idle() {
            let timer = BrewTimer::new();

            assert_eq!(timer.phase(), TimerPhase::Idle);
            assert_eq!(timer.elapsed_seconds(), 0.0);
            assert_eq!(timer.current_step_index(), 0);
            assert!(timer.current_step().is_none());
        }

        #[test]
        fn test_start() {
            let mut timer = BrewTimer::new();
            let events = timer.start(&default_plan()).unwrap();

            assert_eq!(events, vec![TimerEvent::Started { step_count: 5 }]);
            assert!(timer.is_running());
            assert_eq!(timer.total_duration_seconds(), 145.0);
            assert_eq!(timer.current_step().unwrap().label, StepLabel::Bloom);
        }

        #[test]
        fn test_start_while_running_fails() {
            let mut timer = started_timer();
            assert_eq!(
                timer.start(&default_plan()),
                Err(TimerError::AlreadyActive)
            );
        }

        #[test]
        fn test_start_while_paused_fails() {
            let mut timer = started_timer();
            timer.pause().unwrap();
            assert_eq!(
                timer.start(&default_plan()),
                Err(TimerError::AlreadyActive)
            );
        }

        #[test]
        fn test_restart_after_finish_resets_elapsed() {
            let mut timer = started_timer();
            timer.tick(Duration::from_secs(200));
            assert!(timer.is_finished());

            timer.start(&default_plan()).unwrap();
            assert!(timer.is_running());
            assert_eq!(timer.elapsed_seconds(), 0.0);
            assert_eq!(timer.current_step_index(), 0);
        }

        #[test]
        fn test_pause_and_resume() {
            let mut timer = started_timer();

            assert_eq!(timer.pause().unwrap(), vec![TimerEvent::Paused]);
            assert!(timer.is_paused());

            assert_eq!(timer.resume().unwrap(), vec![TimerEvent::Resumed]);
            assert!(timer.is_running());
        }

        #[test]
        fn test_pause_not_running() {
            let mut timer = BrewTimer::new();
            assert_eq!(timer.pause(), Err(TimerError::NotRunning));
        }

        #[test]
        fn test_resume_not_paused() {
            let mut timer = started_timer();
            assert_eq!(timer.resume(), Err(TimerError::NotPaused));
        }

        #[test]
        fn test_reset_from_running() {
            let mut timer = started_timer();
            tick_n(&mut timer, 400, 100);

            assert_eq!(timer.reset(), vec![TimerEvent::Reset]);
            assert_eq!(timer.phase(), TimerPhase::Idle);
            assert_eq!(timer.elapsed_seconds(), 0.0);
            assert_eq!(timer.current_step_index(), 0);
            assert!(timer.steps().is_empty());
        }

        #[test]
        fn test_reset_is_idempotent() {
            let mut timer = started_timer();

            assert_eq!(timer.reset().len(), 1);
            assert!(timer.reset().is_empty());
            assert!(timer.reset().is_empty());
            assert_eq!(timer.phase(), TimerPhase::Idle);
        }

        #[test]
        fn test_empty_plan_finishes_immediately() {
            let mut timer = BrewTimer::new();
            let events = timer.start_steps(Vec::new()).unwrap();

            assert_eq!(
                events,
                vec![TimerEvent::Started { step_count: 0 }, TimerEvent::Finished]
            );
            assert!(timer.is_finished());
            assert_eq!(timer.current_step_time_remaining(), 0);
        }
    }

    // ------------------------------------------------------------------------
    // Tick Tests
    // ------------------------------------------------------------------------

    mod tick_tests {
        use super::*;

        #[test]
        fn test_tick_within_step_fires_nothing() {
            let mut timer = started_timer();
            let events = tick_n(&mut timer, 299, 100);

            assert!(events.is_empty());
            assert_eq!(timer.current_step_index(), 0);
            assert_eq!(timer.elapsed_seconds(), 29.9);
        }

        #[test]
        fn test_crossing_bloom_fires_once() {
            let mut timer = started_timer();
            let events = tick_n(&mut timer, 300, 100);

            assert_eq!(
                events,
                vec![
                    TimerEvent::StepCompleted {
                        index: 0,
                        label: StepLabel::Bloom,
                        kind: StepKind::Pour,
                    },
                    TimerEvent::PourComplete {
                        index: 0,
                        label: StepLabel::Bloom,
                        target_water_grams: Some(30),
                    },
                ]
            );
            assert_eq!(timer.current_step_index(), 1);

            // Further ticks inside the first pour stay quiet.
            assert!(tick_n(&mut timer, 50, 100).is_empty());
        }

        #[test]
        fn test_rest_step_completion_has_no_pour_event() {
            let mut timer = started_timer();
            tick_n(&mut timer, 460, 100); // end of first pour
            let events = tick_n(&mut timer, 300, 100); // end of wait

            assert_eq!(
                events,
                vec![TimerEvent::StepCompleted {
                    index: 2,
                    label: StepLabel::Rest,
                    kind: StepKind::Rest,
                }]
            );
        }

        #[test]
        fn test_single_large_tick_reports_every_boundary_in_order() {
            let mut timer = started_timer();
            let events = timer.tick(Duration::from_secs(1000));

            let completed: Vec<usize> = events
                .iter()
                .filter_map(|e| match e {
                    TimerEvent::StepCompleted { index, .. } => Some(*index),
                    _ => None,
                })
                .collect();
            assert_eq!(completed, vec![0, 1, 2, 3, 4]);
            assert_eq!(events.iter().filter(|e| e.is_pour_complete()).count(), 3);
            assert_eq!(events.last(), Some(&TimerEvent::Finished));
        }

        #[test]
        fn test_event_count_independent_of_tick_size() {
            let fine = run_to_end(100);
            let coarse = run_to_end(1000);
            let odd = run_to_end(7000);

            for events in [&fine, &coarse, &odd] {
                assert_eq!(events.iter().filter(|e| e.is_step_completed()).count(), 5);
                assert_eq!(events.iter().filter(|e| e.is_pour_complete()).count(), 3);
                assert_eq!(
                    events.iter().filter(|e| **e == TimerEvent::Finished).count(),
                    1
                );
            }
            assert_eq!(fine, coarse);
        }

        #[test]
        fn test_run_to_finish() {
            let mut timer = started_timer();
            let mut ticks = 0;
            while !timer.is_finished() {
                timer.tick(Duration::from_millis(300));
                ticks += 1;
                assert!(ticks < 10_000, "timer never finished");
            }

            assert!(timer.elapsed_seconds() > timer.total_duration_seconds());
            assert!(timer.is_finished());
            assert!(!timer.is_running());
            assert_eq!(timer.current_step_index(), 4);
            assert!(timer.tick(Duration::from_millis(100)).is_empty());
        }

        #[test]
        fn test_finish_exactly_at_total() {
            let mut timer = started_timer();
            let events = tick_n(&mut timer, 1450, 100);

            assert!(timer.is_finished());
            assert_eq!(timer.elapsed_seconds(), 145.0);
            assert_eq!(events.last(), Some(&TimerEvent::Finished));
        }

        #[test]
        fn test_tick_while_paused_is_frozen() {
            let mut timer = started_timer();
            tick_n(&mut timer, 10, 100);
            timer.pause().unwrap();

            assert!(tick_n(&mut timer, 100, 100).is_empty());
            assert_eq!(timer.elapsed_seconds(), 1.0);
        }

        #[test]
        fn test_pause_resume_keeps_position() {
            let mut timer = started_timer();
            tick_n(&mut timer, 350, 100);
            let before = (timer.elapsed_seconds(), timer.current_step_index());

            timer.pause().unwrap();
            timer.resume().unwrap();

            assert_eq!(
                (timer.elapsed_seconds(), timer.current_step_index()),
                before
            );
        }

        #[test]
        fn test_tick_while_idle_does_nothing() {
            let mut timer = BrewTimer::new();
            assert!(timer.tick(Duration::from_secs(5)).is_empty());
            assert_eq!(timer.elapsed_seconds(), 0.0);
        }

        #[test]
        fn test_zero_length_steps_are_crossed() {
            // Bloom swallows all the water, so both pours are zero-length.
            let params = BrewingParameters {
                dose: 10.0,
                ratio: 1.5,
                bloom_ratio: 3.0,
                grind_size: 6.0,
            };
            let mut timer = BrewTimer::new();
            timer.start(&calculate_brew_plan(&params)).unwrap();

            let events = tick_n(&mut timer, 300, 100);
            let completed: Vec<usize> = events
                .iter()
                .filter_map(|e| match e {
                    TimerEvent::StepCompleted { index, .. } => Some(*index),
                    _ => None,
                })
                .collect();

            assert_eq!(completed, vec![0, 1]);
            assert_eq!(timer.current_step().unwrap().label, StepLabel::Rest);
        }

        #[test]
        fn test_final_pour_completes_with_brew() {
            let plan = BrewPlan::from_steps(
                vec![
                    BrewStep::rest(StepLabel::Rest, 1.0),
                    BrewStep::pour(StepLabel::SecondPour, 200, 2.0),
                ],
                200,
            );
            let mut timer = BrewTimer::new();
            timer.start(&plan).unwrap();

            let events = tick_n(&mut timer, 30, 100);
            assert_eq!(
                events,
                vec![
                    TimerEvent::StepCompleted {
                        index: 0,
                        label: StepLabel::Rest,
                        kind: StepKind::Rest,
                    },
                    TimerEvent::StepCompleted {
                        index: 1,
                        label: StepLabel::SecondPour,
                        kind: StepKind::Pour,
                    },
                    TimerEvent::PourComplete {
                        index: 1,
                        label: StepLabel::SecondPour,
                        target_water_grams: Some(200),
                    },
                    TimerEvent::Finished,
                ]
            );
            assert_eq!(timer.current_step_index(), 1);
        }
    }

    // ------------------------------------------------------------------------
    // Query Tests
    // ------------------------------------------------------------------------

    mod query_tests {
        use super::*;

        #[test]
        fn test_remaining_at_start() {
            let timer = started_timer();

            assert_eq!(timer.time_remaining_total(), 145.0);
            assert_eq!(timer.current_step_time_remaining(), 30);
            assert_eq!(timer.current_step_progress_percent(), 0.0);
        }

        #[test]
        fn test_step_remaining_rounds_up() {
            let mut timer = started_timer();
            tick_n(&mut timer, 1, 100);
            assert_eq!(timer.current_step_time_remaining(), 30);

            tick_n(&mut timer, 298, 100);
            assert_eq!(timer.current_step_time_remaining(), 1);
        }

        #[test]
        fn test_progress_mid_step() {
            let mut timer = started_timer();
            tick_n(&mut timer, 150, 100);
            assert_eq!(timer.current_step_progress_percent(), 50.0);

            // 4 s into the 16 s first pour
            tick_n(&mut timer, 190, 100);
            assert_eq!(timer.current_step_index(), 1);
            assert_eq!(timer.current_step_progress_percent(), 25.0);
        }

        #[test]
        fn test_remaining_never_negative() {
            let mut timer = started_timer();
            timer.tick(Duration::from_secs(10_000));

            assert_eq!(timer.time_remaining_total(), 0.0);
            assert_eq!(timer.current_step_time_remaining(), 0);
            assert_eq!(timer.current_step_progress_percent(), 100.0);
        }

        #[test]
        fn test_zero_length_final_step_progress() {
            let mut timer = BrewTimer::new();
            timer.start(&default_plan().with_finish_marker()).unwrap();
            timer.tick(Duration::from_secs(145));

            assert!(timer.is_finished());
            assert_eq!(timer.current_step().unwrap().label, StepLabel::Finish);
            assert_eq!(timer.current_step_progress_percent(), 100.0);
        }

        #[test]
        fn test_state_snapshot() {
            let mut timer = started_timer();
            tick_n(&mut timer, 320, 100);
            let state = timer.state();

            assert_eq!(state.phase, TimerPhase::Running);
            assert_eq!(state.elapsed_seconds, 32.0);
            assert_eq!(state.current_step_index, 1);
            assert!(state.running);
            assert!(!state.finished);
            assert_eq!(state.step_remaining_seconds, 14);
            assert_eq!(state.total_remaining_seconds, 113.0);
            assert_eq!(state.step_progress_percent, 12.5);
        }

        #[test]
        fn test_idle_queries() {
            let timer = BrewTimer::new();

            assert_eq!(timer.time_remaining_total(), 0.0);
            assert_eq!(timer.current_step_time_remaining(), 0);
            assert_eq!(timer.current_step_progress_percent(), 0.0);
        }
    }
}
