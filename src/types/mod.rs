//! Core data types for the pour-over brew timer.
//!
//! This module defines the data structures used for:
//! - Brewing parameters with range clamping
//! - Brew steps and the ordered brew plan
//! - Timer phase and the snapshot handed to tick subscribers

use serde::{Deserialize, Serialize};

// ============================================================================
// BrewingParameters
// ============================================================================

/// Default dose in grams of dry coffee.
pub const DEFAULT_DOSE: f64 = 15.0;
/// Default water-to-coffee ratio.
pub const DEFAULT_RATIO: f64 = 15.0;
/// Default bloom water multiplier.
pub const DEFAULT_BLOOM_RATIO: f64 = 2.0;
/// Default grind setting (middle of the 1-11 dial).
pub const DEFAULT_GRIND_SIZE: f64 = 6.0;

/// Input parameters for a single plan calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrewingParameters {
    /// Dry coffee in grams (1.0-50.0)
    #[serde(default = "default_dose")]
    pub dose: f64,
    /// Grams of water per gram of coffee (1.0-50.0)
    #[serde(default = "default_ratio")]
    pub ratio: f64,
    /// Multiplier applied to the dose for bloom water
    #[serde(default = "default_bloom_ratio")]
    pub bloom_ratio: f64,
    /// Grind setting in [1, 11]; lower is finer
    #[serde(default = "default_grind_size")]
    pub grind_size: f64,
}

fn default_dose() -> f64 {
    DEFAULT_DOSE
}

fn default_ratio() -> f64 {
    DEFAULT_RATIO
}

fn default_bloom_ratio() -> f64 {
    DEFAULT_BLOOM_RATIO
}

fn default_grind_size() -> f64 {
    DEFAULT_GRIND_SIZE
}

impl Default for BrewingParameters {
    fn default() -> Self {
        Self {
            dose: DEFAULT_DOSE,
            ratio: DEFAULT_RATIO,
            bloom_ratio: DEFAULT_BLOOM_RATIO,
            grind_size: DEFAULT_GRIND_SIZE,
        }
    }
}

impl BrewingParameters {
    /// Sets the dose in grams.
    pub fn with_dose(mut self, dose: f64) -> Self {
        self.dose = dose;
        self
    }

    /// Sets the water ratio.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the bloom ratio.
    pub fn with_bloom_ratio(mut self, bloom_ratio: f64) -> Self {
        self.bloom_ratio = bloom_ratio;
        self
    }

    /// Sets the grind size.
    pub fn with_grind_size(mut self, grind_size: f64) -> Self {
        self.grind_size = grind_size;
        self
    }

    /// Returns a copy clamped to the ranges the brew UI accepts.
    ///
    /// Non-finite values fall back to the defaults. The dose keeps one
    /// decimal place.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let dose = clamp_or(self.dose, 1.0, 50.0, DEFAULT_DOSE);
        Self {
            dose: (dose * 10.0).round() / 10.0,
            ratio: clamp_or(self.ratio, 1.0, 50.0, DEFAULT_RATIO),
            bloom_ratio: clamp_or(self.bloom_ratio, 1.0, 5.0, DEFAULT_BLOOM_RATIO),
            grind_size: clamp_or(self.grind_size, 1.0, 11.0, DEFAULT_GRIND_SIZE),
        }
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

// ============================================================================
// BrewStep
// ============================================================================

/// Phase name of a brew step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLabel {
    Bloom,
    FirstPour,
    Rest,
    SecondPour,
    Drawdown,
    /// Zero-length completion marker
    Finish,
}

impl StepLabel {
    /// Returns the string representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepLabel::Bloom => "bloom",
            StepLabel::FirstPour => "first_pour",
            StepLabel::Rest => "rest",
            StepLabel::SecondPour => "second_pour",
            StepLabel::Drawdown => "drawdown",
            StepLabel::Finish => "finish",
        }
    }

    /// Returns the human-readable title of the step.
    pub fn title(&self) -> &'static str {
        match self {
            StepLabel::Bloom => "Bloom",
            StepLabel::FirstPour => "First Pour",
            StepLabel::Rest => "Wait",
            StepLabel::SecondPour => "Second Pour",
            StepLabel::Drawdown => "Drawdown",
            StepLabel::Finish => "Finish",
        }
    }
}

/// Whether a step adds water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Water is added; completion fires a chime
    Pour,
    /// Waiting or draining
    Rest,
}

/// One phase of a brew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewStep {
    pub label: StepLabel,
    pub kind: StepKind,
    /// Cumulative water in the vessel once this step completes
    #[serde(rename = "targetWaterGrams", skip_serializing_if = "Option::is_none")]
    pub target_water_grams: Option<u32>,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: f64,
}

impl BrewStep {
    /// Creates a pour step.
    pub fn pour(label: StepLabel, target_water_grams: u32, duration_seconds: f64) -> Self {
        Self {
            label,
            kind: StepKind::Pour,
            target_water_grams: Some(target_water_grams),
            duration_seconds: duration_seconds.max(0.0),
        }
    }

    /// Creates a rest step (no water added).
    pub fn rest(label: StepLabel, duration_seconds: f64) -> Self {
        Self {
            label,
            kind: StepKind::Rest,
            target_water_grams: None,
            duration_seconds: duration_seconds.max(0.0),
        }
    }

    /// Returns true if this step adds water.
    pub fn is_pour(&self) -> bool {
        self.kind == StepKind::Pour
    }
}

// ============================================================================
// BrewPlan
// ============================================================================

/// Ordered brew steps plus aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewPlan {
    pub steps: Vec<BrewStep>,
    #[serde(rename = "totalWaterGrams")]
    pub total_water_grams: u32,
    #[serde(rename = "totalDurationSeconds")]
    pub total_duration_seconds: f64,
}

impl BrewPlan {
    /// Builds a plan from steps, summing their durations.
    pub fn from_steps(steps: Vec<BrewStep>, total_water_grams: u32) -> Self {
        let total_duration_seconds = steps.iter().map(|s| s.duration_seconds).sum();
        Self {
            steps,
            total_water_grams,
            total_duration_seconds,
        }
    }

    /// Cumulative end time of every step, in seconds.
    pub fn end_times(&self) -> Vec<f64> {
        self.steps
            .iter()
            .scan(0.0, |end, step| {
                *end += step.duration_seconds;
                Some(*end)
            })
            .collect()
    }

    /// Index of the last pour step, if any.
    pub fn last_pour_index(&self) -> Option<usize> {
        self.steps.iter().rposition(BrewStep::is_pour)
    }

    /// Water added by the step at `index` (zero for rest steps).
    pub fn pour_water(&self, index: usize) -> u32 {
        let Some(target) = self.steps.get(index).and_then(|s| s.target_water_grams) else {
            return 0;
        };
        let previous = self.steps[..index]
            .iter()
            .rev()
            .find_map(|s| s.target_water_grams)
            .unwrap_or(0);
        target.saturating_sub(previous)
    }

    /// Returns a copy with a zero-length `Finish` step appended.
    #[must_use]
    pub fn with_finish_marker(&self) -> Self {
        let mut plan = self.clone();
        plan.steps.push(BrewStep::rest(StepLabel::Finish, 0.0));
        plan
    }

    /// Returns true if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the brew timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// No brew loaded
    #[default]
    Idle,
    /// Counting up through the steps
    Running,
    /// Frozen, resumable
    Paused,
    /// Elapsed reached the total duration
    Finished,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Finished => "finished",
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Point-in-time view of the brew timer, published on every tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: TimerPhase,
    #[serde(rename = "elapsedSeconds")]
    pub elapsed_seconds: f64,
    #[serde(rename = "currentStepIndex")]
    pub current_step_index: usize,
    pub running: bool,
    pub finished: bool,
    /// Ceiling-rounded seconds left in the current step
    #[serde(rename = "stepRemainingSeconds")]
    pub step_remaining_seconds: u32,
    #[serde(rename = "totalRemainingSeconds")]
    pub total_remaining_seconds: f64,
    #[serde(rename = "stepProgressPercent")]
    pub step_progress_percent: f64,
}

// ============================================================================
// Tests
// ============================================================================
