//! Brew plan calculation.
//!
//! Turns [`BrewingParameters`] into an ordered [`BrewPlan`]:
//! bloom → first pour → wait → second pour → drawdown.
//!
//! All functions here are pure. The calculator never validates its input
//! and never fails; degenerate inputs collapse to zero-length pours and
//! every quantity is clamped to be non-negative.

pub mod flavor;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{BrewPlan, BrewStep, BrewingParameters, StepLabel};

pub use flavor::FlavorPreferences;

// ============================================================================
// Constants
// ============================================================================

/// Bloom length in seconds; degassing time does not depend on the dose.
pub const BLOOM_SECONDS: f64 = 30.0;

/// Pause between the first and second pour, in seconds.
pub const REST_SECONDS: f64 = 30.0;

/// Default hand-pour pace in grams per second.
pub const DEFAULT_POUR_RATE: f64 = 5.0;

/// Share of the post-bloom water poured in the first pour.
pub const FIRST_POUR_SHARE: f64 = 0.4;

/// Shortest drawdown the calculator will produce, in seconds.
pub const MIN_DRAWDOWN_SECONDS: f64 = 30.0;

const BASE_DRAWDOWN_SECONDS: f64 = 45.0;
const REFERENCE_GRIND: f64 = 6.0;
const REFERENCE_WATER_GRAMS: f64 = 250.0;

// ============================================================================
// PlanConfig
// ============================================================================

/// Pacing constants for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Pour pace in grams per second
    pub pour_rate_grams_per_second: f64,
    pub bloom_seconds: f64,
    pub rest_seconds: f64,
    /// Fraction of the post-bloom water used by the first pour (0.0-1.0)
    pub first_pour_share: f64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            pour_rate_grams_per_second: DEFAULT_POUR_RATE,
            bloom_seconds: BLOOM_SECONDS,
            rest_seconds: REST_SECONDS,
            first_pour_share: FIRST_POUR_SHARE,
        }
    }
}

impl PlanConfig {
    /// Sets the pour rate in grams per second.
    pub fn with_pour_rate(mut self, grams_per_second: f64) -> Self {
        self.pour_rate_grams_per_second = grams_per_second;
        self
    }

    /// Sets the wait between pours in seconds.
    pub fn with_rest_seconds(mut self, seconds: f64) -> Self {
        self.rest_seconds = seconds;
        self
    }

    /// Sets the bloom length in seconds.
    pub fn with_bloom_seconds(mut self, seconds: f64) -> Self {
        self.bloom_seconds = seconds;
        self
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculates a brew plan with the default [`PlanConfig`].
pub fn calculate_brew_plan(params: &BrewingParameters) -> BrewPlan {
    calculate_brew_plan_with(params, &PlanConfig::default())
}

/// Calculates a brew plan with explicit pacing constants.
pub fn calculate_brew_plan_with(params: &BrewingParameters, config: &PlanConfig) -> BrewPlan {
    let total_water = round_grams(params.dose * params.ratio);
    // Bloom water above the total would make the targets go backwards.
    let bloom_water = round_grams(params.dose * params.bloom_ratio).min(total_water);
    let remaining = total_water - bloom_water;

    let share = if config.first_pour_share.is_finite() {
        config.first_pour_share.clamp(0.0, 1.0)
    } else {
        FIRST_POUR_SHARE
    };
    let first_pour = round_grams(f64::from(remaining) * share).min(remaining);
    let second_pour = remaining - first_pour;

    let rate = config.pour_rate_grams_per_second;
    let steps = vec![
        BrewStep::pour(StepLabel::Bloom, bloom_water, non_negative(config.bloom_seconds)),
        BrewStep::pour(
            StepLabel::FirstPour,
            bloom_water + first_pour,
            pour_seconds(first_pour, rate),
        ),
        BrewStep::rest(StepLabel::Rest, non_negative(config.rest_seconds)),
        BrewStep::pour(
            StepLabel::SecondPour,
            total_water,
            pour_seconds(second_pour, rate),
        ),
        BrewStep::rest(
            StepLabel::Drawdown,
            drawdown_seconds(params.grind_size, total_water),
        ),
    ];

    trace!(
        total_water,
        bloom_water,
        first_pour,
        second_pour,
        "Calculated brew plan"
    );

    BrewPlan::from_steps(steps, total_water)
}

/// Seconds needed to pour `grams` at `grams_per_second`, rounded up.
///
/// Returns 0 for an empty pour or a non-positive rate.
pub fn pour_seconds(grams: u32, grams_per_second: f64) -> f64 {
    if grams == 0 || grams_per_second.is_nan() || grams_per_second <= 0.0 {
        return 0.0;
    }
    (f64::from(grams) / grams_per_second).ceil()
}

/// Drawdown length for a grind setting and total water.
///
/// `45 + (grind - 6) * 5 + ceil((water - 250) / 50) * 5`, floored at 30 s.
/// The water term uses the mathematical ceiling, so 225 g adds nothing and
/// 150 g subtracts 10 s.
pub fn drawdown_seconds(grind_size: f64, total_water_grams: u32) -> f64 {
    let grind_term = (grind_size - REFERENCE_GRIND) * 5.0;
    let water_term =
        ((f64::from(total_water_grams) - REFERENCE_WATER_GRAMS) / 50.0).ceil() * 5.0;
    // f64::max discards NaN
    (BASE_DRAWDOWN_SECONDS + grind_term + water_term).max(MIN_DRAWDOWN_SECONDS)
}

fn round_grams(grams: f64) -> u32 {
    if grams.is_finite() && grams > 0.0 {
        grams.round() as u32
    } else {
        0
    }
}

fn non_negative(seconds: f64) -> f64 {
    if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    }
}

// ============================================================================
// Tests
// ============================================================================
