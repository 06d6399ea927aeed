//! Flavor preferences as an alternate way to derive brew inputs.
//!
//! Each preference is a 0-100 slider. They map linearly onto the inputs the
//! calculator already understands, so the plan contract is unchanged:
//!
//! | Preference   | Drives            | 0      | 50    | 100    |
//! |--------------|-------------------|--------|-------|--------|
//! | `floral`     | bloom ratio       | 2.0    | 2.5   | 3.0    |
//! | `bitterness` | water ratio       | 17     | 16    | 15     |
//! | `acidity`    | pour rate (g/s)   | 4.0    | 5.0   | 6.0    |
//! | `fruitiness` | wait between pours| 20 s   | 30 s  | 40 s   |

use serde::{Deserialize, Serialize};

use super::PlanConfig;
use crate::types::BrewingParameters;

const NEUTRAL: f64 = 50.0;

/// Bounds for the ratio derived from bitterness.
const MIN_DERIVED_RATIO: f64 = 15.0;
const MAX_DERIVED_RATIO: f64 = 18.0;

/// Flavor sliders, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlavorPreferences {
    #[serde(default = "neutral")]
    pub floral: f64,
    #[serde(default = "neutral")]
    pub bitterness: f64,
    #[serde(default = "neutral")]
    pub acidity: f64,
    #[serde(default = "neutral")]
    pub fruitiness: f64,
}

fn neutral() -> f64 {
    NEUTRAL
}

impl Default for FlavorPreferences {
    fn default() -> Self {
        Self {
            floral: NEUTRAL,
            bitterness: NEUTRAL,
            acidity: NEUTRAL,
            fruitiness: NEUTRAL,
        }
    }
}

impl FlavorPreferences {
    /// Bloom ratio from the floral slider: 2.0 at 0, 3.0 at 100.
    pub fn bloom_ratio(&self) -> f64 {
        2.0 + slider(self.floral) / 100.0
    }

    /// Water ratio from the bitterness slider: 17 at 0, 15 at 100.
    pub fn ratio(&self) -> f64 {
        (16.0 + (NEUTRAL - slider(self.bitterness)) / NEUTRAL)
            .clamp(MIN_DERIVED_RATIO, MAX_DERIVED_RATIO)
    }

    /// Pour rate from the acidity slider: faster pours for a brighter cup.
    pub fn pour_rate(&self) -> f64 {
        4.0 + slider(self.acidity) / 50.0
    }

    /// Wait between pours from the fruitiness slider.
    pub fn rest_seconds(&self) -> f64 {
        (20.0 + slider(self.fruitiness) / 5.0).round()
    }

    /// Replaces `ratio` and `bloom_ratio` in `base` with the derived values.
    pub fn apply_to(&self, base: &BrewingParameters) -> BrewingParameters {
        base.with_ratio(self.ratio())
            .with_bloom_ratio(self.bloom_ratio())
    }

    /// Replaces pour rate and wait length in `base` with the derived values.
    pub fn plan_config(&self, base: &PlanConfig) -> PlanConfig {
        base.with_pour_rate(self.pour_rate())
            .with_rest_seconds(self.rest_seconds())
    }
}

fn slider(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        NEUTRAL
    }
}
