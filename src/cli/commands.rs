//! Command definitions for the pour-over CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::plan::{FlavorPreferences, PlanConfig};
use crate::types::BrewingParameters;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pour-over brew planner and step timer
#[derive(Parser, Debug)]
#[command(
    name = "pourover",
    version,
    about = "Pour-over coffee brew planner and step timer",
    long_about = "Computes a five-step pour-over plan (bloom, two pours, a wait and the \
                  drawdown) from dose, ratio and grind, then walks you through it with \
                  a live countdown, chimes and a terminal bell.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `plan` with stored settings)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the per-user default
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the brew plan for the given parameters
    Plan(PlanArgs),

    /// Run the live brew timer
    Brew(BrewArgs),

    /// Show or reset stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Print the stored settings as JSON
    Show,
    /// Restore default settings
    Reset,
    /// Print the settings file location
    Path,
}

// ============================================================================
// Recipe Arguments
// ============================================================================

/// Brewing parameter flags shared by `plan` and `brew`.
///
/// Every flag is optional; missing values come from stored settings.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RecipeArgs {
    /// Coffee dose in grams (1-50)
    #[arg(short, long, value_parser = parse_dose)]
    pub dose: Option<f64>,

    /// Water-to-coffee ratio (1-50)
    #[arg(short, long, value_parser = parse_ratio)]
    pub ratio: Option<f64>,

    /// Bloom water as a multiple of the dose (1-5)
    #[arg(short, long, value_parser = parse_bloom_ratio)]
    pub bloom_ratio: Option<f64>,

    /// Grind setting, 1 (fine) to 11 (coarse)
    #[arg(short, long, value_parser = parse_grind)]
    pub grind: Option<f64>,

    /// Floral preference (0-100), raises the bloom ratio
    #[arg(long, value_parser = parse_slider, help_heading = "Flavor")]
    pub floral: Option<f64>,

    /// Bitterness preference (0-100), tightens the ratio
    #[arg(long, value_parser = parse_slider, help_heading = "Flavor")]
    pub bitterness: Option<f64>,

    /// Acidity preference (0-100), speeds up the pours
    #[arg(long, value_parser = parse_slider, help_heading = "Flavor")]
    pub acidity: Option<f64>,

    /// Fruitiness preference (0-100), lengthens the wait
    #[arg(long, value_parser = parse_slider, help_heading = "Flavor")]
    pub fruitiness: Option<f64>,
}

impl RecipeArgs {
    /// Returns true if any of dose, ratio, bloom ratio or grind was given.
    #[must_use]
    pub fn has_parameter_overrides(&self) -> bool {
        self.dose.is_some()
            || self.ratio.is_some()
            || self.bloom_ratio.is_some()
            || self.grind.is_some()
    }

    /// Returns the flavor sliders if at least one was given.
    ///
    /// Sliders left out stay neutral.
    #[must_use]
    pub fn flavor(&self) -> Option<FlavorPreferences> {
        if self.floral.is_none()
            && self.bitterness.is_none()
            && self.acidity.is_none()
            && self.fruitiness.is_none()
        {
            return None;
        }

        let neutral = FlavorPreferences::default();
        Some(FlavorPreferences {
            floral: self.floral.unwrap_or(neutral.floral),
            bitterness: self.bitterness.unwrap_or(neutral.bitterness),
            acidity: self.acidity.unwrap_or(neutral.acidity),
            fruitiness: self.fruitiness.unwrap_or(neutral.fruitiness),
        })
    }

    /// Combines these flags with `stored` parameters.
    ///
    /// Flavor sliders are applied first; explicit `--ratio` and
    /// `--bloom-ratio` win over the derived values.
    #[must_use]
    pub fn resolve(&self, stored: &BrewingParameters) -> (BrewingParameters, PlanConfig) {
        let mut params = *stored;
        let mut config = PlanConfig::default();

        if let Some(flavor) = self.flavor() {
            params = flavor.apply_to(&params);
            config = flavor.plan_config(&config);
        }

        if let Some(dose) = self.dose {
            params = params.with_dose(dose);
        }
        if let Some(ratio) = self.ratio {
            params = params.with_ratio(ratio);
        }
        if let Some(bloom_ratio) = self.bloom_ratio {
            params = params.with_bloom_ratio(bloom_ratio);
        }
        if let Some(grind) = self.grind {
            params = params.with_grind_size(grind);
        }

        (params.clamped(), config)
    }
}

/// Arguments for the plan command
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the brew command
#[derive(Args, Debug, Clone)]
pub struct BrewArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    /// Disable chimes
    #[arg(long)]
    pub no_sound: bool,

    /// Disable the terminal bell
    #[arg(long)]
    pub no_haptics: bool,

    /// Tick interval in milliseconds
    #[arg(
        long,
        hide = true,
        default_value = "100",
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub tick_ms: u64,
}

impl Default for BrewArgs {
    fn default() -> Self {
        Self {
            recipe: RecipeArgs::default(),
            no_sound: false,
            no_haptics: false,
            tick_ms: 100,
        }
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

fn parse_in_range(s: &str, min: f64, max: f64, what: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("{what} must be a number, got '{s}'"))?;
    if !value.is_finite() || value < min || value > max {
        return Err(format!("{what} must be between {min} and {max}"));
    }
    Ok(value)
}

fn parse_dose(s: &str) -> Result<f64, String> {
    parse_in_range(s, 1.0, 50.0, "dose")
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    parse_in_range(s, 1.0, 50.0, "ratio")
}

fn parse_bloom_ratio(s: &str) -> Result<f64, String> {
    parse_in_range(s, 1.0, 5.0, "bloom ratio")
}

fn parse_grind(s: &str) -> Result<f64, String> {
    parse_in_range(s, 1.0, 11.0, "grind")
}

fn parse_slider(s: &str) -> Result<f64, String> {
    parse_in_range(s, 0.0, 100.0, "preference")
}

// ============================================================================
// Tests
// ============================================================================
