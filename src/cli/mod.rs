//! CLI module for the pour-over timer.
//!
//! - `commands`: command definitions using clap derive
//! - `display`: output formatting
//! - `runner`: the interactive brew loop

pub mod commands;
pub mod display;
pub mod runner;

pub use commands::{BrewArgs, Cli, Commands, PlanArgs, RecipeArgs, SettingsAction};
pub use display::{format_clock, Display};
pub use runner::{run_brew, spawn_stdin_controls, BrewOutcome, Control};
