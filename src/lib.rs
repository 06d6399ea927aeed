//! Pour-over brew planner and step timer.
//!
//! - `plan`: pure calculator turning dose, ratio and grind into five timed steps
//! - `timer`: step timer state machine and its tokio driver
//! - `feedback`: chimes and haptic cues on pour completion
//! - `sound`: rodio-backed chime playback
//! - `settings`: persisted last-used parameters
//! - `cli`: command parsing, display and the interactive brew loop
//! - `types`: shared data model

pub mod cli;
pub mod feedback;
pub mod plan;
pub mod settings;
pub mod sound;
pub mod timer;
pub mod types;

pub use feedback::{FeedbackConfig, FeedbackDispatcher, HapticDriver, MockHaptic, TerminalBell};
pub use plan::{calculate_brew_plan, calculate_brew_plan_with, FlavorPreferences, PlanConfig};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use sound::{MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer, SoundSource};
pub use timer::{BrewSession, BrewTimer, TimerConfig, TimerError, TimerEvent};
pub use types::{
    BrewPlan, BrewStep, BrewingParameters, StepKind, StepLabel, TimerPhase, TimerState,
};
