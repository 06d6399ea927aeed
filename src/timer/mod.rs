//! Brew timer.
//!
//! - `engine`: pure state machine with `tick(delta)` and remaining-time queries
//! - `session`: tokio interval driver with a scoped tick source
//! - `error`: rejected transitions

pub mod engine;
pub mod error;
pub mod session;

pub use engine::{BrewTimer, TimerEvent};
pub use error::TimerError;
pub use session::{BrewSession, TimerConfig};
