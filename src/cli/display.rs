//! Display utilities for the pour-over CLI.
//!
//! `render_*` functions build strings so they can be tested; the `show_*`
//! wrappers print them.

use std::fmt::Write as _;
use std::io::Write as _;

use crate::settings::Settings;
use crate::timer::TimerEvent;
use crate::types::{BrewPlan, BrewingParameters, TimerPhase, TimerState};

/// Formats seconds as `M:SS`, rounding partial seconds up.
///
/// Negative and NaN inputs print as `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let whole = if seconds.is_nan() || seconds <= 0.0 {
        0
    } else {
        seconds.ceil() as u64
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Renders the plan as a step table with totals.
    pub fn render_plan(plan: &BrewPlan, params: &BrewingParameters) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:.1} g coffee at 1:{} with grind {}, bloom x{}",
            params.dose,
            trim_float(params.ratio),
            trim_float(params.grind_size),
            trim_float(params.bloom_ratio)
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            " #  {:<12} {:>6} {:>8} {:>6} {:>6}",
            "Step", "Pour", "Vessel", "Time", "Ends"
        );
        let _ = writeln!(out, "{}", "─".repeat(46));

        let end_times = plan.end_times();
        for (index, step) in plan.steps.iter().enumerate() {
            let (pour, vessel) = match step.target_water_grams {
                Some(target) => (
                    format!("{} g", plan.pour_water(index)),
                    format!("{} g", target),
                ),
                None => ("-".to_string(), "-".to_string()),
            };
            let _ = writeln!(
                out,
                "{:>2}  {:<12} {:>6} {:>8} {:>6} {:>6}",
                index + 1,
                step.label.title(),
                pour,
                vessel,
                format_clock(step.duration_seconds),
                format_clock(end_times.get(index).copied().unwrap_or_default())
            );
        }

        let _ = writeln!(out, "{}", "─".repeat(46));
        let _ = write!(
            out,
            "Total: {} g water in {}",
            plan.total_water_grams,
            format_clock(plan.total_duration_seconds)
        );
        out
    }

    pub fn show_plan(plan: &BrewPlan, params: &BrewingParameters) {
        println!("{}", Self::render_plan(plan, params));
    }

    /// Prints the plan as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be serialized.
    pub fn show_plan_json(plan: &BrewPlan) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(plan)?);
        Ok(())
    }

    /// One-line live status for the running brew.
    pub fn render_progress(state: &TimerState, plan: &BrewPlan) -> String {
        let step = plan
            .steps
            .get(state.current_step_index)
            .map_or("-", |s| s.label.title());
        let target = plan
            .steps
            .get(state.current_step_index)
            .and_then(|s| s.target_water_grams)
            .map(|g| format!(" to {} g", g))
            .unwrap_or_default();
        let marker = match state.phase {
            TimerPhase::Paused => " (paused)",
            _ => "",
        };

        format!(
            "[{}/{}] {}{} {} left, {} total, {:>3.0}%{}",
            (state.current_step_index + 1).min(plan.steps.len()),
            plan.steps.len(),
            step,
            target,
            format_clock(f64::from(state.step_remaining_seconds)),
            format_clock(state.total_remaining_seconds),
            state.step_progress_percent,
            marker
        )
    }

    /// Rewrites the current terminal line with the live status.
    pub fn show_progress(state: &TimerState, plan: &BrewPlan) {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "\r\x1b[2K{}", Self::render_progress(state, plan));
        let _ = stdout.flush();
    }

    /// Message for events worth their own line.
    pub fn render_event(event: &TimerEvent) -> Option<String> {
        match event {
            TimerEvent::Started { step_count } => {
                Some(format!("Brew started: {} steps (p pause, r resume, q quit)", step_count))
            }
            TimerEvent::PourComplete {
                label,
                target_water_grams,
                ..
            } => Some(match target_water_grams {
                Some(grams) => format!("{} complete, vessel at {} g", label.title(), grams),
                None => format!("{} complete", label.title()),
            }),
            TimerEvent::Paused => Some("Paused".to_string()),
            TimerEvent::Resumed => Some("Resumed".to_string()),
            TimerEvent::Reset => Some("Brew aborted".to_string()),
            TimerEvent::Finished => Some("Brew finished. Enjoy your coffee!".to_string()),
            TimerEvent::StepCompleted { .. } => None,
        }
    }

    pub fn show_event(event: &TimerEvent) {
        if let Some(message) = Self::render_event(event) {
            println!("\r\x1b[2K{}", message);
        }
    }

    /// Prints the settings as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized.
    pub fn show_settings(settings: &Settings) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(settings)?);
        Ok(())
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }
}

fn trim_float(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
