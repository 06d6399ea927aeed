//! Pour-over brew planner and step timer for the terminal.
//!
//! - `pourover plan` prints the five-step plan for a dose, ratio and grind
//! - `pourover brew` walks through it with a live countdown and chimes
//! - `pourover settings` shows or resets the remembered parameters

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use pourover::cli::{
    run_brew, spawn_stdin_controls, BrewArgs, BrewOutcome, Cli, Commands, Display, PlanArgs,
    RecipeArgs, SettingsAction,
};
use pourover::feedback::{FeedbackConfig, FeedbackDispatcher, TerminalBell};
use pourover::plan::{calculate_brew_plan_with, PlanConfig};
use pourover::settings::{Settings, SettingsError, SettingsStore};
use pourover::sound::{try_create_player, SoundSource};
use pourover::timer::TimerConfig;
use pourover::types::BrewingParameters;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects `debug` and the default is `warn`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let store = match cli.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::open_default()
            .map_err(|e| with_hint(e, "Cannot locate the settings file".to_string()))?,
    };
    debug!("Using settings at {}", store.path().display());

    match cli.command {
        Some(Commands::Plan(args)) => show_plan(&store, &args)?,
        Some(Commands::Brew(args)) => brew(&store, &args).await?,
        Some(Commands::Settings { action }) => settings(&store, action)?,
        Some(Commands::Completions { .. }) => {}
        None => show_plan(&store, &PlanArgs::default())?,
    }

    Ok(())
}

/// Resolves flags against stored settings, saving explicit changes back.
fn resolve_parameters(
    store: &SettingsStore,
    recipe: &RecipeArgs,
) -> Result<(Settings, BrewingParameters, PlanConfig)> {
    let mut stored = store.load();
    let (params, plan_config) = recipe.resolve(&stored.parameters);

    if recipe.has_parameter_overrides() && params != stored.parameters {
        stored.parameters = params;
        store.save(&stored).map_err(|e| {
            with_hint(e, format!("Failed to save settings to {}", store.path().display()))
        })?;
    }

    Ok((stored, params, plan_config))
}

/// Wraps a settings failure with what was being done and a hint for the user.
fn with_hint(e: SettingsError, action: String) -> anyhow::Error {
    let hint = e.suggestion();
    anyhow::Error::new(e).context(format!("{} ({})", action, hint))
}

fn show_plan(store: &SettingsStore, args: &PlanArgs) -> Result<()> {
    let (_, params, plan_config) = resolve_parameters(store, &args.recipe)?;
    let plan = calculate_brew_plan_with(&params, &plan_config);

    if args.json {
        Display::show_plan_json(&plan).context("Failed to encode plan")?;
    } else {
        Display::show_plan(&plan, &params);
    }
    Ok(())
}

async fn brew(store: &SettingsStore, args: &BrewArgs) -> Result<()> {
    let (settings, params, plan_config) = resolve_parameters(store, &args.recipe)?;
    let plan = calculate_brew_plan_with(&params, &plan_config);
    Display::show_plan(&plan, &params);
    println!();

    let feedback = build_feedback(&settings, args);
    let timer_config = TimerConfig::default().with_tick_interval_ms(args.tick_ms);

    let outcome = run_brew(&plan, timer_config, &feedback, spawn_stdin_controls()).await?;
    debug!("Brew ended: {:?}", outcome);

    if outcome == BrewOutcome::Aborted {
        println!();
    }
    Ok(())
}

fn build_feedback(settings: &Settings, args: &BrewArgs) -> FeedbackDispatcher {
    let sound_enabled = settings.sound_enabled && !args.no_sound;
    let haptics_enabled = settings.haptics_enabled && !args.no_haptics;

    let pour_chime = match &settings.chime_file {
        Some(path) => SoundSource::file_validated(path).unwrap_or_else(|e| {
            warn!("Ignoring chime file: {}", e);
            SoundSource::pour_chime()
        }),
        None => SoundSource::pour_chime(),
    };

    let config = FeedbackConfig::default()
        .with_sound(sound_enabled)
        .with_haptics(haptics_enabled)
        .with_pour_chime(pour_chime);

    let mut dispatcher = FeedbackDispatcher::new(config);
    if sound_enabled {
        if let Some(player) = try_create_player() {
            dispatcher = dispatcher.with_sound_player(player);
        }
    }
    if haptics_enabled {
        dispatcher = dispatcher.with_haptic_driver(Arc::new(TerminalBell::new()));
    }
    dispatcher
}

fn settings(store: &SettingsStore, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            Display::show_settings(&store.load()).context("Failed to encode settings")?;
        }
        SettingsAction::Reset => {
            store
                .reset()
                .map_err(|e| with_hint(e, format!("Failed to reset {}", store.path().display())))?;
            println!("Settings reset to defaults");
        }
        SettingsAction::Path => {
            println!("{}", store.path().display());
        }
    }
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
