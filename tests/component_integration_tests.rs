//! Component integration tests for the brew session, feedback cues and the
//! interactive brew loop.
//!
//! Real tokio intervals run with millisecond ticks over sub-second plans so
//! each test completes quickly. Sound and haptics use the recording mocks.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout};

use pourover::cli::{run_brew, BrewOutcome, Control};
use pourover::feedback::{FeedbackConfig, FeedbackDispatcher, HapticPattern, MockHaptic};
use pourover::sound::{MockSoundPlayer, SoundSource};
use pourover::timer::{BrewSession, TimerConfig, TimerEvent};
use pourover::types::{BrewPlan, BrewStep, StepLabel, TimerPhase};

// ============================================================================
// Test Helpers
// ============================================================================

/// Five-step brew shaped like a real plan, 0.25 s long.
fn quick_plan() -> BrewPlan {
    BrewPlan::from_steps(
        vec![
            BrewStep::pour(StepLabel::Bloom, 30, 0.05),
            BrewStep::pour(StepLabel::FirstPour, 108, 0.05),
            BrewStep::rest(StepLabel::Rest, 0.05),
            BrewStep::pour(StepLabel::SecondPour, 225, 0.05),
            BrewStep::rest(StepLabel::Drawdown, 0.05),
        ],
        225,
    )
}

fn fast_config() -> TimerConfig {
    TimerConfig::default().with_tick_interval_ms(5)
}

fn dispatcher_with_mocks(
    config: FeedbackConfig,
) -> (FeedbackDispatcher, Arc<MockSoundPlayer>, Arc<MockHaptic>) {
    let sound = Arc::new(MockSoundPlayer::new());
    let haptic = Arc::new(MockHaptic::new());
    let dispatcher = FeedbackDispatcher::new(config)
        .with_sound_player(sound.clone())
        .with_haptic_driver(haptic.clone());
    (dispatcher, sound, haptic)
}

async fn wait_for_phase(session: &BrewSession, phase: TimerPhase) {
    timeout(Duration::from_secs(5), async {
        while session.state().phase != phase {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("phase not reached in time");
}

// ============================================================================
// Session + FeedbackDispatcher
// ============================================================================

#[tokio::test]
async fn test_session_cues_every_pour_and_finish() {
    let (dispatcher, sound, haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    let (tx, rx) = mpsc::unbounded_channel();
    let feedback = tokio::spawn(dispatcher.run(rx));

    let mut session = BrewSession::new(fast_config(), tx);
    session.start(&quick_plan()).unwrap();
    wait_for_phase(&session, TimerPhase::Finished).await;
    drop(session);

    timeout(Duration::from_secs(5), feedback)
        .await
        .expect("dispatcher did not stop")
        .unwrap();

    assert_eq!(
        sound.get_play_calls(),
        vec![
            SoundSource::pour_chime(),
            SoundSource::pour_chime(),
            SoundSource::pour_chime(),
            SoundSource::finish_chime(),
        ]
    );
    assert_eq!(
        haptic.patterns(),
        vec![
            HapticPattern::Pour,
            HapticPattern::Pour,
            HapticPattern::Pour,
            HapticPattern::Finish,
        ]
    );
}

#[tokio::test]
async fn test_failing_sound_does_not_interrupt_brew() {
    let (dispatcher, sound, haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    sound.set_should_fail(true);
    let (tx, rx) = mpsc::unbounded_channel();
    let feedback = tokio::spawn(dispatcher.run(rx));

    let mut session = BrewSession::new(fast_config(), tx);
    session.start(&quick_plan()).unwrap();
    wait_for_phase(&session, TimerPhase::Finished).await;

    let state = session.state();
    assert!(state.finished);
    assert_eq!(state.total_remaining_seconds, 0.0);

    drop(session);
    timeout(Duration::from_secs(5), feedback)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sound.play_count(), 0);
    assert_eq!(haptic.pulse_count(), 4);
}

#[tokio::test]
async fn test_paused_session_fires_no_cues() {
    let (dispatcher, sound, _haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Long first step so the pause lands inside it.
    let plan = BrewPlan::from_steps(
        vec![
            BrewStep::pour(StepLabel::Bloom, 30, 10.0),
            BrewStep::rest(StepLabel::Drawdown, 1.0),
        ],
        30,
    );
    let mut session = BrewSession::new(fast_config(), tx);
    session.start(&plan).unwrap();
    sleep(Duration::from_millis(30)).await;
    session.pause().unwrap();
    sleep(Duration::from_millis(50)).await;

    while let Ok(event) = rx.try_recv() {
        dispatcher.handle(&event);
    }
    assert_eq!(sound.play_count(), 0);
    assert_eq!(session.state().phase, TimerPhase::Paused);
}

#[tokio::test]
async fn test_state_watch_reaches_final_snapshot() {
    let (tx, _rx) = mpsc::unbounded_channel::<TimerEvent>();
    let mut session = BrewSession::new(fast_config(), tx);
    let mut state_rx = session.subscribe();
    session.start(&quick_plan()).unwrap();

    let last = timeout(Duration::from_secs(5), async {
        loop {
            state_rx.changed().await.unwrap();
            let state = state_rx.borrow_and_update().clone();
            if state.finished {
                return state;
            }
        }
    })
    .await
    .unwrap();

    assert_eq!(last.current_step_index, 4);
    assert_eq!(last.step_remaining_seconds, 0);
}

// ============================================================================
// Interactive Brew Loop
// ============================================================================

#[tokio::test]
async fn test_run_brew_finishes_and_cues() {
    let (dispatcher, sound, haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    let (_controls_tx, controls_rx) = mpsc::unbounded_channel();

    let outcome = timeout(
        Duration::from_secs(5),
        run_brew(&quick_plan(), fast_config(), &dispatcher, controls_rx),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(outcome, BrewOutcome::Finished);
    assert_eq!(sound.play_count(), 4);
    assert_eq!(haptic.pulse_count(), 4);
}

#[tokio::test]
async fn test_run_brew_quit_aborts() {
    let (dispatcher, sound, _haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    let (controls_tx, controls_rx) = mpsc::unbounded_channel();
    let plan = BrewPlan::from_steps(vec![BrewStep::pour(StepLabel::Bloom, 30, 60.0)], 30);

    controls_tx.send(Control::Pause).unwrap();
    controls_tx.send(Control::Quit).unwrap();

    let outcome = timeout(
        Duration::from_secs(5),
        run_brew(&plan, fast_config(), &dispatcher, controls_rx),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(outcome, BrewOutcome::Aborted);
    assert_eq!(sound.play_count(), 0);
}

#[tokio::test]
async fn test_run_brew_survives_closed_input() {
    let (dispatcher, _sound, _haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    let (controls_tx, controls_rx) = mpsc::unbounded_channel::<Control>();
    drop(controls_tx);

    let outcome = timeout(
        Duration::from_secs(5),
        run_brew(&quick_plan(), fast_config(), &dispatcher, controls_rx),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(outcome, BrewOutcome::Finished);
}

#[tokio::test]
async fn test_run_brew_invalid_control_is_reported_not_fatal() {
    let (dispatcher, _sound, _haptic) = dispatcher_with_mocks(FeedbackConfig::default());
    let (controls_tx, controls_rx) = mpsc::unbounded_channel();
    // Resume while running is rejected by the timer and only printed.
    controls_tx.send(Control::Resume).unwrap();

    let outcome = timeout(
        Duration::from_secs(5),
        run_brew(&quick_plan(), fast_config(), &dispatcher, controls_rx),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(outcome, BrewOutcome::Finished);
}
