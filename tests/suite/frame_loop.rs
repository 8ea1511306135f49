//! The host frame cadence feeding measured time into the app.
//!
//! Frames read tokio's paused clock and hand it to `App::tick_at`, the same
//! path `App::tick` takes with the wall clock.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval};

use folio_engine::{MAX_FRAME_DELTA, UiOptions};

use crate::common::portfolio_app;

const FRAME_DURATION: Duration = Duration::from_millis(16);

#[tokio::test(start_paused = true)]
async fn fixed_cadence_replays_exact_elapsed_time() {
    let mut app = portfolio_app(UiOptions::default());
    let mut frames = interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let start = Instant::now();
    // The runtime clock started before the app, so anchoring replays nothing.
    assert_eq!(app.tick_at(start.into_std()), Duration::ZERO);

    // The first tick completes immediately, so 300 ticks span 299 frames.
    let mut replayed = Duration::ZERO;
    for _ in 0..300 {
        frames.tick().await;
        replayed += app.tick_at(Instant::now().into_std());
    }
    assert_eq!(replayed, Duration::from_millis(299 * 16));

    // 4784ms: the second role started at 4350ms and types every 100ms from 4450ms.
    let snap = app.snapshot();
    assert_eq!(snap.current_role_text, "desi");
    // Nine flips by 4500ms.
    assert!(!snap.cursor_visible);
}

#[tokio::test(start_paused = true)]
async fn stalled_frames_catch_up_without_drift() {
    let mut app = portfolio_app(UiOptions::default());
    let start = Instant::now();
    app.tick_at(start.into_std());

    // Irregular gaps that sum to 1900ms.
    for gap in [7_u64, 500, 3, 390, 1000] {
        tokio::time::sleep(Duration::from_millis(gap)).await;
        app.tick_at(Instant::now().into_std());
    }

    assert_eq!(Instant::now() - start, Duration::from_millis(1900));
    assert_eq!(app.snapshot().current_role_text, "developer");
}

#[tokio::test(start_paused = true)]
async fn suspended_host_replays_at_most_the_cap() {
    let mut app = portfolio_app(UiOptions::default());
    app.tick_at(Instant::now().into_std());

    // Ctrl-Z for a minute: only MAX_FRAME_DELTA of it is replayed.
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(app.tick_at(Instant::now().into_std()), MAX_FRAME_DELTA);
    // 5000ms: second role started at 4350ms, typed "design" by 4950ms.
    assert_eq!(app.snapshot().current_role_text, "design");
}
