//! Integration tests for animation runs driven by the event loop.

use std::sync::Arc;
use std::time::Duration;

use horizon_motion::EventLoop;
use horizon_motion::animation::{
    AnimatedCell, AnimationDriver, CellState, Easing, RunOutcome, TimingConfig,
};
use parking_lot::Mutex;

const FRAME: Duration = Duration::from_millis(16);

fn setup() -> (EventLoop, AnimationDriver) {
    let event_loop = EventLoop::manual();
    let driver = AnimationDriver::for_event_loop(&event_loop);
    (event_loop, driver)
}

fn record_values(cell: &AnimatedCell) -> Arc<Mutex<Vec<f64>>> {
    let values = Arc::new(Mutex::new(Vec::new()));
    let values_clone = values.clone();
    cell.subscribe(move |&value| values_clone.lock().push(value));
    values
}

fn record_outcomes(cell: &AnimatedCell) -> Arc<Mutex<Vec<RunOutcome>>> {
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let outcomes_clone = outcomes.clone();
    cell.run_finished()
        .connect(move |end| outcomes_clone.lock().push(end.outcome));
    outcomes
}

#[test]
fn test_fade_scenario() {
    let (event_loop, driver) = setup();
    let opacity = Arc::new(AnimatedCell::new("opacity", 0.0));
    let outcomes = record_outcomes(&opacity);

    driver.start(&opacity, 1.0, 2000);
    event_loop.advance(Duration::from_millis(1000)).unwrap();
    assert!((opacity.value() - 0.5).abs() < 1e-9);
    assert_eq!(opacity.state(), CellState::Running);

    event_loop.advance(Duration::from_millis(1000)).unwrap();
    assert_eq!(opacity.value(), 1.0);
    assert_eq!(opacity.state(), CellState::Settled);
    assert_eq!(*outcomes.lock(), vec![RunOutcome::Completed]);
    assert!(event_loop.is_idle());
}

#[test]
fn test_every_positive_duration_reaches_target() {
    for duration_ms in [1, 15, 16, 17, 250, 999, 2000, 3333] {
        let (event_loop, driver) = setup();
        let cell = Arc::new(AnimatedCell::new("offset", -20.0));

        driver.start(&cell, 100.0, duration_ms);
        event_loop.run_until_idle(FRAME, 1000);

        assert_eq!(cell.value(), 100.0, "duration {duration_ms}");
        assert!(event_loop.now() >= Duration::from_millis(duration_ms as u64));
    }
}

#[test]
fn test_every_easing_reaches_target_within_bounds() {
    for easing in [
        Easing::Linear,
        Easing::Standard,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInOutCubic,
        Easing::EaseInOutSine,
    ] {
        let (event_loop, driver) = setup();
        let cell = Arc::new(AnimatedCell::new("opacity", 0.0));
        let values = record_values(&cell);

        driver.start_with(&cell, TimingConfig::new(1.0, 500).with_easing(easing));
        event_loop.run_until_idle(FRAME, 1000);

        let values = values.lock();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)), "{easing:?}");
        assert!(values.windows(2).all(|w| w[0] <= w[1] + 1e-9), "{easing:?}");
        assert_eq!(values.last(), Some(&1.0));
    }
}

#[test]
fn test_restart_stays_between_current_value_and_new_target() {
    let (event_loop, driver) = setup();
    let cell = Arc::new(AnimatedCell::new("offset", 0.0));

    driver.start(&cell, 100.0, 1000);
    event_loop.advance(Duration::from_millis(300)).unwrap();
    let at_restart = cell.value();
    assert!((at_restart - 30.0).abs() < 1e-9);

    let values = record_values(&cell);
    driver.start(&cell, 50.0, 1000);
    event_loop.run_until_idle(FRAME, 1000);

    let values = values.lock();
    assert!(!values.is_empty());
    assert!(
        values
            .iter()
            .all(|v| *v >= at_restart - 1e-9 && *v <= 50.0 + 1e-9)
    );
    assert_eq!(cell.value(), 50.0);
}

#[test]
fn test_restart_in_reverse_direction() {
    let (event_loop, driver) = setup();
    let cell = Arc::new(AnimatedCell::new("offset", 0.0));

    driver.start(&cell, 100.0, 1000);
    event_loop.advance(Duration::from_millis(500)).unwrap();

    let values = record_values(&cell);
    driver.start(&cell, 0.0, 400);
    event_loop.run_until_idle(FRAME, 1000);

    let values = values.lock();
    assert!(values.iter().all(|v| (0.0..=50.0 + 1e-9).contains(v)));
    assert!(values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(cell.value(), 0.0);
}

#[test]
fn test_superseded_run_stops_ticking() {
    let (event_loop, driver) = setup();
    let cell = Arc::new(AnimatedCell::new("opacity", 0.0));
    let outcomes = record_outcomes(&cell);

    let first = driver.start(&cell, 1.0, 1000);
    event_loop.advance(FRAME).unwrap();
    let second = driver.start(&cell, 1.0, 1000);

    assert!(!first.is_active());
    assert!(second.is_active());
    assert_eq!(*outcomes.lock(), vec![RunOutcome::Superseded]);

    // Both callbacks are queued; only the live one reschedules.
    assert_eq!(event_loop.frames().pending_count(), 2);
    event_loop.advance(FRAME).unwrap();
    assert_eq!(event_loop.frames().pending_count(), 1);

    event_loop.run_until_idle(FRAME, 1000);
    assert_eq!(
        *outcomes.lock(),
        vec![RunOutcome::Superseded, RunOutcome::Completed]
    );
}

#[test]
fn test_non_positive_duration_jumps_synchronously() {
    for duration_ms in [0, -1, -2000] {
        let (event_loop, driver) = setup();
        let cell = Arc::new(AnimatedCell::new("offset", 3.0));
        let values = record_values(&cell);

        driver.start(&cell, 5.0, duration_ms);

        assert_eq!(*values.lock(), vec![5.0]);
        assert_eq!(cell.state(), CellState::Settled);
        assert!(event_loop.is_idle());
    }
}

#[test]
fn test_stop_holds_value() {
    let (event_loop, driver) = setup();
    let cell = Arc::new(AnimatedCell::new("offset", 0.0));
    let outcomes = record_outcomes(&cell);

    let handle = driver.start(&cell, 100.0, 1000);
    event_loop.advance(Duration::from_millis(250)).unwrap();
    assert!(driver.stop(&cell));
    assert!(!handle.is_active());
    assert!(!driver.stop(&cell));

    event_loop.run_until_idle(FRAME, 1000);
    assert!((cell.value() - 25.0).abs() < 1e-9);
    assert_eq!(cell.target(), 100.0);
    assert_eq!(*outcomes.lock(), vec![RunOutcome::Stopped]);
}

#[test]
fn test_independent_cells_run_concurrently() {
    let (event_loop, driver) = setup();
    let opacity = Arc::new(AnimatedCell::new("opacity", 0.0));
    let offset = Arc::new(AnimatedCell::new("offset", 0.0));

    driver.start(&opacity, 1.0, 2000);
    driver.start(&offset, 100.0, 1000);

    event_loop.advance(Duration::from_millis(1000)).unwrap();
    assert_eq!(offset.value(), 100.0);
    assert!((opacity.value() - 0.5).abs() < 1e-9);

    event_loop.advance(Duration::from_millis(1000)).unwrap();
    assert_eq!(opacity.value(), 1.0);
    assert_eq!(offset.value(), 100.0);
}
