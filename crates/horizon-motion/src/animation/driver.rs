//! The animation driver.
//!
//! [`AnimationDriver::start`] begins a timed run on a cell and keeps it going
//! with one frame callback per animation frame. Each callback reads the frame
//! timestamp, writes the interpolated value into the cell (which publishes it),
//! and requests the next frame until the run reaches its target.
//!
//! Starting a run on a cell that already has one supersedes the old run: the
//! new run begins from whatever value the cell holds at that moment, and the
//! old run's pending callback finds itself stale and stops rescheduling.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_motion::animation::{AnimatedCell, AnimationDriver};
//! use horizon_motion_core::EventLoop;
//!
//! let event_loop = EventLoop::manual();
//! let driver = AnimationDriver::for_event_loop(&event_loop);
//! let opacity = Arc::new(AnimatedCell::new("opacity", 0.0));
//!
//! driver.start(&opacity, 1.0, 2000);
//! event_loop.advance(Duration::from_millis(1000))?;
//! assert!((opacity.value() - 0.5).abs() < 1e-9);
//! event_loop.advance(Duration::from_millis(1000))?;
//! assert_eq!(opacity.value(), 1.0);
//! # Ok::<(), horizon_motion_core::MotionError>(())
//! ```

use std::sync::Arc;
use std::time::Duration;

use horizon_motion_core::logging::targets;
use horizon_motion_core::{Clock, EventLoop, FrameScheduler};

use super::cell::{AnimatedCell, Tick};
use super::easing::Easing;

/// Parameters of a timed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    /// Value the run ends on.
    pub to_value: f64,
    /// Run length in milliseconds. Zero or negative jumps straight to `to_value`.
    pub duration_ms: i64,
    /// Timing curve; `None` uses the driver's default.
    pub easing: Option<Easing>,
}

impl TimingConfig {
    /// A run to `to_value` over `duration_ms` with the driver's default easing.
    pub fn new(to_value: f64, duration_ms: i64) -> Self {
        Self {
            to_value,
            duration_ms,
            easing: None,
        }
    }

    /// Use a specific easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// The run length, or zero for non-positive durations.
    pub fn duration(&self) -> Duration {
        u64::try_from(self.duration_ms)
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO)
    }
}

/// Handle to a run started by the driver.
#[derive(Debug, Clone)]
pub struct RunHandle {
    cell: Arc<AnimatedCell>,
    generation: u64,
}

impl RunHandle {
    /// The animated cell.
    pub fn cell(&self) -> &Arc<AnimatedCell> {
        &self.cell
    }

    /// Generation of this run on its cell.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this run is still the cell's active run.
    pub fn is_active(&self) -> bool {
        self.cell
            .active_run()
            .is_some_and(|run| run.generation == self.generation)
    }
}

/// Interpolates cells over time using frame callbacks.
#[derive(Clone)]
pub struct AnimationDriver {
    clock: Arc<dyn Clock>,
    frames: Arc<FrameScheduler>,
    default_easing: Easing,
}

impl AnimationDriver {
    /// Create a driver reading `clock` and ticking on `frames`.
    pub fn new(clock: Arc<dyn Clock>, frames: Arc<FrameScheduler>) -> Self {
        Self {
            clock,
            frames,
            default_easing: Easing::Linear,
        }
    }

    /// Create a driver bound to an event loop's clock and frame scheduler.
    pub fn for_event_loop(event_loop: &EventLoop) -> Self {
        Self::new(event_loop.clock(), event_loop.frames())
    }

    /// Use `easing` for runs that do not name one.
    pub fn with_default_easing(mut self, easing: Easing) -> Self {
        self.default_easing = easing;
        self
    }

    /// The easing used for runs that do not name one.
    pub fn default_easing(&self) -> Easing {
        self.default_easing
    }

    /// Animate `cell` from its current value to `to_value` over `duration_ms`.
    pub fn start(&self, cell: &Arc<AnimatedCell>, to_value: f64, duration_ms: i64) -> RunHandle {
        self.start_with(cell, TimingConfig::new(to_value, duration_ms))
    }

    /// Animate `cell` according to `config`.
    pub fn start_with(&self, cell: &Arc<AnimatedCell>, config: TimingConfig) -> RunHandle {
        let now = self.clock.now();
        let easing = config.easing.unwrap_or(self.default_easing);
        let duration = config.duration();
        let run = cell.begin_run(config.to_value, duration, easing, now);

        tracing::debug!(
            target: targets::ANIMATION,
            cell = cell.label(),
            generation = run.generation,
            from = run.from_value,
            to = run.to_value,
            duration_ms = config.duration_ms,
            "run started"
        );

        if duration.is_zero() {
            cell.tick(run.generation, now);
        } else {
            schedule_tick(self.frames.clone(), cell.clone(), run.generation);
        }

        RunHandle {
            cell: cell.clone(),
            generation: run.generation,
        }
    }

    /// Stop the cell's active run, leaving its value where the last tick put it.
    ///
    /// Returns `true` if a run was in flight.
    pub fn stop(&self, cell: &AnimatedCell) -> bool {
        let stopped = cell.stop_run();
        if stopped {
            tracing::debug!(target: targets::ANIMATION, cell = cell.label(), "run stopped");
        }
        stopped
    }
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("default_easing", &self.default_easing)
            .field("now", &self.clock.now())
            .finish()
    }
}

fn schedule_tick(frames: Arc<FrameScheduler>, cell: Arc<AnimatedCell>, generation: u64) {
    let next_frames = frames.clone();
    frames.request_frame(move |now| {
        if let Tick::Advanced(_) = cell.tick(generation, now) {
            schedule_tick(next_frames, cell, generation);
        }
    });
}
