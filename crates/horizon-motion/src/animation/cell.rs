//! Animated value cells.
//!
//! An [`AnimatedCell`] is one named scalar that the render layer reads (an
//! opacity, a vertical offset). It holds the current value, the target of the
//! most recent run, and at most one active [`AnimationRun`]. Every value
//! written to the cell is published on [`AnimatedCell::value_changed`].
//!
//! Runs are identified by a generation number. A frame callback only acts on
//! the cell while the cell's active run still carries the callback's
//! generation; once the run is superseded, stopped or complete, the callback
//! finds nothing to do and stops.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use horizon_motion_core::logging::targets;
use horizon_motion_core::{ConnectionId, Signal, SignalError};
use parking_lot::Mutex;

use super::easing::{Easing, lerp_eased};

/// A unique identifier for an animated cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(u64);

impl CellId {
    /// Get the raw u64 value of this cell ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(1);

/// Lifecycle of a cell with respect to its runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// No run has been started since the value was last set.
    #[default]
    Idle,
    /// A run is in flight.
    Running,
    /// The last run reached its target.
    Settled,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run reached its target value.
    Completed,
    /// A newer run on the same cell replaced it.
    Superseded,
    /// The run was stopped, or the cell's value was set directly.
    Stopped,
}

impl RunOutcome {
    /// Whether the run finished by reaching its target.
    pub fn finished(self) -> bool {
        self == RunOutcome::Completed
    }
}

/// Notification emitted on [`AnimatedCell::run_finished`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunEnd {
    /// Generation of the run that ended.
    pub generation: u64,
    /// How it ended.
    pub outcome: RunOutcome,
    /// The cell's value at that moment.
    pub value: f64,
}

/// One timed interpolation of a cell toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    /// Generation number of this run on its cell.
    pub generation: u64,
    /// Value of the cell when the run started.
    pub from_value: f64,
    /// Value the run ends on.
    pub to_value: f64,
    /// Length of the run.
    pub duration: Duration,
    /// Timing curve.
    pub easing: Easing,
    /// Clock time at which the run started.
    pub started_at: Duration,
}

impl AnimationRun {
    /// Raw (un-eased) progress at `now`, clamped to [0, 1].
    pub fn progress_at(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Duration) -> f64 {
        lerp_eased(
            self.easing,
            self.from_value,
            self.to_value,
            self.progress_at(now),
        )
    }
}

/// What a frame tick did to its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Tick {
    /// The run advanced and needs another frame.
    Advanced(f64),
    /// The run reached its target.
    Completed(f64),
    /// The tick belonged to a run that is no longer active.
    Stale,
}

#[derive(Debug)]
struct CellInner {
    value: f64,
    target: f64,
    started_at: Option<Duration>,
    state: CellState,
    run: Option<AnimationRun>,
}

/// A single named animatable value with current and target state.
pub struct AnimatedCell {
    id: CellId,
    label: String,
    inner: Mutex<CellInner>,
    generation: AtomicU64,
    value_changed: Signal<f64>,
    run_finished: Signal<RunEnd>,
}

impl AnimatedCell {
    /// Create a cell holding `initial`.
    pub fn new(label: impl Into<String>, initial: f64) -> Self {
        Self {
            id: CellId(NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed)),
            label: label.into(),
            inner: Mutex::new(CellInner {
                value: initial,
                target: initial,
                started_at: None,
                state: CellState::Idle,
                run: None,
            }),
            generation: AtomicU64::new(0),
            value_changed: Signal::new(),
            run_finished: Signal::new(),
        }
    }

    /// The cell's unique ID.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// The cell's label, used in logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.inner.lock().value
    }

    /// The target of the most recent run, or the value last set directly.
    pub fn target(&self) -> f64 {
        self.inner.lock().target
    }

    /// Clock time at which the most recent run started.
    pub fn started_at(&self) -> Option<Duration> {
        self.inner.lock().started_at
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CellState {
        self.inner.lock().state
    }

    /// Check whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.inner.lock().run.is_some()
    }

    /// A copy of the active run, if any.
    pub fn active_run(&self) -> Option<AnimationRun> {
        self.inner.lock().run
    }

    /// Generation of the most recently started run.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Signal emitted with every value written to the cell.
    pub fn value_changed(&self) -> &Signal<f64> {
        &self.value_changed
    }

    /// Signal emitted whenever a run ends, however it ends.
    pub fn run_finished(&self) -> &Signal<RunEnd> {
        &self.run_finished
    }

    /// Subscribe to value updates.
    pub fn subscribe<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&f64) + Send + Sync + 'static,
    {
        self.value_changed.connect(slot)
    }

    /// Remove a value subscription.
    pub fn unsubscribe(&self, id: ConnectionId) -> Result<(), SignalError> {
        self.value_changed.try_disconnect(id)
    }

    /// Jump to `value`, stopping any run in flight.
    pub fn set_value(&self, value: f64) {
        let stopped = {
            let mut inner = self.inner.lock();
            let stopped = inner.run.take();
            inner.value = value;
            inner.target = value;
            inner.state = CellState::Idle;
            stopped
        };

        tracing::trace!(target: targets::ANIMATION, cell = %self.label, value, "value set");
        self.value_changed.emit(value);
        if let Some(run) = stopped {
            self.finish(run, RunOutcome::Stopped, value);
        }
    }

    /// Replace any active run with a new one starting from the current value.
    pub(crate) fn begin_run(
        &self,
        to_value: f64,
        duration: Duration,
        easing: Easing,
        now: Duration,
    ) -> AnimationRun {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (run, superseded, value) = {
            let mut inner = self.inner.lock();
            let run = AnimationRun {
                generation,
                from_value: inner.value,
                to_value,
                duration,
                easing,
                started_at: now,
            };
            let superseded = inner.run.replace(run);
            inner.target = to_value;
            inner.started_at = Some(now);
            inner.state = CellState::Running;
            (run, superseded, inner.value)
        };

        if let Some(old) = superseded {
            tracing::debug!(
                target: targets::ANIMATION,
                cell = %self.label,
                old_generation = old.generation,
                generation,
                "run superseded"
            );
            self.finish(old, RunOutcome::Superseded, value);
        }
        run
    }

    /// Advance the run of `generation` to `now` and publish the new value.
    pub(crate) fn tick(&self, generation: u64, now: Duration) -> Tick {
        let result = {
            let mut inner = self.inner.lock();
            match inner.run {
                Some(run) if run.generation == generation => {
                    if run.progress_at(now) >= 1.0 {
                        inner.value = run.to_value;
                        inner.run = None;
                        inner.state = CellState::Settled;
                        Some((run, Tick::Completed(run.to_value)))
                    } else {
                        let value = run.value_at(now);
                        inner.value = value;
                        Some((run, Tick::Advanced(value)))
                    }
                }
                _ => None,
            }
        };

        match result {
            Some((_, Tick::Advanced(value))) => {
                tracing::trace!(target: targets::ANIMATION, cell = %self.label, value, "tick");
                self.value_changed.emit(value);
                Tick::Advanced(value)
            }
            Some((run, Tick::Completed(value))) => {
                self.value_changed.emit(value);
                self.finish(run, RunOutcome::Completed, value);
                Tick::Completed(value)
            }
            _ => Tick::Stale,
        }
    }

    /// End the active run without moving the value.
    ///
    /// Returns `true` if a run was in flight.
    pub(crate) fn stop_run(&self) -> bool {
        let stopped = {
            let mut inner = self.inner.lock();
            let stopped = inner.run.take();
            if stopped.is_some() {
                inner.state = CellState::Idle;
            }
            stopped.map(|run| (run, inner.value))
        };

        match stopped {
            Some((run, value)) => {
                self.finish(run, RunOutcome::Stopped, value);
                true
            }
            None => false,
        }
    }

    fn finish(&self, run: AnimationRun, outcome: RunOutcome, value: f64) {
        if outcome.finished() {
            tracing::debug!(
                target: targets::ANIMATION,
                cell = %self.label,
                generation = run.generation,
                value,
                "run settled"
            );
        }
        self.run_finished.emit(RunEnd {
            generation: run.generation,
            outcome,
            value,
        });
    }
}

impl std::fmt::Debug for AnimatedCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("AnimatedCell")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("value", &inner.value)
            .field("target", &inner.target)
            .field("state", &inner.state)
            .finish()
    }
}

static_assertions::assert_impl_all!(AnimatedCell: Send, Sync);
