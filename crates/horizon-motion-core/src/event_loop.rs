//! The single-threaded host loop.
//!
//! [`EventLoop`] owns the animation clock and the frame scheduler. Each
//! iteration first dispatches posted input tasks, then runs one animation
//! frame stamped with the clock's current time. Nothing in an iteration
//! blocks; [`run_until_idle`](EventLoop::run_until_idle) sleeps between frames
//! only when driven by a real clock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::error::{MotionError, Result};
use crate::frame::FrameScheduler;
use crate::logging::targets;
use crate::task::{TaskId, TaskQueue};

/// Outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpStats {
    /// Posted tasks dispatched.
    pub tasks: usize,
    /// Frame callbacks executed.
    pub frame_callbacks: usize,
}

/// Host event loop dispatching input tasks and animation frames on one thread.
pub struct EventLoop {
    clock: Arc<dyn Clock>,
    frames: Arc<FrameScheduler>,
    tasks: Mutex<TaskQueue>,
}

impl EventLoop {
    /// Create a loop driven by an arbitrary clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            frames: Arc::new(FrameScheduler::new()),
            tasks: Mutex::new(TaskQueue::new()),
        }
    }

    /// Create a loop driven by wall time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Create a loop driven by a fresh [`ManualClock`].
    pub fn manual() -> Self {
        Self::with_clock(Arc::new(ManualClock::new()))
    }

    /// The loop's clock.
    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// The loop's frame scheduler.
    pub fn frames(&self) -> Arc<FrameScheduler> {
        self.frames.clone()
    }

    /// Current time on the loop's clock.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Post an input task to run on the next iteration.
    pub fn post_task<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.tasks.lock().post(task)
    }

    /// Cancel a posted task that has not run yet.
    pub fn cancel_task(&self, id: TaskId) -> bool {
        self.tasks.lock().cancel(id)
    }

    /// Dispatch every task posted so far.
    ///
    /// Tasks posted by a running task wait for the next call.
    pub fn process_tasks(&self) -> usize {
        let batch = self.tasks.lock().take_all();
        let count = batch.len();
        for task in batch {
            task();
        }
        if count > 0 {
            tracing::trace!(target: targets::EVENT_LOOP, count, "processed posted tasks");
        }
        count
    }

    /// Run one iteration: posted tasks first, then one animation frame.
    pub fn pump(&self) -> PumpStats {
        let tasks = self.process_tasks();
        let frame_callbacks = self.frames.run_frame(self.clock.now());
        PumpStats {
            tasks,
            frame_callbacks,
        }
    }

    /// Check whether there is nothing left to dispatch.
    pub fn is_idle(&self) -> bool {
        self.tasks.lock().pending_count() == 0 && !self.frames.has_pending()
    }

    /// Advance a manual clock by `delta` and run one iteration.
    ///
    /// Fails with [`MotionError::ClockNotManual`] when the loop follows wall time.
    pub fn advance(&self, delta: Duration) -> Result<PumpStats> {
        let manual = self
            .clock
            .as_any()
            .downcast_ref::<ManualClock>()
            .ok_or(MotionError::ClockNotManual)?;
        manual.advance(delta);
        Ok(self.pump())
    }

    /// Iterate until no task or frame callback is pending, or `max_frames` is reached.
    ///
    /// A manual clock is advanced by `frame_interval` per iteration; a real
    /// clock is slept on instead. Returns the number of iterations run.
    pub fn run_until_idle(&self, frame_interval: Duration, max_frames: usize) -> usize {
        tracing::debug!(
            target: targets::EVENT_LOOP,
            interval_ms = frame_interval.as_millis() as u64,
            max_frames,
            "running until idle"
        );

        let manual = self.clock.as_any().downcast_ref::<ManualClock>();
        let mut iterations = 0;

        // Input posted before the first frame is handled at the current time.
        self.process_tasks();

        while !self.is_idle() && iterations < max_frames {
            match manual {
                Some(clock) => {
                    clock.advance(frame_interval);
                }
                None => std::thread::sleep(frame_interval),
            }
            self.pump();
            iterations += 1;
        }

        if !self.is_idle() {
            tracing::warn!(
                target: targets::EVENT_LOOP,
                iterations,
                "stopped before the loop became idle"
            );
        }
        iterations
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}
