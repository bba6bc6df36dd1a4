//! Animation-frame scheduling.
//!
//! The [`FrameScheduler`] is a cooperative queue of one-shot callbacks that run
//! on the next animation frame, all with the same frame timestamp. An animation
//! that wants to keep going requests another frame from inside its callback;
//! such requests are deferred to the following frame, so a frame always
//! terminates.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, SchedulerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a pending frame callback.
    pub struct FrameRequestId;
}

/// A boxed frame callback. It receives the frame timestamp.
type FrameCallback = Box<dyn FnOnce(Duration) + Send + 'static>;

#[derive(Default)]
struct FrameQueue {
    callbacks: SlotMap<FrameRequestId, FrameCallback>,
    order: VecDeque<FrameRequestId>,
    frames_run: u64,
}

/// Queue of callbacks waiting for the next animation frame.
#[derive(Default)]
pub struct FrameScheduler {
    inner: Mutex<FrameQueue>,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that `callback` runs on the next frame.
    pub fn request_frame<F>(&self, callback: F) -> FrameRequestId
    where
        F: FnOnce(Duration) + Send + 'static,
    {
        let mut queue = self.inner.lock();
        let id = queue.callbacks.insert(Box::new(callback));
        queue.order.push_back(id);
        id
    }

    /// Cancel a pending frame callback.
    pub fn cancel_frame(&self, id: FrameRequestId) -> Result<()> {
        let mut queue = self.inner.lock();
        if queue.callbacks.remove(id).is_some() {
            queue.order.retain(|pending| *pending != id);
            Ok(())
        } else {
            Err(SchedulerError::InvalidFrameRequest.into())
        }
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().callbacks.len()
    }

    /// Check whether any callback is waiting.
    pub fn has_pending(&self) -> bool {
        self.pending_count() > 0
    }

    /// Number of frames executed so far.
    pub fn frames_run(&self) -> u64 {
        self.inner.lock().frames_run
    }

    /// Run every callback that was pending when the frame started.
    ///
    /// Returns the number of callbacks executed.
    pub fn run_frame(&self, now: Duration) -> usize {
        let batch = {
            let mut queue = self.inner.lock();
            queue.frames_run += 1;
            std::mem::take(&mut queue.order)
        };

        let mut executed = 0;
        for id in batch {
            // Taken one at a time so that a callback can cancel a later one.
            let callback = self.inner.lock().callbacks.remove(id);
            if let Some(callback) = callback {
                callback(now);
                executed += 1;
            }
        }

        tracing::trace!(
            target: targets::FRAME,
            now_ms = now.as_millis() as u64,
            executed,
            "frame complete"
        );
        executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_callbacks_run_in_request_order() {
        let scheduler = FrameScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let seen = seen.clone();
            scheduler.request_frame(move |_| seen.lock().push(n));
        }

        assert_eq!(scheduler.run_frame(Duration::ZERO), 3);
        assert_eq!(*seen.lock(), vec![0, 1, 2]);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_all_callbacks_share_frame_timestamp() {
        let scheduler = FrameScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for _ in 0..2 {
            let seen = seen.clone();
            scheduler.request_frame(move |now| seen.lock().push(now));
        }
        scheduler.run_frame(Duration::from_millis(32));

        assert_eq!(
            *seen.lock(),
            vec![Duration::from_millis(32), Duration::from_millis(32)]
        );
    }

    #[test]
    fn test_request_during_frame_runs_next_frame() {
        let scheduler = Arc::new(FrameScheduler::new());
        let ticks = Arc::new(Mutex::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_ticks = ticks.clone();
        scheduler.request_frame(move |now| {
            inner_ticks.lock().push(now);
            let ticks = inner_ticks.clone();
            inner_scheduler.request_frame(move |now| ticks.lock().push(now));
        });

        assert_eq!(scheduler.run_frame(Duration::from_millis(16)), 1);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.run_frame(Duration::from_millis(32)), 1);
        assert_eq!(
            *ticks.lock(),
            vec![Duration::from_millis(16), Duration::from_millis(32)]
        );
        assert_eq!(scheduler.frames_run(), 2);
    }

    #[test]
    fn test_cancel_frame() {
        let scheduler = FrameScheduler::new();
        let id = scheduler.request_frame(|_| panic!("cancelled callback ran"));

        assert!(scheduler.cancel_frame(id).is_ok());
        assert!(scheduler.cancel_frame(id).is_err());
        assert_eq!(scheduler.run_frame(Duration::ZERO), 0);
    }
}
