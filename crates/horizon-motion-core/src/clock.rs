//! Monotonic time sources for the animation clock.
//!
//! Every timestamp in Horizon Motion is a [`Duration`] measured from the
//! clock's origin. [`SystemClock`] follows wall time; [`ManualClock`] only
//! moves when told to, which keeps animation tests deterministic.

use std::any::Any;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A monotonic time source.
pub trait Clock: Send + Sync + 'static {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;

    /// Downcast support, used to reach a [`ManualClock`] behind a trait object.
    fn as_any(&self) -> &dyn Any;
}

/// Clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Clock that advances only through [`advance`](Self::advance) or [`set`](Self::set).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Create a manual clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `delta` and return the new time.
    pub fn advance(&self, delta: Duration) -> Duration {
        let mut now = self.now.lock();
        *now += delta;
        *now
    }

    /// Jump to an absolute time.
    ///
    /// Times earlier than the current one are ignored so the clock stays monotonic.
    pub fn set(&self, time: Duration) {
        let mut now = self.now.lock();
        if time > *now {
            *now = time;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.advance(Duration::from_millis(16)), Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(16));
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new();
        clock.set(Duration::from_millis(500));
        clock.set(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(500));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }

    #[test]
    fn test_downcast_to_manual() {
        let clock: Box<dyn Clock> = Box::new(ManualClock::new());
        assert!(clock.as_any().downcast_ref::<ManualClock>().is_some());
        let system: Box<dyn Clock> = Box::new(SystemClock::new());
        assert!(system.as_any().downcast_ref::<ManualClock>().is_none());
    }
}
