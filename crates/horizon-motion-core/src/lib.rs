//! Core systems for Horizon Motion.
//!
//! This crate provides the host-side plumbing that animated UI code runs on:
//!
//! - **Signal/Slot System**: Type-safe publication of values and events
//! - **Property System**: Values with change detection
//! - **Clocks**: Wall-time and manually driven monotonic time sources
//! - **Frame Scheduler**: `requestAnimationFrame`-style callback queue
//! - **Event Loop**: Single-threaded dispatch of input tasks and frames
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_motion_core::{EventLoop, Signal};
//!
//! let event_loop = EventLoop::manual();
//! let ticked = Arc::new(Signal::<Duration>::new());
//!
//! ticked.connect(|now| println!("frame at {:?}", now));
//!
//! let signal = ticked.clone();
//! event_loop.frames().request_frame(move |now| signal.emit(now));
//! event_loop.advance(Duration::from_millis(16))?;
//! # Ok::<(), horizon_motion_core::MotionError>(())
//! ```

pub mod clock;
mod error;
pub mod event_loop;
pub mod frame;
pub mod logging;
pub mod property;
pub mod signal;
mod task;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{MotionError, Result, SchedulerError, SignalError};
pub use event_loop::{EventLoop, PumpStats};
pub use frame::{FrameRequestId, FrameScheduler};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::TaskId;
