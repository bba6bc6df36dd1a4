//! Animated values for Horizon Motion.
//!
//! This module provides the pieces that turn a trigger ("fade in over two
//! seconds") into a stream of values the render layer can follow:
//!
//! - [`AnimatedCell`]: a named scalar with current and target values
//! - [`AnimationDriver`]: starts, supersedes and stops timed runs on cells
//! - [`Easing`]: monotonic timing curves applied to run progress
//!
//! # Example
//!
//! ```
//! use horizon_motion::animation::{Easing, ease};
//!
//! let eased = ease(Easing::EaseInOut, 0.5);
//! assert_eq!(eased, 0.5);
//! ```

mod cell;
mod driver;
mod easing;

pub use cell::{AnimatedCell, AnimationRun, CellId, CellState, RunEnd, RunOutcome};
pub use driver::{AnimationDriver, RunHandle, TimingConfig};
pub use easing::{Easing, ease, lerp_eased};
