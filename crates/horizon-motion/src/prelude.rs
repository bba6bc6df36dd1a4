//! Prelude module for Horizon Motion.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_motion::prelude::*;
//! ```

// ============================================================================
// Event Loop and Time
// ============================================================================

pub use crate::{Clock, EventLoop, ManualClock, SystemClock};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionId, Property, Signal};

// ============================================================================
// Animation
// ============================================================================

pub use crate::animation::{
    AnimatedCell, AnimationDriver, CellState, Easing, RunHandle, TimingConfig,
};

// ============================================================================
// Components and Views
// ============================================================================

pub use crate::component::{Button, ButtonProps, Component, ComponentInstance, with_logging};
pub use crate::view::{Node, ReanimatedView, keys};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{MotionConfig, ViewConfig};
