//! Horizon Motion - animated values and components for a headless UI host.
//!
//! This is the main crate. It re-exports the core plumbing from
//! `horizon-motion-core` and adds:
//!
//! - [`animation`]: animated cells, easing curves and the frame-driven driver
//! - [`component`]: the component trait and the mount-logging decorator
//! - [`view`]: render trees, styles and the demo screen
//! - [`config`]: TOML configuration
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_motion::prelude::*;
//!
//! let event_loop = EventLoop::manual();
//! let driver = AnimationDriver::for_event_loop(&event_loop);
//! let mut view = ReanimatedView::new(ViewConfig::default(), driver);
//! view.mount();
//!
//! let tree = view.render().unwrap();
//! tree.press("Start Animation");
//! event_loop.advance(Duration::from_millis(1000))?;
//!
//! let tree = view.render().unwrap();
//! let offset = tree.find_by_key(keys::SLIDING_BOX).and_then(|node| node.translate_y());
//! assert_eq!(offset, Some(100.0));
//! # Ok::<(), horizon_motion::MotionError>(())
//! ```

pub use horizon_motion_core::*;

pub mod animation;
pub mod component;
pub mod config;
pub mod prelude;
pub mod view;

pub use config::{ConfigError, ConfigResult, MotionConfig};
