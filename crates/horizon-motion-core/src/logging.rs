//! Logging facilities for Horizon Motion.
//!
//! Horizon Motion uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter(tracing_subscriber::EnvFilter::new("horizon_motion=debug"))
//!     .init();
//! ```
//!
//! Levels are used consistently across the workspace:
//!
//! - `trace`: per-frame and per-tick events
//! - `debug`: animation runs starting, settling or being superseded
//! - `info`: component mounts and button presses
//! - `warn`: misuse that is ignored, such as triggering an unmounted view

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_motion_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "horizon_motion_core::signal";
    /// Frame scheduler target.
    pub const FRAME: &str = "horizon_motion_core::frame";
    /// Event loop target.
    pub const EVENT_LOOP: &str = "horizon_motion_core::event_loop";
    /// Animation driver and cells.
    pub const ANIMATION: &str = "horizon_motion::animation";
    /// Component lifecycle and decorators.
    pub const COMPONENT: &str = "horizon_motion::component";
    /// View composition.
    pub const VIEW: &str = "horizon_motion::view";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_motion::config";
}
