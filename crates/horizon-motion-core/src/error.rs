//! Error types for Horizon Motion.

use std::fmt;

/// The main error type for Horizon Motion core operations.
#[derive(Debug)]
pub enum MotionError {
    /// Frame scheduling error.
    Scheduler(SchedulerError),
    /// Signal-related error.
    Signal(SignalError),
    /// The clock cannot be driven manually.
    ClockNotManual,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduler(err) => write!(f, "Scheduler error: {err}"),
            Self::Signal(err) => write!(f, "Signal error: {err}"),
            Self::ClockNotManual => {
                write!(f, "The event loop clock is not a manual clock and cannot be advanced")
            }
        }
    }
}

impl std::error::Error for MotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scheduler(err) => Some(err),
            Self::Signal(err) => Some(err),
            Self::ClockNotManual => None,
        }
    }
}

/// Frame scheduler errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The frame request ID is invalid or the callback has already run.
    InvalidFrameRequest,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrameRequest => write!(f, "Invalid or already executed frame request"),
        }
    }
}

impl std::error::Error for SchedulerError {}

impl From<SchedulerError> for MotionError {
    fn from(err: SchedulerError) -> Self {
        Self::Scheduler(err)
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

impl From<SignalError> for MotionError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}

/// A specialized Result type for Horizon Motion core operations.
pub type Result<T> = std::result::Result<T, MotionError>;
