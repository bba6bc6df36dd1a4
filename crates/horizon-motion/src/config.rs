//! Configuration for the demo screen and its animation clock.
//!
//! Configuration is read from TOML. Every key is optional; missing keys take
//! the defaults below.
//!
//! ```toml
//! [animation]
//! frame_interval_ms = 16
//! easing = "linear"          # or "standard", "ease-in-out", ...
//!
//! [view]
//! title = "Chenlee Ebdao Reanimated App"
//! click_label = "Click Me"
//! fade_label = "Fade In"
//! slide_label = "Start Animation"
//!
//! [view.fade]
//! from = 0.0
//! to = 1.0
//! duration_ms = 2000
//!
//! [view.slide]
//! from = 0.0
//! to = 100.0
//! duration_ms = 1000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use horizon_motion_core::logging::targets;
use serde::Deserialize;

use crate::animation::Easing;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Create a value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub animation: AnimationSettings,
    pub view: ViewConfig,
}

/// Settings of the animation clock.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Interval between animation frames.
    pub frame_interval_ms: u64,
    /// Easing used by runs that do not name one.
    pub easing: Easing,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            easing: Easing::Linear,
        }
    }
}

impl AnimationSettings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// One trigger's run: reset to `from`, then animate to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RunSettings {
    pub from: f64,
    pub to: f64,
    /// Zero or negative jumps straight to `to`.
    pub duration_ms: i64,
}

/// Labels and runs of the demo screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub title: String,
    pub click_label: String,
    pub fade_label: String,
    pub slide_label: String,
    pub fade: RunSettings,
    pub slide: RunSettings,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Chenlee Ebdao Reanimated App".to_string(),
            click_label: "Click Me".to_string(),
            fade_label: "Fade In".to_string(),
            slide_label: "Start Animation".to_string(),
            fade: RunSettings {
                from: 0.0,
                to: 1.0,
                duration_ms: 2000,
            },
            slide: RunSettings {
                from: 0.0,
                to: 100.0,
                duration_ms: 1000,
            },
        }
    }
}

impl MotionConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::invalid_value(
                "animation.frame_interval_ms",
                "must be greater than zero",
            ));
        }
        for (field, run) in [("view.fade", &self.view.fade), ("view.slide", &self.view.slide)] {
            if !run.from.is_finite() {
                return Err(ConfigError::invalid_value(
                    format!("{field}.from"),
                    "must be a finite number",
                ));
            }
            if !run.to.is_finite() {
                return Err(ConfigError::invalid_value(
                    format!("{field}.to"),
                    "must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = MotionConfig::from_toml_str("").unwrap();
        assert_eq!(config, MotionConfig::default());
        assert_eq!(config.animation.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.view.fade.duration_ms, 2000);
        assert_eq!(config.view.slide.to, 100.0);
    }

    #[test]
    fn test_partial_override() {
        let config = MotionConfig::from_toml_str(
            r#"
            [animation]
            easing = "ease-in-out"

            [view]
            title = "Motion"

            [view.slide]
            from = 0.0
            to = 250.0
            duration_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.animation.easing, Easing::EaseInOut);
        assert_eq!(config.animation.frame_interval_ms, 16);
        assert_eq!(config.view.title, "Motion");
        assert_eq!(config.view.fade_label, "Fade In");
        assert_eq!(config.view.slide.to, 250.0);
        assert_eq!(config.view.fade.to, 1.0);
    }

    #[test]
    fn test_zero_frame_interval_rejected() {
        let err = MotionConfig::from_toml_str("[animation]\nframe_interval_ms = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "animation.frame_interval_ms"
        ));
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let err = MotionConfig::from_toml_str(
            "[view.fade]\nfrom = 0.0\nto = inf\nduration_ms = 10",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'view.fade.to': must be a finite number"
        );
    }

    #[test]
    fn test_negative_duration_accepted() {
        let config = MotionConfig::from_toml_str(
            "[view.fade]\nfrom = 0.0\nto = 1.0\nduration_ms = -1",
        )
        .unwrap();
        assert_eq!(config.view.fade.duration_ms, -1);
    }

    #[test]
    fn test_parse_error() {
        let err = MotionConfig::from_toml_str("[animation\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_logs_under_config_target() {
        use std::io;
        use std::sync::Arc;

        use parking_lot::Mutex;

        #[derive(Clone, Default)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Buffer {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let path = std::env::temp_dir()
            .join(format!("horizon-motion-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[animation]\nframe_interval_ms = 8\n").unwrap();

        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, || MotionConfig::load(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().animation.frame_interval_ms, 8);
        let logs = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
        assert!(logs.contains("horizon_motion::config"), "{logs}");
        assert!(logs.contains("configuration loaded"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MotionConfig::load("/nonexistent/horizon-motion.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
