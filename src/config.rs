//! Application settings loaded with Figment.
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. built-in defaults
//! 2. an optional TOML file (`level_config.toml` unless `--config` is given)
//! 3. environment variables prefixed with `LEVELCFG_`, using `__` to nest
//!    (e.g. `LEVELCFG_LOGGING__LEVEL=debug`)
//!
//! A missing file is not an error. Settings only shape the window and the
//! log output; record data is never read from or written to disk.
//!
//! # Example
//! ```no_run
//! use level_config::config::AppSettings;
//!
//! let settings = AppSettings::load_from("level_config.toml")?;
//! println!("Window: {}x{}", settings.window.width, settings.window.height);
//! # Ok::<(), level_config::error::AppError>(())
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::layout;

/// Default settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "level_config.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LEVELCFG_";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Main window geometry
    #[serde(default)]
    pub window: WindowSettings,
    /// Log output
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Initial width in points
    pub width: f32,
    /// Initial height in points
    pub height: f32,
    /// Initial width of the navigation pane
    pub nav_width: f32,
    /// Center the window on screen at startup
    pub centered: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Transmitter and Level Configuration".to_string(),
            width: 800.0,
            height: 600.0,
            nav_width: layout::NAV_PANEL_WIDTH,
            centered: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, colored (for development)
    Pretty,
    /// Single-line, no colors
    Compact,
    /// JSON lines (for log aggregation)
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppSettings {
    /// Load settings from the default file and the environment.
    pub fn load() -> AppResult<Self> {
        Self::load_from(DEFAULT_SETTINGS_FILE)
    }

    /// Load and validate settings using `path` as the file layer.
    pub fn load_from<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let settings: Self = Self::figment(path).extract().map_err(Box::new)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The layered provider stack, without extraction.
    #[must_use]
    pub fn figment<P: AsRef<Path>>(path: P) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate settings after loading.
    pub fn validate(&self) -> AppResult<()> {
        crate::logging::parse_log_level(&self.logging.level).map_err(AppError::Validation)?;

        let w = &self.window;
        if !(w.width > 0.0 && w.height > 0.0) {
            return Err(AppError::Validation(format!(
                "Window size must be positive, got {}x{}",
                w.width, w.height
            )));
        }
        // The minimum window width is twice the navigation pane
        if !(w.nav_width > 0.0 && w.nav_width * 2.0 <= w.width) {
            return Err(AppError::Validation(format!(
                "Navigation width {} must be positive and at most half the window width {}",
                w.nav_width, w.width
            )));
        }

        Ok(())
    }
}
