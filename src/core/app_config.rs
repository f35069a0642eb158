// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for md-gallery
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// UI and display settings
    pub ui: UiSettings,

    /// Log output settings
    pub logging: LogSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Frame interval while animations run
    pub tick_rate: Duration,

    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Default for the reduced-motion preference
    pub reduced_motion: bool,

    /// UI theme
    pub theme: String,
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    /// File the log is written to; the terminal is in raw mode
    pub file: String,

    /// Filter used when RUST_LOG is unset
    pub level: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(compiled::TICK_RATE_MS),
            mouse_enabled: compiled::MOUSE_ENABLED,
            reduced_motion: compiled::REDUCED_MOTION,
            theme: compiled::THEME.to_string(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: compiled::LOG_FILE.to_string(),
            level: compiled::LOG_LEVEL.to_string(),
        }
    }
}
