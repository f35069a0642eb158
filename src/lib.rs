// Material Gallery Library
// Terminal gallery hosting the material tab list, progress and card components

// Core infrastructure - state, settings and events
pub mod core;

// Runtime configuration loading and validation
pub mod config;
pub mod config_validation;

// Rendering of pages and chrome
pub mod render;

// Log file setup
pub mod logging;

// Re-export commonly used items for convenience
pub use config::GalleryConfig;
pub use config_validation::{load_and_validate_config, HWND_MAIN_TAB_LIST};
pub use self::core::{App, AppConfig, AppEvent, EventHandler};
