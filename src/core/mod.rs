// Core infrastructure module
// Application state, compiled-in settings and event translation

pub mod app;
pub mod app_config;
pub mod events;

pub use app::{App, GalleryLayout};
pub use app_config::AppConfig;
pub use events::{AppEvent, EventHandler};
