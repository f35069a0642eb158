// Configuration validation module

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use md_components::validate_tab_list_config;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{load_config, GalleryConfig};

/// Handle of the tab list that switches gallery pages
pub const HWND_MAIN_TAB_LIST: &str = "gallery.main";

/// Page ids the gallery knows how to render
pub const KNOWN_PAGES: &[&str] = &["overview", "progress", "cards", "help"];

/// Problems specific to the gallery's use of the configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tab list with hwnd '{hwnd}' not found in config. Available tab lists: {available}")]
    MissingTabList { hwnd: String, available: String },

    #[error("tab list '{key}' reuses handle '{hwnd}'")]
    DuplicateHandle { key: String, hwnd: String },
}

/// Check everything the components would reject, plus the gallery's own needs.
/// Unknown page ids and variant tokens are only warned about.
pub fn validate_config(config: &GalleryConfig) -> Result<()> {
    let mut handles = HashSet::new();
    for (key, list) in &config.tab_lists {
        validate_tab_list_config(list).with_context(|| format!("tab list '{key}'"))?;
        if !handles.insert(list.hwnd.as_str()) {
            return Err(ConfigError::DuplicateHandle {
                key: key.clone(),
                hwnd: list.hwnd.clone(),
            }
            .into());
        }
        for token in list.variant.split_whitespace() {
            if !matches!(token, "primary" | "secondary" | "vertical" | "navigation") {
                warn!("tab list '{key}': unrecognized variant token '{token}'");
            }
        }
    }

    let main = config
        .tab_list(HWND_MAIN_TAB_LIST)
        .ok_or_else(|| ConfigError::MissingTabList {
            hwnd: HWND_MAIN_TAB_LIST.to_string(),
            available: config.tab_lists.keys().map(String::as_str).collect::<Vec<_>>().join(", "),
        })?;
    for tab in &main.tabs {
        if !KNOWN_PAGES.contains(&tab.id.as_str()) {
            warn!("main tab '{}' has no page; it will render empty", tab.id);
        }
    }
    Ok(())
}

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<&Path>) -> Result<GalleryConfig> {
    let config = load_config(config_path)?;
    validate_config(&config)?;
    info!("configuration loaded with {} tab lists", config.tab_lists.len());
    Ok(config)
}
