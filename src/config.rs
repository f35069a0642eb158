// Configuration loading module

use anyhow::{Context, Result};
use md_components::TabListConfigYaml;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    pub application: ApplicationConfig,
    /// Tab lists keyed by config name; each carries its own handle (HWND)
    #[serde(default)]
    pub tab_lists: BTreeMap<String, TabListConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

impl GalleryConfig {
    /// Find a tab list by handle name rather than by config key
    pub fn tab_list(&self, hwnd: &str) -> Option<&TabListConfigYaml> {
        self.tab_lists.values().find(|config| config.hwnd == hwnd)
    }
}

/// Path of the bundled configuration
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<GalleryConfig> {
    serde_yaml::from_str(contents).context("invalid gallery configuration")
}

pub fn load_config(config_path: Option<&Path>) -> Result<GalleryConfig> {
    let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("while loading {}", path.display()))
}
