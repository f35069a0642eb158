// Tab List Manager
// YAML configuration helpers and a manager owning every configured tab list

use std::collections::HashSet;
use std::time::Instant;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::error::Result;
use crate::core::{AriaHasPopup, ComponentError, Platform, RectRegistry};
use crate::elements::selection_group::SelectionGroup;
use crate::elements::tab::Tab;
use crate::elements::tab_list::TabList;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab list configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabListConfigYaml {
    /// Handle name (HWND); prefixes every registry name of the list
    pub hwnd: String,
    /// Variant tokens, e.g. "primary", "vertical", "navigation"
    #[serde(default = "default_variant")]
    pub variant: String,
    /// Initially selected index; overrides any tab marked `default: active`
    pub selected: Option<usize>,
    /// List of tabs
    pub tabs: Vec<TabConfigYaml>,
}

fn default_variant() -> String {
    "primary".to_string()
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab ID, unique within its list
    pub id: String,
    /// Label slot
    pub label: String,
    /// Leading icon slot
    pub start: Option<String>,
    /// Trailing badge slot
    pub end: Option<String>,
    /// Renders the tab as a link
    pub href: Option<String>,
    pub target: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub aria_label: Option<String>,
    /// One of false, true, menu, listbox, tree, grid, dialog
    pub aria_has_popup: Option<String>,
    /// Optional: "active" selects this tab initially
    pub default: Option<String>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Build a tab from its YAML configuration. Unknown `aria_has_popup` values
/// are dropped with a warning.
pub fn create_tab(config: &TabConfigYaml) -> Tab {
    let mut tab = Tab::new(config.id.clone(), config.label.clone()).with_disabled(config.disabled);
    if let Some(start) = &config.start {
        tab = tab.with_start(start.clone());
    }
    if let Some(end) = &config.end {
        tab = tab.with_end(end.clone());
    }
    if let Some(href) = &config.href {
        tab = tab.with_href(href.clone());
    }
    if let Some(target) = &config.target {
        tab = tab.with_target(target.clone());
    }
    if let Some(label) = &config.aria_label {
        tab = tab.with_aria_label(label.clone());
    }
    if let Some(raw) = &config.aria_has_popup {
        match raw.parse::<AriaHasPopup>() {
            Ok(value) => tab = tab.with_aria_has_popup(value),
            Err(err) => warn!("tab '{}': {}", config.id, err),
        }
    }
    tab
}

/// Initially selected index: explicit `selected`, else the first tab marked
/// `default: active`, else the first tab
pub fn initial_selection(config: &TabListConfigYaml) -> Result<usize> {
    if let Some(index) = config.selected {
        if index >= config.tabs.len() {
            return Err(ComponentError::SelectedOutOfRange {
                hwnd: config.hwnd.clone(),
                index,
                len: config.tabs.len(),
            });
        }
        return Ok(index);
    }

    let mut marked = config
        .tabs
        .iter()
        .enumerate()
        .filter(|(_, tab)| tab.default.as_deref() == Some("active"))
        .map(|(index, _)| index);
    let first = marked.next();
    if marked.next().is_some() {
        warn!("tab list '{}' marks several tabs active; using the first", config.hwnd);
    }
    Ok(first.unwrap_or(0))
}

/// Check the configuration for problems the components cannot absorb
pub fn validate_tab_list_config(config: &TabListConfigYaml) -> Result<()> {
    if config.tabs.is_empty() {
        return Err(ComponentError::EmptyTabList {
            hwnd: config.hwnd.clone(),
        });
    }
    let mut seen = HashSet::new();
    for tab in &config.tabs {
        if !seen.insert(tab.id.as_str()) {
            return Err(ComponentError::DuplicateTabId {
                hwnd: config.hwnd.clone(),
                id: tab.id.clone(),
            });
        }
    }
    initial_selection(config).map(|_| ())
}

/// Create a tab list from YAML configuration
pub fn create_tab_list_from_config(config: &TabListConfigYaml) -> Result<TabList<Tab>> {
    validate_tab_list_config(config)?;
    let selected = initial_selection(config)?;
    let tabs = config.tabs.iter().map(create_tab).collect();
    Ok(TabList::new(config.hwnd.clone(), tabs)
        .with_variant(config.variant.as_str())
        .with_selected(Some(selected)))
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                            Tab List Manager - Tab Lists by Handle                              │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Owns every configured tab list and addresses them by handle name
#[derive(Default)]
pub struct TabListManager {
    lists: Vec<TabList<Tab>>,
}

impl TabListManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create every list; stops at the first invalid configuration
    pub fn from_configs<'a>(configs: impl IntoIterator<Item = &'a TabListConfigYaml>) -> Result<Self> {
        let mut manager = Self::new();
        for config in configs {
            manager.create(config)?;
        }
        Ok(manager)
    }

    /// Create a list from config, replacing any list with the same handle
    pub fn create(&mut self, config: &TabListConfigYaml) -> Result<&mut TabList<Tab>> {
        let list = create_tab_list_from_config(config)?;
        let index = match self.position(&config.hwnd) {
            Some(index) => {
                warn!("tab list '{}' configured twice; replacing", config.hwnd);
                self.lists[index] = list;
                index
            }
            None => {
                self.lists.push(list);
                self.lists.len() - 1
            }
        };
        debug!("tab list '{}' created with {} tabs", config.hwnd, config.tabs.len());
        Ok(&mut self.lists[index])
    }

    fn position(&self, hwnd: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.hwnd() == hwnd)
    }

    pub fn get(&self, hwnd: &str) -> Option<&TabList<Tab>> {
        self.lists.iter().find(|list| list.hwnd() == hwnd)
    }

    pub fn get_mut(&mut self, hwnd: &str) -> Option<&mut TabList<Tab>> {
        self.lists.iter_mut().find(|list| list.hwnd() == hwnd)
    }

    /// Like `get_mut`, but an unknown handle is an error
    pub fn require_mut(&mut self, hwnd: &str) -> Result<&mut TabList<Tab>> {
        self.get_mut(hwnd)
            .ok_or_else(|| ComponentError::UnknownHandle(hwnd.to_string()))
    }

    pub fn hwnds(&self) -> impl Iterator<Item = &str> {
        self.lists.iter().map(|list| list.hwnd())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabList<Tab>> {
        self.lists.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TabList<Tab>> {
        self.lists.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Select a tab in the named list
    pub fn select(&mut self, hwnd: &str, index: usize) -> Result<bool> {
        Ok(self.require_mut(hwnd)?.set_selected(Some(index)))
    }

    /// Remove a list and its geometry
    pub fn remove(&mut self, hwnd: &str, registry: &mut RectRegistry) -> Result<TabList<Tab>> {
        let index = self
            .position(hwnd)
            .ok_or_else(|| ComponentError::UnknownHandle(hwnd.to_string()))?;
        registry.unregister_prefix(&format!("{hwnd}/"));
        Ok(self.lists.remove(index))
    }

    /// Frame tick for every list
    pub fn frame_tick(&mut self, now: Instant) -> usize {
        self.lists.iter_mut().map(|list| list.frame_tick(now)).sum()
    }

    /// Update cycle for every list; call after laying them out
    pub fn update(&mut self, registry: &RectRegistry, platform: Platform, now: Instant) -> usize {
        self.lists
            .iter_mut()
            .map(|list| list.update(registry, platform, now))
            .sum()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.lists.iter().any(|list| list.is_animating(now))
    }
}
