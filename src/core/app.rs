// Application State
// Main application state management and lifecycle

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::time::Instant;
use tracing::{debug, info};

use md_components::{
    ActivationDetector, AttributeSync, Card, CardType, FocusVisibilityPolicy, LinearProgress, Palette,
    Platform, RectRegistry, SelectionGroup, StrongFocus, TabListManager, ToggleElement, TAB_HEIGHT,
};

use super::events::AppEvent;
use super::AppConfig;
use crate::config::GalleryConfig;
use crate::config_validation::HWND_MAIN_TAB_LIST;

/// Handle of the vertical list on the overview page
pub const HWND_SECTIONS: &str = "gallery.sections";

/// Handle of the navigation list on the overview page
pub const HWND_FILTERS: &str = "gallery.filters";

/// Registry name of the page content box
pub const HWND_CONTENT_BOX: &str = "gallery.content";

/// Width of the vertical list column on the overview page
const SECTIONS_WIDTH: u16 = 22;

/// Step applied by the progress keys
const PROGRESS_STEP: f32 = 0.1;

/// Screen regions computed by the layout pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryLayout {
    pub title: Rect,
    pub main_tabs: Rect,
    pub content: Rect,
    pub status: Rect,
    /// Overview page
    pub sections: Rect,
    pub filters: Rect,
    pub detail: Rect,
}

/// Main application state
pub struct App {
    /// Compiled-in settings
    pub config: AppConfig,

    /// Runtime configuration (title, bindings, status text)
    pub gallery: GalleryConfig,

    /// Every configured tab list, by handle
    pub lists: TabListManager,

    /// Geometry of everything laid out this frame
    pub registry: RectRegistry,

    pub detector: ActivationDetector,
    pub focus: StrongFocus,
    pub platform: Platform,
    pub palette: Palette,

    /// Demo bars on the progress page
    pub progress: Vec<LinearProgress>,

    /// Demo cards on the cards page
    pub cards: Vec<Card>,

    /// Handle of the list receiving keyboard input
    pub focused_list: String,

    /// Last status message; falls back to the configured default text
    pub status: Option<String>,

    pub layout: GalleryLayout,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig, gallery: GalleryConfig) -> Result<Self> {
        let lists = TabListManager::from_configs(gallery.tab_lists.values())
            .context("failed to build tab lists")?;
        let platform = Platform::detect(config.ui.reduced_motion);
        let palette = Palette::from_name(&config.ui.theme);
        info!(
            "gallery started: {} tab lists, theme {}, reduced motion {}",
            lists.len(),
            config.ui.theme,
            platform.prefers_reduced_motion
        );

        Ok(Self {
            config,
            gallery,
            lists,
            registry: RectRegistry::new(),
            detector: ActivationDetector::new(),
            focus: StrongFocus::new(),
            platform,
            palette,
            progress: Self::demo_progress(),
            cards: Self::demo_cards(),
            focused_list: HWND_MAIN_TAB_LIST.to_string(),
            status: None,
            layout: GalleryLayout::default(),
            should_quit: false,
        })
    }

    fn demo_progress() -> Vec<LinearProgress> {
        vec![
            LinearProgress::new().with_progress(0.4).with_aria_label("Determinate"),
            LinearProgress::new()
                .with_progress(0.4)
                .with_buffer(0.6)
                .with_aria_label("Buffered"),
            LinearProgress::indeterminate().with_aria_label("Indeterminate"),
            LinearProgress::indeterminate()
                .with_four_color(true)
                .with_aria_label("Four color"),
        ]
    }

    fn demo_cards() -> Vec<Card> {
        vec![
            Card::new(CardType::Elevated)
                .with_headline("Elevated")
                .with_subline("Shadow and tonal surface")
                .with_supporting_text("Cards group related content and actions.")
                .with_action("Open"),
            Card::new(CardType::Filled)
                .with_image("Mountain at dusk")
                .with_headline("Filled")
                .with_subline("Secondary container"),
            Card::new(CardType::Outlined)
                .with_headline("Outlined")
                .with_supporting_text("No actions, so no divider.")
                .with_action("Share")
                .with_action("Save"),
        ]
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Queries                                               │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Id of the page selected in the main list
    pub fn page(&self) -> Option<&str> {
        self.lists
            .get(HWND_MAIN_TAB_LIST)?
            .selected_item()
            .map(|tab| tab.item().id())
    }

    /// Lists drawn on the current page, in keyboard focus order
    pub fn visible_lists(&self) -> Vec<&'static str> {
        let mut visible = vec![HWND_MAIN_TAB_LIST];
        if self.page() == Some("overview") {
            visible.extend([HWND_SECTIONS, HWND_FILTERS]);
        }
        visible.retain(|hwnd| self.lists.get(hwnd).is_some());
        visible
    }

    pub fn status_text(&self) -> &str {
        self.status
            .as_deref()
            .unwrap_or(&self.gallery.application.status_bar.default_text)
    }

    /// Reflected attributes of the focused list's selected item, e.g. for a detail pane
    pub fn selected_attributes(&self, hwnd: &str) -> Vec<(String, String)> {
        self.lists
            .get(hwnd)
            .and_then(|list| list.selected_item())
            .map(|tab| {
                tab.item()
                    .attributes()
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the next frame must come at the tick rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.lists.is_animating(now)
            || (self.page() == Some("progress") && self.progress.iter().any(LinearProgress::is_indeterminate))
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Frame cycle                                             │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Animation frame: items become ready, progress bars restart after resizes
    pub fn frame_tick(&mut self, now: Instant) {
        self.lists.frame_tick(now);
        for bar in &mut self.progress {
            bar.frame_tick(now);
        }
    }

    /// Compute regions and register every visible list's geometry.
    /// Lists that are not drawn lose their geometry so hit tests miss them.
    pub fn layout(&mut self, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(TAB_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let mut layout = GalleryLayout {
            title: rows[0],
            main_tabs: rows[1],
            content: rows[2],
            status: rows[3],
            ..GalleryLayout::default()
        };
        self.registry.register(HWND_CONTENT_BOX, layout.content);

        let page = self.page().map(str::to_string);
        if page.as_deref() == Some("overview") {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SECTIONS_WIDTH), Constraint::Min(0)])
                .split(inner(layout.content));
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(TAB_HEIGHT), Constraint::Min(0)])
                .split(columns[1]);
            layout.sections = columns[0];
            layout.filters = right[0];
            layout.detail = right[1];
        }

        if page.as_deref() == Some("progress") {
            let width = inner(layout.content).width;
            for bar in &mut self.progress {
                bar.on_resize(width);
            }
        }

        let visible = self.visible_lists();
        for list in self.lists.iter() {
            let area = match list.hwnd() {
                HWND_MAIN_TAB_LIST => layout.main_tabs,
                HWND_SECTIONS if visible.contains(&HWND_SECTIONS) => layout.sections,
                HWND_FILTERS if visible.contains(&HWND_FILTERS) => layout.filters,
                hwnd => {
                    self.registry.unregister_prefix(&format!("{hwnd}/"));
                    continue;
                }
            };
            list.layout(area, &mut self.registry);
        }
        self.layout = layout;

        if !visible.contains(&self.focused_list.as_str()) {
            self.focus_list(HWND_MAIN_TAB_LIST);
        }
    }

    /// Commit pending changes; must follow `layout`
    pub fn update(&mut self, now: Instant) -> usize {
        self.lists.update(&self.registry, self.platform, now)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                          Input                                                 │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::NextList => self.cycle_list(true),
            AppEvent::PreviousList => self.cycle_list(false),
            AppEvent::IncreaseProgress => self.step_progress(PROGRESS_STEP),
            AppEvent::DecreaseProgress => self.step_progress(-PROGRESS_STEP),
            AppEvent::ToggleReducedMotion => {
                self.platform.prefers_reduced_motion = !self.platform.prefers_reduced_motion;
                self.status = Some(format!(
                    "Reduced motion {}",
                    if self.platform.prefers_reduced_motion { "on" } else { "off" }
                ));
            }
            AppEvent::CycleCardType => self.cycle_card_types(),
            AppEvent::ListKey(key) => {
                let hwnd = self.focused_list.clone();
                let changed = match self.lists.get_mut(&hwnd) {
                    Some(list) => list.handle_key(&key, &mut self.detector, &mut self.focus),
                    None => false,
                };
                if changed {
                    self.report_selection(&hwnd);
                }
            }
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            AppEvent::Resize | AppEvent::None => {}
        }
        // the click squelch window closes with the event that opened it
        self.detector.end_task();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.config.ui.mouse_enabled {
            return;
        }
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            self.focus.pointer_press();
            let target = self.visible_lists().into_iter().find(|hwnd| {
                self.lists
                    .get(hwnd)
                    .and_then(|list| list.item_at(&self.registry, mouse.column, mouse.row))
                    .is_some()
            });
            if let Some(hwnd) = target {
                self.focus_list(hwnd);
            }
        }

        let mut changed = Vec::new();
        for hwnd in self.visible_lists() {
            if let Some(list) = self.lists.get_mut(hwnd) {
                if list.handle_mouse(&mouse, &self.registry, &mut self.detector, &mut self.focus) {
                    changed.push(hwnd);
                }
            }
        }
        for hwnd in changed {
            self.report_selection(hwnd);
        }
    }

    /// Give keyboard input to another list, blurring the one that had it
    pub fn focus_list(&mut self, hwnd: &str) {
        if self.focused_list == hwnd {
            return;
        }
        if let Some(list) = self.lists.get_mut(&self.focused_list) {
            list.blur();
        }
        debug!("keyboard focus moves to {hwnd}");
        self.focused_list = hwnd.to_string();
    }

    fn cycle_list(&mut self, forward: bool) {
        self.focus.keydown(if forward { KeyCode::Tab } else { KeyCode::BackTab });
        let visible = self.visible_lists();
        let current = visible
            .iter()
            .position(|hwnd| *hwnd == self.focused_list)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % visible.len()
        } else {
            (current + visible.len() - 1) % visible.len()
        };
        let hwnd = visible[next];
        self.focus_list(hwnd);

        // land on the selected item, or the first one that accepts focus
        if let Some(list) = self.lists.get_mut(hwnd) {
            let start = list.selected().unwrap_or(0);
            let candidates = (start..list.len()).chain(0..start);
            for index in candidates {
                if list.focus_item(index, &self.focus) {
                    break;
                }
            }
        }
    }

    fn report_selection(&mut self, hwnd: &str) {
        let label = self
            .lists
            .get(hwnd)
            .and_then(|list| list.selected_item())
            .map(|tab| tab.item().label().to_string());
        if let Some(label) = label {
            info!("{hwnd}: selected '{label}'");
            self.status = Some(format!("Selected {label}"));
        }
    }

    fn step_progress(&mut self, delta: f32) {
        if self.page() != Some("progress") {
            return;
        }
        for bar in self.progress.iter_mut().filter(|bar| !bar.is_indeterminate()) {
            let progress = (bar.progress() + delta).clamp(0.0, 1.0);
            bar.set_progress(progress);
            if bar.buffer() < 1.0 {
                bar.set_buffer((progress + 0.2).min(1.0));
            }
        }
        if let Some(bar) = self.progress.first() {
            self.status = Some(format!("Progress {:.0}%", bar.progress() * 100.0));
        }
    }

    fn cycle_card_types(&mut self) {
        if self.page() != Some("cards") {
            return;
        }
        for card in &mut self.cards {
            let next = match card.card_type() {
                CardType::Elevated => CardType::Filled,
                CardType::Filled => CardType::Outlined,
                CardType::Outlined => CardType::Elevated,
            };
            card.set_card_type(next);
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Area inside a one-cell border
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
