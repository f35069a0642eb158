// Tab List
// Single-selection container of tabs: layout, selection, focus and input routing

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use tracing::{debug, warn};

use crate::animation::{Axis, IndicatorRect};
use crate::core::{ActivationDetector, ClickEvent, FocusVisibilityPolicy, Platform, RectRegistry, Variant};
use crate::elements::item_view::IndicatorWidget;
use crate::elements::selection_group::{SelectionContext, SelectionGroup};
use crate::elements::tab::Tab;
use crate::elements::toggle_item::ToggleElement;
use crate::utilities::Palette;

/// Blank cells on each side of a horizontal tab's content
pub const TAB_PADDING: u16 = 2;
/// Content row plus indicator row
pub const TAB_HEIGHT: u16 = 2;

pub struct TabList<T: ToggleElement = Tab> {
    hwnd: String,
    variant: Variant,
    items: Vec<T>,
    selected: Option<usize>,
    previous_selected: Option<usize>,
    focused: Option<usize>,
    pressed: Option<usize>,
    hovered: Option<usize>,
}

impl<T: ToggleElement> TabList<T> {
    /// Takes ownership of `items`, scoping their registry names under `hwnd`.
    /// The first item starts selected.
    pub fn new(hwnd: impl Into<String>, items: Vec<T>) -> Self {
        let hwnd = hwnd.into();
        let variant = items
            .first()
            .map(|item| item.item().variant().clone())
            .unwrap_or_default();
        let mut list = Self {
            hwnd,
            variant,
            items: Vec::with_capacity(items.len()),
            selected: None,
            previous_selected: None,
            focused: None,
            pressed: None,
            hovered: None,
        };
        for item in items {
            list.push(item);
        }
        if !list.items.is_empty() {
            list.set_selected(Some(0));
        }
        list
    }

    /// Variant applied to the list's layout and to every item
    pub fn with_variant(mut self, variant: impl Into<Variant>) -> Self {
        self.set_variant(variant);
        self
    }

    /// Initial selection. Builds no history, so `previous_selected` stays empty.
    pub fn with_selected(mut self, index: Option<usize>) -> Self {
        self.set_selected(index);
        self.previous_selected = None;
        self
    }

    pub fn hwnd(&self) -> &str {
        &self.hwnd
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn set_variant(&mut self, variant: impl Into<Variant>) {
        self.variant = variant.into();
        for item in &mut self.items {
            item.item_mut().set_variant(self.variant.clone());
        }
    }

    pub fn axis(&self) -> Axis {
        Axis::from_vertical(self.variant.is_vertical())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    // ---- membership -----------------------------------------------------

    pub fn push(&mut self, mut item: T) {
        item.item_mut().attach(self.hwnd.clone());
        item.item_mut().set_variant(self.variant.clone());
        self.items.push(item);
    }

    /// Remove an item and its geometry. Selection, focus and history that
    /// pointed at it are cleared; later positions shift down.
    pub fn remove(&mut self, index: usize, registry: &mut RectRegistry) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        registry.unregister_by_name(&item.item().element_name());
        registry.unregister_by_name(&item.item().indicator_name());

        let shift = |slot: Option<usize>| match slot {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        self.selected = shift(self.selected);
        self.previous_selected = shift(self.previous_selected);
        self.focused = shift(self.focused);
        self.pressed = shift(self.pressed);
        self.hovered = shift(self.hovered);
        debug!("{}: removed '{}'", self.hwnd, item.item().id());
        Some(item)
    }

    // ---- update cycle ---------------------------------------------------

    /// Lay the items out inside `area` and register their boxes.
    /// Items that do not fit get empty boxes.
    pub fn layout(&self, area: Rect, registry: &mut RectRegistry) {
        let vertical = self.variant.is_vertical();
        let mut cursor = if vertical { area.y } else { area.x };

        for item in &self.items {
            let content = item.item().render().content.width();
            let (tab, indicator) = if vertical {
                let tab = Rect::new(area.x, cursor, area.width, 1).intersection(area);
                let indicator = Rect::new(tab.x, tab.y, tab.width.min(1), tab.height);
                cursor = cursor.saturating_add(1);
                (tab, indicator)
            } else {
                let width = content.saturating_add(TAB_PADDING * 2);
                let tab = Rect::new(cursor, area.y, width, area.height.min(TAB_HEIGHT)).intersection(area);
                let indicator = Rect::new(
                    tab.x.saturating_add(TAB_PADDING),
                    tab.bottom().saturating_sub(1),
                    content,
                    1,
                )
                .intersection(tab);
                cursor = cursor.saturating_add(width);
                (tab, indicator)
            };
            registry.register(&item.item().element_name(), tab);
            registry.register(&item.item().indicator_name(), indicator);
        }
    }

    /// Commit pending item changes in order. Runs after `layout` so the
    /// selection hooks read post-update geometry. Returns the number of
    /// items that updated.
    pub fn update(&mut self, registry: &RectRegistry, platform: Platform, now: Instant) -> usize {
        let previous_indicator = self
            .previous_selected
            .and_then(|index| self.items.get(index))
            .map(|item| item.item().indicator_name());
        let ctx = SelectionContext::new(registry, platform, now).with_previous_indicator(previous_indicator.as_deref());

        let mut updated = 0;
        for item in &mut self.items {
            if item.perform_update(&ctx) {
                updated += 1;
            }
        }
        updated
    }

    /// Animation frame tick; returns how many items became ready to animate
    pub fn frame_tick(&mut self, now: Instant) -> usize {
        let mut ready = 0;
        for item in &mut self.items {
            if item.on_animation_frame(now) {
                ready += 1;
            }
        }
        ready
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.items.iter().any(|item| item.indicator_style(now).is_some())
    }

    // ---- focus ----------------------------------------------------------

    /// Focus an item, blurring the previously focused one
    pub fn focus_item(&mut self, index: usize, policy: &dyn FocusVisibilityPolicy) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.item().is_disabled() {
            return false;
        }
        self.move_focus_marker(index);
        self.items[index].item_mut().focus(policy)
    }

    pub fn blur(&mut self) {
        if let Some(index) = self.focused.take() {
            if let Some(item) = self.items.get_mut(index) {
                item.item_mut().blur();
            }
        }
    }

    fn move_focus_marker(&mut self, index: usize) {
        if let Some(old) = self.focused {
            if old != index {
                if let Some(item) = self.items.get_mut(old) {
                    item.item_mut().blur();
                }
            }
        }
        self.focused = Some(index);
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| !item.item().is_disabled())
    }

    /// Next enabled item after `from`, wrapping around
    fn step_enabled(&self, from: usize, forward: bool) -> Option<usize> {
        let len = self.items.len();
        (1..=len)
            .map(|offset| if forward { (from + offset) % len } else { (from + len * 2 - offset) % len })
            .find(|&index| self.is_enabled(index))
    }

    fn first_enabled(&self) -> Option<usize> {
        (0..self.items.len()).find(|&index| self.is_enabled(index))
    }

    fn last_enabled(&self) -> Option<usize> {
        (0..self.items.len()).rev().find(|&index| self.is_enabled(index))
    }

    // ---- input ----------------------------------------------------------

    /// Route a click to an item; selects it when the item reports an activation.
    /// Returns true if the selection changed.
    pub fn dispatch_click(
        &mut self,
        index: usize,
        event: &ClickEvent,
        detector: &mut ActivationDetector,
        policy: &dyn FocusVisibilityPolicy,
    ) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        let activation = item.item_mut().handle_click(event, detector, policy);
        if item.item().is_focused() && self.focused != Some(index) {
            self.move_focus_marker(index);
        }
        match activation {
            Some(activation) => {
                debug!("{}: item {} activated by {:?}", self.hwnd, index, activation);
                self.set_selected(Some(index))
            }
            None => false,
        }
    }

    /// `click()` called on an item by code
    pub fn click(&mut self, index: usize, detector: &mut ActivationDetector, policy: &dyn FocusVisibilityPolicy) -> bool {
        self.dispatch_click(index, &ClickEvent::programmatic(), detector, policy)
    }

    /// Arrow keys (along the list's axis) and Home/End move focus between
    /// enabled items; Enter/Space activate the focused item.
    /// Returns true if the selection changed.
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        detector: &mut ActivationDetector,
        policy: &mut dyn FocusVisibilityPolicy,
    ) -> bool {
        if key.kind != KeyEventKind::Press || self.items.is_empty() {
            return false;
        }
        policy.keydown(key.code);

        let (back, forward) = match self.axis() {
            Axis::X => (KeyCode::Left, KeyCode::Right),
            Axis::Y => (KeyCode::Up, KeyCode::Down),
        };
        let current = self.focused.or(self.selected).unwrap_or(0);
        let target = match key.code {
            code if code == back => self.step_enabled(current, false),
            code if code == forward => self.step_enabled(current, true),
            KeyCode::Home => self.first_enabled(),
            KeyCode::End => self.last_enabled(),
            _ => {
                return match (ClickEvent::from_key(key), self.focused) {
                    (Some(click), Some(index)) => self.dispatch_click(index, &click, detector, &*policy),
                    _ => false,
                };
            }
        };
        if let Some(index) = target {
            self.focus_item(index, &*policy);
        }
        false
    }

    /// Item whose laid-out box contains the cell
    pub fn item_at(&self, registry: &RectRegistry, column: u16, row: u16) -> Option<usize> {
        self.items.iter().position(|item| {
            registry
                .get_metrics_by_name(&item.item().element_name())
                .is_some_and(|metrics| metrics.contains(column, row))
        })
    }

    /// Press, release and hover. A release over the pressed item clicks it.
    /// Returns true if the selection changed.
    pub fn handle_mouse(
        &mut self,
        mouse: &MouseEvent,
        registry: &RectRegistry,
        detector: &mut ActivationDetector,
        policy: &mut dyn FocusVisibilityPolicy,
    ) -> bool {
        let hit = self.item_at(registry, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = hit {
                    self.items[index].item_mut().handle_down(policy);
                    self.pressed = Some(index);
                    self.focus_item(index, &*policy);
                }
                false
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take();
                if let Some(index) = pressed {
                    if let Some(item) = self.items.get_mut(index) {
                        item.item_mut().handle_up();
                    }
                }
                match (pressed, hit, ClickEvent::from_mouse(mouse)) {
                    (Some(pressed), Some(hit), Some(click)) if pressed == hit => {
                        self.dispatch_click(hit, &click, detector, &*policy)
                    }
                    _ => false,
                }
            }
            MouseEventKind::Moved => {
                if let Some(index) = hit {
                    self.items[index].item_mut().request_ripple();
                }
                self.hovered = hit;
                false
            }
            _ => false,
        }
    }

    // ---- render ---------------------------------------------------------

    pub fn widget<'a>(&'a self, registry: &'a RectRegistry, palette: &'a Palette, now: Instant) -> TabListWidget<'a, T> {
        TabListWidget {
            list: self,
            registry,
            palette,
            now,
        }
    }
}

impl<T: ToggleElement> SelectionGroup for TabList<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn previous_selected(&self) -> Option<usize> {
        self.previous_selected
    }

    fn set_selected(&mut self, index: Option<usize>) -> bool {
        if index == self.selected {
            return false;
        }
        if let Some(index) = index {
            if index >= self.items.len() {
                warn!(
                    "{}: ignoring selection of index {} ({} items)",
                    self.hwnd,
                    index,
                    self.items.len()
                );
                return false;
            }
        }

        let old = self.selected;
        if let Some(item) = old.and_then(|i| self.items.get_mut(i)) {
            item.item_mut().set_selected(false);
        }
        if let Some(item) = index.and_then(|i| self.items.get_mut(i)) {
            item.item_mut().set_selected(true);
        }
        self.previous_selected = old;
        self.selected = index;
        debug!("{}: selected {:?} (previous {:?})", self.hwnd, index, old);
        true
    }
}

/// Paints every item's content, then every indicator on top so sliding
/// indicators may cross their neighbours.
pub struct TabListWidget<'a, T: ToggleElement> {
    list: &'a TabList<T>,
    registry: &'a RectRegistry,
    palette: &'a Palette,
    now: Instant,
}

impl<T: ToggleElement> Widget for TabListWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = self.list;
        let vertical = list.variant.is_vertical();

        if !vertical && area.height >= TAB_HEIGHT {
            let divider = Style::default().fg(self.palette.track);
            let row = area.y + TAB_HEIGHT - 1;
            for x in area.left()..area.right() {
                buf[(x, row)].set_symbol("─").set_style(divider);
            }
        }

        let mut indicators = Vec::with_capacity(list.items.len());
        for item in &list.items {
            let Some(tab) = self.registry.get_metrics_by_name(&item.item().element_name()) else {
                continue;
            };
            let tab = Rect::from(tab).intersection(area);
            if tab.is_empty() {
                continue;
            }
            let view = item.view();
            let content_area = if vertical {
                let x = tab.x.saturating_add(1);
                Rect::new(x, tab.y, view.content.width().saturating_add(4), 1).intersection(tab)
            } else {
                Rect::new(tab.x, tab.y, tab.width, 1)
            };
            view.widget(self.palette).render(content_area, buf);

            if let Some(indicator) = self.registry.get_metrics_by_name(&item.item().indicator_name()) {
                indicators.push(IndicatorWidget {
                    rect: IndicatorRect::from(indicator),
                    axis: list.axis(),
                    style: item.indicator_style(self.now),
                    showing: view.indicator_showing,
                    color: if view.disabled { self.palette.disabled } else { self.palette.primary },
                    background: self.palette.surface,
                });
            }
        }

        for indicator in indicators {
            indicator.render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, HIDDEN, SELECTION_DURATION, SHOWING};
    use crate::core::StrongFocus;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    const AREA: Rect = Rect::new(0, 0, 40, 2);

    fn three() -> TabList {
        TabList::new(
            "tabs",
            vec![Tab::new("one", "One"), Tab::new("two", "Two"), Tab::new("three", "Three")],
        )
    }

    /// Lay out, commit the first render and pass one frame
    fn mount<T: ToggleElement>(list: &mut TabList<T>, registry: &mut RectRegistry, now: Instant) {
        list.layout(AREA, registry);
        list.update(registry, Platform::default(), now);
        list.frame_tick(now);
    }

    fn select<T: ToggleElement>(list: &mut TabList<T>, registry: &mut RectRegistry, index: usize, now: Instant) {
        list.set_selected(Some(index));
        list.layout(AREA, registry);
        list.update(registry, Platform::default(), now);
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn selected_flags<T: ToggleElement>(list: &TabList<T>) -> Vec<bool> {
        list.items().iter().map(|item| item.item().is_selected()).collect()
    }

    #[test]
    fn test_first_item_selected_by_default() {
        let list = three();
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.previous_selected(), None);
        assert_eq!(selected_flags(&list), vec![true, false, false]);
        assert_eq!(list.get(1).unwrap().item().element_name(), "tabs/two");
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let list: TabList = TabList::new("empty", Vec::new());
        assert_eq!(list.selected(), None);
        assert!(list.selected_item().is_none());
    }

    #[test]
    fn test_single_selection_after_any_sequence() {
        let mut list = three();
        for index in [2, 0, 1, 1, 2, 0, 2] {
            list.set_selected(Some(index));
            let flags = selected_flags(&list);
            assert_eq!(flags.iter().filter(|&&on| on).count(), 1);
            assert!(flags[index]);
        }
        list.set_selected(None);
        assert!(selected_flags(&list).iter().all(|&on| !on));
        assert_eq!(list.previous_selected(), Some(2));
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut list = three();
        assert!(!list.set_selected(Some(3)));
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_slide_scenario() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        mount(&mut list, &mut registry, start);

        let later = start + Duration::from_millis(50);
        select(&mut list, &mut registry, 1, later);

        assert_eq!(list.selected_item().unwrap().item().id(), "two");
        assert_eq!(list.previous_selected_item().unwrap().item().id(), "one");
        assert_eq!(selected_flags(&list), vec![false, true, false]);

        // the deselected tab does not animate
        assert!(list.get(0).unwrap().indicator_animations().is_empty());

        let animations = list.get(1).unwrap().indicator_animations().all();
        assert_eq!(animations.len(), 1);
        let animation = &animations[0];
        assert_eq!(animation.options().duration, SELECTION_DURATION);
        assert_eq!(animation.options().easing, Easing::EaseOut);

        // "One" indicator sits at x=2, "Two" at x=9, both three cells wide
        let [from, to] = animation.keyframes();
        assert_eq!(from.transform.axis, Axis::X);
        assert_eq!(from.transform.translate, -7.0);
        assert_eq!(from.transform.scale, 1.0);
        assert_eq!(*to, SHOWING);

        // the animated indicator starts exactly over the old one
        let own = IndicatorRect::from(registry.get_metrics_by_name("tabs/two/indicator").unwrap());
        let old = IndicatorRect::from(registry.get_metrics_by_name("tabs/one/indicator").unwrap());
        assert_eq!(from.transform.apply(&own), old);
        assert!(list.is_animating(later));
        assert!(!list.is_animating(later + SELECTION_DURATION));
    }

    #[test]
    fn test_scale_follows_indicator_width() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        mount(&mut list, &mut registry, start);
        select(&mut list, &mut registry, 2, start);

        let [from, _] = list.get(2).unwrap().indicator_animations().all()[0].keyframes();
        // "Three" indicator at x=16, five cells wide
        assert_eq!(from.transform.translate, -14.0);
        assert_eq!(from.transform.scale, 3.0 / 5.0);
    }

    #[test]
    fn test_reselection_is_a_noop() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        mount(&mut list, &mut registry, start);
        select(&mut list, &mut registry, 1, start);

        assert!(!list.set_selected(Some(1)));
        assert_eq!(list.update(&registry, Platform::default(), start), 0);
        assert_eq!(list.get(1).unwrap().indicator_animations().len(), 1);
        assert_eq!(list.previous_selected(), Some(0));
    }

    #[test]
    fn test_no_animation_before_first_frame() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        list.layout(AREA, &mut registry);
        list.update(&registry, Platform::default(), start);

        // first render done, frame not yet ticked
        select(&mut list, &mut registry, 1, start);
        assert!(list.items().iter().all(|tab| tab.indicator_animations().is_empty()));

        assert_eq!(list.frame_tick(start), 3);
        assert_eq!(list.frame_tick(start), 0);
        select(&mut list, &mut registry, 2, start);
        assert_eq!(list.get(2).unwrap().indicator_animations().len(), 1);
    }

    #[test]
    fn test_with_selected_builds_no_history() {
        let list = three().with_selected(Some(1));
        assert_eq!(list.selected(), Some(1));
        assert_eq!(list.previous_selected(), None);
        assert_eq!(selected_flags(&list), vec![false, true, false]);

        let mut list = list;
        list.set_selected(Some(2));
        assert_eq!(list.previous_selected_item().unwrap().item().id(), "two");
    }

    #[test]
    fn test_clipped_previous_tab_fades_in() {
        // "Three" does not fit, so its boxes collapse to nothing
        let narrow = Rect::new(0, 0, 10, 2);
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        list.layout(narrow, &mut registry);
        list.update(&registry, Platform::default(), start);
        list.frame_tick(start);

        for index in [2, 0] {
            list.set_selected(Some(index));
            list.layout(narrow, &mut registry);
            list.update(&registry, Platform::default(), start);
        }
        assert!(registry.get_metrics_by_name("tabs/three/indicator").unwrap().is_empty());
        assert_eq!(list.previous_selected(), Some(2));

        let frames = list.get(0).unwrap().indicator_animations().all()[0].keyframes();
        assert_eq!(*frames, [HIDDEN, SHOWING]);
    }

    #[test]
    fn test_navigation_variant_fades_both_ways() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three().with_variant("navigation");
        mount(&mut list, &mut registry, start);
        select(&mut list, &mut registry, 1, start);

        let gaining = list.get(1).unwrap().indicator_animations().all()[0].keyframes();
        assert_eq!(gaining[0].opacity, Some(0.0));
        assert_eq!(gaining[0].transform.scale, 0.5);
        assert_eq!(gaining[0].transform.translate, 0.0);
        assert_eq!(gaining[1], SHOWING);

        let losing = list.get(0).unwrap().indicator_animations().all()[0].keyframes();
        assert_eq!(losing[0], SHOWING);
        assert_eq!(losing[1].opacity, Some(0.0));
    }

    #[test]
    fn test_remove_shifts_selection_and_history() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        mount(&mut list, &mut registry, start);
        select(&mut list, &mut registry, 1, start);

        let removed = list.remove(0, &mut registry).unwrap();
        assert_eq!(removed.item().id(), "one");
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.previous_selected(), None);
        assert!(!registry.name_exists("tabs/one"));

        select(&mut list, &mut registry, 1, start);
        let frames = list.get(1).unwrap().indicator_animations().all()[0].keyframes();
        assert_eq!(frames[0].transform.translate, -7.0);

        list.remove(1, &mut registry);
        assert_eq!(list.selected(), None);
        assert_eq!(list.previous_selected(), Some(0));
    }

    #[test]
    fn test_first_selection_without_history_fades_in() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        list.set_selected(None);
        mount(&mut list, &mut registry, start);
        // drop the history by removing the item it points at
        list.remove(0, &mut registry);
        assert_eq!(list.previous_selected(), None);
        select(&mut list, &mut registry, 0, start);

        let frames = list.get(0).unwrap().indicator_animations().all()[0].keyframes();
        assert_eq!(*frames, [HIDDEN, SHOWING]);
    }

    #[test]
    fn test_disabled_item_refuses_selection_by_click() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = TabList::new("tabs", vec![Tab::new("a", "A"), Tab::new("b", "B").with_disabled(true)]);
        mount(&mut list, &mut registry, start);

        let mut detector = ActivationDetector::new();
        let policy = StrongFocus::new();
        assert!(!list.click(1, &mut detector, &policy));
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.focused(), None);
    }

    #[test]
    fn test_programmatic_click_selects_and_focuses() {
        let mut list = three();
        let mut detector = ActivationDetector::new();
        let policy = StrongFocus::new();

        assert!(list.click(2, &mut detector, &policy));
        assert_eq!(list.selected(), Some(2));
        assert_eq!(list.focused(), Some(2));

        // the synthetic re-dispatch window swallows a second host click
        assert!(!list.click(1, &mut detector, &policy));
        detector.end_task();
        assert!(list.click(1, &mut detector, &policy));
        assert_eq!(list.focused(), Some(1));
        assert!(!list.get(2).unwrap().item().is_focused());
    }

    #[test]
    fn test_keyboard_navigation_skips_disabled() {
        let mut list = TabList::new(
            "tabs",
            vec![
                Tab::new("a", "A"),
                Tab::new("b", "B").with_disabled(true),
                Tab::new("c", "C"),
            ],
        );
        let mut detector = ActivationDetector::new();
        let mut policy = StrongFocus::new();

        list.handle_key(&key(KeyCode::Right), &mut detector, &mut policy);
        assert_eq!(list.focused(), Some(2));
        list.handle_key(&key(KeyCode::Right), &mut detector, &mut policy);
        assert_eq!(list.focused(), Some(0));
        list.handle_key(&key(KeyCode::Left), &mut detector, &mut policy);
        assert_eq!(list.focused(), Some(2));
        list.handle_key(&key(KeyCode::Home), &mut detector, &mut policy);
        assert_eq!(list.focused(), Some(0));
        list.handle_key(&key(KeyCode::End), &mut detector, &mut policy);
        assert_eq!(list.focused(), Some(2));

        // focus alone does not select
        assert_eq!(list.selected(), Some(0));
        assert!(list.handle_key(&key(KeyCode::Enter), &mut detector, &mut policy));
        assert_eq!(list.selected(), Some(2));
        assert!(list.get(2).unwrap().item().show_focus_ring());
    }

    #[test]
    fn test_vertical_lists_use_up_down() {
        let mut list = three().with_variant("vertical");
        let mut detector = ActivationDetector::new();
        let mut policy = StrongFocus::new();

        list.handle_key(&key(KeyCode::Right), &mut detector, &mut policy);
        assert_eq!(list.focused(), None);
        list.handle_key(&key(KeyCode::Down), &mut detector, &mut policy);
        assert_eq!(list.focused(), Some(1));
    }

    #[test]
    fn test_vertical_layout_stacks_rows() {
        let mut registry = RectRegistry::new();
        let list = three().with_variant("vertical");
        list.layout(Rect::new(0, 0, 12, 5), &mut registry);

        let second = registry.get_metrics_by_name("tabs/two").unwrap();
        assert_eq!((second.x, second.y, second.width, second.height), (0, 1, 12, 1));
        let indicator = registry.get_metrics_by_name("tabs/three/indicator").unwrap();
        assert_eq!((indicator.x, indicator.y, indicator.width, indicator.height), (0, 2, 1, 1));
    }

    #[test]
    fn test_mouse_click_selects_without_focus_ring() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        mount(&mut list, &mut registry, start);
        let mut detector = ActivationDetector::new();
        let mut policy = StrongFocus::new();

        assert_eq!(list.item_at(&registry, 8, 0), Some(1));
        assert_eq!(list.item_at(&registry, 39, 0), None);

        list.handle_mouse(&mouse(MouseEventKind::Moved, 8, 0), &registry, &mut detector, &mut policy);
        assert_eq!(list.hovered(), Some(1));
        assert!(list.get(1).unwrap().item().ripple_requested());

        list.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 8, 0), &registry, &mut detector, &mut policy);
        assert!(list.get(1).unwrap().item().is_pressed());
        assert_eq!(list.focused(), Some(1));
        assert!(!list.get(1).unwrap().item().show_focus_ring());

        let changed = list.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 9, 1), &registry, &mut detector, &mut policy);
        assert!(changed);
        assert_eq!(list.selected(), Some(1));
        assert!(!list.get(1).unwrap().item().is_pressed());
    }

    #[test]
    fn test_release_elsewhere_does_not_click() {
        let mut registry = RectRegistry::new();
        let mut list = three();
        list.layout(AREA, &mut registry);
        let mut detector = ActivationDetector::new();
        let mut policy = StrongFocus::new();

        list.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 8, 0), &registry, &mut detector, &mut policy);
        let changed = list.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 15, 0), &registry, &mut detector, &mut policy);
        assert!(!changed);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_render_draws_selected_indicator() {
        let mut registry = RectRegistry::new();
        let start = Instant::now();
        let mut list = three();
        mount(&mut list, &mut registry, start);
        select(&mut list, &mut registry, 2, start);

        let palette = Palette::default();
        let mut buf = Buffer::empty(AREA);
        let settled = start + SELECTION_DURATION;
        list.widget(&registry, &palette, settled).render(AREA, &mut buf);

        let labels: String = (0..23).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(labels, "  One    Two    Three  ");

        // indicator under "Three" only; divider elsewhere
        assert_eq!(buf[(16, 1)].symbol(), "━");
        assert_eq!(buf[(20, 1)].symbol(), "━");
        assert_eq!(buf[(2, 1)].symbol(), "─");
        assert_eq!(buf[(21, 1)].symbol(), "─");
    }
}
