// Selection Group
// Protocol between a single-selection container and its toggle items

use std::time::Instant;

use crate::animation::IndicatorRect;
use crate::core::{Platform, RectRegistry};
use crate::elements::toggle_item::ToggleElement;

/// What an item may look at while it updates: the laid-out geometry of the
/// whole group and the indicator of the item that was selected before.
///
/// The previous selection is carried as a registry name, never as a
/// reference into the group, so items cannot keep their siblings alive.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub registry: &'a RectRegistry,
    pub platform: Platform,
    pub now: Instant,
    pub previous_indicator: Option<&'a str>,
}

impl<'a> SelectionContext<'a> {
    pub fn new(registry: &'a RectRegistry, platform: Platform, now: Instant) -> Self {
        Self {
            registry,
            platform,
            now,
            previous_indicator: None,
        }
    }

    pub fn with_previous_indicator(mut self, name: Option<&'a str>) -> Self {
        self.previous_indicator = name;
        self
    }

    /// Laid-out box registered under `name`; empty boxes count as not laid out
    pub fn rect(&self, name: &str) -> Option<IndicatorRect> {
        self.registry
            .get_metrics_by_name(name)
            .filter(|metrics| !metrics.is_empty())
            .map(IndicatorRect::from)
    }

    /// Indicator box of the previously selected item, if it was laid out
    pub fn previous_indicator_rect(&self) -> Option<IndicatorRect> {
        self.previous_indicator.and_then(|name| self.rect(name))
    }
}

/// A container that keeps at most one of its items selected and remembers
/// which one was selected before the latest change.
///
/// Selections are positions in the live item list; removing an item must
/// clear or shift them.
pub trait SelectionGroup {
    type Item: ToggleElement;

    fn items(&self) -> &[Self::Item];

    fn selected(&self) -> Option<usize>;

    fn previous_selected(&self) -> Option<usize>;

    /// Select `index` (or nothing). Selecting the current item is a no-op.
    /// Returns true if the selection changed.
    fn set_selected(&mut self, index: Option<usize>) -> bool;

    fn selected_item(&self) -> Option<&Self::Item> {
        self.selected().and_then(|index| self.items().get(index))
    }

    fn previous_selected_item(&self) -> Option<&Self::Item> {
        self.previous_selected().and_then(|index| self.items().get(index))
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.items().iter().position(|item| item.item().id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_previous_indicator_lookup() {
        let mut registry = RectRegistry::new();
        registry.register("tabs/a/indicator", Rect::new(2, 1, 5, 1));
        let now = Instant::now();

        let ctx = SelectionContext::new(&registry, Platform::default(), now);
        assert_eq!(ctx.previous_indicator_rect(), None);

        let ctx = ctx.with_previous_indicator(Some("tabs/a/indicator"));
        assert_eq!(ctx.previous_indicator_rect(), Some(IndicatorRect::new(2.0, 1.0, 5.0, 1.0)));

        // an unregistered name is treated as "not laid out"
        let ctx = ctx.with_previous_indicator(Some("tabs/gone/indicator"));
        assert_eq!(ctx.previous_indicator_rect(), None);
    }

    #[test]
    fn test_empty_box_is_not_laid_out() {
        let mut registry = RectRegistry::new();
        registry.register("tabs/clipped/indicator", Rect::new(16, 1, 0, 1));
        let ctx = SelectionContext::new(&registry, Platform::default(), Instant::now())
            .with_previous_indicator(Some("tabs/clipped/indicator"));
        assert!(registry.name_exists("tabs/clipped/indicator"));
        assert_eq!(ctx.previous_indicator_rect(), None);
    }
}
