// Tab
// Toggle item whose selection indicator slides between siblings

use std::time::Instant;

use tracing::debug;

use crate::animation::{
    slide_transform, AnimationOptions, AnimationSet, Axis, ComputedStyle, IndicatorRect, Keyframe, HIDDEN,
    SHOWING,
};
use crate::core::{AriaHasPopup, Variant};
use crate::elements::selection_group::SelectionContext;
use crate::elements::toggle_item::{ToggleElement, ToggleItem};

/// Keyframe pair for an indicator selection change.
///
/// Navigation indicators fade and shrink in place. Other indicators only
/// animate on the newly selected tab: they start overlaying `previous` and
/// settle on `current`. Without usable geometry the indicator fades in.
pub fn tab_keyframes(
    variant: &Variant,
    selected: bool,
    previous: Option<IndicatorRect>,
    current: Option<IndicatorRect>,
) -> Option<[Keyframe; 2]> {
    if variant.is_navigation() {
        let hidden = Keyframe::hidden_scaled();
        return Some(if selected { [hidden, SHOWING] } else { [SHOWING, hidden] });
    }
    if !selected {
        return None;
    }

    let axis = Axis::from_vertical(variant.is_vertical());
    let slide = match (previous, current) {
        (Some(from), Some(to)) => slide_transform(&from, &to, axis),
        _ => None,
    };
    Some(match slide {
        Some(transform) => [Keyframe::transform_only(transform), SHOWING],
        None => [HIDDEN, SHOWING],
    })
}

/// A tab: a toggle item plus the animations running on its indicator
#[derive(Debug, Clone)]
pub struct Tab {
    item: ToggleItem,
    indicator: AnimationSet,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::from_item(ToggleItem::new(id, label))
    }

    pub fn from_item(item: ToggleItem) -> Self {
        Self {
            item,
            indicator: AnimationSet::new(),
        }
    }

    pub fn with_variant(self, variant: impl Into<Variant>) -> Self {
        self.map_item(|item| item.with_variant(variant))
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        self.map_item(|item| item.with_disabled(disabled))
    }

    pub fn with_href(self, href: impl Into<String>) -> Self {
        self.map_item(|item| item.with_href(href))
    }

    pub fn with_target(self, target: impl Into<String>) -> Self {
        self.map_item(|item| item.with_target(target))
    }

    pub fn with_start(self, start: impl Into<String>) -> Self {
        self.map_item(|item| item.with_start(start))
    }

    pub fn with_end(self, end: impl Into<String>) -> Self {
        self.map_item(|item| item.with_end(end))
    }

    pub fn with_aria_label(self, label: impl Into<String>) -> Self {
        self.map_item(|item| item.with_aria_label(label))
    }

    pub fn with_aria_has_popup(self, value: AriaHasPopup) -> Self {
        self.map_item(|item| item.with_aria_has_popup(value))
    }

    fn map_item(mut self, f: impl FnOnce(ToggleItem) -> ToggleItem) -> Self {
        self.item = f(self.item);
        self
    }

    /// Keyframes for the current selection state against the laid-out geometry
    pub fn keyframes(&self, ctx: &SelectionContext<'_>) -> Option<[Keyframe; 2]> {
        let variant = self.item.variant();
        if variant.is_navigation() || !self.item.is_selected() {
            return tab_keyframes(variant, self.item.is_selected(), None, None);
        }
        tab_keyframes(
            variant,
            true,
            ctx.previous_indicator_rect(),
            ctx.rect(&self.item.indicator_name()),
        )
    }

    pub fn indicator_animations(&self) -> &AnimationSet {
        &self.indicator
    }
}

impl ToggleElement for Tab {
    fn item(&self) -> &ToggleItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut ToggleItem {
        &mut self.item
    }

    fn animate_selected(&mut self, ctx: &SelectionContext<'_>) {
        let cancelled = self.indicator.cancel_all(ctx.now);
        if cancelled > 0 {
            debug!("{}: cancelled {} indicator animation(s)", self.item, cancelled);
        }
        if let Some(frames) = self.keyframes(ctx) {
            debug!("{}: indicator {} -> {}", self.item, frames[0], frames[1]);
            self.indicator.animate(frames, AnimationOptions::selection(), ctx.now);
        }
    }

    fn indicator_style(&self, now: Instant) -> Option<ComputedStyle> {
        let underlying = if self.item.is_selected() { 1.0 } else { 0.0 };
        self.indicator.sample(now, underlying)
    }

    fn on_animation_frame(&mut self, now: Instant) -> bool {
        self.indicator.prune(now);
        self.item.on_animation_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, Transform, SELECTION_DURATION};
    use crate::core::{Platform, RectRegistry};
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn ready_tab(tab: Tab, registry: &RectRegistry, now: Instant) -> Tab {
        let mut tab = tab;
        let ctx = SelectionContext::new(registry, Platform::default(), now);
        tab.perform_update(&ctx);
        tab.on_animation_frame(now);
        tab
    }

    #[test]
    fn test_navigation_fades_without_geometry() {
        let nav = Variant::from("navigation");
        let [from, to] = tab_keyframes(&nav, true, None, None).unwrap();
        assert_eq!(from.opacity, Some(0.0));
        assert_eq!(from.transform, Transform::scale(Axis::X, 0.5));
        assert_eq!(from.transform.translate, 0.0);
        assert_eq!(to, SHOWING);

        let [from, to] = tab_keyframes(&nav, false, None, None).unwrap();
        assert_eq!(from, SHOWING);
        assert_eq!(to, Keyframe::hidden_scaled());
    }

    #[test]
    fn test_deselected_tab_does_not_animate() {
        let primary = Variant::default();
        let rect = Some(IndicatorRect::new(0.0, 0.0, 4.0, 1.0));
        assert_eq!(tab_keyframes(&primary, false, rect, rect), None);
    }

    #[test]
    fn test_vertical_slide_uses_y_axis() {
        let vertical = Variant::from("vertical");
        let [from, to] = tab_keyframes(
            &vertical,
            true,
            Some(IndicatorRect::new(0.0, 2.0, 1.0, 1.0)),
            Some(IndicatorRect::new(0.0, 5.0, 1.0, 1.0)),
        )
        .unwrap();
        assert_eq!(from.opacity, None);
        assert_eq!(from.transform, Transform { axis: Axis::Y, translate: -3.0, scale: 1.0 });
        assert_eq!(to, SHOWING);
    }

    #[test]
    fn test_missing_or_degenerate_geometry_fades_in() {
        let primary = Variant::default();
        let current = Some(IndicatorRect::new(10.0, 1.0, 4.0, 1.0));
        assert_eq!(tab_keyframes(&primary, true, None, current), Some([HIDDEN, SHOWING]));

        let zero = Some(IndicatorRect::new(10.0, 1.0, 0.0, 1.0));
        assert_eq!(
            tab_keyframes(&primary, true, Some(IndicatorRect::new(0.0, 1.0, 4.0, 1.0)), zero),
            Some([HIDDEN, SHOWING])
        );

        // a previous indicator squeezed to nothing fades too
        let squeezed = Some(IndicatorRect::new(30.0, 1.0, 0.0, 1.0));
        let target = Some(IndicatorRect::new(2.0, 1.0, 4.0, 1.0));
        assert_eq!(tab_keyframes(&primary, true, squeezed, target), Some([HIDDEN, SHOWING]));
    }

    #[test]
    fn test_animate_selected_replaces_running_animation() {
        let mut registry = RectRegistry::new();
        registry.register("a/indicator", Rect::new(2, 1, 4, 1));
        registry.register("b/indicator", Rect::new(10, 1, 6, 1));
        let start = Instant::now();

        let mut tab = ready_tab(Tab::new("b", "B"), &registry, start);
        tab.item_mut().set_selected(true);
        let ctx = SelectionContext::new(&registry, Platform::default(), start)
            .with_previous_indicator(Some("a/indicator"));
        assert!(tab.perform_update(&ctx));

        let running: Vec<_> = tab.indicator_animations().running(start).collect();
        assert_eq!(running.len(), 1);
        let animation = running[0];
        assert_eq!(animation.options().duration, SELECTION_DURATION);
        assert_eq!(animation.options().easing, Easing::EaseOut);
        assert_eq!(animation.keyframes()[0].transform.translate, -8.0);

        // a second selection change cancels the first before starting anew
        let later = start + Duration::from_millis(100);
        let ctx = SelectionContext { now: later, ..ctx };
        tab.animate_selected(&ctx);
        assert_eq!(tab.indicator_animations().len(), 1);
        assert_eq!(tab.indicator_animations().all()[0].started_at(), later);
    }

    #[test]
    fn test_indicator_style_settles() {
        let registry = RectRegistry::new();
        let start = Instant::now();
        let mut tab = ready_tab(Tab::new("a", "A").with_variant("navigation"), &registry, start);
        tab.item_mut().set_selected(true);
        tab.perform_update(&SelectionContext::new(&registry, Platform::default(), start));

        let style = tab.indicator_style(start).unwrap();
        assert_eq!(style.opacity, 0.0);
        assert!(tab.indicator_style(start + SELECTION_DURATION).is_none());

        tab.on_animation_frame(start + SELECTION_DURATION);
        assert!(tab.indicator_animations().is_empty());
    }

    #[test]
    fn test_disabled_tab_never_animates() {
        let registry = RectRegistry::new();
        let start = Instant::now();
        let mut tab = ready_tab(Tab::new("a", "A").with_disabled(true), &registry, start);
        tab.item_mut().set_selected(true);
        tab.perform_update(&SelectionContext::new(&registry, Platform::default(), start));
        assert!(tab.indicator_animations().is_empty());
    }

    #[test]
    fn test_reduced_motion_skips_animation() {
        let registry = RectRegistry::new();
        let start = Instant::now();
        let mut tab = ready_tab(Tab::new("a", "A"), &registry, start);
        tab.item_mut().set_selected(true);
        tab.perform_update(&SelectionContext::new(&registry, Platform::new(true), start));
        assert!(tab.indicator_animations().is_empty());
    }
}
