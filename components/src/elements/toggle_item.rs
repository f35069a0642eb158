// Toggle Item
// Shared base for selectable children of a selection group (tabs, segments, chips)

use std::fmt;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::animation::ComputedStyle;
use crate::core::attributes::{
    ATTR_DATA_ARIA_HAS_POPUP, ATTR_DATA_ARIA_LABEL, ATTR_DISABLED, ATTR_HREF, ATTR_SELECTED, ATTR_TARGET,
    ATTR_VARIANT,
};
use crate::core::{
    Activation, ActivationDetector, AriaHasPopup, AttributeSync, Attributes, ClickEvent, ClickTarget,
    FocusVisibilityPolicy, Platform, Readiness, Variant,
};
use crate::elements::decorations::{Decoration, Elevation, FocusRing, Latch, Ripple};
use crate::elements::item_view::{AriaView, ContentView, ItemView, Shape};
use crate::elements::selection_group::SelectionContext;

/// Observable fields of a toggle item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Variant,
    Disabled,
    Selected,
    Href,
    Target,
    AriaLabel,
    AriaHasPopup,
    ShowFocusRing,
    Content,
}

/// Properties changed since the last update cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyChanges {
    changed: Vec<Property>,
}

impl PropertyChanges {
    pub fn insert(&mut self, property: Property) {
        if !self.changed.contains(&property) {
            self.changed.push(property);
        }
    }

    pub fn contains(&self, property: Property) -> bool {
        self.changed.contains(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Property> + '_ {
        self.changed.iter().copied()
    }
}

/// Selectable item: selection state, variant, disabled flag, optional link
/// target, three content slots and lazily mounted decorations.
#[derive(Debug, Clone)]
pub struct ToggleItem {
    id: String,
    scope: String,
    variant: Variant,
    disabled: bool,
    selected: bool,
    href: String,
    target: Option<String>,
    aria_label: Option<String>,
    aria_has_popup: Option<AriaHasPopup>,
    start: Option<String>,
    label: String,
    end: Option<String>,
    readiness: Readiness,
    focus_ring_requested: Latch,
    ripple_requested: Latch,
    show_focus_ring: bool,
    focused: bool,
    pressed: bool,
    changes: PropertyChanges,
}

impl ToggleItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scope: String::new(),
            variant: Variant::default(),
            disabled: false,
            selected: false,
            href: String::new(),
            target: None,
            aria_label: None,
            aria_has_popup: None,
            start: None,
            label: label.into(),
            end: None,
            readiness: Readiness::default(),
            focus_ring_requested: Latch::default(),
            ripple_requested: Latch::default(),
            show_focus_ring: false,
            focused: false,
            pressed: false,
            changes: PropertyChanges::default(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<Variant>) -> Self {
        self.set_variant(variant);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.set_href(href);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.set_target(Some(target.into()));
        self
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.set_start(Some(start.into()));
        self
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.set_end(Some(end.into()));
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.set_aria_label(Some(label.into()));
        self
    }

    pub fn with_aria_has_popup(mut self, value: AriaHasPopup) -> Self {
        self.set_aria_has_popup(Some(value));
        self
    }

    // ---- identity -------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Prefix for registry names; set by the owning group
    pub fn attach(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Registry name of the item's own box
    pub fn element_name(&self) -> String {
        if self.scope.is_empty() {
            self.id.clone()
        } else {
            format!("{}/{}", self.scope, self.id)
        }
    }

    /// Registry name of the item's indicator box
    pub fn indicator_name(&self) -> String {
        format!("{}/indicator", self.element_name())
    }

    // ---- properties -----------------------------------------------------

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }

    pub fn aria_has_popup(&self) -> Option<AriaHasPopup> {
        self.aria_has_popup
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn show_focus_ring(&self) -> bool {
        self.show_focus_ring
    }

    pub fn focus_ring_requested(&self) -> bool {
        self.focus_ring_requested.is_requested()
    }

    pub fn ripple_requested(&self) -> bool {
        self.ripple_requested.is_requested()
    }

    fn changed(&mut self, property: Property) {
        self.changes.insert(property);
    }

    pub fn set_variant(&mut self, variant: impl Into<Variant>) {
        let variant = variant.into();
        if self.variant != variant {
            self.variant = variant;
            self.changed(Property::Variant);
        }
    }

    /// Disabling an item also drops its focus and any press in progress
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.changed(Property::Disabled);
            if disabled {
                self.pressed = false;
                self.blur();
                self.set_show_focus_ring(false);
            }
        }
    }

    /// Selection flag; normally driven by the owning group
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            self.selected = selected;
            self.changed(Property::Selected);
        }
    }

    /// Empty means "not a link"
    pub fn set_href(&mut self, href: impl Into<String>) {
        let href = href.into();
        if self.href != href {
            self.href = href;
            self.changed(Property::Href);
        }
    }

    pub fn set_target(&mut self, target: Option<String>) {
        if self.target != target {
            self.target = target;
            self.changed(Property::Target);
        }
    }

    pub fn set_aria_label(&mut self, label: Option<String>) {
        if self.aria_label != label {
            self.aria_label = label;
            self.changed(Property::AriaLabel);
        }
    }

    pub fn set_aria_has_popup(&mut self, value: Option<AriaHasPopup>) {
        if self.aria_has_popup != value {
            self.aria_has_popup = value;
            self.changed(Property::AriaHasPopup);
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.label != label {
            self.label = label;
            self.changed(Property::Content);
        }
    }

    pub fn set_start(&mut self, start: Option<String>) {
        if self.start != start {
            self.start = start;
            self.changed(Property::Content);
        }
    }

    pub fn set_end(&mut self, end: Option<String>) {
        if self.end != end {
            self.end = end;
            self.changed(Property::Content);
        }
    }

    fn set_show_focus_ring(&mut self, show: bool) {
        if self.show_focus_ring != show {
            self.show_focus_ring = show;
            self.changed(Property::ShowFocusRing);
        }
    }

    // ---- update cycle ---------------------------------------------------

    /// Anything to commit: pending property changes, or the first render
    pub fn needs_update(&self) -> bool {
        !self.changes.is_empty() || self.readiness == Readiness::Unrendered
    }

    pub fn pending_changes(&self) -> &PropertyChanges {
        &self.changes
    }

    /// Pre-render hook: a ring that was asked for once stays mounted
    pub fn will_update(&mut self) {
        if self.changes.contains(Property::ShowFocusRing) {
            self.focus_ring_requested.request_if(self.show_focus_ring);
        }
    }

    /// Runs `will_update`, consumes the pending changes and records the
    /// first render. Returns the committed changes.
    pub fn commit_update(&mut self) -> PropertyChanges {
        self.will_update();
        let changes = std::mem::take(&mut self.changes);
        if self.readiness.first_updated() {
            trace!("{}: first render, awaiting frame", self.element_name());
        }
        changes
    }

    /// Animation frame tick; returns true when the item became ready to animate
    pub fn on_animation_frame(&mut self) -> bool {
        self.readiness.on_animation_frame()
    }

    /// Ready, enabled, and the user allows motion
    pub fn should_animate(&self, platform: &Platform) -> bool {
        self.readiness.is_ready() && !self.disabled && !platform.prefers_reduced_motion
    }

    // ---- focus ----------------------------------------------------------

    /// Move focus to the interactive element. Disabled items refuse focus.
    pub fn focus(&mut self, policy: &dyn FocusVisibilityPolicy) -> bool {
        if self.disabled {
            return false;
        }
        if !self.focused {
            self.focused = true;
            self.handle_focus(policy);
        }
        true
    }

    pub fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.handle_blur();
        }
    }

    /// The interactive element gained focus
    pub fn handle_focus(&mut self, policy: &dyn FocusVisibilityPolicy) {
        let show = policy.should_show_strong_focus() && !self.disabled;
        self.set_show_focus_ring(show);
    }

    pub fn handle_blur(&mut self) {
        self.set_show_focus_ring(false);
    }

    // ---- pointer --------------------------------------------------------

    /// Mount the ripple; first hover or press calls this
    pub fn request_ripple(&mut self) {
        if self.ripple_requested.request() {
            trace!("{}: ripple mounted", self.element_name());
        }
    }

    pub fn handle_down(&mut self, policy: &mut dyn FocusVisibilityPolicy) {
        policy.pointer_press();
        self.request_ripple();
        if !self.disabled {
            self.pressed = true;
        }
        let show = policy.should_show_strong_focus() && !self.disabled;
        self.set_show_focus_ring(show);
    }

    pub fn handle_up(&mut self) {
        self.pressed = false;
    }

    // ---- activation -----------------------------------------------------

    /// Route a click. Host clicks that pass the activation check focus the
    /// item and are re-dispatched to the interactive element; interactive
    /// clicks on an enabled item produce an activation.
    pub fn handle_click(
        &mut self,
        event: &ClickEvent,
        detector: &mut ActivationDetector,
        policy: &dyn FocusVisibilityPolicy,
    ) -> Option<Activation> {
        let event = event.with_target_disabled(self.disabled);
        match event.target {
            ClickTarget::Host => {
                if !detector.is_activation_click(&event) {
                    trace!("{}: host click ignored", self.element_name());
                    return None;
                }
                self.focus(policy);
                let synthetic = ActivationDetector::dispatch_activation_click(&event);
                self.activate(&synthetic)
            }
            ClickTarget::Interactive => self.activate(&event),
        }
    }

    fn activate(&self, event: &ClickEvent) -> Option<Activation> {
        if self.disabled {
            return None;
        }
        let activation = ActivationDetector::classify(event);
        debug!("{}: activated ({:?})", self.element_name(), activation);
        Some(activation)
    }

    // ---- render ---------------------------------------------------------

    pub fn render(&self) -> ItemView {
        let mut decorations = Vec::with_capacity(5);
        if self.focus_ring_requested.is_requested() {
            decorations.push(Decoration::FocusRing(FocusRing {
                visible: self.show_focus_ring,
            }));
        }
        decorations.push(Decoration::Elevation(Elevation::default()));
        if self.ripple_requested.is_requested() {
            decorations.push(Decoration::Ripple(Ripple {
                disabled: self.disabled,
                pressed: self.pressed,
            }));
        }
        decorations.push(Decoration::Outline);
        decorations.push(Decoration::TouchTarget);

        let shape = if self.href.is_empty() {
            Shape::Button
        } else {
            Shape::Link {
                href: self.href.clone(),
                target: self.target.clone(),
            }
        };

        ItemView {
            shape,
            disabled: self.disabled,
            selected: self.selected,
            focused: self.focused,
            aria: AriaView {
                label: self.aria_label.clone(),
                has_popup: self.aria_has_popup,
            },
            decorations,
            content: ContentView {
                start: self.start.clone(),
                middle: self.label.clone(),
                end: self.end.clone(),
            },
            indicator_showing: self.selected,
        }
    }
}

impl fmt::Display for ToggleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element_name())
    }
}

impl AttributeSync for ToggleItem {
    fn reflect_attributes(&self, attributes: &mut Attributes) {
        attributes.set(ATTR_VARIANT, self.variant.as_str());
        attributes.toggle(ATTR_DISABLED, self.disabled);
        attributes.toggle(ATTR_SELECTED, self.selected);
        if self.href.is_empty() {
            attributes.remove(ATTR_HREF);
        } else {
            attributes.set(ATTR_HREF, self.href.as_str());
        }
        match &self.target {
            Some(target) => attributes.set(ATTR_TARGET, target.as_str()),
            None => {
                attributes.remove(ATTR_TARGET);
            }
        }
        match &self.aria_label {
            Some(label) => attributes.set(ATTR_DATA_ARIA_LABEL, label.as_str()),
            None => {
                attributes.remove(ATTR_DATA_ARIA_LABEL);
            }
        }
        match self.aria_has_popup {
            Some(value) => attributes.set(ATTR_DATA_ARIA_HAS_POPUP, value.as_str()),
            None => {
                attributes.remove(ATTR_DATA_ARIA_HAS_POPUP);
            }
        }
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool {
        match name {
            ATTR_VARIANT => self.set_variant(value.map(Variant::from).unwrap_or_default()),
            ATTR_DISABLED => self.set_disabled(value.is_some()),
            ATTR_SELECTED => self.set_selected(value.is_some()),
            ATTR_HREF => self.set_href(value.unwrap_or_default()),
            ATTR_TARGET => self.set_target(value.map(str::to_string)),
            ATTR_DATA_ARIA_LABEL => self.set_aria_label(value.map(str::to_string)),
            ATTR_DATA_ARIA_HAS_POPUP => {
                let parsed = match value {
                    Some(raw) => match raw.parse::<AriaHasPopup>() {
                        Ok(parsed) => Some(parsed),
                        Err(err) => {
                            warn!("{}: {}", self.element_name(), err);
                            None
                        }
                    },
                    None => None,
                };
                self.set_aria_has_popup(parsed);
            }
            _ => return false,
        }
        true
    }
}

/// An element built on a `ToggleItem`. Implementors override `animate_selected`
/// to animate a selection change; the default does nothing.
pub trait ToggleElement {
    fn item(&self) -> &ToggleItem;

    fn item_mut(&mut self) -> &mut ToggleItem;

    /// Called after an update that changed `selected`, once the item may animate
    fn animate_selected(&mut self, _ctx: &SelectionContext<'_>) {}

    /// Animated indicator style at `now`, if an animation is running
    fn indicator_style(&self, _now: Instant) -> Option<ComputedStyle> {
        None
    }

    /// Frame tick; returns true when the item became ready to animate
    fn on_animation_frame(&mut self, _now: Instant) -> bool {
        self.item_mut().on_animation_frame()
    }

    fn view(&self) -> ItemView {
        self.item().render()
    }

    /// Commit pending changes and run the post-update hook.
    /// Returns false when there was nothing to commit.
    fn perform_update(&mut self, ctx: &SelectionContext<'_>) -> bool {
        if !self.item().needs_update() {
            return false;
        }
        let changes = self.item_mut().commit_update();
        if changes.contains(Property::Selected) && self.item().should_animate(&ctx.platform) {
            self.animate_selected(ctx);
        }
        true
    }
}

impl ToggleElement for ToggleItem {
    fn item(&self) -> &ToggleItem {
        self
    }

    fn item_mut(&mut self) -> &mut ToggleItem {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RectRegistry, StrongFocus};

    fn ready(mut item: ToggleItem) -> ToggleItem {
        item.commit_update();
        item.on_animation_frame();
        item
    }

    #[test]
    fn test_defaults() {
        let item = ToggleItem::new("inbox", "Inbox");
        assert!(!item.is_selected());
        assert!(!item.is_disabled());
        assert_eq!(item.variant().as_str(), "primary");
        assert_eq!(item.href(), "");
        assert!(item.needs_update());
    }

    #[test]
    fn test_setters_only_record_real_changes() {
        let mut item = ready(ToggleItem::new("a", "A"));
        item.set_selected(false);
        item.set_variant("primary");
        assert!(!item.needs_update());

        item.set_selected(true);
        item.set_selected(true);
        assert_eq!(item.pending_changes().iter().collect::<Vec<_>>(), vec![Property::Selected]);
    }

    #[test]
    fn test_readiness_gates_animation() {
        let platform = Platform::default();
        let mut item = ToggleItem::new("a", "A");
        assert!(!item.should_animate(&platform));

        item.commit_update();
        assert_eq!(item.readiness(), Readiness::AwaitingFrame);
        assert!(!item.should_animate(&platform));

        assert!(item.on_animation_frame());
        assert!(item.should_animate(&platform));
        assert!(!item.on_animation_frame());

        assert!(!item.should_animate(&Platform::new(true)));

        item.set_disabled(true);
        assert!(!item.should_animate(&platform));
    }

    #[test]
    fn test_link_shape_when_href_set() {
        let item = ToggleItem::new("docs", "Docs")
            .with_href("https://example.com")
            .with_target("_blank");
        match item.render().shape {
            Shape::Link { href, target } => {
                assert_eq!(href, "https://example.com");
                assert_eq!(target.as_deref(), Some("_blank"));
            }
            Shape::Button => panic!("expected a link"),
        }
        assert_eq!(ToggleItem::new("b", "B").render().shape, Shape::Button);
    }

    #[test]
    fn test_decoration_order_and_lazy_mounting() {
        let mut item = ToggleItem::new("a", "A");
        let names: Vec<_> = item.render().decorations.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["elevation", "outline", "touch"]);

        let mut policy = StrongFocus::new();
        item.focus(&policy);
        item.commit_update();
        item.handle_down(&mut policy);
        item.commit_update();
        let names: Vec<_> = item.render().decorations.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["focus-ring", "elevation", "ripple", "outline", "touch"]);
    }

    #[test]
    fn test_focus_ring_latch_survives_pointer_focus() {
        let mut item = ToggleItem::new("a", "A");
        let mut policy = StrongFocus::new();

        // keyboard focus mounts and shows the ring
        item.focus(&policy);
        item.commit_update();
        assert!(item.focus_ring_requested());
        assert!(item.render().focus_ring_visible());

        // pointer press hides it but keeps it mounted
        item.handle_down(&mut policy);
        item.commit_update();
        assert!(!item.show_focus_ring());
        assert!(item.focus_ring_requested());
        assert!(item.render().has_decoration("focus-ring"));
        assert!(!item.render().focus_ring_visible());
    }

    #[test]
    fn test_pointer_focus_never_mounts_ring() {
        let mut item = ToggleItem::new("a", "A");
        let mut policy = StrongFocus::new();
        item.handle_down(&mut policy);
        item.focus(&policy);
        item.commit_update();
        assert!(!item.focus_ring_requested());
    }

    #[test]
    fn test_disabled_never_shows_ring_or_focus() {
        let mut item = ToggleItem::new("a", "A").with_disabled(true);
        let mut policy = StrongFocus::new();
        policy.set_always_strong(true);

        assert!(!item.focus(&policy));
        item.handle_focus(&policy);
        assert!(!item.show_focus_ring());
        item.handle_down(&mut policy);
        assert!(!item.show_focus_ring());
        assert!(!item.is_pressed());
    }

    #[test]
    fn test_disabling_blurs() {
        let mut item = ToggleItem::new("a", "A");
        let policy = StrongFocus::new();
        item.focus(&policy);
        assert!(item.show_focus_ring());

        item.set_disabled(true);
        assert!(!item.is_focused());
        assert!(!item.show_focus_ring());
    }

    #[test]
    fn test_programmatic_click_activates_once_per_task() {
        let mut item = ToggleItem::new("a", "A");
        let mut detector = ActivationDetector::new();
        let policy = StrongFocus::new();

        let first = item.handle_click(&ClickEvent::programmatic(), &mut detector, &policy);
        assert_eq!(first, Some(Activation::Programmatic));
        assert!(item.is_focused());

        // a second host click in the same task is squelched
        let second = item.handle_click(&ClickEvent::programmatic(), &mut detector, &policy);
        assert_eq!(second, None);

        detector.end_task();
        let third = item.handle_click(&ClickEvent::programmatic(), &mut detector, &policy);
        assert_eq!(third, Some(Activation::Programmatic));
    }

    #[test]
    fn test_disabled_item_swallows_clicks() {
        let mut item = ToggleItem::new("a", "A").with_disabled(true);
        let mut detector = ActivationDetector::new();
        let policy = StrongFocus::new();

        assert_eq!(item.handle_click(&ClickEvent::programmatic(), &mut detector, &policy), None);
        assert_eq!(item.handle_click(&ClickEvent::pointer(), &mut detector, &policy), None);
        assert!(!item.is_focused());
    }

    #[test]
    fn test_interactive_click_classified() {
        let mut item = ToggleItem::new("a", "A");
        let mut detector = ActivationDetector::new();
        let policy = StrongFocus::new();
        assert_eq!(
            item.handle_click(&ClickEvent::keyboard(), &mut detector, &policy),
            Some(Activation::Keyboard)
        );
        assert_eq!(
            item.handle_click(&ClickEvent::pointer(), &mut detector, &policy),
            Some(Activation::Pointer)
        );
        assert!(!detector.is_squelching());
    }

    #[test]
    fn test_attribute_round_trip() {
        let item = ToggleItem::new("a", "A")
            .with_variant("navigation")
            .with_href("/a")
            .with_aria_label("First")
            .with_aria_has_popup(AriaHasPopup::Menu);
        let attributes = item.attributes();
        assert_eq!(attributes.get(ATTR_VARIANT), Some("navigation"));
        assert_eq!(attributes.get(ATTR_HREF), Some("/a"));
        assert_eq!(attributes.get(ATTR_DATA_ARIA_LABEL), Some("First"));
        assert_eq!(attributes.get(ATTR_DATA_ARIA_HAS_POPUP), Some("menu"));
        assert!(!attributes.has(ATTR_DISABLED));

        let mut copy = ToggleItem::new("b", "B");
        copy.apply_attributes(&attributes);
        assert_eq!(copy.variant().as_str(), "navigation");
        assert_eq!(copy.href(), "/a");
        assert_eq!(copy.aria_has_popup(), Some(AriaHasPopup::Menu));
    }

    #[test]
    fn test_attribute_removal_and_unknown() {
        let mut item = ToggleItem::new("a", "A").with_disabled(true).with_variant("vertical");
        assert!(item.attribute_changed(ATTR_DISABLED, None));
        assert!(!item.is_disabled());
        assert!(item.attribute_changed(ATTR_VARIANT, None));
        assert_eq!(item.variant().as_str(), "primary");
        assert!(item.attribute_changed(ATTR_DATA_ARIA_HAS_POPUP, Some("bogus")));
        assert_eq!(item.aria_has_popup(), None);
        assert!(!item.attribute_changed("tabindex", Some("0")));
    }

    #[test]
    fn test_base_element_never_animates() {
        let registry = RectRegistry::new();
        let mut item = ready(ToggleItem::new("a", "A"));
        item.set_selected(true);
        let ctx = SelectionContext::new(&registry, Platform::default(), Instant::now());
        assert!(item.perform_update(&ctx));
        assert!(item.indicator_style(Instant::now()).is_none());
        assert!(!item.perform_update(&ctx));
    }

    #[test]
    fn test_scoped_names() {
        let mut item = ToggleItem::new("inbox", "Inbox");
        assert_eq!(item.element_name(), "inbox");
        item.attach("mail");
        assert_eq!(item.element_name(), "mail/inbox");
        assert_eq!(item.indicator_name(), "mail/inbox/indicator");
    }
}
