// Item View
// Pure description of a rendered toggle item, plus the widgets that paint it

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::animation::{Axis, ComputedStyle, IndicatorRect, Transform};
use crate::core::AriaHasPopup;
use crate::elements::decorations::{Decoration, Ripple};
use crate::utilities::{blend, Palette};

/// Whether the interactive element is a button or a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Button,
    Link { href: String, target: Option<String> },
}

/// Accessibility values forwarded to the interactive element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaView {
    pub label: Option<String>,
    pub has_popup: Option<AriaHasPopup>,
}

/// Start, label and end slot contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentView {
    pub start: Option<String>,
    pub middle: String,
    pub end: Option<String>,
}

impl ContentView {
    /// `start label end`, skipping empty slots
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(start) = &self.start {
            spans.push(Span::raw(start.clone()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(self.middle.clone()));
        if let Some(end) = &self.end {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(end.clone()));
        }
        Line::from(spans)
    }

    /// Display width in cells
    pub fn width(&self) -> u16 {
        u16::try_from(self.line().width()).unwrap_or(u16::MAX)
    }
}

/// A full render of a toggle item at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub shape: Shape,
    pub disabled: bool,
    pub selected: bool,
    pub focused: bool,
    pub aria: AriaView,
    pub decorations: Vec<Decoration>,
    pub content: ContentView,
    /// Whether the indicator should show at rest
    pub indicator_showing: bool,
}

impl ItemView {
    pub fn is_link(&self) -> bool {
        matches!(self.shape, Shape::Link { .. })
    }

    pub fn has_decoration(&self, name: &str) -> bool {
        self.decorations.iter().any(|decoration| decoration.name() == name)
    }

    pub fn focus_ring_visible(&self) -> bool {
        self.decorations
            .iter()
            .any(|decoration| matches!(decoration, Decoration::FocusRing(ring) if ring.visible))
    }

    fn ripple(&self) -> Option<Ripple> {
        self.decorations.iter().find_map(|decoration| match decoration {
            Decoration::Ripple(ripple) => Some(*ripple),
            _ => None,
        })
    }

    /// Paints the item's content into `area`
    pub fn widget<'a>(&'a self, palette: &'a Palette) -> ItemViewWidget<'a> {
        ItemViewWidget { view: self, palette }
    }
}

pub struct ItemViewWidget<'a> {
    view: &'a ItemView,
    palette: &'a Palette,
}

impl Widget for ItemViewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let view = self.view;
        let palette = self.palette;

        let mut style = Style::default().fg(palette.on_surface_variant);
        if view.selected {
            style = style.fg(palette.primary).add_modifier(Modifier::BOLD);
        }
        if view.disabled {
            style = Style::default().fg(palette.disabled);
        }
        if view.is_link() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if let Some(ripple) = self.view.ripple() {
            if ripple.pressed && !ripple.disabled {
                style = style.bg(palette.pressed);
            }
        }

        let content = view.content.line();
        let width = u16::try_from(content.width()).unwrap_or(u16::MAX).min(area.width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_line(x, area.y, &content.style(style), width);

        if view.focus_ring_visible() && area.width >= 2 {
            let ring = Style::default().fg(palette.secondary);
            buf.set_string(area.x, area.y, "[", ring);
            buf.set_string(area.right() - 1, area.y, "]", ring);
        }
    }
}

/// Paints an indicator at its laid-out rect, displaced by an animated style.
/// Cells that fall outside `clip` are skipped.
pub struct IndicatorWidget {
    pub rect: IndicatorRect,
    pub axis: Axis,
    pub style: Option<ComputedStyle>,
    pub showing: bool,
    pub color: Color,
    pub background: Color,
}

impl IndicatorWidget {
    /// Opacity and transform in effect
    pub fn effective(&self) -> (f32, Transform) {
        match self.style {
            Some(style) => (style.opacity, style.transform),
            None => (if self.showing { 1.0 } else { 0.0 }, Transform::IDENTITY),
        }
    }

    fn glyph(&self) -> &'static str {
        match self.axis {
            Axis::X => "━",
            Axis::Y => "┃",
        }
    }
}

impl Widget for IndicatorWidget {
    fn render(self, clip: Rect, buf: &mut Buffer) {
        let (opacity, transform) = self.effective();
        if opacity <= 0.05 {
            return;
        }
        let drawn = transform.apply(&self.rect);
        let color = blend(self.color, self.background, opacity);
        let style = Style::default().fg(color);

        let left = drawn.left.round().max(0.0) as u16;
        let top = drawn.top.round().max(0.0) as u16;
        let right = (drawn.left + drawn.width).round().max(0.0) as u16;
        let bottom = (drawn.top + drawn.height).round().max(0.0) as u16;
        let clip = clip.intersection(buf.area);

        for y in top.max(clip.top())..bottom.min(clip.bottom()) {
            for x in left.max(clip.left())..right.min(clip.right()) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(self.glyph()).set_style(style);
                }
            }
        }
    }
}
