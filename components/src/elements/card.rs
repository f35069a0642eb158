// Card
// Elevated, filled or outlined container with headline, supporting text and actions

use std::fmt;
use std::str::FromStr;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tracing::warn;

use crate::core::attributes::ATTR_TYPE;
use crate::core::{AttributeSync, Attributes};
use crate::utilities::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardType {
    #[default]
    Elevated,
    Filled,
    Outlined,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Elevated => "elevated",
            CardType::Filled => "filled",
            CardType::Outlined => "outlined",
        }
    }

    /// Elevation level the card's shadow renders at
    pub fn elevation_level(&self) -> u8 {
        match self {
            CardType::Elevated => 1,
            CardType::Filled | CardType::Outlined => 0,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized card type: {0}")]
pub struct ParseCardTypeError(pub String);

impl FromStr for CardType {
    type Err = ParseCardTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "elevated" => Ok(CardType::Elevated),
            "filled" => Ok(CardType::Filled),
            "outlined" => Ok(CardType::Outlined),
            other => Err(ParseCardTypeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Card {
    card_type: CardType,
    image: Option<String>,
    headline: Option<String>,
    subline: Option<String>,
    supporting_text: Option<String>,
    actions: Vec<String>,
}

impl Card {
    pub fn new(card_type: CardType) -> Self {
        Self {
            card_type,
            ..Self::default()
        }
    }

    pub fn with_image(mut self, alt: impl Into<String>) -> Self {
        self.image = Some(alt.into());
        self
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_subline(mut self, subline: impl Into<String>) -> Self {
        self.subline = Some(subline.into());
        self
    }

    pub fn with_supporting_text(mut self, text: impl Into<String>) -> Self {
        self.supporting_text = Some(text.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn set_card_type(&mut self, card_type: CardType) {
        self.card_type = card_type;
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// A divider separates the actions, so it only exists when there are some
    pub fn has_divider(&self) -> bool {
        !self.actions.is_empty()
    }

    fn lines(&self, palette: &Palette, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(image) = &self.image {
            lines.push(Line::from(Span::styled(
                format!("▣ {image}"),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        if let Some(headline) = &self.headline {
            lines.push(Line::from(Span::styled(
                headline.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(subline) = &self.subline {
            lines.push(Line::from(subline.clone()));
        }
        if let Some(text) = &self.supporting_text {
            lines.push(Line::default());
            lines.extend(text.lines().map(|line| Line::from(line.to_string())));
        }
        if self.has_divider() {
            lines.push(Line::from(Span::styled(
                "─".repeat(usize::from(width)),
                Style::default().fg(palette.outline),
            )));
            let actions: Vec<Span> = self
                .actions
                .iter()
                .flat_map(|action| [Span::styled(action.clone(), palette.accent()), Span::raw("  ")])
                .collect();
            lines.push(Line::from(actions));
        }
        lines
    }

    pub fn widget<'a>(&'a self, palette: &'a Palette) -> CardWidget<'a> {
        CardWidget { card: self, palette }
    }
}

impl AttributeSync for Card {
    fn reflect_attributes(&self, attributes: &mut Attributes) {
        attributes.set(ATTR_TYPE, self.card_type.as_str());
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool {
        if name != ATTR_TYPE {
            return false;
        }
        self.card_type = match value.map(str::parse::<CardType>) {
            Some(Ok(card_type)) => card_type,
            Some(Err(err)) => {
                warn!("card: {err}");
                CardType::default()
            }
            None => CardType::default(),
        };
        true
    }
}

pub struct CardWidget<'a> {
    card: &'a Card,
    palette: &'a Palette,
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let (style, border) = match self.card.card_type {
            CardType::Elevated => (
                Style::default().fg(palette.on_surface_variant).bg(palette.surface_variant),
                Style::default().fg(palette.surface_variant),
            ),
            CardType::Filled => (
                Style::default().fg(palette.on_surface).bg(palette.secondary_container),
                Style::default().fg(palette.secondary_container),
            ),
            CardType::Outlined => (
                Style::default().fg(palette.on_surface).bg(palette.surface),
                Style::default().fg(palette.outline),
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        // elevated cards drop a one-cell shadow below and to the right
        if self.card.card_type.elevation_level() > 0 {
            let shadow = Style::default().fg(palette.track);
            if area.bottom() < buf.area.bottom() {
                for x in area.left().saturating_add(1)..area.right().min(buf.area.right()) {
                    buf[(x, area.bottom())].set_symbol("▀").set_style(shadow);
                }
            }
        }

        Paragraph::new(self.card.lines(palette, inner.width))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
