// Helper utilities for TUI components
use ratatui::style::{Color, Modifier, Style};

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Mix `color` over `background` at `opacity` (0 = background, 1 = color).
/// Only RGB colors can be mixed; others snap at half opacity.
pub fn blend(color: Color, background: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(b) + (f32::from(a) - f32::from(b)) * opacity).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if opacity >= 0.5 => color,
        _ => background,
    }
}

/// Color roles used by every component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub surface: Color,
    pub surface_variant: Color,
    pub secondary_container: Color,
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub track: Color,
    pub pressed: Color,
    pub disabled: Color,
    /// Four-color indeterminate progress cycle
    pub four_color: [Color; 4],
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            primary: hex_color(0xD0BCFF),
            secondary: hex_color(0xCCC2DC),
            surface: hex_color(0x141218),
            surface_variant: hex_color(0x49454F),
            secondary_container: hex_color(0x4A4458),
            on_surface: hex_color(0xE6E0E9),
            on_surface_variant: hex_color(0xCAC4D0),
            outline: hex_color(0x938F99),
            track: hex_color(0x49454F),
            pressed: hex_color(0x2B2930),
            disabled: hex_color(0x5C5963),
            four_color: [
                hex_color(0x4285F4),
                hex_color(0xEA4335),
                hex_color(0xFBBC04),
                hex_color(0x34A853),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            primary: hex_color(0x6750A4),
            secondary: hex_color(0x625B71),
            surface: hex_color(0xFEF7FF),
            surface_variant: hex_color(0xE7E0EC),
            secondary_container: hex_color(0xE8DEF8),
            on_surface: hex_color(0x1D1B20),
            on_surface_variant: hex_color(0x49454F),
            outline: hex_color(0x79747E),
            track: hex_color(0xE7E0EC),
            pressed: hex_color(0xE8DEF8),
            disabled: hex_color(0xB0ABB5),
            ..Self::dark()
        }
    }

    /// Palette for a configured theme name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Base style for text on the surface
    pub fn text(&self) -> Style {
        Style::default().fg(self.on_surface).bg(self.surface)
    }

    /// Bold primary accent
    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x102030), Color::Rgb(0x10, 0x20, 0x30));
    }

    #[test]
    fn test_blend_rgb() {
        let white = Color::Rgb(255, 255, 255);
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(blend(white, black, 1.0), white);
        assert_eq!(blend(white, black, 0.0), black);
        assert_eq!(blend(white, black, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_blend_named_snaps() {
        assert_eq!(blend(Color::Cyan, Color::Black, 0.7), Color::Cyan);
        assert_eq!(blend(Color::Cyan, Color::Black, 0.2), Color::Black);
    }

    #[test]
    fn test_unknown_theme_is_dark() {
        assert_eq!(Palette::from_name("solarized"), Palette::dark());
        assert_eq!(Palette::from_name("Light"), Palette::light());
    }
}
