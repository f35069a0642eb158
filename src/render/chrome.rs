// Title bar, content box and status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::App;

pub fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.gallery.application.title),
        app.palette.accent(),
    )];
    if app.platform.prefers_reduced_motion {
        spans.push(Span::styled(
            "reduced motion",
            Style::default().fg(app.palette.on_surface_variant),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render main content box border
pub fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.palette.outline));

    f.render_widget(content_block, area);
}

/// Status text on the left, key bindings on the right
pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(app.palette.on_surface_variant);
    let bindings: Vec<Span> = app
        .gallery
        .application
        .bindings
        .iter()
        .flat_map(|binding| {
            [
                Span::styled(binding.key.clone(), app.palette.accent()),
                Span::styled(format!(" {}  ", binding.description), muted),
            ]
        })
        .collect();
    let bindings = Line::from(bindings);
    let width = u16::try_from(bindings.width()).unwrap_or(u16::MAX).min(area.width / 2);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(width)])
        .split(area);
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", app.status_text()), muted)),
        chunks[0],
    );
    f.render_widget(Paragraph::new(bindings).alignment(Alignment::Right), chunks[1]);
}
