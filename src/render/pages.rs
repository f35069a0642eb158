// Page content for the selected main tab

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use md_components::{SelectionGroup, ToggleElement};

use crate::core::app::{inner, HWND_FILTERS, HWND_SECTIONS};
use crate::core::App;
use crate::HWND_MAIN_TAB_LIST;

/// Height of one card on the cards page
const CARD_HEIGHT: u16 = 9;

pub fn render_page(f: &mut Frame, app: &App, now: Instant) {
    let area = inner(app.layout.content);
    if area.width == 0 || area.height == 0 {
        return;
    }
    match app.page() {
        Some("overview") => render_overview(f, app, now),
        Some("progress") => render_progress(f, app, area, now),
        Some("cards") => render_cards(f, app, area),
        Some("help") => render_help(f, app, area),
        _ => {}
    }
}

fn render_overview(f: &mut Frame, app: &App, now: Instant) {
    let layout = app.layout;
    for (hwnd, area) in [(HWND_SECTIONS, layout.sections), (HWND_FILTERS, layout.filters)] {
        if let Some(list) = app.lists.get(hwnd) {
            f.render_widget(list.widget(&app.registry, &app.palette, now), area);
        }
    }

    let muted = Style::default().fg(app.palette.on_surface_variant);
    let selected_label = |hwnd: &str| {
        app.lists
            .get(hwnd)
            .and_then(|list| list.selected_item())
            .map(|tab| tab.item().label().to_string())
            .unwrap_or_default()
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(selected_label(HWND_SECTIONS), app.palette.accent()),
            Span::styled(format!("  filtered by {}", selected_label(HWND_FILTERS)), muted),
        ]),
        Line::default(),
        Line::from(Span::styled("Attributes", Style::default().add_modifier(Modifier::BOLD))),
    ];
    lines.extend(
        app.selected_attributes(HWND_SECTIONS)
            .into_iter()
            .map(|(name, value)| {
                Line::from(vec![
                    Span::styled(format!("  {name}"), muted),
                    Span::raw(if value.is_empty() { String::new() } else { format!("=\"{value}\"") }),
                ])
            }),
    );

    let detail = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.palette.track));
    f.render_widget(
        Paragraph::new(lines).block(detail).wrap(Wrap { trim: true }),
        layout.detail,
    );
}

fn render_progress(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            app.progress
                .iter()
                .map(|_| Constraint::Length(3))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    let muted = Style::default().fg(app.palette.on_surface_variant);
    for (bar, row) in app.progress.iter().zip(rows.iter()) {
        let aria = bar.aria();
        let value = match aria.value_now {
            Some(fraction) => format!("{:.0}%", fraction * 100.0),
            None => "indeterminate".to_string(),
        };
        let label = Line::from(vec![
            Span::raw(aria.label.unwrap_or_default()),
            Span::styled(format!("  {value}"), muted),
        ]);
        f.render_widget(Paragraph::new(label), Rect { height: 1, ..*row });

        let bar_area = Rect {
            y: row.y.saturating_add(1),
            height: row.height.saturating_sub(1).min(1),
            ..*row
        };
        f.render_widget(bar.widget(&app.palette, now), bar_area);
    }
}

fn render_cards(f: &mut Frame, app: &App, area: Rect) {
    let count = u32::try_from(app.cards.len()).unwrap_or(1).max(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(app.cards.iter().map(|_| Constraint::Ratio(1, count)))
        .spacing(2)
        .split(area);

    for (card, column) in app.cards.iter().zip(columns.iter()) {
        // one row below the card is left for the elevation shadow
        let card_area = Rect {
            height: column.height.min(CARD_HEIGHT).saturating_sub(1),
            ..*column
        };
        f.render_widget(card.widget(&app.palette), card_area);
    }
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let muted = Style::default().fg(app.palette.on_surface_variant);
    let link = app
        .lists
        .get(HWND_MAIN_TAB_LIST)
        .and_then(|list| list.selected_item())
        .map(|tab| tab.item().href().to_string())
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled("Tabs", app.palette.accent())),
        Line::from(Span::styled(
            link,
            Style::default().fg(app.palette.primary).add_modifier(Modifier::UNDERLINED),
        )),
        Line::default(),
    ];
    lines.extend(app.gallery.application.bindings.iter().map(|binding| {
        Line::from(vec![
            Span::styled(format!("{:>8}  ", binding.key), app.palette.accent()),
            Span::styled(binding.description.clone(), muted),
        ])
    }));
    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_validation::load_and_validate_config;
    use crate::core::AppConfig;
    use crate::render::render_gallery;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, now: Instant) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal
            .draw(|f| {
                app.frame_tick(now);
                app.layout(f.area());
                app.update(now);
                render_gallery(f, app, now);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol().to_string()).collect()
    }

    fn app() -> App {
        App::new(AppConfig::default(), load_and_validate_config(None).unwrap()).unwrap()
    }

    #[test]
    fn test_overview_draws_every_list() {
        let mut app = app();
        let buffer = draw(&mut app, Instant::now());
        assert!(row_text(&buffer, 0).contains("Material Gallery"));
        assert!(row_text(&buffer, 1).contains("Overview"));
        let screen: String = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
        assert!(screen.contains("Inbox"));
        assert!(screen.contains("Unread"));
        assert!(screen.contains("selected"));
    }

    #[test]
    fn test_progress_page_labels() {
        let mut app = app();
        app.lists.select(HWND_MAIN_TAB_LIST, 1).unwrap();
        let buffer = draw(&mut app, Instant::now());
        let screen: String = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
        assert!(screen.contains("Determinate  40%"));
        assert!(screen.contains("Four color  indeterminate"));
    }

    #[test]
    fn test_cards_page() {
        let mut app = app();
        app.lists.select(HWND_MAIN_TAB_LIST, 2).unwrap();
        let buffer = draw(&mut app, Instant::now());
        let screen: String = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
        assert!(screen.contains("Elevated"));
        assert!(screen.contains("Outlined"));
        assert!(screen.contains("╭"));
    }
}
