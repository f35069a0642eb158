// Render module - UI rendering functions

pub mod chrome;
pub mod pages;

use std::time::Instant;

use ratatui::Frame;

use crate::core::App;

pub use chrome::{render_content, render_status_bar, render_title};
pub use pages::render_page;

/// Draw one frame; `App::layout` and `App::update` must already have run
pub fn render_gallery(f: &mut Frame, app: &App, now: Instant) {
    let layout = app.layout;
    f.render_widget(ratatui::widgets::Block::default().style(app.palette.text()), f.area());

    render_title(f, app, layout.title);
    if let Some(main) = app.lists.get(crate::HWND_MAIN_TAB_LIST) {
        f.render_widget(main.widget(&app.registry, &app.palette, now), layout.main_tabs);
    }
    render_content(f, app, layout.content);
    render_page(f, app, now);
    render_status_bar(f, app, layout.status);
}
