// Material Gallery
// Interactive terminal gallery for tab lists, progress bars and cards

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use md_gallery::logging::init_file_logging;
use md_gallery::render::render_gallery;
use md_gallery::{load_and_validate_config, App, AppConfig, EventHandler};

//--------------------------------------------------------<<

/// Poll interval while nothing animates
const IDLE_POLL: Duration = Duration::from_millis(250);

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let app_config = AppConfig::default();
    init_file_logging(&app_config.logging)?;

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let gallery = load_and_validate_config(config_path.as_deref())?;
    let mut app = App::new(app_config, gallery)?;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if app.config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!("gallery stopped: {err:#}");
    }
    info!("gallery closed");
    result
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let now = Instant::now();

        // frame tick, then layout, then the update cycle reads the new geometry
        app.frame_tick(now);
        terminal.draw(|f| {
            app.layout(f.area());
            app.update(now);
            render_gallery(f, app, now);
        })?;

        let timeout = if app.is_animating(Instant::now()) {
            app.config.ui.tick_rate
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            let event = EventHandler::handle(event::read()?);
            app.handle_event(event);
        }
    }
    Ok(())
}
