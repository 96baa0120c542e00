pub mod app;
mod components;
mod theme;
mod views;

use std::io;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::config::Config;
use crate::layout_constants::{STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use app::App;
use components::{render_status_bar, render_title_bar};
use views::week_grid::render_week_grid;

const EVENT_POLL_INTERVAL_MS: u64 = 100;

pub fn run(config: &Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // "today" is read once here; everything below gets it injected.
    let today = Local::now().date_naive();
    let mut app = App::new(today, config);

    // Main event loop
    loop {
        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(TITLE_BAR_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(STATUS_BAR_HEIGHT),
                ])
                .split(size);

            render_title_bar(f, chunks[0], &app);
            render_week_grid(f, chunks[1], &app);
            render_status_bar(f, chunks[2], &app);
        })?;

        if event::poll(std::time::Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(key, &mut app) {
                    break; // Exit requested
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Returns true when the app should exit.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Left => app.page_by(-1),
        KeyCode::Right => app.page_by(1),
        KeyCode::PageUp => app.page_by(-4),
        KeyCode::PageDown => app.page_by(4),
        KeyCode::Up => app.scroll_hours(-1),
        KeyCode::Down => app.scroll_hours(1),
        KeyCode::Home | KeyCode::Char('t') => app.jump_to_today(),
        _ => {}
    }
    false
}
