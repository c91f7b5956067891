//! mdiary-tui: Terminal UI for the markdown diary editor
//!
//! This crate provides the TUI layer for mdiary, including:
//! - A Write panel with a controlled multi-line input
//! - A Preview panel rendering the entry as markdown
//! - The tab strip switching between them
//! - Shared widgets, themes and markdown text rendering

mod app;
mod event;
mod layout;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use layout::{render_shell, MIN_HEIGHT, MIN_WIDTH};
pub use mdiary_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mdiary_engine::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate_ms = config.effective_tick_rate_ms();
    let mut app = App::new(config);

    let mut events = EventHandler::new(tick_rate_ms);
    info!(tick_rate_ms, theme = ?app.config.theme, "diary session started");

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    let entry = app.shell.entry();
    info!(
        revision = entry.revision(),
        chars = entry.char_count(),
        "diary session ended"
    );

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_shell(app, area, frame.buffer_mut());
        })?;

        match events.next().await {
            Some(Event::Key(key)) => app.handle_key(key),
            Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(Event::Paste(text)) => app.handle_paste(text),
            // The next draw lays out against the new frame size.
            Some(Event::Resize(..) | Event::Tick) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
