//! Forwarder viewer TUI main loop.

/// Forwarder viewer state types.
pub mod state;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use self::state::{ForwarderViewerState, InputMode, ViewerResult};
pub use self::state::ForwarderRow;

/// Runs the forwarder viewer TUI and returns the emails marked for
/// deletion.
///
/// Returns `None` if the user cancels, or `Some(marked)` if confirmed.
/// The viewer itself performs no I/O; the caller deletes the returned
/// forwarders after the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub fn run_forwarder_viewer(
    domain: String,
    rows: Vec<ForwarderRow>,
) -> Result<Option<Vec<String>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut state = ForwarderViewerState::new(domain, rows);

    let result = run_event_loop(&mut terminal, &mut state);

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    let viewer_result = result?;

    match viewer_result {
        ViewerResult::Confirmed => {
            let marked: Vec<String> = state.marked.into_iter().collect();
            Ok(Some(marked))
        }
        ViewerResult::Cancelled => Ok(None),
    }
}

/// Main event loop.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ForwarderViewerState,
) -> Result<ViewerResult> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, state))
            .context("failed to draw TUI")?;

        if event::poll(std::time::Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            match state.input_mode {
                InputMode::Filter => {
                    if let Some(result) = handle_filter_input(state, key.code) {
                        return Ok(result);
                    }
                }
                InputMode::Normal => {
                    if let Some(result) = handle_normal_input(state, key.code, key.modifiers) {
                        return Ok(result);
                    }
                }
            }
        }
    }
}

/// Handles key input in filter mode. Returns `Some` to exit the loop.
fn handle_filter_input(state: &mut ForwarderViewerState, key: KeyCode) -> Option<ViewerResult> {
    match key {
        KeyCode::Esc => {
            state.set_filter(String::new());
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_pop();
        }
        KeyCode::Char(c) => {
            state.filter_push(c);
        }
        _ => {}
    }
    None
}

/// Handles key input in normal mode. Returns `Some` to exit the loop.
fn handle_normal_input(
    state: &mut ForwarderViewerState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<ViewerResult> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Some(ViewerResult::Cancelled),
        KeyCode::Enter => return Some(ViewerResult::Confirmed),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(ViewerResult::Cancelled);
        }
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Char(' ') => state.toggle_current(),
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
        }
        _ => {}
    }
    None
}
