//! Options form TUI main loop.

/// Options form state types.
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

use self::state::{InputMode, OptionsFormState};
use crate::config::{OptionsConfig, OptionsStore};

/// Runs the options form TUI and returns the final record.
///
/// The record is loaded from `store` at mount; every committed edit is
/// persisted back through [`OptionsStore::save_guarded`], so leaving
/// the form never loses work.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub fn run_options_form(store: &OptionsStore) -> Result<OptionsConfig> {
    let config = store.load();

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut state = OptionsFormState::new(config);

    let result = run_event_loop(&mut terminal, &mut state, store);

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result?;

    Ok(state.config)
}

/// Main event loop.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut OptionsFormState,
    store: &OptionsStore,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, state))
            .context("failed to draw TUI")?;

        if event::poll(std::time::Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            state.status = None;
            match state.input_mode {
                InputMode::Editing => {
                    if handle_edit_input(state, key.code) {
                        // Committed edit: persist without breaking the render path
                        store.save_guarded(&state.config);
                    }
                }
                InputMode::Normal => {
                    if handle_normal_input(state, key.code, key.modifiers) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Handles key input in editing mode. Returns `true` on a committed edit.
fn handle_edit_input(state: &mut OptionsFormState, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            state.commit_edit();
            return true;
        }
        KeyCode::Esc => state.cancel_edit(),
        KeyCode::Backspace => state.buffer_pop(),
        KeyCode::Char(c) => state.buffer_push(c),
        _ => {}
    }
    false
}

/// Handles key input in normal mode. Returns `true` to leave the form.
fn handle_normal_input(state: &mut OptionsFormState, key: KeyCode, modifiers: KeyModifiers) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Enter => state.begin_edit(),
        KeyCode::Char('c') => copy_generated(state),
        _ => {}
    }
    false
}

/// Copies the generated options string to the system clipboard.
///
/// Failure is reported in the status line and logged; it never tears
/// down the form.
fn copy_generated(state: &mut OptionsFormState) {
    let text = state.generated();
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => state.status = Some(String::from("Copied to clipboard")),
        Err(err) => {
            tracing::warn!(%err, "clipboard copy failed");
            state.status = Some(String::from("Clipboard unavailable"));
        }
    }
}
