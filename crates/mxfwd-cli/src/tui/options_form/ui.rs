//! TUI rendering logic for the options form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::state::{Field, InputMode, OptionsFormState};

/// Draws the options form UI.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &OptionsFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Min(11),    // field list
            Constraint::Length(5),  // generated string
            Constraint::Length(3),  // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_fields(frame, chunks[1], state);
    draw_generated(frame, chunks[2], state);
    draw_footer(frame, chunks[3], state);
}

/// Draws the header with the transient status line.
fn draw_header(frame: &mut Frame, area: Rect, state: &OptionsFormState) {
    let status_text = state.status.clone().unwrap_or_default();
    let header = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Options String Generator "),
        );
    frame.render_widget(header, area);
}

/// Draws the field list.
fn draw_fields(frame: &mut Frame, area: Rect, state: &OptionsFormState) {
    let editing = state.input_mode == InputMode::Editing;

    let items: Vec<ListItem> = Field::ALL
        .iter()
        .enumerate()
        .map(|(i, &field)| {
            let is_current = i == state.cursor;

            let marker = if is_current { "\u{25b8} " } else { "  " };

            let value = if is_current && editing {
                format!("{}\u{2588}", state.buffer)
            } else {
                String::from(state.field_value(field))
            };

            let style = if is_current && editing {
                Style::default().fg(Color::Yellow)
            } else if is_current {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(String::from(marker)),
                Span::styled(format!("{:<16} {}", field.label(), value), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Fields "));

    frame.render_widget(list, area);
}

/// Draws the generated options string pane.
fn draw_generated(frame: &mut Frame, area: Rect, state: &OptionsFormState) {
    let generated = state.generated();
    let paragraph = Paragraph::new(generated)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Options String "),
        );
    frame.render_widget(paragraph, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &OptionsFormState) {
    let help_text = if state.input_mode == InputMode::Editing {
        "Type to edit | Backspace: delete | Enter: commit | Esc: discard"
    } else {
        "\u{2191}\u{2193}/j/k: move  Enter: edit field  c: copy string  q: quit"
    };

    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
