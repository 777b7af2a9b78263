//! TUI rendering logic for the forwarder viewer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::state::{ForwarderViewerState, InputMode};

/// Draws the forwarder viewer UI.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &ForwarderViewerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // forwarder list
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_list(frame, chunks[1], state);
    draw_footer(frame, chunks[2], state);
}

/// Draws the header with filter input and mark counts.
#[allow(clippy::indexing_slicing)]
fn draw_header(frame: &mut Frame, area: Rect, state: &ForwarderViewerState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let filter_style = if state.input_mode == InputMode::Filter {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let filter = Paragraph::new(state.filter.clone())
        .style(filter_style)
        .block(Block::default().borders(Borders::ALL).title(" Filter: / "));
    frame.render_widget(filter, header_chunks[0]);

    let count_text = format!(
        "Marked: {} / {}",
        state.marked_count(),
        state.total_count()
    );
    let count = Paragraph::new(count_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", state.domain)),
    );
    frame.render_widget(count, header_chunks[1]);
}

/// Draws the forwarder list.
fn draw_list(frame: &mut Frame, area: Rect, state: &ForwarderViewerState) {
    let filtered = state.filtered_rows();
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .filter_map(|(i, &row_idx)| {
            let row = state.rows.get(row_idx)?;

            let checkbox = if state.marked.contains(&row.email) {
                "[x]"
            } else {
                "[ ]"
            };

            let style = if i == state.cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if state.marked.contains(&row.email) {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            Some(ListItem::new(Line::from(vec![Span::styled(
                format!(
                    " {} {}  \u{2192} {}",
                    checkbox,
                    row.email,
                    row.destinations.join(", ")
                ),
                style,
            )])))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Forwarders "),
    );

    frame.render_widget(list, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &ForwarderViewerState) {
    let help_text = if state.input_mode == InputMode::Filter {
        "Type to filter | Esc: cancel filter | Enter: apply"
    } else {
        "\u{2191}\u{2193}/j/k: move  Space: mark for deletion  /: filter  Enter: delete marked  q: cancel"
    };

    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
