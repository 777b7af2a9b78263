//! Forwarder viewer state management.

use std::collections::BTreeSet;

/// A forwarder row for display.
#[derive(Debug, Clone)]
pub struct ForwarderRow {
    /// Full forwarder address (`alias@domain`).
    pub email: String,
    /// Destination addresses the alias forwards to.
    pub destinations: Vec<String>,
}

/// Input mode for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode.
    Normal,
    /// Filter text input mode.
    Filter,
}

/// Result of the TUI interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerResult {
    /// User confirmed the marked deletions.
    Confirmed,
    /// User cancelled.
    Cancelled,
}

/// State for the forwarder viewer TUI.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ForwarderViewerState {
    /// Domain the rows were fetched for.
    pub domain: String,
    /// All forwarder rows.
    pub rows: Vec<ForwarderRow>,
    /// Emails marked for deletion.
    pub marked: BTreeSet<String>,
    /// Cursor position in the filtered list.
    pub cursor: usize,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Filter text.
    pub filter: String,
    /// Cached filtered row indices.
    filtered_indices: Vec<usize>,
}

impl ForwarderViewerState {
    /// Creates a new state from fetched rows.
    #[must_use]
    pub fn new(domain: String, rows: Vec<ForwarderRow>) -> Self {
        let row_count = rows.len();
        Self {
            domain,
            rows,
            marked: BTreeSet::new(),
            cursor: 0,
            input_mode: InputMode::Normal,
            filter: String::new(),
            filtered_indices: (0..row_count).collect(),
        }
    }

    /// Returns the total number of rows.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of rows marked for deletion.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Returns filtered row indices.
    #[must_use]
    pub fn filtered_rows(&self) -> &[usize] {
        &self.filtered_indices
    }

    /// Returns the row under the cursor.
    #[must_use]
    pub fn current_row(&self) -> Option<&ForwarderRow> {
        let row_idx = self.filtered_indices.get(self.cursor).copied()?;
        self.rows.get(row_idx)
    }

    /// Moves the cursor up.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor down.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.filtered_indices.len() {
            self.cursor += 1;
        }
    }

    /// Toggles the deletion mark on the row under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(row) = self.current_row() {
            let email = row.email.clone();
            if self.marked.contains(&email) {
                self.marked.remove(&email);
            } else {
                self.marked.insert(email);
            }
        }
    }

    /// Updates the filter and rebuilds the cache.
    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
        self.rebuild_filter_cache();
        self.cursor = 0;
    }

    /// Appends a character to the filter.
    pub fn filter_push(&mut self, ch: char) {
        self.filter.push(ch);
        self.rebuild_filter_cache();
        self.cursor = 0;
    }

    /// Removes the last character from the filter.
    pub fn filter_pop(&mut self) {
        self.filter.pop();
        self.rebuild_filter_cache();
        if self.cursor >= self.filtered_indices.len() {
            self.cursor = 0;
        }
    }

    /// Rebuilds the filter cache.
    ///
    /// A row matches when its email or any destination contains the
    /// filter text (case-insensitive).
    fn rebuild_filter_cache(&mut self) {
        if self.filter.is_empty() {
            self.filtered_indices = (0..self.rows.len()).collect();
            return;
        }

        let filter_lower = self.filter.to_lowercase();
        self.filtered_indices = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.email.to_lowercase().contains(&filter_lower)
                    || row
                        .destinations
                        .iter()
                        .any(|dest| dest.to_lowercase().contains(&filter_lower))
            })
            .map(|(i, _)| i)
            .collect();
    }
}
