//! TUI module for interactive terminal interfaces.
//!
//! Uses `ratatui` + `crossterm` for rendering.

/// Forwarder browse/delete TUI.
pub mod forwarder_viewer;
/// Options form TUI.
pub mod options_form;
