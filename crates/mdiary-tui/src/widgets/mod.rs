//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`TabBar`] - Single-select tab strip with mouse hit-testing
//! - [`TextArea`] / [`TextInputState`] - Controlled multi-line input
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`Pane`] - Bordered frame with optional title

mod footer_hints;
mod pane;
mod tabs;
pub mod text_input;

pub use footer_hints::{FooterHints, KeyHint};
pub use pane::Pane;
pub use tabs::TabBar;
pub use text_input::{InputEdit, TextArea, TextInputState};
