//! Text rendering utilities.
//!
//! This module provides:
//! - [`PreviewRenderer`] - The seam between the Preview panel and its renderer
//! - [`MarkdownRenderer`] - pulldown-cmark implementation of that seam
//! - [`MarkdownStyles`] - Style configuration for markdown elements
//! - [`wrap_lines`] - Width wrapping that keeps span styles

mod markdown;
mod styles;
mod wrap;

use ratatui::text::Line;

pub use markdown::MarkdownRenderer;
pub use styles::MarkdownStyles;
pub use wrap::{display_width, wrap_lines};

/// Turns the full entry text into lines for the Preview panel.
///
/// Called with the complete current entry every time the Preview panel is
/// drawn. Implementations must not panic on malformed input.
pub trait PreviewRenderer {
    /// Render `input` for a pane `width` columns wide.
    fn render(&self, input: &str, width: usize) -> Vec<Line<'static>>;
}
