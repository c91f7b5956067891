//! Test utilities for mdiary-tui rendering and navigation tests.
//!
//! This module provides helpers for creating apps with deterministic borders,
//! a preview renderer that records what it was asked to render, and buffer to
//! string conversion for snapshot testing.

use std::cell::RefCell;
use std::rc::Rc;

use mdiary_engine::Config;
use ratatui::{buffer::Buffer, layout::Rect, text::Line};

use crate::app::App;
use crate::layout::render_shell;
use crate::text::{MarkdownRenderer, PreviewRenderer};
use crate::theme::{BorderSet, GlyphMode, Theme};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Inputs a [`RecordingRenderer`] received, with the requested width.
pub type RenderCalls = Rc<RefCell<Vec<(String, usize)>>>;

/// Preview renderer that records each call and echoes the input lines.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: RenderCalls,
}

impl RecordingRenderer {
    /// Create a renderer and a handle to its call log.
    pub fn new() -> (Self, RenderCalls) {
        let calls = RenderCalls::default();
        (
            Self {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl PreviewRenderer for RecordingRenderer {
    fn render(&self, input: &str, width: usize) -> Vec<Line<'static>> {
        self.calls.borrow_mut().push((input.to_string(), width));
        input.lines().map(|line| Line::from(line.to_string())).collect()
    }
}

/// Create a test app with Unicode borders and the markdown preview.
pub fn create_test_app() -> App {
    let renderer = MarkdownRenderer::new(&Theme::default());
    with_unicode_borders(App::with_renderer(Config::default(), Box::new(renderer)))
}

/// Create a test app whose preview records its inputs.
pub fn create_recording_app() -> (App, RenderCalls) {
    let (renderer, calls) = RecordingRenderer::new();
    let app = with_unicode_borders(App::with_renderer(Config::default(), Box::new(renderer)));
    (app, calls)
}

fn with_unicode_borders(mut app: App) -> App {
    // NO_COLOR in the test environment must not change rendered glyphs.
    app.borders = BorderSet::new(GlyphMode::Unicode);
    app
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// This produces a simple text representation of the buffer content,
/// suitable for snapshot comparison.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the whole app at the default test size.
pub fn render_app_to_string(app: &mut App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the whole app with custom dimensions.
pub fn render_app_to_string_sized(app: &mut App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_shell(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.borders.mode(), GlyphMode::Unicode);
        assert!(app.shell.entry().is_empty());
    }

    #[test]
    fn test_recording_renderer_logs_calls() {
        let (renderer, calls) = RecordingRenderer::new();
        let lines = renderer.render("a\nb", 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(calls.borrow().as_slice(), [("a\nb".to_string(), 10)]);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }
}
