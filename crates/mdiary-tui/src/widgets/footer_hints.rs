//! Footer keybinding hints.
//!
//! Format: ` Tab preview  Esc quit`

use mdiary_engine::DiaryPanel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Ctrl+Q").
    pub key: String,
    /// The action description (e.g., "preview", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer row listing keybindings.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the active panel.
    pub fn for_panel(panel: DiaryPanel) -> Vec<KeyHint> {
        match panel {
            DiaryPanel::Write => vec![
                KeyHint::new("Tab", "preview"),
                KeyHint::new("Enter", "newline"),
                KeyHint::new("Esc", "quit"),
            ],
            DiaryPanel::Preview => vec![
                KeyHint::new("Tab", "write"),
                KeyHint::new("j/k", "scroll"),
                KeyHint::new("q", "quit"),
            ],
        }
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let key_style = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD);
        let action_style = Style::default().fg(self.theme.muted);

        let mut spans = vec![Span::raw(" ")];
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(hint.key.clone(), key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(hint.action.clone(), action_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
