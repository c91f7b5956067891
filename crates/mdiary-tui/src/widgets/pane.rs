//! Bordered pane frame with an optional title.
//!
//! The active panel is the only one on screen, so its frame always uses the
//! highlighted border color.

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::theme::{BorderSet, Theme};

/// Frame around a panel's content.
pub struct Pane<'a> {
    title: Option<&'a str>,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title: None,
            theme,
            borders,
        }
    }

    /// Set the pane title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Build the block to wrap content in.
    pub fn block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.pane())
            .border_style(Style::default().fg(self.theme.border_focused));

        if let Some(title) = self.title {
            block = block
                .title(format!(" {title} "))
                .title_style(Style::default().fg(self.theme.primary));
        }

        block
    }
}
