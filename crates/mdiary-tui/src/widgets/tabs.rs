//! Tab strip widget.
//!
//! Layout: `[1] Write | [2] Preview`. The active tab is highlighted; the
//! same column ranges are used for drawing and for mouse hit-testing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::text::display_width;
use crate::theme::Theme;

const SEPARATOR: &str = " | ";

/// A horizontal single-select tab strip.
#[derive(Debug, Clone)]
pub struct TabBar<'a> {
    labels: Vec<&'a str>,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    /// Create a tab strip for `labels`, in order.
    pub fn new(labels: Vec<&'a str>, theme: &'a Theme) -> Self {
        Self {
            labels,
            selected: 0,
            theme,
        }
    }

    /// Set the selected tab index.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Map a click at terminal column `x` inside `area` to a tab index.
    pub fn hit_test(labels: &[&str], area: Rect, x: u16) -> Option<usize> {
        let column = usize::from(x.checked_sub(area.x)?);
        tab_ranges(labels)
            .into_iter()
            .position(|(start, end)| (start..end).contains(&column))
    }

    fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn idle_style(&self) -> Style {
        Style::default().fg(self.theme.muted)
    }
}

/// Title text for a tab, e.g. `[2] Preview`.
fn tab_title(index: usize, label: &str) -> String {
    format!("[{}] {label}", index + 1)
}

/// Column ranges (`start..end`) occupied by each tab title.
fn tab_ranges(labels: &[&str]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::with_capacity(labels.len());
    let mut column = 0;
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            column += SEPARATOR.len();
        }
        let width = display_width(&tab_title(i, label));
        ranges.push((column, column + width));
        column += width;
    }
    ranges
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut spans = Vec::with_capacity(self.labels.len() * 2);
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(self.theme.border)));
            }
            let style = if i == self.selected {
                self.selected_style()
            } else {
                self.idle_style()
            };
            spans.push(Span::styled(tab_title(i, label), style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
