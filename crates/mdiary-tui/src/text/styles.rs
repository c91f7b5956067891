//! Markdown styling configuration.
//!
//! Provides [`MarkdownStyles`] which maps markdown elements to ratatui styles.

use pulldown_cmark::HeadingLevel;
use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

/// Styles for rendering markdown elements.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    /// Heading styles, H1 through H6.
    pub headings: [Style; 6],
    /// Inline code style.
    pub code: Style,
    /// Code block line style.
    pub code_block: Style,
    /// Emphasis (italic) style.
    pub emphasis: Style,
    /// Strong (bold) style.
    pub strong: Style,
    /// Strikethrough style.
    pub strikethrough: Style,
    /// List marker (bullet/number/checkbox) style.
    pub list_marker: Style,
    /// Link text style.
    pub link: Style,
    /// Blockquote style.
    pub blockquote: Style,
    /// Horizontal rule and table separator style.
    pub rule: Style,
    /// Normal text style.
    pub text: Style,
}

impl MarkdownStyles {
    /// Create styles from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            headings: [
                bold.fg(theme.primary).add_modifier(Modifier::UNDERLINED),
                bold.fg(theme.primary),
                bold.fg(theme.text),
                bold.fg(theme.subtext),
                bold.fg(theme.subtext).add_modifier(Modifier::ITALIC),
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            ],
            code: Style::default().fg(theme.secondary).bg(theme.surface),
            code_block: Style::default().fg(theme.secondary).bg(theme.surface),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: bold,
            strikethrough: Style::default().add_modifier(Modifier::CROSSED_OUT),
            list_marker: Style::default().fg(theme.muted),
            link: Style::default()
                .fg(theme.info)
                .add_modifier(Modifier::UNDERLINED),
            blockquote: Style::default()
                .fg(theme.subtext)
                .add_modifier(Modifier::ITALIC),
            rule: Style::default().fg(theme.border),
            text: Style::default().fg(theme.text),
        }
    }

    /// Style for a heading level.
    pub fn heading(&self, level: HeadingLevel) -> Style {
        let index = match level {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
            HeadingLevel::H4 => 3,
            HeadingLevel::H5 => 4,
            HeadingLevel::H6 => 5,
        };
        self.headings[index]
    }
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_theme() {
        let styles = MarkdownStyles::from_theme(&Theme::default());
        assert!(styles.headings[0].add_modifier.contains(Modifier::BOLD));
        assert!(styles.emphasis.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_heading_levels_distinct() {
        let styles = MarkdownStyles::default();
        assert_ne!(styles.heading(HeadingLevel::H1), styles.heading(HeadingLevel::H2));
        assert_ne!(styles.heading(HeadingLevel::H5), styles.heading(HeadingLevel::H6));
    }
}
