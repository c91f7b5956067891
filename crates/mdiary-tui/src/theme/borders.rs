//! Border sets for Unicode and ASCII fallback.
//!
//! Honors the `NO_COLOR` environment variable by falling back to ASCII.

use ratatui::symbols::border;

/// Glyph repertoire used for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Rounded box-drawing characters.
    #[default]
    Unicode,
    /// Plain ASCII-compatible characters.
    Ascii,
}

impl GlyphMode {
    /// Pick a mode from configuration, respecting `NO_COLOR`.
    pub fn resolve(ascii_borders: bool) -> Self {
        if ascii_borders || std::env::var_os("NO_COLOR").is_some() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

const ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Border set based on glyph mode.
#[derive(Debug, Clone, Default)]
pub struct BorderSet {
    mode: GlyphMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> GlyphMode {
        self.mode
    }

    /// Borders for the panel frame.
    pub fn pane(&self) -> border::Set {
        match self.mode {
            GlyphMode::Unicode => border::ROUNDED,
            GlyphMode::Ascii => ASCII,
        }
    }

    /// Horizontal rule glyph for rendered markdown.
    pub fn rule(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "─",
            GlyphMode::Ascii => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(BorderSet::default().mode(), GlyphMode::Unicode);
    }

    #[test]
    fn test_unicode_borders() {
        let borders = BorderSet::new(GlyphMode::Unicode);
        assert_eq!(borders.pane().top_left, "╭");
        assert_eq!(borders.rule(), "─");
    }

    #[test]
    fn test_ascii_borders() {
        let borders = BorderSet::new(GlyphMode::Ascii);
        assert_eq!(borders.pane().top_left, "+");
        assert_eq!(borders.pane().horizontal_top, "-");
        assert_eq!(borders.rule(), "-");
    }

    #[test]
    fn test_config_flag_forces_ascii() {
        assert_eq!(GlyphMode::resolve(true), GlyphMode::Ascii);
    }
}
