//! Multi-line controlled text input.
//!
//! The value lives with the caller. [`TextInputState`] keeps only the cursor
//! and scroll offsets; [`TextInputState::apply`] reports the full new value
//! whenever an edit changes the text, and the caller echoes it back on the
//! next render.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

use crate::text::display_width;

/// An edit or cursor movement applied to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    /// Insert one character (including `'\n'`).
    Insert(char),
    /// Insert a string, e.g. from a paste.
    InsertStr(String),
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    /// Start of the current line.
    Home,
    /// End of the current line.
    End,
}

/// Cursor and scroll state for a [`TextArea`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// Cursor position as a character index into the value.
    cursor: usize,
    /// First visible line.
    scroll_row: usize,
    /// First visible display column.
    scroll_col: usize,
}

impl TextInputState {
    /// Create a state with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a freshly mounted input showing `value`: cursor at the end.
    pub fn mounted(value: &str) -> Self {
        Self {
            cursor: value.chars().count(),
            ..Self::default()
        }
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an edit to `value`.
    ///
    /// Returns the complete new value if the text changed, `None` if the edit
    /// only moved the cursor or had nothing to do.
    pub fn apply(&mut self, value: &str, edit: &InputEdit) -> Option<String> {
        let len = value.chars().count();
        self.cursor = self.cursor.min(len);

        match edit {
            InputEdit::Insert(ch) => {
                let mut next = value.to_string();
                next.insert(byte_index(value, self.cursor), *ch);
                self.cursor += 1;
                Some(next)
            }
            InputEdit::InsertStr(text) => {
                let text = normalize_newlines(text);
                if text.is_empty() {
                    return None;
                }
                let mut next = value.to_string();
                next.insert_str(byte_index(value, self.cursor), &text);
                self.cursor += text.chars().count();
                Some(next)
            }
            InputEdit::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                let mut next = value.to_string();
                next.remove(byte_index(value, self.cursor));
                Some(next)
            }
            InputEdit::Delete => {
                if self.cursor >= len {
                    return None;
                }
                let mut next = value.to_string();
                next.remove(byte_index(value, self.cursor));
                Some(next)
            }
            InputEdit::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            InputEdit::Right => {
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            InputEdit::Home => {
                let (row, _) = cursor_row_col(value, self.cursor);
                self.cursor = line_start(value, row);
                None
            }
            InputEdit::End => {
                let (row, _) = cursor_row_col(value, self.cursor);
                self.cursor = line_start(value, row) + line_len(value, row);
                None
            }
            InputEdit::Up => {
                let (row, col) = cursor_row_col(value, self.cursor);
                if row == 0 {
                    self.cursor = 0;
                } else {
                    self.cursor = line_start(value, row - 1) + col.min(line_len(value, row - 1));
                }
                None
            }
            InputEdit::Down => {
                let (row, col) = cursor_row_col(value, self.cursor);
                let rows = value.split('\n').count();
                if row + 1 >= rows {
                    self.cursor = len;
                } else {
                    self.cursor = line_start(value, row + 1) + col.min(line_len(value, row + 1));
                }
                None
            }
        }
    }

    /// Cursor as (line, character column) within `value`.
    pub fn position(&self, value: &str) -> (usize, usize) {
        cursor_row_col(value, self.cursor.min(value.chars().count()))
    }

    /// Scroll so the cursor cell at (`row`, `col`) fits a `width` x `height` view.
    fn scroll_to(&mut self, row: usize, col: usize, width: usize, height: usize) {
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }

        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + width {
            self.scroll_col = col + 1 - width;
        }
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Byte offset of the `char_index`-th character.
fn byte_index(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map_or(value.len(), |(i, _)| i)
}

fn cursor_row_col(value: &str, cursor: usize) -> (usize, usize) {
    let mut row = 0;
    let mut col = 0;
    for ch in value.chars().take(cursor) {
        if ch == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row, col)
}

/// Character index where line `row` starts.
fn line_start(value: &str, row: usize) -> usize {
    value
        .split('\n')
        .take(row)
        .map(|line| line.chars().count() + 1)
        .sum()
}

fn line_len(value: &str, row: usize) -> usize {
    value
        .split('\n')
        .nth(row)
        .map_or(0, |line| line.chars().count())
}

/// A multi-line text area rendering a caller-owned value.
#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    value: &'a str,
    placeholder: Option<&'a str>,
    block: Option<Block<'a>>,
    style: Style,
    placeholder_style: Style,
}

impl<'a> TextArea<'a> {
    /// Create a text area showing `value`.
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: None,
            block: None,
            style: Style::default(),
            placeholder_style: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Set the block for the text area.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set placeholder text shown while the value is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the text style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder style.
    #[must_use]
    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }
}

impl StatefulWidget for TextArea<'_> {
    type State = TextInputState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        if inner.height < 1 || inner.width < 1 {
            return;
        }

        if self.value.is_empty() {
            state.scroll_row = 0;
            state.scroll_col = 0;
            if let Some(placeholder) = self.placeholder {
                Paragraph::new(placeholder)
                    .style(self.placeholder_style)
                    .render(inner, buf);
            }
            mark_cursor(buf, inner.x, inner.y);
            return;
        }

        let (row, col) = state.position(self.value);
        let line = self.value.split('\n').nth(row).unwrap_or_default();
        let before: String = line.chars().take(col).collect();
        let column = display_width(&before);
        state.scroll_to(
            row,
            column,
            usize::from(inner.width),
            usize::from(inner.height),
        );

        let lines: Vec<Line<'_>> = self.value.split('\n').map(Line::from).collect();
        Paragraph::new(lines)
            .style(self.style)
            .scroll((to_u16(state.scroll_row), to_u16(state.scroll_col)))
            .render(inner, buf);

        let x = inner.x + to_u16(column - state.scroll_col);
        let y = inner.y + to_u16(row - state.scroll_row);
        mark_cursor(buf, x, y);
    }
}

fn mark_cursor(buf: &mut Buffer, x: u16, y: u16) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn type_str(state: &mut TextInputState, value: &mut String, text: &str) {
        for ch in text.chars() {
            if let Some(next) = state.apply(value, &InputEdit::Insert(ch)) {
                *value = next;
            }
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = TextInputState::new();
        let mut value = String::new();
        type_str(&mut state, &mut value, "Hi");
        assert_eq!(value, "Hi");
        assert_eq!(state.cursor(), 2);

        value = state.apply(&value, &InputEdit::Backspace).unwrap();
        assert_eq!(value, "H");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_cursor_moves_do_not_change_value() {
        let mut state = TextInputState::mounted("Hello");
        assert_eq!(state.apply("Hello", &InputEdit::Left), None);
        assert_eq!(state.apply("Hello", &InputEdit::Left), None);
        assert_eq!(state.cursor(), 3);

        let value = state.apply("Hello", &InputEdit::Insert('X')).unwrap();
        assert_eq!(value, "HelXlo");
    }

    #[test]
    fn test_backspace_at_start_and_delete_at_end_are_noops() {
        let mut state = TextInputState::new();
        assert_eq!(state.apply("abc", &InputEdit::Backspace), None);

        let mut state = TextInputState::mounted("abc");
        assert_eq!(state.apply("abc", &InputEdit::Delete), None);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut state = TextInputState::new();
        assert_eq!(state.apply("abc", &InputEdit::Delete).as_deref(), Some("bc"));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut state = TextInputState::mounted("día");
        state.apply("día", &InputEdit::Left);
        let value = state.apply("día", &InputEdit::Backspace).unwrap();
        assert_eq!(value, "da");
    }

    #[test]
    fn test_paste_normalizes_newlines() {
        let mut state = TextInputState::new();
        let value = state
            .apply("", &InputEdit::InsertStr("a\r\nb\rc".into()))
            .unwrap();
        assert_eq!(value, "a\nb\nc");
        assert_eq!(state.cursor(), 5);
        assert_eq!(state.apply(&value, &InputEdit::InsertStr(String::new())), None);
    }

    #[test]
    fn test_home_end_on_current_line() {
        let value = "first\nsecond";
        let mut state = TextInputState::mounted(value);
        state.apply(value, &InputEdit::Home);
        assert_eq!(state.position(value), (1, 0));
        state.apply(value, &InputEdit::End);
        assert_eq!(state.position(value), (1, 6));
    }

    #[test]
    fn test_up_down_keep_column() {
        let value = "long line\nab\nanother";
        let mut state = TextInputState::new();
        state.apply(value, &InputEdit::End);
        assert_eq!(state.position(value), (0, 9));

        state.apply(value, &InputEdit::Down);
        assert_eq!(state.position(value), (1, 2));

        state.apply(value, &InputEdit::Down);
        assert_eq!(state.position(value), (2, 2));

        state.apply(value, &InputEdit::Down);
        assert_eq!(state.cursor(), value.chars().count());

        state.apply(value, &InputEdit::Up);
        assert_eq!(state.position(value), (1, 2));
    }

    #[test]
    fn test_cursor_clamped_to_replaced_value() {
        let mut state = TextInputState::mounted("a much longer value");
        let value = state.apply("short", &InputEdit::Insert('!')).unwrap();
        assert_eq!(value, "short!");
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        let mut state = TextInputState::new();
        TextArea::new("")
            .placeholder("Write here")
            .render(area, &mut buf, &mut state);
        assert_eq!(buffer_to_string(&buf), "Write here\n");
    }

    #[test]
    fn test_render_value_lines() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let value = "# Hello\nworld";
        let mut state = TextInputState::mounted(value);
        TextArea::new(value)
            .placeholder("unused")
            .render(area, &mut buf, &mut state);
        assert_eq!(buffer_to_string(&buf), "# Hello\nworld\n");

        let cursor = buf.cell((5, 1)).unwrap();
        assert!(cursor.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        let value = "one\ntwo\nthree\nfour";
        let mut state = TextInputState::mounted(value);
        TextArea::new(value).render(area, &mut buf, &mut state);
        assert_eq!(buffer_to_string(&buf), "three\nfour");
    }
}
