//! Markdown rendering using pulldown-cmark.
//!
//! [`MarkdownRenderer`] is the preview collaborator: it turns the raw entry
//! into styled, width-wrapped ratatui lines.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{styles::MarkdownStyles, wrap::wrap_lines, PreviewRenderer};
use crate::theme::Theme;

/// Renders markdown into styled lines for the Preview panel.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    styles: MarkdownStyles,
    rule: &'static str,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl MarkdownRenderer {
    /// Create a renderer styled by `theme`.
    pub fn new(theme: &Theme) -> Self {
        Self {
            styles: MarkdownStyles::from_theme(theme),
            rule: "─",
        }
    }

    /// Set the glyph repeated for horizontal rules.
    #[must_use]
    pub fn rule_glyph(mut self, glyph: &'static str) -> Self {
        self.rule = glyph;
        self
    }
}

impl PreviewRenderer for MarkdownRenderer {
    fn render(&self, input: &str, width: usize) -> Vec<Line<'static>> {
        let lines = render_with(input, width, &self.styles, self.rule);
        wrap_lines(lines, width)
    }
}

fn render_with(
    input: &str,
    width: usize,
    styles: &MarkdownStyles,
    rule: &str,
) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_TABLES);

    let mut writer = LineWriter::new(styles, rule, width);
    for event in Parser::new_ext(input, options) {
        writer.handle_event(event);
    }
    writer.finish()
}

/// Accumulates styled lines from pulldown-cmark events.
struct LineWriter<'s> {
    styles: &'s MarkdownStyles,
    rule: &'s str,
    width: usize,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    /// Inline styles, innermost last.
    style_stack: Vec<Style>,
    /// One entry per open list; `Some(n)` is the next ordinal.
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    /// List marker (and checkbox) waiting for the item's first span.
    pending_marker: Option<String>,
    table_cell: usize,
}

impl<'s> LineWriter<'s> {
    fn new(styles: &'s MarkdownStyles, rule: &'s str, width: usize) -> Self {
        Self {
            styles,
            rule,
            width,
            lines: Vec::new(),
            spans: Vec::new(),
            style_stack: Vec::new(),
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            pending_marker: None,
            table_cell: 0,
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let span = Span::styled(format!("`{code}`"), self.styles.code);
                self.push_span(span);
            }
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                let rule = self.rule.repeat(self.width.max(3));
                self.lines.push(Line::from(Span::styled(rule, self.styles.rule)));
                self.blank();
            }
            Event::TaskListMarker(checked) => {
                let checkbox = if checked { "[x] " } else { "[ ] " };
                match self.pending_marker.as_mut() {
                    Some(marker) => marker.push_str(checkbox),
                    None => self.push_span(Span::styled(checkbox, self.styles.list_marker)),
                }
            }
            Event::FootnoteReference(name) => {
                let span = Span::styled(format!("[^{name}]"), self.styles.link);
                self.push_span(span);
            }
            // Raw HTML is dropped.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.style_stack.push(self.styles.heading(level));
            }
            Tag::Emphasis => self.style_stack.push(self.styles.emphasis),
            Tag::Strong => self.style_stack.push(self.styles.strong),
            Tag::Strikethrough => self.style_stack.push(self.styles.strikethrough),
            Tag::Link { .. } => self.style_stack.push(self.styles.link),
            Tag::Image { .. } => {
                self.style_stack.push(self.styles.link);
                self.text("[image: ");
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
            }
            Tag::BlockQuote => {
                self.flush();
                self.quote_depth += 1;
            }
            Tag::List(start) => {
                // An item opening with a nested list keeps its own marker line.
                if self.pending_marker.is_some() {
                    self.push_span(Span::raw(""));
                }
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = format!("{indent}{next}. ");
                        *next += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.pending_marker = Some(marker);
            }
            Tag::Table(_) => self.flush(),
            Tag::TableHead | Tag::TableRow => {
                self.flush();
                self.table_cell = 0;
            }
            Tag::TableCell => {
                if self.table_cell > 0 {
                    self.push_span(Span::styled(" | ", self.styles.rule));
                }
                self.table_cell += 1;
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            TagEnd::Heading(_) => {
                self.flush();
                self.style_stack.pop();
                self.blank();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.style_stack.pop();
            }
            TagEnd::Image => {
                self.text("]");
                self.style_stack.pop();
            }
            TagEnd::CodeBlock => {
                self.flush();
                self.in_code_block = false;
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            TagEnd::BlockQuote => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                if self.quote_depth == 0 {
                    self.blank();
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            TagEnd::Item => {
                // Empty items still show their marker.
                if self.pending_marker.is_some() {
                    self.push_span(Span::raw(""));
                }
                self.flush();
            }
            TagEnd::TableHead | TagEnd::TableRow => self.flush(),
            TagEnd::Table => {
                self.flush();
                self.blank();
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                let span = Span::styled(format!("  {line}"), self.styles.code_block);
                self.push_span(span);
                self.flush();
            }
            return;
        }

        let style = self.current_style();
        self.push_span(Span::styled(text.to_string(), style));
    }

    /// Push a span, emitting quote prefix and list marker on a fresh line.
    fn push_span(&mut self, span: Span<'static>) {
        if self.spans.is_empty() && self.quote_depth > 0 {
            self.spans.push(Span::styled(
                "> ".repeat(self.quote_depth),
                self.styles.blockquote,
            ));
        }
        if let Some(marker) = self.pending_marker.take() {
            self.spans.push(Span::styled(marker, self.styles.list_marker));
        }
        self.spans.push(span);
    }

    fn current_style(&self) -> Style {
        let mut style = self.styles.text;
        if self.quote_depth > 0 {
            style = style.patch(self.styles.blockquote);
        }
        for s in &self.style_stack {
            style = style.patch(*s);
        }
        style
    }

    fn flush(&mut self) {
        if !self.spans.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.lines.push(Line::from(spans));
        }
    }

    /// Separate blocks with a single blank line.
    fn blank(&mut self) {
        if self.lines.last().is_some_and(|line| !is_blank(line)) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(is_blank) {
            self.lines.pop();
        }
        self.lines
    }
}

fn is_blank(line: &Line<'_>) -> bool {
    line.spans.iter().all(|span| span.content.is_empty())
}
