//! Width wrapping for styled ratatui Lines.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Wrap every line to `width` columns, preserving span styles.
///
/// A width of zero leaves the lines untouched.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }

    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        if line.width() <= width {
            wrapped.push(line);
        } else {
            wrapped.extend(wrap_line(&line, width));
        }
    }
    wrapped
}

/// Split one over-wide line.
///
/// `textwrap` decides the break points on the plain text; styles are then
/// re-attached by walking the source characters in step with its output.
/// Whitespace dropped at break points is skipped in the source. Leading
/// whitespace (code block indentation) is repeated on every row when it
/// leaves room for content.
fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    let styled: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| {
            let style = line.style.patch(span.style);
            span.content.chars().map(move |ch| (ch, style))
        })
        .collect();

    let indent_len = styled.iter().take_while(|(ch, _)| ch.is_whitespace()).count();
    let (indent, body) = styled.split_at(indent_len);
    let indent_text: String = indent.iter().map(|(ch, _)| ch).collect();
    let indent_width = display_width(&indent_text);
    let indent_span = match indent.first() {
        Some(&(_, style)) if indent_width < width => Some(Span::styled(indent_text, style)),
        _ => None,
    };
    let body_width = if indent_span.is_some() {
        width - indent_width
    } else {
        width
    };

    let plain: String = body.iter().map(|(ch, _)| ch).collect();
    let mut source = body.iter().peekable();
    let mut result = Vec::new();

    for row in textwrap::wrap(&plain, body_width) {
        let mut spans: Vec<Span<'static>> = indent_span.iter().cloned().collect();
        let mut run = String::new();
        let mut run_style: Option<Style> = None;

        for expected in row.chars() {
            // Skip whitespace textwrap consumed at the previous break.
            while let Some(&&(ch, _)) = source.peek() {
                if ch == expected || !ch.is_whitespace() {
                    break;
                }
                source.next();
            }

            let style = match source.next() {
                Some(&(_, style)) => style,
                None => run_style.unwrap_or_default(),
            };

            if let Some(current) = run_style.filter(|current| *current != style) {
                spans.push(Span::styled(std::mem::take(&mut run), current));
            }
            run_style = Some(style);
            run.push(expected);
        }

        if let Some(style) = run_style {
            spans.push(Span::styled(run, style));
        }
        result.push(Line::from(spans));
    }

    result
}

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}
