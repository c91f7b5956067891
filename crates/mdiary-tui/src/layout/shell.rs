//! Main shell layout with 4 regions.
//!
//! Regions:
//! 1. Title row (top, 1 line) with entry word and character counts
//! 2. Tab strip (1 line)
//! 3. Active panel (expands): the Write input or the Preview
//! 4. Footer Hints (bottom, 1 line)
//!
//! Only the active panel is drawn. The inactive one has no state on screen.

use mdiary_engine::DiaryPanel;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::app::App;
use crate::text::display_width;
use crate::widgets::{FooterHints, Pane, TabBar, TextArea};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 20;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 6;

const EMPTY_PREVIEW: &str = "Nothing to preview yet.";

/// Render the whole screen into `buf`.
///
/// Takes the app mutably: the Write input scrolls to its cursor, the preview
/// scroll is clamped to its content, and the tab strip position is recorded
/// for mouse hit-testing.
pub fn render_shell(app: &mut App, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(app.theme.base));

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(app, area, buf);
        return;
    }

    let [title_area, tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(app, title_area, buf);

    let labels: Vec<&str> = app.shell.tabs().labels().collect();
    TabBar::new(labels, &app.theme)
        .select(app.shell.tabs().active_index())
        .render(tabs_area, buf);
    app.tab_bar_area = tabs_area;

    match app.shell.active_panel() {
        DiaryPanel::Write => render_write(app, body_area, buf),
        DiaryPanel::Preview => render_preview(app, body_area, buf),
    }

    let hints = FooterHints::for_panel(app.shell.active_panel());
    FooterHints::new(&hints, &app.theme).render(footer_area, buf);
}

fn render_title(app: &App, area: Rect, buf: &mut Buffer) {
    let entry = app.shell.entry();
    let stats = format!(
        "{} words · {} chars ",
        entry.word_count(),
        entry.char_count()
    );
    let stats_width = u16::try_from(display_width(&stats))
        .unwrap_or(u16::MAX)
        .min(area.width);

    let [title_area, stats_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(stats_width)]).areas(area);

    let title_style = Style::default()
        .fg(app.theme.primary)
        .add_modifier(Modifier::BOLD);
    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(app.config.title.as_str(), title_style),
    ]))
    .render(title_area, buf);

    Paragraph::new(stats)
        .style(Style::default().fg(app.theme.muted))
        .alignment(Alignment::Right)
        .render(stats_area, buf);
}

fn render_write(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Pane::new(&app.theme, &app.borders)
        .title(app.shell.tabs().active_label())
        .block();

    TextArea::new(app.shell.text())
        .block(block)
        .placeholder(&app.config.placeholder)
        .style(Style::default().fg(app.theme.text))
        .placeholder_style(
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )
        .render(area, buf, &mut app.input);
}

fn render_preview(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Pane::new(&app.theme, &app.borders)
        .title(app.shell.tabs().active_label())
        .block();
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = app
        .renderer()
        .render(app.shell.text(), usize::from(inner.width));

    if lines.is_empty() {
        app.preview_scroll = 0;
        Paragraph::new(EMPTY_PREVIEW)
            .style(
                Style::default()
                    .fg(app.theme.muted)
                    .add_modifier(Modifier::DIM),
            )
            .render(inner, buf);
        return;
    }

    let max_scroll = lines.len().saturating_sub(usize::from(inner.height));
    let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    app.preview_scroll = app.preview_scroll.min(max_scroll);

    Paragraph::new(lines)
        .style(Style::default().fg(app.theme.text))
        .scroll((app.preview_scroll, 0))
        .render(inner, buf);
}

/// Render "terminal too small" warning.
fn render_too_small(app: &mut App, area: Rect, buf: &mut Buffer) {
    app.tab_bar_area = Rect::default();
    Paragraph::new("Terminal too small")
        .style(Style::default().fg(app.theme.warning))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_recording_app, create_test_app, render_app_to_string_sized};
    use mdiary_engine::PREVIEW_LABEL;

    #[test]
    fn test_min_size_constants() {
        assert_eq!(MIN_WIDTH, 20);
        assert_eq!(MIN_HEIGHT, 6);
    }

    #[test]
    fn test_write_panel_layout() {
        let mut app = create_test_app();
        let screen = render_app_to_string_sized(&mut app, 60, 10);
        let rows: Vec<&str> = screen.lines().collect();

        assert!(rows[0].starts_with(" Markdown Diary"));
        assert!(rows[0].ends_with("0 words · 0 chars"));
        assert_eq!(rows[1], "[1] Write | [2] Preview");
        assert!(rows[2].contains(" Write "));
        assert!(rows[3].contains("Write your diary entry here using Markdown..."));
        assert!(rows[9].starts_with(" Tab preview"));
        assert_eq!(app.tab_bar_area, Rect::new(0, 1, 60, 1));
    }

    #[test]
    fn test_theme_base_fills_background() {
        let mut app = create_test_app();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        render_shell(&mut app, area, &mut buf);
        assert_eq!(buf.cell((39, 9)).unwrap().bg, app.theme.base);
    }

    #[test]
    fn test_title_counts_follow_entry() {
        let mut app = create_test_app();
        app.on_text_changed("Dear diary".into());
        let screen = render_app_to_string_sized(&mut app, 60, 10);
        assert!(screen.lines().next().unwrap().ends_with("2 words · 10 chars"));
    }

    #[test]
    fn test_preview_panel_replaces_write_panel() {
        let mut app = create_test_app();
        app.on_text_changed("# Hello\n\nSome *text*.".into());
        app.select(PREVIEW_LABEL);

        let screen = render_app_to_string_sized(&mut app, 60, 10);
        assert!(screen.contains(" Preview "));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("Some text."));
        assert!(!screen.contains("# Hello"));
        assert!(screen.lines().last().unwrap().starts_with(" Tab write"));
    }

    #[test]
    fn test_empty_preview_hint() {
        let mut app = create_test_app();
        app.select(PREVIEW_LABEL);
        let screen = render_app_to_string_sized(&mut app, 60, 10);
        assert!(screen.contains(EMPTY_PREVIEW));
    }

    #[test]
    fn test_preview_receives_inner_width() {
        let (mut app, calls) = create_recording_app();
        app.on_text_changed("abc".into());
        app.select(PREVIEW_LABEL);
        render_app_to_string_sized(&mut app, 50, 10);
        assert_eq!(calls.borrow().as_slice(), [("abc".to_string(), 48)]);
    }

    #[test]
    fn test_empty_entry_still_reaches_renderer() {
        let (mut app, calls) = create_recording_app();
        app.select(PREVIEW_LABEL);
        render_app_to_string_sized(&mut app, 50, 10);
        assert_eq!(calls.borrow().as_slice(), [(String::new(), 48)]);
    }

    #[test]
    fn test_markdown_source_passed_verbatim() {
        let source = "# Title\n\n- **bold** item\n\n```\ncode\n```";
        let (mut app, calls) = create_recording_app();
        app.on_text_changed(source.to_string());
        app.select(PREVIEW_LABEL);
        render_app_to_string_sized(&mut app, 50, 10);
        assert_eq!(calls.borrow().as_slice(), [(source.to_string(), 48)]);
    }

    #[test]
    fn test_preview_scroll_clamped() {
        let (mut app, _) = create_recording_app();
        let text: Vec<String> = (1..=20).map(|n| format!("line {n}")).collect();
        app.on_text_changed(text.join("\n"));
        app.select(PREVIEW_LABEL);
        app.preview_scroll = u16::MAX;

        // 10 rows leave a 7 row pane, 5 rows inside its border.
        let screen = render_app_to_string_sized(&mut app, 40, 10);
        assert_eq!(app.preview_scroll, 15);
        assert!(!screen.contains("line 15"));
        assert!(screen.contains("line 16"));
        assert!(screen.contains("line 20"));
    }

    #[test]
    fn test_too_small() {
        let mut app = create_test_app();
        let screen = render_app_to_string_sized(&mut app, 19, 5);
        assert_eq!(screen.lines().next(), Some("Terminal too small"));
        assert_eq!(app.tab_bar_area, Rect::default());
    }
}
