//! Application state for the mdiary TUI.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use mdiary_engine::{Config, DiaryPanel, EditorShell};
use ratatui::layout::Rect;
use tracing::debug;

use crate::event::{key_to_action, Action};
use crate::text::{MarkdownRenderer, PreviewRenderer};
use crate::theme::{BorderSet, GlyphMode, Theme};
use crate::widgets::{InputEdit, TabBar, TextInputState};

/// Lines moved per mouse wheel notch in the preview.
const WHEEL_LINES: u16 = 3;

/// Lines moved per page in the preview.
const PAGE_LINES: u16 = 10;

/// Main application state.
pub struct App {
    /// Owner of the diary entry and the Write/Preview tabs.
    pub shell: EditorShell,
    /// Cursor and scroll of the mounted Write panel.
    pub input: TextInputState,
    /// First visible line of the mounted Preview panel.
    pub preview_scroll: u16,
    /// Loaded configuration.
    pub config: Config,
    /// Theme colors.
    pub theme: Theme,
    /// Border glyphs.
    pub borders: BorderSet,
    /// Should the app quit?
    pub should_quit: bool,
    /// Where the tab strip was last drawn, for mouse hit-testing.
    pub(crate) tab_bar_area: Rect,
    renderer: Box<dyn PreviewRenderer>,
}

impl App {
    /// Create an app rendering the preview with pulldown-cmark.
    pub fn new(config: Config) -> Self {
        let (theme, borders) = resolve_look(&config);
        let renderer = MarkdownRenderer::new(&theme).rule_glyph(borders.rule());
        Self::assemble(config, theme, borders, Box::new(renderer))
    }

    /// Create an app with a custom preview renderer.
    pub fn with_renderer(config: Config, renderer: Box<dyn PreviewRenderer>) -> Self {
        let (theme, borders) = resolve_look(&config);
        Self::assemble(config, theme, borders, renderer)
    }

    fn assemble(
        config: Config,
        theme: Theme,
        borders: BorderSet,
        renderer: Box<dyn PreviewRenderer>,
    ) -> Self {
        Self {
            shell: EditorShell::new(),
            input: TextInputState::new(),
            preview_scroll: 0,
            config,
            theme,
            borders,
            should_quit: false,
            tab_bar_area: Rect::default(),
            renderer,
        }
    }

    /// The preview renderer.
    pub fn renderer(&self) -> &dyn PreviewRenderer {
        self.renderer.as_ref()
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = key_to_action(key, self.shell.active_panel());
        self.handle_action(action);
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextTab => self.switch_panel(EditorShell::select_next),
            Action::PrevTab => self.switch_panel(EditorShell::select_prev),
            Action::Tab(index) => self.switch_panel(|shell| {
                shell.select_index(index);
            }),
            Action::Edit(edit) => self.apply_edit(&edit),
            Action::ScrollUp => self.scroll_preview_up(1),
            Action::ScrollDown => self.scroll_preview_down(1),
            Action::PageUp => self.scroll_preview_up(PAGE_LINES),
            Action::PageDown => self.scroll_preview_down(PAGE_LINES),
            Action::ScrollTop => self.preview_scroll = 0,
            // Clamped to the content height on the next render.
            Action::ScrollBottom => self.preview_scroll = u16::MAX,
            Action::None => {}
        }
    }

    /// Handle bracketed paste. Only the Write panel accepts text.
    pub fn handle_paste(&mut self, text: String) {
        if self.shell.active_panel() == DiaryPanel::Write {
            self.apply_edit(&InputEdit::InsertStr(text));
        }
    }

    /// Handle mouse input: tab clicks and preview wheel scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if mouse.row == self.tab_bar_area.y => {
                let hit = {
                    let labels: Vec<&str> = self.shell.tabs().labels().collect();
                    TabBar::hit_test(&labels, self.tab_bar_area, mouse.column)
                };
                if let Some(index) = hit {
                    debug!(index, "tab clicked");
                    self.handle_action(Action::Tab(index));
                }
            }
            MouseEventKind::ScrollUp => self.scroll_preview_up(WHEEL_LINES),
            MouseEventKind::ScrollDown => self.scroll_preview_down(WHEEL_LINES),
            _ => {}
        }
    }

    /// Activate a panel by label. Unknown labels are ignored.
    pub fn select(&mut self, label: &str) -> bool {
        let mut found = false;
        self.switch_panel(|shell| found = shell.select(label));
        found
    }

    /// Replace the entry with `text`.
    pub fn on_text_changed(&mut self, text: String) {
        self.shell.on_text_changed(text);
    }

    /// Run a selection on the shell and remount the panel if it changed.
    fn switch_panel(&mut self, select: impl FnOnce(&mut EditorShell)) {
        let before = self.shell.tabs().active_index();
        select(&mut self.shell);
        if self.shell.tabs().active_index() != before {
            self.remount_active_panel();
        }
    }

    /// Inactive panels are unmounted, so a newly active one starts fresh.
    fn remount_active_panel(&mut self) {
        match self.shell.active_panel() {
            DiaryPanel::Write => self.input = TextInputState::mounted(self.shell.text()),
            DiaryPanel::Preview => self.preview_scroll = 0,
        }
    }

    fn apply_edit(&mut self, edit: &InputEdit) {
        if self.shell.active_panel() != DiaryPanel::Write {
            return;
        }
        if let Some(text) = self.input.apply(self.shell.text(), edit) {
            self.on_text_changed(text);
        }
    }

    fn scroll_preview_up(&mut self, lines: u16) {
        if self.shell.active_panel() == DiaryPanel::Preview {
            self.preview_scroll = self.preview_scroll.saturating_sub(lines);
        }
    }

    fn scroll_preview_down(&mut self, lines: u16) {
        if self.shell.active_panel() == DiaryPanel::Preview {
            self.preview_scroll = self.preview_scroll.saturating_add(lines);
        }
    }
}

/// Palette and border glyphs picked by the configuration.
fn resolve_look(config: &Config) -> (Theme, BorderSet) {
    let theme = Theme::from_name(config.theme);
    let borders = BorderSet::new(GlyphMode::resolve(config.ascii_borders));
    (theme, borders)
}
