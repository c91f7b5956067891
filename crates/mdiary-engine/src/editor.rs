//! Editor shell: owns the diary entry and the Write/Preview tab set.

use tracing::trace;

use crate::tabs::{Panel, TabSet};

/// Label of the editing panel.
pub const WRITE_LABEL: &str = "Write";

/// Label of the rendered preview panel.
pub const PREVIEW_LABEL: &str = "Preview";

/// Content the editor shell hands to its tab set.
///
/// The front end decides how each variant is drawn: `Write` is the text
/// input bound to the entry, `Preview` is the markdown renderer invoked
/// with the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiaryPanel {
    Write,
    Preview,
}

/// The full current text of the diary being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    text: String,
    revision: u64,
}

impl Entry {
    /// The entry text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of replacements applied since mount.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the entry is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Count of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn replace(&mut self, text: String) {
        self.text = text;
        self.revision += 1;
    }
}

/// Owns the diary entry and feeds it to the Write and Preview panels.
#[derive(Debug, Clone)]
pub struct EditorShell {
    entry: Entry,
    tabs: TabSet<DiaryPanel>,
}

impl Default for EditorShell {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorShell {
    /// Mount a new shell with an empty entry and the Write panel active.
    pub fn new() -> Self {
        let tabs = TabSet::new(vec![
            Panel::new(WRITE_LABEL, DiaryPanel::Write),
            Panel::new(PREVIEW_LABEL, DiaryPanel::Preview),
        ])
        .expect("Write and Preview labels are distinct");

        Self {
            entry: Entry::default(),
            tabs,
        }
    }

    /// Replace the entry wholesale with `new_text`.
    pub fn on_text_changed(&mut self, new_text: impl Into<String>) {
        self.entry.replace(new_text.into());
        trace!(
            revision = self.entry.revision(),
            len = self.entry.text.len(),
            "entry changed"
        );
    }

    /// The current entry.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The current entry text.
    pub fn text(&self) -> &str {
        self.entry.as_str()
    }

    /// The Write/Preview tab set.
    pub fn tabs(&self) -> &TabSet<DiaryPanel> {
        &self.tabs
    }

    /// Content of the active panel.
    pub fn active_panel(&self) -> DiaryPanel {
        *self.tabs.active_content()
    }

    /// Activate a panel by label. Unknown labels are ignored.
    pub fn select(&mut self, label: &str) -> bool {
        self.tabs.select(label)
    }

    /// Activate a panel by position. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        self.tabs.select_index(index)
    }

    /// Activate the next panel.
    pub fn select_next(&mut self) {
        self.tabs.select_next();
    }

    /// Activate the previous panel.
    pub fn select_prev(&mut self) {
        self.tabs.select_prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_defaults() {
        let shell = EditorShell::new();
        assert_eq!(shell.text(), "");
        assert!(shell.entry().is_empty());
        assert_eq!(shell.entry().revision(), 0);
        assert_eq!(shell.tabs().active_label(), WRITE_LABEL);
        assert_eq!(shell.active_panel(), DiaryPanel::Write);
    }

    #[test]
    fn test_panels_in_order() {
        let shell = EditorShell::new();
        let labels: Vec<&str> = shell.tabs().labels().collect();
        assert_eq!(labels, vec![WRITE_LABEL, PREVIEW_LABEL]);
    }

    #[test]
    fn test_text_change_replaces_entry() {
        let mut shell = EditorShell::new();
        shell.on_text_changed("# Hello");
        assert_eq!(shell.text(), "# Hello");

        shell.on_text_changed("");
        assert_eq!(shell.text(), "");
        assert_eq!(shell.entry().revision(), 2);
    }

    #[test]
    fn test_text_change_is_idempotent() {
        let mut shell = EditorShell::new();
        shell.on_text_changed("**bold**");
        shell.on_text_changed("**bold**");
        assert_eq!(shell.text(), "**bold**");
    }

    #[test]
    fn test_select_preview_and_back() {
        let mut shell = EditorShell::new();
        assert!(shell.select(PREVIEW_LABEL));
        assert_eq!(shell.active_panel(), DiaryPanel::Preview);

        assert!(!shell.select("Nonexistent"));
        assert_eq!(shell.active_panel(), DiaryPanel::Preview);

        shell.select_next();
        assert_eq!(shell.active_panel(), DiaryPanel::Write);
    }

    #[test]
    fn test_counts() {
        let mut shell = EditorShell::new();
        shell.on_text_changed("Dear diary,\ntoday é was fine.");
        assert_eq!(shell.entry().word_count(), 6);
        assert_eq!(shell.entry().char_count(), 29);
    }
}
