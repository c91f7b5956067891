//! Single-select tab container.
//!
//! A [`TabSet`] owns a fixed, ordered list of [`Panel`]s and tracks which one
//! is active. Exactly one panel is active at any time, the active label is
//! always one of the panel labels, and panel order never changes after
//! construction.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

/// A labelled section of content selectable within a [`TabSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel<C> {
    label: String,
    content: C,
}

impl<C> Panel<C> {
    /// Create a new panel.
    pub fn new(label: impl Into<String>, content: C) -> Self {
        Self {
            label: label.into(),
            content,
        }
    }

    /// The panel's unique label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The caller-supplied content.
    pub fn content(&self) -> &C {
        &self.content
    }
}

/// Errors that can occur when constructing a [`TabSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// No panels were supplied.
    #[error("tab container requires at least one panel")]
    Empty,

    /// Two panels share the same label.
    #[error("duplicate panel label: {0}")]
    DuplicateLabel(String),
}

/// Fixed, ordered set of panels with exactly one active.
#[derive(Debug, Clone)]
pub struct TabSet<C> {
    panels: Vec<Panel<C>>,
    active: usize,
}

impl<C> TabSet<C> {
    /// Create a tab set. The first panel starts active.
    pub fn new(panels: Vec<Panel<C>>) -> Result<Self, TabError> {
        if panels.is_empty() {
            return Err(TabError::Empty);
        }

        let mut seen = HashSet::with_capacity(panels.len());
        for panel in &panels {
            if !seen.insert(panel.label.as_str()) {
                return Err(TabError::DuplicateLabel(panel.label.clone()));
            }
        }

        Ok(Self { panels, active: 0 })
    }

    /// All panels in declaration order.
    pub fn panels(&self) -> &[Panel<C>] {
        &self.panels
    }

    /// Number of panels (always at least one).
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Panel labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(Panel::label)
    }

    /// Index of the panel with the given label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.label == label)
    }

    /// Index of the active panel.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Label of the active panel.
    pub fn active_label(&self) -> &str {
        &self.panels[self.active].label
    }

    /// The active panel.
    pub fn active_panel(&self) -> &Panel<C> {
        &self.panels[self.active]
    }

    /// Content of the active panel.
    pub fn active_content(&self) -> &C {
        &self.panels[self.active].content
    }

    /// Activate the panel with the given label.
    ///
    /// Unknown labels are ignored and leave the active panel unchanged.
    /// Returns `true` if the label was found.
    pub fn select(&mut self, label: &str) -> bool {
        if let Some(index) = self.position(label) {
            self.activate(index);
            true
        } else {
            debug!(label, active = self.active_label(), "ignoring unknown panel label");
            false
        }
    }

    /// Activate the panel at `index`. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.panels.len() {
            self.activate(index);
            true
        } else {
            debug!(index, count = self.panels.len(), "ignoring out-of-range panel index");
            false
        }
    }

    /// Activate the next panel, wrapping to the first.
    pub fn select_next(&mut self) {
        self.activate((self.active + 1) % self.panels.len());
    }

    /// Activate the previous panel, wrapping to the last.
    pub fn select_prev(&mut self) {
        let count = self.panels.len();
        self.activate((self.active + count - 1) % count);
    }

    fn activate(&mut self, index: usize) {
        if index != self.active {
            debug!(
                from = self.active_label(),
                to = self.panels[index].label(),
                "panel activated"
            );
        }
        self.active = index;
    }
}
