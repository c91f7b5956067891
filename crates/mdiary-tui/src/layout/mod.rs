//! Layout components for the TUI.
//!
//! This module provides:
//! - [`render_shell`] - Title, tab strip, active panel and footer

mod shell;

pub use shell::{render_shell, MIN_HEIGHT, MIN_WIDTH};
