//! mdiary-engine: Headless state for the mdiary markdown diary
//!
//! This crate provides the terminal-independent core, including:
//! - The single-select tab container ([`TabSet`])
//! - The editor shell that owns the diary entry ([`EditorShell`])
//! - Configuration loading and saving

pub mod config;
pub mod editor;
pub mod tabs;

// Re-export commonly used types
pub use config::{Config, ConfigError, ThemeName, MIN_TICK_RATE_MS};
pub use editor::{DiaryPanel, EditorShell, Entry, PREVIEW_LABEL, WRITE_LABEL};
pub use tabs::{Panel, TabError, TabSet};
