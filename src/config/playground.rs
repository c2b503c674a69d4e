//! Playground defaults
//!
//! Applied to every playground unless overridden on the command line.

use crate::playground::{PlaygroundOptions, DEFAULT_LANGUAGE, DEFAULT_TITLE};
use serde::Deserialize;
use std::time::Duration;

/// Defaults for new playgrounds
#[derive(Debug, Clone, PartialEq)]
pub struct PlaygroundDefaults {
    /// Title for playgrounds opened without one
    pub title: String,
    /// Language used when none is given and none can be inferred
    pub language: String,
    /// Allow switching into Edit mode
    pub editable: bool,
    /// Show the Code/Preview tab pair
    pub show_preview: bool,
    /// Maximum body rows (0 = fill the terminal)
    pub height: u16,
    /// How long "Copied" stays on the copy button
    pub copy_feedback_ms: u64,
}

impl Default for PlaygroundDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            editable: true,
            show_preview: false,
            height: 0,
            copy_feedback_ms: 2000,
        }
    }
}

/// [playground] section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FilePlayground {
    pub title: Option<String>,
    pub language: Option<String>,
    pub editable: Option<bool>,
    pub show_preview: Option<bool>,
    pub height: Option<u16>,
    pub copy_feedback_ms: Option<u64>,
}

impl PlaygroundDefaults {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FilePlayground>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            title: file.title.unwrap_or(defaults.title),
            language: file.language.unwrap_or(defaults.language),
            editable: file.editable.unwrap_or(defaults.editable),
            show_preview: file.show_preview.unwrap_or(defaults.show_preview),
            height: file.height.unwrap_or(defaults.height),
            copy_feedback_ms: file.copy_feedback_ms.unwrap_or(defaults.copy_feedback_ms),
        }
    }

    /// Options for a playground seeded with `text`, before per-file overrides
    pub fn options_for(&self, text: impl Into<String>) -> PlaygroundOptions {
        PlaygroundOptions::new(text)
            .title(self.title.clone())
            .language(self.language.clone())
            .editable(self.editable)
            .dual_tab(self.show_preview)
            .height((self.height > 0).then_some(self.height))
            .feedback_duration(Duration::from_millis(self.copy_feedback_ms))
    }
}
