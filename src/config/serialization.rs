//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::THEME_NAMES;

impl Config {
    /// Render the config as a commented TOML file
    ///
    /// Used for the first-run template, `config --reset` and `config --show`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# codeplay configuration

# Theme: {theme_names}
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Defaults for every playground (command-line flags override these)
[playground]
title = "{title}"
# Highlighter language when it cannot be inferred from the file extension
language = "{language}"
# Allow switching into Edit mode
editable = {editable}
# Show the Code/Preview tab pair
show_preview = {show_preview}
# Maximum body rows, 0 fills the terminal
height = {height}
# How long "Copied" stays on the copy button
copy_feedback_ms = {feedback_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-app log drawer)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme_names = THEME_NAMES.join(", "),
            theme = escape(&self.theme),
            use_bg = self.use_theme_background,
            title = escape(&self.playground.title),
            language = escape(&self.playground.language),
            editable = self.playground.editable,
            show_preview = self.playground.show_preview,
            height = self.playground.height,
            feedback_ms = self.playground.copy_feedback_ms,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a basic TOML string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
