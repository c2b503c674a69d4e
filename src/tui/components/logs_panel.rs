//! Logs drawer
//!
//! Displays captured tracing entries at the bottom of the screen, newest
//! last, following new entries as they arrive.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.number),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

/// Render the log drawer from the app's buffer
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let entries = app.log_buffer.get_all();
    let theme = &app.theme;
    let scroll = &mut app.logs_scroll;

    scroll.update_dimensions(entries.len(), area.height.saturating_sub(2) as usize);
    let (start, end) = scroll.visible_range();

    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(entry.level, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Logs ({}) ", entries.len())),
    );

    f.render_widget(list, area);
    render_scrollbar(f, area, scroll, ScrollbarStyle::Minimal);
}
