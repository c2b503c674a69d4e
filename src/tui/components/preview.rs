// Preview component
//
// Plain, unhighlighted rendering of the current text. Nothing is executed.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::theme::Theme;
use crate::tui::highlight::expand_tabs;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, text: &str, scroll: &mut ScrollState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(" Preview ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);

    let source: Vec<&str> = text.split('\n').collect();
    scroll.update_dimensions(source.len(), inner.height as usize);
    let (start, end) = scroll.visible_range();

    let lines: Vec<Line> = source[start..end]
        .iter()
        .map(|line| Line::raw(expand_tabs(line)))
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(theme.foreground))
            .block(block),
        area,
    );
    render_scrollbar(f, area, scroll, ScrollbarStyle::Minimal);
}
