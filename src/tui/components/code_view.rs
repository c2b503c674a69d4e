// Code view component
//
// Shows highlighter output inside a bordered pane. Only the visible slice of
// lines is handed to ratatui.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    f: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    scroll: &mut ScrollState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.code_background));
    let inner = block.inner(area);

    scroll.update_dimensions(lines.len(), inner.height as usize);
    let (start, end) = scroll.visible_range();

    let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
    f.render_widget(Paragraph::new(visible).block(block), area);

    render_scrollbar(f, area, scroll, ScrollbarStyle::Arrows);
}
