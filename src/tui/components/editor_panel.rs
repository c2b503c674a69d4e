// Editor panel component
//
// The editable surface: current text with line numbers, no highlighting, and
// the terminal cursor placed at the editor's position. Lines line up with the
// code view so switching modes keeps the same rows on screen.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::theme::Theme;
use crate::tui::editor::EditorState;
use crate::tui::highlight::{expand_tabs, gutter_width};
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    f: &mut Frame,
    area: Rect,
    text: &str,
    editor: &EditorState,
    scroll: &mut ScrollState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .title(Span::styled(
            " Editing ",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Esc view · Ctrl+Y copy · Ctrl+R reset ").right_aligned())
        .style(Style::default().bg(theme.code_background));
    let inner = block.inner(area);

    let source: Vec<&str> = text.split('\n').collect();
    let gutter = gutter_width(source.len());
    let digits = (gutter - 3) as usize;

    let (row, _) = editor.position(text);
    scroll.update_dimensions(source.len(), inner.height as usize);
    scroll.ensure_visible(row);
    let (start, end) = scroll.visible_range();

    let lines: Vec<Line> = source[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let number = start + i + 1;
            let number_style = if number == row + 1 {
                Style::default().fg(theme.highlight)
            } else {
                Style::default().fg(theme.line_number)
            };
            Line::from(vec![
                Span::styled(format!("{:>digits$} │ ", number, digits = digits), number_style),
                Span::styled(expand_tabs(line), Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
    render_scrollbar(f, area, scroll, ScrollbarStyle::Minimal);

    // Cursor sits past the gutter; clamp to the pane when the line is wider
    if row >= start && row < end && inner.width > gutter {
        let col = (editor.display_col(text) as u16).min(inner.width - gutter - 1);
        let y = inner.y + (row - start) as u16;
        f.set_cursor_position(Position::new(inner.x + gutter + col, y));
    }
}
