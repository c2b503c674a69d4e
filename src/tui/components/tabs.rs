// Tab bars
//
// Two bars share this module: the section bar (one tab per playground) and
// the Code/Preview pair of a dual-tab playground.

use crate::playground::Tab;
use crate::theme::Theme;
use crate::tui::app::Section;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the section bar; subtitles only fit on wide terminals
pub fn render_sections(f: &mut Frame, area: Rect, sections: &[Section], active: usize, theme: &Theme) {
    let wide = Breakpoint::from_width(area.width).at_least(Breakpoint::Wide);

    let titles: Vec<Line> = sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let mut spans = vec![Span::raw(format!("{} {}", i + 1, section.label))];
            if let Some(subtitle) = section.subtitle.as_deref().filter(|_| wide) {
                spans.push(Span::styled(
                    format!(" · {}", subtitle),
                    Style::default().fg(theme.muted),
                ));
            }
            if section.playground.is_modified() {
                spans.push(Span::styled(" ●", Style::default().fg(theme.highlight)));
            }
            Line::from(spans)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(active)
        .style(Style::default().fg(theme.foreground))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(theme.border)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(tabs, area);
}

/// Render the Code/Preview pair
pub fn render_code_tabs(f: &mut Frame, area: Rect, active: Tab, theme: &Theme) {
    let selected = match active {
        Tab::Code => 0,
        Tab::Preview => 1,
    };

    let tabs = Tabs::new(vec![Tab::Code.label(), Tab::Preview.label()])
        .select(selected)
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" ");

    f.render_widget(tabs, area);
}
