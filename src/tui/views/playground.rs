// Playground view
//
// Draws the active section: header, Code/Preview tabs for dual-tab
// playgrounds, and whichever body the render pass produced. A configured
// height caps the body; the rest of the area stays empty.

use crate::playground::Body;
use crate::tui::app::{App, Section};
use crate::tui::components::{code_view, editor_panel, header, preview, tabs};
use crate::tui::highlight::SyntaxHighlighter;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let Some(section) = app.sections.get_mut(app.active) else {
        let empty = Paragraph::new("No playgrounds loaded")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted));
        f.render_widget(empty, area);
        return;
    };

    let Section {
        playground,
        editor,
        code_scroll,
        preview_scroll,
        description,
        ..
    } = section;

    let highlighter = SyntaxHighlighter::new(theme);
    let rendered = playground.render(&highlighter);

    let mut constraints = vec![Constraint::Length(3)];
    if rendered.tabs.is_some() {
        constraints.push(Constraint::Length(1));
    }
    match playground.options().height {
        Some(rows) => {
            constraints.push(Constraint::Length(rows.saturating_add(2)));
            constraints.push(Constraint::Min(0));
        }
        None => constraints.push(Constraint::Min(3)),
    }
    let chunks = Layout::vertical(constraints).split(area);

    header::render(
        f,
        chunks[0],
        &rendered,
        description.as_deref(),
        playground.is_modified(),
        theme,
    );

    let body_area = match rendered.tabs {
        Some(tab) => {
            tabs::render_code_tabs(f, chunks[1], tab, theme);
            chunks[2]
        }
        None => chunks[1],
    };

    match rendered.body {
        Body::Highlighted(lines) => code_view::render(f, body_area, lines, code_scroll, theme),
        Body::Editor(text) => {
            editor_panel::render(f, body_area, text, editor, code_scroll, theme)
        }
        Body::Preview(text) => preview::render(f, body_area, text, preview_scroll, theme),
    }
}
