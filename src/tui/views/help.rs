// Help overlay
//
// Keyboard shortcuts plus the active theme, centered over the playground.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calculate centered rect for the overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.keyword);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Playground", header_style)),
        kb("e", "Edit / back to view"),
        kb("y", "Copy code"),
        kb("r", "Reset to original"),
        kb("Tab, p", "Code / Preview"),
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb("[ ]", "Previous / next"),
        kb("1-9", "Jump to section"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("↑/↓, j/k", "Scroll"),
        kb("PgUp/PgDn", "Scroll a page"),
        kb("Home/End", "Jump to start/end"),
        Line::raw(""),
        Line::from(Span::styled("  Edit Mode", header_style)),
        kb("Esc", "Back to view"),
        kb("Ctrl+Y", "Copy code"),
        kb("Ctrl+R", "Reset to original"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("L", "Toggle log drawer"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(theme.name.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 32, f.area());

    // Clear the area behind the overlay
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
