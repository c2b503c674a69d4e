// Header component
//
// Renders the playground title with its language badge and the three action
// labels. Labels come straight from the render pass, so "Copied" shows for
// exactly as long as the playground holds that feedback.

use crate::playground::Rendered;
use crate::theme::Theme;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header for the active playground
pub fn render<T>(
    f: &mut Frame,
    area: Rect,
    rendered: &Rendered<'_, T>,
    description: Option<&str>,
    modified: bool,
    theme: &Theme,
) {
    let bp = Breakpoint::from_width(area.width);

    let mut info = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", rendered.language),
            Style::default()
                .fg(theme.badge_fg)
                .bg(theme.badge_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if modified {
        info.push(Span::styled("  ● modified", Style::default().fg(theme.highlight)));
    }
    if let Some(description) = description.filter(|_| bp.at_least(Breakpoint::Wide)) {
        info.push(Span::styled(
            format!("  {}", description),
            Style::default().fg(theme.muted),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.title))
        .title(Span::styled(
            format!(" {} ", rendered.title),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .title_top(action_line(rendered, bp, theme).right_aligned());

    f.render_widget(Paragraph::new(Line::from(info)).block(block), area);
}

/// "[e] Edit  [y] Copy  [r] Reset", shortened on narrow terminals
fn action_line<T>(rendered: &Rendered<'_, T>, bp: Breakpoint, theme: &Theme) -> Line<'static> {
    let key_style = Style::default().fg(theme.muted);
    let label_style = Style::default().fg(theme.foreground);
    let copied = rendered.copy_label != "Copy";

    let mut actions: Vec<(&str, String, Style)> = Vec::new();
    if let Some(toggle) = rendered.toggle_label {
        actions.push(("e", toggle.to_string(), label_style));
    }
    if copied {
        actions.push((
            "y",
            format!("✓ {}", rendered.copy_label),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        actions.push(("y", rendered.copy_label.to_string(), label_style));
    }
    actions.push(("r", rendered.reset_label.to_string(), label_style));

    let mut spans = vec![Span::raw(" ")];
    for (key, label, style) in actions {
        if bp.at_least(Breakpoint::Normal) {
            spans.push(Span::styled(format!("[{}] ", key), key_style));
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }
    spans.pop();
    spans.push(Span::raw(" "));
    Line::from(spans)
}
