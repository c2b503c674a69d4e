// Status bar component
//
// Renders mode, section position, copy progress and key hints at the bottom.

use crate::playground::{CopyFeedback, Mode};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: full key hints
/// - Normal: short hints
/// - Compact: mode and section only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let mut spans = Vec::new();

    if let Some(section) = app.active_section() {
        let playground = &section.playground;
        let (mode, mode_color) = match playground.mode() {
            Mode::View => ("VIEW", theme.title),
            Mode::Edit => ("EDIT", theme.highlight),
        };
        spans.push(Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(theme.badge_fg)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ));

        let mut facts = vec![format!("{}/{}", app.active + 1, app.sections.len())];
        if playground.options().dual_tab {
            facts.push(playground.active_tab().label().to_string());
        }
        if !playground.options().editable {
            facts.push("read-only".to_string());
        }
        if playground.is_modified() {
            facts.push("modified".to_string());
        }
        if playground.is_copy_pending() {
            facts.push("copying…".to_string());
        } else if playground.copy_feedback() == CopyFeedback::Copied {
            facts.push("copied".to_string());
        }
        spans.push(Span::styled(
            format!(" {} ", facts.join(" │ ")),
            Style::default().fg(theme.status_bar),
        ));

        if bp.at_least(Breakpoint::Normal) {
            let hints = match (playground.mode(), bp) {
                (Mode::Edit, _) => "Esc view │ ^Y copy │ ^R reset",
                (Mode::View, Breakpoint::Wide) => {
                    "e edit │ y copy │ r reset │ Tab preview │ [ ] section │ L logs │ ? help │ q quit"
                }
                (Mode::View, _) => "e y r │ [ ] │ ? help │ q quit",
            };
            spans.push(Span::styled(
                format!("│ {}", hints),
                Style::default().fg(theme.muted),
            ));
        }
    } else {
        spans.push(Span::styled(
            " nothing to show │ q quit",
            Style::default().fg(theme.status_bar),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}
