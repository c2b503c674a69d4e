// Views module - screen-level rendering logic
//
// One screen: optional section bar, the active playground, optional log
// drawer and the status bar, with help and toast overlays on top.

mod help;
mod playground;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the log drawer including borders
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let show_sections = app.sections.len() > 1;

    let mut constraints = Vec::with_capacity(4);
    if show_sections {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Min(5));
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::vertical(constraints).split(f.area());
    let mut slots = chunks.iter().copied();

    if show_sections {
        if let Some(area) = slots.next() {
            components::tabs::render_sections(f, area, &app.sections, app.active, &app.theme);
        }
    }
    if let Some(area) = slots.next() {
        playground::render(f, area, app);
    }
    if app.show_logs {
        if let Some(area) = slots.next() {
            components::logs_panel::render(f, area, app);
        }
    }
    if let Some(area) = slots.next() {
        components::status_bar::render(f, area, app);
    }

    if app.show_help {
        help::render(f, app);
    }

    // Render toast notification (on top of help too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
