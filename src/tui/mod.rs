// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, playground events, notices, ticks)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod editor;
pub mod highlight;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::playground::{Mode, Notice};
use anyhow::{Context, Result};
use app::{App, SectionSpec};
use clipboard::SystemClipboard;
use components::ToastNotifier;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use editor::EditAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(sections: Vec<SectionSpec>, log_buffer: LogBuffer, config: Config) -> Result<()> {
    let (notifier, mut notice_rx) = ToastNotifier::channel();
    let clipboard = SystemClipboard::spawn().context("Failed to start clipboard worker")?;
    let mut app = App::new(
        sections,
        &config,
        log_buffer,
        Arc::new(clipboard),
        Arc::new(notifier),
    );

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut notice_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles four types of events:
/// 1. Notices from playgrounds (shown as toasts)
/// 2. Playground events (clipboard results, feedback expiry)
/// 3. Keyboard and mouse input
/// 4. Timer ticks (for periodic redraws)
///
/// Only `next_playground_event` borrows the app inside the select; input is
/// read first and handled after the select resolves.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    notice_rx: &mut mpsc::UnboundedReceiver<Notice>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            Some(notice) = notice_rx.recv() => {
                app.show_notice(notice);
            }

            (index, event) = app.next_playground_event() => {
                app.on_playground_event(index, event);
            }

            // Keyboard or mouse input
            input = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            } => {
                match input {
                    Some(Event::Key(key_event)) => handle_key_event(app, key_event),
                    Some(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                    _ => {}
                }
            }

            // Periodic tick for redrawing (toast expiry)
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Help overlay → Edit mode / View mode
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key);
        return;
    }

    // Ctrl+C quits from anywhere, including Edit mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q'))
            && app.handle_key_press(key)
        {
            app.show_help = false;
        }
        return;
    }

    match app.active_mode() {
        Mode::Edit => handle_edit_key(app, key_event),
        Mode::View => handle_view_key(app, key_event),
    }
}

/// Edit mode: everything except a few control chords goes to the editor
fn handle_edit_key(app: &mut App, key_event: KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Esc => {
            if app.handle_key_press(KeyCode::Esc) {
                app.toggle_edit();
            }
        }
        KeyCode::Char('y') if ctrl => app.copy(),
        KeyCode::Char('r') if ctrl => app.reset(),
        _ => {
            if let Some(action) = EditAction::from_key(&key_event) {
                app.apply_edit(action);
            }
        }
    }
}

/// View mode: single-key commands, action keys debounced
fn handle_view_key(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,

        // Playground actions
        KeyCode::Char('e') => app.toggle_edit(),
        KeyCode::Char('y') => app.copy(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Tab | KeyCode::Char('p') => app.switch_tab(),

        // Sections
        KeyCode::Char(']') => app.next_section(),
        KeyCode::Char('[') | KeyCode::BackTab => app.prev_section(),
        KeyCode::Char(c @ '1'..='9') => app.select_section((c as usize) - ('1' as usize)),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),

        // Overlays
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Esc => {
            if app.show_logs {
                app.toggle_logs();
            }
        }
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match (mouse_event.kind, app.active_mode()) {
        (MouseEventKind::ScrollUp, Mode::View) => app.scroll_up(),
        (MouseEventKind::ScrollDown, Mode::View) => app.scroll_down(),
        (MouseEventKind::ScrollUp, Mode::Edit) => app.apply_edit(EditAction::Up),
        (MouseEventKind::ScrollDown, Mode::Edit) => app.apply_edit(EditAction::Down),
        _ => {}
    }
}
