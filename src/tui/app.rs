// TUI application state
//
// The app hosts one playground per section (a bundled sample or a file from
// the command line) and routes keys to the active one. Playground state is
// never mirrored here: labels, text and feedback are read back through
// `Playground::render()` every frame.

use super::components::Toast;
use super::editor::{EditAction, EditorState};
use super::input::InputHandler;
use super::scroll::ScrollState;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::playground::{
    ClipboardService, Mode, Notice, Notifier, Playground, PlaygroundEvent, PlaygroundOptions,
    Surface, Tab,
};
use crate::theme::Theme;
use crossterm::event::KeyCode;
use futures::future::{select_all, BoxFuture, FutureExt};
use std::sync::Arc;

/// What a section is built from
#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Section tab label
    pub label: String,
    /// Short hint shown next to the label on wide terminals
    pub subtitle: Option<String>,
    /// Blurb above the playground
    pub description: Option<String>,
    pub options: PlaygroundOptions,
}

/// One playground plus its view state
pub struct Section {
    pub label: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub playground: Playground,
    pub editor: EditorState,
    /// Shared by the highlighted view and the editor (same lines)
    pub code_scroll: ScrollState,
    pub preview_scroll: ScrollState,
}

impl Section {
    fn new(
        spec: SectionSpec,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            label: spec.label,
            subtitle: spec.subtitle,
            description: spec.description,
            playground: Playground::new(spec.options, clipboard, notifier),
            editor: EditorState::new(),
            code_scroll: ScrollState::manual(),
            preview_scroll: ScrollState::manual(),
        }
    }

    /// Scroll state for whatever the body currently shows
    fn body_scroll_mut(&mut self) -> &mut ScrollState {
        match self.playground.surface() {
            Surface::View(Tab::Preview) => &mut self.preview_scroll,
            _ => &mut self.code_scroll,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub sections: Vec<Section>,

    /// Index of the visible section
    pub active: usize,

    pub theme: Theme,

    /// Current toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    pub show_help: bool,

    /// Log drawer at the bottom of the screen
    pub show_logs: bool,
    pub logs_scroll: ScrollState,
    pub log_buffer: LogBuffer,

    pub should_quit: bool,

    /// Input handler for debouncing action keys
    input_handler: InputHandler,
}

impl App {
    pub fn new(
        specs: Vec<SectionSpec>,
        config: &Config,
        log_buffer: LogBuffer,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let sections = specs
            .into_iter()
            .map(|spec| Section::new(spec, clipboard.clone(), notifier.clone()))
            .collect();

        Self {
            sections,
            active: 0,
            theme: Theme::by_name(&config.theme).with_background(config.use_theme_background),
            toast: None,
            show_help: false,
            show_logs: false,
            logs_scroll: ScrollState::new(),
            log_buffer,
            should_quit: false,
            input_handler: InputHandler::with_default_config(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Section access
    // ─────────────────────────────────────────────────────────────

    pub fn active_section(&self) -> Option<&Section> {
        self.sections.get(self.active)
    }

    fn active_section_mut(&mut self) -> Option<&mut Section> {
        self.sections.get_mut(self.active)
    }

    /// Mode of the visible playground (View when there is none)
    pub fn active_mode(&self) -> Mode {
        self.active_section()
            .map_or(Mode::View, |s| s.playground.mode())
    }

    pub fn select_section(&mut self, index: usize) {
        if index < self.sections.len() && index != self.active {
            self.active = index;
            tracing::debug!(section = index, "section selected");
        }
    }

    pub fn next_section(&mut self) {
        if !self.sections.is_empty() {
            self.select_section((self.active + 1) % self.sections.len());
        }
    }

    pub fn prev_section(&mut self) {
        if !self.sections.is_empty() {
            let len = self.sections.len();
            self.select_section((self.active + len - 1) % len);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Playground actions
    // ─────────────────────────────────────────────────────────────

    pub fn toggle_edit(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.playground.toggle_edit_mode();
            section.editor.clamp(section.playground.text());
        }
    }

    pub fn copy(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.playground.copy();
        }
    }

    pub fn reset(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.playground.reset();
            section.editor.clamp(section.playground.text());
        }
    }

    /// Flip between Code and Preview (no-op without the preview tab)
    pub fn switch_tab(&mut self) {
        if let Some(section) = self.active_section_mut() {
            let next = section.playground.active_tab().toggled();
            section.playground.select_tab(next);
        }
    }

    /// Run one editor keystroke against the active playground
    pub fn apply_edit(&mut self, action: EditAction) {
        let Some(section) = self.active_section_mut() else {
            return;
        };
        if section.playground.mode() != Mode::Edit {
            return;
        }

        let mut text = section.playground.text().to_string();
        if section.editor.apply(&mut text, action) {
            section.playground.update_text(text);
        }

        let (row, _) = section.editor.position(section.playground.text());
        section.code_scroll.ensure_visible(row);
    }

    // ─────────────────────────────────────────────────────────────
    // Scrolling (body of the active section)
    // ─────────────────────────────────────────────────────────────

    pub fn scroll_up(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.body_scroll_mut().scroll_up();
        }
    }

    pub fn scroll_down(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.body_scroll_mut().scroll_down();
        }
    }

    pub fn page_up(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.body_scroll_mut().page_up();
        }
    }

    pub fn page_down(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.body_scroll_mut().page_down();
        }
    }

    pub fn scroll_to_top(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.body_scroll_mut().scroll_to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if let Some(section) = self.active_section_mut() {
            section.body_scroll_mut().scroll_to_bottom();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Async outcomes and notices
    // ─────────────────────────────────────────────────────────────

    /// Wait for the next event from any section's playground
    ///
    /// Cancel-safe: dropping the future leaves every playground untouched.
    pub async fn next_playground_event(&mut self) -> (usize, PlaygroundEvent) {
        if self.sections.is_empty() {
            return std::future::pending().await;
        }

        let waits: Vec<BoxFuture<'_, (usize, PlaygroundEvent)>> = self
            .sections
            .iter_mut()
            .enumerate()
            .map(|(index, section)| {
                async move { (index, section.playground.next_event().await) }.boxed()
            })
            .collect();

        let (outcome, _, _) = select_all(waits).await;
        outcome
    }

    pub fn on_playground_event(&mut self, index: usize, event: PlaygroundEvent) {
        let label = self
            .sections
            .get(index)
            .map_or("?", |section| section.label.as_str());
        tracing::debug!(section = %label, ?event, "playground event");
    }

    /// Show a notice as a toast, replacing any current one
    pub fn show_notice(&mut self, notice: Notice) {
        self.toast = Some(Toast::new(notice));
    }

    /// Clear expired toast (call on each frame)
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    // ─────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────

    /// Handle key press with debouncing. Returns true if action should trigger.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
