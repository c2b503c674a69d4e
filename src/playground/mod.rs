//! Interactive code playground
//!
//! A playground shows a block of source text that the user can view, copy,
//! edit and reset, optionally next to a plain preview tab. All state lives
//! here; hosts feed it user actions and draw whatever `render()` returns.
//!
//! # Event model
//!
//! ```text
//!  user action ──► toggle_edit_mode / update_text / reset / select_tab
//!                  (synchronous, run to completion)
//!
//!  copy() ──► spawn clipboard write ──┐
//!                                     ▼
//!  next_event().await ◄── write resolved | feedback deadline passed
//!        │
//!        └─► state updated, PlaygroundEvent returned to the host
//! ```
//!
//! Only `next_event()` applies asynchronous outcomes, so feedback never
//! changes before the clipboard write resolves. Dropping a playground aborts
//! its in-flight write and forgets its deadline.

mod services;
mod state;
mod timer;

#[cfg(test)]
mod tests;

pub use services::{ClipboardError, ClipboardService, Highlighter, Notice, Notifier, Severity};
pub use state::{Body, CopyFeedback, Mode, Rendered, Surface, Tab};
pub use timer::{FeedbackTimer, DEFAULT_FEEDBACK_DURATION};

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Language passed to the highlighter when none is given
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Title shown when none is given
pub const DEFAULT_TITLE: &str = "Code Playground";

/// Construction-time options
#[derive(Debug, Clone)]
pub struct PlaygroundOptions {
    /// Display label, no behavioral effect
    pub title: String,
    /// Seeds both the reset target and the current text
    pub initial_text: String,
    /// Passed through to the highlighter
    pub language: String,
    /// Maximum body height in rows (layout only, None = fill)
    pub height: Option<u16>,
    /// Enables Edit mode at all
    pub editable: bool,
    /// Enables the Code/Preview tab pair
    pub dual_tab: bool,
    /// How long the "Copied" label stays up
    pub feedback_duration: Duration,
}

impl PlaygroundOptions {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            initial_text: initial_text.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn height(mut self, height: Option<u16>) -> Self {
        self.height = height;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn dual_tab(mut self, dual_tab: bool) -> Self {
        self.dual_tab = dual_tab;
        self
    }

    pub fn feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }
}

impl Default for PlaygroundOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            initial_text: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            height: None,
            editable: true,
            dual_tab: false,
            feedback_duration: DEFAULT_FEEDBACK_DURATION,
        }
    }
}

/// Asynchronous outcome applied by [`Playground::next_event`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundEvent {
    /// Clipboard accepted the text; feedback is now `Copied`
    CopySucceeded,
    /// Clipboard rejected the text; feedback unchanged
    CopyFailed(ClipboardError),
    /// Feedback deadline passed; feedback is now `Idle`
    FeedbackExpired,
}

/// What woke `next_event` (computed before touching state)
enum Wake {
    Copy(Result<(), ClipboardError>),
    Expired,
}

pub struct Playground {
    options: PlaygroundOptions,
    text: String,
    surface: Surface,
    feedback: CopyFeedback,
    timer: FeedbackTimer,
    pending_copy: Option<JoinHandle<Result<(), ClipboardError>>>,
    clipboard: Arc<dyn ClipboardService>,
    notifier: Arc<dyn Notifier>,
}

impl Playground {
    pub fn new(
        options: PlaygroundOptions,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        tracing::debug!(
            title = %options.title,
            language = %options.language,
            editable = options.editable,
            dual_tab = options.dual_tab,
            "playground created"
        );

        Self {
            text: options.initial_text.clone(),
            timer: FeedbackTimer::new(options.feedback_duration),
            options,
            surface: Surface::default(),
            feedback: CopyFeedback::Idle,
            pending_copy: None,
            clipboard,
            notifier,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────

    pub fn options(&self) -> &PlaygroundOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn initial_text(&self) -> &str {
        &self.options.initial_text
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn mode(&self) -> Mode {
        self.surface.mode()
    }

    pub fn active_tab(&self) -> Tab {
        self.surface.tab()
    }

    pub fn copy_feedback(&self) -> CopyFeedback {
        self.feedback
    }

    /// Current text differs from the reset target
    pub fn is_modified(&self) -> bool {
        self.text != self.options.initial_text
    }

    pub fn is_copy_pending(&self) -> bool {
        self.pending_copy.is_some()
    }

    /// Deadline of the pending feedback reset, if any
    #[cfg(test)]
    pub fn feedback_deadline(&self) -> Option<tokio::time::Instant> {
        self.timer.deadline()
    }

    // ─────────────────────────────────────────────────────────────
    // User actions
    // ─────────────────────────────────────────────────────────────

    /// Flip between View and Edit; no-op on read-only playgrounds
    pub fn toggle_edit_mode(&mut self) {
        if !self.options.editable {
            return;
        }

        self.surface = match self.surface {
            Surface::View(_) => Surface::Edit,
            Surface::Edit => Surface::View(Tab::Code),
        };
        tracing::debug!(mode = ?self.surface.mode(), "edit mode toggled");
    }

    /// Replace the current text; ignored outside Edit mode
    pub fn update_text(&mut self, text: impl Into<String>) {
        if self.surface != Surface::Edit {
            return;
        }
        self.text = text.into();
    }

    /// Start writing the current text to the clipboard
    ///
    /// The outcome is applied by `next_event()`. A copy already in flight is
    /// superseded and its result discarded. Must be called within a Tokio
    /// runtime.
    pub fn copy(&mut self) {
        if let Some(previous) = self.pending_copy.take() {
            tracing::debug!("superseding in-flight clipboard write");
            previous.abort();
        }

        let write = self.clipboard.write_text(self.text.clone());
        self.pending_copy = Some(tokio::spawn(write));
    }

    /// Restore the initial text and return to View with idle feedback
    ///
    /// A clipboard write already in flight is left running; if it succeeds
    /// afterwards, feedback shows Copied for that write.
    pub fn reset(&mut self) {
        self.text.clone_from(&self.options.initial_text);
        self.surface = Surface::View(self.surface.tab());
        self.feedback = CopyFeedback::Idle;
        self.timer.cancel();

        self.notifier.notify(Notice::info(
            "Code reset",
            "Code has been restored to initial state",
        ));
        tracing::debug!(title = %self.options.title, "playground reset");
    }

    /// Switch between Code and Preview; no-op without the dual-tab variant
    ///
    /// Showing the preview leaves Edit mode, since editing only exists in
    /// the Code context.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.options.dual_tab {
            return;
        }

        self.surface = match (self.surface, tab) {
            (Surface::Edit, Tab::Code) => Surface::Edit,
            (_, tab) => Surface::View(tab),
        };
    }

    // ─────────────────────────────────────────────────────────────
    // Asynchronous outcomes
    // ─────────────────────────────────────────────────────────────

    /// Wait for the next clipboard result or feedback expiry and apply it
    ///
    /// Pends forever when neither is outstanding. Cancel-safe, so it can sit
    /// in a `tokio::select!` next to terminal input.
    pub async fn next_event(&mut self) -> PlaygroundEvent {
        let wake = {
            let pending = &mut self.pending_copy;
            let timer = &self.timer;
            tokio::select! {
                outcome = wait_for_copy(pending) => Wake::Copy(outcome),
                () = timer.fired() => Wake::Expired,
            }
        };

        match wake {
            Wake::Copy(outcome) => {
                self.pending_copy = None;
                self.finish_copy(outcome)
            }
            Wake::Expired => {
                self.timer.cancel();
                self.feedback = CopyFeedback::Idle;
                PlaygroundEvent::FeedbackExpired
            }
        }
    }

    fn finish_copy(&mut self, outcome: Result<(), ClipboardError>) -> PlaygroundEvent {
        match outcome {
            Ok(()) => {
                self.feedback = CopyFeedback::Copied;
                self.timer.arm();
                self.notifier.notify(Notice::info(
                    "Copied to clipboard",
                    "Code has been copied successfully",
                ));
                tracing::debug!(bytes = self.text.len(), "copied to clipboard");
                PlaygroundEvent::CopySucceeded
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                self.notifier
                    .notify(Notice::error("Failed to copy", "Please try again"));
                PlaygroundEvent::CopyFailed(e)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────

    /// Describe what to draw; the highlighter runs only for the Code view
    pub fn render<H: Highlighter>(&self, highlighter: &H) -> Rendered<'_, H::Output> {
        let body = match self.surface {
            Surface::Edit => Body::Editor(&self.text),
            Surface::View(Tab::Preview) => Body::Preview(&self.text),
            Surface::View(Tab::Code) => {
                Body::Highlighted(highlighter.highlight(&self.text, &self.options.language))
            }
        };

        let toggle_label = self.options.editable.then_some(match self.surface.mode() {
            Mode::View => "Edit",
            Mode::Edit => "View",
        });

        let copy_label = match self.feedback {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied => "Copied",
        };

        Rendered {
            title: &self.options.title,
            language: &self.options.language,
            toggle_label,
            copy_label,
            reset_label: "Reset",
            tabs: self.options.dual_tab.then_some(self.surface.tab()),
            body,
        }
    }
}

impl Drop for Playground {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_copy.take() {
            pending.abort();
        }
    }
}

async fn wait_for_copy(
    pending: &mut Option<JoinHandle<Result<(), ClipboardError>>>,
) -> Result<(), ClipboardError> {
    match pending {
        Some(handle) => match handle.await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClipboardError::Interrupted),
        },
        None => std::future::pending().await,
    }
}
