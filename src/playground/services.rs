//! Collaborator contracts consumed by the playground
//!
//! The playground never reaches for a global clipboard, toast system or
//! highlighter. Hosts hand it implementations of these traits, which keeps
//! the state machine testable without a terminal or a display server.

use futures::future::BoxFuture;
use thiserror::Error;

/// Failure writing to the system clipboard
///
/// Caught inside the playground and surfaced only as an error notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, no display server)
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the write (permission denied, ownership lost)
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),

    /// The write task ended before reporting a result
    #[error("clipboard write interrupted")]
    Interrupted,
}

/// Asynchronous clipboard writer
///
/// The returned future is spawned onto the runtime, so it must own
/// everything it touches.
pub trait ClipboardService: Send + Sync {
    fn write_text(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>>;
}

/// Severity of a notice, drives toast styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Fire-and-forget notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Turns source text into a styled, line-numbered representation
///
/// Implementations must treat `text` as read-only and fall back to plain
/// output when `language` is not recognized.
pub trait Highlighter {
    type Output;

    fn highlight(&self, text: &str, language: &str) -> Self::Output;
}
