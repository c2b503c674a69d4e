//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.
//!
//! Playgrounds report through [`ToastNotifier`], which only queues the notice;
//! the event loop turns queued notices into toasts between frames.

use crate::playground::{Notice, Notifier, Severity};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use unicode_width::UnicodeWidthStr;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
pub struct Toast {
    pub notice: Notice,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(notice: Notice) -> Self {
        Self {
            notice,
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (icon, accent) = match self.notice.severity {
            Severity::Info => ("✓", theme.success),
            Severity::Error => ("✗", theme.error),
        };

        let title = format!("{} {}", icon, self.notice.title);
        let content_width = title.width().max(self.notice.description.width()) as u16;

        // 2 chars padding each side plus the border
        let width = (content_width + 4).min(area.width.saturating_sub(4));
        let height = 4;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let lines = vec![
            Line::from(Span::styled(
                format!(" {}", title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.notice.description),
                Style::default().fg(theme.foreground),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        f.render_widget(Clear, toast_area);
        f.render_widget(Paragraph::new(lines).block(block), toast_area);
    }
}

/// [`Notifier`] that hands notices to the event loop
#[derive(Clone)]
pub struct ToastNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ToastNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        // Receiver is gone only while shutting down
        if self.tx.send(notice).is_err() {
            tracing::trace!("notice dropped after event loop exit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_queues_notices_in_order() {
        let (notifier, mut rx) = ToastNotifier::channel();
        notifier.notify(Notice::info("Code reset", "Code has been restored to initial state"));
        notifier.notify(Notice::error("Failed to copy", "Please try again"));

        assert_eq!(rx.try_recv().map(|n| n.title).ok().as_deref(), Some("Code reset"));
        assert_eq!(
            rx.try_recv().map(|n| n.severity).ok(),
            Some(Severity::Error)
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_notify_after_receiver_dropped_is_silent() {
        let (notifier, rx) = ToastNotifier::channel();
        drop(rx);
        notifier.notify(Notice::info("Copied to clipboard", "Code has been copied successfully"));
    }

    #[test]
    fn test_fresh_toast_not_expired() {
        let toast = Toast::new(Notice::info("a", "b"));
        assert!(!toast.is_expired());
    }
}
