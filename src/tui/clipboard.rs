//! System clipboard for playground copies
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! One worker thread owns the clipboard and applies writes strictly in the
//! order they were requested. Aborting a caller's future never lets an older
//! write land after a newer one, and keeping the clipboard alive means X11
//! sessions without a clipboard manager keep the contents.

use crate::playground::{ClipboardError, ClipboardService};
use arboard::Clipboard;
use futures::future::{BoxFuture, FutureExt};
use tokio::sync::{mpsc, oneshot};

/// Blocking clipboard backend driven by the worker thread
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// `arboard` backend, connected on first use and reconnected after a failure
#[derive(Default)]
pub struct ArboardWriter {
    clipboard: Option<Clipboard>,
}

impl ClipboardWriter for ArboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Rejected(e.to_string()))?;

        // Kept only after a good write; a broken connection is rebuilt next time
        self.clipboard = Some(clipboard);
        Ok(())
    }
}

struct WriteRequest {
    text: String,
    reply: oneshot::Sender<Result<(), ClipboardError>>,
}

/// [`ClipboardService`] backed by the OS clipboard
#[derive(Clone)]
pub struct SystemClipboard {
    tx: mpsc::UnboundedSender<WriteRequest>,
}

impl SystemClipboard {
    /// Start the clipboard worker backed by `arboard`
    pub fn spawn() -> std::io::Result<Self> {
        Self::with_writer(ArboardWriter::default)
    }

    /// Start a worker around any blocking backend
    ///
    /// The backend is built on the worker thread, so it need not be `Send`.
    /// The thread exits once every handle is dropped.
    pub fn with_writer<W, F>(make_writer: F) -> std::io::Result<Self>
    where
        W: ClipboardWriter,
        F: FnOnce() -> W + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<WriteRequest>();

        std::thread::Builder::new()
            .name("clipboard".to_string())
            .spawn(move || {
                let mut writer = make_writer();
                while let Some(request) = rx.blocking_recv() {
                    let outcome = writer.set_text(&request.text);
                    if let Err(e) = &outcome {
                        tracing::debug!(error = %e, "clipboard backend failed");
                    }
                    // Caller may have been superseded; the write still counts
                    let _ = request.reply.send(outcome);
                }
                tracing::trace!("clipboard worker stopped");
            })?;

        Ok(Self { tx })
    }
}

impl ClipboardService for SystemClipboard {
    fn write_text(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>> {
        // Queued now, not when the future is first polled, so call order is write order
        let (reply, outcome) = oneshot::channel();
        let queued = self.tx.send(WriteRequest { text, reply }).is_ok();

        async move {
            if !queued {
                return Err(ClipboardError::Interrupted);
            }
            outcome.await.unwrap_or(Err(ClipboardError::Interrupted))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::{
        Mode, Notice, Notifier, Playground, PlaygroundEvent, PlaygroundOptions,
    };
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records writes; the first one blocks for a while like a slow display server
    struct SlowWriter {
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardWriter for SlowWriter {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            let first = self.writes.lock().unwrap().is_empty();
            if first {
                std::thread::sleep(Duration::from_millis(300));
            }
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FailingWriter;

    impl ClipboardWriter for FailingWriter {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Rejected("denied".to_string()))
        }
    }

    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn notify(&self, _notice: Notice) {}
    }

    fn slow_clipboard() -> (SystemClipboard, Arc<Mutex<Vec<String>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let shared = writes.clone();
        let clipboard = SystemClipboard::with_writer(move || SlowWriter { writes: shared })
            .expect("worker thread starts");
        (clipboard, writes)
    }

    #[tokio::test]
    async fn test_superseded_copy_never_lands_after_newer_one() {
        let (clipboard, writes) = slow_clipboard();
        let mut playground = Playground::new(
            PlaygroundOptions::new("first"),
            Arc::new(clipboard),
            Arc::new(SilentNotifier),
        );

        playground.copy();
        playground.toggle_edit_mode();
        assert_eq!(playground.mode(), Mode::Edit);
        playground.update_text("second");
        playground.copy();

        let event = tokio::time::timeout(Duration::from_secs(5), playground.next_event())
            .await
            .expect("copy resolves");
        assert_eq!(event, PlaygroundEvent::CopySucceeded);

        let writes = writes.lock().unwrap().clone();
        assert_eq!(writes, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(writes.last().map(String::as_str), Some("second"));
    }

    #[tokio::test]
    async fn test_writes_apply_in_request_order() {
        let (clipboard, writes) = slow_clipboard();

        let a = clipboard.write_text("a".to_string());
        let b = clipboard.write_text("b".to_string());
        let c = clipboard.write_text("c".to_string());
        // Awaited out of order on purpose
        assert_eq!(c.await, Ok(()));
        assert_eq!(a.await, Ok(()));
        assert_eq!(b.await, Ok(()));

        assert_eq!(*writes.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_backend_error_reaches_caller() {
        let clipboard = SystemClipboard::with_writer(|| FailingWriter).unwrap();
        let outcome = clipboard.write_text("x".to_string()).await;
        assert_eq!(outcome, Err(ClipboardError::Rejected("denied".to_string())));
    }
}
