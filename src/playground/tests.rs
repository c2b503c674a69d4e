//! Playground state machine tests
//!
//! Collaborators are fakes: a clipboard that can be told to fail or stall,
//! a notifier that records notices, and a highlighter that counts calls.
//! Timer behavior runs on Tokio's paused clock.

use super::*;
use futures::future::{BoxFuture, FutureExt};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

// ─────────────────────────────────────────────────────────────────────────────
// Fakes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeClipboard {
    fail: AtomicBool,
    delay: Mutex<Option<Duration>>,
    started: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl FakeClipboard {
    fn failing() -> Self {
        let clipboard = Self::default();
        clipboard.fail.store(true, Ordering::SeqCst);
        clipboard
    }

    fn slow(delay: Duration) -> Self {
        let clipboard = Self::default();
        *clipboard.delay.lock().unwrap() = Some(delay);
        clipboard
    }

    fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

/// Shares the fake with the playground while the test keeps a handle
struct SharedClipboard(Arc<FakeClipboard>);

impl ClipboardService for SharedClipboard {
    fn write_text(&self, text: String) -> BoxFuture<'static, Result<(), ClipboardError>> {
        let fake = self.0.clone();
        let fail = fake.fail.load(Ordering::SeqCst);
        let delay = *fake.delay.lock().unwrap();
        fake.started.lock().unwrap().push(text.clone());

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if fail {
                return Err(ClipboardError::Rejected("permission denied".to_string()));
            }
            fake.completed.lock().unwrap().push(text);
            Ok(())
        }
        .boxed()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
struct CountingHighlighter {
    calls: Cell<usize>,
}

impl Highlighter for CountingHighlighter {
    type Output = String;

    fn highlight(&self, text: &str, language: &str) -> String {
        self.calls.set(self.calls.get() + 1);
        format!("<{}>{}", language, text)
    }
}

struct Harness {
    playground: Playground,
    clipboard: Arc<FakeClipboard>,
    notifier: Arc<RecordingNotifier>,
}

fn harness_with(options: PlaygroundOptions, clipboard: FakeClipboard) -> Harness {
    let clipboard = Arc::new(clipboard);
    let notifier = Arc::new(RecordingNotifier::default());
    let playground = Playground::new(
        options,
        Arc::new(SharedClipboard(clipboard.clone())),
        notifier.clone(),
    );
    Harness {
        playground,
        clipboard,
        notifier,
    }
}

fn harness(options: PlaygroundOptions) -> Harness {
    harness_with(options, FakeClipboard::default())
}

/// Assert that nothing resolves within `window`
async fn assert_quiet(playground: &mut Playground, window: Duration) {
    let waited = tokio::time::timeout(window, playground.next_event()).await;
    assert!(waited.is_err(), "unexpected event: {:?}", waited);
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_construction_seeds_current_text() {
    for text in ["", "let x = 1;", "line one\nline two\n", "ünïcødé → ✓"] {
        let h = harness(PlaygroundOptions::new(text));
        assert_eq!(h.playground.text(), text);
        assert_eq!(h.playground.initial_text(), text);
        assert_eq!(h.playground.mode(), Mode::View);
        assert_eq!(h.playground.active_tab(), Tab::Code);
        assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);
        assert!(!h.playground.is_modified());
    }
}

#[test]
fn test_defaults() {
    let options = PlaygroundOptions::default();
    assert_eq!(options.language, "javascript");
    assert_eq!(options.title, "Code Playground");
    assert!(options.editable);
    assert!(!options.dual_tab);
    assert_eq!(options.feedback_duration, Duration::from_secs(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Edit mode
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_a_edit_then_reset() {
    let mut h = harness(PlaygroundOptions::new("let x = 1;").editable(true));

    h.playground.toggle_edit_mode();
    assert_eq!(h.playground.mode(), Mode::Edit);

    h.playground.update_text("let x = 2;");
    assert_eq!(h.playground.text(), "let x = 2;");
    assert!(h.playground.is_modified());

    h.playground.reset();
    assert_eq!(h.playground.text(), "let x = 1;");
    assert_eq!(h.playground.mode(), Mode::View);
}

#[test]
fn test_scenario_b_read_only_never_edits() {
    let mut h = harness(PlaygroundOptions::new("const a = 1;").editable(false));

    for _ in 0..5 {
        h.playground.toggle_edit_mode();
        assert_eq!(h.playground.mode(), Mode::View);
    }

    h.playground.update_text("changed");
    assert_eq!(h.playground.text(), "const a = 1;");
}

#[test]
fn test_update_text_ignored_in_view_mode() {
    let mut h = harness(PlaygroundOptions::new("original"));
    h.playground.update_text("ignored");
    assert_eq!(h.playground.text(), "original");
}

#[test]
fn test_update_text_accepts_empty() {
    let mut h = harness(PlaygroundOptions::new("something"));
    h.playground.toggle_edit_mode();
    h.playground.update_text("");
    assert_eq!(h.playground.text(), "");
}

#[test]
fn test_double_toggle_keeps_edited_text() {
    let mut h = harness(PlaygroundOptions::new("a"));

    h.playground.toggle_edit_mode();
    h.playground.update_text("ab");
    h.playground.update_text("abc");
    h.playground.toggle_edit_mode();

    assert_eq!(h.playground.mode(), Mode::View);
    assert_eq!(h.playground.text(), "abc");
}

// ─────────────────────────────────────────────────────────────────────────────
// Reset
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_reset_overrides_any_edit_history() {
    let mut h = harness(PlaygroundOptions::new("seed"));
    h.playground.toggle_edit_mode();
    for text in ["", "x", "seed but longer", "\n\n"] {
        h.playground.update_text(text);
    }

    h.playground.reset();
    assert_eq!(h.playground.text(), "seed");
    assert_eq!(h.playground.surface(), Surface::View(Tab::Code));
}

#[test]
fn test_reset_is_idempotent() {
    let mut h = harness(PlaygroundOptions::new("seed").dual_tab(true));
    h.playground.toggle_edit_mode();
    h.playground.update_text("edited");

    h.playground.reset();
    let once = (
        h.playground.text().to_string(),
        h.playground.surface(),
        h.playground.copy_feedback(),
    );
    h.playground.reset();
    let twice = (
        h.playground.text().to_string(),
        h.playground.surface(),
        h.playground.copy_feedback(),
    );

    assert_eq!(once, twice);
}

#[test]
fn test_reset_keeps_preview_tab() {
    let mut h = harness(PlaygroundOptions::new("seed").dual_tab(true));
    h.playground.select_tab(Tab::Preview);

    h.playground.reset();
    assert_eq!(h.playground.surface(), Surface::View(Tab::Preview));
}

#[test]
fn test_reset_sends_info_notice() {
    let mut h = harness(PlaygroundOptions::new("seed"));
    h.playground.reset();

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Code reset");
    assert_eq!(notices[0].severity, Severity::Info);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_c_preview_renders_plain_text() {
    let mut h = harness(PlaygroundOptions::new("let x = 1;").dual_tab(true));
    assert_eq!(h.playground.active_tab(), Tab::Code);

    h.playground.select_tab(Tab::Preview);
    assert_eq!(h.playground.active_tab(), Tab::Preview);

    let highlighter = CountingHighlighter::default();
    let rendered = h.playground.render(&highlighter);
    assert_eq!(rendered.body, Body::Preview("let x = 1;"));
    assert_eq!(rendered.tabs, Some(Tab::Preview));
    assert_eq!(highlighter.calls.get(), 0);
}

#[test]
fn test_select_tab_ignored_without_dual_tab() {
    let mut h = harness(PlaygroundOptions::new("x"));
    h.playground.select_tab(Tab::Preview);
    assert_eq!(h.playground.active_tab(), Tab::Code);
}

#[test]
fn test_preview_tab_leaves_edit_mode() {
    let mut h = harness(PlaygroundOptions::new("x").dual_tab(true));
    h.playground.toggle_edit_mode();
    h.playground.update_text("xy");

    h.playground.select_tab(Tab::Code);
    assert_eq!(h.playground.mode(), Mode::Edit);

    h.playground.select_tab(Tab::Preview);
    assert_eq!(h.playground.surface(), Surface::View(Tab::Preview));
    assert_eq!(h.playground.text(), "xy");
}

#[test]
fn test_edit_from_preview_moves_to_code() {
    let mut h = harness(PlaygroundOptions::new("x").dual_tab(true));
    h.playground.select_tab(Tab::Preview);

    h.playground.toggle_edit_mode();
    assert_eq!(h.playground.surface(), Surface::Edit);
    assert_eq!(h.playground.active_tab(), Tab::Code);

    h.playground.toggle_edit_mode();
    assert_eq!(h.playground.surface(), Surface::View(Tab::Code));
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_render_view_uses_highlighter() {
    let h = harness(PlaygroundOptions::new("fn main() {}").language("rust"));
    let highlighter = CountingHighlighter::default();

    let rendered = h.playground.render(&highlighter);
    assert_eq!(
        rendered.body,
        Body::Highlighted("<rust>fn main() {}".to_string())
    );
    assert_eq!(rendered.language, "rust");
    assert_eq!(rendered.tabs, None);
    assert_eq!(highlighter.calls.get(), 1);
}

#[test]
fn test_render_edit_skips_highlighter() {
    let mut h = harness(PlaygroundOptions::new("abc"));
    h.playground.toggle_edit_mode();
    let highlighter = CountingHighlighter::default();

    let rendered = h.playground.render(&highlighter);
    assert_eq!(rendered.body, Body::Editor("abc"));
    assert_eq!(rendered.toggle_label, Some("View"));
    assert_eq!(highlighter.calls.get(), 0);
}

#[test]
fn test_render_labels() {
    let h = harness(PlaygroundOptions::new("abc").title("server.js"));
    let rendered = h.playground.render(&CountingHighlighter::default());
    assert_eq!(rendered.title, "server.js");
    assert_eq!(rendered.toggle_label, Some("Edit"));
    assert_eq!(rendered.copy_label, "Copy");
    assert_eq!(rendered.reset_label, "Reset");

    let read_only = harness(PlaygroundOptions::new("abc").editable(false));
    let rendered = read_only.playground.render(&CountingHighlighter::default());
    assert_eq!(rendered.toggle_label, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Copy and feedback timer
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_copy_success_then_expires() {
    let mut h = harness(PlaygroundOptions::new("let x = 1;"));

    h.playground.copy();
    assert_eq!(h.playground.next_event().await, PlaygroundEvent::CopySucceeded);
    let copied_at = Instant::now();
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Copied);
    assert_eq!(h.clipboard.completed(), vec!["let x = 1;".to_string()]);
    assert_eq!(
        h.playground.render(&CountingHighlighter::default()).copy_label,
        "Copied"
    );

    assert_eq!(
        h.playground.next_event().await,
        PlaygroundEvent::FeedbackExpired
    );
    assert_eq!(copied_at.elapsed(), Duration::from_secs(2));
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Copied to clipboard");
    assert_eq!(notices[0].severity, Severity::Info);
}

#[tokio::test(start_paused = true)]
async fn test_copy_writes_current_text() {
    let mut h = harness(PlaygroundOptions::new("before"));
    h.playground.toggle_edit_mode();
    h.playground.update_text("after");

    h.playground.copy();
    h.playground.next_event().await;
    assert_eq!(h.clipboard.completed(), vec!["after".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_copy_failure_leaves_feedback_idle() {
    let mut h = harness_with(PlaygroundOptions::new("x"), FakeClipboard::failing());

    h.playground.copy();
    let event = h.playground.next_event().await;
    assert!(matches!(event, PlaygroundEvent::CopyFailed(ClipboardError::Rejected(_))));
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);
    assert!(h.playground.feedback_deadline().is_none());

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Failed to copy");
    assert_eq!(notices[0].severity, Severity::Error);

    assert_quiet(&mut h.playground, Duration::from_secs(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_copy_failure_leaves_copied_feedback_and_timer() {
    let mut h = harness(PlaygroundOptions::new("x"));
    h.playground.copy();
    h.playground.next_event().await;
    let copied_at = Instant::now();

    h.clipboard.set_failing(true);
    tokio::time::advance(Duration::from_millis(500)).await;
    h.playground.copy();
    assert!(matches!(
        h.playground.next_event().await,
        PlaygroundEvent::CopyFailed(_)
    ));
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Copied);

    assert_eq!(
        h.playground.next_event().await,
        PlaygroundEvent::FeedbackExpired
    );
    assert_eq!(copied_at.elapsed(), Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_scenario_d_rapid_copies_restart_timer() {
    let mut h = harness(PlaygroundOptions::new("x"));

    h.playground.copy();
    h.playground.next_event().await;

    tokio::time::advance(Duration::from_secs(1)).await;
    h.playground.copy();
    assert_eq!(h.playground.next_event().await, PlaygroundEvent::CopySucceeded);
    let second_copy = Instant::now();

    // Still Copied past the first copy's deadline
    assert_quiet(&mut h.playground, Duration::from_millis(1999)).await;
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Copied);

    assert_eq!(
        h.playground.next_event().await,
        PlaygroundEvent::FeedbackExpired
    );
    assert_eq!(second_copy.elapsed(), Duration::from_secs(2));

    // Exactly one return to Idle
    assert_quiet(&mut h.playground, Duration::from_secs(10)).await;
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_feedback_not_set_before_write_resolves() {
    let mut h = harness_with(
        PlaygroundOptions::new("x"),
        FakeClipboard::slow(Duration::from_secs(1)),
    );
    let start = Instant::now();

    h.playground.copy();
    assert!(h.playground.is_copy_pending());
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);

    // Other actions stay available while the write is in flight
    h.playground.toggle_edit_mode();
    assert_eq!(h.playground.mode(), Mode::Edit);

    assert_eq!(h.playground.next_event().await, PlaygroundEvent::CopySucceeded);
    assert_eq!(start.elapsed(), Duration::from_secs(1));
    assert!(!h.playground.is_copy_pending());
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Copied);
}

#[tokio::test(start_paused = true)]
async fn test_new_copy_supersedes_in_flight_write() {
    let mut h = harness_with(
        PlaygroundOptions::new("first"),
        FakeClipboard::slow(Duration::from_secs(1)),
    );

    h.playground.copy();
    h.playground.toggle_edit_mode();
    h.playground.update_text("second");
    h.playground.copy();

    assert_eq!(h.playground.next_event().await, PlaygroundEvent::CopySucceeded);
    assert_eq!(h.clipboard.completed(), vec!["second".to_string()]);
    assert_eq!(h.notifier.notices().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_feedback() {
    let mut h = harness(PlaygroundOptions::new("x"));
    h.playground.copy();
    h.playground.next_event().await;

    h.playground.reset();
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);
    assert!(h.playground.feedback_deadline().is_none());

    assert_quiet(&mut h.playground, Duration::from_secs(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_reset_leaves_in_flight_write_running() {
    let mut h = harness_with(
        PlaygroundOptions::new("x"),
        FakeClipboard::slow(Duration::from_millis(500)),
    );
    h.playground.copy();
    h.playground.reset();
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Idle);
    assert!(h.playground.is_copy_pending());

    assert_eq!(h.playground.next_event().await, PlaygroundEvent::CopySucceeded);
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Copied);
    assert_eq!(h.clipboard.completed(), vec!["x".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_copy_after_reset_rearms() {
    let mut h = harness(PlaygroundOptions::new("x"));
    h.playground.copy();
    h.playground.next_event().await;
    h.playground.reset();

    h.playground.copy();
    assert_eq!(h.playground.next_event().await, PlaygroundEvent::CopySucceeded);
    assert_eq!(h.playground.copy_feedback(), CopyFeedback::Copied);
    assert_eq!(
        h.playground.next_event().await,
        PlaygroundEvent::FeedbackExpired
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_feedback_duration() {
    let mut h = harness(
        PlaygroundOptions::new("x").feedback_duration(Duration::from_millis(250)),
    );
    h.playground.copy();
    h.playground.next_event().await;
    let copied_at = Instant::now();

    h.playground.next_event().await;
    assert_eq!(copied_at.elapsed(), Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_drop_discards_in_flight_write() {
    let h = harness_with(
        PlaygroundOptions::new("x"),
        FakeClipboard::slow(Duration::from_secs(1)),
    );
    let Harness {
        mut playground,
        clipboard,
        notifier,
    } = h;

    playground.copy();
    tokio::task::yield_now().await;
    drop(playground);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(clipboard.completed().is_empty());
    assert!(notifier.notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_next_event_pends_when_idle() {
    let mut h = harness(PlaygroundOptions::new("x"));
    assert_quiet(&mut h.playground, Duration::from_secs(60)).await;
}
