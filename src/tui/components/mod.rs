// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Header: playground title, language badge, Edit/Copy/Reset labels
// - Tabs: section bar and the Code/Preview pair
// - Body: code view, editor panel or preview
// - Status bar: mode, section, copy progress, key hints
// - Logs panel: captured tracing entries
//
// Each component is a focused, single-responsibility module.

pub mod code_view;
pub mod editor_panel;
pub mod header;
pub mod logs_panel;
pub mod preview;
pub mod scrollbar;
pub mod status_bar;
pub mod tabs;
pub mod toast;

pub use toast::{Toast, ToastNotifier};
