//! Presentation state for a playground
//!
//! `Surface` folds the edit flag and the active tab into one value so the
//! undefined "editing while the preview tab is shown" combination cannot be
//! constructed.

/// Which tab of the dual-tab variant is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Code,
    Preview,
}

impl Tab {
    /// The other tab of the pair
    pub fn toggled(self) -> Self {
        match self {
            Tab::Code => Tab::Preview,
            Tab::Preview => Tab::Code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Code => "Code",
            Tab::Preview => "Preview",
        }
    }
}

/// Whether text is shown read-only or as an editable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

/// What the body currently shows
///
/// Editing always happens in the Code context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    View(Tab),
    Edit,
}

impl Default for Surface {
    fn default() -> Self {
        Surface::View(Tab::Code)
    }
}

impl Surface {
    pub fn mode(self) -> Mode {
        match self {
            Surface::View(_) => Mode::View,
            Surface::Edit => Mode::Edit,
        }
    }

    pub fn tab(self) -> Tab {
        match self {
            Surface::View(tab) => tab,
            Surface::Edit => Tab::Code,
        }
    }
}

/// Transient flag behind the copy button label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
}

/// Body content produced by a render pass
#[derive(Debug, Clone, PartialEq)]
pub enum Body<'a, T> {
    /// Highlighter output for the current text (Code surface, view mode)
    Highlighted(T),
    /// Editable plain-text surface bound to the current text
    Editor(&'a str),
    /// Unhighlighted, non-executing preview of the current text
    Preview(&'a str),
}

/// Everything a host needs to draw one playground
///
/// Labels are derived from state on every pass, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<'a, T> {
    pub title: &'a str,
    pub language: &'a str,
    /// Edit/View toggle label, absent for read-only playgrounds
    pub toggle_label: Option<&'static str>,
    pub copy_label: &'static str,
    pub reset_label: &'static str,
    /// Active tab, present only for the dual-tab variant
    pub tabs: Option<Tab>,
    pub body: Body<'a, T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_surface_reports_code_tab() {
        assert_eq!(Surface::Edit.tab(), Tab::Code);
        assert_eq!(Surface::Edit.mode(), Mode::Edit);
        assert_eq!(Surface::View(Tab::Preview).mode(), Mode::View);
    }

    #[test]
    fn defaults_match_initial_state() {
        assert_eq!(Surface::default(), Surface::View(Tab::Code));
        assert_eq!(CopyFeedback::default(), CopyFeedback::Idle);
        assert_eq!(Tab::Code.toggled(), Tab::Preview);
    }
}
