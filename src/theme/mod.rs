// Theme system for the TUI
//
// A Theme is the fully resolved set of colors used by every component,
// including the token colors the syntax highlighter paints with. Themes are
// selected by name from config; unknown names fall back to One Dark.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub success: Color,
    pub error: Color,
    pub selection: Color,

    // ─── Code Colors ─────────────────────────────────────────
    pub code_background: Color,
    pub line_number: Color,
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub comment: Color,
    pub function: Color,
    pub punctuation: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

/// Names accepted by [`Theme::by_name`]
pub const THEME_NAMES: &[&str] = &[
    "One Dark",
    "Dracula",
    "Nord",
    "Gruvbox Dark",
    "Solarized Light",
    "Terminal",
];

impl Theme {
    /// Load theme by name (case-insensitive, spaces/dashes/underscores ignored)
    pub fn by_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" | "gruvboxdark" => Self::gruvbox_dark(),
            "solarizedlight" => Self::solarized_light(),
            "terminal" | "auto" => Self::terminal(),
            "onedark" => Self::one_dark(),
            _ => {
                tracing::warn!("Unknown theme '{}', using One Dark", name);
                Self::one_dark()
            }
        }
    }

    /// Apply the use_theme_background setting
    pub fn with_background(mut self, use_theme_background: bool) -> Self {
        if !use_theme_background {
            self.background = Color::Reset;
            self.code_background = Color::Reset;
        }
        self
    }

    pub fn one_dark() -> Self {
        Self {
            name: "One Dark".to_string(),
            background: Color::Rgb(40, 44, 52),
            foreground: Color::Rgb(171, 178, 191),
            muted: Color::Rgb(92, 99, 112),
            title: Color::Rgb(97, 175, 239),
            border: Color::Rgb(62, 68, 81),
            highlight: Color::Rgb(97, 175, 239),
            status_bar: Color::Rgb(130, 137, 151),
            badge_fg: Color::Rgb(40, 44, 52),
            badge_bg: Color::Rgb(152, 195, 121),
            success: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),
            selection: Color::Rgb(62, 68, 81),
            code_background: Color::Rgb(33, 37, 43),
            line_number: Color::Rgb(76, 82, 99),
            keyword: Color::Rgb(198, 120, 221),
            string: Color::Rgb(152, 195, 121),
            number: Color::Rgb(209, 154, 102),
            comment: Color::Rgb(92, 99, 112),
            function: Color::Rgb(97, 175, 239),
            punctuation: Color::Rgb(171, 178, 191),
            border_type: BorderType::Rounded,
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "Dracula".to_string(),
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(98, 114, 164),
            title: Color::Rgb(189, 147, 249),
            border: Color::Rgb(68, 71, 90),
            highlight: Color::Rgb(255, 121, 198),
            status_bar: Color::Rgb(98, 114, 164),
            badge_fg: Color::Rgb(40, 42, 54),
            badge_bg: Color::Rgb(80, 250, 123),
            success: Color::Rgb(80, 250, 123),
            error: Color::Rgb(255, 85, 85),
            selection: Color::Rgb(68, 71, 90),
            code_background: Color::Rgb(33, 34, 44),
            line_number: Color::Rgb(98, 114, 164),
            keyword: Color::Rgb(255, 121, 198),
            string: Color::Rgb(241, 250, 140),
            number: Color::Rgb(189, 147, 249),
            comment: Color::Rgb(98, 114, 164),
            function: Color::Rgb(80, 250, 123),
            punctuation: Color::Rgb(248, 248, 242),
            border_type: BorderType::Rounded,
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord".to_string(),
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(97, 110, 136),
            title: Color::Rgb(136, 192, 208),
            border: Color::Rgb(67, 76, 94),
            highlight: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(129, 161, 193),
            badge_fg: Color::Rgb(46, 52, 64),
            badge_bg: Color::Rgb(163, 190, 140),
            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),
            selection: Color::Rgb(67, 76, 94),
            code_background: Color::Rgb(59, 66, 82),
            line_number: Color::Rgb(97, 110, 136),
            keyword: Color::Rgb(129, 161, 193),
            string: Color::Rgb(163, 190, 140),
            number: Color::Rgb(180, 142, 173),
            comment: Color::Rgb(97, 110, 136),
            function: Color::Rgb(136, 192, 208),
            punctuation: Color::Rgb(236, 239, 244),
            border_type: BorderType::Plain,
        }
    }

    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            muted: Color::Rgb(146, 131, 116),
            title: Color::Rgb(250, 189, 47),
            border: Color::Rgb(80, 73, 69),
            highlight: Color::Rgb(254, 128, 25),
            status_bar: Color::Rgb(168, 153, 132),
            badge_fg: Color::Rgb(40, 40, 40),
            badge_bg: Color::Rgb(184, 187, 38),
            success: Color::Rgb(184, 187, 38),
            error: Color::Rgb(251, 73, 52),
            selection: Color::Rgb(80, 73, 69),
            code_background: Color::Rgb(29, 32, 33),
            line_number: Color::Rgb(124, 111, 100),
            keyword: Color::Rgb(251, 73, 52),
            string: Color::Rgb(184, 187, 38),
            number: Color::Rgb(211, 134, 155),
            comment: Color::Rgb(146, 131, 116),
            function: Color::Rgb(142, 192, 124),
            punctuation: Color::Rgb(235, 219, 178),
            border_type: BorderType::Thick,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "Solarized Light".to_string(),
            background: Color::Rgb(253, 246, 227),
            foreground: Color::Rgb(101, 123, 131),
            muted: Color::Rgb(147, 161, 161),
            title: Color::Rgb(38, 139, 210),
            border: Color::Rgb(238, 232, 213),
            highlight: Color::Rgb(203, 75, 22),
            status_bar: Color::Rgb(88, 110, 117),
            badge_fg: Color::Rgb(253, 246, 227),
            badge_bg: Color::Rgb(133, 153, 0),
            success: Color::Rgb(133, 153, 0),
            error: Color::Rgb(220, 50, 47),
            selection: Color::Rgb(238, 232, 213),
            code_background: Color::Rgb(238, 232, 213),
            line_number: Color::Rgb(147, 161, 161),
            keyword: Color::Rgb(133, 153, 0),
            string: Color::Rgb(42, 161, 152),
            number: Color::Rgb(211, 54, 130),
            comment: Color::Rgb(147, 161, 161),
            function: Color::Rgb(38, 139, 210),
            punctuation: Color::Rgb(88, 110, 117),
            border_type: BorderType::Rounded,
        }
    }

    /// ANSI palette - follows the terminal's own colors
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Cyan,
            status_bar: Color::Gray,
            badge_fg: Color::Black,
            badge_bg: Color::Green,
            success: Color::Green,
            error: Color::Red,
            selection: Color::DarkGray,
            code_background: Color::Reset,
            line_number: Color::DarkGray,
            keyword: Color::Magenta,
            string: Color::Green,
            number: Color::Yellow,
            comment: Color::DarkGray,
            function: Color::Blue,
            punctuation: Color::Reset,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::one_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_resolves() {
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, *name);
        }
    }

    #[test]
    fn test_name_matching_is_loose() {
        assert_eq!(Theme::by_name("gruvbox-dark").name, "Gruvbox Dark");
        assert_eq!(Theme::by_name("SOLARIZED_LIGHT").name, "Solarized Light");
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(Theme::by_name("no such theme").name, "One Dark");
    }

    #[test]
    fn test_terminal_background_toggle() {
        let theme = Theme::one_dark().with_background(false);
        assert_eq!(theme.background, Color::Reset);
        assert_eq!(theme.code_background, Color::Reset);
    }
}
