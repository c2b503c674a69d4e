//! Line-numbered syntax highlighting for the Code tab
//!
//! A small line-at-a-time lexer in the style of the usual C-family tokenizers:
//! comments, strings, numbers, keywords and call sites get theme colors,
//! everything else is plain. State that crosses lines (block comments,
//! template literals) is carried from one line to the next. Unknown languages
//! render as plain text with line numbers.

use crate::playground::Highlighter;
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::ops::Range;

/// Display width of a tab stop in code panes
pub const TAB_WIDTH: usize = 4;

/// Replace tabs with spaces so columns line up in the terminal
pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Width of the line-number gutter, including the separator
pub fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len().max(2);
    (digits + 3) as u16
}

fn gutter_span(number: usize, digits: usize, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("{:>digits$} │ ", number, digits = digits),
        Style::default().fg(theme.line_number),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Language table
// ─────────────────────────────────────────────────────────────────────────────

struct LanguageSpec {
    keywords: &'static [&'static str],
    line_comment: &'static str,
    block_comment: Option<(&'static str, &'static str)>,
    /// Backtick strings may span lines (JS/TS template literals, Go raw strings)
    backtick_strings: bool,
}

const JAVASCRIPT: LanguageSpec = LanguageSpec {
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
        "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
        "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
        "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void",
        "while", "yield",
    ],
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    backtick_strings: true,
};

const TYPESCRIPT: LanguageSpec = LanguageSpec {
    keywords: &[
        "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch",
        "class", "const", "continue", "default", "delete", "do", "else", "enum", "export",
        "extends", "false", "finally", "for", "from", "function", "if", "implements", "import",
        "in", "instanceof", "interface", "let", "new", "null", "number", "of", "private",
        "protected", "public", "readonly", "return", "string", "super", "switch", "this",
        "throw", "true", "try", "type", "typeof", "undefined", "var", "void", "while", "yield",
    ],
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    backtick_strings: true,
};

const RUST: LanguageSpec = LanguageSpec {
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
        "type", "unsafe", "use", "where", "while",
    ],
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    backtick_strings: false,
};

const PYTHON: LanguageSpec = LanguageSpec {
    keywords: &[
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "False", "finally", "for", "from", "global", "if", "import",
        "in", "is", "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return",
        "True", "try", "while", "with", "yield",
    ],
    line_comment: "#",
    block_comment: None,
    backtick_strings: false,
};

const GO: LanguageSpec = LanguageSpec {
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "false",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "nil", "package",
        "range", "return", "select", "struct", "switch", "true", "type", "var",
    ],
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    backtick_strings: true,
};

const C_FAMILY: LanguageSpec = LanguageSpec {
    keywords: &[
        "auto", "bool", "break", "case", "char", "class", "const", "continue", "default",
        "do", "double", "else", "enum", "extends", "false", "final", "float", "for", "if",
        "implements", "import", "int", "long", "namespace", "new", "null", "nullptr",
        "package", "private", "protected", "public", "return", "short", "sizeof", "static",
        "struct", "switch", "template", "this", "throw", "true", "try", "typedef", "union",
        "unsigned", "void", "while",
    ],
    line_comment: "//",
    block_comment: Some(("/*", "*/")),
    backtick_strings: false,
};

const BASH: LanguageSpec = LanguageSpec {
    keywords: &[
        "case", "do", "done", "echo", "elif", "else", "esac", "export", "fi", "for",
        "function", "if", "in", "local", "return", "then", "until", "while",
    ],
    line_comment: "#",
    block_comment: None,
    backtick_strings: false,
};

const TOML: LanguageSpec = LanguageSpec {
    keywords: &["true", "false"],
    line_comment: "#",
    block_comment: None,
    backtick_strings: false,
};

const JSON: LanguageSpec = LanguageSpec {
    keywords: &["true", "false", "null"],
    line_comment: "",
    block_comment: None,
    backtick_strings: false,
};

fn spec_for(language: &str) -> Option<&'static LanguageSpec> {
    let spec = match language.to_ascii_lowercase().as_str() {
        "javascript" | "js" | "jsx" | "node" => &JAVASCRIPT,
        "typescript" | "ts" | "tsx" => &TYPESCRIPT,
        "rust" | "rs" => &RUST,
        "python" | "py" => &PYTHON,
        "go" | "golang" => &GO,
        "c" | "cpp" | "c++" | "java" | "csharp" => &C_FAMILY,
        "bash" | "sh" | "shell" | "zsh" => &BASH,
        "toml" => &TOML,
        "json" => &JSON,
        _ => return None,
    };
    Some(spec)
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Plain,
    Comment,
    String,
    Number,
    Keyword,
    Function,
    Punctuation,
}

/// Lexer state carried into the next line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Normal,
    InBlockComment,
    InString(u8),
}

type Token = (TokenKind, Range<usize>);

fn char_len_at(line: &str, pos: usize) -> usize {
    line[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Scan to the closing `quote`, returning the end offset and whether it closed
fn scan_string(line: &str, mut pos: usize, quote: u8) -> (usize, bool) {
    let bytes = line.as_bytes();
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => {
                pos += 1;
                if pos < bytes.len() {
                    pos += char_len_at(line, pos);
                }
            }
            b if b == quote => return (pos + 1, true),
            _ => pos += 1,
        }
    }
    (bytes.len(), false)
}

fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len()
        && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'.' || bytes[pos] == b'_')
    {
        pos += 1;
    }
    pos
}

fn tokenize_line(spec: &LanguageSpec, line: &str, state: LineState) -> (Vec<Token>, LineState) {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    // Finish whatever the previous line left open
    match state {
        LineState::Normal => {}
        LineState::InBlockComment => {
            let end_pat = spec.block_comment.map_or("*/", |(_, end)| end);
            match line.find(end_pat) {
                Some(end) => {
                    pos = end + end_pat.len();
                    tokens.push((TokenKind::Comment, 0..pos));
                }
                None => {
                    tokens.push((TokenKind::Comment, 0..line.len()));
                    return (tokens, LineState::InBlockComment);
                }
            }
        }
        LineState::InString(quote) => {
            let (end, closed) = scan_string(line, 0, quote);
            tokens.push((TokenKind::String, 0..end));
            if !closed {
                return (tokens, LineState::InString(quote));
            }
            pos = end;
        }
    }

    while pos < bytes.len() {
        let ch = bytes[pos];
        let start = pos;

        if ch.is_ascii_whitespace() {
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            tokens.push((TokenKind::Plain, start..pos));
            continue;
        }

        if !spec.line_comment.is_empty() && line[pos..].starts_with(spec.line_comment) {
            tokens.push((TokenKind::Comment, pos..bytes.len()));
            return (tokens, LineState::Normal);
        }

        if let Some((open, close)) = spec.block_comment {
            if line[pos..].starts_with(open) {
                let after_open = pos + open.len();
                match line[after_open..].find(close) {
                    Some(end) => {
                        pos = after_open + end + close.len();
                        tokens.push((TokenKind::Comment, start..pos));
                        continue;
                    }
                    None => {
                        tokens.push((TokenKind::Comment, start..bytes.len()));
                        return (tokens, LineState::InBlockComment);
                    }
                }
            }
        }

        if ch == b'"' || ch == b'\'' || (ch == b'`' && spec.backtick_strings) {
            let (end, closed) = scan_string(line, pos + 1, ch);
            tokens.push((TokenKind::String, start..end));
            if !closed {
                // Only backtick strings legitimately continue on the next line
                let next = if ch == b'`' {
                    LineState::InString(ch)
                } else {
                    LineState::Normal
                };
                return (tokens, next);
            }
            pos = end;
            continue;
        }

        if ch.is_ascii_digit() {
            pos = scan_number(bytes, pos);
            tokens.push((TokenKind::Number, start..pos));
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == b'_' || ch == b'$' {
            while pos < bytes.len()
                && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_' || bytes[pos] == b'$')
            {
                pos += 1;
            }
            let word = &line[start..pos];
            let kind = if spec.keywords.contains(&word) {
                TokenKind::Keyword
            } else if bytes.get(pos) == Some(&b'(') {
                TokenKind::Function
            } else {
                TokenKind::Plain
            };
            tokens.push((kind, start..pos));
            continue;
        }

        if ch.is_ascii_punctuation() {
            pos += 1;
            tokens.push((TokenKind::Punctuation, start..pos));
            continue;
        }

        pos += char_len_at(line, pos);
        tokens.push((TokenKind::Plain, start..pos));
    }

    (tokens, LineState::Normal)
}

// ─────────────────────────────────────────────────────────────────────────────
// Highlighter
// ─────────────────────────────────────────────────────────────────────────────

/// Theme-colored highlighter producing one ratatui `Line` per source line
pub struct SyntaxHighlighter<'a> {
    theme: &'a Theme,
}

impl<'a> SyntaxHighlighter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn style_for(&self, kind: TokenKind) -> Style {
        let theme = self.theme;
        match kind {
            TokenKind::Plain => Style::default().fg(theme.foreground),
            TokenKind::Comment => Style::default()
                .fg(theme.comment)
                .add_modifier(Modifier::ITALIC),
            TokenKind::String => Style::default().fg(theme.string),
            TokenKind::Number => Style::default().fg(theme.number),
            TokenKind::Keyword => Style::default().fg(theme.keyword),
            TokenKind::Function => Style::default().fg(theme.function),
            TokenKind::Punctuation => Style::default().fg(theme.punctuation),
        }
    }
}

impl Highlighter for SyntaxHighlighter<'_> {
    type Output = Vec<Line<'static>>;

    fn highlight(&self, text: &str, language: &str) -> Self::Output {
        let source_lines: Vec<&str> = text.split('\n').collect();
        let digits = (gutter_width(source_lines.len()) - 3) as usize;
        let spec = spec_for(language);
        let mut state = LineState::Normal;

        source_lines
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let line = raw.strip_suffix('\r').unwrap_or(raw);
                let mut spans = vec![gutter_span(i + 1, digits, self.theme)];

                match spec {
                    Some(spec) => {
                        let (tokens, next) = tokenize_line(spec, line, state);
                        state = next;
                        spans.extend(tokens.into_iter().map(|(kind, range)| {
                            Span::styled(expand_tabs(&line[range]), self.style_for(kind))
                        }));
                    }
                    None => spans.push(Span::styled(
                        expand_tabs(line),
                        self.style_for(TokenKind::Plain),
                    )),
                }

                Line::from(spans)
            })
            .collect()
    }
}
