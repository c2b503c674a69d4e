// Plain-text editor state for Edit mode
//
// The playground owns the text; the editor owns only a cursor. Each edit is
// applied to a working copy which the caller hands back through
// `Playground::update_text`. The cursor is a byte offset that always sits on
// a char boundary.

use super::highlight::TAB_WIDTH;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Spaces inserted by the Tab key
const INDENT: &str = "  ";

/// One editing keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Newline,
    Indent,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    DocStart,
    DocEnd,
}

impl EditAction {
    /// Map a key to an edit; None for keys the editor does not handle
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char(c) if !ctrl => EditAction::Insert(c),
            KeyCode::Enter => EditAction::Newline,
            KeyCode::Tab => EditAction::Indent,
            KeyCode::Backspace => EditAction::Backspace,
            KeyCode::Delete => EditAction::Delete,
            KeyCode::Left => EditAction::Left,
            KeyCode::Right => EditAction::Right,
            KeyCode::Up => EditAction::Up,
            KeyCode::Down => EditAction::Down,
            KeyCode::Home if ctrl => EditAction::DocStart,
            KeyCode::End if ctrl => EditAction::DocEnd,
            KeyCode::Home => EditAction::Home,
            KeyCode::End => EditAction::End,
            _ => return None,
        };
        Some(action)
    }
}

/// Cursor state for the editor pane
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Byte offset into the text
    cursor: usize,
    /// Column (in chars) to return to when moving vertically
    preferred_col: Option<usize>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Pull the cursor back inside `text` (after a reset shortened it)
    pub fn clamp(&mut self, text: &str) {
        let mut cursor = self.cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    /// Apply one action to `text`; returns true if the text changed
    pub fn apply(&mut self, text: &mut String, action: EditAction) -> bool {
        self.clamp(text);
        if !matches!(action, EditAction::Up | EditAction::Down) {
            self.preferred_col = None;
        }

        match action {
            EditAction::Insert(c) => {
                text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            EditAction::Newline => {
                // Carry the current line's indentation
                let line_start = line_start(text, self.cursor);
                let indent: String = text[line_start..self.cursor]
                    .chars()
                    .take_while(|c| *c == ' ' || *c == '\t')
                    .collect();
                let inserted = format!("\n{}", indent);
                text.insert_str(self.cursor, &inserted);
                self.cursor += inserted.len();
                true
            }
            EditAction::Indent => {
                text.insert_str(self.cursor, INDENT);
                self.cursor += INDENT.len();
                true
            }
            EditAction::Backspace => match prev_boundary(text, self.cursor) {
                Some(prev) => {
                    text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            EditAction::Delete => match next_boundary(text, self.cursor) {
                Some(next) => {
                    text.replace_range(self.cursor..next, "");
                    true
                }
                None => false,
            },
            EditAction::Left => {
                if let Some(prev) = prev_boundary(text, self.cursor) {
                    self.cursor = prev;
                }
                false
            }
            EditAction::Right => {
                if let Some(next) = next_boundary(text, self.cursor) {
                    self.cursor = next;
                }
                false
            }
            EditAction::Up => {
                self.move_vertically(text, -1);
                false
            }
            EditAction::Down => {
                self.move_vertically(text, 1);
                false
            }
            EditAction::Home => {
                self.cursor = line_start(text, self.cursor);
                false
            }
            EditAction::End => {
                self.cursor = line_end(text, self.cursor);
                false
            }
            EditAction::DocStart => {
                self.cursor = 0;
                false
            }
            EditAction::DocEnd => {
                self.cursor = text.len();
                false
            }
        }
    }

    fn move_vertically(&mut self, text: &str, delta: isize) {
        let (row, col) = self.position(text);
        let target_col = *self.preferred_col.get_or_insert(col);

        let target_row = if delta < 0 {
            match row.checked_sub(1) {
                Some(row) => row,
                None => {
                    self.cursor = 0;
                    return;
                }
            }
        } else {
            row + 1
        };

        let Some(start) = nth_line_start(text, target_row) else {
            self.cursor = text.len();
            return;
        };
        let end = line_end(text, start);
        self.cursor = text[start..end]
            .char_indices()
            .nth(target_col)
            .map_or(end, |(offset, _)| start + offset);
    }

    /// Cursor as (row, column in chars)
    pub fn position(&self, text: &str) -> (usize, usize) {
        let cursor = self.cursor.min(text.len());
        let before = &text[..cursor];
        let row = before.matches('\n').count();
        let col = before[line_start(text, cursor)..].chars().count();
        (row, col)
    }

    /// Cursor column in terminal cells, with tabs expanded
    pub fn display_col(&self, text: &str) -> usize {
        let cursor = self.cursor.min(text.len());
        text[line_start(text, cursor)..cursor]
            .chars()
            .map(|c| {
                if c == '\t' {
                    TAB_WIDTH
                } else {
                    c.width().unwrap_or(0)
                }
            })
            .sum()
    }
}

fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

fn nth_line_start(text: &str, row: usize) -> Option<usize> {
    if row == 0 {
        return Some(0);
    }
    text.match_indices('\n').nth(row - 1).map(|(i, _)| i + 1)
}

fn prev_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_at(cursor: usize) -> EditorState {
        EditorState {
            cursor,
            preferred_col: None,
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut text = String::from("ac");
        let mut editor = editor_at(1);

        assert!(editor.apply(&mut text, EditAction::Insert('b')));
        assert_eq!(text, "abc");
        assert_eq!(editor.cursor(), 2);

        assert!(editor.apply(&mut text, EditAction::Backspace));
        assert!(editor.apply(&mut text, EditAction::Backspace));
        assert_eq!(text, "c");
        assert!(!editor.apply(&mut text, EditAction::Backspace));
    }

    #[test]
    fn test_multibyte_chars_keep_boundaries() {
        let mut text = String::from("✓ ok");
        let mut editor = editor_at(0);

        editor.apply(&mut text, EditAction::Right);
        assert_eq!(editor.cursor(), '✓'.len_utf8());

        editor.apply(&mut text, EditAction::Backspace);
        assert_eq!(text, " ok");
        assert_eq!(editor.cursor(), 0);

        assert!(editor.apply(&mut text, EditAction::Delete));
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_newline_keeps_indentation() {
        let mut text = String::from("  foo();");
        let mut editor = editor_at(text.len());

        editor.apply(&mut text, EditAction::Newline);
        assert_eq!(text, "  foo();\n  ");
        assert_eq!(editor.position(&text), (1, 2));
    }

    #[test]
    fn test_vertical_movement_remembers_column() {
        let text = String::from("abcdef\nab\nabcdef");
        let mut scratch = text.clone();
        let mut editor = editor_at(5);

        editor.apply(&mut scratch, EditAction::Down);
        assert_eq!(editor.position(&text), (1, 2));

        editor.apply(&mut scratch, EditAction::Down);
        assert_eq!(editor.position(&text), (2, 5));

        editor.apply(&mut scratch, EditAction::Down);
        assert_eq!(editor.cursor(), text.len());

        editor.apply(&mut scratch, EditAction::DocStart);
        editor.apply(&mut scratch, EditAction::Up);
        assert_eq!(editor.cursor(), 0);
        assert_eq!(scratch, text);
    }

    #[test]
    fn test_home_end() {
        let mut text = String::from("one\ntwo");
        let mut editor = editor_at(5);

        editor.apply(&mut text, EditAction::Home);
        assert_eq!(editor.cursor(), 4);
        editor.apply(&mut text, EditAction::End);
        assert_eq!(editor.cursor(), 7);
    }

    #[test]
    fn test_clamp_after_shorter_text() {
        let mut editor = editor_at(10);
        editor.clamp("héllo");
        assert_eq!(editor.cursor(), "héllo".len());

        let mut editor = editor_at(2);
        editor.clamp("é");
        assert_eq!(editor.cursor(), 2);

        let mut editor = editor_at(1);
        editor.clamp("éa");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_display_col_expands_tabs() {
        let editor = editor_at(2);
        assert_eq!(editor.display_col("\tx"), TAB_WIDTH + 1);
    }

    #[test]
    fn test_key_mapping() {
        let plain = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        let shifted = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);

        assert_eq!(EditAction::from_key(&plain), Some(EditAction::Insert('x')));
        assert_eq!(EditAction::from_key(&ctrl), None);
        assert_eq!(EditAction::from_key(&shifted), Some(EditAction::Insert('X')));
    }
}
