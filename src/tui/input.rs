//! Cursor state and key handling for editable text fields.
//!
//! The text itself lives in the note store; a `TextInput` only tracks where
//! the cursor is and computes the edited string for a key press.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding a key to a [`TextInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The text changed; the new value should be written back.
    Changed(String),
    /// Only the cursor moved.
    Moved,
    /// The key is not handled by the field.
    Ignored,
}

/// Cursor position (in characters) for a single- or multi-line field.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    cursor: usize,
    max_chars: Option<usize>,
    multiline: bool,
}

impl TextInput {
    /// A single-line field, optionally limited to `max_chars` characters.
    pub fn single_line(max_chars: Option<usize>) -> Self {
        Self {
            cursor: 0,
            max_chars,
            multiline: false,
        }
    }

    /// A multi-line field without a length limit.
    pub fn multi_line() -> Self {
        Self {
            cursor: 0,
            max_chars: None,
            multiline: true,
        }
    }

    /// Returns the cursor as a character offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Places the cursor after the last character of `text`.
    pub fn move_to_end(&mut self, text: &str) {
        self.cursor = text.chars().count();
    }

    /// Returns the cursor's (line, column) within `text`, in characters.
    pub fn line_col(&self, text: &str) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Applies `key` to `text` at the cursor.
    pub fn handle(&mut self, text: &str, key: KeyEvent) -> InputOutcome {
        let mut chars: Vec<char> = text.chars().collect();
        self.cursor = self.cursor.min(chars.len());

        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return InputOutcome::Ignored;
        }

        match key.code {
            KeyCode::Char(c) => self.insert(&mut chars, c),
            KeyCode::Enter if self.multiline => self.insert(&mut chars, '\n'),
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                chars.remove(self.cursor);
                InputOutcome::Changed(chars.into_iter().collect())
            }
            KeyCode::Delete if self.cursor < chars.len() => {
                chars.remove(self.cursor);
                InputOutcome::Changed(chars.into_iter().collect())
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputOutcome::Moved
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(chars.len());
                InputOutcome::Moved
            }
            KeyCode::Home => {
                self.cursor = line_start(&chars, self.cursor);
                InputOutcome::Moved
            }
            KeyCode::End => {
                self.cursor = line_end(&chars, self.cursor);
                InputOutcome::Moved
            }
            KeyCode::Up if self.multiline => self.vertical(&chars, false),
            KeyCode::Down if self.multiline => self.vertical(&chars, true),
            KeyCode::Backspace | KeyCode::Delete => InputOutcome::Moved,
            _ => InputOutcome::Ignored,
        }
    }

    fn insert(&mut self, chars: &mut Vec<char>, c: char) -> InputOutcome {
        if self.max_chars.is_some_and(|max| chars.len() >= max) {
            return InputOutcome::Moved;
        }
        chars.insert(self.cursor, c);
        self.cursor += 1;
        InputOutcome::Changed(chars.iter().collect())
    }

    fn vertical(&mut self, chars: &[char], down: bool) -> InputOutcome {
        let start = line_start(chars, self.cursor);
        let column = self.cursor - start;

        let target_start = if down {
            let end = line_end(chars, self.cursor);
            if end >= chars.len() {
                return InputOutcome::Ignored;
            }
            end + 1
        } else {
            if start == 0 {
                return InputOutcome::Ignored;
            }
            line_start(chars, start - 1)
        };

        let target_end = line_end(chars, target_start);
        self.cursor = (target_start + column).min(target_end);
        InputOutcome::Moved
    }
}

fn line_start(chars: &[char], pos: usize) -> usize {
    chars[..pos]
        .iter()
        .rposition(|c| *c == '\n')
        .map_or(0, |i| i + 1)
}

fn line_end(chars: &[char], pos: usize) -> usize {
    chars[pos..]
        .iter()
        .position(|c| *c == '\n')
        .map_or(chars.len(), |i| pos + i)
}
