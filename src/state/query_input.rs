//! Query input handling (pure state transitions).
//!
//! Holds the text typed into the search box and the cursor position.
//! All functions are pure - no side effects, testable without TUI.

/// Text in the search box plus a cursor.
///
/// The cursor is a character index (not a byte index), in `0..=char_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    /// Create input pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `char_index` (or end of text).
    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(mut input: QueryInput, ch: char) -> QueryInput {
    let offset = input.byte_offset(input.cursor);
    input.text.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: QueryInput) -> QueryInput {
    if input.cursor > 0 {
        let offset = input.byte_offset(input.cursor - 1);
        input.text.remove(offset);
        input.cursor -= 1;
    }
    input
}

/// Delete the character under the cursor. No-op at end of text.
pub fn handle_delete(mut input: QueryInput) -> QueryInput {
    if input.cursor < input.char_count() {
        let offset = input.byte_offset(input.cursor);
        input.text.remove(offset);
    }
    input
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(mut input: QueryInput) -> QueryInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position.
/// Saturates at text length (does not wrap).
pub fn handle_cursor_right(mut input: QueryInput) -> QueryInput {
    input.cursor = (input.cursor + 1).min(input.char_count());
    input
}

/// Move the cursor to the start.
pub fn handle_cursor_home(mut input: QueryInput) -> QueryInput {
    input.cursor = 0;
    input
}

/// Move the cursor past the last character.
pub fn handle_cursor_end(mut input: QueryInput) -> QueryInput {
    input.cursor = input.char_count();
    input
}

/// Clear the text entirely.
pub fn handle_clear(_input: QueryInput) -> QueryInput {
    QueryInput::default()
}

// ===== Tests =====
