//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. Printable characters are
/// handled as query input before bindings are consulted, so only non-text
/// keys map to actions. The mapping from `crossterm::event::KeyEvent` is
/// handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Search
    /// Commit the current query. Default: Enter
    SubmitSearch,

    // Query editing
    /// Delete the character before the cursor. Default: Backspace
    DeleteBack,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Move the cursor one character left. Default: ←
    CursorLeft,
    /// Move the cursor one character right. Default: →
    CursorRight,
    /// Move the cursor to the start of the query. Default: Home/Ctrl+a
    CursorHome,
    /// Move the cursor to the end of the query. Default: End/Ctrl+e
    CursorEnd,
    /// Clear the whole query. Default: Ctrl+u
    ClearQuery,

    // Results
    /// Scroll results up one line. Default: ↑
    ScrollUp,
    /// Scroll results down one line. Default: ↓
    ScrollDown,
    /// Scroll results up one page. Default: Page Up
    PageUp,
    /// Scroll results down one page. Default: Page Down
    PageDown,

    // Application
    /// Exit the application. Default: Esc/Ctrl+c
    Quit,
}
