//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Printable characters never reach the bindings (they are typed into the
/// query), so only control and navigation keys are bound here.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Search
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::SubmitSearch,
        );

        // Query editing
        bindings.insert(
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            KeyAction::DeleteBack,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            KeyAction::DeleteForward,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::CursorLeft,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::CursorRight,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::CursorHome,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::CursorEnd,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
            KeyAction::CursorHome,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL),
            KeyAction::CursorEnd,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::ClearQuery,
        );

        // Results scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );

        // Quit
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
