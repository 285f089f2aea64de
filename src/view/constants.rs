//! Layout dimension and timing constants for TUI rendering.

use std::time::Duration;

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search bar (input and button) in lines, borders included.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the search button in columns, borders included.
pub const SEARCH_BUTTON_WIDTH: u16 = 12;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Event poll timeout. Drives spinner animation and delivery of search
/// outcomes while no input arrives.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Width used when the terminal reports zero columns.
pub const FALLBACK_WIDTH: u16 = 80;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "People Search";

/// Lines scrolled per mouse wheel step.
pub const MOUSE_SCROLL_LINES: u16 = 3;
