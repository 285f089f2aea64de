//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! State transitions are plain methods with no I/O; the view layer owns the
//! terminal and the async runtime.

use crate::model::{ResultSet, TransportError};
use crate::source::StaticDataset;
use crate::state::query_input::{self, QueryInput};
use crate::state::search::{PendingSearch, Presentation, SearchController};
use std::sync::Arc;

/// Frames cycled by the loading spinner, one per tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Input**: the query being typed, mutated on every keystroke
/// - **Search**: the [`SearchController`] (Idle / Loading / Success /
///   EmptyInputError / NoResults)
/// - **Scroll**: vertical offset of the results region, reset on each search
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text in the search box.
    pub input: QueryInput,

    /// Search lifecycle and results.
    pub search: SearchController,

    /// First visible line of the results region.
    pub results_scroll: u16,

    /// Spinner animation frame, advanced on timer ticks while loading.
    pub spinner_frame: usize,
}

impl AppState {
    /// Empty input, idle search over `dataset`.
    pub fn new(dataset: Arc<StaticDataset>) -> Self {
        Self {
            input: QueryInput::default(),
            search: SearchController::new(dataset),
            results_scroll: 0,
            spinner_frame: 0,
        }
    }

    /// Commit the current input as a search.
    ///
    /// Returns the pending search when a request must be issued.
    pub fn submit(&mut self) -> Option<PendingSearch> {
        self.results_scroll = 0;
        let query = self.input.text().to_string();
        self.search.begin(&query)
    }

    /// Apply a backend outcome delivered by the runtime.
    pub fn apply_outcome(
        &mut self,
        pending: PendingSearch,
        outcome: Result<ResultSet, TransportError>,
    ) {
        self.results_scroll = 0;
        self.search.resolve(pending, outcome);
    }

    /// What the results region should show.
    pub fn presentation(&self) -> Presentation<'_> {
        self.search.presentation()
    }

    /// Advance the spinner. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        if self.search.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            true
        } else {
            false
        }
    }

    /// Current spinner frame.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    // ===== Input =====

    /// Insert a typed character at the cursor.
    pub fn type_char(&mut self, ch: char) {
        self.input = query_input::handle_char_input(std::mem::take(&mut self.input), ch);
    }

    /// Apply a pure input transition in place.
    pub fn edit_input(&mut self, f: fn(QueryInput) -> QueryInput) {
        self.input = f(std::mem::take(&mut self.input));
    }

    // ===== Scrolling =====

    /// Scroll up, stopping at the top.
    pub fn scroll_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    /// Scroll down, clamped so at least one line of content stays visible.
    pub fn scroll_down(&mut self, lines: u16, content_height: u16) {
        let max = content_height.saturating_sub(1);
        self.results_scroll = self.results_scroll.saturating_add(lines).min(max);
    }
}
