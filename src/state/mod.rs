//! UI state machine (pure).
//!
//! All state transitions are testable without a TUI or a network.

pub mod app_state;
pub mod query_input;
pub mod search;

// Re-export for convenience
pub use app_state::{AppState, SPINNER_FRAMES};
pub use query_input::QueryInput;
pub use search::{fallback_filter, PendingSearch, Presentation, SearchController, SearchState};
