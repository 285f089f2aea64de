//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//! Searches run on a real tokio runtime owned by the harness; tests wait for
//! their outcomes explicitly.

use crate::config::keybindings::KeyBindings;
use crate::model::{Person, ResultSet, TransportError};
use crate::source::{PeopleSearch, StaticDataset};
use crate::state::AppState;
use crate::view::TuiApp;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== Fake backends =====

/// Scripted remote backend: returns a fixed outcome and records every query.
pub struct FakeBackend {
    outcome: fn() -> Result<ResultSet, TransportError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new(outcome: fn() -> Result<ResultSet, TransportError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Backend answering every search with HTTP 500.
    pub fn failing_status() -> Self {
        Self::new(|| Err(TransportError::Status { status: 500 }))
    }

    /// Backend whose response carries a line that is not JSON.
    pub fn malformed() -> Self {
        Self::new(|| {
            Err(TransportError::MalformedLine {
                line_number: 1,
                message: "expected value".to_string(),
            })
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PeopleSearch for FakeBackend {
    async fn search(&self, query: &str) -> Result<ResultSet, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        (self.outcome)()
    }
}

/// Dataset used by the acceptance scenarios.
pub fn scenario_dataset() -> StaticDataset {
    StaticDataset::new(vec![
        Person::new(
            "Anna Souza",
            "Backend Engineer",
            Some("Lisbon, Portugal".to_string()),
            vec!["Rust".to_string(), "PostgreSQL".to_string()],
        ),
        Person::new(
            "Carlos Mendoza",
            "Product Designer",
            Some("Bogotá, Colombia".to_string()),
            vec!["Figma".to_string()],
        ),
        Person::new("Grace Okafor", "Data Scientist", None, vec![]),
    ])
}

// ===== Harness =====

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    backend: Arc<FakeBackend>,
    // Declared after the app so the app (and its handle) drop first
    _runtime: Runtime,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Build a harness with the default terminal size (80x24).
    pub fn new(backend: FakeBackend, dataset: StaticDataset) -> Self {
        Self::with_size(backend, dataset, 80, 24)
    }

    pub fn with_size(backend: FakeBackend, dataset: StaticDataset, width: u16, height: u16) -> Self {
        let runtime = Runtime::new().expect("test runtime should start");
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should build");
        let backend = Arc::new(backend);
        let app_state = AppState::new(Arc::new(dataset));

        let app = TuiApp::new_for_test(
            terminal,
            app_state,
            Arc::clone(&backend) as Arc<dyn PeopleSearch>,
            runtime.handle().clone(),
            KeyBindings::default(),
        );

        Self {
            app,
            backend,
            _runtime: runtime,
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Type a query and press Enter.
    pub fn search(&mut self, text: &str) {
        self.type_text(text);
        self.send_key(KeyCode::Enter);
    }

    /// Wait for every spawned search to finish and apply its outcome.
    pub fn settle(&mut self) {
        while self.app.wait_for_outcome_test() {}
    }

    /// Click on the search button as rendered in the last frame.
    pub fn click_search_button(&mut self) {
        self.render_to_string();
        let areas = crate::view::calculate_areas(self.app.terminal().backend().buffer().area);
        self.click_at(areas.button.x + 1, areas.button.y + 1);
    }

    /// Send a left mouse click at the specified coordinates
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }

        // Render first to ensure layout is calculated
        let _ = self.app.render_test();

        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn backend(&self) -> &FakeBackend {
        &self.backend
    }

    pub fn in_flight(&self) -> usize {
        self.app.in_flight()
    }

    pub fn tick(&mut self) -> bool {
        self.app.tick_test()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
