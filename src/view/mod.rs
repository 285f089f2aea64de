//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
mod plain;
pub mod results;
mod search_input;
mod styles;

pub use layout::{calculate_areas, ScreenAreas};
pub use plain::render_plain;
pub use search_input::{SearchButton, SearchInput};
pub use styles::{ColorConfig, Styles};

use crate::config::keybindings::KeyBindings;
use crate::model::{KeyAction, ResultSet, TransportError};
use crate::source::PeopleSearch;
use crate::state::{query_input, AppState, PendingSearch};
use constants::{FALLBACK_WIDTH, MOUSE_SCROLL_LINES, TICK_INTERVAL};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// A finished backend call travelling from the runtime back to the UI thread.
type SearchOutcome = (PendingSearch, Result<ResultSet, TransportError>);

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend. The event loop
/// is synchronous; each committed search runs as a task on the tokio runtime
/// and its outcome comes back over a channel drained between events.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    backend: Arc<dyn PeopleSearch>,
    runtime: Handle,
    outcome_tx: UnboundedSender<SearchOutcome>,
    outcome_rx: UnboundedReceiver<SearchOutcome>,
    /// Searches spawned but not yet applied
    in_flight: usize,
    key_bindings: KeyBindings,
    styles: Styles,
    /// Areas from the last draw (for mouse hit-testing)
    last_areas: ScreenAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        app_state: AppState,
        backend: Arc<dyn PeopleSearch>,
        runtime: Handle,
        styles: Styles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::assemble(
            terminal,
            app_state,
            backend,
            runtime,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Esc or Ctrl+C). Redraws on input, on
    /// delivered search outcomes, and on spinner ticks while loading.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                    }
                    _ => continue,
                }
                self.drain_outcomes();
                self.draw()?;
            } else {
                let spun = self.app_state.tick();
                let delivered = self.drain_outcomes();
                if spun || delivered {
                    self.draw()?;
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn assemble(
        terminal: Terminal<B>,
        app_state: AppState,
        backend: Arc<dyn PeopleSearch>,
        runtime: Handle,
        key_bindings: KeyBindings,
        styles: Styles,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        // Guard against zero width until the first draw replaces these
        let last_areas = match terminal.size() {
            Ok(size) => calculate_areas(Rect::new(
                0,
                0,
                if size.width > 0 { size.width } else { FALLBACK_WIDTH },
                size.height,
            )),
            Err(_) => ScreenAreas::default(),
        };

        Self {
            terminal,
            app_state,
            backend,
            runtime,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
            key_bindings,
            styles,
            last_areas,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Printable characters (shifted or not) always go into the query
        if let KeyCode::Char(ch) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.app_state.type_char(ch);
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::SubmitSearch => self.submit(),
            KeyAction::DeleteBack => self.app_state.edit_input(query_input::handle_backspace),
            KeyAction::DeleteForward => self.app_state.edit_input(query_input::handle_delete),
            KeyAction::CursorLeft => self.app_state.edit_input(query_input::handle_cursor_left),
            KeyAction::CursorRight => self.app_state.edit_input(query_input::handle_cursor_right),
            KeyAction::CursorHome => self.app_state.edit_input(query_input::handle_cursor_home),
            KeyAction::CursorEnd => self.app_state.edit_input(query_input::handle_cursor_end),
            KeyAction::ClearQuery => self.app_state.edit_input(query_input::handle_clear),
            KeyAction::ScrollUp => self.app_state.scroll_up(1),
            KeyAction::ScrollDown => {
                let height = self.content_height();
                self.app_state.scroll_down(1, height);
            }
            KeyAction::PageUp => {
                let page = self.page_size();
                self.app_state.scroll_up(page);
            }
            KeyAction::PageDown => {
                let page = self.page_size();
                let height = self.content_height();
                self.app_state.scroll_down(page, height);
            }
            KeyAction::Quit => return true,
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left click on the button submits; the wheel scrolls the results.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.last_areas.button_contains(mouse.column, mouse.row) {
                    self.submit();
                }
            }
            MouseEventKind::ScrollUp => self.app_state.scroll_up(MOUSE_SCROLL_LINES),
            MouseEventKind::ScrollDown => {
                let height = self.content_height();
                self.app_state.scroll_down(MOUSE_SCROLL_LINES, height);
            }
            _ => {}
        }
    }

    /// Commit the current query and start the backend call if it is valid.
    fn submit(&mut self) {
        if let Some(pending) = self.app_state.submit() {
            self.spawn_search(pending);
        }
    }

    fn spawn_search(&mut self, pending: PendingSearch) {
        let backend = Arc::clone(&self.backend);
        let tx = self.outcome_tx.clone();
        self.in_flight += 1;

        self.runtime.spawn(async move {
            let outcome = backend.search(pending.query()).await;
            if tx.send((pending, outcome)).is_err() {
                debug!("Search finished after the UI shut down");
            }
        });
    }

    /// Apply every outcome that has arrived. Returns true if any did.
    fn drain_outcomes(&mut self) -> bool {
        let mut delivered = false;
        while let Ok((pending, outcome)) = self.outcome_rx.try_recv() {
            self.apply(pending, outcome);
            delivered = true;
        }
        delivered
    }

    fn apply(&mut self, pending: PendingSearch, outcome: Result<ResultSet, TransportError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.app_state.apply_outcome(pending, outcome);
    }

    /// Number of lines the results region currently holds.
    fn content_height(&self) -> u16 {
        let lines = results::presentation_lines(
            self.app_state.presentation(),
            self.app_state.spinner(),
            &self.styles,
        );
        u16::try_from(lines.len()).unwrap_or(u16::MAX)
    }

    fn page_size(&self) -> u16 {
        self.last_areas.results_inner_height().max(1)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let mut areas = self.last_areas;

        self.terminal.draw(|frame| {
            areas = layout::render_layout(frame, state, styles);
        })?;

        self.last_areas = areas;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        backend: Arc<dyn PeopleSearch>,
        runtime: Handle,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::assemble(
            terminal,
            app_state,
            backend,
            runtime,
            key_bindings,
            Styles::plain(),
        )
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn tick_test(&mut self) -> bool {
        self.app_state.tick()
    }

    /// Block until the next search outcome arrives and apply it.
    ///
    /// Returns false immediately when nothing is in flight. Must not be
    /// called from inside the runtime.
    pub(crate) fn wait_for_outcome_test(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.outcome_rx.blocking_recv() {
            Some((pending, outcome)) => {
                self.apply(pending, outcome);
                true
            }
            None => false,
        }
    }
}

/// Startup options for [`run_tui`].
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    /// Resolved color styles.
    pub styles: Styles,
    /// Submit the pre-filled query before the first frame.
    pub submit_on_start: bool,
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_tui(
    app_state: AppState,
    backend: Arc<dyn PeopleSearch>,
    runtime: Handle,
    options: TuiOptions,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, backend, runtime, options.styles)?;

    if options.submit_on_start {
        app.submit();
    }

    info!("TUI started");
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
