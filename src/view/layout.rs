//! Screen layout: header, search bar, results, status bar.
//!
//! Area calculation is pure so mouse hit-testing can reuse the rectangles
//! from the last draw.

use crate::state::AppState;
use crate::view::constants::{
    APP_TITLE, HEADER_HEIGHT, SEARCH_BAR_HEIGHT, SEARCH_BUTTON_WIDTH, STATUS_BAR_HEIGHT,
};
use crate::view::results::{presentation_lines, results_title, ResultsView};
use crate::view::search_input::{SearchButton, SearchInput};
use crate::view::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rectangles for each region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    /// Title row.
    pub header: Rect,
    /// Search box, left part of the search bar.
    pub input: Rect,
    /// Search button, right part of the search bar.
    pub button: Rect,
    /// Bordered results block.
    pub results: Rect,
    /// Key hints row.
    pub status: Rect,
}

impl ScreenAreas {
    /// Whether a click at (`column`, `row`) hits the search button.
    pub fn button_contains(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }

    /// Whether (`column`, `row`) lies inside the results block.
    pub fn results_contains(&self, column: u16, row: u16) -> bool {
        self.results.contains(Position::new(column, row))
    }

    /// Visible text rows inside the results block (borders excluded).
    pub fn results_inner_height(&self) -> u16 {
        self.results.height.saturating_sub(2)
    }
}

/// Split the terminal area into the screen regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let bar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SEARCH_BUTTON_WIDTH)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        input: bar[0],
        button: bar[1],
        results: rows[2],
        status: rows[3],
    }
}

/// Render the whole screen and return the areas used.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &Styles) -> ScreenAreas {
    let areas = calculate_areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(APP_TITLE, styles.title))),
        areas.header,
    );

    frame.render_widget(SearchInput::new(&state.input, styles), areas.input);
    frame.render_widget(
        SearchButton::new(state.search.is_loading(), styles),
        areas.button,
    );

    let presentation = state.presentation();
    let title = results_title(presentation);
    let lines = presentation_lines(presentation, state.spinner(), styles);
    frame.render_widget(
        ResultsView::new(lines, state.results_scroll, &title),
        areas.results,
    );

    render_status_bar(frame, areas.status, styles);

    areas
}

fn render_status_bar(frame: &mut Frame, area: Rect, styles: &Styles) {
    let help = "Enter: search | Up/Down: scroll | Ctrl+U: clear | Esc: quit";
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(help, styles.status))),
        area,
    );
}
