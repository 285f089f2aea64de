//! Search bar widgets: the query input and the search button.

use crate::state::QueryInput;
use crate::view::Styles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Query input widget.
///
/// Renders the query with a block cursor. When the text is wider than the
/// box, the view slides so the cursor stays visible.
pub struct SearchInput<'a> {
    input: &'a QueryInput,
    styles: &'a Styles,
}

impl<'a> SearchInput<'a> {
    /// Render `input` with the given styles.
    pub fn new(input: &'a QueryInput, styles: &'a Styles) -> Self {
        Self { input, styles }
    }
}

/// Number of leading characters to skip so the cursor fits in `width` columns.
///
/// The cursor cell itself takes one column.
pub(crate) fn visible_start(chars: &[char], cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    let mut start = 0;
    let mut used: usize = chars[..cursor.min(chars.len())]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum::<usize>()
        + 1;
    while used > width && start < cursor {
        used -= chars[start].width().unwrap_or(0);
        start += 1;
    }
    start
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Name");
        let inner_width = block.inner(area).width as usize;

        let chars: Vec<char> = self.input.text().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let start = visible_start(&chars, cursor, inner_width);

        let before: String = chars[start..cursor].iter().collect();
        let (cursor_text, after): (String, String) = match chars.get(cursor) {
            Some(ch) => (ch.to_string(), chars[cursor + 1..].iter().collect()),
            None => (" ".to_string(), String::new()),
        };

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_text, self.styles.cursor),
            Span::raw(after),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// The search button. Dimmed while a search is loading.
pub struct SearchButton<'a> {
    busy: bool,
    styles: &'a Styles,
}

impl<'a> SearchButton<'a> {
    /// `busy` is true while a search is in flight.
    pub fn new(busy: bool, styles: &'a Styles) -> Self {
        Self { busy, styles }
    }
}

impl Widget for SearchButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.busy {
            self.styles.button_busy
        } else {
            self.styles.button
        };

        Paragraph::new(Line::from(Span::styled(" Search ", style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
