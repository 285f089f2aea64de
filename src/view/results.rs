//! Results region: renders a [`Presentation`] as styled lines.
//!
//! Line building is pure so the same text backs both the TUI widget and
//! print mode.

use crate::model::Person;
use crate::state::Presentation;
use crate::view::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shown after a blank query is submitted.
pub const VALIDATION_MESSAGE: &str = "Please enter a name before searching.";
/// Shown before the first search and after an empty remote result.
pub const IDLE_PROMPT: &str = "Type a name and press Enter to search.";
/// Heading above the dataset suggestions on a "no results" screen.
pub const SUGGESTIONS_HEADING: &str = "Here are some profiles you might be interested in:";

/// Lines for a single person: name and headline, location, then skill badges.
///
/// No badge line is emitted when the person has no skills.
pub fn person_lines(person: &Person, styles: &Styles) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(person.name.clone(), styles.name),
            Span::raw(" - "),
            Span::styled(person.professional_headline.clone(), styles.headline),
        ]),
        Line::from(Span::styled(
            format!("  {}", person.location),
            styles.location,
        )),
    ];

    if !person.skills.is_empty() {
        let mut badges = vec![Span::raw("  ")];
        for (i, skill) in person.skills.iter().enumerate() {
            if i > 0 {
                badges.push(Span::raw(" "));
            }
            badges.push(Span::styled(format!("[{skill}]"), styles.badge));
        }
        lines.push(Line::from(badges));
    }

    lines
}

fn people_lines(people: &[Person], styles: &Styles, out: &mut Vec<Line<'static>>) {
    for (i, person) in people.iter().enumerate() {
        if i > 0 {
            out.push(Line::default());
        }
        out.extend(person_lines(person, styles));
    }
}

/// Build the lines shown in the results region.
///
/// `spinner` is the current loading frame.
pub fn presentation_lines(
    presentation: Presentation<'_>,
    spinner: &str,
    styles: &Styles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match presentation {
        Presentation::ValidationError => {
            lines.push(Line::from(Span::styled(VALIDATION_MESSAGE, styles.error)));
        }
        Presentation::Loading => {
            lines.push(Line::from(Span::styled(
                format!("{spinner} Searching..."),
                styles.prompt,
            )));
        }
        Presentation::NoResults {
            last_query,
            suggestions,
        } => {
            lines.push(Line::from(vec![
                Span::raw("Sorry, no results found for "),
                Span::styled(last_query.to_string(), styles.name),
                Span::raw("."),
            ]));
            lines.push(Line::default());
            lines.push(Line::from(SUGGESTIONS_HEADING));
            lines.push(Line::default());
            people_lines(suggestions, styles, &mut lines);
        }
        Presentation::Results(people) => {
            people_lines(people, styles, &mut lines);
        }
        Presentation::IdlePrompt => {
            lines.push(Line::from(Span::styled(IDLE_PROMPT, styles.prompt)));
        }
    }

    lines
}

/// Bordered, scrollable results widget.
pub struct ResultsView<'a> {
    lines: Vec<Line<'static>>,
    scroll: u16,
    title: &'a str,
}

impl<'a> ResultsView<'a> {
    /// Show `lines` starting at line `scroll` under a block titled `title`.
    pub fn new(lines: Vec<Line<'static>>, scroll: u16, title: &'a str) -> Self {
        Self {
            lines,
            scroll,
            title,
        }
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines)
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// Title for the results block, with a count when results are shown.
pub fn results_title(presentation: Presentation<'_>) -> String {
    match presentation {
        Presentation::Results(people) => format!("Results ({})", people.len()),
        Presentation::NoResults { .. } => "No results".to_string(),
        _ => "Results".to_string(),
    }
}
