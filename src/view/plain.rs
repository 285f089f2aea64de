//! Plain-text rendering for print mode.

use crate::state::Presentation;
use crate::view::results::presentation_lines;
use crate::view::Styles;

/// Render a presentation as uncolored text, one line per row.
///
/// Output ends with a newline unless it is empty.
pub fn render_plain(presentation: Presentation<'_>) -> String {
    let lines = presentation_lines(presentation, "", &Styles::plain());
    let mut out = String::new();
    for line in lines {
        for span in &line.spans {
            out.push_str(&span.content);
        }
        out.push('\n');
    }
    out
}
