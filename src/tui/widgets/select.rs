//! Category selector widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::field::{border_color, draw_inline_error};

/// Shown in place of a value while nothing is selected.
const EMPTY_TITLE: &str = "Select...";

#[derive(Debug, Clone, Copy)]
pub struct SelectProps<'a> {
    pub label: &'a str,
    /// Selectable options, in display order.
    pub options: &'a [String],
    pub value: Option<&'a str>,
    /// Whether the cycle includes an empty entry that clears the selection.
    pub allow_empty_title: bool,
    pub focused: bool,
    pub error: Option<&'a str>,
}

/// Returns the choice after (or before) `current` in the selector's cycle.
///
/// With `allow_empty_title` the cycle starts with `None`. A current value not
/// in the list is treated as the first entry.
pub fn cycle_choice<'a>(
    options: &'a [String],
    allow_empty_title: bool,
    current: Option<&str>,
    forward: bool,
) -> Option<&'a str> {
    let mut choices: Vec<Option<&'a str>> = Vec::with_capacity(options.len() + 1);
    if allow_empty_title {
        choices.push(None);
    }
    choices.extend(options.iter().map(|o| Some(o.as_str())));
    if choices.is_empty() {
        return None;
    }

    let pos = choices.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % choices.len()
    } else {
        (pos + choices.len() - 1) % choices.len()
    };
    choices[next]
}

/// Renders the selector as `◀ value ▶` inside a bordered box.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_select(props: &SelectProps, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!("{} *", props.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(props.focused, props.error.is_some())));

    let arrow = if props.focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = match props.value {
        Some(v) => Span::raw(v),
        None => Span::styled(EMPTY_TITLE, Style::default().fg(Color::DarkGray)),
    };
    let line = Line::from(vec![
        Span::styled("\u{25c0} ", arrow),
        value,
        Span::styled(" \u{25b6}", arrow),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);

    if let Some(err) = props.error {
        draw_inline_error(err, frame, area);
    }
}
