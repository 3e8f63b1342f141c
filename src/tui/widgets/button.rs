//! Submit button widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Label shown while the button accepts a submit.
pub const READY_LABEL: &str = "Send";
/// Label shown while a submission is in flight.
pub const BUSY_LABEL: &str = "Sending...";

/// Returns the button label for the given disabled state.
pub fn submit_label(disabled: bool) -> &'static str {
    if disabled { BUSY_LABEL } else { READY_LABEL }
}

/// Renders the submit button; a disabled button is dimmed.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_submit_button(disabled: bool, focused: bool, frame: &mut Frame, area: Rect) {
    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }));
    let paragraph = Paragraph::new(submit_label(disabled))
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(disabled: bool) -> String {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_submit_button(disabled, true, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn label_follows_disabled() {
        assert_eq!(submit_label(false), "Send");
        assert_eq!(submit_label(true), "Sending...");
    }

    #[test]
    fn renders_ready_label() {
        let output = render(false);
        assert!(output.contains("Send"));
        assert!(!output.contains("Sending"));
    }

    #[test]
    fn renders_busy_label() {
        assert!(render(true).contains("Sending..."));
    }
}
