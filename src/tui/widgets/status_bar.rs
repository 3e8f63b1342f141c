//! Status bar widget: outcome of the last submission plus key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Outcome reported by the form's callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The success callback fired.
    Sent,
    /// The error callback fired with this message.
    Failed(String),
}

/// Key hints shown when there is no notice.
const HINTS: &str = "Tab/Shift+Tab: move  \u{2190}/\u{2192}: category  Ctrl+S: send  Esc: quit";

/// Renders a one-line status bar.
///
/// - Sent:   `Message sent` (Green)
/// - Failed: `Could not send: <reason>` (Red)
/// - None:   key hints (DarkGray)
#[mutants::skip]
pub fn draw_status_bar(notice: Option<&Notice>, frame: &mut Frame, area: Rect) {
    let span = match notice {
        Some(Notice::Sent) => Span::styled("Message sent", Style::default().fg(Color::Green)),
        Some(Notice::Failed(reason)) => Span::styled(
            format!("Could not send: {reason}"),
            Style::default().fg(Color::Red),
        ),
        None => Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(Line::from(span)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(notice: Option<&Notice>, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(notice, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_sent() {
        let output = render_status_bar(Some(&Notice::Sent), 40);
        assert!(output.contains("Message sent"));
    }

    #[test]
    fn renders_failure_reason() {
        let notice = Notice::Failed("message rejected: busy".into());
        let output = render_status_bar(Some(&notice), 60);
        assert!(output.contains("Could not send: message rejected: busy"));
    }

    #[test]
    fn renders_hints_without_notice() {
        let output = render_status_bar(None, 80);
        assert!(output.contains("Ctrl+S: send"));
    }
}
