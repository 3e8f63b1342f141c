//! Text field editor widget (single-line and multi-line).
//!
//! Editing and scrolling are delegated to [`tui_textarea::TextArea`]; this
//! module only draws the labelled frame and the inline error around it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

/// Everything the field editor needs to render one text input.
#[derive(Debug, Clone, Copy)]
pub struct TextFieldProps<'a> {
    pub label: &'a str,
    /// Editor buffer; mirrors the form value for this field.
    pub editor: &'a TextArea<'static>,
    pub focused: bool,
    /// Inline message shown while the field is invalid.
    pub error: Option<&'a str>,
}

/// Returns the border color for a field: red when invalid, yellow when focused.
pub fn border_color(focused: bool, invalid: bool) -> Color {
    if invalid {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Creates an empty editor showing `placeholder` until something is typed.
pub fn new_editor(placeholder: &str) -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.set_cursor_line_style(Style::default());
    if !placeholder.is_empty() {
        editor.set_placeholder_text(placeholder);
        editor.set_placeholder_style(Style::default().fg(Color::DarkGray));
    }
    set_editor_focus(&mut editor, false);
    editor
}

/// Shows the cursor block only on the focused editor.
pub fn set_editor_focus(editor: &mut TextArea<'static>, focused: bool) {
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    editor.set_cursor_style(style);
}

/// Renders a bordered text field with its label, editor and inline error.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_text_field(props: &TextFieldProps, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!("{} *", props.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(props.focused, props.error.is_some())));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(props.editor, inner);

    if let Some(err) = props.error {
        draw_inline_error(err, frame, area);
    }
}

/// Renders an error message over the bottom border of a field's area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_inline_error(message: &str, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let err_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
    frame.render_widget(line, err_area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tui_textarea::CursorMove;

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

    fn render(props: &TextFieldProps, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_text_field(props, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn editor_with(lines: &[&str]) -> TextArea<'static> {
        let mut editor = TextArea::new(lines.iter().map(|l| l.to_string()).collect());
        editor.set_cursor_line_style(Style::default());
        editor
    }

    fn props<'a>(editor: &'a TextArea<'static>) -> TextFieldProps<'a> {
        TextFieldProps {
            label: "Email",
            editor,
            focused: false,
            error: None,
        }
    }

    #[test]
    fn border_color_priority() {
        assert_eq!(border_color(true, true), Color::Red);
        assert_eq!(border_color(false, true), Color::Red);
        assert_eq!(border_color(true, false), Color::Yellow);
        assert_eq!(border_color(false, false), Color::DarkGray);
    }

    #[test]
    fn focus_toggles_cursor_style() {
        let mut editor = new_editor("");
        assert_eq!(editor.cursor_style(), Style::default());
        set_editor_focus(&mut editor, true);
        assert_eq!(
            editor.cursor_style(),
            Style::default().add_modifier(Modifier::REVERSED)
        );
    }

    #[test]
    fn renders_label_and_value() {
        let editor = editor_with(&["j@x.com"]);
        let output = render(&props(&editor), 30, 3);
        assert!(output.contains("Email *"));
        assert!(output.contains("j@x.com"));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let editor = new_editor("message");
        let p = TextFieldProps {
            label: "Message",
            ..props(&editor)
        };
        let output = render(&p, 30, 5);
        assert!(output.contains("message"));
    }

    #[test]
    fn renders_inline_error() {
        let editor = new_editor("");
        let p = TextFieldProps {
            error: Some("Email is required"),
            ..props(&editor)
        };
        let output = render(&p, 30, 3);
        assert!(output.contains("Email is required"));
    }

    #[test]
    fn multi_line_renders_each_line() {
        let editor = editor_with(&["hello", "world"]);
        let p = TextFieldProps {
            label: "Message",
            ..props(&editor)
        };
        let output = render(&p, 30, 5);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].contains("hello"));
        assert!(lines[2].contains("world"));
    }

    #[test]
    fn long_line_scrolls_to_keep_cursor_visible() {
        let mut editor = editor_with(&["abcdefghijklmnopqrstuvwxyz"]);
        editor.move_cursor(CursorMove::End);
        let output = render(&props(&editor), 12, 3);
        let value_row = output.lines().nth(1).unwrap();
        assert!(value_row.contains("xyz"), "tail should be visible: {value_row}");
        assert!(!value_row.contains("abc"), "head should scroll away: {value_row}");
    }

    #[test]
    fn tall_message_scrolls_to_cursor_line() {
        let lines: Vec<String> = (1..=10).map(|i| format!("line{i}")).collect();
        let mut editor = TextArea::new(lines);
        editor.move_cursor(CursorMove::Bottom);
        let output = render(&props(&editor), 20, 5);
        assert!(output.contains("line10"));
        assert!(!output.contains("line1 "));
    }
}
