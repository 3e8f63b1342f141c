//! Contact screen: the five form inputs and the submit button.

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::form::ContactForm;
use crate::model::{FieldKind, FieldName};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{
    SelectProps, TextFieldProps, cycle_choice, draw_select, draw_submit_button, draw_text_field,
    new_editor, set_editor_focus,
};

/// What currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
}

static FOCUS_ORDER: &[Focus] = &[
    Focus::Field(FieldName::LastName),
    Focus::Field(FieldName::FirstName),
    Focus::Field(FieldName::Category),
    Focus::Field(FieldName::Email),
    Focus::Field(FieldName::Message),
    Focus::SubmitButton,
];

/// State for the contact screen.
///
/// Each text field has an editor buffer; every edit that changes it is sent
/// to the form as the field's new value.
pub struct ContactState {
    form: ContactForm,
    categories: Vec<String>,
    editors: BTreeMap<FieldName, TextArea<'static>>,
    focus: Focus,
}

impl ContactState {
    /// Wraps a freshly mounted form; focus starts on the first field.
    pub fn new(form: ContactForm, categories: Vec<String>) -> Self {
        let editors = FieldName::all()
            .iter()
            .filter(|f| f.kind() != FieldKind::Category)
            .map(|f| (*f, new_editor(f.placeholder())))
            .collect();
        let mut state = Self {
            form,
            categories,
            editors,
            focus: FOCUS_ORDER[0],
        };
        state.sync_editor_focus();
        state
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the editor buffer of a text field, or `None` for the category.
    pub fn editor(&self, field: FieldName) -> Option<&TextArea<'static>> {
        self.editors.get(&field)
    }

    fn move_focus(&mut self, forward: bool) {
        let pos = FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        let len = FOCUS_ORDER.len();
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.focus = FOCUS_ORDER[next];
        self.sync_editor_focus();
    }

    fn sync_editor_focus(&mut self) {
        for (field, editor) in &mut self.editors {
            set_editor_focus(editor, self.focus == Focus::Field(*field));
        }
    }

    /// Feeds a key to the field's editor and reports the text if it changed.
    fn edit_text(&mut self, field: FieldName, key: KeyEvent) {
        let Some(editor) = self.editors.get_mut(&field) else {
            return;
        };
        if editor.input(altgr_as_plain(key)) {
            let text = editor.lines().join("\n");
            self.form.update_field(field, Some(text));
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let current = self.form.state().value(FieldName::Category);
        let next = cycle_choice(&self.categories, true, current, forward).map(str::to_string);
        self.form.update_field(FieldName::Category, next);
    }

    fn handle_field_key(&mut self, field: FieldName, key: KeyEvent) -> Action {
        match field.kind() {
            FieldKind::Category => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_category(true),
                KeyCode::Left => self.cycle_category(false),
                KeyCode::Enter => self.move_focus(true),
                _ => {}
            },
            FieldKind::SingleLine if is_newline(key) => self.move_focus(true),
            FieldKind::SingleLine | FieldKind::MultiLine => self.edit_text(field, key),
        }
        Action::None
    }
}

/// Returns `true` for the keys the editor would turn into a line break.
fn is_newline(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
        || (key.code == KeyCode::Char('m') && key.modifiers == KeyModifiers::CONTROL)
}

/// Strips Ctrl+Alt from characters, which is how AltGr arrives on Windows.
fn altgr_as_plain(key: KeyEvent) -> KeyEvent {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(altgr) => KeyEvent {
            modifiers: key.modifiers.difference(altgr),
            ..key
        },
        _ => key,
    }
}

impl ScreenState for ContactState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers == KeyModifiers::CONTROL {
            match key.code {
                KeyCode::Char('s') => return Action::Submit,
                KeyCode::Char('c') => return Action::Quit,
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Tab => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab => {
                self.move_focus(false);
                Action::None
            }
            _ => match self.focus {
                Focus::Field(field) => self.handle_field_key(field, key),
                Focus::SubmitButton => match key.code {
                    // A disabled button swallows the press.
                    KeyCode::Enter | KeyCode::Char(' ') if !self.form.submitting() => {
                        Action::Submit
                    }
                    _ => Action::None,
                },
            },
        }
    }
}

/// Renders the contact screen in two columns: details on the left, message on the right.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_contact(state: &ContactState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);
    let [last, first, category, email, button, _rest] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(left);

    let form_state = state.form().state();
    let error_for = |field: FieldName| form_state.error(field).then(|| field.error_message());
    let focused = |field: FieldName| state.focus() == Focus::Field(field);

    for (field, rect) in [
        (FieldName::LastName, last),
        (FieldName::FirstName, first),
        (FieldName::Email, email),
        (FieldName::Message, right),
    ] {
        let Some(editor) = state.editor(field) else {
            continue;
        };
        let props = TextFieldProps {
            label: field.label(),
            editor,
            focused: focused(field),
            error: error_for(field),
        };
        draw_text_field(&props, frame, rect);
    }

    let select = SelectProps {
        label: FieldName::Category.label(),
        options: state.categories(),
        value: form_state.value(FieldName::Category),
        allow_empty_title: true,
        focused: focused(FieldName::Category),
        error: error_for(FieldName::Category),
    };
    draw_select(&select, frame, category);

    draw_submit_button(
        form_state.submitting(),
        state.focus() == Focus::SubmitButton,
        frame,
        button,
    );
}
