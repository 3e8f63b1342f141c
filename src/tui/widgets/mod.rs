//! Reusable TUI widgets.

pub mod button;
pub mod field;
pub mod select;
pub mod status_bar;

pub use button::{draw_submit_button, submit_label};
pub use field::{TextFieldProps, draw_text_field, new_editor, set_editor_focus};
pub use select::{SelectProps, cycle_choice, draw_select};
pub use status_bar::{Notice, draw_status_bar};
