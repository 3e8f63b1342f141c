//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these because they involve the runtime or the
/// event loop, which screens do not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Validate the form and, if it passes, start the submission call.
    Submit,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
