//! TUI screen implementations.

pub mod contact;

pub use contact::{ContactState, Focus, draw_contact};
