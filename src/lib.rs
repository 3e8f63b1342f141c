//! A contact form with required-field validation and a simulated
//! asynchronous submission, hosted in a terminal UI.

pub mod config;
pub mod form;
pub mod logger;
pub mod model;
pub mod transport;
pub mod tui;
