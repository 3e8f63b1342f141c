use crate::config::ConfigError;
use crate::logger::LoggerError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The file logger could not be installed.
    #[error("Logger error: {0}")]
    Logger(#[from] LoggerError),
}
