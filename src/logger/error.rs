/// Errors that can occur while installing the file logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file or its directory could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// Another logger was installed first.
    #[error("logger already installed: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
