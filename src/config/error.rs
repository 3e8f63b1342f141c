use std::path::PathBuf;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`Config`](super::Config).
    #[error("invalid config file {path}: {source}")]
    Json {
        /// The file that failed to parse.
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The platform does not provide a config directory.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The category list is empty, so the form could never be submitted.
    #[error("config must list at least one category")]
    NoCategories,

    /// A category appears more than once, so the selector could not cycle past it.
    #[error("duplicate category in config: {0}")]
    DuplicateCategory(String),
}
