/// Failure reported by a [`Transport`](super::Transport).
///
/// The form passes it to the error callback without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint could not be reached.
    #[error("contact service unavailable: {0}")]
    Unavailable(String),

    /// The endpoint answered but refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),
}
