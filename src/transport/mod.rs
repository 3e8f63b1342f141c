//! The asynchronous call a submitted form hands off to.
//!
//! Only [`SimulatedTransport`] ships; a real client for a contact endpoint
//! implements [`Transport`] the same way.

mod error;
mod simulated;

use futures::future::BoxFuture;

pub use error::SubmitError;
pub use simulated::SimulatedTransport;

/// A zero-argument asynchronous submission.
///
/// The returned future is `Send + 'static` so a host can run it on a runtime
/// while the form stays on the UI thread.
pub trait Transport {
    fn send(&self) -> BoxFuture<'static, Result<(), SubmitError>>;
}
