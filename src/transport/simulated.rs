use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{SubmitError, Transport};

/// Default delay before the simulated call resolves.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Stand-in for a contact endpoint: resolves after a fixed delay.
///
/// With `fail` set the call rejects after the same delay instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    delay: Duration,
    fail: bool,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl SimulatedTransport {
    /// Creates a transport that succeeds after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Creates a transport that rejects after `delay`.
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Transport for SimulatedTransport {
    fn send(&self) -> BoxFuture<'static, Result<(), SubmitError>> {
        let Self { delay, fail } = *self;
        async move {
            tokio::time::sleep(delay).await;
            if fail {
                Err(SubmitError::Rejected("simulated failure".into()))
            } else {
                Ok(())
            }
        }
        .boxed()
    }
}
