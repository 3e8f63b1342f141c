use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use log::{debug, info, warn};

use crate::model::{FieldName, FormState, Phase};
use crate::transport::{SubmitError, Transport};

/// Hook invoked with the new state after every change.
pub type Observer = Box<dyn FnMut(&FormState)>;

/// Result of a submit gesture, before the call completes.
#[derive(Debug)]
pub enum SubmitStart {
    /// At least one field failed validation; nothing was sent.
    Invalid,
    /// A submission is already in flight; the gesture was ignored.
    Busy,
    /// Validation passed and the call has started.
    Started(PendingSubmission),
}

/// How a full [`ContactForm::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Busy,
    Succeeded,
    Failed(SubmitError),
}

/// The outstanding transport call of a started submission.
///
/// Hand its output to [`ContactForm::finish`] once it resolves.
pub struct PendingSubmission(BoxFuture<'static, Result<(), SubmitError>>);

impl Future for PendingSubmission {
    type Output = Result<(), SubmitError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.as_mut().poll(cx)
    }
}

#[mutants::skip]
impl fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PendingSubmission")
    }
}

/// A contact form: field state, validation and the submission state machine.
///
/// Callbacks default to no-ops. The default observer logs each new state at
/// debug level.
pub struct ContactForm {
    state: FormState,
    transport: Box<dyn Transport>,
    on_success: Box<dyn FnMut()>,
    on_error: Box<dyn FnMut(SubmitError)>,
    observer: Observer,
}

impl ContactForm {
    /// Mounts a fresh form that submits through `transport`.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            state: FormState::new(),
            transport: Box::new(transport),
            on_success: Box::new(|| {}),
            on_error: Box::new(|_| {}),
            observer: Box::new(log_state),
        }
    }

    /// Sets the callback fired once after a successful submission.
    pub fn on_success(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_success = Box::new(callback);
        self
    }

    /// Sets the callback fired once with the failure of a rejected submission.
    pub fn on_error(mut self, callback: impl FnMut(SubmitError) + 'static) -> Self {
        self.on_error = Box::new(callback);
        self
    }

    /// Replaces the state-change hook.
    pub fn observe(mut self, observer: impl FnMut(&FormState) + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns `true` while a submission call is outstanding.
    pub fn submitting(&self) -> bool {
        self.state.submitting()
    }

    /// Stores a new raw value for `field` and re-checks that field only.
    pub fn update_field(&mut self, field: FieldName, value: Option<String>) {
        self.state.set_value(field, value);
        self.notify();
    }

    /// Validates every field and, if all pass, starts the transport call.
    ///
    /// Ignored while a call is already in flight.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.state.submitting() {
            warn!("submit ignored: a submission is already in flight");
            return SubmitStart::Busy;
        }

        self.state.set_phase(Phase::Validating);
        if !self.state.validate_all() {
            self.state.set_phase(Phase::Idle);
            info!("submit blocked by validation errors");
            self.notify();
            return SubmitStart::Invalid;
        }

        self.state.set_phase(Phase::InFlight);
        info!("submitting contact form");
        self.notify();
        SubmitStart::Started(PendingSubmission(self.transport.send()))
    }

    /// Completes an in-flight submission and fires the matching callback.
    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        if !self.state.submitting() {
            warn!("submission result ignored: nothing in flight");
            return;
        }

        self.state.set_phase(Phase::Idle);
        self.notify();
        match result {
            Ok(()) => {
                info!("contact form sent");
                (self.on_success)();
            }
            Err(e) => {
                warn!("contact form submission failed: {e}");
                (self.on_error)(e);
            }
        }
    }

    /// Runs a whole submission: validate, await the call, then finish.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            SubmitStart::Invalid => return SubmitOutcome::Invalid,
            SubmitStart::Busy => return SubmitOutcome::Busy,
            SubmitStart::Started(pending) => pending,
        };
        let result = pending.await;
        let outcome = match &result {
            Ok(()) => SubmitOutcome::Succeeded,
            Err(e) => SubmitOutcome::Failed(e.clone()),
        };
        self.finish(result);
        outcome
    }

    fn notify(&mut self) {
        (self.observer)(&self.state);
    }
}

fn log_state(state: &FormState) {
    match serde_json::to_string(state) {
        Ok(json) => debug!("form state changed: {json}"),
        Err(e) => warn!("could not serialize form state: {e}"),
    }
}
