//! The contact form controller: field updates and the submission state machine.

mod controller;

pub use controller::{ContactForm, Observer, PendingSubmission, SubmitOutcome, SubmitStart};
