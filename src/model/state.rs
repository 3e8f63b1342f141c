use std::collections::BTreeMap;

use serde::Serialize;

use super::field::FieldName;
use super::validation::is_invalid;

/// Where the form is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// Waiting for edits or a submit gesture.
    #[default]
    Idle,
    /// Re-checking every field before a submission.
    Validating,
    /// A submission call is outstanding.
    InFlight,
}

/// Field values, per-field error flags and the submission phase of one form.
///
/// Every field is always present in both maps; `None` means untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    values: BTreeMap<FieldName, Option<String>>,
    errors: BTreeMap<FieldName, bool>,
    phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates a fresh state: every value untouched, no errors, idle.
    pub fn new() -> Self {
        Self {
            values: FieldName::all().iter().map(|f| (*f, None)).collect(),
            errors: FieldName::all().iter().map(|f| (*f, false)).collect(),
            phase: Phase::Idle,
        }
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    /// Returns `true` if `field` is currently flagged invalid.
    pub fn error(&self, field: FieldName) -> bool {
        self.errors.get(&field).copied().unwrap_or(false)
    }

    /// Returns `true` if any field is flagged invalid.
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| *e)
    }

    pub fn values(&self) -> &BTreeMap<FieldName, Option<String>> {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<FieldName, bool> {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a submission call is outstanding.
    pub fn submitting(&self) -> bool {
        self.phase == Phase::InFlight
    }

    /// Stores `value` for `field` and recomputes that field's error flag only.
    pub fn set_value(&mut self, field: FieldName, value: Option<String>) {
        let invalid = is_invalid(field, value.as_deref());
        self.values.insert(field, value);
        self.errors.insert(field, invalid);
    }

    /// Recomputes the error flag of every field from its current value.
    ///
    /// Returns `true` if all fields pass.
    pub fn validate_all(&mut self) -> bool {
        let recomputed: BTreeMap<FieldName, bool> = self
            .values
            .iter()
            .map(|(field, value)| (*field, is_invalid(*field, value.as_deref())))
            .collect();
        self.errors = recomputed;
        !self.has_errors()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
