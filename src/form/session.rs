// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form session lifecycle.

use crate::notify::Notifier;

use super::engine::FormValidationEngine;
use super::outcome::SubmissionOutcome;
use super::state::{Field, FieldValue, FormState};

/// Where a session is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Validating,
    Accepted,
    Rejected,
}

/// One form session: the live state plus the outcome of the last submit.
///
/// The form stays editable after either outcome; editing returns to
/// [`Phase::Editing`].
#[derive(Debug, Clone)]
pub struct FormSession {
    state: FormState,
    phase: Phase,
    outcome: Option<SubmissionOutcome>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Start a session with all fields empty.
    pub fn new() -> Self {
        Self::with_state(FormState::new())
    }

    /// Start a session with pre-filled values.
    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            phase: Phase::Editing,
            outcome: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Outcome of the last submit, until consumed.
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    /// Change a field value.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.state.set(field, value);
        self.back_to_editing();
    }

    /// Clear a field value.
    pub fn clear(&mut self, field: Field) {
        self.state.clear(field);
        self.back_to_editing();
    }

    /// Run a submit attempt against `engine`.
    pub fn submit<N: Notifier>(&mut self, engine: &FormValidationEngine<N>) -> &SubmissionOutcome {
        self.transition(Phase::Validating);
        let outcome = engine.submit(&self.state);
        self.transition(if outcome.is_accepted() {
            Phase::Accepted
        } else {
            Phase::Rejected
        });
        self.outcome.insert(outcome)
    }

    /// Take the last outcome and return to editing.
    ///
    /// An accepted submission discards the form values; a rejected one keeps
    /// them for correction.
    pub fn take_outcome(&mut self) -> Option<SubmissionOutcome> {
        let outcome = self.outcome.take()?;
        if outcome.is_accepted() {
            self.state = FormState::new();
        }
        self.transition(Phase::Editing);
        Some(outcome)
    }

    fn back_to_editing(&mut self) {
        if self.phase != Phase::Editing {
            self.outcome = None;
            self.transition(Phase::Editing);
        }
    }

    fn transition(&mut self, next: Phase) {
        tracing::debug!(from = ?self.phase, to = ?next, "form phase");
        self.phase = next;
    }
}
