// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Submission outcomes.

use serde::Serialize;

use crate::error::{FormError, ValidationError};
use crate::rules::{errors_json, FieldErrors, ValidationReport};

use super::state::{Field, FormState};

/// Fully-typed values of an accepted registration.
///
/// Passwords are never serialized or shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupValues {
    pub full_name: String,
    pub email: String,
    pub number: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    pub terms: bool,
}

impl SignupValues {
    /// Read the typed values out of a form state.
    pub fn from_state(state: &FormState) -> Self {
        Self {
            full_name: state.text(Field::FullName).to_string(),
            email: state.text(Field::Email).to_string(),
            number: state.text(Field::Number).to_string(),
            password: state.text(Field::Password).to_string(),
            confirm_password: state.text(Field::ConfirmPassword).to_string(),
            terms: state.flag(Field::Terms),
        }
    }
}

impl std::fmt::Debug for SignupValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupValues")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("number", &self.number)
            .field("password", &"******")
            .field("confirm_password", &"******")
            .field("terms", &self.terms)
            .finish()
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionKind {
    /// One or more fields failed their rules.
    InvalidFields,
    /// The submit-time password re-check failed.
    PasswordMismatch,
}

/// A rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    /// Never empty.
    pub errors: FieldErrors,
}

impl Rejection {
    /// The error recorded for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Fields that need correcting, in declaration order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// The failures as a printable report.
    pub fn report(&self) -> ValidationReport {
        ValidationReport::from(self.errors.clone())
    }
}

impl From<&Rejection> for FormError {
    fn from(rejection: &Rejection) -> Self {
        match rejection.kind {
            RejectionKind::InvalidFields => FormError::Rejected {
                count: rejection.errors.len(),
            },
            RejectionKind::PasswordMismatch => FormError::PasswordMismatch,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { values: SignupValues },
    Rejected(Rejection),
}

impl SubmissionOutcome {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SubmissionOutcome::Rejected(r) => Some(r),
            SubmissionOutcome::Accepted { .. } => None,
        }
    }

    /// Render as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SubmissionOutcome::Accepted { values } => serde_json::json!({
                "outcome": "accepted",
                "values": values,
            }),
            SubmissionOutcome::Rejected(r) => serde_json::json!({
                "outcome": "rejected",
                "reason": r.kind,
                "errors": errors_json(&r.errors),
            }),
        }
    }
}
