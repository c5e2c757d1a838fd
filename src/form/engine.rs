// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form validation and submission.

use crate::config::MessagesConfig;
use crate::error::ValidationError;
use crate::notify::Notifier;
use crate::rules::{FieldErrors, FormSchema, RuleEngine, ValidationReport};

use super::outcome::{Rejection, RejectionKind, SignupValues, SubmissionOutcome};
use super::state::{Field, FormState};

/// Decides the outcome of submit attempts and reports each one to a [`Notifier`].
#[derive(Debug)]
pub struct FormValidationEngine<N> {
    rules: RuleEngine,
    messages: MessagesConfig,
    notifier: N,
}

impl<N: Notifier> FormValidationEngine<N> {
    /// Create an engine for `schema` reporting to `notifier`.
    pub fn new(schema: FormSchema, messages: MessagesConfig, notifier: N) -> Self {
        Self {
            rules: RuleEngine::new(schema),
            messages,
            notifier,
        }
    }

    /// The registration form with default rules and messages.
    pub fn with_defaults(notifier: N) -> Self {
        Self::new(FormSchema::signup(), MessagesConfig::default(), notifier)
    }

    /// The notifier this engine reports to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The schema this engine validates against.
    pub fn schema(&self) -> &FormSchema {
        self.rules.schema()
    }

    /// Validate a single field for live feedback. Never notifies.
    pub fn validate_field(&self, field: Field, state: &FormState) -> Result<(), ValidationError> {
        self.rules.validate_field(field, state)
    }

    /// Validate every field. Never notifies.
    pub fn validate_all(&self, state: &FormState) -> ValidationReport {
        self.rules.validate_all(state)
    }

    /// Submit-time re-check that the two password entries agree.
    ///
    /// Runs independently of the confirm-password field rule.
    pub fn check_password_pair(&self, state: &FormState) -> Result<(), ValidationError> {
        if state.text(Field::Password) == state.text(Field::ConfirmPassword) {
            Ok(())
        } else {
            Err(ValidationError::CrossFieldMismatch {
                field: Field::ConfirmPassword,
                other: Field::Password,
                message: self.messages.password_mismatch.clone(),
            })
        }
    }

    /// Run one submit attempt.
    ///
    /// Exactly one notification is sent per call.
    pub fn submit(&self, state: &FormState) -> SubmissionOutcome {
        let report = self.rules.validate_all(state);
        if !report.is_valid() {
            tracing::warn!(
                invalid = report.error_count(),
                "Submission rejected: invalid fields"
            );
            self.notifier.notify_error(&self.messages.failure);
            return SubmissionOutcome::Rejected(Rejection {
                kind: RejectionKind::InvalidFields,
                errors: report.into_errors(),
            });
        }

        if let Err(mismatch) = self.check_password_pair(state) {
            tracing::warn!("Submission rejected: passwords do not match");
            self.notifier.notify_error(&self.messages.password_mismatch);
            let mut errors = FieldErrors::new();
            errors.insert(mismatch.field(), mismatch);
            return SubmissionOutcome::Rejected(Rejection {
                kind: RejectionKind::PasswordMismatch,
                errors,
            });
        }

        let values = SignupValues::from_state(state);
        tracing::info!(email = %values.email, "Submission accepted");
        self.notifier.notify_success(&self.messages.success);
        SubmissionOutcome::Accepted { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemoryNotifier, Notification};
    use crate::rules::FieldSpec;

    fn valid_state() -> FormState {
        FormState::new()
            .with(Field::FullName, "Jane Doe")
            .with(Field::Email, "jane@example.com")
            .with(Field::Number, "1234567890")
            .with(Field::Password, "secret1")
            .with(Field::ConfirmPassword, "secret1")
            .with(Field::Terms, true)
    }

    fn engine() -> FormValidationEngine<MemoryNotifier> {
        FormValidationEngine::with_defaults(MemoryNotifier::new())
    }

    #[test]
    fn test_submit_accepts_valid_state() {
        let engine = engine();
        let state = valid_state();
        let outcome = engine.submit(&state);

        match outcome {
            SubmissionOutcome::Accepted { values } => {
                assert_eq!(values, SignupValues::from_state(&state));
                assert_eq!(values.full_name, "Jane Doe");
                assert!(values.terms);
            }
            other => panic!("Expected Accepted, got {:?}", other),
        }
        assert_eq!(
            engine.notifier().notifications(),
            vec![Notification::Success(
                "Signup Successful! Welcome to our platform!".to_string()
            )]
        );
    }

    #[test]
    fn test_submit_reports_every_missing_field() {
        let engine = engine();
        let expected = [
            (Field::FullName, "Full Name is required"),
            (Field::Email, "Email is required"),
            (Field::Number, "Phone number is required"),
            (Field::Password, "Password is required"),
            (Field::ConfirmPassword, "Confirm your password"),
            (Field::Terms, "You must agree to the terms and conditions"),
        ];
        for (field, message) in expected {
            let mut state = valid_state();
            state.clear(field);
            let outcome = engine.submit(&state);
            let rejection = outcome.rejection().expect("should be rejected");
            assert_eq!(rejection.kind, RejectionKind::InvalidFields);
            assert_eq!(rejection.fields(), vec![field]);
            assert_eq!(rejection.error(field).unwrap().message(), message);
        }
    }

    #[test]
    fn test_submit_collects_all_failures() {
        let engine = engine();
        let state = FormState::new()
            .with(Field::FullName, "Jane123")
            .with(Field::Email, "jane")
            .with(Field::Number, "12345");
        let outcome = engine.submit(&state);
        let rejection = outcome.rejection().unwrap();

        assert_eq!(rejection.fields(), Field::all());
        assert_eq!(
            rejection.error(Field::FullName).unwrap().message(),
            "Only alphabets are allowed"
        );
        assert_eq!(
            rejection.error(Field::Email).unwrap().message(),
            "Enter a valid email"
        );
        assert_eq!(
            rejection.error(Field::Password).unwrap().message(),
            "Password is required"
        );
        assert_eq!(
            rejection.error(Field::ConfirmPassword).unwrap().message(),
            "Confirm your password"
        );
        assert_eq!(
            engine.notifier().notifications(),
            vec![Notification::Error(
                "Please correct the errors in the form.".to_string()
            )]
        );
    }

    #[test]
    fn test_submit_password_mismatch() {
        let engine = engine();
        let state = valid_state().with(Field::ConfirmPassword, "secret2");
        let outcome = engine.submit(&state);
        let rejection = outcome.rejection().unwrap();

        assert_eq!(rejection.fields(), vec![Field::ConfirmPassword]);
        assert!(matches!(
            rejection.error(Field::ConfirmPassword),
            Some(ValidationError::CrossFieldMismatch { message, .. }) if message == "Passwords do not match!"
        ));
    }

    #[test]
    fn test_submit_terms_not_accepted() {
        let engine = engine();
        let state = valid_state().with(Field::Terms, false);
        let outcome = engine.submit(&state);
        let rejection = outcome.rejection().unwrap();
        assert_eq!(
            rejection.error(Field::Terms).unwrap().message(),
            "You must agree to the terms and conditions"
        );
    }

    #[test]
    fn test_submit_time_recheck_without_field_rule() {
        // Confirm-password only declares "required", so only the submit re-check can
        // catch the mismatch.
        let mut fields: Vec<FieldSpec> = FormSchema::signup()
            .fields()
            .iter()
            .filter(|s| s.field != Field::ConfirmPassword)
            .cloned()
            .collect();
        fields.insert(
            4,
            FieldSpec::new(Field::ConfirmPassword).require("Confirm your password"),
        );
        let engine = FormValidationEngine::new(
            FormSchema::new(fields),
            MessagesConfig::default(),
            MemoryNotifier::new(),
        );

        let state = valid_state().with(Field::ConfirmPassword, "secret2");
        assert!(engine.validate_all(&state).is_valid());

        let outcome = engine.submit(&state);
        let rejection = outcome.rejection().unwrap();
        assert_eq!(rejection.kind, RejectionKind::PasswordMismatch);
        assert_eq!(rejection.fields(), vec![Field::ConfirmPassword]);
        assert_eq!(
            engine.notifier().notifications(),
            vec![Notification::Error("Passwords do not match!".to_string())]
        );
    }

    #[test]
    fn test_check_password_pair() {
        let engine = engine();
        assert!(engine.check_password_pair(&valid_state()).is_ok());
        let err = engine
            .check_password_pair(&valid_state().with(Field::Password, "other1"))
            .unwrap_err();
        assert_eq!(err.field(), Field::ConfirmPassword);
        assert_eq!(err.code(), "cross-field-mismatch");
    }

    #[test]
    fn test_submit_is_idempotent() {
        let engine = engine();
        for state in [valid_state(), valid_state().with(Field::Email, "bad")] {
            let first = engine.submit(&state);
            let second = engine.submit(&state);
            assert_eq!(first, second);
        }
        assert_eq!(engine.notifier().notifications().len(), 4);
    }

    #[test]
    fn test_validate_field_does_not_notify() {
        let engine = engine();
        let _ = engine.validate_field(Field::Email, &FormState::new());
        let _ = engine.validate_all(&FormState::new());
        assert!(engine.notifier().notifications().is_empty());
    }

    #[test]
    fn test_custom_messages() {
        let messages = MessagesConfig {
            success: "Welcome aboard".to_string(),
            ..MessagesConfig::default()
        };
        let engine =
            FormValidationEngine::new(FormSchema::signup(), messages, MemoryNotifier::new());
        engine.submit(&valid_state());
        assert_eq!(
            engine.notifier().last(),
            Some(Notification::Success("Welcome aboard".to_string()))
        );
    }
}
