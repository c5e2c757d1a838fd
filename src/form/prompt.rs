// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive registration prompt.

use std::collections::{BTreeSet, VecDeque};

use crate::error::{Result, SignupError, ValidationError};
use crate::notify::Notifier;
use crate::rules::format_error;

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

use super::engine::FormValidationEngine;
use super::outcome::{Rejection, RejectionKind, SubmissionOutcome};
use super::preview::SignupPreview;
use super::session::FormSession;
use super::state::{Field, FieldValue, FormState};

/// Interactive registration form.
///
/// Each answer is validated as soon as it is entered; submission goes through the
/// engine and may be repeated after a rejection.
pub struct SignupPrompt<'a, N> {
    engine: &'a FormValidationEngine<N>,
    session: FormSession,
    show_hints: bool,
}

impl<'a, N: Notifier> SignupPrompt<'a, N> {
    /// Create a new prompt backed by `engine`.
    pub fn new(engine: &'a FormValidationEngine<N>) -> Self {
        Self {
            engine,
            session: FormSession::new(),
            show_hints: true,
        }
    }

    /// Pre-fill a field.
    pub fn with_value(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.session.set(field, value);
        self
    }

    /// Pre-fill a field if a value was given.
    pub fn with_optional(self, field: Field, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.with_value(field, v),
            _ => self,
        }
    }

    /// Show or hide rule hints next to prompts.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Current form values.
    pub fn state(&self) -> &FormState {
        self.session.state()
    }

    /// Run the interactive flow until the user accepts an outcome.
    pub fn run_interactive(mut self, skip_confirm: bool) -> Result<SubmissionOutcome> {
        let term = Term::stderr();
        let theme = ColorfulTheme::default();

        term.write_line(&format!("\n{}\n", style("Create Your Account").bold()))?;

        // First pass: ask for everything not already valid
        let pending: Vec<Field> = self
            .engine
            .schema()
            .fields()
            .iter()
            .map(|s| s.field)
            .filter(|f| {
                self.session.state().get(*f).is_none()
                    || self.engine.validate_field(*f, self.session.state()).is_err()
            })
            .collect();

        let mut fields = pending;
        loop {
            self.prompt_fields(&term, &theme, fields)?;

            term.write_line("")?;
            SignupPreview::new(self.session.state()).print();

            if !skip_confirm {
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt("Sign up?")
                    .default(true)
                    .interact()?;

                if !confirmed {
                    return Err(SignupError::Cancelled);
                }
            }

            let outcome = self.session.submit(self.engine).clone();
            let rejection = match outcome {
                SubmissionOutcome::Accepted { .. } => {
                    self.session.take_outcome();
                    return Ok(outcome);
                }
                SubmissionOutcome::Rejected(ref rejection) => rejection.clone(),
            };

            rejection.report().write_text(&term)?;

            let retry = Confirm::with_theme(&theme)
                .with_prompt("Correct the errors and try again?")
                .default(true)
                .interact()?;

            self.session.take_outcome();
            if !retry {
                return Ok(outcome);
            }

            fields = self.retry_fields(&rejection);
        }
    }

    /// Prompt for `fields` in order, queueing any field an answer invalidates.
    fn prompt_fields(
        &mut self,
        term: &Term,
        theme: &ColorfulTheme,
        fields: Vec<Field>,
    ) -> Result<()> {
        let mut queue: VecDeque<Field> = fields.into();
        while let Some(field) = queue.pop_front() {
            self.prompt_field(term, theme, field)?;
            for next in self.follow_up(field) {
                if !queue.contains(&next) {
                    queue.push_back(next);
                }
            }
        }
        Ok(())
    }

    /// Fields to ask again after `field` was answered.
    ///
    /// A mismatch against another field means either entry may be the typo, so
    /// both are asked again. Fields that compare against `field` are re-asked if
    /// the new answer broke them.
    fn follow_up(&self, field: Field) -> Vec<Field> {
        let state = self.session.state();

        if let Err(ValidationError::CrossFieldMismatch { other, .. }) =
            self.engine.validate_field(field, state)
        {
            return vec![other, field];
        }

        self.engine
            .schema()
            .dependents(field)
            .into_iter()
            .filter(|f| state.get(*f).is_some() && self.engine.validate_field(*f, state).is_err())
            .collect()
    }

    /// Fields to prompt for after a rejected submission, in form order.
    fn retry_fields(&self, rejection: &Rejection) -> Vec<Field> {
        let mut fields: BTreeSet<Field> = rejection.fields().into_iter().collect();

        for error in rejection.errors.values() {
            if let ValidationError::CrossFieldMismatch { other, .. } = error {
                fields.insert(*other);
            }
        }
        if rejection.kind == RejectionKind::PasswordMismatch {
            fields.insert(Field::Password);
            fields.insert(Field::ConfirmPassword);
        }
        for field in fields.clone() {
            fields.extend(self.engine.schema().dependents(field));
        }

        fields.into_iter().collect()
    }

    /// Submit the pre-filled values without prompting.
    pub fn submit_non_interactive(mut self) -> SubmissionOutcome {
        self.session.submit(self.engine).clone()
    }

    /// Prompt for one field.
    fn prompt_field(&mut self, term: &Term, theme: &ColorfulTheme, field: Field) -> Result<()> {
        if let Some(Err(error)) = self
            .session
            .state()
            .get(field)
            .map(|_| self.engine.validate_field(field, self.session.state()))
        {
            term.write_line(&format!("  {}", format_error(&error)))?;
        }

        if field.is_flag() {
            self.prompt_terms(term, theme)
        } else if field.is_secret() {
            self.prompt_secret(term, theme, field)
        } else {
            self.prompt_text(theme, field)
        }
    }

    /// Prompt for a plain text field, validating as the user types.
    fn prompt_text(&mut self, theme: &ColorfulTheme, field: Field) -> Result<()> {
        let engine = self.engine;
        let base = self.session.state().clone();

        let value: String = Input::with_theme(theme)
            .with_prompt(self.prompt_label(field))
            .with_initial_text(base.text(field))
            .allow_empty(true)
            .validate_with(|input: &String| {
                let candidate = base.clone().with(field, input.as_str());
                match engine.validate_field(field, &candidate) {
                    // Left to follow_up: the other field may be the wrong one
                    Err(ValidationError::CrossFieldMismatch { .. }) => Ok(()),
                    result => result,
                }
            })
            .interact_text()?;

        self.session.set(field, value);
        Ok(())
    }

    /// Prompt for a password field; re-asks until the entry is valid on its own.
    ///
    /// A mismatch with another field is kept and left to [`Self::follow_up`].
    fn prompt_secret(&mut self, term: &Term, theme: &ColorfulTheme, field: Field) -> Result<()> {
        loop {
            let value = Password::with_theme(theme)
                .with_prompt(self.prompt_label(field))
                .allow_empty_password(true)
                .interact()?;

            let candidate = self.session.state().clone().with(field, value.as_str());
            match self.engine.validate_field(field, &candidate) {
                Ok(()) => {
                    self.session.set(field, value);
                    return Ok(());
                }
                Err(error @ ValidationError::CrossFieldMismatch { .. }) => {
                    term.write_line(&format!("  {}", format_error(&error)))?;
                    self.session.set(field, value);
                    return Ok(());
                }
                Err(error) => term.write_line(&format!("  {}", format_error(&error)))?,
            }
        }
    }

    /// Ask for terms acceptance.
    fn prompt_terms(&mut self, term: &Term, theme: &ColorfulTheme) -> Result<()> {
        let accepted = Confirm::with_theme(theme)
            .with_prompt("I agree to the terms and conditions")
            .default(false)
            .interact()?;

        self.session.set(Field::Terms, accepted);
        if let Err(error) = self.engine.validate_field(Field::Terms, self.session.state()) {
            term.write_line(&format!("  {}", format_error(&error)))?;
        }
        Ok(())
    }

    fn prompt_label(&self, field: Field) -> String {
        let hints = self
            .engine
            .schema()
            .spec(field)
            .map(|s| s.hints())
            .unwrap_or_default();

        if self.show_hints && !hints.is_empty() {
            format!("{} {}", field.label(), style(format!("({})", hints.join(", "))).dim())
        } else {
            field.label().to_string()
        }
    }
}
