// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;
use crate::form::{Field, FieldValue, FormState};

lazy_static! {
    /// Letters and spaces only.
    pub static ref FULL_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z ]+$").unwrap();

    /// Exactly ten decimal digits.
    pub static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^[0-9]{10}$").unwrap();

    /// Web-form email syntax: plain or quoted local part, then an IPv4 literal or a
    /// dotted domain whose last label has at least two letters.
    pub static ref EMAIL_REGEX: Regex = Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+\.)+[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}))$"#
    ).unwrap();
}

/// Build the pattern for a phone number of exactly `digits` digits.
pub fn phone_number_regex(digits: usize) -> Result<Regex, regex::Error> {
    if digits == 10 {
        return Ok(PHONE_NUMBER_REGEX.clone());
    }
    Regex::new(&format!(r"^[0-9]{{{}}}$", digits))
}

/// Trait for custom rules.
///
/// Rules see the value under test and the whole form, so a rule may depend on
/// other fields without capturing them.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the value of `field` and return an error if validation fails.
    fn check(
        &self,
        field: Field,
        value: &FieldValue,
        state: &FormState,
    ) -> Result<(), ValidationError>;

    /// Get the rule name.
    fn name(&self) -> &str;

    /// Short description shown next to the field.
    fn hint(&self) -> String {
        self.name().to_string()
    }
}

/// What a rule checks.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// The value must not be empty.
    Required,
    /// The value must match a regular expression.
    Pattern { regex: Regex, hint: String },
    /// The value must be a syntactically valid email address.
    Email,
    /// The value must have at least this many characters.
    MinLength(usize),
    /// The value must equal the current value of another field.
    EqualsField(Field),
    /// The value must be boolean `true`.
    Checked,
    /// An arbitrary predicate over the value and the whole form.
    Custom(Arc<dyn Rule>),
}

impl RuleKind {
    /// Whether the rule is skipped while the value is empty.
    ///
    /// Shape rules stay silent on empty input so the required message wins.
    pub fn skips_empty(&self) -> bool {
        matches!(
            self,
            RuleKind::Pattern { .. }
                | RuleKind::Email
                | RuleKind::MinLength(_)
                | RuleKind::EqualsField(_)
        )
    }

    /// Short description of the rule.
    pub fn hint(&self) -> String {
        match self {
            RuleKind::Required => "required".to_string(),
            RuleKind::Pattern { hint, .. } => hint.clone(),
            RuleKind::Email => "valid email address".to_string(),
            RuleKind::MinLength(min) => format!("at least {} characters", min),
            RuleKind::EqualsField(other) => format!("must match {}", other.label()),
            RuleKind::Checked => "must be checked".to_string(),
            RuleKind::Custom(rule) => rule.hint(),
        }
    }
}

/// A rule paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub kind: RuleKind,
    pub message: String,
}

impl RuleSpec {
    /// Create a new rule.
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Check `value` (the current value of `field`) against this rule.
    pub fn check(
        &self,
        field: Field,
        value: &FieldValue,
        state: &FormState,
    ) -> Result<(), ValidationError> {
        if value.is_empty() && self.kind.skips_empty() {
            return Ok(());
        }

        match &self.kind {
            RuleKind::Required => check_required(field, value, &self.message),
            RuleKind::Pattern { regex, .. } => check_pattern(field, value, regex, &self.message),
            RuleKind::Email => check_pattern(field, value, &EMAIL_REGEX, &self.message),
            RuleKind::MinLength(min) => check_min_length(field, value, *min, &self.message),
            RuleKind::EqualsField(other) => {
                check_equals_field(field, value, *other, state, &self.message)
            }
            RuleKind::Checked => check_checked(field, value, &self.message),
            RuleKind::Custom(rule) => rule.check(field, value, state),
        }
    }
}

/// Check that a value is present.
fn check_required(field: Field, value: &FieldValue, message: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::RequiredFieldMissing {
            field,
            message: message.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Check a value against a pattern.
fn check_pattern(
    field: Field,
    value: &FieldValue,
    regex: &Regex,
    message: &str,
) -> Result<(), ValidationError> {
    if regex.is_match(value.as_text()) {
        Ok(())
    } else {
        Err(ValidationError::ShapeMismatch {
            field,
            message: message.to_string(),
        })
    }
}

/// Check the minimum length in characters.
fn check_min_length(
    field: Field,
    value: &FieldValue,
    min: usize,
    message: &str,
) -> Result<(), ValidationError> {
    if value.as_text().chars().count() >= min {
        Ok(())
    } else {
        Err(ValidationError::ShapeMismatch {
            field,
            message: message.to_string(),
        })
    }
}

/// Check that a value equals the live value of another field.
///
/// Nothing is compared until both fields have a value.
fn check_equals_field(
    field: Field,
    value: &FieldValue,
    other: Field,
    state: &FormState,
    message: &str,
) -> Result<(), ValidationError> {
    let other_value = state.text(other);
    if other_value.is_empty() || other_value == value.as_text() {
        Ok(())
    } else {
        Err(ValidationError::CrossFieldMismatch {
            field,
            other,
            message: message.to_string(),
        })
    }
}

/// Check that a checkbox is ticked.
fn check_checked(field: Field, value: &FieldValue, message: &str) -> Result<(), ValidationError> {
    if value.as_flag() {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted {
            field,
            message: message.to_string(),
        })
    }
}
