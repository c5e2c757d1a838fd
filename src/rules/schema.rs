// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Declarative field specifications.
//!
//! The same table drives validation and the rule hints shown to the user.

use std::sync::Arc;

use regex::Regex;

use crate::config::RulesConfig;
use crate::error::{ConfigError, Result, SignupError, ValidationError};
use crate::form::{Field, FieldValue, FormState};

use super::builtin::{
    phone_number_regex, Rule, RuleKind, RuleSpec, FULL_NAME_REGEX, PHONE_NUMBER_REGEX,
};

static EMPTY_VALUE: FieldValue = FieldValue::Text(String::new());

/// Rules for a single field, evaluated in order.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field: Field,
    pub rules: Vec<RuleSpec>,
}

impl FieldSpec {
    /// Create a field with no rules.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Add a rule.
    pub fn rule(mut self, kind: RuleKind, message: impl Into<String>) -> Self {
        self.rules.push(RuleSpec::new(kind, message));
        self
    }

    /// Require a non-empty value.
    pub fn require(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Required, message)
    }

    /// Require the value to match `regex`.
    pub fn pattern(self, regex: Regex, hint: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(
            RuleKind::Pattern {
                regex,
                hint: hint.into(),
            },
            message,
        )
    }

    /// Require a valid email address.
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Email, message)
    }

    /// Require at least `min` characters.
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(RuleKind::MinLength(min), message)
    }

    /// Require the value to equal another field.
    pub fn equals(self, other: Field, message: impl Into<String>) -> Self {
        self.rule(RuleKind::EqualsField(other), message)
    }

    /// Require a ticked checkbox.
    pub fn checked(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Checked, message)
    }

    /// Add a custom rule.
    pub fn custom(self, rule: Arc<dyn Rule>) -> Self {
        let hint = rule.hint();
        self.rule(RuleKind::Custom(rule), hint)
    }

    /// Whether a value must be provided.
    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|r| matches!(r.kind, RuleKind::Required | RuleKind::Checked))
    }

    /// Validate this field against the current form state.
    ///
    /// The first failing rule wins.
    pub fn validate(&self, state: &FormState) -> std::result::Result<(), ValidationError> {
        let value = state.get(self.field).unwrap_or(&EMPTY_VALUE);
        for rule in &self.rules {
            rule.check(self.field, value, state)?;
        }
        Ok(())
    }

    /// Hints for every rule of this field.
    pub fn hints(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.kind.hint()).collect()
    }
}

/// The ordered set of field specifications for a form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Create a schema from an explicit list of fields.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The registration form with the default limits.
    pub fn signup() -> Self {
        Self::build(PHONE_NUMBER_REGEX.clone(), 10, PASSWORD_MIN_LENGTH)
    }

    /// The registration form with limits taken from configuration.
    pub fn from_config(rules: &RulesConfig) -> Result<Self> {
        if rules.min_password_length == 0 {
            return Err(SignupError::Config(ConfigError::InvalidValue {
                key: "rules.min_password_length".to_string(),
                message: "must be at least 1".to_string(),
            }));
        }
        if rules.phone_digits == 0 {
            return Err(SignupError::Config(ConfigError::InvalidValue {
                key: "rules.phone_digits".to_string(),
                message: "must be at least 1".to_string(),
            }));
        }

        let number = phone_number_regex(rules.phone_digits).map_err(|e| {
            SignupError::Config(ConfigError::InvalidValue {
                key: "rules.phone_digits".to_string(),
                message: e.to_string(),
            })
        })?;

        Ok(Self::build(
            number,
            rules.phone_digits,
            rules.min_password_length,
        ))
    }

    fn build(number: Regex, digits: usize, min_password: usize) -> Self {
        Self::new(vec![
            FieldSpec::new(Field::FullName)
                .require("Full Name is required")
                .pattern(
                    FULL_NAME_REGEX.clone(),
                    "letters and spaces only",
                    "Only alphabets are allowed",
                ),
            FieldSpec::new(Field::Email)
                .require("Email is required")
                .email("Enter a valid email"),
            FieldSpec::new(Field::Number)
                .require("Phone number is required")
                .pattern(
                    number,
                    format!("exactly {} digits", digits),
                    format!("Enter a valid {}-digit number", digits),
                ),
            FieldSpec::new(Field::Password)
                .require("Password is required")
                .min_length(
                    min_password,
                    format!("Password must be at least {} characters", min_password),
                ),
            FieldSpec::new(Field::ConfirmPassword)
                .require("Confirm your password")
                .equals(Field::Password, "Passwords do not match!"),
            FieldSpec::new(Field::Terms).checked("You must agree to the terms and conditions"),
        ])
    }

    /// All field specifications in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up the specification of a field.
    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields.iter().find(|s| s.field == field)
    }

    /// Fields whose rules compare against `field` and must be re-checked when it changes.
    pub fn dependents(&self, field: Field) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|s| {
                s.rules
                    .iter()
                    .any(|r| matches!(r.kind, RuleKind::EqualsField(other) if other == field))
            })
            .map(|s| s.field)
            .collect()
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::signup()
    }
}

/// Default minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_declaration_order() {
        let schema = FormSchema::signup();
        let order: Vec<Field> = schema.fields().iter().map(|s| s.field).collect();
        assert_eq!(order, Field::all());
    }

    #[test]
    fn test_every_signup_field_is_required() {
        let schema = FormSchema::signup();
        assert!(schema.fields().iter().all(|s| s.is_required()));
    }

    #[test]
    fn test_required_message_wins_on_empty() {
        let schema = FormSchema::signup();
        let err = schema
            .spec(Field::Number)
            .unwrap()
            .validate(&FormState::new())
            .unwrap_err();
        assert_eq!(err.message(), "Phone number is required");
    }

    #[test]
    fn test_dependents() {
        let schema = FormSchema::signup();
        assert_eq!(schema.dependents(Field::Password), vec![Field::ConfirmPassword]);
        assert!(schema.dependents(Field::Email).is_empty());
    }

    #[test]
    fn test_from_config_changes_limits() {
        let rules = RulesConfig {
            min_password_length: 8,
            phone_digits: 11,
        };
        let schema = FormSchema::from_config(&rules).unwrap();

        let state = FormState::new()
            .with(Field::Password, "1234567")
            .with(Field::Number, "12345678901");
        let err = schema
            .spec(Field::Password)
            .unwrap()
            .validate(&state)
            .unwrap_err();
        assert_eq!(err.message(), "Password must be at least 8 characters");
        assert!(schema.spec(Field::Number).unwrap().validate(&state).is_ok());
    }

    #[test]
    fn test_from_config_rejects_zero_limits() {
        let rules = RulesConfig {
            min_password_length: 0,
            phone_digits: 10,
        };
        assert!(FormSchema::from_config(&rules).is_err());
    }

    #[test]
    fn test_hints() {
        let schema = FormSchema::signup();
        let hints = schema.spec(Field::ConfirmPassword).unwrap().hints();
        assert_eq!(hints, vec!["required", "must match Password"]);
        let hints = schema.spec(Field::Number).unwrap().hints();
        assert_eq!(hints, vec!["required", "exactly 10 digits"]);
    }
}
