// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form fields and the mutable per-session form state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::FormError;

/// A field of the registration form.
///
/// Variants are declared in form order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Number,
    Password,
    ConfirmPassword,
    Terms,
}

impl Field {
    /// Get the field identifier as used in form input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Number => "number",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms => "terms",
        }
    }

    /// Get the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Number => "Phone Number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::Terms => "Terms",
        }
    }

    /// Whether the field holds a boolean rather than text.
    pub fn is_flag(&self) -> bool {
        matches!(self, Field::Terms)
    }

    /// Whether the field holds a secret that must never be echoed.
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Get all fields in declaration order.
    pub fn all() -> &'static [Field] {
        &[
            Field::FullName,
            Field::Email,
            Field::Number,
            Field::Password,
            Field::ConfirmPassword,
            Field::Terms,
        ]
    }
}

impl std::str::FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw value as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as "not provided".
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(_) => false,
        }
    }

    /// The text content, or `""` for flags.
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// The flag content; text is never `true`.
    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Current raw values of one form session.
///
/// Fields that were never touched are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<Field, FieldValue>,
}

impl FormState {
    /// Create an empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style variant of [`FormState::set`].
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Remove a field value.
    pub fn clear(&mut self, field: Field) {
        self.values.remove(&field);
    }

    /// Get the raw value of a field, if any.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Get a field as text; missing fields read as `""`.
    pub fn text(&self, field: Field) -> &str {
        self.values.get(&field).map(|v| v.as_text()).unwrap_or("")
    }

    /// Get a field as a flag; missing fields read as `false`.
    pub fn flag(&self, field: Field) -> bool {
        self.values.get(&field).map(|v| v.as_flag()).unwrap_or(false)
    }

    /// Parse a raw string into the right value kind for `field` and set it.
    pub fn set_parsed(&mut self, field: Field, raw: &str) -> Result<(), FormError> {
        if field.is_flag() {
            let flag = match raw.trim().to_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => true,
                "false" | "no" | "n" | "0" | "" => false,
                _ => {
                    return Err(FormError::InvalidValue {
                        field: field.to_string(),
                        message: format!("expected true or false, got '{}'", raw),
                    })
                }
            };
            self.set(field, flag);
        } else {
            self.set(field, raw);
        }
        Ok(())
    }

    /// Whether no field has been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the set fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str() {
        assert_eq!("fullName".parse::<Field>(), Ok(Field::FullName));
        assert_eq!("confirmPassword".parse::<Field>(), Ok(Field::ConfirmPassword));
        assert!("FullName".parse::<Field>().is_err());
        assert!("nickname".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let mut fields = vec![Field::Terms, Field::Email, Field::FullName];
        fields.sort();
        assert_eq!(fields, vec![Field::FullName, Field::Email, Field::Terms]);
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let state = FormState::new();
        assert_eq!(state.text(Field::Email), "");
        assert!(!state.flag(Field::Terms));
        assert!(state.get(Field::Email).is_none());
    }

    #[test]
    fn test_set_parsed_flag() {
        let mut state = FormState::new();
        state.set_parsed(Field::Terms, "yes").unwrap();
        assert!(state.flag(Field::Terms));
        state.set_parsed(Field::Terms, "false").unwrap();
        assert!(!state.flag(Field::Terms));
        assert!(state.set_parsed(Field::Terms, "maybe").is_err());
    }

    #[test]
    fn test_text_is_never_a_true_flag() {
        let state = FormState::new().with(Field::Terms, "true");
        assert!(!state.flag(Field::Terms));
    }

    #[test]
    fn test_deserialize_from_json() {
        let state: FormState = serde_json::from_str(
            r#"{"fullName": "Jane Doe", "email": "jane@example.com", "terms": true}"#,
        )
        .unwrap();
        assert_eq!(state.text(Field::FullName), "Jane Doe");
        assert!(state.flag(Field::Terms));
        assert_eq!(state.text(Field::Number), "");
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let res: Result<FormState, _> = serde_json::from_str(r#"{"nickname": "jd"}"#);
        assert!(res.is_err());
    }
}
