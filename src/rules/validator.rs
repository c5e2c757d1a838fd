// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation report types.

use std::collections::BTreeMap;

use crate::cli::args::OutputFormat;
use crate::error::ValidationError;
use crate::form::Field;
use console::{style, Term};

/// Failing fields mapped to their error, in declaration order.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

/// Format a single field error for terminal output.
pub fn format_error(error: &ValidationError) -> String {
    format!(
        "{} {} {}",
        style("✗").red().bold(),
        style(error.field().label()).red(),
        error.message()
    )
}

/// Render field errors as JSON.
pub fn errors_json(errors: &FieldErrors) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .iter()
        .map(|(field, e)| {
            (
                field.as_str().to_string(),
                serde_json::json!({
                    "code": e.code(),
                    "message": e.message(),
                }),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: FieldErrors,
}

impl ValidationReport {
    /// Create an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field failure.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// All failures.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Take ownership of the failures.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        if let Err(e) = self.write_text(&Term::stdout()) {
            tracing::warn!("Failed to print validation report: {}", e);
        }
    }

    /// Write the report as text lines to `term`.
    pub fn write_text(&self, term: &Term) -> std::io::Result<()> {
        if self.is_valid() {
            return term.write_line(&format!("{} {}", style("✓").green().bold(), self.summary()));
        }

        for error in self.errors.values() {
            term.write_line(&format!("  {}", format_error(error)))?;
        }
        Ok(())
    }

    /// Render as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "errors": errors_json(&self.errors),
        })
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            "Valid".to_string()
        } else {
            format!("Invalid ({} fields)", self.errors.len())
        }
    }
}

impl From<FieldErrors> for ValidationReport {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(error: ValidationError) -> Self {
        let mut report = Self::new();
        report.push(error);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(field: Field, message: &str) -> ValidationError {
        ValidationError::RequiredFieldMissing {
            field,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_report_valid() {
        let report = ValidationReport::new();
        assert!(report.is_valid());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_report_keeps_declaration_order() {
        let mut report = ValidationReport::new();
        report.push(required(Field::Terms, "You must agree"));
        report.push(required(Field::FullName, "Full Name is required"));

        let fields: Vec<Field> = report.errors().keys().copied().collect();
        assert_eq!(fields, vec![Field::FullName, Field::Terms]);
        assert_eq!(report.summary(), "Invalid (2 fields)");
    }

    #[test]
    fn test_format_error() {
        let formatted = format_error(&required(Field::Email, "Email is required"));
        assert!(formatted.contains("Email"));
        assert!(formatted.contains("Email is required"));
    }

    #[test]
    fn test_errors_json() {
        let mut report = ValidationReport::new();
        report.push(required(Field::Email, "Email is required"));
        let json = errors_json(report.errors());
        assert_eq!(json["email"]["message"], "Email is required");
        assert_eq!(json["email"]["code"], "required-field-missing");
    }

    #[test]
    fn test_report_to_json() {
        let report = ValidationReport::from(required(Field::Number, "Phone number is required"));
        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"]["number"]["message"], "Phone number is required");

        let json = ValidationReport::new().to_json();
        assert_eq!(json["valid"], true);
        assert!(json["errors"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_report_from_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, required(Field::Email, "Email is required"));
        let report = ValidationReport::from(errors);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.get(Field::Email).unwrap().message(), "Email is required");
    }
}
