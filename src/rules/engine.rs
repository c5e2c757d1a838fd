// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for field validation.

use crate::error::ValidationError;
use crate::form::{Field, FormState};

use super::schema::FormSchema;
use super::validator::ValidationReport;

/// Rule engine that applies a [`FormSchema`] to form state.
///
/// Evaluation is a pure function of the state passed in.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    schema: FormSchema,
}

impl RuleEngine {
    /// Create a new rule engine for the given schema.
    pub fn new(schema: FormSchema) -> Self {
        Self { schema }
    }

    /// The schema this engine validates against.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validate one field against the current state.
    ///
    /// Fields the schema does not declare have no rules and always pass.
    pub fn validate_field(&self, field: Field, state: &FormState) -> Result<(), ValidationError> {
        let Some(spec) = self.schema.spec(field) else {
            tracing::debug!("No rules declared for field '{}'", field);
            return Ok(());
        };

        let result = spec.validate(state);
        match &result {
            Ok(()) => tracing::debug!(field = %field, "field valid"),
            Err(e) => tracing::debug!(field = %field, code = e.code(), "field invalid"),
        }
        result
    }

    /// Validate every declared field, collecting all failures.
    pub fn validate_all(&self, state: &FormState) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Every field is evaluated even after a failure
        for spec in self.schema.fields() {
            if let Err(error) = self.validate_field(spec.field, state) {
                report.push(error);
            }
        }

        report
    }
}
