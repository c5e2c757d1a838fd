// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the signup application.
//!
//! Field-level validation failures are ordinary values ([`ValidationError`]) that the
//! engine collects and reports; everything else is wrapped by [`SignupError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::form::Field;

/// The main error type for signup operations.
#[derive(Error, Debug)]
pub enum SignupError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Form/submission errors
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    // Single-field validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Form input decoding errors
    #[error("Invalid form input: {0}")]
    Json(#[from] serde_json::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for SignupError {
    fn from(err: dialoguer::Error) -> Self {
        SignupError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while handling a form as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: '{name}'")]
    UnknownField { name: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Submission rejected: {count} invalid field(s)")]
    Rejected { count: usize },

    #[error("Submission rejected: passwords do not match")]
    PasswordMismatch,
}

/// A single field failing one of its rules.
///
/// `Display` renders the user-facing message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field has no value.
    #[error("{message}")]
    RequiredFieldMissing { field: Field, message: String },

    /// The value is present but violates a pattern, format, or length rule.
    #[error("{message}")]
    ShapeMismatch { field: Field, message: String },

    /// The value disagrees with another field it depends on.
    #[error("{message}")]
    CrossFieldMismatch {
        field: Field,
        other: Field,
        message: String,
    },

    /// The terms checkbox is not ticked.
    #[error("{message}")]
    TermsNotAccepted { field: Field, message: String },
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::RequiredFieldMissing { field, .. }
            | ValidationError::ShapeMismatch { field, .. }
            | ValidationError::CrossFieldMismatch { field, .. }
            | ValidationError::TermsNotAccepted { field, .. } => *field,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::RequiredFieldMissing { message, .. }
            | ValidationError::ShapeMismatch { message, .. }
            | ValidationError::CrossFieldMismatch { message, .. }
            | ValidationError::TermsNotAccepted { message, .. } => message,
        }
    }

    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldMissing { .. } => "required-field-missing",
            ValidationError::ShapeMismatch { .. } => "shape-mismatch",
            ValidationError::CrossFieldMismatch { .. } => "cross-field-mismatch",
            ValidationError::TermsNotAccepted { .. } => "terms-not-accepted",
        }
    }
}

/// Result type alias for signup operations.
pub type Result<T> = std::result::Result<T, SignupError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SignupError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
