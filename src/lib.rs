// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Signup - Registration Form Validation
//!
//! Validates a user registration form (name, email, phone, password, terms) and
//! reports every submit attempt through a pluggable notifier.
//!
//! # Features
//!
//! - **Declarative Rules**: One table of rules per field drives validation and UI hints
//! - **Cross-Field Checks**: Confirm-password is validated against the live password
//! - **Submission Engine**: Collects every invalid field, then re-checks the password pair
//! - **Notifier Capability**: Exactly one success or error message per submit attempt
//! - **Interactive Prompt**: Terminal form with live per-field feedback
//!
//! # Example
//!
//! ```
//! use signup::form::{Field, FormState, FormValidationEngine};
//! use signup::notify::MemoryNotifier;
//!
//! let engine = FormValidationEngine::with_defaults(MemoryNotifier::new());
//!
//! let state = FormState::new()
//!     .with(Field::FullName, "Jane Doe")
//!     .with(Field::Email, "jane@example.com")
//!     .with(Field::Number, "1234567890")
//!     .with(Field::Password, "secret1")
//!     .with(Field::ConfirmPassword, "secret1")
//!     .with(Field::Terms, true);
//!
//! assert!(engine.submit(&state).is_accepted());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod rules;

// Re-exports for convenience
pub use config::SignupConfig;
pub use error::{Result, SignupError};
pub use form::{FormState, FormValidationEngine, SubmissionOutcome};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of signup.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
