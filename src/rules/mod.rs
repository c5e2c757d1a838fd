// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for form validation.
//!
//! Fields are described declaratively (rule kind plus message); the engine
//! evaluates them against the live form state.

mod builtin;
mod engine;
mod schema;
mod validator;

pub use builtin::*;
pub use engine::RuleEngine;
pub use schema::{FieldSpec, FormSchema, PASSWORD_MIN_LENGTH};
pub use validator::{errors_json, format_error, FieldErrors, ValidationReport};
