// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registration form: state, submission engine, and session lifecycle.

mod engine;
mod outcome;
mod preview;
mod prompt;
mod session;
mod state;

pub use engine::FormValidationEngine;
pub use outcome::{Rejection, RejectionKind, SignupValues, SubmissionOutcome};
pub use preview::SignupPreview;
pub use prompt::SignupPrompt;
pub use session::{FormSession, Phase};
pub use state::{Field, FieldValue, FormState};
