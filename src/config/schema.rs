// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from signup.toml.

use serde::{Deserialize, Serialize};

use crate::rules::PASSWORD_MIN_LENGTH;

/// The main configuration structure for signup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SignupConfig {
    /// Rule limits.
    pub rules: RulesConfig,

    /// Notification messages.
    pub messages: MessagesConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl SignupConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum password length in characters.
    pub min_password_length: usize,

    /// Exact number of digits in a phone number.
    pub phone_digits: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_password_length: PASSWORD_MIN_LENGTH,
            phone_digits: 10,
        }
    }
}

/// Messages passed to the notifier, one per submit attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessagesConfig {
    /// Shown when a submission is accepted.
    pub success: String,

    /// Shown when any field is invalid.
    pub failure: String,

    /// Shown when the submit-time password re-check fails.
    pub password_mismatch: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            success: "Signup Successful! Welcome to our platform!".to_string(),
            failure: "Please correct the errors in the form.".to_string(),
            password_mismatch: "Passwords do not match!".to_string(),
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to use emoji.
    pub emoji: bool,

    /// Whether to show rule hints in prompts.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            emoji: true,
            hints: true,
        }
    }
}
