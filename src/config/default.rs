// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::SignupConfig;

/// Get the default configuration.
pub fn default_config() -> SignupConfig {
    SignupConfig::default()
}

/// Generate a minimal configuration file.
pub fn minimal_config() -> &'static str {
    r#"# Signup Configuration (Minimal)
[rules]
min_password_length = 6
phone_digits = 10
"#
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# Signup Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Rule limits
[rules]
min_password_length = 6
phone_digits = 10

# Notification messages (one per submit attempt)
[messages]
success = "Signup Successful! Welcome to our platform!"
failure = "Please correct the errors in the form."
password_mismatch = "Passwords do not match!"

# UI configuration
[ui]
color = true
emoji = true
hints = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.rules.min_password_length, 6);
        assert_eq!(config.messages.password_mismatch, "Passwords do not match!");
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config: SignupConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(config, SignupConfig::default());
    }

    #[test]
    fn test_minimal_config_parseable() {
        let _config: SignupConfig =
            toml::from_str(minimal_config()).expect("Minimal config should parse");
    }
}
