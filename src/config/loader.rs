// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, Result, SignupError};
use std::path::{Path, PathBuf};

use super::schema::SignupConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["signup.toml", ".signup.toml", ".config/signup.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let signup_config = config_dir.join("signup").join("config.toml");
        if signup_config.exists() {
            return Some(signup_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<SignupConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(SignupConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<SignupConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(SignupError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        SignupError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<SignupConfig> {
    toml::from_str(content).map_err(|e| {
        SignupError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Merge two configurations, with non-default overlay values taking precedence.
pub fn merge_configs(base: SignupConfig, overlay: SignupConfig) -> SignupConfig {
    let defaults = SignupConfig::default();

    macro_rules! pick {
        ($($path:ident).+) => {
            if overlay.$($path).+ != defaults.$($path).+ {
                overlay.$($path).+.clone()
            } else {
                base.$($path).+.clone()
            }
        };
    }

    SignupConfig {
        rules: super::schema::RulesConfig {
            min_password_length: pick!(rules.min_password_length),
            phone_digits: pick!(rules.phone_digits),
        },
        messages: super::schema::MessagesConfig {
            success: pick!(messages.success),
            failure: pick!(messages.failure),
            password_mismatch: pick!(messages.password_mismatch),
        },
        ui: super::schema::UiConfig {
            color: pick!(ui.color),
            emoji: pick!(ui.emoji),
            hints: pick!(ui.hints),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SignupConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
min_password_length = 8

[messages]
success = "Welcome!"

[ui]
emoji = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.min_password_length, 8);
        assert_eq!(config.rules.phone_digits, 10);
        assert_eq!(config.messages.success, "Welcome!");
        assert_eq!(config.messages.failure, "Please correct the errors in the form.");
        assert!(!config.ui.emoji);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("[rules]\nmin_password_length = \"six\"").unwrap_err();
        assert!(matches!(
            err,
            SignupError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("signup.toml")).unwrap_err();
        assert!(matches!(err, SignupError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("signup.toml"), "[rules]\nphone_digits = 11\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("signup.toml"));
        assert_eq!(load_config_from(&found).unwrap().rules.phone_digits, 11);
    }

    #[test]
    fn test_merge_configs() {
        let base = parse_config("[rules]\nphone_digits = 11\n").unwrap();
        let overlay = parse_config("[rules]\nmin_password_length = 8\n").unwrap();
        let merged = merge_configs(base, overlay);

        assert_eq!(merged.rules.phone_digits, 11);
        assert_eq!(merged.rules.min_password_length, 8);
    }
}
