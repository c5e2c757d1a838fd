// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Signup - registration form validation
///
/// Collects and validates account details and reports the outcome.
#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Registration form validation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to register if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable all interactive prompts
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fill in and submit the registration form (default command)
    Register(RegisterArgs),

    /// Submit a form state from a JSON file
    Submit(SubmitArgs),

    /// Validate a single field
    Check(CheckArgs),

    /// Show the rules of every field
    Rules,

    /// Print version information
    Version,

    /// Initialize signup configuration
    Init(InitArgs),
}

/// Arguments for the register command.
#[derive(Parser, Debug, Default, Clone)]
pub struct RegisterArgs {
    /// Pre-fill the full name
    #[arg(short = 'n', long)]
    pub full_name: Option<String>,

    /// Pre-fill the email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Pre-fill the phone number
    #[arg(short = 'p', long)]
    pub number: Option<String>,

    /// Pre-fill the password
    #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Pre-fill the password confirmation
    #[arg(long, env = "SIGNUP_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the submit command.
#[derive(Parser, Debug, Clone)]
pub struct SubmitArgs {
    /// JSON file with the form values ("-" reads stdin)
    pub input: PathBuf,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Field to validate (fullName, email, number, password, confirmPassword, terms)
    pub field: String,

    /// Value to validate (overrides the value from --input)
    pub value: Option<String>,

    /// JSON file with the other form values
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long)]
    pub preset: Option<ConfigPreset>,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Rule limits only
    Minimal,
    /// Every option with its default
    Full,
}

impl Cli {
    /// Get the effective command, defaulting to Register if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Register(RegisterArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_register() {
        let args = Cli::parse_from([
            "signup",
            "register",
            "--full-name",
            "Jane Doe",
            "-e",
            "jane@example.com",
            "--accept-terms",
        ]);
        if let Some(Commands::Register(register)) = args.command {
            assert_eq!(register.full_name.as_deref(), Some("Jane Doe"));
            assert_eq!(register.email.as_deref(), Some("jane@example.com"));
            assert!(register.accept_terms);
        } else {
            panic!("Expected Register command");
        }
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["signup", "check", "number", "12345"]);
        if let Some(Commands::Check(check)) = args.command {
            assert_eq!(check.field, "number");
            assert_eq!(check.value.as_deref(), Some("12345"));
            assert!(check.input.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_submit() {
        let args = Cli::parse_from(["signup", "--format", "json", "submit", "form.json"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(matches!(args.command, Some(Commands::Submit(_))));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["signup", "rules", "--non-interactive", "--debug"]);
        assert!(args.non_interactive);
        assert!(args.debug);
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["signup"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Register(_)));
    }
}
