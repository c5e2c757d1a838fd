// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use console::{style, Term};

use crate::config::SignupConfig;
use crate::error::{ConfigError, FormError, Result, ResultExt, SignupError};
use crate::form::{Field, FormState, FormValidationEngine, SignupPrompt, SubmissionOutcome};
use crate::notify::TerminalNotifier;
use crate::rules::{FormSchema, ValidationReport};

use super::args::{
    CheckArgs, Cli, Commands, ConfigPreset, InitArgs, OutputFormat, RegisterArgs, SubmitArgs,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        SignupConfig::load_from(config_path)?
    } else {
        SignupConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Register(args) => run_register(&cli, &config, args),
        Commands::Submit(args) => run_submit(&cli, &config, args),
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Rules => run_rules(&cli, &config),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(&cli, args),
    }
}

/// Build the engine described by the configuration.
fn build_engine(
    cli: &Cli,
    config: &SignupConfig,
) -> Result<FormValidationEngine<TerminalNotifier>> {
    let schema = FormSchema::from_config(&config.rules)?;
    let notifier = TerminalNotifier::new(cli.format, config.ui.emoji);
    Ok(FormValidationEngine::new(
        schema,
        config.messages.clone(),
        notifier,
    ))
}

/// Read a form state from a JSON file, or stdin for "-".
fn read_form_state(path: &Path) -> Result<FormState> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading form from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).context(format!("reading {}", path.display()))?
    };

    Ok(serde_json::from_str(&content)?)
}

/// Print an outcome and turn a rejection into an error exit.
///
/// JSON mode prints one document carrying the outcome and the notification.
fn finish(cli: &Cli, outcome: &SubmissionOutcome, notifier: &TerminalNotifier) -> Result<()> {
    match cli.format {
        Some(OutputFormat::Json) => {
            let mut json = outcome.to_json();
            if let Some(notification) = notifier.last() {
                json["notification"] = notification.to_json();
            }
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        _ => {
            if let Some(rejection) = outcome.rejection() {
                rejection.report().write_text(&Term::stderr())?;
            }
        }
    }

    match outcome.rejection() {
        Some(rejection) => Err(SignupError::Form(FormError::from(rejection))),
        None => Ok(()),
    }
}

/// Run the register command.
fn run_register(cli: &Cli, config: &SignupConfig, args: RegisterArgs) -> Result<()> {
    tracing::debug!(
        "Running register command (email: {:?}, non_interactive: {})",
        args.email,
        cli.non_interactive
    );

    let engine = build_engine(cli, config)?;

    let mut prompt = SignupPrompt::new(&engine)
        .with_hints(config.ui.hints)
        .with_optional(Field::FullName, args.full_name.as_deref())
        .with_optional(Field::Email, args.email.as_deref())
        .with_optional(Field::Number, args.number.as_deref())
        .with_optional(Field::Password, args.password.as_deref())
        .with_optional(Field::ConfirmPassword, args.confirm_password.as_deref());
    if args.accept_terms {
        prompt = prompt.with_value(Field::Terms, true);
    }

    let outcome = if cli.non_interactive {
        prompt.submit_non_interactive()
    } else {
        prompt.run_interactive(args.yes)?
    };

    finish(cli, &outcome, engine.notifier())
}

/// Run the submit command.
fn run_submit(cli: &Cli, config: &SignupConfig, args: SubmitArgs) -> Result<()> {
    tracing::debug!("Running submit command with input: {:?}", args.input);

    let engine = build_engine(cli, config)?;
    let state = read_form_state(&args.input)?;
    let outcome = engine.submit(&state);

    finish(cli, &outcome, engine.notifier())
}

/// Run the check command.
fn run_check(cli: &Cli, config: &SignupConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command for field: {}", args.field);

    let field: Field = args.field.parse()?;
    let engine = build_engine(cli, config)?;

    let mut state = match &args.input {
        Some(path) => read_form_state(path)?,
        None => FormState::new(),
    };
    if let Some(ref value) = args.value {
        state.set_parsed(field, value)?;
    }

    let result = engine.validate_field(field, &state);

    match &result {
        Ok(()) => ValidationReport::new().print(cli.format),
        Err(e) => ValidationReport::from(e.clone()).print(cli.format),
    }

    result.map_err(SignupError::from)
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &SignupConfig) -> Result<()> {
    let schema = FormSchema::from_config(&config.rules)?;

    match cli.format {
        Some(OutputFormat::Json) => {
            let fields: Vec<serde_json::Value> = schema
                .fields()
                .iter()
                .map(|spec| {
                    serde_json::json!({
                        "field": spec.field,
                        "label": spec.field.label(),
                        "required": spec.is_required(),
                        "rules": spec.rules.iter().map(|r| serde_json::json!({
                            "hint": r.kind.hint(),
                            "message": r.message,
                        })).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&fields).unwrap_or_default()
            );
        }
        _ => {
            for spec in schema.fields() {
                println!(
                    "{:18} {}",
                    style(spec.field.label()).cyan().bold(),
                    style(spec.field.as_str()).dim()
                );
                for rule in &spec.rules {
                    println!(
                        "  {} {:24} {}",
                        style("•").dim(),
                        rule.kind.hint(),
                        style(&rule.message).dim()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("signup {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(_cli: &Cli, args: InitArgs) -> Result<()> {
    use crate::config::default::{example_config, minimal_config};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("signup.toml");

    if config_path.exists() && !args.force {
        return Err(SignupError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Minimal) => minimal_config(),
        Some(ConfigPreset::Full) | None => example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write configuration")?;

    println!("✓ Created signup.toml");

    Ok(())
}
