//! verdict — terminal front end for the classification service.
//!
//! Build: `cargo build --bin verdict --features cli`

use std::future::Future;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use verdict::render::{self, LOADING_TEXT};
use verdict::{Config, Orchestrator, PredictClient, Submission, UiState, VerdictError};

/// Typed at the prompt to leave interactive mode.
const QUIT: &str = ":q";

/// Verdict CLI
#[derive(Parser)]
#[command(name = "verdict")]
#[command(version = verdict::long_version())]
#[command(about = "Check whether a news article reads as real or fake")]
struct Args {
    /// Prediction service base URL (overrides the config file)
    #[arg(short, long, env = "VERDICT_URL")]
    url: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify one article
    Classify {
        /// Article text (or omit to read from stdin)
        text: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Paste articles one after another
    Interactive,

    /// Check that the prediction service is up
    Health,

    /// Normalize a raw service payload without contacting the service
    Normalize {
        /// JSON payload (or omit to read from stdin)
        payload: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    // Commands that don't talk to the service
    if let Command::Normalize { payload } = args.command {
        let payload = resolve_text(payload, "normalize")?;
        let value: serde_json::Value = serde_json::from_str(&payload)?;
        println!("{}", render::result_panel(&verdict::normalize_value(&value)));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(url) = args.url {
        config.service.base_url = url;
    }
    let client = PredictClient::from_config(&config.service)?;

    match args.command {
        Command::Classify { text, json } => {
            let text = resolve_text(text, "classify")?;
            let form = Orchestrator::new(Arc::new(client));
            let submitted = with_spinner(form.submit(&text)).await;
            Ok(report(submitted, &form.state(), json)?)
        }

        Command::Interactive => {
            interactive(Orchestrator::new(Arc::new(client))).await?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Health => match client.health().await {
            Ok(banner) => {
                println!("verdict {}", verdict::version_string());
                println!("service: {}", client.base_url());
                println!("status: {banner}");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", render::error_panel(&e.to_string()));
                Ok(ExitCode::FAILURE)
            }
        },

        Command::Normalize { .. } => unreachable!("handled above"),
    }
}

/// Prompt loop: each entry replaces the previous output.
async fn interactive(form: Orchestrator) -> Result<(), Box<dyn std::error::Error>> {
    println!("Paste a news article and press enter. Type {QUIT} to quit.");

    loop {
        let text = Input::<String>::new()
            .with_prompt("article")
            .allow_empty(true)
            .interact_text()?;

        if text.trim() == QUIT {
            return Ok(());
        }

        form.input_changed(text.as_str());
        match with_spinner(form.submit(&text)).await {
            Ok(Submission::Settled(state)) => println!("{}\n", render::render_state(&state)),
            Ok(Submission::Discarded) => {}
            Err(VerdictError::EmptyInput) => eprintln!("{}", VerdictError::EmptyInput),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Show the loading indicator on stderr while `fut` runs.
async fn with_spinner<F: Future>(fut: F) -> F::Output {
    if !io::stderr().is_terminal() {
        return fut.await;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(LOADING_TEXT);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = fut.await;
    spinner.finish_and_clear();
    output
}

/// Exit status for `classify`. A refused submit (blank input) prints its
/// message like any other failure.
fn report(
    submitted: verdict::Result<Submission>,
    state: &UiState,
    json: bool,
) -> Result<ExitCode, serde_json::Error> {
    match submitted {
        Ok(_) => print_outcome(state, json),
        Err(e) => print_outcome(&UiState::Failure(e.to_string()), json),
    }
}

fn print_outcome(state: &UiState, json: bool) -> Result<ExitCode, serde_json::Error> {
    match state {
        UiState::Success(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                println!("{}", render::result_panel(result));
            }
            Ok(ExitCode::SUCCESS)
        }
        UiState::Failure(message) => {
            if json {
                println!("{}", serde_json::json!({ "error": message }));
            } else {
                eprintln!("{}", render::error_panel(message));
            }
            Ok(ExitCode::FAILURE)
        }
        UiState::Idle | UiState::Loading => Ok(ExitCode::FAILURE),
    }
}

/// Resolve text input from an optional CLI argument and/or stdin.
///
/// Combination rules:
/// - arg only → arg
/// - stdin only → stdin
/// - both → `"{arg}\n\n{stdin}"`
/// - neither → error
fn resolve_text(arg: Option<String>, command: &str) -> Result<String, Box<dyn std::error::Error>> {
    let stdin_is_pipe = !io::stdin().is_terminal();
    let stdin_text = if stdin_is_pipe {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    } else {
        None
    };

    match (arg, stdin_text) {
        (Some(a), Some(s)) => Ok(format!("{a}\n\n{s}")),
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => {
            Err(format!("{command}: no input provided (pass text as argument or via stdin)").into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_classify_fails_with_message() {
        let code = report(Err(VerdictError::EmptyInput), &UiState::Idle, false).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            render::error_panel(&VerdictError::EmptyInput.to_string()),
            "⚠️  Please enter some text to analyze."
        );
    }

    #[test]
    fn settled_success_exits_cleanly() {
        let state = UiState::Success(verdict::normalize(&"REAL".into()));
        let code = report(Ok(Submission::Settled(state.clone())), &state, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
