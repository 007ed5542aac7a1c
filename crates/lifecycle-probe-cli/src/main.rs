// crates/lifecycle-probe-cli/src/main.rs
// ============================================================================
// Module: Lifecycle Probe CLI Entry Point
// Description: Command dispatcher for probe runs and scenario listings.
// Purpose: Run the booking suite against a target and report the outcomes.
// Dependencies: clap, lifecycle-probe-booking, lifecycle-probe-client,
//               lifecycle-probe-config, lifecycle-probe-core, serde_json,
//               thiserror, url.
// ============================================================================

//! ## Overview
//! The CLI wires configuration, the HTTP adapter, and the booking suite into
//! one process. Settings come from the environment first; command-line flags
//! override individual values. Progress streams to stderr while a run
//! executes and the final report lands on stdout, so piped output stays
//! machine-consumable.
//! Invariants:
//! - The process exits non-zero when any scenario fails or errors, and when
//!   configuration or client construction fails before the run starts.
//! - A completed run always renders exactly one report.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use lifecycle_probe_booking::suite;
use lifecycle_probe_client::HttpApiClient;
use lifecycle_probe_client::HttpClientConfig;
use lifecycle_probe_config::DEFAULT_PASSWORD;
use lifecycle_probe_config::DEFAULT_USERNAME;
use lifecycle_probe_config::RunSettings;
use lifecycle_probe_core::Outcome;
use lifecycle_probe_core::RunObserver;
use lifecycle_probe_core::RunReport;
use lifecycle_probe_core::RunSummary;
use lifecycle_probe_core::ScenarioDescriptor;
use lifecycle_probe_core::ScenarioResult;
use lifecycle_probe_core::SuiteRunner;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "lifecycle-probe", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the booking suite against the configured target.
    Run(RunCommand),
    /// List the suite's scenarios in execution order.
    Scenarios,
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Base URL of the target service (overrides `LIFECYCLE_PROBE_BASE_URL`).
    #[arg(long, value_name = "URL")]
    base_url: Option<Url>,
    /// Username for token acquisition (overrides `LIFECYCLE_PROBE_USERNAME`).
    #[arg(long, value_name = "NAME")]
    username: Option<String>,
    /// Password for token acquisition (overrides `LIFECYCLE_PROBE_PASSWORD`).
    #[arg(long, value_name = "PASSWORD")]
    password: Option<String>,
    /// Per-request timeout in milliseconds (overrides `LIFECYCLE_PROBE_TIMEOUT_MS`).
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
    /// Allow a cleartext `http` target.
    #[arg(long, action = ArgAction::SetTrue)]
    allow_http: bool,
    /// Output format for the run report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

/// Output formats for run reports.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ReportFormat {
    /// Human-readable text output.
    Text,
    /// Pretty-printed JSON output.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error surfaced to the user when a command cannot complete.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable failure description.
    message: String,
}

impl CliError {
    /// Creates a CLI error from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => command_run(&args),
        Commands::Scenarios => command_scenarios(),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the booking suite and renders the run report.
fn command_run(args: &RunCommand) -> CliResult<ExitCode> {
    let settings = RunSettings::load().map_err(|err| CliError::new(err.to_string()))?;
    let settings = apply_overrides(settings, args)?;
    let client = build_client(&settings)?;
    let scenarios = suite(settings.username, settings.password);
    let mut runner =
        SuiteRunner::new(client, scenarios).map_err(|err| CliError::new(err.to_string()))?;
    let report = runner.run(&StderrObserver).map_err(|err| CliError::new(err.to_string()))?;
    render_report(&report, args.format)?;
    Ok(run_exit_code(&report))
}

/// Lists the suite's scenarios in execution order.
fn command_scenarios() -> CliResult<ExitCode> {
    let mut descriptors: Vec<ScenarioDescriptor> = suite(DEFAULT_USERNAME, DEFAULT_PASSWORD)
        .iter()
        .map(|scenario| scenario.descriptor())
        .collect();
    descriptors.sort_by_key(|descriptor| descriptor.ordinal);
    for descriptor in &descriptors {
        write_stdout_line(&scenario_line(descriptor))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Applies command-line overrides on top of environment-derived settings.
///
/// Flags that were not given leave the environment value untouched;
/// `--allow-http` only ever widens the policy.
fn apply_overrides(mut settings: RunSettings, args: &RunCommand) -> CliResult<RunSettings> {
    if let Some(base_url) = &args.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(username) = &args.username {
        settings.username = username.clone();
    }
    if let Some(password) = &args.password {
        settings.password = password.clone();
    }
    if let Some(timeout_ms) = args.timeout_ms {
        if timeout_ms == 0 {
            return Err(CliError::new("--timeout-ms must be greater than zero".to_string()));
        }
        settings.timeout_ms = timeout_ms;
    }
    if args.allow_http {
        settings.allow_http = true;
    }
    Ok(settings)
}

/// Builds the blocking HTTP adapter from resolved settings.
fn build_client(settings: &RunSettings) -> CliResult<HttpApiClient> {
    let mut config = HttpClientConfig::new(settings.base_url.clone());
    config.allow_http = settings.allow_http;
    config.timeout_ms = settings.timeout_ms;
    HttpApiClient::new(config).map_err(|err| CliError::new(err.to_string()))
}

// ============================================================================
// SECTION: Progress Observer
// ============================================================================

/// Observer streaming per-scenario progress to stderr.
///
/// # Invariants
/// - Progress never touches stdout; the rendered report owns that stream.
struct StderrObserver;

impl RunObserver for StderrObserver {
    fn scenario_started(&self, descriptor: &ScenarioDescriptor) {
        let _ = write_stderr_line(&format!(
            "running {}: {}",
            descriptor.ordinal, descriptor.scenario_id
        ));
    }

    fn scenario_finished(&self, result: &ScenarioResult) {
        let _ = write_stderr_line(&result_line(result));
    }

    fn run_completed(&self, _report: &RunReport) {}
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders one recorded result as a stable single line.
fn result_line(result: &ScenarioResult) -> String {
    match &result.outcome {
        Outcome::Pass => format!("{} {}: pass", result.ordinal, result.scenario_id),
        Outcome::Fail {
            diagnostic,
        } => {
            format!("{} {}: fail ({diagnostic})", result.ordinal, result.scenario_id)
        }
        Outcome::Error {
            error,
        } => {
            format!("{} {}: error ({error})", result.ordinal, result.scenario_id)
        }
    }
}

/// Renders the aggregate tallies as a stable single line.
fn summary_line(summary: &RunSummary) -> String {
    format!(
        "completed: {} passed, {} failed, {} errored of {} scenarios",
        summary.passed, summary.failed, summary.errored, summary.total
    )
}

/// Renders one scenario listing entry.
fn scenario_line(descriptor: &ScenarioDescriptor) -> String {
    format!("{} {}: {}", descriptor.ordinal, descriptor.scenario_id, descriptor.title)
}

/// Writes the run report to stdout in the selected format.
fn render_report(report: &RunReport, format: ReportFormat) -> CliResult<()> {
    match format {
        ReportFormat::Text => {
            for result in &report.results {
                write_stdout_line(&result_line(result))
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
            write_stdout_line(&summary_line(&report.summary()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))
        }
        ReportFormat::Json => {
            let rendered = serde_json::to_string_pretty(report)
                .map_err(|err| CliError::new(format!("report serialization failed: {err}")))?;
            write_stdout_line(&rendered)
                .map_err(|err| CliError::new(output_error("stdout", &err)))
        }
    }
}

/// Maps a completed run to the process exit code.
fn run_exit_code(report: &RunReport) -> ExitCode {
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
