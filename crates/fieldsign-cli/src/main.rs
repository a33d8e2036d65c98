// crates/fieldsign-cli/src/main.rs
// ============================================================================
// Module: Fieldsign CLI Entry Point
// Description: Command dispatcher for offline signing and field utilities.
// Purpose: Sign field values, inspect metadata, and scan placeholders.
// Dependencies: clap, fieldsign-config, fieldsign-core, serde, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The `fieldsign` CLI runs the signing pipeline against JSON requests on
//! disk, parses and checks field metadata, scans text for PDF placeholders,
//! and validates deployment configuration. Inputs are untrusted: file reads
//! are bounded and every failure exits non-zero with a message on stderr.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use fieldsign_config::SigningConfig;
use fieldsign_core::ErrorBody;
use fieldsign_core::FieldError;
use fieldsign_core::FieldInsertion;
use fieldsign_core::FieldKind;
use fieldsign_core::FieldMeta;
use fieldsign_core::FieldSigner;
use fieldsign_core::SigningRequest;
use fieldsign_core::SubmissionMode;
use fieldsign_core::find_placeholders;
use fieldsign_core::parse_field_kind;
use fieldsign_core::parse_field_metadata;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a signing request JSON input.
const MAX_REQUEST_BYTES: usize = 4 * 1024 * 1024;
/// Maximum size of a placeholder scan input.
const MAX_SCAN_BYTES: usize = 16 * 1024 * 1024;
/// Maximum number of metadata entries accepted by `meta parse`.
const MAX_META_ENTRIES: usize = 64;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "fieldsign", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate submitted values and print the recorded field text.
    Sign(SignCommand),
    /// Field metadata utilities.
    Meta {
        /// Selected metadata subcommand.
        #[command(subcommand)]
        command: MetaCommand,
    },
    /// PDF placeholder utilities.
    Placeholder {
        /// Selected placeholder subcommand.
        #[command(subcommand)]
        command: PlaceholderCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration for the `sign` command.
#[derive(Args, Debug)]
struct SignCommand {
    /// Signing request JSON (a single request or an array of requests).
    #[arg(long, value_name = "PATH")]
    request: PathBuf,
    /// Optional config file path supplying signing defaults and audit sink.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Treat every request as a draft submission.
    #[arg(long, action = ArgAction::SetTrue)]
    draft: bool,
}

/// Metadata subcommands.
#[derive(Subcommand, Debug)]
enum MetaCommand {
    /// Parse `key=value` entries into typed metadata.
    Parse(MetaParseCommand),
    /// Report configuration defects in stored metadata.
    Check(MetaCheckCommand),
}

/// Configuration for `meta parse`.
#[derive(Args, Debug)]
struct MetaParseCommand {
    /// Field kind (e.g. TEXT, CHECKBOX).
    #[arg(long, value_name = "KIND")]
    kind: String,
    /// Metadata entry as `key=value`; may be repeated.
    #[arg(long = "entry", value_name = "KEY=VALUE")]
    entries: Vec<String>,
}

/// Configuration for `meta check`.
#[derive(Args, Debug)]
struct MetaCheckCommand {
    /// Field kind (e.g. TEXT, CHECKBOX).
    #[arg(long, value_name = "KIND")]
    kind: String,
    /// Stored metadata as a JSON object.
    #[arg(long, value_name = "JSON")]
    meta: String,
}

/// Placeholder subcommands.
#[derive(Subcommand, Debug)]
enum PlaceholderCommand {
    /// Find placeholders in extracted document text.
    Scan(PlaceholderScanCommand),
}

/// Configuration for `placeholder scan`.
#[derive(Args, Debug)]
struct PlaceholderScanCommand {
    /// UTF-8 text file to scan.
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a fieldsign configuration file.
    Validate(ConfigValidateCommand),
}

/// Configuration for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to fieldsign.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
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
        Commands::Sign(command) => command_sign(&command),
        Commands::Meta {
            command,
        } => match command {
            MetaCommand::Parse(command) => command_meta_parse(&command),
            MetaCommand::Check(command) => command_meta_check(&command),
        },
        Commands::Placeholder {
            command,
        } => match command {
            PlaceholderCommand::Scan(command) => command_placeholder_scan(&command),
        },
        Commands::Config {
            command,
        } => match command {
            ConfigCommand::Validate(command) => command_config_validate(&command),
        },
    }
}

// ============================================================================
// SECTION: Sign Command
// ============================================================================

/// Signing request input: one request or a batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestInput {
    /// Batch of independent requests.
    Batch(Vec<SigningRequest>),
    /// Single request.
    Single(Box<SigningRequest>),
}

/// Per-request output line for batches.
#[derive(Serialize)]
#[serde(untagged)]
enum SignOutput {
    /// Recorded insertion.
    Inserted(FieldInsertion),
    /// Error body for a rejected request.
    Rejected(ErrorBody),
}

impl From<Result<FieldInsertion, FieldError>> for SignOutput {
    fn from(result: Result<FieldInsertion, FieldError>) -> Self {
        match result {
            Ok(insertion) => Self::Inserted(insertion),
            Err(err) => Self::Rejected(err.to_body()),
        }
    }
}

/// Executes the `sign` command.
fn command_sign(command: &SignCommand) -> CliResult<ExitCode> {
    let signer = build_signer(command.config.as_deref())?;
    let bytes = read_input(&command.request, "signing request", MAX_REQUEST_BYTES)?;
    let input: RequestInput = serde_json::from_slice(&bytes)
        .map_err(|err| CliError::new(format!("invalid signing request: {err}")))?;
    let mode = command.draft.then_some(SubmissionMode::Draft);

    match input {
        RequestInput::Single(request) => {
            let output = SignOutput::from(signer.sign(&apply_mode(*request, mode)));
            let failed = matches!(output, SignOutput::Rejected(_));
            write_json(&output)?;
            Ok(exit_code(failed))
        }
        RequestInput::Batch(requests) => {
            let requests: Vec<SigningRequest> =
                requests.into_iter().map(|request| apply_mode(request, mode)).collect();
            let outputs: Vec<SignOutput> =
                signer.sign_all(&requests).into_iter().map(SignOutput::from).collect();
            let failed = outputs.iter().any(|output| matches!(output, SignOutput::Rejected(_)));
            write_json(&outputs)?;
            Ok(exit_code(failed))
        }
    }
}

/// Maps a rejection flag to the process exit code.
const fn exit_code(failed: bool) -> ExitCode {
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Builds a signer from optional configuration.
fn build_signer(config: Option<&Path>) -> CliResult<FieldSigner> {
    let Some(path) = config else {
        return Ok(FieldSigner::default());
    };
    let config = SigningConfig::load(Some(path))
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    let audit = config
        .audit_sink()
        .map_err(|err| CliError::new(format!("failed to open audit sink: {err}")))?;
    Ok(FieldSigner::new(config.signing_defaults()).with_audit_sink(audit))
}

/// Overrides the request mode when one is forced.
fn apply_mode(request: SigningRequest, mode: Option<SubmissionMode>) -> SigningRequest {
    match mode {
        Some(mode) => request.with_mode(mode),
        None => request,
    }
}

// ============================================================================
// SECTION: Meta Commands
// ============================================================================

/// Executes `meta parse`.
fn command_meta_parse(command: &MetaParseCommand) -> CliResult<ExitCode> {
    let kind = parse_kind(&command.kind)?;
    if command.entries.len() > MAX_META_ENTRIES {
        return Err(CliError::new(format!(
            "too many metadata entries (max {MAX_META_ENTRIES})"
        )));
    }
    let mut raw = BTreeMap::new();
    for entry in &command.entries {
        let (key, value) = parse_entry(entry)?;
        raw.insert(key, value);
    }
    let meta = parse_field_metadata(&raw, kind).map_err(|err| CliError::new(err.to_string()))?;
    write_json(&meta)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `meta check`.
fn command_meta_check(command: &MetaCheckCommand) -> CliResult<ExitCode> {
    let kind = parse_kind(&command.kind)?;
    let value: Value = serde_json::from_str(&command.meta)
        .map_err(|err| CliError::new(format!("invalid metadata json: {err}")))?;
    let meta = FieldMeta::from_json(kind, &value).map_err(|err| CliError::new(err.to_string()))?;
    let errors = meta.map(|meta| meta.configuration_errors()).unwrap_or_default();
    if errors.is_empty() {
        write_line("metadata ok")?;
        return Ok(ExitCode::SUCCESS);
    }
    for error in &errors {
        write_line(error)?;
    }
    Ok(ExitCode::FAILURE)
}

/// Parses a field kind argument.
fn parse_kind(raw: &str) -> CliResult<FieldKind> {
    parse_field_kind(raw).map_err(|err| CliError::new(err.to_string()))
}

/// Splits a `key=value` entry.
fn parse_entry(entry: &str) -> CliResult<(String, String)> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(CliError::new(format!("invalid metadata entry: {entry} (expected key=value)"))),
    }
}

// ============================================================================
// SECTION: Placeholder Commands
// ============================================================================

/// Executes `placeholder scan`.
fn command_placeholder_scan(command: &PlaceholderScanCommand) -> CliResult<ExitCode> {
    let bytes = read_input(&command.input, "placeholder input", MAX_SCAN_BYTES)?;
    let text = std::str::from_utf8(&bytes)
        .map_err(|_| CliError::new("placeholder input must be utf-8".to_string()))?;
    let placeholders = find_placeholders(text).map_err(|err| CliError::new(err.to_string()))?;
    write_json(&placeholders)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = SigningConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    write_line("config ok")?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded file reads.
#[derive(Debug)]
enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

/// Reads a file from disk while enforcing a hard size limit.
fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads a bounded input file, describing failures with `kind`.
fn read_input(path: &Path, kind: &str, max_bytes: usize) -> CliResult<Vec<u8>> {
    read_bytes_with_limit(path, max_bytes).map_err(|err| match err {
        ReadLimitError::Io(err) => {
            CliError::new(format!("failed to read {kind} {}: {err}", path.display()))
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => CliError::new(format!(
            "{kind} {} exceeds size limit ({size} > {limit} bytes)",
            path.display()
        )),
    })
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes pretty JSON to stdout.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(format!("failed to render json: {err}")))?;
    write_line(&rendered)
}

/// Writes a line to stdout, mapping failures to a CLI error.
fn write_line(message: &str) -> CliResult<()> {
    write_stdout_line(message)
        .map_err(|err| CliError::new(format!("failed to write to stdout: {err}")))
}

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

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
