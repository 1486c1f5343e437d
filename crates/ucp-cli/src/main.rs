// crates/ucp-cli/src/main.rs
// ============================================================================
// Module: UCP CLI Entry Point
// Description: Command dispatcher for resource id and workspace utilities.
// Purpose: Provide a safe, localized CLI over the resource id model.
// Dependencies: clap, serde_json, thiserror, tracing, ucp-config, ucp-resources
// ============================================================================

//! ## Overview
//! The `ucp` CLI parses, inspects, and builds resource ids, and validates the
//! workspace configuration that pins default scopes and environments. All
//! user-facing strings are routed through the i18n catalog. Diagnostics go to
//! stderr through `tracing`, filtered by `UCP_LOG`.
//! Security posture: ids and config paths are untrusted input; ids always
//! pass through the strict parser before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ucp_cli::report::IdReport;
use ucp_cli::t;
use ucp_config::UcpConfig;
use ucp_resources::ENVIRONMENTS_TYPE;
use ucp_resources::Keyword;
use ucp_resources::ResourceId;
use ucp_resources::TypeSegment;
use ucp_resources::parse;
use ucp_resources::parse_resource;
use ucp_resources::provider_from_id;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding the `tracing` filter directive.
const LOG_ENV: &str = "UCP_LOG";
/// Filter used when `UCP_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ucp", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resource id parsing and scope utilities.
    Id {
        /// Selected id subcommand.
        #[command(subcommand)]
        command: IdCommand,
    },
    /// Environment checks against workspace defaults.
    Env {
        /// Selected env subcommand.
        #[command(subcommand)]
        command: EnvCommand,
    },
    /// Workspace configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Resource id subcommands.
#[derive(Subcommand, Debug)]
enum IdCommand {
    /// Parse an id and print its canonical form and breakdown.
    Parse(IdParseCommand),
    /// Print the name of the first scope of a given type.
    Scope(IdScopeCommand),
    /// Print the scope chain with type segments stripped.
    RootScope(IdArg),
    /// Print the id with its innermost segment removed.
    Parent(IdArg),
    /// Print the fully qualified type of the last type segment.
    Type(IdArg),
    /// Print the name of the last type segment.
    Name(IdArg),
    /// Append a type segment and print the resulting id.
    Append(IdAppendCommand),
    /// Print the owning provider, or an empty line when unknown.
    Provider(IdArg),
}

/// Environment subcommands.
#[derive(Subcommand, Debug)]
enum EnvCommand {
    /// Verify an environment belongs to a resource group.
    CheckGroup(EnvCheckGroupCommand),
    /// Print the name of the workspace's default environment.
    Name(EnvNameCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a workspace configuration file.
    Validate(ConfigArgs),
}

/// A single resource id argument.
#[derive(Args, Debug)]
struct IdArg {
    /// Resource id, e.g. `/planes/radius/local/resourceGroups/rg`.
    #[arg(value_name = "ID")]
    id: String,
}

/// Output formats for `id parse`.
#[derive(ValueEnum, Copy, Clone, Debug, Default)]
enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Pretty-printed JSON output.
    Json,
}

/// Arguments for `id parse`.
#[derive(Args, Debug)]
struct IdParseCommand {
    /// Resource id to parse.
    #[arg(value_name = "ID")]
    id: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `id scope`.
#[derive(Args, Debug)]
struct IdScopeCommand {
    /// Resource id to search.
    #[arg(value_name = "ID")]
    id: String,
    /// Scope type to look up (e.g. `resourceGroups`); matched ignoring case.
    #[arg(long = "type", value_name = "SEGMENT")]
    segment_type: String,
}

/// Arguments for `id append`.
#[derive(Args, Debug)]
struct IdAppendCommand {
    /// Scope or resource id to extend.
    #[arg(value_name = "ID")]
    id: String,
    /// Provider namespace of the new segment.
    #[arg(long, value_name = "NAMESPACE")]
    namespace: String,
    /// Resource type of the new segment.
    #[arg(long = "type", value_name = "TYPE")]
    segment_type: String,
    /// Instance name; omit to build a collection reference.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,
}

/// Config file selection shared by config-backed commands.
#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Path to the workspace config (overrides `UCP_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `env check-group`.
#[derive(Args, Debug)]
struct EnvCheckGroupCommand {
    /// Expected resource group name.
    #[arg(long, value_name = "GROUP")]
    group: String,
    /// Environment id; defaults to the workspace environment.
    #[arg(long, value_name = "ID")]
    environment: Option<String>,
    /// Workspace name; defaults to the configured default.
    #[arg(long, value_name = "NAME")]
    workspace: Option<String>,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

/// Arguments for `env name`.
#[derive(Args, Debug)]
struct EnvNameCommand {
    /// Workspace name; defaults to the configured default.
    #[arg(long, value_name = "NAME")]
    workspace: Option<String>,
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
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
    init_logging();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Installs the stderr `tracing` subscriber.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Id {
            command,
        } => command_id(command),
        Commands::Env {
            command,
        } => command_env(command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Id Commands
// ============================================================================

/// Dispatches id subcommands.
fn command_id(command: IdCommand) -> CliResult<ExitCode> {
    match command {
        IdCommand::Parse(command) => command_id_parse(&command),
        IdCommand::Scope(command) => command_id_scope(&command),
        IdCommand::RootScope(command) => print_line(&parse_id(&command.id)?.root_scope()),
        IdCommand::Parent(command) => {
            let parent = parse_id(&command.id)?.parent_scope().map_err(invalid_id)?;
            print_line(&parent.to_string())
        }
        IdCommand::Type(command) => {
            let resource_type = parse_id(&command.id)?.resource_type().map_err(invalid_id)?;
            print_line(&resource_type)
        }
        IdCommand::Name(command) => command_id_name(&command),
        IdCommand::Append(command) => command_id_append(command),
        IdCommand::Provider(command) => print_line(&provider_from_id(&command.id)),
    }
}

/// Executes `id parse`.
fn command_id_parse(command: &IdParseCommand) -> CliResult<ExitCode> {
    let report = IdReport::from_id(&parse_id(&command.id)?);
    match command.format {
        OutputFormat::Text => print_line(&report.render_text()),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
            print_line(&rendered)
        }
    }
}

/// Executes `id scope`.
fn command_id_scope(command: &IdScopeCommand) -> CliResult<ExitCode> {
    let id = parse_id(&command.id)?;
    let Some(name) = id.find_scope(&command.segment_type) else {
        return Err(CliError::new(t!(
            "id.scope.not_found",
            id = id,
            segment = command.segment_type
        )));
    };
    print_line(name)
}

/// Executes `id name`.
fn command_id_name(command: &IdArg) -> CliResult<ExitCode> {
    let id = parse_id(&command.id)?;
    match id.name().map_err(invalid_id)? {
        Some(name) => print_line(name),
        None => Err(CliError::new(t!("id.name.collection", id = id))),
    }
}

/// Executes `id append`.
fn command_id_append(command: IdAppendCommand) -> CliResult<ExitCode> {
    let id = parse_id(&command.id)?;
    let segment = match command.name {
        Some(name) => TypeSegment::new(command.namespace, command.segment_type, name),
        None => TypeSegment::collection(command.namespace, command.segment_type),
    }
    .map_err(|err| CliError::new(t!("id.append.invalid_segment", error = err)))?;
    let child = id.append(segment).map_err(invalid_id)?;
    print_line(&child.to_string())
}

/// Parses a user-supplied id with the strict parser.
fn parse_id(raw: &str) -> CliResult<ResourceId> {
    parse(raw).map_err(|err| {
        debug!(error_kind = err.kind(), "rejected resource id");
        invalid_id(err)
    })
}

/// Wraps a resource id error in a localized CLI error.
fn invalid_id(err: ucp_resources::ParseError) -> CliError {
    CliError::new(t!("id.invalid", error = err))
}

// ============================================================================
// SECTION: Env Commands
// ============================================================================

/// Dispatches env subcommands.
fn command_env(command: EnvCommand) -> CliResult<ExitCode> {
    match command {
        EnvCommand::CheckGroup(command) => command_env_check_group(command),
        EnvCommand::Name(command) => command_env_name(&command),
    }
}

/// Executes `env check-group`.
fn command_env_check_group(command: EnvCheckGroupCommand) -> CliResult<ExitCode> {
    let raw = match command.environment {
        Some(raw) => raw,
        None => {
            let config = load_config(&command.config)?;
            config
                .workspace(command.workspace.as_deref())
                .map_err(|err| CliError::new(t!("config.workspace_failed", error = err)))?
                .environment
                .clone()
                .ok_or_else(|| CliError::new(t!("env.missing")))?
        }
    };
    let environment = resolve_environment(&raw)?;
    let group = check_group(&environment, &command.group)?;
    print_line(&t!("env.check_group.ok", environment = environment, group = group))
}

/// Executes `env name`.
fn command_env_name(command: &EnvNameCommand) -> CliResult<ExitCode> {
    let config = load_config(&command.config)?;
    let workspace = config
        .workspace(command.workspace.as_deref())
        .map_err(|err| CliError::new(t!("config.workspace_failed", error = err)))?;
    let name = workspace
        .environment_name()
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?
        .ok_or_else(|| CliError::new(t!("env.missing")))?;
    print_line(&name)
}

/// Parses an environment id and verifies its type.
fn resolve_environment(raw: &str) -> CliResult<ResourceId> {
    let id = parse_resource(raw).map_err(|err| CliError::new(t!("env.invalid", error = err)))?;
    id.validate_type(ENVIRONMENTS_TYPE)
        .map_err(|err| CliError::new(t!("env.invalid", error = err)))?;
    Ok(id)
}

/// Compares the environment's resource group against `group`.
///
/// Resource group names compare exactly; they are user data.
fn check_group<'id>(environment: &'id ResourceId, group: &str) -> CliResult<&'id str> {
    let Some(actual) = environment.find_scope(Keyword::ResourceGroups.as_str()) else {
        return Err(CliError::new(t!("env.check_group.no_group", environment = environment)));
    };
    if actual != group {
        return Err(CliError::new(t!(
            "env.check_group.mismatch",
            environment = environment,
            actual = actual,
            group = group
        )));
    }
    Ok(actual)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => {
            let _config = load_config(&command)?;
            print_line(&t!("config.validate.ok"))
        }
    }
}

/// Loads the workspace config selected by `args`.
fn load_config(args: &ConfigArgs) -> CliResult<UcpConfig> {
    UcpConfig::load(args.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes `message` to stdout and reports success.
fn print_line(message: &str) -> CliResult<ExitCode> {
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
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

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
