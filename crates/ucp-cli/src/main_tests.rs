// crates/ucp-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and environment checks.
// Purpose: Ensure the group check compares ids exactly and fails closed.
// Dependencies: ucp-cli main helpers
// ============================================================================

//! ## Overview
//! Validates clap wiring for the `id` and `env` subcommands and the
//! environment/group helpers behind `env check-group`.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use clap::Parser;

use super::Cli;
use super::Commands;
use super::EnvCommand;
use super::IdCommand;
use super::OutputFormat;
use super::check_group;
use super::resolve_environment;

const ENVIRONMENT: &str =
    "/planes/radius/local/resourceGroups/wrong-group/providers/Applications.Core/environments/test-env";

// ============================================================================
// SECTION: Argument Parsing
// ============================================================================

#[test]
fn id_parse_defaults_to_text() {
    let cli = Cli::try_parse_from(["ucp", "id", "parse", "/planes/radius/local"]).unwrap();
    let Some(Commands::Id {
        command: IdCommand::Parse(command),
    }) = cli.command
    else {
        panic!("expected id parse");
    };
    assert!(matches!(command.format, OutputFormat::Text));
    assert_eq!(command.id, "/planes/radius/local");
}

#[test]
fn id_append_accepts_optional_name() {
    let cli = Cli::try_parse_from([
        "ucp",
        "id",
        "append",
        "/planes/radius/local/resourceGroups/rg",
        "--namespace",
        "Applications.Core",
        "--type",
        "containers",
    ])
    .unwrap();
    let Some(Commands::Id {
        command: IdCommand::Append(command),
    }) = cli.command
    else {
        panic!("expected id append");
    };
    assert_eq!(command.segment_type, "containers");
    assert_eq!(command.name, None);
}

#[test]
fn check_group_requires_group_flag() {
    assert!(Cli::try_parse_from(["ucp", "env", "check-group"]).is_err());
    let cli =
        Cli::try_parse_from(["ucp", "env", "check-group", "--group", "g", "--workspace", "dev"])
            .unwrap();
    let Some(Commands::Env {
        command: EnvCommand::CheckGroup(command),
    }) = cli.command
    else {
        panic!("expected env check-group");
    };
    assert_eq!(command.workspace.as_deref(), Some("dev"));
    assert_eq!(command.environment, None);
}

// ============================================================================
// SECTION: Group Check
// ============================================================================

#[test]
fn group_mismatch_is_reported() {
    let environment = resolve_environment(ENVIRONMENT).unwrap();
    let err = check_group(&environment, "another-group").unwrap_err();
    assert!(err.to_string().contains("'wrong-group', not 'another-group'"), "error was {err}");
}

#[test]
fn group_match_is_exact() {
    let environment = resolve_environment(ENVIRONMENT).unwrap();
    assert_eq!(check_group(&environment, "wrong-group").unwrap(), "wrong-group");
    assert!(check_group(&environment, "Wrong-Group").is_err());
}

#[test]
fn non_environment_ids_are_rejected() {
    assert!(resolve_environment("/planes/radius/local/resourceGroups/rg").is_err());
    assert!(
        resolve_environment(
            "/planes/radius/local/resourceGroups/rg/providers/Applications.Core/applications/app"
        )
        .is_err()
    );
}

#[test]
fn relative_environment_without_group_is_rejected() {
    let environment =
        resolve_environment("/subscriptions/s/providers/Applications.Core/environments/e").unwrap();
    let err = check_group(&environment, "rg").unwrap_err();
    assert!(err.to_string().contains("not scoped to a resource group"), "error was {err}");
}
