//! Load validation tests for ucp-config.
// crates/ucp-config/tests/load_validation.rs
// =============================================================================
// Module: Load Validation Tests
// Description: File resolution, size, encoding, and parse failures.
// Purpose: Ensure config loading fails closed on every bad input.
// =============================================================================

use std::path::PathBuf;

use ucp_config::ConfigError;
use ucp_config::MAX_CONFIG_FILE_SIZE;
use ucp_config::UcpConfig;

mod common;

type TestResult = Result<(), String>;

#[test]
fn loads_sample_config_from_explicit_path() -> TestResult {
    let (_dir, path) = common::write_config(common::sample_toml().as_bytes())?;
    let config = UcpConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    assert_eq!(config.default.as_deref(), Some("dev"));
    assert_eq!(config.workspaces.len(), 1);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let path = PathBuf::from("/nonexistent/ucp-config-test/ucp.toml");
    assert!(matches!(UcpConfig::load(Some(&path)), Err(ConfigError::Io(_))));
}

#[test]
fn oversized_file_is_rejected() -> TestResult {
    let mut contents = common::sample_toml().into_bytes();
    contents.push(b'#');
    contents.resize(MAX_CONFIG_FILE_SIZE + 1, b'x');
    let (_dir, path) = common::write_config(&contents)?;
    common::assert_invalid(UcpConfig::load(Some(&path)), "size limit")
}

#[test]
fn non_utf8_file_is_rejected() -> TestResult {
    let (_dir, path) = common::write_config(&[0xff, 0xfe, 0x00])?;
    common::assert_invalid(UcpConfig::load(Some(&path)), "utf-8")
}

#[test]
fn malformed_toml_is_parse_error() -> TestResult {
    let (_dir, path) = common::write_config(b"default = ")?;
    match UcpConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    let (_dir, path) = common::write_config(b"verbose = true\n")?;
    common::assert_invalid(UcpConfig::load(Some(&path)), "unknown field")
}

#[test]
fn invalid_ids_fail_at_load_time() -> TestResult {
    let (_dir, path) = common::write_config(b"[workspaces.dev]\nscope = \"/planes/radius\"\n")?;
    common::assert_invalid(UcpConfig::load(Some(&path)), "workspace 'dev'")
}

#[test]
fn empty_file_is_an_empty_config() -> TestResult {
    let (_dir, path) = common::write_config(b"")?;
    let config = UcpConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    assert_eq!(config, UcpConfig::default());
    Ok(())
}
