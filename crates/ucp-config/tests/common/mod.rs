// crates/ucp-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for workspace config tests.
// Purpose: Reduce duplication across integration tests for ucp-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use ucp_config::ConfigError;
use ucp_config::UcpConfig;

/// Scope id used by the sample workspace.
pub const DEV_SCOPE: &str = "/planes/radius/local/resourceGroups/dev";
/// Environment id used by the sample workspace.
pub const DEV_ENVIRONMENT: &str =
    "/planes/radius/local/resourceGroups/dev/providers/Applications.Core/environments/dev-env";

/// Parses a TOML string into a `UcpConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<UcpConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a valid config with a single default workspace named `dev`.
pub fn sample_toml() -> String {
    format!(
        "default = \"dev\"\n\n[workspaces.dev]\nscope = \"{DEV_SCOPE}\"\nenvironment = \
         \"{DEV_ENVIRONMENT}\"\n"
    )
}

/// Writes `contents` to `ucp.toml` inside a fresh temp dir.
pub fn write_config(contents: &[u8]) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("ucp.toml");
    fs::write(&path, contents).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Assert that a result is an error whose message contains `needle`.
pub fn assert_invalid<T: std::fmt::Debug>(
    result: Result<T, ConfigError>,
    needle: &str,
) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(value) => Err(format!("expected invalid config, got {value:?}")),
    }
}
