// crates/ucp-config/src/config.rs
// ============================================================================
// Module: UCP Workspace Configuration
// Description: Loading and validation of workspace defaults from ucp.toml.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml, tracing, ucp-resources
// ============================================================================

//! ## Overview
//! A workspace pins a default scope and, optionally, a default environment,
//! both by resource id. Configuration is loaded from a TOML file with strict
//! size and path limits, and every id is run through the strict parser at
//! load time so later lookups cannot surface grammar errors.
//!
//! ```toml
//! default = "dev"
//!
//! [workspaces.dev]
//! scope = "/planes/radius/local/resourceGroups/dev"
//! environment = "/planes/radius/local/resourceGroups/dev/providers/Applications.Core/environments/dev"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use ucp_resources::ENVIRONMENTS_TYPE;
use ucp_resources::ParseError;
use ucp_resources::ResourceId;
use ucp_resources::parse_resource;
use ucp_resources::parse_scope;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "ucp.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "UCP_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of configured workspaces.
pub const MAX_WORKSPACES: usize = 256;
/// Maximum length of a workspace name.
pub const MAX_WORKSPACE_NAME_LENGTH: usize = 64;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Top-level `ucp.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UcpConfig {
    /// Name of the workspace used when none is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Workspaces keyed by name.
    #[serde(default)]
    pub workspaces: BTreeMap<String, Workspace>,
}

impl UcpConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        debug!(path = %resolved.display(), "loading workspace config");
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        debug!(workspaces = config.workspaces.len(), "workspace config loaded");
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when any workspace or the default
    /// reference is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workspaces.len() > MAX_WORKSPACES {
            return Err(ConfigError::Invalid(format!(
                "too many workspaces (max {MAX_WORKSPACES})"
            )));
        }
        for (name, workspace) in &self.workspaces {
            validate_workspace_name(name)?;
            workspace.validate(name)?;
        }
        if let Some(default) = &self.default
            && !self.workspaces.contains_key(default)
        {
            return Err(ConfigError::Invalid(format!(
                "default workspace '{default}' is not defined"
            )));
        }
        Ok(())
    }

    /// Returns the named workspace, or the default one when `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownWorkspace`] for an undefined name and
    /// [`ConfigError::NoDefault`] when no name is given and no default is set.
    pub fn workspace(&self, name: Option<&str>) -> Result<&Workspace, ConfigError> {
        let name = match name {
            Some(name) => name,
            None => self.default.as_deref().ok_or(ConfigError::NoDefault)?,
        };
        self.workspaces.get(name).ok_or_else(|| ConfigError::UnknownWorkspace(name.to_string()))
    }
}

// ============================================================================
// SECTION: Workspace
// ============================================================================

/// Default scope and environment for a named workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Workspace {
    /// Resource id of the default scope (e.g. a resource group).
    pub scope: String,
    /// Resource id of the default environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl Workspace {
    /// Parsed default scope.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the scope is not a named scope.
    pub fn scope_id(&self) -> Result<ResourceId, ConfigError> {
        let id = parse_scope(&self.scope).map_err(|err| invalid_id("scope", &err))?;
        if id.is_root() {
            return Err(ConfigError::Invalid("scope must name a scope, not the root".to_string()));
        }
        Ok(id)
    }

    /// Parsed default environment, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the id is not an environment.
    pub fn environment_id(&self) -> Result<Option<ResourceId>, ConfigError> {
        let Some(raw) = &self.environment else {
            return Ok(None);
        };
        let id = parse_resource(raw).map_err(|err| invalid_id("environment", &err))?;
        id.validate_type(ENVIRONMENTS_TYPE).map_err(|err| invalid_id("environment", &err))?;
        Ok(Some(id))
    }

    /// Short name of the default environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the id is not an environment.
    pub fn environment_name(&self) -> Result<Option<String>, ConfigError> {
        let Some(id) = self.environment_id()? else {
            return Ok(None);
        };
        let name = id.name().map_err(|err| invalid_id("environment", &err))?;
        Ok(name.map(str::to_string))
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let scoped = |err: ConfigError| match err {
            ConfigError::Invalid(message) => {
                ConfigError::Invalid(format!("workspace '{name}': {message}"))
            }
            other => other,
        };
        self.scope_id().map_err(scoped)?;
        self.environment_id().map_err(scoped)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading, validation, or lookup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A workspace was requested by a name that is not configured.
    #[error("unknown workspace: {0}")]
    UnknownWorkspace(String),
    /// No workspace was requested and no default is configured.
    #[error("no default workspace configured")]
    NoDefault,
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        debug!(var = CONFIG_ENV_VAR, "config path taken from environment");
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Workspace names are short identifiers usable as CLI flag values.
fn validate_workspace_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Invalid("workspace name must be non-empty".to_string()));
    }
    if name.len() > MAX_WORKSPACE_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "workspace name '{name}' exceeds {MAX_WORKSPACE_NAME_LENGTH} characters"
        )));
    }
    if !name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_') {
        return Err(ConfigError::Invalid(format!(
            "workspace name '{name}' must contain only ascii letters, digits, '-' or '_'"
        )));
    }
    Ok(())
}

fn invalid_id(field: &str, err: &ParseError) -> ConfigError {
    ConfigError::Invalid(format!("{field}: {err}"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions.")]

    use std::path::PathBuf;

    use super::ConfigError;
    use super::MAX_PATH_COMPONENT_LENGTH;
    use super::resolve_path;
    use super::validate_path;
    use super::validate_workspace_name;

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("custom.toml");
        assert_eq!(resolve_path(Some(&path)).unwrap(), path);
    }

    #[test]
    fn long_path_component_is_rejected() {
        let path = PathBuf::from("a".repeat(MAX_PATH_COMPONENT_LENGTH + 1));
        assert!(matches!(validate_path(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn workspace_names_are_identifiers() {
        assert!(validate_workspace_name("dev_1-a").is_ok());
        assert!(validate_workspace_name("").is_err());
        assert!(validate_workspace_name("has space").is_err());
    }
}
