// crates/ucp-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for the ucp CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The `ucp` CLI stores user-facing strings in a small translation catalog.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself to avoid panics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name used in message templates (e.g., `"id"`).
    pub key: &'static str,
    /// Formatted value substituted for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog.
pub(crate) const CATALOG_ITEMS: &[(&str, &str)] = &[
    ("main.version", "ucp {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to render JSON output: {error}"),
    ("id.invalid", "Invalid resource id: {error}"),
    ("id.report.id", "id:            {value}"),
    ("id.report.kind", "kind:          {value}"),
    ("id.report.ucp_qualified", "ucp-qualified: {value}"),
    ("id.report.root_scope", "root scope:    {value}"),
    ("id.report.provider", "provider:      {value}"),
    ("id.report.type", "type:          {value}"),
    ("id.report.name", "name:          {value}"),
    ("id.report.scope", "scope:         {value}"),
    ("id.report.segment", "segment:       {value}"),
    ("id.report.yes", "yes"),
    ("id.report.no", "no"),
    ("id.report.none", "-"),
    ("id.scope.not_found", "Resource id {id} has no '{segment}' scope."),
    ("id.name.collection", "Resource id {id} is a collection reference and has no name."),
    ("id.append.invalid_segment", "Invalid type segment: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("config.workspace_failed", "Failed to resolve workspace: {error}"),
    (
        "env.missing",
        "No environment specified. Pass --environment or set one for the workspace in the config \
         file.",
    ),
    ("env.invalid", "Invalid environment: {error}"),
    ("env.check_group.ok", "Environment {environment} belongs to resource group {group}."),
    (
        "env.check_group.mismatch",
        "Environment {environment} is in resource group '{actual}', not '{group}'.",
    ),
    ("env.check_group.no_group", "Environment {environment} is not scoped to a resource group."),
];

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the English catalog while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    CATALOG.get_or_init(|| CATALOG_ITEMS.iter().copied().collect())
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
