// crates/ucp-cli/src/lib.rs
// ============================================================================
// Module: UCP CLI Library
// Description: Shared helpers for the ucp command-line interface.
// Purpose: Provide reusable components (i18n, reports) for the binary and tests.
// Dependencies: serde, ucp-resources
// ============================================================================

//! ## Overview
//! This library houses the message catalog and the resource id report model.
//! The binary entry point (`src/main.rs`) imports these helpers to keep all
//! user-facing output consistent.
//!
//! Security posture: CLI inputs are untrusted and are always run through the
//! strict resource id parser before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
/// Display model for parsed resource ids.
pub mod report;

#[cfg(test)]
mod tests;
