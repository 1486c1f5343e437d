// crates/ucp-config/src/lib.rs
// ============================================================================
// Module: UCP Config Library
// Description: Workspace configuration model and validation.
// Purpose: Single source of truth for ucp.toml semantics.
// Dependencies: serde, toml, tracing, ucp-resources
// ============================================================================

//! ## Overview
//! `ucp-config` loads the workspace file that pins a default scope and a
//! default environment for the `ucp` CLI. Validation is strict and fails
//! closed: every configured id must parse and have the expected shape.
//!
//! Security posture: config inputs are untrusted; paths and file sizes are
//! bounded before parsing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
