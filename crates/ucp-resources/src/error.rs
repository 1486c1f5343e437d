// crates/ucp-resources/src/error.rs
// ============================================================================
// Module: Resource Identifier Errors
// Description: Structured parse and query failures for resource identifiers.
// Purpose: Give callers a closed, matchable taxonomy with user-facing messages.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure in this crate is deterministic given the same input and is
//! never retryable. Each variant carries the offending identifier text so the
//! rendered message can be shown to the user verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while parsing or querying a resource identifier.
///
/// # Invariants
/// - `id` fields hold the raw input (or canonical form for query errors),
///   never a truncated or normalized variant of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Missing leading slash, empty path component, or trailing slash.
    #[error("'{id}' is not a valid resource id: the path is malformed")]
    MalformedPath {
        /// Offending input.
        id: String,
    },
    /// Input exceeded the identifier size limit.
    #[error("resource id exceeds size limit: {actual_bytes} bytes (max {max_bytes})")]
    TooLong {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual input length in bytes.
        actual_bytes: usize,
    },
    /// First token is neither `planes`, `subscriptions`, nor `resourceGroups`.
    #[error("'{id}' is not a valid resource id: unrecognized root segment '{segment}'")]
    UnrecognizedRootSegment {
        /// Offending input.
        id: String,
        /// The unrecognized leading token.
        segment: String,
    },
    /// `planes` keyword not followed by a plane type and a plane name.
    #[error("'{id}' is not a valid resource id: 'planes' must be followed by a type and a name")]
    IncompletePlane {
        /// Offending input.
        id: String,
    },
    /// A scope keyword not followed by a name token.
    #[error("'{id}' is not a valid resource id: scope '{segment}' is missing a name")]
    IncompleteScopeSegment {
        /// Offending input.
        id: String,
        /// Scope keyword that lacked a name.
        segment: String,
    },
    /// `providers` keyword not followed by a namespace and a type token.
    #[error(
        "'{id}' is not a valid resource id: 'providers' must be followed by a namespace and a type"
    )]
    IncompleteTypeSegment {
        /// Offending input.
        id: String,
    },
    /// Leftover tokens that do not fit any recognized pattern.
    #[error("'{id}' is not a valid resource id: unexpected segment '{token}'")]
    TrailingTokens {
        /// Offending input.
        id: String,
        /// First token that could not be consumed.
        token: String,
    },
    /// Instance query on an identifier without type segments.
    #[error("'{id}' does not refer to a resource instance")]
    NotAnInstance {
        /// Canonical form of the queried identifier.
        id: String,
    },
    /// Parent requested for the root identifier.
    #[error("'{id}' has no parent scope")]
    NoParent {
        /// Canonical form of the queried identifier.
        id: String,
    },
    /// A named scope was required.
    #[error("'{id}' is a valid resource id but does not refer to a scope")]
    ExpectedScope {
        /// Offending input.
        id: String,
    },
    /// A named resource instance was required.
    #[error("'{id}' is a valid resource id but does not refer to a resource")]
    ExpectedResource {
        /// Offending input.
        id: String,
    },
    /// The identifier is not an instance of the expected type.
    #[error("resource '{id}' does not match the expected resource type '{expected}'")]
    TypeMismatch {
        /// Canonical form of the queried identifier.
        id: String,
        /// Fully qualified type that was expected.
        expected: String,
    },
}

impl ParseError {
    /// Returns a stable, lowercase label for the variant.
    ///
    /// Labels are used in structured log fields and JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPath {
                ..
            } => "malformed_path",
            Self::TooLong {
                ..
            } => "too_long",
            Self::UnrecognizedRootSegment {
                ..
            } => "unrecognized_root_segment",
            Self::IncompletePlane {
                ..
            } => "incomplete_plane",
            Self::IncompleteScopeSegment {
                ..
            } => "incomplete_scope_segment",
            Self::IncompleteTypeSegment {
                ..
            } => "incomplete_type_segment",
            Self::TrailingTokens {
                ..
            } => "trailing_tokens",
            Self::NotAnInstance {
                ..
            } => "not_an_instance",
            Self::NoParent {
                ..
            } => "no_parent",
            Self::ExpectedScope {
                ..
            } => "expected_scope",
            Self::ExpectedResource {
                ..
            } => "expected_resource",
            Self::TypeMismatch {
                ..
            } => "type_mismatch",
        }
    }
}
