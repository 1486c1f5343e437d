// crates/ucp-resources/src/lib.rs
// ============================================================================
// Module: UCP Resources Library
// Description: Resource identifier model for UCP-qualified and ARM-relative ids.
// Purpose: Single source of truth for what a valid id is and what it denotes.
// Dependencies: serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! `ucp-resources` parses raw resource id strings into a structured
//! [`ResourceId`], answers scope-algebra questions about it (root scope,
//! named scope lookup, parent, append, provider), and serializes it back to
//! canonical form.
//!
//! ```text
//! raw string -> tokenizer -> parser -> ResourceId -> queries / append -> serializer
//! ```
//!
//! Security posture: ids are untrusted user input. The parser is total and
//! bounded; it never panics and rejects inputs longer than
//! [`MAX_ID_BYTES`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod id;
pub mod keywords;
pub mod parser;
pub mod provider;
pub mod segments;
pub mod serializer;
pub mod tokenizer;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ParseError;
pub use id::IdKind;
pub use id::ResourceId;
pub use keywords::APPLICATIONS_TYPE;
pub use keywords::ENVIRONMENTS_TYPE;
pub use keywords::Keyword;
pub use keywords::SUPPORTED_NAMESPACES;
pub use keywords::is_supported_namespace;
pub use parser::parse;
pub use parser::parse_resource;
pub use parser::parse_scope;
pub use provider::Plane;
pub use provider::provider;
pub use provider::provider_from_id;
pub use segments::ScopeSegment;
pub use segments::TypeSegment;
pub use serializer::make_relative_id;
pub use serializer::make_ucp_id;
pub use serializer::serialize;
pub use tokenizer::MAX_ID_BYTES;
