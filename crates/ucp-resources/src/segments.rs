// crates/ucp-resources/src/segments.rs
// ============================================================================
// Module: Identifier Segments
// Description: Scope and type segments, the building blocks of resource ids.
// Purpose: Immutable value types with keyword-insensitive equality.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A resource id is an ordered chain of [`ScopeSegment`]s followed by an
//! ordered chain of [`TypeSegment`]s. Segment *types* are fixed vocabulary and
//! compare ignoring ASCII case; segment *names* are user data and compare
//! exactly.
//!
//! ## Invariants
//! - No component is empty or contains the `/` separator.
//! - No component equals the `providers` keyword.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseError;
use crate::keywords::SEGMENT_SEPARATOR;
use crate::keywords::is_providers;

// ============================================================================
// SECTION: Scope Segment
// ============================================================================

/// One `(type, name)` level of the scope chain.
///
/// Planes are stored the same way: `/planes/radius/local` becomes
/// `{ type: "radius", name: "local" }`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScopeSegmentRepr")]
pub struct ScopeSegment {
    #[serde(rename = "type")]
    segment_type: String,
    name: String,
}

impl ScopeSegment {
    /// Creates a scope segment from a type and a name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedPath`] when a component is empty,
    /// contains `/`, or is the `providers` keyword.
    pub fn new(
        segment_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ParseError> {
        let segment_type = segment_type.into();
        let name = name.into();
        validate_component(&segment_type)?;
        validate_component(&name)?;
        Ok(Self {
            segment_type,
            name,
        })
    }

    /// Builds a segment from tokens the parser already validated.
    pub(crate) fn from_tokens(segment_type: &str, name: &str) -> Self {
        Self {
            segment_type: segment_type.to_string(),
            name: name.to_string(),
        }
    }

    /// Scope type (`resourceGroups`, `subscriptions`, or a plane type).
    #[must_use]
    pub fn segment_type(&self) -> &str {
        &self.segment_type
    }

    /// Scope name, exactly as supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the type matches `segment_type` ignoring ASCII case.
    #[must_use]
    pub fn is_type(&self, segment_type: &str) -> bool {
        self.segment_type.eq_ignore_ascii_case(segment_type)
    }
}

impl PartialEq for ScopeSegment {
    fn eq(&self, other: &Self) -> bool {
        self.segment_type.eq_ignore_ascii_case(&other.segment_type) && self.name == other.name
    }
}

impl Hash for ScopeSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.segment_type, state);
        self.name.hash(state);
    }
}

impl fmt::Display for ScopeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.segment_type, self.name)
    }
}

/// Wire form used to route deserialization through validation.
#[derive(Deserialize)]
struct ScopeSegmentRepr {
    #[serde(rename = "type")]
    segment_type: String,
    name: String,
}

impl TryFrom<ScopeSegmentRepr> for ScopeSegment {
    type Error = ParseError;

    fn try_from(value: ScopeSegmentRepr) -> Result<Self, Self::Error> {
        Self::new(value.segment_type, value.name)
    }
}

// ============================================================================
// SECTION: Type Segment
// ============================================================================

/// One `(providerNamespace, type, name)` triple of the type chain.
///
/// A segment without a name is a collection reference
/// (`Applications.Core/containers`). Nested child segments carry the
/// namespace of the provider run they belong to.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypeSegmentRepr", rename_all = "camelCase")]
pub struct TypeSegment {
    provider_namespace: String,
    #[serde(rename = "type")]
    segment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl TypeSegment {
    /// Creates a named type segment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedPath`] when a component is empty,
    /// contains `/`, or is the `providers` keyword.
    pub fn new(
        provider_namespace: impl Into<String>,
        segment_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ParseError> {
        Self::build(provider_namespace.into(), segment_type.into(), Some(name.into()))
    }

    /// Creates a collection reference (no instance name).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedPath`] when a component is invalid.
    pub fn collection(
        provider_namespace: impl Into<String>,
        segment_type: impl Into<String>,
    ) -> Result<Self, ParseError> {
        Self::build(provider_namespace.into(), segment_type.into(), None)
    }

    fn build(
        provider_namespace: String,
        segment_type: String,
        name: Option<String>,
    ) -> Result<Self, ParseError> {
        validate_component(&provider_namespace)?;
        validate_component(&segment_type)?;
        if let Some(name) = &name {
            validate_component(name)?;
        }
        Ok(Self {
            provider_namespace,
            segment_type,
            name,
        })
    }

    /// Builds a segment from tokens the parser already validated.
    pub(crate) fn from_tokens(
        provider_namespace: &str,
        segment_type: &str,
        name: Option<&str>,
    ) -> Self {
        Self {
            provider_namespace: provider_namespace.to_string(),
            segment_type: segment_type.to_string(),
            name: name.map(str::to_string),
        }
    }

    /// Provider namespace (`Applications.Core`).
    #[must_use]
    pub fn provider_namespace(&self) -> &str {
        &self.provider_namespace
    }

    /// Resource type without namespace (`containers`).
    #[must_use]
    pub fn segment_type(&self) -> &str {
        &self.segment_type
    }

    /// Instance name, or `None` for a collection reference.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when this segment names no instance.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.name.is_none()
    }

    /// `namespace/type`, e.g. `Applications.Core/containers`.
    #[must_use]
    pub fn full_type(&self) -> String {
        format!("{}{SEGMENT_SEPARATOR}{}", self.provider_namespace, self.segment_type)
    }

    /// True when both segments belong to the same provider namespace.
    #[must_use]
    pub fn same_namespace(&self, other: &Self) -> bool {
        self.provider_namespace.eq_ignore_ascii_case(&other.provider_namespace)
    }
}

impl PartialEq for TypeSegment {
    fn eq(&self, other: &Self) -> bool {
        self.same_namespace(other)
            && self.segment_type.eq_ignore_ascii_case(&other.segment_type)
            && self.name == other.name
    }
}

impl Hash for TypeSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.provider_namespace, state);
        hash_ignore_ascii_case(&self.segment_type, state);
        self.name.hash(state);
    }
}

impl fmt::Display for TypeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}/{}/{name}", self.provider_namespace, self.segment_type),
            None => write!(f, "{}/{}", self.provider_namespace, self.segment_type),
        }
    }
}

/// Wire form used to route deserialization through validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeSegmentRepr {
    provider_namespace: String,
    #[serde(rename = "type")]
    segment_type: String,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<TypeSegmentRepr> for TypeSegment {
    type Error = ParseError;

    fn try_from(value: TypeSegmentRepr) -> Result<Self, Self::Error> {
        Self::build(value.provider_namespace, value.segment_type, value.name)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Computes where `providers` runs begin for a flat list of type segments.
///
/// A new run starts at index 0 and wherever the namespace changes.
#[must_use]
pub fn provider_runs(types: &[TypeSegment]) -> Vec<usize> {
    let mut runs = Vec::new();
    for (index, segment) in types.iter().enumerate() {
        let starts_run = match index.checked_sub(1).and_then(|prev| types.get(prev)) {
            Some(previous) => !previous.same_namespace(segment),
            None => true,
        };
        if starts_run {
            runs.push(index);
        }
    }
    runs
}

fn validate_component(component: &str) -> Result<(), ParseError> {
    if component.is_empty() || component.contains(SEGMENT_SEPARATOR) || is_providers(component) {
        return Err(ParseError::MalformedPath {
            id: component.to_string(),
        });
    }
    Ok(())
}

fn hash_ignore_ascii_case<H: Hasher>(value: &str, state: &mut H) {
    for byte in value.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}
