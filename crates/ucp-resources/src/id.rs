// crates/ucp-resources/src/id.rs
// ============================================================================
// Module: Resource Id
// Description: Structured resource id and its read-only scope algebra.
// Purpose: Answer containment, type, and naming questions about an id.
// Dependencies: serde, crate::{error, keywords, parser, segments, serializer}
// ============================================================================

//! ## Overview
//! A [`ResourceId`] is created only by the parser or by [`ResourceId::append`]
//! and is never mutated afterwards. Every query here is pure; queries that
//! can fail return [`ParseError`] rather than panicking, including on the
//! root id `/`.
//!
//! ## Invariants
//! - Scope segments are non-empty unless the id is the root.
//! - When UCP-qualified, the first scope segment is the plane.
//! - `provider_runs` starts at 0 when type segments exist, is strictly
//!   increasing, and indexes into `type_segments`.
//! - Only the final type segment may be a collection reference.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::ParseError;
use crate::keywords::Keyword;
use crate::keywords::SEGMENT_SEPARATOR;
use crate::keywords::is_supported_namespace;
use crate::parser::parse;
use crate::segments::ScopeSegment;
use crate::segments::TypeSegment;
use crate::serializer::serialize;
use crate::serializer::write_id;

// ============================================================================
// SECTION: Kind
// ============================================================================

/// Shape of a resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    /// The UCP root `/`.
    Root,
    /// A named scope such as a plane or resource group.
    Scope,
    /// A named resource instance.
    Resource,
    /// All resources of one type.
    ResourceCollection,
    /// A named resource under a second `providers` run.
    ExtensionResource,
    /// All extension resources of one type.
    ExtensionCollection,
}

impl IdKind {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Scope => "scope",
            Self::Resource => "resource",
            Self::ResourceCollection => "resource_collection",
            Self::ExtensionResource => "extension_resource",
            Self::ExtensionCollection => "extension_collection",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Resource Id
// ============================================================================

/// Parsed UCP or ARM resource id.
///
/// Equality ignores the casing of keywords, namespaces, and types, and
/// respects the casing of names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    /// Scope chain, outer to inner.
    scope_segments: Vec<ScopeSegment>,
    /// Type chain, outer to inner.
    type_segments: Vec<TypeSegment>,
    /// Offsets into `type_segments` where a `providers` run begins.
    provider_runs: Vec<usize>,
    /// True when the id was rooted at `/planes`.
    ucp_qualified: bool,
}

impl ResourceId {
    /// The UCP root id `/`.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            scope_segments: Vec::new(),
            type_segments: Vec::new(),
            provider_runs: Vec::new(),
            ucp_qualified: true,
        }
    }

    pub(crate) fn from_parts(
        scope_segments: Vec<ScopeSegment>,
        type_segments: Vec<TypeSegment>,
        provider_runs: Vec<usize>,
        ucp_qualified: bool,
    ) -> Self {
        if scope_segments.is_empty() && type_segments.is_empty() {
            return Self::root();
        }
        Self {
            scope_segments,
            type_segments,
            provider_runs,
            ucp_qualified,
        }
    }

    // ------------------------------------------------------------------------
    // Segments
    // ------------------------------------------------------------------------

    /// Full scope chain.
    #[must_use]
    pub fn scope_segments(&self) -> &[ScopeSegment] {
        &self.scope_segments
    }

    /// Full type chain, across every provider run.
    #[must_use]
    pub fn type_segments(&self) -> &[TypeSegment] {
        &self.type_segments
    }

    /// Offsets where each `providers` run begins.
    #[must_use]
    pub fn provider_runs(&self) -> &[usize] {
        &self.provider_runs
    }

    /// True when the id was written in the `/planes/...` dialect.
    #[must_use]
    pub const fn is_ucp_qualified(&self) -> bool {
        self.ucp_qualified
    }

    /// Name of the first scope whose type matches `segment_type` (any case).
    ///
    /// ```
    /// let id = ucp_resources::parse("/PLANES/radius/local/resourceGroups/MyRG").unwrap();
    /// assert_eq!(id.find_scope("resourcegroups"), Some("MyRG"));
    /// assert_eq!(id.find_scope("radius"), Some("local"));
    /// ```
    #[must_use]
    pub fn find_scope(&self, segment_type: &str) -> Option<&str> {
        self.scope_segments
            .iter()
            .find(|segment| segment.is_type(segment_type))
            .map(ScopeSegment::name)
    }

    /// Plane segment of a UCP-qualified id.
    #[must_use]
    pub fn plane(&self) -> Option<&ScopeSegment> {
        if self.ucp_qualified { self.scope_segments.first() } else { None }
    }

    /// `planeType/planeName`, e.g. `radius/local`.
    #[must_use]
    pub fn plane_namespace(&self) -> Option<String> {
        self.plane()
            .map(|plane| format!("{}{SEGMENT_SEPARATOR}{}", plane.segment_type(), plane.name()))
    }

    // ------------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------------

    /// Classifies the id.
    #[must_use]
    pub fn kind(&self) -> IdKind {
        let Some(last) = self.type_segments.last() else {
            return if self.scope_segments.is_empty() { IdKind::Root } else { IdKind::Scope };
        };
        match (self.provider_runs.len() > 1, last.is_collection()) {
            (false, false) => IdKind::Resource,
            (false, true) => IdKind::ResourceCollection,
            (true, false) => IdKind::ExtensionResource,
            (true, true) => IdKind::ExtensionCollection,
        }
    }

    /// True for the root id `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.kind() == IdKind::Root
    }

    /// True for the root or a named scope.
    #[must_use]
    pub fn is_scope(&self) -> bool {
        matches!(self.kind(), IdKind::Root | IdKind::Scope)
    }

    /// True for a named resource, including extension resources.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        matches!(self.kind(), IdKind::Resource | IdKind::ExtensionResource)
    }

    /// True when the final type segment has no name.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.type_segments.last().is_some_and(TypeSegment::is_collection)
    }

    /// True when the id has more than one `providers` run.
    #[must_use]
    pub fn is_extension(&self) -> bool {
        self.provider_runs.len() > 1
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Canonical string of the scope chain alone.
    ///
    /// Two resources live in the same group when their root scopes are equal.
    #[must_use]
    pub fn root_scope(&self) -> String {
        write_id(self.ucp_qualified, &self.scope_segments, &[], &[])
    }

    /// Plane (or subscription) scope without any nested resource group.
    ///
    /// `/planes/radius/local/resourceGroups/rg` yields `/planes/radius/local`.
    #[must_use]
    pub fn plane_scope(&self) -> String {
        let first = self
            .scope_segments
            .iter()
            .find(|segment| !segment.is_type(Keyword::ResourceGroups.as_str()))
            .cloned();
        let scopes: Vec<ScopeSegment> = first.into_iter().collect();
        write_id(self.ucp_qualified, &scopes, &[], &[])
    }

    /// Short name of the resource: the name of the last type segment.
    ///
    /// Returns `Ok(None)` for a collection reference.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAnInstance`] when the id has no type segments.
    pub fn name(&self) -> Result<Option<&str>, ParseError> {
        self.last_type_segment().map(TypeSegment::name)
    }

    /// `namespace/type` of the last type segment.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAnInstance`] when the id has no type segments.
    pub fn resource_type(&self) -> Result<String, ParseError> {
        self.last_type_segment().map(TypeSegment::full_type)
    }

    /// Every type of the innermost run joined by `/`.
    ///
    /// `.../providers/Applications.Core/containers/app/volumes/vol` yields
    /// `Applications.Core/containers/volumes`. Empty for scopes.
    #[must_use]
    pub fn full_type(&self) -> String {
        let run = self.innermost_run();
        let mut parts: Vec<&str> = Vec::with_capacity(run.len() + 1);
        if let Some(first) = run.first() {
            parts.push(first.provider_namespace());
        }
        parts.extend(run.iter().map(TypeSegment::segment_type));
        parts.join("/")
    }

    /// Namespace of the innermost provider run.
    #[must_use]
    pub fn provider_namespace(&self) -> Option<&str> {
        self.innermost_run().first().map(TypeSegment::provider_namespace)
    }

    /// True when the innermost run is served by the control plane itself.
    #[must_use]
    pub fn is_supported_resource(&self) -> bool {
        self.provider_namespace().is_some_and(is_supported_namespace)
    }

    /// Type/name pairs of the innermost run, without a leading slash.
    ///
    /// `Applications.Core/applications/my-app`
    #[must_use]
    pub fn routing_scope(&self) -> String {
        let run = self.innermost_run();
        let mut parts: Vec<&str> = Vec::new();
        if let Some(first) = run.first() {
            parts.push(first.provider_namespace());
        }
        for segment in run {
            parts.push(segment.segment_type());
            parts.extend(segment.name());
        }
        parts.join("/")
    }

    /// Instance names of the innermost run joined by `/`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        let names: Vec<&str> = self.innermost_run().iter().filter_map(TypeSegment::name).collect();
        names.join("/")
    }

    /// For an extension, the id of the resource it extends.
    #[must_use]
    pub fn parent_resource(&self) -> Option<Self> {
        if !self.is_extension() {
            return None;
        }
        let boundary = self.innermost_run_start();
        Some(Self {
            scope_segments: self.scope_segments.clone(),
            type_segments: self.type_segments[.. boundary].to_vec(),
            provider_runs: self.provider_runs[.. self.provider_runs.len() - 1].to_vec(),
            ucp_qualified: self.ucp_qualified,
        })
    }

    /// Verifies the id names an instance of `expected` (`namespace/type`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TypeMismatch`] for collections, scopes, or a
    /// different type.
    pub fn validate_type(&self, expected: &str) -> Result<(), ParseError> {
        let matches = self.is_resource()
            && self.resource_type().is_ok_and(|actual| actual.eq_ignore_ascii_case(expected));
        if matches {
            Ok(())
        } else {
            Err(ParseError::TypeMismatch {
                id: self.to_string(),
                expected: expected.to_string(),
            })
        }
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Returns a new id with `segment` appended; the receiver is unchanged.
    ///
    /// A segment in the same namespace as the current last segment nests as
    /// a child; a different namespace opens a new `providers` run.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAnInstance`] when the receiver is the root or
    /// ends in a collection reference, since neither can contain a child.
    ///
    /// ```
    /// use ucp_resources::TypeSegment;
    ///
    /// let scope = ucp_resources::parse("/planes/radius/local/resourceGroups/rg").unwrap();
    /// let env = scope
    ///     .append(TypeSegment::new("Applications.Core", "environments", "env1").unwrap())
    ///     .unwrap();
    /// assert_eq!(
    ///     env.to_string(),
    ///     "/planes/radius/local/resourceGroups/rg/providers/Applications.Core/environments/env1"
    /// );
    /// ```
    pub fn append(&self, segment: TypeSegment) -> Result<Self, ParseError> {
        if self.is_root() || self.is_collection() {
            return Err(ParseError::NotAnInstance {
                id: self.to_string(),
            });
        }
        let mut next = self.clone();
        let opens_run =
            next.type_segments.last().is_none_or(|last| !last.same_namespace(&segment));
        if opens_run {
            next.provider_runs.push(next.type_segments.len());
        }
        next.type_segments.push(segment);
        Ok(next)
    }

    /// The id with its innermost segment removed.
    ///
    /// Type segments are removed before scope segments; removing the last
    /// scope yields the root.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoParent`] on the root.
    pub fn parent_scope(&self) -> Result<Self, ParseError> {
        let mut parent = self.clone();
        if parent.type_segments.pop().is_some() {
            if parent.provider_runs.last() == Some(&parent.type_segments.len()) {
                parent.provider_runs.pop();
            }
        } else if parent.scope_segments.pop().is_none() {
            return Err(ParseError::NoParent {
                id: self.to_string(),
            });
        }
        Ok(Self::from_parts(
            parent.scope_segments,
            parent.type_segments,
            parent.provider_runs,
            parent.ucp_qualified,
        ))
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn last_type_segment(&self) -> Result<&TypeSegment, ParseError> {
        self.type_segments.last().ok_or_else(|| ParseError::NotAnInstance {
            id: self.to_string(),
        })
    }

    fn innermost_run_start(&self) -> usize {
        self.provider_runs.last().copied().unwrap_or(0)
    }

    fn innermost_run(&self) -> &[TypeSegment] {
        self.type_segments.get(self.innermost_run_start() ..).unwrap_or_default()
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

impl FromStr for ResourceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for ResourceId {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&serialize(self))
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
