// crates/ucp-resources/src/provider.rs
// ============================================================================
// Module: Plane and Provider Derivation
// Description: Recognized planes and owning-provider lookup for resource ids.
// Purpose: One enumerated set of planes shared by parsing and display code.
// Dependencies: tracing, crate::{id, parser}
// ============================================================================

//! ## Overview
//! [`provider`] is the strict lookup: it takes a parsed id and answers with a
//! typed [`Plane`]. [`provider_from_id`] is the lossy adapter for display
//! paths such as hyperlink generation: it accepts raw input, never fails,
//! and degrades to an empty string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::id::ResourceId;
use crate::parser::parse;

// ============================================================================
// SECTION: Plane
// ============================================================================

/// Planes recognized for provider routing.
///
/// Other plane types still parse; they are simply not routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Radius-native resources.
    Radius,
    /// Azure Resource Manager.
    Azure,
    /// Amazon Web Services.
    Aws,
}

impl Plane {
    /// Every recognized plane.
    pub const ALL: [Self; 3] = [Self::Radius, Self::Azure, Self::Aws];

    /// Matches a plane type, ignoring ASCII case.
    #[must_use]
    pub fn parse(plane_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|plane| plane.as_str().eq_ignore_ascii_case(plane_type))
    }

    /// Canonical lower-case plane type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Azure => "azure",
            Self::Aws => "aws",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Owning provider of a parsed id.
///
/// UCP-qualified ids answer with their plane when it is recognized.
/// ARM-relative ids with at least one scope default to [`Plane::Azure`].
/// Everything else, including the root, has no provider.
#[must_use]
pub fn provider(id: &ResourceId) -> Option<Plane> {
    if id.is_ucp_qualified() {
        return id.plane().and_then(|plane| Plane::parse(plane.segment_type()));
    }
    if id.scope_segments().is_empty() { None } else { Some(Plane::Azure) }
}

/// Best-effort provider lookup over raw input.
///
/// Returns the canonical plane type, or an empty string when the input does
/// not parse or names no recognized provider. Parse failures are logged at
/// `debug` and otherwise discarded.
///
/// ```
/// use ucp_resources::provider_from_id;
///
/// assert_eq!(provider_from_id("/planes/azure/local/resourceGroups/default"), "azure");
/// assert_eq!(provider_from_id("not a valid id"), "");
/// ```
#[must_use]
pub fn provider_from_id(raw: &str) -> String {
    match parse(raw) {
        Ok(id) => provider(&id).map(|plane| plane.as_str().to_string()).unwrap_or_default(),
        Err(err) => {
            debug!(input = raw, error_kind = err.kind(), "provider lookup skipped unparseable id");
            String::new()
        }
    }
}
