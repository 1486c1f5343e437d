// crates/ucp-resources/src/serializer.rs
// ============================================================================
// Module: Resource Id Serializer
// Description: Canonical slash-delimited rendering of resource ids.
// Purpose: Guarantee `parse(serialize(id)) == id` and canonical keyword casing.
// Dependencies: crate::{error, id, keywords, parser, segments}
// ============================================================================

//! ## Overview
//! Keywords are always written in canonical casing (`planes`, `providers`,
//! `resourceGroups`, `subscriptions`). Names, namespaces, and resource types
//! are written exactly as stored. The empty id renders as `/`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ParseError;
use crate::id::ResourceId;
use crate::keywords::Keyword;
use crate::keywords::SEGMENT_SEPARATOR;
use crate::keywords::canonical_scope_type;
use crate::parser::parse;
use crate::segments::ScopeSegment;
use crate::segments::TypeSegment;
use crate::segments::provider_runs;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders `id` in canonical form.
#[must_use]
pub fn serialize(id: &ResourceId) -> String {
    write_id(id.is_ucp_qualified(), id.scope_segments(), id.type_segments(), id.provider_runs())
}

/// Builds a UCP-qualified id string; the first scope is the plane.
///
/// Type segments start a new `providers` run wherever the namespace changes.
/// Recognized plane types come back in canonical casing (`RADIUS` becomes
/// `radius`).
///
/// # Errors
///
/// Returns the [`ParseError`] the rendered string fails with, for example
/// [`ParseError::TrailingTokens`] when a scope after the plane is not a scope
/// keyword.
pub fn make_ucp_id(scopes: &[ScopeSegment], types: &[TypeSegment]) -> Result<String, ParseError> {
    canonicalize(&write_id(true, scopes, types, &provider_runs(types)))
}

/// Builds an ARM-relative id string (no plane prefix).
///
/// # Errors
///
/// Returns [`ParseError::UnrecognizedRootSegment`] when the first scope is
/// not `subscriptions` or `resourceGroups`, or whatever other error the
/// rendered string fails with.
pub fn make_relative_id(
    scopes: &[ScopeSegment],
    types: &[TypeSegment],
) -> Result<String, ParseError> {
    canonicalize(&write_id(false, scopes, types, &provider_runs(types)))
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the parts of an id; `runs` lists where `providers` runs begin.
pub(crate) fn write_id(
    ucp_qualified: bool,
    scopes: &[ScopeSegment],
    types: &[TypeSegment],
    runs: &[usize],
) -> String {
    let mut out = String::new();
    let mut scopes = scopes.iter();
    if ucp_qualified && let Some(plane) = scopes.next() {
        push_token(&mut out, Keyword::Planes.as_str());
        push_token(&mut out, plane.segment_type());
        push_token(&mut out, plane.name());
    }
    for scope in scopes {
        let scope_type = canonical_scope_type(scope.segment_type()).unwrap_or(scope.segment_type());
        push_token(&mut out, scope_type);
        push_token(&mut out, scope.name());
    }

    for (index, segment) in types.iter().enumerate() {
        if runs.contains(&index) {
            push_token(&mut out, Keyword::Providers.as_str());
            push_token(&mut out, segment.provider_namespace());
        }
        push_token(&mut out, segment.segment_type());
        if let Some(name) = segment.name() {
            push_token(&mut out, name);
        }
    }

    if out.is_empty() {
        out.push(SEGMENT_SEPARATOR);
    }
    out
}

/// Built strings must parse back; the parsed form is the canonical one.
fn canonicalize(raw: &str) -> Result<String, ParseError> {
    parse(raw).map(|id| serialize(&id))
}

fn push_token(out: &mut String, token: &str) {
    out.push(SEGMENT_SEPARATOR);
    out.push_str(token);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions.")]

    use super::make_relative_id;
    use super::make_ucp_id;
    use crate::error::ParseError;
    use crate::segments::ScopeSegment;
    use crate::segments::TypeSegment;

    #[test]
    fn ucp_ids_prefix_the_plane() {
        let scopes = [
            ScopeSegment::new("radius", "local").unwrap(),
            ScopeSegment::new("resourcegroups", "rg").unwrap(),
        ];
        let types = [TypeSegment::new("Applications.Core", "environments", "env").unwrap()];
        assert_eq!(
            make_ucp_id(&scopes, &types).unwrap(),
            "/planes/radius/local/resourceGroups/rg/providers/Applications.Core/environments/env"
        );
    }

    #[test]
    fn known_planes_are_canonicalized() {
        let scopes = [ScopeSegment::new("RADIUS", "local").unwrap()];
        assert_eq!(make_ucp_id(&scopes, &[]).unwrap(), "/planes/radius/local");

        let unknown = [ScopeSegment::new("Kubernetes", "local").unwrap()];
        assert_eq!(make_ucp_id(&unknown, &[]).unwrap(), "/planes/Kubernetes/local");
    }

    #[test]
    fn relative_ids_have_no_plane() {
        let scopes = [ScopeSegment::new("Subscriptions", "s1").unwrap()];
        assert_eq!(make_relative_id(&scopes, &[]).unwrap(), "/subscriptions/s1");
    }

    #[test]
    fn non_keyword_scopes_are_rejected() {
        let scopes = [
            ScopeSegment::new("radius", "local").unwrap(),
            ScopeSegment::new("foo", "bar").unwrap(),
        ];
        assert!(matches!(make_ucp_id(&scopes, &[]), Err(ParseError::TrailingTokens { .. })));

        let relative = [ScopeSegment::new("accounts", "a").unwrap()];
        assert!(matches!(
            make_relative_id(&relative, &[]),
            Err(ParseError::UnrecognizedRootSegment { .. })
        ));
    }

    #[test]
    fn empty_parts_render_as_root() {
        assert_eq!(make_ucp_id(&[], &[]).unwrap(), "/");
        assert_eq!(make_relative_id(&[], &[]).unwrap(), "/");
    }

    #[test]
    fn namespace_change_opens_a_new_run() {
        let scopes = [ScopeSegment::new("radius", "local").unwrap()];
        let types = [
            TypeSegment::new("Applications.Core", "containers", "app").unwrap(),
            TypeSegment::new("Applications.Core", "volumes", "vol").unwrap(),
            TypeSegment::collection("Some.Extension", "extensionType").unwrap(),
        ];
        assert_eq!(
            make_ucp_id(&scopes, &types).unwrap(),
            "/planes/radius/local/providers/Applications.Core/containers/app/volumes/vol/providers/\
             Some.Extension/extensionType"
        );
    }
}
