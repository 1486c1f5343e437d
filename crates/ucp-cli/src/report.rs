// crates/ucp-cli/src/report.rs
// ============================================================================
// Module: Resource Id Report
// Description: Structured breakdown of a parsed resource id for display.
// Purpose: Back `ucp id parse` text and JSON output with one model.
// Dependencies: serde, ucp-resources
// ============================================================================

//! ## Overview
//! [`IdReport`] collects every derived view of a [`ResourceId`] that the CLI
//! displays. Text rendering routes labels through the message catalog; JSON
//! rendering serializes the report directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use ucp_resources::IdKind;
use ucp_resources::Plane;
use ucp_resources::ResourceId;
use ucp_resources::ScopeSegment;
use ucp_resources::TypeSegment;
use ucp_resources::provider;

use crate::t;

// ============================================================================
// SECTION: Report
// ============================================================================

/// Display model for `ucp id parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdReport {
    /// Canonical form.
    pub id: String,
    /// Shape of the id.
    pub kind: IdKind,
    /// True for `/planes/...` ids.
    pub ucp_qualified: bool,
    /// Scope chain without type segments.
    pub root_scope: String,
    /// Owning provider, when recognized.
    pub provider: Option<Plane>,
    /// `namespace/type` of the last type segment.
    pub resource_type: Option<String>,
    /// Name of the last type segment.
    pub name: Option<String>,
    /// Scope segments, outer to inner.
    pub scopes: Vec<ScopeSegment>,
    /// Type segments, outer to inner.
    pub types: Vec<TypeSegment>,
}

impl IdReport {
    /// Builds the report for a parsed id.
    #[must_use]
    pub fn from_id(id: &ResourceId) -> Self {
        Self {
            id: id.to_string(),
            kind: id.kind(),
            ucp_qualified: id.is_ucp_qualified(),
            root_scope: id.root_scope(),
            provider: provider(id),
            resource_type: id.resource_type().ok(),
            name: id.name().ok().flatten().map(str::to_string),
            scopes: id.scope_segments().to_vec(),
            types: id.type_segments().to_vec(),
        }
    }

    /// Renders the report as aligned `label: value` lines.
    #[must_use]
    pub fn render_text(&self) -> String {
        let none = t!("id.report.none");
        let qualified = if self.ucp_qualified { t!("id.report.yes") } else { t!("id.report.no") };
        let mut lines = vec![
            t!("id.report.id", value = self.id),
            t!("id.report.kind", value = self.kind),
            t!("id.report.ucp_qualified", value = qualified),
            t!("id.report.root_scope", value = self.root_scope),
            t!(
                "id.report.provider",
                value = self.provider.map_or_else(|| none.clone(), |plane| plane.to_string())
            ),
            t!("id.report.type", value = self.resource_type.as_deref().unwrap_or(&none)),
            t!("id.report.name", value = self.name.as_deref().unwrap_or(&none)),
        ];
        lines.extend(self.scopes.iter().map(|scope| t!("id.report.scope", value = scope)));
        lines.extend(self.types.iter().map(|segment| t!("id.report.segment", value = segment)));
        lines.join("\n")
    }
}
