// crates/ucp-cli/src/tests/report.rs
// ============================================================================
// Module: Id Report Tests
// Description: Unit tests for the `ucp id parse` display model.
// Purpose: Pin the derived views and text layout shown to users.
// Dependencies: ucp-cli report module, ucp-resources
// ============================================================================

use serde_json::json;
use ucp_resources::IdKind;
use ucp_resources::Plane;
use ucp_resources::parse;

use crate::report::IdReport;

#[test]
fn report_collects_derived_views() {
    let id =
        parse("/planes/radius/local/resourceGroups/rg/providers/Applications.Core/containers/app")
            .unwrap();
    let report = IdReport::from_id(&id);
    assert_eq!(report.kind, IdKind::Resource);
    assert!(report.ucp_qualified);
    assert_eq!(report.root_scope, "/planes/radius/local/resourceGroups/rg");
    assert_eq!(report.provider, Some(Plane::Radius));
    assert_eq!(report.resource_type.as_deref(), Some("Applications.Core/containers"));
    assert_eq!(report.name.as_deref(), Some("app"));
    assert_eq!(report.scopes.len(), 2);
    assert_eq!(report.types.len(), 1);
}

#[test]
fn scope_report_has_no_instance_fields() {
    let report = IdReport::from_id(&parse("/subscriptions/s/resourceGroups/rg").unwrap());
    assert_eq!(report.kind, IdKind::Scope);
    assert_eq!(report.provider, Some(Plane::Azure));
    assert_eq!(report.resource_type, None);
    assert_eq!(report.name, None);

    let text = report.render_text();
    assert!(text.contains("ucp-qualified: no"), "text was {text}");
    assert!(text.contains("type:          -"), "text was {text}");
    assert!(text.contains("scope:         subscriptions/s"), "text was {text}");
}

#[test]
fn report_serializes_with_wire_names() {
    let report = IdReport::from_id(&parse("/planes/aws/aws/accounts/1").unwrap());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["kind"], json!("scope"));
    assert_eq!(value["provider"], json!("aws"));
    assert_eq!(value["scopes"][1], json!({"type": "accounts", "name": "1"}));
    assert_eq!(value["name"], json!(null));
}
