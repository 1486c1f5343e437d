// crates/ucp-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog integrity and placeholder substitution.
// Purpose: Ensure every catalog template is well-formed and reachable.
// Dependencies: ucp-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies the CLI message catalog has unique keys and balanced placeholders,
//! and that every `t!` key used by the binary and the report resolves.

use std::collections::BTreeSet;

use crate::i18n::CATALOG_ITEMS;
use crate::i18n::MessageArg;
use crate::i18n::translate;
use crate::t;

/// Sources whose `t!` call sites must resolve against the catalog.
const CALL_SITES: [(&str, &str); 2] =
    [("main.rs", include_str!("../main.rs")), ("report.rs", include_str!("../report.rs"))];

/// Collects the literal key of every `t!(` invocation in `source`.
fn used_keys(source: &str) -> Vec<&str> {
    source
        .match_indices("t!(")
        .filter(|(start, _)| {
            !source[.. *start].ends_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
        })
        .filter_map(|(start, call)| {
            let rest = source[start + call.len() ..].trim_start().strip_prefix('"')?;
            rest.split('"').next()
        })
        .collect()
}

#[test]
fn catalog_keys_are_unique() {
    let keys: BTreeSet<&str> = CATALOG_ITEMS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), CATALOG_ITEMS.len(), "duplicate catalog key");
}

#[test]
fn catalog_placeholders_are_balanced() {
    for (key, template) in CATALOG_ITEMS {
        assert_eq!(
            template.matches('{').count(),
            template.matches('}').count(),
            "unbalanced placeholder in {key}"
        );
    }
}

#[test]
fn unmatched_placeholders_are_left_in_place() {
    let rendered =
        translate("id.scope.not_found", vec![MessageArg::new("id", "/planes/radius/local")]);
    assert_eq!(rendered, "Resource id /planes/radius/local has no '{segment}' scope.");
}

#[test]
fn every_used_key_exists_in_catalog() {
    let keys: BTreeSet<&str> = CATALOG_ITEMS.iter().map(|(key, _)| *key).collect();
    for (file, source) in CALL_SITES {
        let used = used_keys(source);
        assert!(!used.is_empty(), "no t! call sites found in {file}");
        for key in used {
            assert!(keys.contains(key), "{file} uses missing catalog key {key}");
        }
    }
}

#[test]
fn missing_keys_fall_back_to_the_key() {
    assert_eq!(translate("missing.key", Vec::new()), "missing.key");
}

#[test]
fn group_check_message_renders_both_arguments() {
    let rendered = t!(
        "env.check_group.ok",
        environment = "/planes/radius/local/resourceGroups/rg/providers/Applications.Core/environments/e",
        group = "rg"
    );
    assert!(rendered.starts_with("Environment /planes/radius/local/resourceGroups/rg/"));
    assert!(rendered.ends_with("belongs to resource group rg."));
}
