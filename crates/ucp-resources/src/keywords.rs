// crates/ucp-resources/src/keywords.rs
// ============================================================================
// Module: Path Keywords
// Description: Closed vocabulary of the fixed keywords in resource id paths.
// Purpose: Single source of truth for keyword matching and canonical casing.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Resource ids mix fixed vocabulary (`planes`, `providers`, `resourceGroups`)
//! with user data (names). Keywords match case-insensitively on input and are
//! always emitted with the canonical casing returned by [`Keyword::as_str`].

use std::fmt;

// ============================================================================
// SECTION: Well-Known Values
// ============================================================================

/// Path separator between tokens.
pub const SEGMENT_SEPARATOR: char = '/';

/// Namespace of the core application resource provider.
pub const CORE_NAMESPACE: &str = "Applications.Core";
/// Namespace of the legacy link resource provider.
pub const LINK_NAMESPACE: &str = "Applications.Link";
/// Namespace of the datastores resource provider.
pub const DATASTORES_NAMESPACE: &str = "Applications.Datastores";
/// Namespace of the Dapr resource provider.
pub const DAPR_NAMESPACE: &str = "Applications.Dapr";
/// Namespace of the messaging resource provider.
pub const MESSAGING_NAMESPACE: &str = "Applications.Messaging";

/// Provider namespaces served by the control plane itself.
pub const SUPPORTED_NAMESPACES: [&str; 5] =
    [CORE_NAMESPACE, LINK_NAMESPACE, DATASTORES_NAMESPACE, DAPR_NAMESPACE, MESSAGING_NAMESPACE];

/// Fully qualified type of an environment resource.
pub const ENVIRONMENTS_TYPE: &str = "Applications.Core/environments";
/// Fully qualified type of an application resource.
pub const APPLICATIONS_TYPE: &str = "Applications.Core/applications";

/// Returns true when `namespace` is served by the control plane itself.
#[must_use]
pub fn is_supported_namespace(namespace: &str) -> bool {
    SUPPORTED_NAMESPACES.iter().any(|known| known.eq_ignore_ascii_case(namespace))
}

// ============================================================================
// SECTION: Keyword
// ============================================================================

/// Fixed keywords recognized by the grammar.
///
/// # Invariants
/// - `Planes` and `Providers` are structural; every other variant introduces
///   a `(keyword, name)` scope pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Introduces a `(planeType, planeName)` pair at the root.
    Planes,
    /// Separates the scope chain from a run of type segments.
    Providers,
    /// Azure subscription scope.
    Subscriptions,
    /// Resource group scope.
    ResourceGroups,
    /// AWS account scope.
    Accounts,
    /// AWS region scope.
    Regions,
    /// Azure location scope.
    Locations,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Planes,
        Self::Providers,
        Self::Subscriptions,
        Self::ResourceGroups,
        Self::Accounts,
        Self::Regions,
        Self::Locations,
    ];

    /// Matches a token against the vocabulary, ignoring ASCII case.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str().eq_ignore_ascii_case(token))
    }

    /// Canonical spelling used by the serializer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planes => "planes",
            Self::Providers => "providers",
            Self::Subscriptions => "subscriptions",
            Self::ResourceGroups => "resourceGroups",
            Self::Accounts => "accounts",
            Self::Regions => "regions",
            Self::Locations => "locations",
        }
    }

    /// True for keywords that open a `(keyword, name)` scope pair.
    #[must_use]
    pub const fn is_scope(self) -> bool {
        !matches!(self, Self::Planes | Self::Providers)
    }

    /// True for keywords that may start an ARM-relative id.
    #[must_use]
    pub const fn is_arm_root(self) -> bool {
        matches!(self, Self::Subscriptions | Self::ResourceGroups)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `token` is the `providers` keyword in any casing.
pub(crate) fn is_providers(token: &str) -> bool {
    Keyword::Providers.as_str().eq_ignore_ascii_case(token)
}

/// Returns the canonical spelling of `segment_type` if it is a keyword.
pub(crate) fn canonical_scope_type(segment_type: &str) -> Option<&'static str> {
    Keyword::parse(segment_type).filter(|keyword| keyword.is_scope()).map(Keyword::as_str)
}

#[cfg(test)]
mod tests {
    use super::Keyword;
    use super::is_supported_namespace;

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(Keyword::parse("RESOURCEGROUPS"), Some(Keyword::ResourceGroups));
        assert_eq!(Keyword::parse("Planes"), Some(Keyword::Planes));
        assert_eq!(Keyword::parse("resource-groups"), None);
    }

    #[test]
    fn only_subscriptions_and_groups_start_relative_ids() {
        let roots: Vec<Keyword> =
            Keyword::ALL.into_iter().filter(|keyword| keyword.is_arm_root()).collect();
        assert_eq!(roots, vec![Keyword::Subscriptions, Keyword::ResourceGroups]);
    }

    #[test]
    fn supported_namespaces_ignore_case() {
        assert!(is_supported_namespace("applications.core"));
        assert!(!is_supported_namespace("Microsoft.Cache"));
    }
}
