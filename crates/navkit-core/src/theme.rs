//! Theme-level class prefix resolution.
//!
//! Every component has a default class root named after its kind (`nav`,
//! `nav-item`, `nav-link`, `navbar`). A theme may remap those roots, and a
//! single component may override its own root explicitly. Resolution order
//! is: explicit prefix, theme override for the kind, the kind itself.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Component kind for navigation containers.
pub const NAV: &str = "nav";
/// Component kind for navigation items.
pub const NAV_ITEM: &str = "nav-item";
/// Component kind for navigation links.
pub const NAV_LINK: &str = "nav-link";
/// Component kind for navbars.
pub const NAVBAR: &str = "navbar";
/// Component kind for card headers.
pub const CARD_HEADER: &str = "card-header";

/// Theme definition carrying class prefix overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    #[serde(default)]
    pub name: String,
    /// Prefix overrides keyed by component kind
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,
}

impl Theme {
    /// Create an empty theme with default prefixes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a theme with a custom name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the class prefix for a component kind.
    #[must_use]
    pub fn with_prefix(mut self, kind: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(kind.into(), prefix.into());
        self
    }

    /// Resolve the class root for a component.
    ///
    /// Empty explicit prefixes are ignored.
    #[must_use]
    pub fn resolve_prefix(&self, explicit: Option<&str>, kind: &str) -> String {
        explicit
            .filter(|p| !p.is_empty())
            .or_else(|| self.prefixes.get(kind).map(String::as_str))
            .unwrap_or(kind)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefix_default_kind() {
        let theme = Theme::new();
        assert_eq!(theme.resolve_prefix(None, NAV), "nav");
    }

    #[test]
    fn test_resolve_prefix_theme_override() {
        let theme = Theme::new().with_prefix(NAV, "menu");
        assert_eq!(theme.resolve_prefix(None, NAV), "menu");
        assert_eq!(theme.resolve_prefix(None, NAV_LINK), "nav-link");
    }

    #[test]
    fn test_resolve_prefix_explicit_wins() {
        let theme = Theme::new().with_prefix(NAV, "menu");
        assert_eq!(theme.resolve_prefix(Some("custom"), NAV), "custom");
    }

    #[test]
    fn test_resolve_prefix_empty_explicit_ignored() {
        let theme = Theme::new();
        assert_eq!(theme.resolve_prefix(Some(""), NAV), "nav");
    }

    #[test]
    fn test_theme_with_name() {
        let theme = Theme::new().with_name("Brand");
        assert_eq!(theme.name, "Brand");
    }
}
