//! YAML manifest types for navkit navs.
//!
//! ```yaml
//! theme:
//!   prefixes:
//!     nav: menu
//! context:
//!   navbar: {}        # class root from the theme, `navbar` by default
//! nav:
//!   variant: pills
//!   defaultActiveKey: home
//!   aria-label: Main
//!   links:
//!     - eventKey: home
//!       label: Home
//!     - href: "#about"
//!       label: About
//! ```

use crate::error::ParseError;
use navkit_core::{CardHeaderContext, NavbarContext, RenderContext, RenderNode, Theme};
use navkit_widgets::{Nav, NavLink, NavProps};
use serde::{Deserialize, Serialize};

/// Ambient containers the nav is declared inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextConfig {
    /// Enclosing navbar; an empty prefix takes the theme's navbar root
    #[serde(default)]
    pub navbar: Option<NavbarContext>,
    /// Enclosing card header; an empty prefix takes the theme's root
    #[serde(default)]
    pub card_header: Option<CardHeaderContext>,
}

/// The `nav` section: props plus links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavSection {
    /// Links, each rendered inside its own item
    #[serde(default)]
    pub links: Vec<NavLink>,
    /// Nav props
    #[serde(flatten)]
    pub props: NavProps,
}

/// Nav manifest loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavManifest {
    /// Theme prefixes
    #[serde(default)]
    pub theme: Theme,
    /// Ambient containers
    #[serde(default)]
    pub context: ContextConfig,
    /// The nav itself
    pub nav: NavSection,
}

impl NavManifest {
    /// Parse a manifest from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let mut manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.check_links()?;
        manifest.resolve_context_prefixes();
        Ok(manifest)
    }

    fn resolve_context_prefixes(&mut self) {
        if let Some(navbar) = &mut self.context.navbar {
            *navbar = NavbarContext::themed(&self.theme, Some(navbar.prefix.as_str()));
        }
        if let Some(header) = &mut self.context.card_header {
            *header = CardHeaderContext::themed(&self.theme, Some(header.header_prefix.as_str()));
        }
    }

    fn check_links(&self) -> Result<(), ParseError> {
        for (i, link) in self.nav.links.iter().enumerate() {
            if link.label.trim().is_empty() {
                return Err(ParseError::InvalidValue {
                    field: format!("nav.links[{i}].label"),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Ambient snapshot described by the manifest.
    #[must_use]
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            theme: &self.theme,
            navbar: self.context.navbar.as_ref(),
            card_header: self.context.card_header.as_ref(),
        }
    }

    /// Props with the declared links attached.
    #[must_use]
    pub fn props(&self) -> NavProps {
        self.nav
            .links
            .iter()
            .cloned()
            .fold(self.nav.props.clone(), NavProps::link)
    }

    /// Build a nav, validating it against the declared context.
    pub fn build(&self) -> Result<Nav, ParseError> {
        let nav = Nav::try_new(self.props())?;
        nav.resolve(&self.render_context())?;
        tracing::debug!(links = self.nav.links.len(), "built nav from manifest");
        Ok(nav)
    }

    /// Build and render the nav in its declared context.
    pub fn render(&self) -> Result<RenderNode, ParseError> {
        Ok(self.build()?.render(&self.render_context())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navkit_core::EventKey;
    use navkit_widgets::NavVariant;

    const BASIC: &str = r##"
nav:
  variant: tabs
  activeKey: home
  links:
    - eventKey: home
      label: Home
    - href: "#about"
      label: About
"##;

    #[test]
    fn test_manifest_parse_basic() {
        let manifest = NavManifest::from_yaml(BASIC).unwrap();
        assert_eq!(manifest.nav.props.variant, Some(NavVariant::Tabs));
        assert_eq!(
            manifest.nav.props.active_key,
            Some(Some(EventKey::from("home")))
        );
        assert_eq!(manifest.nav.links.len(), 2);
        assert!(manifest.context.navbar.is_none());
    }

    #[test]
    fn test_manifest_props_attach_links() {
        let manifest = NavManifest::from_yaml(BASIC).unwrap();
        let props = manifest.props();
        assert_eq!(props.children.len(), 2);
    }

    #[test]
    fn test_manifest_render() {
        let node = NavManifest::from_yaml(BASIC).unwrap().render().unwrap();
        assert_eq!(node.class_name.to_string(), "nav nav-tabs");
        assert_eq!(node.children.len(), 2);
        assert!(node.children[0].children[0].has_class("active"));
    }

    #[test]
    fn test_manifest_empty_label_rejected() {
        let yaml = "nav:\n  links:\n    - eventKey: a\n      label: \"  \"\n";
        let err = NavManifest::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { ref field, .. } if field == "nav.links[0].label"));
    }

    #[test]
    fn test_manifest_context_prefixes_from_theme() {
        let yaml = "theme:\n  prefixes:\n    navbar: topbar\ncontext:\n  navbar: {}\n  cardHeader: {}\nnav: {}\n";
        let manifest = NavManifest::from_yaml(yaml).unwrap();
        assert_eq!(
            manifest.context.navbar,
            Some(NavbarContext::new("topbar"))
        );
        assert_eq!(
            manifest.context.card_header,
            Some(CardHeaderContext::new("card-header"))
        );
        assert_eq!(manifest.render().unwrap().class_name.to_string(), "topbar-nav");
    }

    #[test]
    fn test_manifest_null_active_key_is_controlled() {
        let yaml = "nav:\n  activeKey: null\n  defaultActiveKey: a\n  links:\n    - eventKey: a\n      label: A\n";
        let nav = NavManifest::from_yaml(yaml).unwrap().build().unwrap();
        assert_eq!(nav.mode(), navkit_core::ValueMode::Controlled);
        assert!(nav.active_key().is_none());
    }

    #[test]
    fn test_manifest_missing_nav() {
        assert!(matches!(
            NavManifest::from_yaml("theme: {}\n"),
            Err(ParseError::Yaml(_))
        ));
    }
}
