//! Integration tests for navkit-yaml.
//!
//! These tests load complete manifests and check the rendered nav end-to-end.

use navkit_core::{ConfigurationError, EventKey};
use navkit_yaml::{NavManifest, ParseError};

// =============================================================================
// Navbar-hosted manifests
// =============================================================================

const NAVBAR_YAML: &str = r##"
theme:
  name: Brand
  prefixes:
    nav-link: brand-link
context:
  navbar:
    prefix: navbar
  cardHeader:
    headerPrefix: card-header
nav:
  variant: pills
  navbarScroll: true
  defaultActiveKey: docs
  aria-label: Primary
  links:
    - eventKey: home
      label: Home
    - eventKey: docs
      label: Docs
    - href: "/blog"
      label: Blog
      disabled: true
"##;

#[test]
fn test_navbar_manifest_renders_navbar_classes() {
    let manifest = NavManifest::from_yaml(NAVBAR_YAML).unwrap();
    let node = manifest.render().unwrap();

    assert_eq!(
        node.class_name.to_string(),
        "navbar-nav navbar-nav-scroll nav-pills"
    );
    assert!(!node.has_class("card-header-pills"));
    assert_eq!(node.attrs.get_str("aria-label"), Some("Primary"));
    assert_eq!(node.active_key, Some(EventKey::from("docs")));
}

#[test]
fn test_navbar_manifest_links_use_theme_prefix() {
    let node = NavManifest::from_yaml(NAVBAR_YAML).unwrap().render().unwrap();
    let links: Vec<_> = node
        .descendants()
        .filter(|n| n.has_class("brand-link"))
        .collect();
    assert_eq!(links.len(), 3);
    assert!(links[1].has_class("active"));
    assert!(links[2].has_class("disabled"));
    assert_eq!(links[2].attrs.get_str("href"), Some("/blog"));
}

#[test]
fn test_navbar_manifest_selection() {
    let manifest = NavManifest::from_yaml(NAVBAR_YAML).unwrap();
    let mut nav = manifest.build().unwrap();

    let disabled = nav.links().nth(2).cloned().unwrap();
    assert!(nav.select_link(&disabled).is_none());
    assert_eq!(nav.active_key(), Some(EventKey::from("docs")));

    let home = nav.links().next().cloned().unwrap();
    nav.select_link(&home);
    assert_eq!(nav.active_key(), Some(EventKey::from("home")));
}

// =============================================================================
// Rejected manifests
// =============================================================================

#[test]
fn test_justify_with_explicit_navbar_rejected() {
    let yaml = "nav:\n  justify: true\n  navbar: true\n";
    let err = NavManifest::from_yaml(yaml).unwrap().build().unwrap_err();
    assert!(matches!(
        err,
        ParseError::Configuration(ConfigurationError::JustifiedNavbar)
    ));
}

#[test]
fn test_justify_inside_navbar_context_rejected() {
    let yaml = "context:\n  navbar:\n    prefix: navbar\nnav:\n  justify: true\n";
    let err = NavManifest::from_yaml(yaml).unwrap().build().unwrap_err();
    assert!(matches!(
        err,
        ParseError::Configuration(ConfigurationError::JustifiedNavbar)
    ));
}

#[test]
fn test_justify_in_card_header_accepted() {
    let yaml = "context:\n  cardHeader:\n    headerPrefix: card-header\nnav:\n  justify: true\n  variant: tabs\n";
    let node = NavManifest::from_yaml(yaml).unwrap().render().unwrap();
    assert_eq!(
        node.class_name.to_string(),
        "nav card-header-tabs nav-tabs nav-justified"
    );
}

#[test]
fn test_invalid_variant_is_yaml_error() {
    let yaml = "nav:\n  variant: ribbons\n";
    assert!(matches!(
        NavManifest::from_yaml(yaml),
        Err(ParseError::Yaml(_))
    ));
}
