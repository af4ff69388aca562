//! Navigation container for tabs, pills and plain link groups.
//!
//! A [`Nav`] resolves three things on every render:
//!
//! 1. the active key, either supplied by the caller (controlled, possibly
//!    with nothing selected) or held by the instance starting from
//!    `default_active_key` (uncontrolled);
//! 2. its hosting, from the ambient navbar or card header context, where a
//!    navbar always takes precedence;
//! 3. its class names, from its own props, the hosting outcome and the theme
//!    prefix.
//!
//! Everything else is forwarded untouched to the [`ListPrimitive`], together
//! with a selection hook. Activating a rendered link goes through the same
//! path as [`Nav::select`].
//!
//! # Examples
//!
//! ```
//! use navkit_widgets::{nav, Nav, NavProps, NavVariant};
//! use navkit_core::RenderContext;
//!
//! let nav = Nav::new(
//!     NavProps::new()
//!         .variant(NavVariant::Tabs)
//!         .active_key("home")
//!         .link(nav::Link::new("home", "Home"))
//!         .link(nav::Link::new("profile", "Profile")),
//! );
//! let node = nav.render(&RenderContext::default()).unwrap();
//! assert_eq!(node.class_name.to_string(), "nav nav-tabs");
//! ```

use crate::abstract_nav::{AbstractNav, ListPrimitive, ListRequest, NavChild};
use navkit_core::validation::Custom;
use navkit_core::{
    theme, Callback, CardHeaderContext, ClassNames, ConfigurationError, EventKey, KeyEvent,
    NavbarContext, PropRules, Props, RenderContext, RenderNode, Uncontrolled, ValueMode,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, Mutex};

pub use crate::nav_item::NavItem as Item;
pub use crate::nav_link::NavLink as Link;

/// Visual variant of a nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavVariant {
    /// Tab strip
    Tabs,
    /// Pill buttons
    Pills,
    /// Underlined links
    Underline,
}

impl NavVariant {
    /// Class-name suffix for this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Pills => "pills",
            Self::Underline => "underline",
        }
    }
}

/// Class root contributed by the enclosing container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AmbientPrefix {
    /// Freestanding
    #[default]
    None,
    /// Navbar class root
    Navbar(String),
    /// Card header class root
    CardHeader(String),
}

/// Decide hosting from the ambient contexts and the own `navbar` prop.
///
/// A navbar context strictly dominates: when present the card header context
/// is not consulted at all, and hosting defaults to `true` unless `navbar`
/// says otherwise. Without a navbar context the nav is never hosted.
#[must_use]
pub fn resolve_hosting(
    navbar_prop: Option<bool>,
    navbar: Option<&NavbarContext>,
    card_header: Option<&CardHeaderContext>,
) -> (bool, AmbientPrefix) {
    if let Some(navbar) = navbar {
        (
            navbar_prop.unwrap_or(true),
            AmbientPrefix::Navbar(navbar.prefix.clone()),
        )
    } else if let Some(card_header) = card_header {
        (false, AmbientPrefix::CardHeader(card_header.header_prefix.clone()))
    } else {
        (false, AmbientPrefix::None)
    }
}

/// What the nav rules are checked against: props plus hosting, when known.
#[derive(Debug, Clone, Copy)]
pub struct NavCheck<'a> {
    /// Declared props
    pub props: &'a NavProps,
    /// Hosting inferred from the ambient context, `false` without one
    pub hosted_in_navbar: bool,
}

impl NavCheck<'_> {
    /// Whether the nav counts as navbar-hosted, explicitly or by inference.
    #[must_use]
    pub fn in_navbar(&self) -> bool {
        self.hosted_in_navbar || self.props.navbar == Some(true)
    }
}

/// Rules checked before every render and on construction.
#[must_use]
pub fn nav_rules<'a>() -> PropRules<NavCheck<'a>> {
    PropRules::new("Nav").rule(Custom::new("justified-navbar", |check: &NavCheck<'_>| {
        if check.props.justify && check.in_navbar() {
            Err(ConfigurationError::JustifiedNavbar)
        } else {
            Ok(())
        }
    }))
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<EventKey>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<EventKey>::deserialize(deserializer).map(Some)
}

/// Declared configuration of a [`Nav`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavProps {
    /// Element override (default `div`)
    #[serde(rename = "as")]
    pub render_as: Option<String>,
    /// Explicit class root
    pub bs_prefix: Option<String>,
    /// Visual variant
    pub variant: Option<NavVariant>,
    /// Controlled active key; `Some(None)` controls with nothing selected
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub active_key: Option<Option<EventKey>>,
    /// Initial key while uncontrolled
    pub default_active_key: Option<EventKey>,
    /// Stretch items to fill the width
    pub fill: bool,
    /// Give items equal widths
    pub justify: bool,
    /// Selection notifier
    #[serde(skip)]
    pub on_select: Option<Callback<Option<EventKey>>>,
    /// ARIA role, forwarded unmodified
    pub role: Option<String>,
    /// Explicit navbar hosting override
    pub navbar: Option<bool>,
    /// Make a navbar-hosted nav scrollable
    pub navbar_scroll: bool,
    /// Key-down handler, forwarded
    #[serde(skip)]
    pub on_key_down: Option<Callback<KeyEvent>>,
    /// Extra classes, placed before the composed ones
    pub class_name: Option<String>,
    /// Content
    #[serde(skip)]
    pub children: Vec<NavChild>,
    /// Forwarded props
    #[serde(flatten)]
    pub props: Props,
}

impl NavProps {
    /// Create default props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rendered element.
    #[must_use]
    pub fn render_as(mut self, element: impl Into<String>) -> Self {
        self.render_as = Some(element.into());
        self
    }

    /// Set an explicit class root.
    #[must_use]
    pub fn bs_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bs_prefix = Some(prefix.into());
        self
    }

    /// Set the variant.
    #[must_use]
    pub const fn variant(mut self, variant: NavVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Control the active key.
    #[must_use]
    pub fn active_key(mut self, key: impl Into<EventKey>) -> Self {
        self.active_key = Some(Some(key.into()));
        self
    }

    /// Control the active key with nothing selected.
    #[must_use]
    pub fn controlled_none(mut self) -> Self {
        self.active_key = Some(None);
        self
    }

    /// Set the initial key for uncontrolled use.
    #[must_use]
    pub fn default_active_key(mut self, key: impl Into<EventKey>) -> Self {
        self.default_active_key = Some(key.into());
        self
    }

    /// Set fill.
    #[must_use]
    pub const fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Set justify.
    #[must_use]
    pub const fn justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    /// Set the selection notifier.
    #[must_use]
    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&Option<EventKey>) + Send + Sync + 'static,
    {
        self.on_select = Some(Callback::new(f));
        self
    }

    /// Set the ARIA role.
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Override navbar hosting.
    #[must_use]
    pub const fn navbar(mut self, navbar: bool) -> Self {
        self.navbar = Some(navbar);
        self
    }

    /// Set navbar scrolling.
    #[must_use]
    pub const fn navbar_scroll(mut self, scroll: bool) -> Self {
        self.navbar_scroll = scroll;
        self
    }

    /// Set the key-down handler.
    #[must_use]
    pub fn on_key_down<F>(mut self, f: F) -> Self
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        self.on_key_down = Some(Callback::new(f));
        self
    }

    /// Add extra classes.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Append content.
    #[must_use]
    pub fn child(mut self, child: impl Into<NavChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a link wrapped in an item.
    #[must_use]
    pub fn link(self, link: Link) -> Self {
        self.child(Item::with_link(link))
    }

    /// Forward a prop.
    #[must_use]
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(name, value);
        self
    }

    /// Rendered element.
    #[must_use]
    pub fn element(&self) -> &str {
        self.render_as.as_deref().unwrap_or("div")
    }

    /// Check the props alone, without any ambient context.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_hosted(false)
    }

    fn validate_hosted(&self, hosted_in_navbar: bool) -> Result<(), ConfigurationError> {
        nav_rules().validate(&NavCheck {
            props: self,
            hosted_in_navbar,
        })
    }
}

/// Resolved view of a nav for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfiguration {
    /// Visual variant
    pub variant: Option<NavVariant>,
    /// Effective active key
    pub active_key: Option<EventKey>,
    /// Fill flag
    pub fill: bool,
    /// Justify flag
    pub justify: bool,
    /// Whether the nav renders as part of a navbar
    pub is_hosted_in_navbar: bool,
    /// Scroll flag, only applied when hosted
    pub navbar_scroll: bool,
    /// Ambient class root
    pub ambient_prefix: AmbientPrefix,
    /// Own class root
    pub own_prefix: String,
    /// Role, unmodified
    pub role: Option<String>,
}

impl NavConfiguration {
    /// Compose the class names, with `extra` first.
    #[must_use]
    pub fn class_names(&self, extra: Option<&str>) -> ClassNames {
        let own = &self.own_prefix;
        let mut classes = ClassNames::new();
        if let Some(extra) = extra {
            classes.push(extra);
        }

        match &self.ambient_prefix {
            AmbientPrefix::Navbar(navbar) if self.is_hosted_in_navbar => {
                classes.push(&format!("{navbar}-nav"));
                classes.push_if(self.navbar_scroll, format!("{navbar}-nav-scroll"));
            }
            _ => classes.push(own),
        }

        if let Some(variant) = self.variant.map(NavVariant::as_str) {
            if let AmbientPrefix::CardHeader(header) = &self.ambient_prefix {
                classes.push(&format!("{header}-{variant}"));
            }
            classes.push(&format!("{own}-{variant}"));
        }
        classes.push_if(self.fill, format!("{own}-fill"));
        classes.push_if(self.justify, format!("{own}-justified"));
        classes
    }
}

/// Message produced by a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelected {
    /// Selected key
    pub key: Option<EventKey>,
    /// Who owned the active key when the selection happened
    pub mode: ValueMode,
}

type Selection = Arc<Mutex<Uncontrolled<EventKey>>>;

fn apply_selection(
    selection: &Selection,
    supplied: Option<&Option<EventKey>>,
    key: Option<EventKey>,
    on_select: Option<&Callback<Option<EventKey>>>,
) -> NavSelected {
    // The notifier runs after the lock is released so it may read the nav.
    let mode = selection
        .lock()
        .expect("selection mutex not poisoned")
        .change(supplied, key.clone(), None);
    tracing::debug!(?mode, key = ?key, "nav selection");
    if let Some(callback) = on_select {
        callback.emit(&key);
    }
    NavSelected { key, mode }
}

/// A navigation container instance.
///
/// The instance outlives individual renders. In uncontrolled use it holds the
/// active key; the held value is created from `default_active_key` at
/// construction and only changes through [`Nav::select`] or a selection
/// request from a node this instance rendered. Clones hold their own copy.
#[derive(Debug)]
pub struct Nav {
    props: NavProps,
    selection: Selection,
}

impl Clone for Nav {
    fn clone(&self) -> Self {
        let held = self
            .selection
            .lock()
            .expect("selection mutex not poisoned")
            .clone();
        Self {
            props: self.props.clone(),
            selection: Arc::new(Mutex::new(held)),
        }
    }
}

impl Nav {
    /// Create a nav. Validation is deferred to render.
    #[must_use]
    pub fn new(props: NavProps) -> Self {
        let selection = Uncontrolled::new(props.default_active_key.clone());
        Self {
            props,
            selection: Arc::new(Mutex::new(selection)),
        }
    }

    /// Create a nav, rejecting invalid props up front.
    pub fn try_new(props: NavProps) -> Result<Self, ConfigurationError> {
        props.validate()?;
        Ok(Self::new(props))
    }

    /// Current props.
    #[must_use]
    pub const fn props(&self) -> &NavProps {
        &self.props
    }

    /// Replace the props for subsequent renders, keeping the held key.
    pub fn set_props(&mut self, props: NavProps) {
        self.props = props;
    }

    /// Effective active key.
    #[must_use]
    pub fn active_key(&self) -> Option<EventKey> {
        self.selection
            .lock()
            .expect("selection mutex not poisoned")
            .resolve(self.props.active_key.as_ref())
            .cloned()
    }

    /// Whether the caller controls the active key.
    #[must_use]
    pub const fn mode(&self) -> ValueMode {
        ValueMode::of(self.props.active_key.as_ref())
    }

    /// Handle a selection request from an item.
    ///
    /// Uncontrolled navs hold the new key; both modes report it to
    /// `on_select` exactly once.
    pub fn select(&mut self, key: Option<EventKey>) -> NavSelected {
        apply_selection(
            &self.selection,
            self.props.active_key.as_ref(),
            key,
            self.props.on_select.as_ref(),
        )
    }

    /// Selection hook handed to the list primitive for one render.
    ///
    /// A request through the hook behaves like [`Nav::select`] under the
    /// props of that render.
    fn select_hook(&self) -> Callback<Option<EventKey>> {
        let selection = Arc::clone(&self.selection);
        let supplied = self.props.active_key.clone();
        let on_select = self.props.on_select.clone();
        Callback::new(move |key: &Option<EventKey>| {
            apply_selection(
                &selection,
                supplied.as_ref(),
                key.clone(),
                on_select.as_ref(),
            );
        })
    }

    /// Handle activation of a link. Disabled and keyless links are ignored.
    pub fn select_link(&mut self, link: &Link) -> Option<NavSelected> {
        link.activate().map(|key| self.select(Some(key)))
    }

    /// Forward a key-down event to `on_key_down`.
    ///
    /// Returns `false` when no handler is set.
    pub fn key_down(&self, event: &KeyEvent) -> bool {
        match &self.props.on_key_down {
            Some(handler) => {
                handler.emit(event);
                true
            }
            None => false,
        }
    }

    /// Links contained in the nav, in order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.props.children.iter().flat_map(NavChild::links)
    }

    /// Resolve the render-pass configuration.
    pub fn resolve(&self, ctx: &RenderContext<'_>) -> Result<NavConfiguration, ConfigurationError> {
        let (is_hosted_in_navbar, ambient_prefix) =
            resolve_hosting(self.props.navbar, ctx.navbar, ctx.card_header);
        self.props.validate_hosted(is_hosted_in_navbar)?;

        Ok(NavConfiguration {
            variant: self.props.variant,
            active_key: self.active_key(),
            fill: self.props.fill,
            justify: self.props.justify,
            is_hosted_in_navbar,
            navbar_scroll: self.props.navbar_scroll,
            ambient_prefix,
            own_prefix: ctx
                .theme
                .resolve_prefix(self.props.bs_prefix.as_deref(), theme::NAV),
            role: self.props.role.clone(),
        })
    }

    /// Render with the default [`AbstractNav`] primitive.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, ConfigurationError> {
        self.render_with(ctx, &AbstractNav)
    }

    /// Render with a custom list primitive.
    pub fn render_with(
        &self,
        ctx: &RenderContext<'_>,
        primitive: &dyn ListPrimitive,
    ) -> Result<RenderNode, ConfigurationError> {
        let config = self.resolve(ctx)?;
        let class_name = config.class_names(self.props.class_name.as_deref());
        let on_select = self.select_hook();
        Ok(primitive.render(ListRequest {
            render_as: self.props.element(),
            active_key: config.active_key.as_ref(),
            class_name,
            role: config.role.as_deref(),
            on_key_down: self.props.on_key_down.as_ref(),
            on_select: Some(&on_select),
            props: &self.props.props,
            children: &self.props.children,
            context: *ctx,
        }))
    }
}
