//! Selectable link inside a navigation container.

use navkit_core::{
    make_event_key, theme, Callback, ClassNames, EventKey, NavContext, Props, RenderContext,
    RenderNode,
};
use serde::{Deserialize, Serialize};

/// Attribute carrying the item key on rendered links.
pub const EVENT_KEY_ATTR: &str = "data-rr-ui-event-key";

/// A navigation link.
///
/// A link is active when forced via [`NavLink::active`], otherwise when its
/// key matches the active key of the enclosing container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavLink {
    /// Item key
    pub event_key: Option<EventKey>,
    /// Link target, also the fallback key
    pub href: Option<String>,
    /// Link text
    pub label: String,
    /// Whether the link is disabled
    pub disabled: bool,
    /// Forced active state
    pub active: Option<bool>,
    /// Element override (default `a`)
    #[serde(rename = "as")]
    pub render_as: Option<String>,
    /// Explicit class root
    pub bs_prefix: Option<String>,
    /// Extra classes
    pub class_name: Option<String>,
    /// Forwarded attributes
    #[serde(flatten)]
    pub props: Props,
}

impl NavLink {
    /// Create a link with a key and a label.
    #[must_use]
    pub fn new(event_key: impl Into<EventKey>, label: impl Into<String>) -> Self {
        Self {
            event_key: Some(event_key.into()),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Create a link keyed by its `href`.
    #[must_use]
    pub fn href(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the link as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Force the active state.
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
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

    /// Add extra classes.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Forward an attribute.
    #[must_use]
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(name, value);
        self
    }

    /// Effective key: the explicit key, else the `href`.
    #[must_use]
    pub fn key(&self) -> Option<EventKey> {
        make_event_key(self.event_key.as_ref(), self.href.as_deref())
    }

    /// Key to select when the link is activated.
    ///
    /// Disabled and keyless links select nothing.
    #[must_use]
    pub fn activate(&self) -> Option<EventKey> {
        if self.disabled {
            return None;
        }
        self.key()
    }

    /// Whether the link renders as active under `nav`.
    #[must_use]
    pub fn is_active(&self, nav: &NavContext) -> bool {
        self.active
            .unwrap_or_else(|| nav.is_active(self.key().as_ref()))
    }

    /// Render the link.
    #[must_use]
    pub fn render(&self, nav: &NavContext, ctx: &RenderContext<'_>) -> RenderNode {
        let prefix = ctx
            .theme
            .resolve_prefix(self.bs_prefix.as_deref(), theme::NAV_LINK);
        let active = self.is_active(nav);

        let mut classes = ClassNames::new();
        if let Some(extra) = &self.class_name {
            classes.push(extra);
        }
        classes.push(&prefix);
        classes.push_if(active, "active");
        classes.push_if(self.disabled, "disabled");

        let mut node = RenderNode::new(self.render_as.as_deref().unwrap_or("a"))
            .class_name(classes)
            .text(self.label.clone());
        node.attrs = self.props.clone();

        if let Some(href) = &self.href {
            node.attrs.insert("href", href.as_str());
        }
        if let Some(key) = self.key() {
            node.attrs.insert(EVENT_KEY_ATTR, key.as_key_str().into_owned());
        }

        if nav.is_tablist() {
            node.role = Some("tab".to_string());
            node.attrs.insert("aria-selected", active);
            if !active {
                node.attrs.insert("tabindex", -1);
            }
        }
        if self.disabled {
            node.attrs.insert("tabindex", -1);
            node.attrs.insert("aria-disabled", true);
        }
        if let (Some(key), Some(hook)) = (self.activate(), nav.on_select.clone()) {
            node.on_activate = Some(Callback::new(move |_: &()| hook.emit(&Some(key.clone()))));
        }
        node
    }
}
