//! Ambient contexts supplied by enclosing containers.
//!
//! Containers such as navbars and card headers publish a small read-only
//! snapshot that nested components consult while rendering. The snapshot is
//! passed down explicitly as a [`RenderContext`] and is never mutated by the
//! components reading it.

use crate::event_key::EventKey;
use crate::state::Callback;
use crate::theme::{self, Theme};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static DEFAULT_THEME: Theme = Theme {
    name: String::new(),
    prefixes: BTreeMap::new(),
};

/// Context published by a navbar container.
///
/// Its presence alone marks descendants as hosted in a navbar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavbarContext {
    /// Resolved class root of the navbar (usually `navbar`)
    #[serde(default)]
    pub prefix: String,
}

impl NavbarContext {
    /// Create a navbar context.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create a navbar context whose class root comes from `theme`, unless
    /// `explicit` is set.
    #[must_use]
    pub fn themed(theme: &Theme, explicit: Option<&str>) -> Self {
        Self::new(theme.resolve_prefix(explicit, theme::NAVBAR))
    }
}

/// Context published by a card header container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeaderContext {
    /// Resolved class root of the card header (usually `card-header`)
    #[serde(default)]
    pub header_prefix: String,
}

impl CardHeaderContext {
    /// Create a card header context.
    #[must_use]
    pub fn new(header_prefix: impl Into<String>) -> Self {
        Self {
            header_prefix: header_prefix.into(),
        }
    }

    /// Create a card header context whose class root comes from `theme`,
    /// unless `explicit` is set.
    #[must_use]
    pub fn themed(theme: &Theme, explicit: Option<&str>) -> Self {
        Self::new(theme.resolve_prefix(explicit, theme::CARD_HEADER))
    }
}

/// Read-only ambient snapshot for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Active theme
    pub theme: &'a Theme,
    /// Enclosing navbar, if any
    pub navbar: Option<&'a NavbarContext>,
    /// Enclosing card header, if any
    pub card_header: Option<&'a CardHeaderContext>,
}

impl Default for RenderContext<'_> {
    fn default() -> Self {
        Self {
            theme: &DEFAULT_THEME,
            navbar: None,
            card_header: None,
        }
    }
}

impl<'a> RenderContext<'a> {
    /// Create a freestanding context with the given theme.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            navbar: None,
            card_header: None,
        }
    }

    /// Nest inside a navbar.
    #[must_use]
    pub const fn within_navbar(mut self, navbar: &'a NavbarContext) -> Self {
        self.navbar = Some(navbar);
        self
    }

    /// Nest inside a card header.
    #[must_use]
    pub const fn within_card_header(mut self, card_header: &'a CardHeaderContext) -> Self {
        self.card_header = Some(card_header);
        self
    }
}

/// Contract published by a navigation container to its item descendants.
///
/// Items read the active key from it to decide whether they are active, and
/// the role to decide their own ARIA semantics. Selection requests go back to
/// the container through `on_select`.
#[derive(Debug, Clone, Default)]
pub struct NavContext {
    /// Currently active key
    pub active_key: Option<EventKey>,
    /// Role of the container (e.g. `tablist`)
    pub role: Option<String>,
    /// Selection request hook of the container
    pub on_select: Option<Callback<Option<EventKey>>>,
}

impl NavContext {
    /// Ask the container to select `key`.
    ///
    /// Returns `false` when the container accepts no requests.
    pub fn request_select(&self, key: Option<EventKey>) -> bool {
        match &self.on_select {
            Some(hook) => {
                hook.emit(&key);
                true
            }
            None => false,
        }
    }

    /// Check whether an item key is the active one.
    #[must_use]
    pub fn is_active(&self, key: Option<&EventKey>) -> bool {
        match (&self.active_key, key) {
            (Some(active), Some(key)) => active.matches(key),
            _ => false,
        }
    }

    /// Check whether the container is a tab list.
    #[must_use]
    pub fn is_tablist(&self) -> bool {
        self.role.as_deref() == Some("tablist")
    }
}
