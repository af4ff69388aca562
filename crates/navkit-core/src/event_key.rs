//! Identifiers for selectable navigation items.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Key identifying a selectable item inside a navigation group.
///
/// Keys may be strings or numbers. Two keys identify the same item when
/// their string forms are equal, so `EventKey::Num(1)` matches
/// `EventKey::Str("1")`. Use [`EventKey::matches`] for that comparison;
/// `PartialEq` stays strict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventKey {
    /// Numeric key
    Num(i64),
    /// String key
    Str(String),
}

impl EventKey {
    /// String form used for item matching and DOM attributes.
    #[must_use]
    pub fn as_key_str(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Num(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Check whether two keys identify the same item.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.as_key_str() == other.as_key_str()
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for EventKey {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for EventKey {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for EventKey {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for EventKey {
    fn from(n: i32) -> Self {
        Self::Num(i64::from(n))
    }
}

/// Derive the effective key of an item: its own key, else its `href`.
#[must_use]
pub fn make_event_key(event_key: Option<&EventKey>, href: Option<&str>) -> Option<EventKey> {
    match (event_key, href) {
        (Some(key), _) => Some(key.clone()),
        (None, Some(href)) => Some(EventKey::from(href)),
        (None, None) => None,
    }
}
