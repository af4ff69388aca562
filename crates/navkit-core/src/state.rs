//! Controlled and uncontrolled component values.
//!
//! A component value is *controlled* when the caller supplies it on every
//! render; the component then never stores a copy and only reports change
//! requests. A supplied value may itself be empty (`Some(&None)`), which keeps
//! the value controlled with nothing selected. When the caller omits it the
//! value is *uncontrolled*: the component holds it, starting from a default,
//! and updates it on every change request while still reporting the change.
//!
//! # Examples
//!
//! ```
//! use navkit_core::{Callback, Uncontrolled};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let on_change = Callback::new(move |v: &Option<String>| sink.lock().unwrap().push(v.clone()));
//!
//! let mut value = Uncontrolled::new(Some("a".to_string()));
//! assert_eq!(value.resolve(None), Some(&"a".to_string()));
//!
//! value.change(None, Some("b".to_string()), Some(&on_change));
//! assert_eq!(value.resolve(None), Some(&"b".to_string()));
//! assert_eq!(*seen.lock().unwrap(), vec![Some("b".to_string())]);
//! ```

use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe notification callback.
pub struct Callback<A>(Arc<dyn Fn(&A) + Send + Sync>);

impl<A> Callback<A> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn emit(&self, arg: &A) {
        (self.0)(arg);
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Which side owns a value for the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// Caller supplies the value
    Controlled,
    /// Component holds the value
    Uncontrolled,
}

impl ValueMode {
    /// Mode implied by whether the caller supplied a value.
    #[must_use]
    pub const fn of<T>(supplied: Option<&T>) -> Self {
        if supplied.is_some() {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

/// Value held by a component for use while the caller leaves it uncontrolled.
///
/// The held value is private to its owner: it is only observable through
/// [`Uncontrolled::resolve`] and only mutated through
/// [`Uncontrolled::change`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Uncontrolled<T> {
    held: Option<T>,
}

impl<T: Clone> Uncontrolled<T> {
    /// Start holding `default`.
    #[must_use]
    pub const fn new(default: Option<T>) -> Self {
        Self { held: default }
    }

    /// Effective value: the supplied one when controlled, else the held one.
    #[must_use]
    pub fn resolve<'a>(&'a self, supplied: Option<&'a Option<T>>) -> Option<&'a T> {
        match supplied {
            Some(controlled) => controlled.as_ref(),
            None => self.held.as_ref(),
        }
    }

    /// Apply a change request.
    ///
    /// The held value is only replaced when uncontrolled. The callback, if
    /// any, receives `next` exactly once in both modes.
    pub fn change(
        &mut self,
        supplied: Option<&Option<T>>,
        next: Option<T>,
        on_change: Option<&Callback<Option<T>>>,
    ) -> ValueMode {
        let mode = ValueMode::of(supplied);
        if mode == ValueMode::Uncontrolled {
            self.held.clone_from(&next);
        }
        if let Some(callback) = on_change {
            callback.emit(&next);
        }
        mode
    }
}
