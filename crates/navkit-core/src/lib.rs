//! Core types and traits for navkit navigation components.
//!
//! This crate provides the building blocks shared by every navkit widget:
//! - Item identity: [`EventKey`]
//! - Ambient container snapshots: [`RenderContext`], [`NavbarContext`],
//!   [`CardHeaderContext`], and the item contract [`NavContext`]
//! - Theme prefix resolution: [`Theme`]
//! - Controlled/uncontrolled values: [`Uncontrolled`], [`Callback`]
//! - Class composition and pass-through attributes: [`ClassNames`], [`Props`]
//! - Declarative prop validation: [`PropRules`], [`ConfigurationError`]
//! - Render output: [`RenderNode`]

mod class_names;
mod context;
mod error;
mod event;
mod event_key;
mod node;
mod props;
mod state;
pub mod theme;
pub mod validation;

pub use class_names::ClassNames;
pub use context::{CardHeaderContext, NavContext, NavbarContext, RenderContext};
pub use error::ConfigurationError;
pub use event::{Key, KeyEvent, Modifiers};
pub use event_key::{make_event_key, EventKey};
pub use node::RenderNode;
pub use props::Props;
pub use state::{Callback, Uncontrolled, ValueMode};
pub use theme::Theme;
pub use validation::{PropRule, PropRules};
