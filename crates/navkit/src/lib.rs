//! navkit: navigation containers for component toolkits.
//!
//! A [`Nav`] renders a group of selectable links as tabs, pills or a plain
//! list. It tracks the active key under caller control or on its own,
//! adapts its classes to an enclosing navbar or card header, and hands the
//! result to a list primitive.
//!
//! ```
//! use navkit::{nav, Nav, NavProps, NavbarContext, RenderContext};
//!
//! let navbar = NavbarContext::new("navbar");
//! let ctx = RenderContext::default().within_navbar(&navbar);
//! let nav = Nav::new(NavProps::new().link(nav::Link::new("home", "Home")));
//! let node = nav.render(&ctx).unwrap();
//! assert!(node.has_class("navbar-nav"));
//! ```

pub use navkit_core::*;
pub use navkit_widgets::*;
pub use navkit_yaml as yaml;
