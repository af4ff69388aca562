//! Navigation components for navkit.

pub mod abstract_nav;
pub mod nav;
pub mod nav_item;
pub mod nav_link;

pub use abstract_nav::{AbstractNav, ListPrimitive, ListRequest, NavChild};
pub use nav::{
    nav_rules, resolve_hosting, AmbientPrefix, Nav, NavCheck, NavConfiguration, NavProps,
    NavSelected, NavVariant,
};
pub use nav_item::NavItem;
pub use nav_link::{NavLink, EVENT_KEY_ATTR};
