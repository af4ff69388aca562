//! List-rendering primitive behind navigation containers.
//!
//! [`Nav`](crate::Nav) decides *what* to render (classes, active key,
//! forwarded props) and hands that to a [`ListPrimitive`], which owns *how*
//! the list is rendered: walking children, publishing the [`NavContext`] they
//! read, role defaulting, and keyboard focus traversal. [`AbstractNav`] is
//! the default primitive. It renders the container, publishes the context and
//! attaches the key-down handler, and leaves traversal to the host.
//!
//! Selections travel back up through [`ListRequest::on_select`]: items receive
//! the hook in their [`NavContext`] and attach it to the nodes they render, so
//! activating a rendered link reaches the owning [`Nav`](crate::Nav).

use crate::nav_item::NavItem;
use crate::nav_link::NavLink;
use navkit_core::{
    Callback, ClassNames, EventKey, KeyEvent, NavContext, Props, RenderContext, RenderNode,
};

/// Content of a navigation container.
#[derive(Debug, Clone)]
pub enum NavChild {
    /// Item wrapper
    Item(NavItem),
    /// Bare link
    Link(NavLink),
    /// Pre-rendered content
    Node(RenderNode),
}

impl NavChild {
    /// Render under the given container context.
    #[must_use]
    pub fn render(&self, nav: &NavContext, ctx: &RenderContext<'_>) -> RenderNode {
        match self {
            Self::Item(item) => item.render(nav, ctx),
            Self::Link(link) => link.render(nav, ctx),
            Self::Node(node) => node.clone(),
        }
    }

    /// Links directly or transitively contained in this child.
    pub fn links(&self) -> Box<dyn Iterator<Item = &NavLink> + '_> {
        match self {
            Self::Item(item) => Box::new(item.children.iter().flat_map(Self::links)),
            Self::Link(link) => Box::new(std::iter::once(link)),
            Self::Node(_) => Box::new(std::iter::empty()),
        }
    }
}

impl From<NavItem> for NavChild {
    fn from(item: NavItem) -> Self {
        Self::Item(item)
    }
}

impl From<NavLink> for NavChild {
    fn from(link: NavLink) -> Self {
        Self::Link(link)
    }
}

impl From<RenderNode> for NavChild {
    fn from(node: RenderNode) -> Self {
        Self::Node(node)
    }
}

/// Everything a list primitive receives from a navigation container.
#[derive(Debug)]
pub struct ListRequest<'a> {
    /// Element to render
    pub render_as: &'a str,
    /// Resolved active key
    pub active_key: Option<&'a EventKey>,
    /// Composed class names
    pub class_name: ClassNames,
    /// Caller-supplied role, unmodified
    pub role: Option<&'a str>,
    /// Caller-supplied key-down handler
    pub on_key_down: Option<&'a Callback<KeyEvent>>,
    /// Selection request hook of the container
    pub on_select: Option<&'a Callback<Option<EventKey>>>,
    /// Forwarded props
    pub props: &'a Props,
    /// Container content
    pub children: &'a [NavChild],
    /// Ambient snapshot of the render pass
    pub context: RenderContext<'a>,
}

/// Renders a navigation list from a [`ListRequest`].
pub trait ListPrimitive {
    /// Render the container and its children.
    fn render(&self, request: ListRequest<'_>) -> RenderNode;
}

/// Default list primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractNav;

impl ListPrimitive for AbstractNav {
    fn render(&self, request: ListRequest<'_>) -> RenderNode {
        let nav = NavContext {
            active_key: request.active_key.cloned(),
            role: request.role.map(str::to_string),
            on_select: request.on_select.cloned(),
        };
        let children = request
            .children
            .iter()
            .map(|child| child.render(&nav, &request.context))
            .collect();

        RenderNode {
            element: request.render_as.to_string(),
            class_name: request.class_name,
            role: nav.role,
            active_key: nav.active_key,
            attrs: request.props.clone(),
            text: None,
            on_key_down: request.on_key_down.cloned(),
            on_activate: None,
            children,
        }
    }
}
