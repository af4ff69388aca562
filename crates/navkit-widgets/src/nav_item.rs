//! Structural wrapper around a navigation link.

use crate::abstract_nav::NavChild;
use crate::nav_link::NavLink;
use navkit_core::{theme, ClassNames, NavContext, Props, RenderContext, RenderNode};

/// A navigation item wrapping links or arbitrary content.
#[derive(Debug, Clone, Default)]
pub struct NavItem {
    /// Element override (default `div`)
    pub render_as: Option<String>,
    /// Explicit class root
    pub bs_prefix: Option<String>,
    /// Extra classes
    pub class_name: Option<String>,
    /// Forwarded attributes
    pub props: Props,
    /// Item content
    pub children: Vec<NavChild>,
}

impl NavItem {
    /// Create an empty item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item holding a single link.
    #[must_use]
    pub fn with_link(link: NavLink) -> Self {
        Self::new().child(NavChild::Link(link))
    }

    /// Append content.
    #[must_use]
    pub fn child(mut self, child: NavChild) -> Self {
        self.children.push(child);
        self
    }

    /// Override the rendered element.
    #[must_use]
    pub fn render_as(mut self, element: impl Into<String>) -> Self {
        self.render_as = Some(element.into());
        self
    }

    /// Add extra classes.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Render the item and its content.
    #[must_use]
    pub fn render(&self, nav: &NavContext, ctx: &RenderContext<'_>) -> RenderNode {
        let prefix = ctx
            .theme
            .resolve_prefix(self.bs_prefix.as_deref(), theme::NAV_ITEM);
        let mut classes = ClassNames::new();
        if let Some(extra) = &self.class_name {
            classes.push(extra);
        }
        classes.push(&prefix);

        let mut node = RenderNode::new(self.render_as.as_deref().unwrap_or("div")).class_name(classes);
        node.attrs = self.props.clone();
        node.children = self
            .children
            .iter()
            .map(|child| child.render(nav, ctx))
            .collect();
        node
    }
}
