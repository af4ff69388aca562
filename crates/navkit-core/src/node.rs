//! Rendered element tree.

use crate::class_names::ClassNames;
use crate::event::KeyEvent;
use crate::event_key::EventKey;
use crate::props::Props;
use crate::state::Callback;
use serde_json::Value;

/// One rendered element.
///
/// This is the output of every component in the crate family: the element
/// tag, its composed classes, its attributes, and its rendered children.
#[derive(Debug, Clone, Default)]
pub struct RenderNode {
    /// Element tag or component name
    pub element: String,
    /// Composed class names
    pub class_name: ClassNames,
    /// ARIA role, if any
    pub role: Option<String>,
    /// Active key published to descendants, if this node is a container
    pub active_key: Option<EventKey>,
    /// Forwarded attributes
    pub attrs: Props,
    /// Text content
    pub text: Option<String>,
    /// Key-down handler attached to this element
    pub on_key_down: Option<Callback<KeyEvent>>,
    /// Activation handler attached to this element (click or Enter)
    pub on_activate: Option<Callback<()>>,
    /// Rendered children
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Create an empty element.
    #[must_use]
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            ..Self::default()
        }
    }

    /// Set the class names.
    #[must_use]
    pub fn class_name(mut self, class_name: ClassNames) -> Self {
        self.class_name = class_name;
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Check if the element carries a class.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class_name.contains(name)
    }

    /// Depth-first iterator over this node and its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node (self included) carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Self> {
        self.descendants().find(|n| n.has_class(class))
    }

    /// Deliver a key-down event to this element's handler.
    ///
    /// Returns `false` when no handler is attached.
    pub fn key_down(&self, event: &KeyEvent) -> bool {
        match &self.on_key_down {
            Some(handler) => {
                handler.emit(event);
                true
            }
            None => false,
        }
    }

    /// Activate this element.
    ///
    /// Returns `false` when the element is not activatable.
    pub fn activate(&self) -> bool {
        match &self.on_activate {
            Some(handler) => {
                handler.emit(&());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_node_builder() {
        let node = RenderNode::new("a")
            .class_name(ClassNames::new().with("nav-link"))
            .attr("href", "#home")
            .text("Home");
        assert_eq!(node.element, "a");
        assert!(node.has_class("nav-link"));
        assert_eq!(node.attrs.get_str("href"), Some("#home"));
        assert_eq!(node.text.as_deref(), Some("Home"));
    }

    #[test]
    fn test_node_descendants_order() {
        let tree = RenderNode::new("root")
            .child(RenderNode::new("a").child(RenderNode::new("a1")))
            .child(RenderNode::new("b"));
        let order: Vec<_> = tree.descendants().map(|n| n.element.as_str()).collect();
        assert_eq!(order, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_node_find_by_class() {
        let tree = RenderNode::new("div").child(
            RenderNode::new("a").class_name(ClassNames::new().with("nav-link active")),
        );
        assert_eq!(tree.find_by_class("active").map(|n| n.element.as_str()), Some("a"));
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_node_key_down() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut node = RenderNode::new("div");
        assert!(!node.key_down(&KeyEvent::new(Key::Left)));

        node.on_key_down = Some(Callback::new(move |_: &KeyEvent| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert!(node.key_down(&KeyEvent::new(Key::Left)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_node_activate() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut node = RenderNode::new("a");
        assert!(!node.activate());

        node.on_activate = Some(Callback::new(move |_: &()| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert!(node.activate());
        assert!(node.activate());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
