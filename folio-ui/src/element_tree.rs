//! Arena-backed element tree built by views and consumed by markup rendering
//! and hit testing.
//!
//! Views build a tree the same way components are nested: [`ElementTree::add_node`]
//! opens an element and makes it the parent of everything added until the
//! matching [`ElementTree::pop_node`]. [`ElementTree::with_node`] wraps that pair
//! around a closure.
//!
//! ```
//! use folio_ui::element_tree::{Element, ElementKind, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! tree.with_node(Element::new(ElementKind::Button).class("btn"), |tree| {
//!     tree.leaf(Element::new(ElementKind::Span).class("icon"));
//! });
//! assert_eq!(tree.len(), 2);
//! ```

mod element;

use indextree::{Arena, NodeId};
use tracing::warn;

use crate::cursor::HoverTarget;

pub use element::{Element, ElementKind, INTERACTIVE_ROLES};

/// Tree of [`Element`]s with a build-time parent stack.
#[derive(Debug, Default)]
pub struct ElementTree {
    tree: Arena<Element>,
    node_queue: Vec<NodeId>,
    roots: Vec<NodeId>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element under the current parent and makes it the new parent.
    pub fn add_node(&mut self, element: Element) -> NodeId {
        let node_id = self.insert(element);
        self.node_queue.push(node_id);
        node_id
    }

    /// Closes the element opened by the last [`add_node`](Self::add_node).
    pub fn pop_node(&mut self) {
        if self.node_queue.pop().is_none() {
            warn!("pop_node called on an element tree with no open node");
        }
    }

    /// Adds an element under the current parent without opening it.
    pub fn leaf(&mut self, element: Element) -> NodeId {
        self.insert(element)
    }

    /// Opens `element`, runs `children` to populate it, then closes it.
    pub fn with_node(&mut self, element: Element, children: impl FnOnce(&mut Self)) -> NodeId {
        let node_id = self.add_node(element);
        children(self);
        self.pop_node();
        node_id
    }

    fn insert(&mut self, element: Element) -> NodeId {
        let node_id = self.tree.new_node(element);
        match self.node_queue.last() {
            Some(parent) => parent.append(node_id, &mut self.tree),
            None => self.roots.push(node_id),
        }
        node_id
    }

    /// Top-level elements in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.tree.count()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn get(&self, node_id: NodeId) -> Option<&Element> {
        self.tree.get(node_id).map(|node| node.get())
    }

    pub fn children(&self, node_id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node_id.children(&self.tree)
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.tree.get(node_id).and_then(|node| node.parent())
    }

    /// Walks from `node_id` up through its ancestors, returning the first
    /// node whose element satisfies `predicate`. The node itself is tested first.
    pub fn closest(
        &self,
        node_id: NodeId,
        mut predicate: impl FnMut(&Element) -> bool,
    ) -> Option<NodeId> {
        node_id
            .ancestors(&self.tree)
            .find(|id| self.get(*id).is_some_and(&mut predicate))
    }

    /// All nodes in document order (pre-order, roots first).
    pub fn descendants(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots
            .iter()
            .flat_map(move |root| root.descendants(&self.tree))
    }

    /// First node in document order carrying `name="value"`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<NodeId> {
        self.descendants()
            .find(|id| self.get(*id).and_then(|e| e.attribute(name)) == Some(value))
    }

    /// First node in document order carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<NodeId> {
        self.descendants()
            .find(|id| self.get(*id).is_some_and(|e| e.has_class(class)))
    }

    /// A hit-testable view of one node.
    pub fn node(&self, node_id: NodeId) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            node_id,
        }
    }
}

/// Borrowed handle to one node of an [`ElementTree`], usable as a pointer-over target.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a ElementTree,
    node_id: NodeId,
}

impl NodeRef<'_> {
    pub fn id(&self) -> NodeId {
        self.node_id
    }

    pub fn element(&self) -> Option<&Element> {
        self.tree.get(self.node_id)
    }
}

impl HoverTarget for NodeRef<'_> {
    fn is_within_interactive(&self) -> bool {
        self.tree
            .closest(self.node_id, |element| element.kind().is_interactive())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use accesskit::Role;

    use super::*;

    fn sample_tree() -> (ElementTree, NodeId, NodeId, NodeId) {
        let mut tree = ElementTree::new();
        let mut icon = None;
        let mut paragraph = None;
        let root = tree.with_node(Element::new(ElementKind::Div).class("page"), |tree| {
            tree.with_node(Element::new(ElementKind::Button).class("btn"), |tree| {
                icon = Some(tree.leaf(Element::new(ElementKind::Span).class("icon")));
            });
            paragraph = Some(tree.leaf(Element::new(ElementKind::Paragraph).text("hello")));
        });
        (
            tree,
            root,
            icon.expect("icon node"),
            paragraph.expect("paragraph node"),
        )
    }

    #[test]
    fn nested_nodes_are_attached_to_open_parent() {
        let (tree, root, icon, paragraph) = sample_tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.parent(paragraph), Some(root));

        let button = tree.parent(icon).expect("icon has a parent");
        assert_eq!(tree.get(button).map(Element::kind), Some(ElementKind::Button));
        assert_eq!(tree.children(root).count(), 2);
    }

    #[test]
    fn closest_tests_the_node_itself_first() {
        let (tree, root, _, _) = sample_tree();
        assert_eq!(tree.closest(root, |e| e.has_class("page")), Some(root));
    }

    #[test]
    fn hover_target_walks_up_to_interactive_ancestor() {
        let (tree, root, icon, paragraph) = sample_tree();
        assert!(tree.node(icon).is_within_interactive());
        assert!(!tree.node(paragraph).is_within_interactive());
        assert!(!tree.node(root).is_within_interactive());
    }

    #[test]
    fn find_helpers_use_document_order() {
        let mut tree = ElementTree::new();
        let first = tree.leaf(Element::new(ElementKind::Anchor).attr("data-nav", "about"));
        tree.leaf(Element::new(ElementKind::Anchor).attr("data-nav", "about"));
        assert_eq!(tree.find_by_attribute("data-nav", "about"), Some(first));
        assert_eq!(tree.find_by_attribute("data-nav", "contact"), None);
        assert_eq!(tree.find_by_class("missing"), None);
    }

    #[test]
    fn interactive_kinds_match_interactive_roles() {
        for kind in ElementKind::INTERACTIVE {
            assert!(INTERACTIVE_ROLES.contains(&kind.role()), "{kind:?}");
        }
        for kind in [
            ElementKind::Div,
            ElementKind::Span,
            ElementKind::Paragraph,
            ElementKind::Heading(2),
            ElementKind::Image,
            ElementKind::Label,
        ] {
            assert!(!kind.is_interactive(), "{kind:?}");
        }
        assert_eq!(ElementKind::TextArea.role(), Role::MultilineTextInput);
        assert_eq!(
            ElementKind::interactive_selector(),
            "a, button, input, textarea"
        );
    }

    #[test]
    fn attributes_replace_and_flags_are_optional() {
        let element = Element::new(ElementKind::Input)
            .attr("name", "email")
            .attr("name", "mobile")
            .flag("disabled", false)
            .flag("required", true)
            .class("a  b")
            .class_if(false, "c");
        assert_eq!(element.attribute("name"), Some("mobile"));
        assert_eq!(element.attribute("disabled"), None);
        assert_eq!(element.attribute("required"), Some(""));
        assert_eq!(element.classes(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut tree = ElementTree::new();
        tree.pop_node();
        let root = tree.leaf(Element::new(ElementKind::Div));
        assert_eq!(tree.roots(), &[root]);
    }
}
