//! Document tree: an arena of nodes owned by a [`Document`].
//!
//! The document is both the root container and the factory for every other
//! node. Factory methods allocate detached nodes and return their [`NodeId`];
//! nothing is attached until it is passed to [`Document::append_child`] or
//! [`Document::prepend_child`].
//!
//! The tree uses a parent / first-child / last-child / next-sibling
//! representation. Each node records a single parent, so a node can never be
//! the child of two containers.
//!
//! Every document draws a unique id from a process-wide counter and stamps it
//! into the handles it hands out. A handle passed to a different document is
//! reported as [`Error::UnknownNode`]. A cloned document keeps the id of its
//! source, so handles address the same positions in both copies.
//!
//! # Example
//!
//! ```
//! use microdom::Document;
//!
//! let mut doc = Document::new();
//! let p = doc.create_element_with_attributes("p", [("class", "intro")]);
//! doc.append_child(p, "Hello & welcome").unwrap();
//! doc.append_child(doc.body(), p).unwrap();
//!
//! assert!(doc.render().contains("<p class=\"intro\">\nHello &amp; welcome</p>\n"));
//! ```

mod attr;
mod children;
mod element;
mod leaf;
mod node;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use attr::Attribute;
pub use children::{Child, IntoChildren};
pub use element::{Element, VOID_ELEMENTS, is_void_element};
pub use leaf::{Comment, DocumentType, HtmlBlob, Text};
pub use node::{Node, NodeData, NodeId, NodeKind};

use crate::error::{Error, Result};
use crate::serialize;

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Where a batch of children is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Front,
    Back,
}

/// An HTML document and the arena holding all of its nodes.
#[derive(Debug, Clone)]
pub struct Document {
    /// Stamped into every `NodeId` this document allocates.
    id: u64,
    /// All nodes (index 0 is always the document node).
    nodes: Vec<Node>,
    doctype: NodeId,
    document_element: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an `html` doctype.
    pub fn new() -> Self {
        Self::with_doctype("html")
    }

    /// Create a document with the given doctype keyword.
    ///
    /// The tree starts as `[doctype, html[head, body]]`.
    pub fn with_doctype(doc_type: impl Into<String>) -> Self {
        let id = NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed);
        let root = NodeId::new(id, 0);
        let mut doc = Self {
            id,
            nodes: vec![Node::new(NodeData::Document)],
            doctype: root,
            document_element: root,
            head: root,
            body: root,
        };

        doc.doctype = doc.alloc_node(NodeData::DocumentType(DocumentType::new(doc_type)));
        doc.document_element = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");

        let (html, head, body, doctype) = (doc.document_element, doc.head, doc.body, doc.doctype);
        doc.link_children(html, &[head, body], Position::Back);
        doc.link_children(root, &[doctype, html], Position::Back);
        doc
    }

    /// Always `"UTF-8"`.
    pub fn character_set(&self) -> &'static str {
        "UTF-8"
    }

    /// The document node ID.
    pub fn root(&self) -> NodeId {
        NodeId::new(self.id, 0)
    }

    pub fn doctype(&self) -> NodeId {
        self.doctype
    }

    /// The `html` element.
    pub fn document_element(&self) -> NodeId {
        self.document_element
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    /// Create a detached element.
    pub fn create_element(&mut self, tag_name: impl Into<String>) -> NodeId {
        self.alloc_node(NodeData::Element(Element::new(tag_name)))
    }

    /// Create a detached element with attributes set in iteration order.
    pub fn create_element_with_attributes<I, A>(
        &mut self,
        tag_name: impl Into<String>,
        attributes: I,
    ) -> NodeId
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        self.alloc_node(NodeData::Element(Element::with_attributes(
            tag_name, attributes,
        )))
    }

    pub fn create_text_node(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc_node(NodeData::Text(Text::new(data)))
    }

    pub fn create_comment(&mut self, data: impl Into<String>) -> NodeId {
        self.alloc_node(NodeData::Comment(Comment::new(data)))
    }

    /// Create markup that is emitted verbatim.
    pub fn create_html_blob(&mut self, markup: impl Into<String>) -> NodeId {
        self.alloc_node(NodeData::HtmlBlob(HtmlBlob::new(markup)))
    }

    /// Create an attribute value. Attributes are not tree nodes.
    pub fn create_attribute(&self, name: impl Into<String>, value: impl Into<String>) -> Attribute {
        Attribute::new(name, value)
    }

    fn alloc_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::new(self.id, next_index(self.nodes.len()));
        log::trace!("allocated {:?} node {id}", data.kind());
        self.nodes.push(Node::new(data));
        id
    }

    // ------------------------------------------------------------------
    // Child list mutation
    // ------------------------------------------------------------------

    /// Append one item or a sequence of items to `parent`, in order.
    ///
    /// Strings are wrapped in new text nodes. The call either inserts every
    /// item or, on error, leaves the tree untouched.
    pub fn append_child(&mut self, parent: NodeId, children: impl IntoChildren) -> Result<()> {
        self.add_children(parent, children.into_children(), Position::Back)
    }

    /// Prepend one item or a sequence of items to `parent`.
    ///
    /// Each item is inserted at the front in turn, so prepending `[a, b]`
    /// yields `b, a, ...`.
    pub fn prepend_child(&mut self, parent: NodeId, children: impl IntoChildren) -> Result<()> {
        self.add_children(parent, children.into_children(), Position::Front)
    }

    fn add_children(&mut self, parent: NodeId, children: Vec<Child>, at: Position) -> Result<()> {
        let parent_node = self.node(parent).ok_or(Error::UnknownNode(parent))?;
        if !parent_node.kind().is_container() {
            return Err(Error::NotAContainer(parent));
        }

        for (idx, child) in children.iter().enumerate() {
            if let Child::Node(id) = child {
                self.check_insertable(parent, *id)?;
                let repeated = children[..idx]
                    .iter()
                    .any(|earlier| earlier == &Child::Node(*id));
                if repeated {
                    return Err(Error::AlreadyAttached(*id));
                }
            }
        }

        if let Some(element) = parent_node.as_element()
            && element.is_self_closing()
            && !children.is_empty()
        {
            log::debug!(
                "adding {} children to void element <{}>; they will not be rendered",
                children.len(),
                element.tag_name()
            );
        }

        let ids: Vec<NodeId> = children
            .into_iter()
            .map(|child| match child {
                Child::Node(id) => id,
                Child::Text(data) => self.create_text_node(data),
            })
            .collect();

        self.link_children(parent, &ids, at);
        Ok(())
    }

    fn check_insertable(&self, parent: NodeId, child: NodeId) -> Result<()> {
        let node = self.node(child).ok_or(Error::UnknownNode(child))?;
        if child == self.root() {
            return Err(Error::HierarchyRequest { parent, child });
        }
        if node.parent.is_some() {
            return Err(Error::AlreadyAttached(child));
        }
        // A detached node can only be an ancestor of `parent` if the two are
        // in the same detached subtree.
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    fn link_children(&mut self, parent: NodeId, ids: &[NodeId], at: Position) {
        for &id in ids {
            match at {
                Position::Back => self.link_last(parent, id),
                Position::Front => self.link_first(parent, id),
            }
        }
    }

    fn link_last(&mut self, parent: NodeId, child: NodeId) {
        let previous_last = self.nodes[parent.index()].last_child;
        match previous_last {
            Some(last) => self.nodes[last.index()].next_sibling = Some(child),
            None => self.nodes[parent.index()].first_child = Some(child),
        }
        self.nodes[parent.index()].last_child = Some(child);
        self.nodes[child.index()].parent = Some(parent);
    }

    fn link_first(&mut self, parent: NodeId, child: NodeId) {
        let previous_first = self.nodes[parent.index()].first_child;
        self.nodes[child.index()].next_sibling = previous_first;
        if previous_first.is_none() {
            self.nodes[parent.index()].last_child = Some(child);
        }
        self.nodes[parent.index()].first_child = Some(child);
        self.nodes[child.index()].parent = Some(parent);
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Set an attribute on an element, replacing any previous value.
    pub fn set_attribute(
        &mut self,
        element: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.element_mut(element)?.set_attribute(name, value);
        Ok(())
    }

    /// Store an [`Attribute`] on an element, keyed by its name.
    pub fn set_attribute_node(&mut self, element: NodeId, attr: Attribute) -> Result<()> {
        self.element_mut(element)?.set_attribute_node(attr);
        Ok(())
    }

    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.element(element)?.get_attribute(name)
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        if id.document != self.id {
            return Err(Error::UnknownNode(id));
        }
        self.nodes
            .get_mut(id.index())
            .ok_or(Error::UnknownNode(id))?
            .as_element_mut()
            .ok_or(Error::NotAnElement(id))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Look up a node. Handles from another document return `None`.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id.document != self.id {
            return None;
        }
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(Node::kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id)?.as_element()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Total number of allocated nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of children currently attached to `id`.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            doc: self,
            current: self.node(parent).and_then(|n| n.first_child),
        }
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.parent(current))
    }

    /// Iterate over the attached tree in document order, starting at the root.
    pub fn descendants(&self) -> DfsIter<'_> {
        DfsIter {
            doc: self,
            stack: vec![self.root()],
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Serialize the whole document.
    pub fn render(&self) -> String {
        serialize::render_document(self)
    }

    /// Serialize one node and its descendants.
    pub fn render_node(&self, id: NodeId) -> Result<String> {
        if self.node(id).is_none() {
            return Err(Error::UnknownNode(id));
        }
        Ok(serialize::render_subtree(self, id))
    }
}

/// Arena index for the node stored at position `len`.
///
/// Panics rather than wrapping onto existing nodes.
fn next_index(len: usize) -> u32 {
    u32::try_from(len).expect("document exceeds u32::MAX nodes")
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.doc.node(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Depth-first iterator over attached nodes.
pub struct DfsIter<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for DfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.doc.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(doc: &Document, parent: NodeId) -> Vec<String> {
        doc.children(parent)
            .map(|id| match &doc.node(id).unwrap().data {
                NodeData::Element(el) => el.tag_name().to_string(),
                NodeData::Text(text) => format!("#{}", text.data),
                other => format!("{:?}", other.kind()),
            })
            .collect()
    }

    #[test]
    fn test_initial_wiring() {
        let doc = Document::new();
        assert_eq!(doc.character_set(), "UTF-8");
        assert_eq!(doc.kind(doc.root()), Some(NodeKind::Document));
        assert_eq!(
            doc.children(doc.root()).collect::<Vec<_>>(),
            vec![doc.doctype(), doc.document_element()]
        );
        assert_eq!(
            doc.children(doc.document_element()).collect::<Vec<_>>(),
            vec![doc.head(), doc.body()]
        );
        assert_eq!(doc.parent(doc.body()), Some(doc.document_element()));
        assert_eq!(doc.parent(doc.root()), None);
        assert_eq!(doc.node_count(), 5);
    }

    #[test]
    fn test_factories_do_not_attach() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let t = doc.create_text_node("x");
        let c = doc.create_comment("y");
        let b = doc.create_html_blob("<i>z</i>");

        for id in [p, t, c, b] {
            assert_eq!(doc.parent(id), None);
        }
        assert_eq!(doc.child_count(doc.body()), 0);
        assert_eq!(doc.kind(b), Some(NodeKind::HtmlBlob));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_child(body, ["a", "b"]).unwrap();
        doc.append_child(body, "c").unwrap();
        assert_eq!(tags(&doc, body), ["#a", "#b", "#c"]);
        assert_eq!(doc.child_count(body), 3);
    }

    #[test]
    fn test_prepend_inserts_each_item_at_front() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_child(body, "z").unwrap();
        doc.prepend_child(body, ["a", "b"]).unwrap();
        assert_eq!(tags(&doc, body), ["#b", "#a", "#z"]);
    }

    #[test]
    fn test_prepend_into_empty_sets_last_child() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.prepend_child(div, "a").unwrap();
        doc.append_child(div, "b").unwrap();
        assert_eq!(tags(&doc, div), ["#a", "#b"]);
    }

    #[test]
    fn test_mixed_children() {
        let mut doc = Document::new();
        let ul = doc.create_element("ul");
        let li = doc.create_element("li");
        doc.append_child(ul, vec![Child::from(li), Child::from("tail")])
            .unwrap();
        assert_eq!(tags(&doc, ul), ["li", "#tail"]);
        assert_eq!(doc.parent(li), Some(ul));
    }

    #[test]
    fn test_unknown_parent_or_child() {
        let mut doc = Document::new();
        let bogus = NodeId::new(doc.id, 999);
        assert!(matches!(
            doc.append_child(bogus, "x"),
            Err(Error::UnknownNode(id)) if id == bogus
        ));
        let body = doc.body();
        assert!(matches!(
            doc.append_child(body, bogus),
            Err(Error::UnknownNode(id)) if id == bogus
        ));
    }

    #[test]
    fn test_leaf_is_not_a_container() {
        let mut doc = Document::new();
        let text = doc.create_text_node("leaf");
        assert!(matches!(
            doc.append_child(text, "x"),
            Err(Error::NotAContainer(id)) if id == text
        ));
    }

    #[test]
    fn test_node_cannot_have_two_parents() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let (head, body) = (doc.head(), doc.body());
        doc.append_child(body, p).unwrap();
        assert!(matches!(
            doc.append_child(head, p),
            Err(Error::AlreadyAttached(id)) if id == p
        ));
        assert_eq!(doc.child_count(head), 0);
    }

    #[test]
    fn test_duplicate_in_one_batch_is_rejected_atomically() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let body = doc.body();
        assert!(matches!(
            doc.append_child(body, [p, p]),
            Err(Error::AlreadyAttached(_))
        ));
        assert_eq!(doc.child_count(body), 0);
        assert_eq!(doc.parent(p), None);
    }

    #[test]
    fn test_cycles_are_rejected() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_child(outer, inner).unwrap();

        assert!(matches!(
            doc.append_child(inner, outer),
            Err(Error::HierarchyRequest { .. })
        ));
        assert!(matches!(
            doc.append_child(outer, outer),
            Err(Error::HierarchyRequest { .. })
        ));
        let body = doc.body();
        assert!(matches!(
            doc.append_child(body, doc.root()),
            Err(Error::HierarchyRequest { .. })
        ));
    }

    #[test]
    fn test_attributes_through_document() {
        let mut doc = Document::new();
        let a = doc.create_element("a");
        doc.set_attribute(a, "href", "/one").unwrap();
        let attr = doc.create_attribute("href", "/two");
        doc.set_attribute_node(a, attr).unwrap();
        assert_eq!(doc.get_attribute(a, "href"), Some("/two"));

        let text = doc.create_text_node("t");
        assert!(matches!(
            doc.set_attribute(text, "x", "y"),
            Err(Error::NotAnElement(id)) if id == text
        ));
        assert!(matches!(
            doc.set_attribute(NodeId::new(doc.id, 1234), "x", "y"),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_child(body, "x").unwrap();
        let order: Vec<_> = doc.descendants().collect();
        let text = doc.children(body).next().unwrap();
        assert_eq!(
            order,
            vec![
                doc.root(),
                doc.doctype(),
                doc.document_element(),
                doc.head(),
                body,
                text
            ]
        );
    }

    #[test]
    fn test_next_index() {
        assert_eq!(next_index(0), 0);
        assert_eq!(next_index(u32::MAX as usize), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "document exceeds u32::MAX nodes")]
    fn test_next_index_does_not_wrap() {
        next_index(u32::MAX as usize + 1);
    }

    #[test]
    fn test_documents_have_distinct_ids() {
        let (a, b) = (Document::new(), Document::new());
        assert_ne!(a.id, b.id);
        assert_ne!(a.root(), b.root());
        assert_ne!(a.body(), b.body());
        assert!(b.node(a.body()).is_none());
        assert_eq!(b.kind(a.root()), None);
    }

    #[test]
    fn test_clone_keeps_handles() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let copy = doc.clone();
        assert_eq!(copy.kind(p), Some(NodeKind::Element));
        assert_eq!(copy.render(), doc.render());
    }

    #[test]
    fn test_custom_doctype() {
        let doc = Document::with_doctype("xhtml");
        assert!(doc.render().starts_with("<!DOCTYPE XHTML>\n"));
    }
}
