//! Node handles, kinds and payloads.

use std::fmt;

use super::element::Element;
use super::leaf::{Comment, DocumentType, HtmlBlob, Text};

/// Handle to a node within a [`Document`](super::Document).
///
/// A handle records which document allocated it, so it is rejected by any
/// other document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) document: u64,
    pub(crate) index: u32,
}

impl NodeId {
    pub(crate) fn new(document: u64, index: u32) -> Self {
        Self { document, index }
    }

    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.document, self.index)
    }
}

/// The closed set of node kinds a tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Text,
    Comment,
    Document,
    DocumentType,
    /// Pre-formed markup emitted verbatim.
    HtmlBlob,
}

impl NodeKind {
    /// The DOM `nodeType` code for this kind.
    ///
    /// `HtmlBlob` is not a DOM node type and has no code.
    pub fn node_type(self) -> Option<u16> {
        match self {
            NodeKind::Element => Some(1),
            NodeKind::Text => Some(3),
            NodeKind::Comment => Some(8),
            NodeKind::Document => Some(9),
            NodeKind::DocumentType => Some(10),
            NodeKind::HtmlBlob => None,
        }
    }

    /// Whether nodes of this kind can hold children.
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Element | NodeKind::Document)
    }
}

/// Payload carried by a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    DocumentType(DocumentType),
    Element(Element),
    Text(Text),
    Comment(Comment),
    HtmlBlob(HtmlBlob),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Document => NodeKind::Document,
            NodeData::DocumentType(_) => NodeKind::DocumentType,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
            NodeData::HtmlBlob(_) => NodeKind::HtmlBlob,
        }
    }
}

/// A node in the document arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind-specific payload.
    pub data: NodeData,
    /// Parent node (None for the document and for detached nodes).
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    /// Get the element payload, if this node is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }
}
