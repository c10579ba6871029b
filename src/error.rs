//! Error types for microdom operations.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors that can occur while building or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("node {0} cannot hold children")]
    NotAContainer(NodeId),

    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("node {0} is already attached to a parent")]
    AlreadyAttached(NodeId),

    #[error("cannot insert node {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("invalid template: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
