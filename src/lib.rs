//! # microdom
//!
//! A small DOM-style tree builder for generating static HTML.
//!
//! ## Features
//!
//! - Build documents through a familiar factory API (`create_element`,
//!   `create_text_node`, `append_child`, ...)
//! - Serialize the whole tree to one HTML string
//! - Text and comments are escaped; raw markup blobs are passed through
//! - Void elements (`br`, `img`, ...) never render children or closing tags
//! - Optional JSON templates and a command-line renderer (`json` / `cli` features)
//!
//! ## Quick Start
//!
//! ```
//! use microdom::Document;
//!
//! let mut doc = Document::new();
//! let title = doc.create_element("title");
//! doc.append_child(title, "Hello").unwrap();
//! doc.append_child(doc.head(), title).unwrap();
//!
//! let div = doc.create_element_with_attributes("div", [("class", "x")]);
//! doc.append_child(doc.body(), div).unwrap();
//!
//! assert_eq!(
//!     doc.render(),
//!     "<!DOCTYPE HTML>\n<html>\n<head>\n<title>\nHello</title>\n</head>\n\
//!      <body>\n<div class=\"x\">\n</div>\n</body>\n</html>\n"
//! );
//! ```
//!
//! Documents are not synchronized. Share one across threads only behind a
//! lock or with a single owner.

pub mod dom;
pub mod error;
mod escape;
pub mod serialize;
#[cfg(feature = "json")]
pub mod template;

pub use dom::{
    Attribute, Child, Comment, Document, DocumentType, Element, HtmlBlob, IntoChildren, Node,
    NodeData, NodeId, NodeKind, Text,
};
pub use error::{Error, Result};
pub use escape::{escape_html, escape_html_into};
#[cfg(feature = "json")]
pub use template::{DocumentTemplate, NodeTemplate, RenderRequest, TaggedNode};
