//! Declarative JSON document templates.
//!
//! A template lists the nodes to place in `<head>` and `<body>`. Bare strings
//! are text nodes; objects carry a `type` tag.
//!
//! ```
//! use microdom::DocumentTemplate;
//!
//! let template = DocumentTemplate::from_json(
//!     r#"{"body": [{"type": "element", "tag": "p", "children": ["hi"]}]}"#,
//! )
//! .unwrap();
//! let doc = template.build().unwrap();
//! assert!(doc.render().contains("<p>\nhi</p>\n"));
//! ```

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::dom::{Document, NodeId};
use crate::error::Result;

/// A whole document: doctype plus head and body contents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentTemplate {
    #[serde(default = "default_doctype")]
    pub doctype: String,
    #[serde(default)]
    pub head: Vec<NodeTemplate>,
    #[serde(default)]
    pub body: Vec<NodeTemplate>,
}

fn default_doctype() -> String {
    "html".to_string()
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self {
            doctype: default_doctype(),
            head: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// One node in a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeTemplate {
    /// Shorthand for a text node.
    Text(String),
    Node(TaggedNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaggedNode {
    Element {
        tag: String,
        #[serde(default)]
        attributes: IndexMap<String, String>,
        #[serde(default)]
        children: Vec<NodeTemplate>,
    },
    Text {
        data: String,
    },
    Comment {
        data: String,
    },
    /// Raw markup, emitted verbatim.
    Html {
        data: String,
    },
}

impl DocumentTemplate {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a template from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Build a document from this template.
    pub fn build(&self) -> Result<Document> {
        let mut doc = Document::with_doctype(self.doctype.as_str());
        let (head, body) = (doc.head(), doc.body());
        append_all(&mut doc, head, &self.head)?;
        append_all(&mut doc, body, &self.body)?;
        log::debug!(
            "built document with {} nodes from template",
            doc.node_count()
        );
        Ok(doc)
    }
}

/// One template-to-HTML run: where to read, where to write, and an optional
/// doctype override. This is what the `microdom` binary executes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Template path, or `-` for the `input` reader.
    pub input: String,
    /// Output path. `None` writes to the `output` writer.
    pub output: Option<String>,
    /// Replaces the template's doctype keyword.
    pub doctype: Option<String>,
}

impl RenderRequest {
    /// Read, build and render the template, then write the HTML.
    ///
    /// Returns the number of bytes written.
    pub fn run(&self, mut input: impl Read, mut output: impl Write) -> Result<usize> {
        let mut template = if self.input == "-" {
            let mut json = String::new();
            input.read_to_string(&mut json)?;
            DocumentTemplate::from_json(&json)?
        } else {
            DocumentTemplate::load(&self.input)?
        };

        if let Some(ref doctype) = self.doctype {
            template.doctype = doctype.clone();
        }

        let html = template.build()?.render();

        match self.output {
            Some(ref path) => fs::write(path, &html)?,
            None => output.write_all(html.as_bytes())?,
        }

        Ok(html.len())
    }
}

fn append_all(doc: &mut Document, parent: NodeId, nodes: &[NodeTemplate]) -> Result<()> {
    for node in nodes {
        let id = instantiate(doc, node)?;
        doc.append_child(parent, id)?;
    }
    Ok(())
}

fn instantiate(doc: &mut Document, node: &NodeTemplate) -> Result<NodeId> {
    let id = match node {
        NodeTemplate::Text(data) | NodeTemplate::Node(TaggedNode::Text { data }) => {
            doc.create_text_node(data.as_str())
        }
        NodeTemplate::Node(TaggedNode::Comment { data }) => doc.create_comment(data.as_str()),
        NodeTemplate::Node(TaggedNode::Html { data }) => doc.create_html_blob(data.as_str()),
        NodeTemplate::Node(TaggedNode::Element {
            tag,
            attributes,
            children,
        }) => {
            let element = doc.create_element_with_attributes(
                tag.as_str(),
                attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
            append_all(doc, element, children)?;
            element
        }
    };
    Ok(id)
}
