//! HTML serializer - walks a document tree and emits markup.
//!
//! Output follows a fixed whitespace pattern: every element's opening tag and
//! closing tag is followed by a newline, as are comments and the doctype.
//! Text and raw blobs are emitted with no added whitespace.
//!
//! Children of void elements are skipped even when present.

use crate::dom::{Document, NodeData, NodeId};

/// Serialize the whole document, starting from its root.
pub fn render_document(doc: &Document) -> String {
    render_subtree(doc, doc.root())
}

/// Serialize one node and its descendants.
///
/// Unknown IDs render as an empty string.
pub fn render_subtree(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    walk_node(doc, id, &mut out);
    out
}

/// Walk a node and emit its HTML.
fn walk_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };

    match &node.data {
        NodeData::Document => {
            for child in doc.children(id) {
                walk_node(doc, child, out);
            }
        }
        NodeData::DocumentType(doctype) => doctype.render_into(out),
        NodeData::Text(text) => text.render_into(out),
        NodeData::Comment(comment) => comment.render_into(out),
        NodeData::HtmlBlob(blob) => blob.render_into(out),
        NodeData::Element(element) => {
            element.render_open_tag(out);
            if element.is_self_closing() {
                return;
            }
            for child in doc.children(id) {
                walk_node(doc, child, out);
            }
            element.render_close_tag(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fresh_document() {
        let doc = Document::new();
        assert_eq!(
            render_document(&doc),
            "<!DOCTYPE HTML>\n<html>\n<head>\n</head>\n<body>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn test_render_nested_elements() {
        let mut doc = Document::new();
        let ul = doc.create_element("ul");
        let li = doc.create_element("li");
        doc.append_child(li, "one").unwrap();
        doc.append_child(ul, li).unwrap();

        assert_eq!(
            render_subtree(&doc, ul),
            "<ul>\n<li>\none</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_void_element_skips_children() {
        let mut doc = Document::new();
        let br = doc.create_element("br");
        doc.append_child(br, ["ignored", "too"]).unwrap();
        assert_eq!(doc.child_count(br), 2);
        assert_eq!(render_subtree(&doc, br), "<br>\n");
    }

    #[test]
    fn test_detached_nodes_are_not_rendered() {
        let mut doc = Document::new();
        doc.create_element("p");
        doc.create_text_node("orphan");
        assert_eq!(render_document(&doc), render_document(&Document::new()));
    }

    #[test]
    fn test_unknown_id_renders_empty() {
        let doc = Document::new();
        let other = Document::new();
        assert_eq!(render_subtree(&doc, NodeId::new(doc.root().document, 42)), "");
        assert_eq!(render_subtree(&doc, other.body()), "");
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut doc = Document::new();
        let body = doc.body();
        doc.append_child(body, "x").unwrap();
        let first = render_document(&doc);
        assert_eq!(first, render_document(&doc));

        doc.append_child(body, "y").unwrap();
        assert_ne!(first, render_document(&doc));
    }
}
