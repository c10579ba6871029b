//! Element payload: tag name, attributes and void-element status.

use indexmap::IndexMap;

use super::attr::Attribute;

/// HTML void elements. These never render children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check whether a tag name is a void element.
///
/// The comparison is exact: `"BR"` is not void.
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// An element's own data. Children live in the document arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
    attributes: IndexMap<String, Attribute>,
    self_closing: bool,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        let tag_name = tag_name.into();
        let self_closing = is_void_element(&tag_name);
        Self {
            tag_name,
            attributes: IndexMap::new(),
            self_closing,
        }
    }

    /// Create an element and set each attribute in iteration order.
    pub fn with_attributes<I, A>(tag_name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        let mut element = Self::new(tag_name);
        for attr in attributes {
            element.set_attribute_node(attr.into());
        }
        element
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Fixed at construction from [`VOID_ELEMENTS`].
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Set an attribute by name. An existing attribute with the same name
    /// keeps its position and takes the new value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_attribute_node(Attribute::new(name, value));
    }

    /// Store an attribute keyed by its name, replacing any previous one.
    pub fn set_attribute_node(&mut self, attr: Attribute) {
        self.attributes.insert(attr.name.clone(), attr);
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|attr| attr.value.as_str())
    }

    /// Attributes in insertion order of their names.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// `<tag attrs>` followed by a newline.
    pub fn render_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        for attr in self.attributes.values() {
            attr.render_into(out);
        }
        out.push_str(">\n");
    }

    /// `</tag>` followed by a newline. Void elements have none.
    pub fn render_close_tag(&self, out: &mut String) {
        if self.self_closing {
            return;
        }
        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push_str(">\n");
    }
}
