//! Leaf node kinds: text, comments, doctypes and raw markup.
//!
//! Each leaf renders its own fragment. None of them append a trailing newline
//! except [`Comment`] and [`DocumentType`].

use crate::escape::escape_html_into;

/// Textual content of an element. Always rendered escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub data: String,
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn render_into(&self, out: &mut String) {
        escape_html_into(out, &self.data);
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.data.len());
        self.render_into(&mut out);
        out
    }
}

/// An HTML comment, `<!--data-->` followed by a newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    pub data: String,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str("<!--");
        escape_html_into(out, &self.data);
        out.push_str("-->\n");
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.data.len() + 8);
        self.render_into(&mut out);
        out
    }
}

/// A `<!DOCTYPE ...>` declaration.
///
/// The keyword is caller-controlled and is upper-cased but never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    pub doc_type: String,
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::new("html")
    }
}

impl DocumentType {
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
        }
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str("<!DOCTYPE ");
        out.push_str(&self.doc_type.to_uppercase());
        out.push_str(">\n");
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Pre-formed markup emitted verbatim, with no escaping and no added whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlBlob {
    pub data: String,
}

impl HtmlBlob {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str(&self.data);
    }

    pub fn render(&self) -> String {
        self.data.clone()
    }
}
