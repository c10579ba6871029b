//! Element attributes.

use std::fmt;

/// A name/value pair attached to an element.
///
/// Rendered as ` name="value"`. Neither part is escaped, so callers that put
/// untrusted input into attributes must escape it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn render_into(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.name);
        out.push_str("=\"");
        out.push_str(&self.value);
        out.push('"');
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + self.value.len() + 4);
        self.render_into(&mut out);
        out
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}=\"{}\"", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Attribute {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
