//! HTML escaping for text and comment content.
//!
//! Five characters are replaced by entities:
//! - `&` -> `&amp;`
//! - `"` -> `&quot;`
//! - `'` -> `&apos;`
//! - `<` -> `&lt;`
//! - `>` -> `&gt;`
//!
//! The transform is a single left-to-right pass, so the output is identical to
//! replacing `&` first and the other four afterwards. It is one-pass, not
//! idempotent: feeding escaped output back in escapes its ampersands again.

use std::borrow::Cow;

/// Escape special HTML characters.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use microdom::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html("Tom & 'Jerry'"), "Tom &amp; &apos;Jerry&apos;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    match first_special(s.as_bytes()) {
        None => Cow::Borrowed(s),
        Some(_) => {
            let mut out = String::with_capacity(s.len() + s.len() / 8);
            escape_html_into(&mut out, s);
            Cow::Owned(out)
        }
    }
}

/// Escape `s` and append the result to `out`.
pub fn escape_html_into(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;

    while let Some(offset) = first_special(&bytes[start..]) {
        let idx = start + offset;
        out.push_str(&s[start..idx]);
        out.push_str(entity(bytes[idx]));
        start = idx + 1;
    }

    out.push_str(&s[start..]);
}

/// Position of the first byte that needs an entity.
///
/// All five specials are ASCII, so a byte position is always a char boundary.
fn first_special(bytes: &[u8]) -> Option<usize> {
    let markup = memchr::memchr3(b'&', b'<', b'>', bytes);
    let quote = memchr::memchr2(b'"', b'\'', bytes);
    match (markup, quote) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn entity(byte: u8) -> &'static str {
    match byte {
        b'&' => "&amp;",
        b'"' => "&quot;",
        b'\'' => "&apos;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        _ => unreachable!("not an escapable byte"),
    }
}
