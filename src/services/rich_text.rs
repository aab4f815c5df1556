//! The one path by which backend markup reaches a page unescaped.
//!
//! Article and history bodies arrive pre-rendered. This crate does not
//! sanitize them: the backend is the trust boundary and must sanitize before
//! publishing. Templates emit raw markup only through [`RichText::as_html`];
//! every other string goes through askama's HTML escaping.

use std::fmt::Write;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText(String);

impl RichText {
    /// Wraps markup from the trusted backend.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Makes a fragment safe to embed mid-page: closes every element left
    /// open, drops closing tags with no matching opener and drops a tag cut
    /// off at the end. Used for previews cut out of a longer body.
    pub fn balanced(&self) -> Self {
        let mut out = String::with_capacity(self.0.len() + 16);
        let mut open: Vec<String> = Vec::new();
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('<') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find('>') else {
                rest = "";
                break;
            };
            let tag = &tail[..=end];
            rest = &tail[end + 1..];

            match element(tag) {
                Some((false, name)) => {
                    if !VOID_ELEMENTS.contains(&name.as_str()) && !tag.ends_with("/>") {
                        open.push(name);
                    }
                    out.push_str(tag);
                }
                Some((true, name)) => {
                    if let Some(pos) = open.iter().rposition(|n| *n == name) {
                        for inner in open.drain(pos + 1..).rev() {
                            let _ = write!(out, "</{inner}>");
                        }
                        open.pop();
                        out.push_str(tag);
                    }
                }
                None => out.push_str(tag),
            }
        }
        out.push_str(rest);

        for name in open.iter().rev() {
            let _ = write!(out, "</{name}>");
        }
        Self(out)
    }

    /// Text content with tags removed and whitespace collapsed, for meta
    /// descriptions and other plain-text contexts.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut in_tag = false;
        for c in self.0.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => {
                    in_tag = false;
                    out.push(' ');
                }
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// `(is_closing, lowercase name)` of an element tag; `None` for comments,
/// doctypes and stray `<` characters.
fn element(tag: &str) -> Option<(bool, String)> {
    let inner = tag.strip_prefix('<')?;
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };
    if !inner.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    Some((closing, name))
}
