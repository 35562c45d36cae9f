//! Arena tree -> compact markup.
//!
//! Output is deliberately compact (no inserted whitespace): pretty-printing
//! is an optional, separate pass over the finished composite.

use super::{Document, NodeId, NodeKind};
use quick_xml::escape::{escape, partial_escape};
use std::fmt::Write as _;

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    escape(value).into_owned()
}

/// Escape character data (`&`, `<`, `>` only).
pub fn escape_text(value: &str) -> String {
    partial_escape(value).into_owned()
}

/// Append ` name="value"` with proper escaping.
pub fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
}

pub(super) fn outer_xml(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

pub(super) fn inner_xml(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    for &child in &doc.node(id).children {
        write_node(doc, child, &mut out);
    }
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let node = doc.node(id);
    match &node.kind {
        NodeKind::Element { name, attrs } => {
            out.push('<');
            out.push_str(name);
            for attr in attrs {
                push_attr(out, &attr.name, &attr.value);
            }
            if node.children.is_empty() {
                out.push_str("/>");
            } else {
                out.push('>');
                for &child in &node.children {
                    write_node(doc, child, out);
                }
                let _ = write!(out, "</{name}>");
            }
        }
        NodeKind::Text(text) => out.push_str(&escape_text(text)),
        NodeKind::CData(content) => {
            let _ = write!(out, "<![CDATA[{content}]]>");
        }
        NodeKind::Comment(content) => {
            let _ = write!(out, "<!--{content}-->");
        }
    }
}
