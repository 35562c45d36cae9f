//! quick-xml event stream -> arena tree.

use super::{Attr, Document, NodeId, NodeKind};
use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

/// Errors raised while parsing a source document. Any of these is fatal for
/// the whole merge: a corrupt tree cannot be safely rewritten.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid encoding: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("unknown entity `&{0};`")]
    UnknownEntity(String),

    #[error("unclosed element at end of input")]
    Unclosed,
}

pub(super) fn parse(text: &str) -> Result<Document, ParseError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().expand_empty_elements = true;

    let mut doc = Document::default();
    let mut stack: Vec<NodeId> = Vec::new();
    // Text and resolved entity references accumulate here and flush as one
    // node on the next structural event, so `a &amp; b` stays a single text
    // node and inter-element indentation is still recognized as
    // whitespace-only and dropped.
    let mut pending = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                flush_text(&mut doc, &stack, &mut pending);
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                let mut attrs = Vec::new();
                for attr in start.attributes() {
                    let attr = attr?;
                    attrs.push(Attr {
                        name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                        value: attr
                            .decode_and_unescape_value(reader.decoder())?
                            .into_owned(),
                    });
                }
                let id = doc.push_node(NodeKind::Element { name, attrs }, stack.last().copied());
                stack.push(id);
            }
            Event::End(_) => {
                flush_text(&mut doc, &stack, &mut pending);
                stack.pop();
            }
            Event::Text(text) => {
                pending.push_str(&text.decode()?);
            }
            Event::GeneralRef(entity) => {
                let name = entity.decode()?;
                match resolve_entity(&name) {
                    Some(ch) => pending.push(ch),
                    None => return Err(ParseError::UnknownEntity(name.into_owned())),
                }
            }
            Event::CData(cdata) => {
                flush_text(&mut doc, &stack, &mut pending);
                let content = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                doc.push_node(NodeKind::CData(content), stack.last().copied());
            }
            Event::Comment(comment) => {
                flush_text(&mut doc, &stack, &mut pending);
                let content = comment.decode()?.into_owned();
                doc.push_node(NodeKind::Comment(content), stack.last().copied());
            }
            Event::Eof => break,
            // Declaration, doctype, PIs: not represented in symbol content.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ParseError::Unclosed);
    }
    Ok(doc)
}

/// Emit accumulated character data as a text node. Whitespace-only runs
/// (indentation between elements) are dropped; anything else is kept
/// verbatim, significant whitespace included.
fn flush_text(doc: &mut Document, stack: &[NodeId], pending: &mut String) {
    if pending.trim().is_empty() {
        pending.clear();
        return;
    }
    doc.push_node(
        NodeKind::Text(std::mem::take(pending)),
        stack.last().copied(),
    );
}

/// Resolve the predefined XML entities and numeric character references.
fn resolve_entity(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse().ok().and_then(char::from_u32);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => None,
    }
}
