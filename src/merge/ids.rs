//! Identifier uniquification and reference rewriting.
//!
//! Every `id` in a source document becomes `<base>-<originalId>`, which makes
//! ids from different sources collision-free by construction as long as the
//! derived base names are distinct. References are rewritten in a second
//! pass so they resolve against the *original* ids:
//!
//! - `url(#token)` anywhere in an attribute value: rewritten when the token
//!   is a known id, and the id is marked as referenced (this drives optional
//!   pruning of unreferenced ids later).
//! - `xlink:href="#token"`: rewritten, but does *not* mark the id as
//!   referenced - a `<use>` consumer alone does not keep a def alive.
//!
//! Unknown tokens may point outside the merged set and are left verbatim.

use crate::dom::{Document, NodeId};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Matches a `url()` reference; the token is a non-whitespace run.
/// Explicit ASCII classes keep the trimmed regex feature set sufficient.
static URL_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\([ \t\r\n]*#([^ \t\r\n)]+?)[ \t\r\n]*\)").unwrap());

/// One `id`-bearing element of a single source document.
#[derive(Debug)]
pub struct IdRecord {
    /// The rewritten, globally unique id.
    pub unique_id: String,
    /// Arena handle of the element carrying the id.
    pub node: NodeId,
    /// Flipped the first time a `url()` reference resolves to this id.
    pub referenced: bool,
}

/// Original id -> record, scoped to one source document.
#[derive(Debug, Default)]
pub struct IdTable {
    records: FxHashMap<String, IdRecord>,
}

impl IdTable {
    pub fn get(&self, original: &str) -> Option<&IdRecord> {
        self.records.get(original)
    }

    pub fn records(&self) -> impl Iterator<Item = &IdRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Rewrite all ids in `doc` to `<base>-<id>` and fix up internal references.
///
/// Must run before attribute cleanup, which may delete the very attributes
/// holding the references.
pub fn uniquify(doc: &mut Document, base: &str) -> IdTable {
    let mut table = IdTable::default();

    // Pass 1: record and rename ids. The mapping is complete before any
    // reference is touched, so forward references resolve too.
    for node in doc.elements() {
        if let Some(original) = doc.attr(node, "id").map(str::to_owned) {
            let unique_id = format!("{base}-{original}");
            doc.set_attr(node, "id", unique_id.clone());
            table.records.insert(
                original,
                IdRecord {
                    unique_id,
                    node,
                    referenced: false,
                },
            );
        }
    }

    // Pass 2: rewrite references against the original ids.
    for node in doc.elements() {
        let attrs: Vec<(String, String)> = doc
            .attrs(node)
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect();

        for (name, value) in attrs {
            if let Some(rewritten) = rewrite_url_refs(&value, &mut table) {
                doc.set_attr(node, &name, rewritten);
            } else if name == "xlink:href"
                && let Some(token) = value.strip_prefix('#')
                && let Some(record) = table.records.get(token)
            {
                doc.set_attr(node, "xlink:href", format!("#{}", record.unique_id));
            }
        }
    }

    table
}

/// Replace every `url(#x)` whose token is a known id, marking those ids as
/// referenced. Returns `None` when nothing matched.
fn rewrite_url_refs(value: &str, table: &mut IdTable) -> Option<String> {
    if !value.contains("url(") {
        return None;
    }

    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    let mut changed = false;

    for caps in URL_REF.captures_iter(value) {
        let whole = caps.get(0).unwrap();
        let token = &caps[1];
        if let Some(record) = table.records.get_mut(token) {
            record.referenced = true;
            out.push_str(&value[last..whole.start()]);
            out.push_str("url(#");
            out.push_str(&record.unique_id);
            out.push(')');
            last = whole.end();
            changed = true;
        }
    }

    if !changed {
        return None;
    }
    out.push_str(&value[last..]);
    Some(out)
}
