//! Configurable attribute cleanup.
//!
//! Strips presentation attributes an author does not want duplicated into
//! every symbol, with two escape hatches:
//!
//! - `preserve--<attr>` is always renamed to `<attr>`, even when `<attr>` is
//!   on the cleanup list.
//! - `fill="currentColor"` is never deleted: it is how shared defs inherit a
//!   consumer's color.
//!
//! Content inside `<defs>` is reused by reference and stays untouched unless
//! `cleanup_defs` is set. Must run after id rewriting so the `referenced`
//! flags are accurate when pruning unreferenced ids.

use super::ids::IdTable;
use crate::dom::Document;

/// Rules derived from the `[merge]` config section.
#[derive(Debug, Default, Clone)]
pub struct CleanupRules {
    /// Attribute names to strip.
    pub attributes: Vec<String>,
    /// Apply cleanup inside `<defs>` subtrees too.
    pub cleanup_defs: bool,
}

impl CleanupRules {
    fn targets(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }
}

pub fn apply(doc: &mut Document, rules: &CleanupRules, table: &IdTable) {
    for node in doc.elements() {
        if !rules.cleanup_defs && doc.has_ancestor_named(node, "defs") {
            continue;
        }

        let attrs: Vec<(String, String)> = doc
            .attrs(node)
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect();

        // Deletions first, renames after: a preserve-- value must land even
        // when its target name is on the cleanup list.
        for (name, value) in &attrs {
            // ids are handled separately below
            if name == "id" || name.starts_with("preserve--") {
                continue;
            }
            if rules.targets(name) && !(name == "fill" && value == "currentColor") {
                doc.remove_attr(node, name);
            }
        }

        for (name, value) in attrs {
            if let Some(suffix) = name.strip_prefix("preserve--").filter(|s| !s.is_empty()) {
                let suffix = suffix.to_owned();
                doc.remove_attr(node, &name);
                doc.set_attr(node, &suffix, value);
            }
        }
    }

    // Optional id pruning: drop ids nothing referenced via url().
    if rules.targets("id") {
        for record in table.records() {
            if !record.referenced {
                doc.remove_attr(record.node, "id");
            }
        }
    }
}
