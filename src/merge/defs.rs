//! Shared-definitions pool.
//!
//! Reusable paint definitions are lifted out of per-icon content into one
//! `<defs>` block for the whole sprite: the inner markup of each source's
//! first `<defs>`, plus any gradients and patterns found anywhere in the
//! remaining symbol content. The pool keeps fragments in arrival order;
//! within one document paints are pooled as all linearGradient, then all
//! radialGradient, then all pattern, in document order within each kind.

use crate::dom::Document;

const PAINT_KINDS: &[&str] = &["linearGradient", "radialGradient", "pattern"];

/// Ordered accumulator of serialized definition fragments, owned by the
/// assembler for the whole run.
#[derive(Debug, Default)]
pub struct DefsPool {
    fragments: Vec<String>,
}

impl DefsPool {
    pub fn push_fragment(&mut self, markup: String) {
        self.fragments.push(markup);
    }

    /// True when the combined content is empty or all whitespace; the
    /// composite omits the `<defs>` wrapper entirely in that case.
    pub fn is_blank(&self) -> bool {
        self.fragments.iter().all(|f| f.trim().is_empty())
    }

    pub fn to_markup(&self) -> String {
        self.fragments.concat()
    }
}

/// Pool the inner content of the document's *first* `<defs>` element and
/// detach it. Later `<defs>` blocks stay in symbol content, as the original
/// tool left them.
pub fn pool_first_defs(doc: &mut Document, pool: &mut DefsPool) {
    if let Some(defs) = doc.find_first("defs") {
        let inner = doc.inner_xml(defs);
        if !inner.is_empty() {
            pool.push_fragment(inner);
        }
        doc.detach(defs);
    }
}

/// Move every gradient/pattern element left in the document into the pool.
/// Runs after the first `<defs>` was pooled, on the final symbol content.
pub fn pool_paints(doc: &mut Document, pool: &mut DefsPool) {
    for kind in PAINT_KINDS {
        for node in doc.find_all(kind) {
            pool.push_fragment(doc.outer_xml(node));
            doc.detach(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_defs_pooled_and_removed() {
        let mut doc = Document::parse(
            r#"<svg><defs><stop id="a"/></defs><defs><stop id="b"/></defs></svg>"#,
        )
        .unwrap();
        let mut pool = DefsPool::default();
        pool_first_defs(&mut doc, &mut pool);

        assert_eq!(pool.to_markup(), r#"<stop id="a"/>"#);
        // the second defs block is left in place
        let root = doc.root_element().unwrap();
        assert_eq!(doc.outer_xml(root), r#"<svg><defs><stop id="b"/></defs></svg>"#);
    }

    #[test]
    fn test_empty_defs_contributes_nothing() {
        let mut doc = Document::parse("<svg><defs></defs><g/></svg>").unwrap();
        let mut pool = DefsPool::default();
        pool_first_defs(&mut doc, &mut pool);
        assert!(pool.is_blank());
        assert!(doc.find_first("defs").is_none());
    }

    #[test]
    fn test_paints_pooled_by_kind_then_document_order() {
        let mut doc = Document::parse(
            "<svg><pattern id=\"p\"/><radialGradient id=\"r\"/>\
             <g><linearGradient id=\"l1\"/></g><linearGradient id=\"l2\"/></svg>",
        )
        .unwrap();
        let mut pool = DefsPool::default();
        pool_paints(&mut doc, &mut pool);

        assert_eq!(
            pool.to_markup(),
            r#"<linearGradient id="l1"/><linearGradient id="l2"/><radialGradient id="r"/><pattern id="p"/>"#
        );
        let root = doc.root_element().unwrap();
        assert_eq!(doc.outer_xml(root), "<svg><g/></svg>");
    }
}
