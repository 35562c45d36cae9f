//! Mutable XML document model for SVG rewriting.
//!
//! Nodes live in an arena (`Vec<Node>`) and are addressed by stable integer
//! ids, so a lookup table built in one pass stays valid while a later pass
//! mutates the tree. Detaching a node unlinks it from its parent's child
//! list; arena slots are never reused or reindexed.

mod parse;
mod serialize;

pub use parse::ParseError;
pub use serialize::{escape_attr, escape_text, push_attr};

/// Stable handle into a [`Document`] arena.
pub type NodeId = usize;

/// A single attribute. Attribute order is preserved through parse and
/// serialize since it is part of the observable output.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element { name: String, attrs: Vec<Attr> },
    Text(String),
    CData(String),
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A parsed XML document. Top-level nodes (usually a single root element,
/// possibly with comments around it) are tracked in `roots`.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Document {
    /// Parse a document from raw text. Whitespace-only text nodes are
    /// dropped; the XML declaration, doctype and processing instructions
    /// are not represented.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse::parse(text)
    }

    pub(crate) fn push_node(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// First top-level element, if any.
    pub fn root_element(&self) -> Option<NodeId> {
        self.roots
            .iter()
            .copied()
            .find(|&id| matches!(self.nodes[id].kind, NodeKind::Element { .. }))
    }

    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn attrs(&self, id: NodeId) -> &[Attr] {
        match &self.nodes[id].kind {
            NodeKind::Element { attrs, .. } => attrs,
            _ => &[],
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, overwriting in place or appending if new.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id].kind {
            let value = value.into();
            match attrs.iter_mut().find(|a| a.name == name) {
                Some(attr) => attr.value = value,
                None => attrs.push(Attr {
                    name: name.to_string(),
                    value,
                }),
            }
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id].kind {
            attrs.retain(|a| a.name != name);
        }
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// All attached elements in document (preorder) order.
    ///
    /// Returns a snapshot so callers can mutate the tree while iterating.
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            self.collect_elements(root, &mut out);
        }
        out
    }

    fn collect_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if matches!(self.nodes[id].kind, NodeKind::Element { .. }) {
            out.push(id);
        }
        for &child in &self.nodes[id].children {
            self.collect_elements(child, out);
        }
    }

    /// First attached element with the given name, in document order.
    pub fn find_first(&self, name: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&id| self.element_name(id) == Some(name))
    }

    /// All attached elements with the given name, in document order.
    pub fn find_all(&self, name: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&id| self.element_name(id) == Some(name))
            .collect()
    }

    /// Whether any strict ancestor of `id` is an element with this name.
    pub fn has_ancestor_named(&self, id: NodeId, name: &str) -> bool {
        let mut current = self.nodes[id].parent;
        while let Some(p) = current {
            if self.element_name(p) == Some(name) {
                return true;
            }
            current = self.nodes[p].parent;
        }
        false
    }

    /// Number of element children (text and comments don't count).
    pub fn element_child_count(&self, id: NodeId) -> usize {
        self.nodes[id]
            .children
            .iter()
            .filter(|&&c| matches!(self.nodes[c].kind, NodeKind::Element { .. }))
            .count()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Unlink a node from its parent (or from the root list). The node and
    /// its subtree stay in the arena but no longer appear in traversals
    /// rooted at the document.
    pub fn detach(&mut self, id: NodeId) {
        match self.nodes[id].parent {
            Some(p) => self.nodes[p].children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
        self.nodes[id].parent = None;
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Markup of the node itself, including its tag.
    pub fn outer_xml(&self, id: NodeId) -> String {
        serialize::outer_xml(self, id)
    }

    /// Markup of the node's children only.
    pub fn inner_xml(&self, id: NodeId) -> String {
        serialize::inner_xml(self, id)
    }
}
