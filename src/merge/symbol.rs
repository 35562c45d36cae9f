//! Per-document symbol units and the name -> id strategy.

/// Derives a graphic id from a source name. Injected into the merge so
/// callers can swap the naming scheme; the CLI always uses [`DotTruncate`].
pub trait IdFromName {
    fn id_for(&self, name: &str) -> String;
}

/// Default strategy: truncate at the first `.` (so `icon.min` -> `icon`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DotTruncate;

impl IdFromName for DotTruncate {
    fn id_for(&self, name: &str) -> String {
        match name.find('.') {
            Some(pos) => name[..pos].to_string(),
            None => name.to_string(),
        }
    }
}

/// The reusable graphic produced from one source document.
#[derive(Debug)]
pub struct SymbolUnit {
    /// `prefix + derived name`; unique across the run as long as source
    /// names are distinct.
    pub graphic_id: String,
    pub view_box: Option<String>,
    /// Inner markup of the first `<title>`, or the derived name.
    pub title: String,
    /// Inner markup of the first `<desc>`, if any.
    pub desc: Option<String>,
    /// Serialized content (already rewritten, cleaned and def-stripped).
    pub content: String,
}

/// Optional fixed-frame wrapper derived from a symbol with a resolved
/// viewBox: a `<use>` of the parent, scaled and centered.
#[derive(Debug)]
pub struct FixedSizeUnit {
    pub id: String,
    /// Id of the parent symbol the `<use>` points at.
    pub parent_id: String,
    pub view_box: String,
    pub transform: String,
    pub title: String,
    pub desc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_truncate() {
        let namer = DotTruncate;
        assert_eq!(namer.id_for("icon"), "icon");
        assert_eq!(namer.id_for("icon.min"), "icon");
        assert_eq!(namer.id_for("a.b.c"), "a");
        assert_eq!(namer.id_for(""), "");
    }
}
