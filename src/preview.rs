//! Preview page rendering.
//!
//! Produces a standalone HTML page that inlines the (hidden) sprite and shows
//! one `<use>` block per symbol, so a merged sprite can be eyeballed in a
//! browser. A custom page can be supplied through `[preview] template`; it
//! uses the same `__SPRITE__` / `__ICONS__` placeholders as the built-in one.

mod template;

pub use template::{Template, TemplateVars};

use crate::dom::{escape_attr, escape_text};
use crate::merge::PreviewEntry;
use std::fmt::Write;

/// Built-in preview page.
const DEFAULT_PAGE: Template<PreviewVars<'static>> =
    Template::new(include_str!("preview/template.html"));

/// Variables injected into a preview page.
pub struct PreviewVars<'a> {
    /// Hidden sprite markup, inlined at the top of the body.
    pub sprite: &'a str,
    /// One markup block per symbol.
    pub icons: String,
}

impl TemplateVars for PreviewVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__SPRITE__", self.sprite)
            .replace("__ICONS__", &self.icons)
    }
}

/// Render the preview page for a merged sprite.
///
/// `custom` replaces the built-in page when `[preview] template` points at a
/// file; it receives the same placeholders.
pub fn render(sprite: &str, entries: &[PreviewEntry], custom: Option<&str>) -> String {
    let vars = PreviewVars {
        sprite,
        icons: icon_blocks(entries),
    };
    match custom {
        Some(page) => vars.apply(page),
        None => DEFAULT_PAGE.render(&vars),
    }
}

fn icon_blocks(entries: &[PreviewEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        // titles carry captured inner markup, the page wants plain text
        let label = escape_text(entry.title.as_deref().unwrap_or(&entry.name));
        write!(
            out,
            "<div class=\"icon\">\
             <svg><use xlink:href=\"#{href}\"></use></svg>\
             <code>{id}</code><span>{label}</span>\
             </div>\n",
            href = escape_attr(&entry.name),
            id = escape_text(&entry.name),
        )
        .ok();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, title: Option<&str>) -> PreviewEntry {
        PreviewEntry {
            name: name.to_string(),
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_default_page_fills_placeholders() {
        let page = render("<svg id=\"sprite\"/>", &[entry("home", Some("Home"))], None);
        assert!(page.contains("<svg id=\"sprite\"/>"));
        assert!(page.contains("xlink:href=\"#home\""));
        assert!(page.contains("<span>Home</span>"));
        assert!(!page.contains("__SPRITE__"));
        assert!(!page.contains("__ICONS__"));
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let page = render("<svg/>", &[entry("arrow", None)], None);
        assert!(page.contains("<span>arrow</span>"));
    }

    #[test]
    fn test_markup_in_labels_escaped() {
        let page = render(
            "<svg/>",
            &[entry("a", Some("Fancy <b>A</b> & more"))],
            None,
        );
        assert!(page.contains("<span>Fancy &lt;b&gt;A&lt;/b&gt; &amp; more</span>"));
        assert!(!page.contains("<span>Fancy <b>"));
    }

    #[test]
    fn test_custom_template() {
        let page = render(
            "<svg/>",
            &[entry("a", None)],
            Some("<main>__ICONS__</main>"),
        );
        assert!(page.starts_with("<main><div class=\"icon\">"));
        assert!(!page.contains("__ICONS__"));
    }
}
