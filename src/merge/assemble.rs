//! Composite document assembly.
//!
//! Folds the ordered symbol units, the shared defs pool and the configured
//! root attributes into the final sprite markup, and produces the
//! `{name, title}` records the preview page is rendered from.

use super::defs::DefsPool;
use super::symbol::{FixedSizeUnit, SymbolUnit};
use crate::config::StashConfig;
use crate::dom::push_attr;
use indexmap::IndexMap;

/// One symbol plus its optional fixed-size derivative, kept in input order.
#[derive(Debug)]
pub struct SpriteUnit {
    pub symbol: SymbolUnit,
    pub fixed: Option<FixedSizeUnit>,
}

/// An entry for the preview renderer. Fixed-size symbols contribute a name
/// but no title.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    pub name: String,
    pub title: Option<String>,
}

/// Serialize the composite. With `hidden` set the root carries an inline
/// style that collapses the sprite, for embedding into the preview page.
pub fn compose(units: &[SpriteUnit], pool: &DefsPool, config: &StashConfig, hidden: bool) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str("<svg");
    for (name, value) in &config.merge.svg {
        // the hidden variant replaces any configured style wholesale
        if hidden && name == "style" {
            continue;
        }
        push_attr(&mut out, name, value);
    }
    if hidden {
        push_attr(&mut out, "style", "width:0;height:0;visibility:hidden;");
    }
    out.push('>');

    if !pool.is_blank() {
        out.push_str("<defs>");
        out.push_str(&pool.to_markup());
        out.push_str("</defs>");
    }

    for unit in units {
        write_symbol(&mut out, &unit.symbol, &config.merge.symbol);
        if let Some(fixed) = &unit.fixed {
            write_fixed_symbol(&mut out, fixed, &config.merge.symbol);
        }
    }

    out.push_str("</svg>");
    out
}

/// Preview records, in the same order the symbols appear in the sprite.
pub fn preview_entries(units: &[SpriteUnit]) -> Vec<PreviewEntry> {
    let mut entries = Vec::new();
    for unit in units {
        entries.push(PreviewEntry {
            name: unit.symbol.graphic_id.clone(),
            title: Some(unit.symbol.title.clone()),
        });
        if let Some(fixed) = &unit.fixed {
            entries.push(PreviewEntry {
                name: fixed.id.clone(),
                title: None,
            });
        }
    }
    entries
}

fn write_symbol(out: &mut String, symbol: &SymbolUnit, extra: &IndexMap<String, String>) {
    out.push_str("<symbol");
    push_attr(out, "id", &symbol.graphic_id);
    if let Some(view_box) = &symbol.view_box {
        push_attr(out, "viewBox", view_box);
    }
    for (name, value) in extra {
        push_attr(out, name, value);
    }
    out.push('>');

    // title/desc hold captured inner markup, not raw text
    out.push_str("<title>");
    out.push_str(&symbol.title);
    out.push_str("</title>");
    if let Some(desc) = &symbol.desc {
        out.push_str("<desc>");
        out.push_str(desc);
        out.push_str("</desc>");
    }

    out.push_str(&symbol.content);
    out.push_str("</symbol>");
}

fn write_fixed_symbol(out: &mut String, fixed: &FixedSizeUnit, extra: &IndexMap<String, String>) {
    out.push_str("<symbol");
    push_attr(out, "id", &fixed.id);
    push_attr(out, "viewBox", &fixed.view_box);
    for (name, value) in extra {
        push_attr(out, name, value);
    }
    out.push('>');

    out.push_str("<title>");
    out.push_str(&fixed.title);
    out.push_str("</title>");
    if let Some(desc) = &fixed.desc {
        out.push_str("<desc>");
        out.push_str(desc);
        out.push_str("</desc>");
    }

    out.push_str("<use");
    push_attr(out, "xlink:href", &format!("#{}", fixed.parent_id));
    push_attr(out, "transform", &fixed.transform);
    out.push_str("/></symbol>");
}
