//! The document-merge engine.
//!
//! Each source document flows through id rewriting -> attribute cleanup ->
//! shared-defs extraction -> geometry resolution, producing one symbol unit
//! (plus an optional fixed-size derivative); the assembler folds the ordered
//! unit stream and the shared defs pool into the composite sprite. The merge
//! is a pure single-threaded fold: symbol order is input order, always.

pub mod assemble;
pub mod cleanup;
pub mod defs;
mod error;
pub mod geometry;
pub mod ids;
pub mod symbol;

#[cfg(test)]
mod tests;

pub use assemble::PreviewEntry;
pub use error::MergeError;
pub use symbol::{DotTruncate, IdFromName};

use crate::config::StashConfig;
use crate::debug;
use crate::dom::Document;
use assemble::SpriteUnit;
use cleanup::CleanupRules;
use defs::DefsPool;
use symbol::{FixedSizeUnit, SymbolUnit};

/// One input to the merge: a source name (file name without the `.svg`
/// extension) and its raw document text.
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub name: String,
    pub text: String,
}

/// The result of a merge run.
#[derive(Debug)]
pub struct MergeOutput {
    /// The serialized composite sprite.
    pub sprite: String,
    /// The sprite with a collapsing style on the root, for embedding into
    /// the preview page. Only built when the preview is enabled.
    pub preview_sprite: Option<String>,
    /// Ordered `{name, title}` records for the preview renderer.
    pub entries: Vec<PreviewEntry>,
}

/// Merge the ordered inputs into one composite sprite.
///
/// Fails on the first malformed document; nothing is emitted in that case.
pub fn merge_sources(
    inputs: &[SourceInput],
    config: &StashConfig,
    namer: &dyn IdFromName,
) -> Result<MergeOutput, MergeError> {
    let rules = CleanupRules {
        attributes: config.merge.cleanup.attribute_list(),
        cleanup_defs: config.merge.cleanup_defs,
    };

    let mut pool = DefsPool::default();
    let mut units = Vec::with_capacity(inputs.len());

    for input in inputs {
        units.push(process_source(input, config, &rules, namer, &mut pool)?);
    }

    let sprite = assemble::compose(&units, &pool, config, false);
    let preview_sprite = config
        .preview
        .enable
        .then(|| assemble::compose(&units, &pool, config, true));
    let entries = assemble::preview_entries(&units);

    Ok(MergeOutput {
        sprite,
        preview_sprite,
        entries,
    })
}

/// Run one source document through the rewrite pipeline.
fn process_source(
    input: &SourceInput,
    config: &StashConfig,
    rules: &CleanupRules,
    namer: &dyn IdFromName,
    pool: &mut DefsPool,
) -> Result<SpriteUnit, MergeError> {
    let base_id = namer.id_for(&input.name);
    debug!("merge"; "processing `{}` as `{}`", input.name, base_id);

    let mut doc = Document::parse(&input.text).map_err(|source| MergeError::MalformedDocument {
        name: input.name.clone(),
        source,
    })?;

    prune_empty_groups(&mut doc);

    let table = ids::uniquify(&mut doc, &base_id);
    cleanup::apply(&mut doc, rules, &table);

    // Capture title/desc before any detaching (the first title may live
    // inside the defs block), then pool the first defs and drop every
    // title/desc element from the content.
    let titles = doc.find_all("title");
    let descs = doc.find_all("desc");
    let title = titles.first().map(|&id| doc.inner_xml(id));
    let desc = descs.first().map(|&id| doc.inner_xml(id));

    defs::pool_first_defs(&mut doc, pool);
    for id in titles.into_iter().chain(descs) {
        doc.detach(id);
    }

    let root = doc.find_first("svg").or_else(|| doc.root_element());
    let view_box = root.and_then(|id| {
        geometry::resolve_view_box(&doc, id, config.merge.inherit_viewbox)
    });

    defs::pool_paints(&mut doc, pool);

    let content = match root {
        Some(id) if doc.element_name(id) == Some("svg") => doc.inner_xml(id),
        // no <svg> wrapper: take the whole document as content
        Some(id) => doc.outer_xml(id),
        None => String::new(),
    };

    let title = title.filter(|t| !t.is_empty()).unwrap_or_else(|| base_id.clone());
    let desc = desc.filter(|d| !d.is_empty());
    let graphic_id = format!("{}{}", config.merge.prefix, base_id);

    let fixed = build_fixed_size(&graphic_id, view_box.as_deref(), &title, desc.as_deref(), config);

    Ok(SpriteUnit {
        symbol: SymbolUnit {
            graphic_id,
            view_box,
            title,
            desc,
            content,
        },
        fixed,
    })
}

/// Derive the fixed-size wrapper when a viewBox resolved and the feature is
/// configured. An unparseable viewBox skips the derivation with a warning.
fn build_fixed_size(
    graphic_id: &str,
    view_box: Option<&str>,
    title: &str,
    desc: Option<&str>,
    config: &StashConfig,
) -> Option<FixedSizeUnit> {
    let fixed = config.merge.fixed_size.as_ref()?;
    let view_box = view_box?;

    let Some(rect) = geometry::parse_view_box(view_box) else {
        crate::log!(
            "warning";
            "`{}`: viewBox \"{}\" is not numeric, skipping fixed-size symbol",
            graphic_id, view_box
        );
        return None;
    };

    Some(FixedSizeUnit {
        id: format!("{graphic_id}{}", fixed.suffix),
        parent_id: graphic_id.to_string(),
        view_box: geometry::fixed_view_box(fixed),
        transform: geometry::fixed_size_transform(rect, fixed),
        title: title.to_string(),
        desc: desc.map(str::to_string),
    })
}

/// Drop `<g>` elements with no element children, in a single document-order
/// pass: an outer group emptied by the removal of its inner group survives
/// until some later run.
fn prune_empty_groups(doc: &mut Document) {
    for group in doc.find_all("g") {
        if doc.element_child_count(group) == 0 {
            doc.detach(group);
        }
    }
}
