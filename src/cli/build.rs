//! Build command: merge configured inputs into a sprite file.

use crate::config::StashConfig;
use crate::format::prettify;
use crate::merge::{self, DotTruncate, MergeOutput};
use crate::sources::load_sources;
use crate::{log, preview};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Run the build: load inputs, merge, write sprite (and preview page).
pub fn build_sprite(config: &StashConfig) -> Result<()> {
    let paths: Vec<PathBuf> = config
        .input
        .paths
        .iter()
        .map(|p| config.root_join(p))
        .collect();

    let sources = load_sources(&paths);
    if sources.is_empty() {
        bail!("no SVG inputs found; configure [input] paths or pass them on the command line");
    }

    let output = merge::merge_sources(&sources, config, &DotTruncate)?;

    let sprite_path = write_sprite(&output, config)?;
    log!(
        "sprite";
        "created {} ({} symbol{})",
        sprite_path.display(),
        output.entries.len(),
        if output.entries.len() == 1 { "" } else { "s" }
    );

    if config.preview.enable {
        let preview_path = write_preview(&output, &sprite_path, config)?;
        log!("preview"; "created {}", preview_path.display());
    }

    Ok(())
}

fn write_sprite(output: &MergeOutput, config: &StashConfig) -> Result<PathBuf> {
    let text = match config.output.formatting.indent_size() {
        Some(indent) => prettify(&output.sprite, indent)?,
        None => output.sprite.clone(),
    };

    let path = config.root_join(&config.output.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(&path, text).with_context(|| format!("writing sprite to {}", path.display()))?;
    Ok(path)
}

fn write_preview(
    output: &MergeOutput,
    sprite_path: &std::path::Path,
    config: &StashConfig,
) -> Result<PathBuf> {
    // merge_sources always fills preview_sprite when [preview] is enabled
    let Some(hidden_sprite) = &output.preview_sprite else {
        bail!("preview requested but no preview sprite was produced");
    };

    let custom = match &config.preview.template {
        Some(template) => {
            let path = config.root_join(template);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading preview template {}", path.display()))?;
            Some(text)
        }
        None => None,
    };

    let page = preview::render(hidden_sprite, &output.entries, custom.as_deref());

    let stem = sprite_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string());
    let path = sprite_path.with_file_name(format!("{stem}-preview.html"));
    fs::write(&path, page)
        .with_context(|| format!("writing preview page to {}", path.display()))?;
    Ok(path)
}
