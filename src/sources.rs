//! Input discovery: turn configured paths into named SVG sources.
//!
//! Each configured path is either a single SVG file or a directory that is
//! walked recursively. Directory entries are visited in sorted order so the
//! sprite output is stable across platforms. A source's name is its file name
//! with the trailing `.svg` stripped.

use crate::log;
use crate::merge::SourceInput;
use std::fs;
use std::path::Path;

/// Load every SVG reachable from `paths`, in configuration order.
///
/// Missing or unreadable entries are logged and skipped rather than aborting
/// the whole build.
pub fn load_sources(paths: &[impl AsRef<Path>]) -> Vec<SourceInput> {
    let mut sources = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            collect_dir(path, &mut sources);
        } else if path.is_file() {
            push_file(path, &mut sources);
        } else {
            log!("warning"; "input not found: {}", path.display());
        }
    }
    sources
}

/// Recursively collect `.svg` files from a directory, sorted by path.
fn collect_dir(dir: &Path, sources: &mut Vec<SourceInput>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log!("warning"; "cannot read directory {}: {err}", dir.display());
            return;
        }
    };

    let mut paths: Vec<_> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_dir(&path, sources);
        } else if path.extension().is_some_and(|ext| ext == "svg") {
            push_file(&path, sources);
        }
    }
}

fn push_file(path: &Path, sources: &mut Vec<SourceInput>) {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        log!("warning"; "skipping non-UTF-8 file name: {}", path.display());
        return;
    };
    let name = file_name.strip_suffix(".svg").unwrap_or(file_name);

    match fs::read_to_string(path) {
        Ok(text) => sources.push(SourceInput {
            name: name.to_string(),
            text,
        }),
        Err(err) => log!("warning"; "cannot read {}: {err}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("home.svg");
        fs::write(&file, "<svg/>").unwrap();

        let sources = load_sources(&[file]);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "home");
        assert_eq!(sources[0].text, "<svg/>");
    }

    #[test]
    fn test_directory_is_walked_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zebra.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("apple.svg"), "<svg/>").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/mango.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sources = load_sources(&[dir.path().to_path_buf()]);
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("real.svg");
        fs::write(&file, "<svg/>").unwrap();

        let sources = load_sources(&[dir.path().join("nope.svg"), file]);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "real");
    }

    #[test]
    fn test_name_strips_only_svg_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("icon.min.svg");
        fs::write(&file, "<svg/>").unwrap();

        let sources = load_sources(&[file]);
        assert_eq!(sources[0].name, "icon.min");
    }
}
