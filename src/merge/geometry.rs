//! Coordinate-frame resolution and fixed-size geometry.
//!
//! Each symbol's viewBox is taken verbatim from the source root when
//! present; with `inherit_viewbox` enabled it can be synthesized from plain
//! or pixel-suffixed width/height attributes. When a fixed-size
//! configuration is supplied and a viewBox resolved, a derived symbol wraps
//! the original in a scale/translate transform that centers it in a fixed
//! frame.

use crate::config::{FixedSizeConfig, MaxDigits};
use crate::dom::{Document, NodeId};
use regex::Regex;
use std::sync::LazyLock;

/// Plain or pixel-suffixed magnitude, e.g. `24`, `24.5`, `24px`.
/// Explicit ASCII classes keep the trimmed regex feature set sufficient.
static PX_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?(px)?$").unwrap());

/// Resolve the viewBox for a source root element.
pub fn resolve_view_box(doc: &Document, root: NodeId, inherit: bool) -> Option<String> {
    if let Some(view_box) = doc.attr(root, "viewBox") {
        return Some(view_box.to_owned());
    }
    if !inherit {
        return None;
    }

    let width = doc.attr(root, "width")?;
    let height = doc.attr(root, "height")?;
    if PX_SIZE.is_match(width) && PX_SIZE.is_match(height) {
        Some(format!(
            "0 0 {} {}",
            parse_magnitude(width)?,
            parse_magnitude(height)?
        ))
    } else {
        None
    }
}

/// Numeric magnitude with any `px` suffix stripped.
fn parse_magnitude(value: &str) -> Option<f64> {
    value.trim_end_matches("px").parse().ok()
}

/// Parse `minX minY width height`.
pub fn parse_view_box(value: &str) -> Option<[f64; 4]> {
    let mut parts = value.split_whitespace();
    let rect = [
        parts.next()?.parse().ok()?,
        parts.next()?.parse().ok()?,
        parts.next()?.parse().ok()?,
        parts.next()?.parse().ok()?,
    ];
    parts.next().is_none().then_some(rect)
}

/// Build the `scale(S) translate(TX, TY)` transform placing a graphic with
/// the given viewBox centered inside the fixed frame.
pub fn fixed_size_transform(view_box: [f64; 4], fixed: &FixedSizeConfig) -> String {
    let [min_x, min_y, width, height] = view_box;

    let scale = width.max(height) / fixed.width.max(fixed.height);
    let translate_x = (fixed.width - width) / 2.0 + min_x;
    let translate_y = (fixed.height - height) / 2.0 + min_y;

    let digits = &fixed.max_digits;
    format!(
        "scale({}) translate({}, {})",
        round_to(scale, digits.scale),
        round_to(translate_x, digits.translation),
        round_to(translate_y, digits.translation),
    )
}

/// The fixed symbol's own viewBox, `0 0 <width> <height>`.
pub fn fixed_view_box(fixed: &FixedSizeConfig) -> String {
    format!("0 0 {} {}", fixed.width, fixed.height)
}

/// Round to a number of decimal places. `f64` display then drops any
/// trailing zeros, matching the precision-trimmed output format.
fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
