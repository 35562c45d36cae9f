//! End-to-end merge scenarios.

use super::*;
use crate::config::StashConfig;

fn config(toml: &str) -> StashConfig {
    StashConfig::from_str(toml).unwrap()
}

fn input(name: &str, text: &str) -> SourceInput {
    SourceInput {
        name: name.to_string(),
        text: text.to_string(),
    }
}

fn merge(inputs: &[SourceInput], toml: &str) -> MergeOutput {
    merge_sources(inputs, &config(toml), &DotTruncate).unwrap()
}

#[test]
fn test_single_icon_sprite() {
    let out = merge(
        &[input("home", r#"<svg viewBox="0 0 16 16"><path d="M0 0"/></svg>"#)],
        "",
    );
    assert_eq!(
        out.sprite,
        "<svg xmlns=\"http://www.w3.org/2000/svg\">\
         <symbol id=\"home\" viewBox=\"0 0 16 16\"><title>home</title><path d=\"M0 0\"/></symbol>\
         </svg>"
    );
}

#[test]
fn test_id_collision_across_sources() {
    // two inputs both define an element id `stroke`
    let out = merge(
        &[
            input(
                "a",
                r#"<svg><g id="stroke"/><rect fill="url(#stroke)"/></svg>"#,
            ),
            input("b", r#"<svg><g id="stroke"/></svg>"#),
        ],
        "",
    );

    assert!(out.sprite.contains(r#"id="a-stroke""#));
    assert!(out.sprite.contains(r#"id="b-stroke""#));
    // the reference in `a` resolves to a's rewrite only
    assert!(out.sprite.contains(r#"fill="url(#a-stroke)""#));
    assert!(!out.sprite.contains(r#"url(#stroke)"#));
}

#[test]
fn test_symbols_keep_input_order() {
    let icons: Vec<SourceInput> = ["zebra", "apple", "mango"]
        .iter()
        .map(|n| input(n, "<svg><path/></svg>"))
        .collect();
    let out = merge(&icons, "");

    let z = out.sprite.find(r#"id="zebra""#).unwrap();
    let a = out.sprite.find(r#"id="apple""#).unwrap();
    let m = out.sprite.find(r#"id="mango""#).unwrap();
    assert!(z < a && a < m);

    let names: Vec<&str> = out.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["zebra", "apple", "mango"]);
}

#[test]
fn test_defs_pooled_and_omitted_when_empty() {
    let out = merge(
        &[
            input("a", r#"<svg><defs><filter id="f"/></defs><rect/></svg>"#),
            input("b", "<svg><rect/></svg>"),
        ],
        "",
    );
    assert!(out.sprite.contains(r#"<defs><filter id="a-f"/></defs>"#));

    let out = merge(&[input("a", "<svg><rect/></svg>")], "");
    assert!(!out.sprite.contains("<defs>"));
}

#[test]
fn test_gradients_lifted_out_of_content() {
    let out = merge(
        &[input(
            "a",
            r#"<svg><rect fill="url(#g)"/><linearGradient id="g"/></svg>"#,
        )],
        "",
    );
    // the gradient sits in the shared defs, not inside the symbol
    let defs_end = out.sprite.find("</defs>").unwrap();
    let grad = out.sprite.find("<linearGradient").unwrap();
    assert!(grad < defs_end);
    assert!(out.sprite.contains(r#"<linearGradient id="a-g"/>"#));
    assert!(out.sprite.contains(r#"fill="url(#a-g)""#));
}

#[test]
fn test_prefix_and_name_truncation() {
    let out = merge(
        &[input("home.min", "<svg><path/></svg>")],
        "[merge]\nprefix = \"icon-\"",
    );
    assert!(out.sprite.contains(r#"<symbol id="icon-home">"#));
    assert_eq!(out.entries[0].name, "icon-home");
}

#[test]
fn test_title_and_desc_captured() {
    let out = merge(
        &[input(
            "a",
            "<svg><title>Fancy <b>A</b></title><desc>letter</desc><path/></svg>",
        )],
        "",
    );
    assert!(out.sprite.contains("<title>Fancy <b>A</b></title>"));
    assert!(out.sprite.contains("<desc>letter</desc>"));
    // captured, not duplicated in content
    assert_eq!(out.sprite.matches("<title>").count(), 1);
    assert_eq!(out.entries[0].title.as_deref(), Some("Fancy <b>A</b>"));
}

#[test]
fn test_title_falls_back_to_name() {
    let out = merge(&[input("arrow", "<svg><path/></svg>")], "");
    assert!(out.sprite.contains("<title>arrow</title>"));
}

#[test]
fn test_empty_groups_pruned() {
    let out = merge(
        &[input("a", "<svg><g></g><g><path/></g></svg>")],
        "",
    );
    assert!(out.sprite.contains("<g><path/></g>"));
    assert!(!out.sprite.contains("<g/>"));
}

#[test]
fn test_inherit_viewbox() {
    let src = r#"<svg width="24px" height="24"><path/></svg>"#;

    let out = merge(&[input("a", src)], "[merge]\ninherit_viewbox = true");
    assert!(out.sprite.contains(r#"viewBox="0 0 24 24""#));

    let out = merge(&[input("a", src)], "");
    assert!(!out.sprite.contains("viewBox"));
}

#[test]
fn test_symbol_attributes_merged() {
    let out = merge(
        &[input("a", "<svg><path/></svg>")],
        "[merge.symbol]\nclass = \"icon\"",
    );
    assert!(out.sprite.contains(r#"<symbol id="a" class="icon">"#));
}

#[test]
fn test_fixed_size_symbol() {
    let out = merge(
        &[input("a", r#"<svg viewBox="0 0 10 20"><path/></svg>"#)],
        "[merge.fixed_size]\nwidth = 50\nheight = 50",
    );

    assert!(out.sprite.contains(
        "<symbol id=\"a-fixed-size\" viewBox=\"0 0 50 50\"><title>a</title>\
         <use xlink:href=\"#a\" transform=\"scale(0.4) translate(20, 15)\"/></symbol>"
    ));

    // preview entries: parent with title, fixed one without
    assert_eq!(out.entries.len(), 2);
    assert_eq!(out.entries[1].name, "a-fixed-size");
    assert_eq!(out.entries[1].title, None);
}

#[test]
fn test_fixed_size_needs_view_box() {
    let out = merge(
        &[input("a", "<svg><path/></svg>")],
        "[merge.fixed_size]\nwidth = 50",
    );
    assert!(!out.sprite.contains("fixed-size"));
    assert_eq!(out.entries.len(), 1);
}

#[test]
fn test_cleanup_round_trip_through_merge() {
    let out = merge(
        &[input(
            "a",
            r#"<svg><rect style="x" fill="currentColor"/><defs><stop style="kept"/></defs></svg>"#,
        )],
        "[merge]\ncleanup = [\"style\"]",
    );
    assert!(!out.sprite.contains(r#"style="x""#));
    assert!(out.sprite.contains(r#"fill="currentColor""#));
    // defs content untouched without cleanup_defs
    assert!(out.sprite.contains(r#"<stop style="kept"/>"#));
}

#[test]
fn test_malformed_document_is_fatal() {
    let result = merge_sources(
        &[
            input("good", "<svg/>"),
            input("bad", "<svg><path></svg>"),
        ],
        &config(""),
        &DotTruncate,
    );
    let err = result.unwrap_err();
    assert!(matches!(err, MergeError::MalformedDocument { ref name, .. } if name == "bad"));
}

#[test]
fn test_preview_sprite_is_hidden_copy() {
    let out = merge(
        &[input("a", "<svg><path/></svg>")],
        "[preview]\nenable = true",
    );
    let hidden = out.preview_sprite.unwrap();
    assert!(hidden.contains(r#"style="width:0;height:0;visibility:hidden;""#));
    assert!(!out.sprite.contains("visibility:hidden"));
}

#[test]
fn test_hidden_sprite_replaces_configured_style() {
    let out = merge(
        &[input("a", "<svg><path/></svg>")],
        "[preview]\nenable = true\n\n[merge.svg]\nxmlns = \"http://www.w3.org/2000/svg\"\nstyle = \"background:red\"",
    );
    // the visible sprite keeps the configured style
    assert!(out.sprite.contains(r#"style="background:red""#));

    // the embedded copy carries exactly one style attribute, the hiding one
    let hidden = out.preview_sprite.unwrap();
    assert!(!hidden.contains("background:red"));
    assert_eq!(hidden.matches("style=").count(), 1);
    assert!(hidden.contains(r#"style="width:0;height:0;visibility:hidden;""#));
}

#[test]
fn test_custom_root_attributes() {
    let out = merge(
        &[input("a", "<svg><path/></svg>")],
        "[merge.svg]\nxmlns = \"http://www.w3.org/2000/svg\"\nclass = \"stash\"",
    );
    assert!(out.sprite.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="stash">"#
    ));
}
