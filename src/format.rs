//! Output formatting: re-indent compact XML for human-readable sprites.

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Re-emit `xml` with one element per line, indented by `indent_size` spaces.
pub fn prettify(xml: &str, indent_size: usize) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', indent_size);
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_indents_nested_elements() {
        let out = prettify("<svg><symbol id=\"a\"><path/></symbol></svg>", 2).unwrap();
        assert_eq!(
            out,
            "<svg>\n  <symbol id=\"a\">\n    <path/>\n  </symbol>\n</svg>"
        );
    }

    #[test]
    fn test_prettify_custom_indent() {
        let out = prettify("<svg><path/></svg>", 4).unwrap();
        assert_eq!(out, "<svg>\n    <path/>\n</svg>");
    }

    #[test]
    fn test_prettify_rejects_malformed_input() {
        assert!(prettify("<svg><path></svg>", 2).is_err());
    }
}
