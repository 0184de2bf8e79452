//! Snapshot serialization.
//!
//! Emits the document with its current inline styles, including the
//! `!important` markers on engine writes. Attribute and text content is
//! carried verbatim from the source (it arrived already entity-encoded),
//! so only quotes introduced by generated values need escaping.

use crate::dom::{Document, NodeData, NodeId};
use std::borrow::Cow;

/// Serialize a document back to HTML text.
pub fn serialize(doc: &Document, pretty: bool) -> String {
    let mut out = String::new();
    let style_host = doc.find_first("head").unwrap_or(doc.root());
    write_element(doc, doc.root(), pretty, 0, style_host, &mut out);
    if pretty && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn write_node(
    doc: &Document,
    id: NodeId,
    pretty: bool,
    depth: usize,
    style_host: NodeId,
    out: &mut String,
) {
    match &doc.node(id).data {
        NodeData::Text(text) => out.push_str(text),
        NodeData::Element(_) => write_element(doc, id, pretty, depth, style_host, out),
    }
}

fn write_element(
    doc: &Document,
    id: NodeId,
    pretty: bool,
    depth: usize,
    style_host: NodeId,
    out: &mut String,
) {
    let Some(el) = doc.element(id) else {
        return;
    };

    if pretty {
        indent(out, depth);
    }

    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        if name == "style" {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_quotes(value));
            out.push('"');
        }
    }
    if !el.inline.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&escape_quotes(&el.inline.css_text()));
        out.push('"');
    }
    out.push('>');

    if is_void_element(&el.tag) {
        if pretty {
            out.push('\n');
        }
        return;
    }

    if is_raw_text_element(&el.tag) {
        for child in &el.children {
            if let NodeData::Text(text) = &doc.node(*child).data {
                out.push_str(text);
            }
        }
    } else {
        if pretty && !el.children.is_empty() {
            out.push('\n');
        }
        for child in &el.children {
            write_node(doc, *child, pretty, depth + 1, style_host, out);
            if pretty && matches!(doc.node(*child).data, NodeData::Text(_)) {
                out.push('\n');
            }
        }
        if id == style_host {
            write_profile(doc, pretty, depth + 1, out);
        }
        if pretty && !el.children.is_empty() {
            indent(out, depth);
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
    if pretty {
        out.push('\n');
    }
}

/// The injected site-profile stylesheet, when one is active.
fn write_profile(doc: &Document, pretty: bool, depth: usize, out: &mut String) {
    let Some((hostname, css)) = doc.profile() else {
        return;
    };
    if pretty {
        indent(out, depth);
    }
    out.push_str("<style data-umbra-profile=\"");
    out.push_str(&escape_quotes(hostname));
    out.push_str("\">");
    out.push_str(css);
    out.push_str("</style>");
    if pretty {
        out.push('\n');
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Values are carried verbatim from already-encoded source; only quotes
/// (possible in generated values) would break the attribute syntax.
fn escape_quotes(s: &str) -> Cow<'_, str> {
    if !s.contains('"') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace('"', "&quot;"))
}

/// Void elements cannot have children and take no end tag.
#[inline]
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Per HTML spec: script and style content is "raw text".
#[inline]
fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::load;

    #[test]
    fn test_round_trip_structure() {
        let source = r#"<html><body><div class="a" style="color: rgb(1, 2, 3)">hi</div></body></html>"#;
        let doc = load(source).unwrap();
        assert_eq!(serialize(&doc, false), source);
    }

    #[test]
    fn test_round_trip_is_stable() {
        let source = "<html><head><title>t</title></head><body><p>a</p><img src=\"x.png\"></body></html>";
        let doc = load(source).unwrap();
        let once = serialize(&doc, false);
        let twice = serialize(&load(&once).unwrap(), false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_important_marker_emitted() {
        let source = r#"<html><body><div style="color: rgb(1, 2, 3)">x</div></body></html>"#;
        let mut doc = load(source).unwrap();
        let div = doc.find_first("div").unwrap();
        doc.set_important(div, "color", "rgb(255, 255, 255)");
        let out = serialize(&doc, false);
        assert!(out.contains(r#"style="color: rgb(255, 255, 255) !important""#));
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let doc = load("<html><body><br></body></html>").unwrap();
        let out = serialize(&doc, false);
        assert!(out.contains("<br>"));
        assert!(!out.contains("</br>"));
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let source = "<html><head><script>if (a && b) { go(); }</script></head><body></body></html>";
        let doc = load(source).unwrap();
        assert!(serialize(&doc, false).contains("if (a && b) { go(); }"));
    }

    #[test]
    fn test_profile_stylesheet_lands_in_head() {
        let mut doc = load("<html><head></head><body></body></html>").unwrap();
        doc.set_profile("example.com", ".ad { display: none }");
        let out = serialize(&doc, false);
        assert!(out.contains(
            r#"<style data-umbra-profile="example.com">.ad { display: none }</style></head>"#
        ));
    }
}
