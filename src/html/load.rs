//! Snapshot parsing: `tl` markup → document arena + computed base.

use super::HtmlError;
use crate::classify::is_vector_shape_tag;
use crate::dom::{Document, NodeId, props};

/// Default text color of an unstyled page.
const DEFAULT_TEXT: &str = "rgb(0, 0, 0)";

/// Root surfaces of an unstyled page paint white; everything else is
/// transparent until styled.
const DEFAULT_SURFACE: &str = "rgb(255, 255, 255)";
const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Parse a snapshot into a document.
///
/// Markup carrying its own `<html>` adopts that element as the root;
/// fragments land directly under a synthesized root. After the tree is
/// built, each element's computed base is derived once: `color` inherits
/// down the tree, root surfaces default to white, vector shapes to the
/// black SVG default. The engine's later writes never re-derive it.
pub fn load(html: &str) -> Result<Document, HtmlError> {
    let dom = tl::parse(html, tl::ParserOptions::default()).map_err(|_| HtmlError::Parse)?;
    let parser = dom.parser();

    let mut doc = Document::new();
    let root = doc.root();

    for handle in dom.children() {
        let Some(node) = handle.get(parser) else {
            continue;
        };
        match node {
            tl::Node::Tag(tag) if tag.name().as_utf8_str().eq_ignore_ascii_case("html") => {
                for (name, value) in collect_attrs(tag) {
                    doc.set_attr(root, &name, &value);
                }
                // The root element was built attribute-less; re-parse its
                // style attribute now that it has one.
                if let Some(el) = doc.element_mut(root) {
                    if let Some(style) = el.attr("style").map(str::to_string) {
                        el.inline = crate::dom::StyleMap::parse(&style);
                    }
                }
                for child in tag.children().top().iter() {
                    convert(*child, parser, &mut doc, root);
                }
            }
            _ => convert(*handle, parser, &mut doc, root),
        }
    }

    derive_base(&mut doc);
    Ok(doc)
}

/// Convert one tl node (and its subtree) into the arena under `parent`.
fn convert(handle: tl::NodeHandle, parser: &tl::Parser, doc: &mut Document, parent: NodeId) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();
            let id = doc.create_element(&name, collect_attrs(tag));
            doc.append_child(parent, id);
            for child in tag.children().top().iter() {
                convert(*child, parser, doc, id);
            }
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            // Skip whitespace-only text
            if !text.trim().is_empty() {
                let id = doc.create_text(&text);
                doc.append_child(parent, id);
            }
        }
        tl::Node::Comment(_) => {}
    }
}

fn collect_attrs(tag: &tl::HTMLTag) -> Vec<(String, String)> {
    tag.attributes()
        .iter()
        .map(|(key, value)| {
            let key: &str = key.as_ref();
            (key.to_string(), value.map(|v| v.to_string()).unwrap_or_default())
        })
        .collect()
}

/// Derive every element's computed base, pre-order, once.
fn derive_base(doc: &mut Document) {
    let root = doc.root();
    let mut stack = vec![(root, DEFAULT_TEXT.to_string())];

    while let Some((id, inherited)) = stack.pop() {
        let Some(el) = doc.element_mut(id) else {
            continue;
        };

        let effective = el
            .inline
            .get(props::COLOR)
            .map(str::to_string)
            .unwrap_or_else(|| inherited.clone());

        el.base.set(props::COLOR, &inherited, false);

        let surface = matches!(el.tag.as_str(), "html" | "body");
        el.base.set(
            props::BACKGROUND_COLOR,
            if surface { DEFAULT_SURFACE } else { TRANSPARENT },
            false,
        );
        el.base.set(props::BACKGROUND_IMAGE, "none", false);

        if is_vector_shape_tag(&el.tag) {
            el.base.set(props::FILL, DEFAULT_TEXT, false);
            el.base.set(props::STROKE, "none", false);
        }

        let children: Vec<NodeId> = el.children.iter().copied().collect();
        for child in children {
            stack.push((child, effective.clone()));
        }
    }
}
