//! Closed element-category set.
//!
//! Tag and class dispatch happens exactly once per element; the pipeline
//! switches on the resulting category instead of re-testing strings at
//! every rule.

use super::INVERT_MAX_DIMENSION;
use crate::dom::Element;

/// What kind of treatment an element gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCategory {
    /// Media and embed elements, left entirely untouched.
    Skip,
    /// Small icon-like image: inverted via CSS filter, no color remap.
    Invertible,
    /// Form controls: offset dark band, fallback background and border.
    Input,
    /// Headings, labels, links: pushed to full brightness.
    BrightText,
    /// SVG shape whose fill/stroke must stay visible on a dark page.
    VectorShape,
    /// Everything else.
    General,
}

/// Compute an element's category.
///
/// Invertible wins over Skip: an icon-classed `<img>` gets the inversion
/// filter instead of being excluded with the rest of the media tags.
pub fn categorize(el: &Element) -> ElementCategory {
    if is_invertible(el) {
        return ElementCategory::Invertible;
    }

    match el.tag.as_str() {
        "img" | "video" | "iframe" | "canvas" | "picture" | "svg" | "embed" | "object"
        | "source" | "track" => ElementCategory::Skip,
        "input" | "textarea" | "select" | "button" => ElementCategory::Input,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "label" | "legend" | "th" | "strong" | "b"
        | "a" => ElementCategory::BrightText,
        tag if is_vector_shape_tag(tag) => ElementCategory::VectorShape,
        _ => ElementCategory::General,
    }
}

/// SVG shape elements that paint via fill/stroke.
pub fn is_vector_shape_tag(tag: &str) -> bool {
    matches!(
        tag,
        "path" | "rect" | "circle" | "polygon" | "line" | "polyline"
    )
}

/// Best-effort icon/logo detection: small raster or inline SVG whose class
/// list or source path names it one. A missing dimension counts as small.
/// Substring misses are tolerated, not defects.
fn is_invertible(el: &Element) -> bool {
    if el.tag != "img" && el.tag != "svg" {
        return false;
    }

    let small = |dim: Option<u32>| dim.is_none_or(|v| v < INVERT_MAX_DIMENSION);
    if !small(el.width()) || !small(el.height()) {
        return false;
    }

    el.classes.iter().any(|c| names_icon(c)) || el.attr("src").is_some_and(names_icon)
}

#[inline]
fn names_icon(s: &str) -> bool {
    let s = s.to_ascii_lowercase();
    s.contains("icon") || s.contains("logo")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> Element {
        Element::new(
            tag,
            attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_categorize_table() {
        assert_eq!(categorize(&element("video", &[])), ElementCategory::Skip);
        assert_eq!(categorize(&element("iframe", &[])), ElementCategory::Skip);
        assert_eq!(categorize(&element("input", &[])), ElementCategory::Input);
        assert_eq!(categorize(&element("button", &[])), ElementCategory::Input);
        assert_eq!(categorize(&element("h2", &[])), ElementCategory::BrightText);
        assert_eq!(categorize(&element("a", &[])), ElementCategory::BrightText);
        assert_eq!(categorize(&element("path", &[])), ElementCategory::VectorShape);
        assert_eq!(categorize(&element("div", &[])), ElementCategory::General);
        assert_eq!(categorize(&element("span", &[])), ElementCategory::General);
    }

    #[test]
    fn test_plain_img_skips() {
        let el = element("img", &[("src", "/photos/beach.jpg")]);
        assert_eq!(categorize(&el), ElementCategory::Skip);
    }

    #[test]
    fn test_icon_class_inverts() {
        let el = element("img", &[("class", "nav-Icon small")]);
        assert_eq!(categorize(&el), ElementCategory::Invertible);
    }

    #[test]
    fn test_logo_path_inverts() {
        let el = element("img", &[("src", "/static/Logo-dark.png")]);
        assert_eq!(categorize(&el), ElementCategory::Invertible);
    }

    #[test]
    fn test_large_logo_does_not_invert() {
        let el = element(
            "img",
            &[("src", "/logo.png"), ("width", "800"), ("height", "200")],
        );
        assert_eq!(categorize(&el), ElementCategory::Skip);
    }

    #[test]
    fn test_small_svg_with_icon_class_inverts() {
        let el = element(
            "svg",
            &[("class", "icon"), ("width", "24"), ("height", "24")],
        );
        assert_eq!(categorize(&el), ElementCategory::Invertible);
        // Without the class the svg container is skipped.
        let plain = element("svg", &[("width", "24"), ("height", "24")]);
        assert_eq!(categorize(&plain), ElementCategory::Skip);
    }
}
