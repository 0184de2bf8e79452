//! Node data: elements and text.

use super::NodeId;
use super::style::StyleMap;
use smallvec::SmallVec;

/// Payload of one document node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(Box<Element>),
    Text(String),
}

/// One element: tag, attributes, inline styles, and the computed base the
/// host derived at load time.
#[derive(Debug, Clone)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in source order. `style` keeps its original text here;
    /// the live value is `inline`.
    pub attrs: Vec<(String, String)>,
    /// Parsed `class` attribute.
    pub classes: Vec<String>,
    /// Live inline declarations. Engine writes land here with
    /// `!important`.
    pub inline: StyleMap,
    /// Computed values derived once at load time. Resolution is inline
    /// over base; the engine's own writes never re-derive it.
    pub base: StyleMap,
    pub children: SmallVec<[NodeId; 4]>,
}

impl Element {
    pub fn new(tag: &str, attrs: Vec<(String, String)>) -> Self {
        let tag = tag.to_ascii_lowercase();
        let classes = attrs
            .iter()
            .find(|(k, _)| k == "class")
            .map(|(_, v)| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        let inline = attrs
            .iter()
            .find(|(k, _)| k == "style")
            .map(|(_, v)| StyleMap::parse(v))
            .unwrap_or_default();
        Self {
            tag,
            attrs,
            classes,
            inline,
            base: StyleMap::new(),
            children: SmallVec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// `width` attribute when it is a plain number (optionally `px`).
    pub fn width(&self) -> Option<u32> {
        self.dimension("width")
    }

    /// `height` attribute when it is a plain number (optionally `px`).
    pub fn height(&self) -> Option<u32> {
        self.dimension("height")
    }

    fn dimension(&self, name: &str) -> Option<u32> {
        let raw = self.attr(name)?.trim();
        raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_new_lowercases_tag() {
        let el = Element::new("DIV", vec![]);
        assert_eq!(el.tag, "div");
    }

    #[test]
    fn test_new_parses_classes_and_style() {
        let el = Element::new(
            "span",
            attrs(&[("class", "a  b"), ("style", "color: rgb(1, 2, 3)")]),
        );
        assert_eq!(el.classes, vec!["a", "b"]);
        assert_eq!(el.inline.get("color"), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_dimension_parsing() {
        let el = Element::new(
            "img",
            attrs(&[("width", "400"), ("height", " 24px ")]),
        );
        assert_eq!(el.width(), Some(400));
        assert_eq!(el.height(), Some(24));
        assert_eq!(Element::new("img", attrs(&[("width", "100%")])).width(), None);
    }

    #[test]
    fn test_attr_mutation() {
        let mut el = Element::new("html", vec![]);
        el.set_attr("data-umbra", "");
        assert_eq!(el.attr("data-umbra"), Some(""));
        el.remove_attr("data-umbra");
        assert_eq!(el.attr("data-umbra"), None);
    }
}
