//! One-shot site-theme detection.

use crate::classify;
use crate::color::parse_color;
use crate::dom::{Document, NodeId, props};

/// Session-wide theme classification.
///
/// Sampled once per enable and frozen for the session: recomputing while
/// enabled would flap, because the engine's own writes change computed
/// backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteTheme {
    #[default]
    Light,
    Dark,
}

impl SiteTheme {
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, SiteTheme::Dark)
    }
}

/// Dark when either the body or the root background is already dark.
pub fn detect_site_theme(doc: &Document) -> SiteTheme {
    let body_dark = doc.body().is_some_and(|id| is_dark_surface(doc, id));
    if body_dark || is_dark_surface(doc, doc.root()) {
        SiteTheme::Dark
    } else {
        SiteTheme::Light
    }
}

fn is_dark_surface(doc: &Document, id: NodeId) -> bool {
    doc.computed(id, props::BACKGROUND_COLOR)
        .and_then(parse_color)
        .is_some_and(classify::is_dark_site_background)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::load;

    #[test]
    fn test_light_page_detected_light() {
        let doc = load("<html><body><p>t</p></body></html>").unwrap();
        assert_eq!(detect_site_theme(&doc), SiteTheme::Light);
    }

    #[test]
    fn test_dark_body_detected_dark() {
        // Brightness 20, well under the 50 line.
        let doc = load(
            r#"<html><body style="background-color: rgb(20, 20, 20)"></body></html>"#,
        )
        .unwrap();
        assert_eq!(detect_site_theme(&doc), SiteTheme::Dark);
    }

    #[test]
    fn test_dark_root_alone_is_enough() {
        let doc = load(
            r#"<html style="background-color: rgb(10, 10, 10)"><body style="background-color: rgb(200, 200, 200)"></body></html>"#,
        )
        .unwrap();
        assert_eq!(detect_site_theme(&doc), SiteTheme::Dark);
    }

    #[test]
    fn test_boundary_is_strict() {
        let doc = load(
            r#"<html><body style="background-color: rgb(50, 50, 50)"></body></html>"#,
        )
        .unwrap();
        assert_eq!(detect_site_theme(&doc), SiteTheme::Light);
    }
}
