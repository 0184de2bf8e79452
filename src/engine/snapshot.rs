//! Original-style snapshots.
//!
//! One snapshot per element, created lazily the first time the element is
//! about to be mutated, destroyed exactly on restore. An element carrying
//! engine-applied styles always has exactly one live snapshot; restoring
//! without one is a no-op, never an error.

use crate::dom::{Declaration, Document, NodeId, props};
use rustc_hash::FxHashMap;

/// The pre-engine inline value of every tracked property.
///
/// `None` records "not declared inline": restore removes the property.
#[derive(Debug, Clone)]
pub struct StyleSnapshot {
    entries: Vec<(&'static str, Option<Declaration>)>,
}

impl StyleSnapshot {
    fn capture(doc: &Document, id: NodeId) -> Option<Self> {
        let el = doc.element(id)?;
        Some(Self {
            entries: props::TRACKED
                .iter()
                .map(|&property| (property, el.inline.declaration(property).cloned()))
                .collect(),
        })
    }
}

/// Ownership map from element identity to its snapshot.
#[derive(Debug, Default)]
pub struct SnapshotTable {
    table: FxHashMap<NodeId, StyleSnapshot>,
}

impl SnapshotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the element's current inline values, once. A second call
    /// on an element with a live snapshot does nothing, so repeated
    /// passes keep the true pre-engine baseline.
    pub fn save(&mut self, doc: &Document, id: NodeId) {
        if self.table.contains_key(&id) {
            return;
        }
        if let Some(snapshot) = StyleSnapshot::capture(doc, id) {
            self.table.insert(id, snapshot);
        }
    }

    /// Write back every captured property and discard the snapshot.
    /// No snapshot is a no-op.
    pub fn restore(&mut self, doc: &mut Document, id: NodeId) {
        let Some(snapshot) = self.table.remove(&id) else {
            return;
        };
        let Some(el) = doc.element_mut(id) else {
            return;
        };
        for (property, decl) in snapshot.entries {
            match decl {
                Some(d) => el.inline.set(property, &d.value, d.important),
                None => el.inline.remove(property),
            }
        }
    }

    /// Restore every element still in the document; entries for detached
    /// elements are discarded unrestored (they no longer render).
    pub fn restore_all(&mut self, doc: &mut Document) {
        let ids: Vec<NodeId> = self.table.keys().copied().collect();
        for id in ids {
            if doc.is_attached(id) {
                self.restore(doc, id);
            } else {
                self.table.remove(&id);
            }
        }
    }

    /// Drop a stale entry without touching the element. Used when an
    /// element leaves the document, so long-lived sessions do not
    /// accumulate snapshots for nodes that will never be restored.
    pub fn prune(&mut self, id: NodeId) {
        self.table.remove(&id);
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.table.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&StyleSnapshot> {
        self.table.get(&id)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn doc_with_div(style: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let div = doc.create_element("div", vec![("style".into(), style.into())]);
        doc.append_child(root, div);
        (doc, div)
    }

    #[test]
    fn test_save_and_restore_round_trip() {
        let (mut doc, div) = doc_with_div("color: rgb(10, 20, 30); font-size: 12px");
        let original = doc.element(div).unwrap().inline.css_text();

        let mut table = SnapshotTable::new();
        table.save(&doc, div);
        doc.set_important(div, props::COLOR, "rgb(255, 255, 255)");
        doc.set_important(div, props::FILTER, "invert(1)");

        table.restore(&mut doc, div);
        assert_eq!(doc.element(div).unwrap().inline.css_text(), original);
        assert!(table.is_empty());
    }

    #[test]
    fn test_save_is_idempotent() {
        let (mut doc, div) = doc_with_div("color: rgb(10, 20, 30)");
        let mut table = SnapshotTable::new();

        table.save(&doc, div);
        doc.set_important(div, props::COLOR, "rgb(255, 255, 255)");
        // A second pass over the same element must not capture the
        // engine's own write as "original".
        table.save(&doc, div);

        table.restore(&mut doc, div);
        assert_eq!(
            doc.element(div).unwrap().inline.get(props::COLOR),
            Some("rgb(10, 20, 30)")
        );
    }

    #[test]
    fn test_restore_without_snapshot_is_noop() {
        let (mut doc, div) = doc_with_div("color: rgb(10, 20, 30)");
        let before = doc.element(div).unwrap().inline.css_text();
        SnapshotTable::new().restore(&mut doc, div);
        assert_eq!(doc.element(div).unwrap().inline.css_text(), before);
    }

    #[test]
    fn test_untracked_properties_survive() {
        let (mut doc, div) = doc_with_div("font-size: 12px");
        let mut table = SnapshotTable::new();
        table.save(&doc, div);
        doc.set_important(div, props::BACKGROUND_COLOR, "rgb(18, 18, 18)");
        table.restore(&mut doc, div);
        assert_eq!(doc.element(div).unwrap().inline.css_text(), "font-size: 12px");
    }

    #[test]
    fn test_restore_all_skips_detached() {
        let (mut doc, div) = doc_with_div("color: rgb(10, 20, 30)");
        let mut table = SnapshotTable::new();
        table.save(&doc, div);
        doc.set_important(div, props::COLOR, "rgb(255, 255, 255)");
        doc.remove_child(div);

        table.restore_all(&mut doc);
        assert!(table.is_empty());
        // Detached subtree was not restored.
        assert_eq!(
            doc.element(div).unwrap().inline.get(props::COLOR),
            Some("rgb(255, 255, 255)")
        );
    }

    #[test]
    fn test_prune_discards_entry() {
        let (doc, div) = doc_with_div("color: rgb(10, 20, 30)");
        let mut table = SnapshotTable::new();
        table.save(&doc, div);
        table.prune(div);
        assert!(!table.contains(div));
    }
}
