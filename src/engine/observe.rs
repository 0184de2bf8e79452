//! Incremental re-application on document mutations.
//!
//! A single subtree watcher, active only while the session is enabled.
//! Each batch is processed synchronously before control returns: every
//! inserted element and all of its descendants, pre-order, unbounded
//! depth. Removals prune stale snapshots. A torn-down observer does no
//! work even when records are offered to it.

use super::{SiteTheme, SnapshotTable, apply_dark_mode};
use crate::debug;
use crate::dom::{Document, MutationRecord};

#[derive(Debug, Default)]
pub struct Observer {
    connected: bool,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, doc: &mut Document) {
        if self.connected {
            return;
        }
        doc.observe();
        self.connected = true;
    }

    pub fn stop(&mut self, doc: &mut Document) {
        if !self.connected {
            return;
        }
        doc.unobserve();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Process one batch in arrival order. Returns the number of style
    /// writes made.
    pub fn deliver(
        &mut self,
        doc: &mut Document,
        batch: &[MutationRecord],
        snapshots: &mut SnapshotTable,
        theme: SiteTheme,
    ) -> usize {
        if !self.connected {
            return 0;
        }

        let mut writes = 0;
        for record in batch {
            for &added in &record.added {
                for id in doc.descendants(added) {
                    snapshots.save(doc, id);
                    writes += apply_dark_mode(doc, id, theme);
                }
            }
            for &removed in &record.removed {
                for id in doc.descendants(removed) {
                    snapshots.prune(id);
                }
            }
        }
        if writes > 0 {
            debug!("observe"; "processed batch of {}, {} writes", batch.len(), writes);
        }
        writes
    }
}
