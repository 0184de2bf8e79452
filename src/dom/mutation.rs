//! Mutation records.
//!
//! While observation is connected, the document queues one record per
//! childList change; the session drains them in arrival order and, within
//! a record, processes insertions in reported order.

use super::NodeId;

/// One observed childList change.
#[derive(Debug, Clone, Default)]
pub struct MutationRecord {
    /// Roots of inserted subtrees, in insertion order.
    pub added: Vec<NodeId>,
    /// Roots of removed subtrees.
    pub removed: Vec<NodeId>,
}

impl MutationRecord {
    pub fn added(id: NodeId) -> Self {
        Self { added: vec![id], removed: Vec::new() }
    }

    pub fn removed(id: NodeId) -> Self {
        Self { added: Vec::new(), removed: vec![id] }
    }
}
