//! The document model the engine operates on.
//!
//! An arena of nodes indexed by [`NodeId`]. The host side (`html::load`)
//! builds the arena and derives each element's computed base; the engine
//! reads computed values (inline declarations over that base) and writes
//! inline declarations with maximum precedence.
//!
//! The document also plays the observation host: while connected, childList
//! changes are queued as [`MutationRecord`]s and drained in arrival order.

mod mutation;
mod node;
mod style;

pub use mutation::MutationRecord;
pub use node::{Element, NodeData};
pub use style::{Declaration, StyleMap, props};

use std::collections::VecDeque;

/// Arena index of one node. Identity-stable for the document's lifetime;
/// removal detaches a node but never invalidates its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub attached: bool,
    pub data: NodeData,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    observing: bool,
    pending: VecDeque<MutationRecord>,
    profile: Option<(String, String)>,
}

impl Document {
    /// An empty document: a bare, attached `<html>` root.
    pub fn new() -> Self {
        let root_el = Element::new("html", Vec::new());
        let root = NodeId(0);
        Self {
            nodes: vec![Node {
                parent: None,
                attached: true,
                data: NodeData::Element(Box::new(root_el)),
            }],
            root,
            observing: false,
            pending: VecDeque::new(),
            profile: None,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> Option<NodeId> {
        self.find_first("body")
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Allocate a detached element.
    pub fn create_element(&mut self, tag: &str, attrs: Vec<(String, String)>) -> NodeId {
        self.push(NodeData::Element(Box::new(Element::new(tag, attrs))))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { parent: None, attached: false, data });
        id
    }

    /// Append `child` under `parent`. If the parent is attached the whole
    /// subtree attaches with it, and the insertion is recorded while
    /// observation is connected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
        if self.nodes[parent.index()].attached {
            self.set_attached(child, true);
            if self.observing {
                self.pending.push_back(MutationRecord::added(child));
            }
        }
    }

    /// Detach `child` from its parent. The subtree stays allocated (ids
    /// remain valid) but no longer renders; the removal is recorded while
    /// observation is connected.
    pub fn remove_child(&mut self, child: NodeId) {
        let was_attached = self.nodes[child.index()].attached;
        if let Some(parent) = self.nodes[child.index()].parent {
            if let Some(el) = self.element_mut(parent) {
                el.children.retain(|c| *c != child);
            }
        }
        self.nodes[child.index()].parent = None;
        self.set_attached(child, false);
        if was_attached && self.observing {
            self.pending.push_back(MutationRecord::removed(child));
        }
    }

    fn set_attached(&mut self, id: NodeId, value: bool) {
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            self.nodes[node.index()].attached = value;
            if let Some(el) = self.element(node) {
                stack.extend(el.children.iter().copied());
            }
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.index()].data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.index()].data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.nodes[id.index()].attached
    }

    /// Resolved value of a property: inline declaration over load-time
    /// base. `None` means the host never derived the property - callers
    /// treat that as "no decision".
    pub fn computed(&self, id: NodeId, property: &str) -> Option<&str> {
        let el = self.element(id)?;
        el.inline.get(property).or_else(|| el.base.get(property))
    }

    /// Write an inline declaration with maximum precedence, so it survives
    /// the page's own cascade.
    pub fn set_important(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.inline.set(property, value, true);
        }
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.element_mut(id) {
            el.remove_attr(name);
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Every attached element, pre-order from the root.
    pub fn walk(&self) -> Vec<NodeId> {
        self.collect_elements(self.root)
    }

    /// `id` and every element below it, pre-order, attached or not.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.collect_elements(id)
    }

    fn collect_elements(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if let Some(el) = self.element(id) {
                out.push(id);
                // Reversed so pre-order pops left-to-right.
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    /// First element with the given tag, pre-order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|id| self.element(*id).is_some_and(|el| el.tag == tag))
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn observe(&mut self) {
        self.observing = true;
    }

    pub fn unobserve(&mut self) {
        self.observing = false;
        self.pending.clear();
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Drain queued mutation records in arrival order.
    pub fn take_batch(&mut self) -> Vec<MutationRecord> {
        self.pending.drain(..).collect()
    }

    // =========================================================================
    // Site-profile stylesheet
    // =========================================================================

    /// Install the opaque override stylesheet for `hostname`.
    pub fn set_profile(&mut self, hostname: &str, css: &str) {
        self.profile = Some((hostname.to_string(), css.to_string()));
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
    }

    pub fn profile(&self) -> Option<(&str, &str)> {
        self.profile.as_ref().map(|(h, c)| (h.as_str(), c.as_str()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
