//! Compact renumbering of stream node identifiers.
//!
//! Samplers see arbitrary node ids but build their subgraphs over dense
//! indices. The first id encountered becomes `0`, the next new one `1`, and so
//! on. The mapping only grows.

use rustc_hash::FxHashMap;

use super::NodeId;

/// A bidirectional map between original node ids and compact indices.
#[derive(Debug, Clone, Default)]
pub struct NodeRemap {
    forward: FxHashMap<NodeId, NodeId>,
    reverse: Vec<NodeId>,
}

impl NodeRemap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compact index of `original`, assigning the next free index
    /// on first sight.
    ///
    /// Distinct `NodeId` keys bound the index space, so indices fit `NodeId`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_or_insert(&mut self, original: NodeId) -> NodeId {
        let next = self.reverse.len() as NodeId;
        let reverse = &mut self.reverse;
        *self.forward.entry(original).or_insert_with(|| {
            reverse.push(original);
            next
        })
    }

    /// Returns the compact index of `original` if it has been seen.
    #[inline]
    pub fn get(&self, original: NodeId) -> Option<NodeId> {
        self.forward.get(&original).copied()
    }

    /// Returns `true` if `original` has been seen.
    #[inline]
    pub fn contains(&self, original: NodeId) -> bool {
        self.forward.contains_key(&original)
    }

    /// Returns the original id behind a compact index.
    pub fn original(&self, compact: NodeId) -> Option<NodeId> {
        self.reverse.get(compact as usize).copied()
    }

    /// Number of distinct ids seen.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    /// Returns `true` if no id has been seen.
    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    /// Forgets every mapping.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }
}
