//! Search nodes and the flat arena that owns them.
//!
//! A node's back-pointer is an index into the arena, not a reference, so the
//! predecessor chain has no lifetimes to manage. The arena lives exactly as
//! long as one search call.

use ladder_kernel::lexicon::WordId;

/// An immutable node in the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNodeV1 {
    /// Position in the arena (also creation order).
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The word this node stands on.
    pub word: WordId,
    /// Steps from the root (root = 0).
    pub depth: u32,
}

/// Append-only node storage for one search invocation.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNodeV1>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root node. Call once, before any [`NodeArena::push_child`].
    pub fn push_root(&mut self, word: WordId) -> u64 {
        self.push(word, None, 0)
    }

    /// Create a child of `parent_id`, one step deeper.
    ///
    /// # Panics
    ///
    /// Panics if `parent_id` is not in the arena.
    pub fn push_child(&mut self, parent_id: u64, word: WordId) -> u64 {
        let depth = self.get(parent_id).depth + 1;
        self.push(word, Some(parent_id), depth)
    }

    fn push(&mut self, word: WordId, parent_id: Option<u64>, depth: u32) -> u64 {
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNodeV1 {
            node_id,
            parent_id,
            word,
            depth,
        });
        node_id
    }

    /// The node with `node_id`.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` was not produced by this arena.
    #[must_use]
    pub fn get(&self, node_id: u64) -> &SearchNodeV1 {
        #[allow(clippy::cast_possible_truncation)]
        &self.nodes[node_id as usize]
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Words from the root to `node_id`, root first.
    #[must_use]
    pub fn reconstruct_path(&self, node_id: u64) -> Vec<WordId> {
        let mut path = Vec::with_capacity(self.get(node_id).depth as usize + 1);
        let mut current = Some(node_id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.word);
            current = node.parent_id;
        }
        path.reverse();
        path
    }
}
