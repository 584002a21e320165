//! Per-search frontier structures with loop detection.
//!
//! Both frontiers own their [`VisitedSet`]. A frontier is created inside one
//! search call and dropped when it returns; nothing here is shared between
//! searches.

use std::collections::VecDeque;

use ladder_kernel::lexicon::WordId;

/// Words already enqueued or pushed during one search. Never shrinks.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    seen: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// An empty set able to hold ids from a lexicon of `lexicon_len` words.
    #[must_use]
    pub fn new(lexicon_len: usize) -> Self {
        Self {
            seen: vec![false; lexicon_len],
            count: 0,
        }
    }

    /// Mark `word`. Returns `false` if it was already marked.
    pub fn insert(&mut self, word: WordId) -> bool {
        let slot = &mut self.seen[word.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }

    #[must_use]
    pub fn contains(&self, word: WordId) -> bool {
        self.seen[word.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// First-in-first-out frontier for breadth-first search.
#[derive(Debug)]
pub struct FifoFrontier {
    queue: VecDeque<u64>,
    visited: VisitedSet,
    high_water: u64,
}

impl FifoFrontier {
    #[must_use]
    pub fn new(lexicon_len: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: VisitedSet::new(lexicon_len),
            high_water: 0,
        }
    }

    /// Enqueue `node_id` standing on `word` and mark the word visited.
    ///
    /// Returns `false` (and enqueues nothing) if `word` was already visited.
    pub fn push(&mut self, node_id: u64, word: WordId) -> bool {
        if !self.visited.insert(word) {
            return false;
        }
        self.queue.push_back(node_id);
        self.high_water = self.high_water.max(self.queue.len() as u64);
        true
    }

    /// Dequeue the earliest-enqueued node.
    pub fn pop(&mut self) -> Option<u64> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn is_visited(&self, word: WordId) -> bool {
        self.visited.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of queue length.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// One level of the depth-first stack.
#[derive(Debug, Clone)]
pub struct StackFrame {
    pub node_id: u64,
    pub word: WordId,
    pub depth: u32,
    /// Neighbors in lexicographic order, filled on first inspection.
    neighbors: Option<Vec<WordId>>,
    /// Every neighbor before `cursor` is visited.
    cursor: usize,
}

impl StackFrame {
    /// Whether this frame's neighbors have been generated yet.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.neighbors.is_some()
    }
}

/// Result of advancing the top frame's neighbor cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorStep {
    /// First unvisited neighbor, if any remain.
    pub next: Option<WordId>,
    /// Already-visited neighbors stepped over to find it.
    pub skipped: u64,
}

/// Explicit stack for depth-first search with sibling retry.
///
/// Each frame keeps a cursor into its own neighbor list, so after a child
/// is popped the parent resumes at the next sibling instead of starting over.
/// Because the visited set only grows, "next unvisited after the cursor" is
/// the same word as "first unvisited in lexicographic order".
#[derive(Debug)]
pub struct DepthFirstStack {
    frames: Vec<StackFrame>,
    visited: VisitedSet,
    high_water: u64,
}

impl DepthFirstStack {
    #[must_use]
    pub fn new(lexicon_len: usize) -> Self {
        Self {
            frames: Vec::new(),
            visited: VisitedSet::new(lexicon_len),
            high_water: 0,
        }
    }

    /// Push `word` and mark it visited.
    ///
    /// Returns `false` (and pushes nothing) if `word` was already visited.
    pub fn push(&mut self, node_id: u64, word: WordId, depth: u32) -> bool {
        if !self.visited.insert(word) {
            return false;
        }
        self.frames.push(StackFrame {
            node_id,
            word,
            depth,
            neighbors: None,
            cursor: 0,
        });
        self.high_water = self.high_water.max(self.frames.len() as u64);
        true
    }

    /// Backtrack. The popped word stays visited.
    pub fn pop(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<&StackFrame> {
        self.frames.last()
    }

    /// Install the top frame's neighbor list. No-op on an empty stack.
    pub fn expand_top(&mut self, neighbors: Vec<WordId>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.neighbors = Some(neighbors);
            frame.cursor = 0;
        }
    }

    /// Move the top frame's cursor past visited neighbors and return the
    /// first unvisited one (consuming it).
    pub fn advance_top(&mut self) -> CursorStep {
        let mut step = CursorStep {
            next: None,
            skipped: 0,
        };
        let Some(frame) = self.frames.last_mut() else {
            return step;
        };
        let Some(neighbors) = frame.neighbors.as_deref() else {
            return step;
        };
        while let Some(&candidate) = neighbors.get(frame.cursor) {
            frame.cursor += 1;
            if self.visited.contains(candidate) {
                step.skipped += 1;
            } else {
                step.next = Some(candidate);
                break;
            }
        }
        step
    }

    /// Words on the stack, bottom to top.
    #[must_use]
    pub fn words(&self) -> Vec<WordId> {
        self.frames.iter().map(|f| f.word).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn is_visited(&self, word: WordId) -> bool {
        self.visited.contains(word)
    }

    /// High-water mark of stack depth.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
