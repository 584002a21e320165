//! Neighbor source contract trait.

use ladder_kernel::lexicon::{WordId, WordSet};
use ladder_kernel::proof::hash::ContentHash;

/// The implicit graph both searches walk.
///
/// Vertices are the words of [`NeighborSource::word_set`]; edges join words
/// at Hamming distance exactly 1.
///
/// # Contract
///
/// - `neighbor_ids` returns every lexicon word of the same length that
///   differs from `word` in exactly one position, and nothing else. `word`
///   itself is never included, and `word` need not be a member.
/// - Ids are returned in ascending order (which is lexicographic order).
/// - Same `word` → same ids, every call. Implementations hold no per-query state.
pub trait NeighborSource: Send + Sync {
    /// The lexicon this source indexes.
    fn word_set(&self) -> &WordSet;

    /// Digest of [`NeighborSource::word_set`], computed once at construction.
    fn lexicon_digest(&self) -> &ContentHash;

    /// Ids of all lexicon words adjacent to `word`, ascending.
    fn neighbor_ids(&self, word: &str) -> Vec<WordId>;

    /// Words adjacent to `word`, in lexicographic order.
    fn neighbors(&self, word: &str) -> Vec<&str> {
        let set = self.word_set();
        self.neighbor_ids(word)
            .into_iter()
            .map(|id| set.word(id))
            .collect()
    }
}
