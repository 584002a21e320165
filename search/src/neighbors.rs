//! Neighbor generation over a shared lexicon.
//!
//! Two implementations of [`NeighborSource`] with identical output:
//!
//! - [`NeighborIndex`] buckets every word under each of its wildcard
//!   patterns (one position removed), so a lookup costs one bucket read
//!   per position instead of a pass over the whole lexicon.
//! - [`LexiconScan`] compares the query against every word. It is the
//!   reference the index is tested against.

use std::collections::HashMap;
use std::sync::Arc;

use ladder_kernel::lexicon::{is_adjacent, LexiconError, WordId, WordSet};
use ladder_kernel::proof::hash::ContentHash;

use crate::contract::NeighborSource;

/// `(position, word with that position removed)`.
///
/// Two words of equal length share a key iff they agree everywhere except
/// (possibly) at `position`. The remainder's length pins the word length,
/// so words of different lengths never collide.
type PatternKey = (usize, String);

fn pattern_keys(word: &str) -> impl Iterator<Item = PatternKey> + '_ {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len()).map(move |pos| {
        let rest: String = chars[..pos].iter().chain(&chars[pos + 1..]).collect();
        (pos, rest)
    })
}

/// Wildcard-bucket neighbor index.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    words: Arc<WordSet>,
    digest: ContentHash,
    /// Each bucket lists word ids in ascending order.
    buckets: HashMap<PatternKey, Vec<WordId>>,
}

impl NeighborIndex {
    /// Index every word of `words` under all of its patterns.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Canon`] if the lexicon digest cannot be computed.
    pub fn new(words: Arc<WordSet>) -> Result<Self, LexiconError> {
        let digest = words.digest()?;
        let mut buckets: HashMap<PatternKey, Vec<WordId>> = HashMap::new();
        // Entries arrive in id order, so every bucket stays sorted.
        for (id, word) in words.entries() {
            for key in pattern_keys(word) {
                buckets.entry(key).or_default().push(id);
            }
        }
        tracing::debug!(
            words = words.len(),
            buckets = buckets.len(),
            "built neighbor index"
        );
        Ok(Self {
            words,
            digest,
            buckets,
        })
    }

    /// Number of distinct wildcard patterns.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl NeighborSource for NeighborIndex {
    fn word_set(&self) -> &WordSet {
        &self.words
    }

    fn lexicon_digest(&self) -> &ContentHash {
        &self.digest
    }

    fn neighbor_ids(&self, word: &str) -> Vec<WordId> {
        let own_id = self.words.id_of(word);
        let mut out: Vec<WordId> = pattern_keys(word)
            .filter_map(|key| self.buckets.get(&key))
            .flatten()
            .copied()
            .filter(|&id| Some(id) != own_id)
            .collect();
        // Buckets for different positions are disjoint; only the merge order needs fixing.
        out.sort_unstable();
        out
    }
}

/// Full-lexicon scan.
#[derive(Debug, Clone)]
pub struct LexiconScan {
    words: Arc<WordSet>,
    digest: ContentHash,
}

impl LexiconScan {
    /// Wrap `words` for scanning.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Canon`] if the lexicon digest cannot be computed.
    pub fn new(words: Arc<WordSet>) -> Result<Self, LexiconError> {
        let digest = words.digest()?;
        Ok(Self { words, digest })
    }
}

impl NeighborSource for LexiconScan {
    fn word_set(&self) -> &WordSet {
        &self.words
    }

    fn lexicon_digest(&self) -> &ContentHash {
        &self.digest
    }

    fn neighbor_ids(&self, word: &str) -> Vec<WordId> {
        self.words
            .entries()
            .filter(|(_, candidate)| is_adjacent(word, candidate))
            .map(|(id, _)| id)
            .collect()
    }
}
