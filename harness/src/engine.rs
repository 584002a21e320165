//! `LadderEngine`: the caller-facing word-ladder API.
//!
//! The engine owns nothing mutable. It wraps an `Arc`-shared
//! [`NeighborIndex`], so clones are cheap and may be moved to other threads;
//! every query allocates its own frontier and visited set.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use ladder_kernel::lexicon::{hamming_distance, LexiconError, WordSet};
use ladder_kernel::proof::hash::ContentHash;
use ladder_search::bfs::shortest_ladder;
use ladder_search::cancel::CancelToken;
use ladder_search::dfs::any_ladder;
use ladder_search::error::SearchError;
use ladder_search::ladder::Ladder;
use ladder_search::neighbors::NeighborIndex;
use ladder_search::policy::SearchPolicyV1;
use ladder_search::search::LadderSearchResult;
use ladder_search::validate::{is_ladder, validate_ladder, LadderViolation};
use ladder_search::NeighborSource;

use crate::lexicon_source::{load_lexicon, read_lexicon, LexiconLoadError};

/// Word-ladder engine over one immutable lexicon.
#[derive(Debug, Clone)]
pub struct LadderEngine {
    index: Arc<NeighborIndex>,
}

impl LadderEngine {
    /// Build an engine (and its neighbor index) over `words`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Canon`] if the lexicon digest cannot be computed.
    pub fn new(words: WordSet) -> Result<Self, LexiconError> {
        let index = NeighborIndex::new(Arc::new(words))?;
        tracing::info!(
            words = index.word_set().len(),
            patterns = index.bucket_count(),
            lexicon_digest = index.lexicon_digest().as_str(),
            "ladder engine ready"
        );
        Ok(Self {
            index: Arc::new(index),
        })
    }

    /// Build an engine from a line-oriented word list.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconLoadError`] if reading fails or yields no words.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconLoadError> {
        Ok(Self::new(read_lexicon(reader)?)?)
    }

    /// Build an engine from a word-list file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconLoadError`] if the file cannot be read or holds no words.
    pub fn from_path(path: &Path) -> Result<Self, LexiconLoadError> {
        Ok(Self::new(load_lexicon(path)?)?)
    }

    /// The lexicon.
    #[must_use]
    pub fn word_set(&self) -> &WordSet {
        self.index.word_set()
    }

    /// The neighbor source the searches run on.
    #[must_use]
    pub fn neighbor_source(&self) -> &NeighborIndex {
        &self.index
    }

    /// Digest binding reports to this lexicon.
    #[must_use]
    pub fn lexicon_digest(&self) -> &ContentHash {
        self.index.lexicon_digest()
    }

    /// Number of words in the lexicon.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_set().len()
    }

    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.word_set().contains(word)
    }

    /// Positions at which `a` and `b` differ, or `-1` if their lengths differ.
    #[must_use]
    pub fn hamming_distance(&self, a: &str, b: &str) -> i64 {
        hamming_distance(a, b).map_or(-1, |d| i64::try_from(d).unwrap_or(i64::MAX))
    }

    /// Lexicon words one letter away from `word`, in lexicographic order.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<&str> {
        self.index.neighbors(word)
    }

    /// `true` iff `sequence` is a legal ladder over this lexicon.
    #[must_use]
    pub fn is_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        is_ladder(self.word_set(), sequence)
    }

    /// Like [`LadderEngine::is_ladder`], naming the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first [`LadderViolation`] found.
    pub fn validate_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> Result<(), LadderViolation> {
        validate_ladder(self.word_set(), sequence)
    }

    /// A minimum-length ladder, or the empty ladder if none exists.
    #[must_use]
    pub fn min_ladder(&self, start: &str, end: &str) -> Ladder {
        self.unbounded(shortest_ladder, start, end)
    }

    /// Some ladder (not necessarily shortest), or the empty ladder if none exists.
    #[must_use]
    pub fn some_ladder(&self, start: &str, end: &str) -> Ladder {
        self.unbounded(any_ladder, start, end)
    }

    /// Breadth-first search with an explicit policy and cancel token.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `policy` fails validation.
    pub fn min_ladder_with(
        &self,
        start: &str,
        end: &str,
        policy: &SearchPolicyV1,
        cancel: &CancelToken,
    ) -> Result<LadderSearchResult, SearchError> {
        shortest_ladder(self.index.as_ref(), start, end, policy, cancel)
    }

    /// Depth-first search with an explicit policy and cancel token.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `policy` fails validation.
    pub fn some_ladder_with(
        &self,
        start: &str,
        end: &str,
        policy: &SearchPolicyV1,
        cancel: &CancelToken,
    ) -> Result<LadderSearchResult, SearchError> {
        any_ladder(self.index.as_ref(), start, end, policy, cancel)
    }

    fn unbounded(
        &self,
        search: fn(
            &dyn NeighborSource,
            &str,
            &str,
            &SearchPolicyV1,
            &CancelToken,
        ) -> Result<LadderSearchResult, SearchError>,
        start: &str,
        end: &str,
    ) -> Ladder {
        // The default policy always validates.
        match search(
            self.index.as_ref(),
            start,
            end,
            &SearchPolicyV1::default(),
            &CancelToken::new(),
        ) {
            Ok(result) => result.ladder,
            Err(err) => {
                tracing::warn!(%err, "default search policy rejected");
                Ladder::empty()
            }
        }
    }
}
