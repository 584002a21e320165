//! The immutable, lower-cased, duplicate-free word list.

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Error building a [`WordSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// No usable word survived normalization.
    #[error("lexicon is empty")]
    Empty,
    /// Lexicon snapshot could not be canonicalized for hashing.
    #[error("lexicon snapshot canonicalization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Dense index of a word inside its [`WordSet`].
///
/// Ids are assigned in lexicographic order, so comparing two ids from the
/// same set compares the words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    /// Position of the word in the set's ordered enumeration.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An ordered set of lower-case words.
///
/// Construct via [`WordSet::from_words`]; a constructed set is never empty
/// and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    /// Sorted by byte order, no duplicates, no empty strings.
    words: Vec<String>,
}

impl WordSet {
    /// Normalize `tokens` (lower-case, drop empties, dedup) into a set.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if no non-empty token is supplied.
    pub fn from_words<I, S>(tokens: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { words })
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed set; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test. Queries are not case-folded.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    /// Id of `word`, if it is a member.
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .ok()
            .map(WordId)
    }

    /// The word behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this set.
    #[must_use]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.0]
    }

    /// Words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// `(id, word)` pairs in lexicographic order.
    pub fn entries(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i), w.as_str()))
    }

    /// Content digest of the ordered word list.
    ///
    /// Two sets built from the same words (in any order, any case) share a digest.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Canon`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, LexiconError> {
        let value = serde_json::Value::from(self.words.clone());
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::LexiconSnapshot, &bytes))
    }
}
