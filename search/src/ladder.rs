//! The `Ladder` result type.

use ladder_kernel::lexicon::{WordId, WordSet};

/// An ordered sequence of words, each one letter away from the next.
///
/// The empty ladder is the canonical "no ladder" value. A one-word ladder is
/// a legal (trivial) result. Callers must treat `len() == 0` as "not found"
/// and `len() >= 1` as "found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    /// The canonical "no ladder" value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The trivial ladder `[word]`.
    #[must_use]
    pub fn single(word: &str) -> Self {
        Self {
            words: vec![word.to_string()],
        }
    }

    /// Materialize a ladder from lexicon ids (root first).
    #[must_use]
    pub fn from_ids(set: &WordSet, ids: &[WordId]) -> Self {
        Self {
            words: ids.iter().map(|&id| set.word(id).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words, counting both endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of single-letter changes (`len() - 1`), or `None` for the empty ladder.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.words.len().checked_sub(1)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl std::fmt::Display for Ladder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.words.join(" -> "))
    }
}

impl From<Ladder> for Vec<String> {
    fn from(ladder: Ladder) -> Self {
        ladder.words
    }
}
