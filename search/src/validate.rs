//! The ladder legality predicate.
//!
//! A sequence is a ladder iff it is non-empty, every element is a lexicon
//! member, and every consecutive pair is adjacent. Checking stops at the
//! first violation.

use ladder_kernel::lexicon::{is_adjacent, WordSet};

/// First reason a sequence is not a ladder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderViolation {
    #[error("empty sequence is not a ladder")]
    Empty,
    #[error("element {index} ({word:?}) is not in the lexicon")]
    NotAWord { index: usize, word: String },
    #[error("elements {index} ({from:?}) and {} ({to:?}) are not one letter apart", .index + 1)]
    NotAdjacent {
        index: usize,
        from: String,
        to: String,
    },
}

/// Check `sequence` against `words`, naming the first violation.
///
/// # Errors
///
/// Returns the first [`LadderViolation`] in sequence order. Membership of
/// element `i` is checked before the adjacency of pair `(i - 1, i)`.
pub fn validate_ladder<S: AsRef<str>>(
    words: &WordSet,
    sequence: &[S],
) -> Result<(), LadderViolation> {
    if sequence.is_empty() {
        return Err(LadderViolation::Empty);
    }
    for (index, item) in sequence.iter().enumerate() {
        let word = item.as_ref();
        if !words.contains(word) {
            return Err(LadderViolation::NotAWord {
                index,
                word: word.to_string(),
            });
        }
        if index > 0 {
            let prev = sequence[index - 1].as_ref();
            if !is_adjacent(prev, word) {
                return Err(LadderViolation::NotAdjacent {
                    index: index - 1,
                    from: prev.to_string(),
                    to: word.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// `true` iff `sequence` is a legal ladder over `words`.
#[must_use]
pub fn is_ladder<S: AsRef<str>>(words: &WordSet, sequence: &[S]) -> bool {
    validate_ladder(words, sequence).is_ok()
}
