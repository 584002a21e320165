//! Lexicon: the vocabulary every ladder is checked against.
//!
//! A [`WordSet`] is built once and never mutated afterwards. All search and
//! validation code borrows it (or shares it behind an `Arc`).

pub mod word;
pub mod word_set;

pub use word::{hamming_distance, is_adjacent};
pub use word_set::{LexiconError, WordId, WordSet};
