//! Ladder Kernel: the lexicon model shared by every ladder crate.
//!
//! # API Surface
//!
//! - [`lexicon::WordSet`] -- the immutable, lower-cased, ordered vocabulary
//! - [`lexicon::hamming_distance`] / [`lexicon::is_adjacent`] -- the single
//!   definition of "one letter apart"
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 used to bind
//!   search reports to the lexicon and policy they ran against
//!
//! # Module Dependency Direction
//!
//! `proof` ← `lexicon`
//!
//! `lexicon` depends on `proof` for its digest. `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod proof;
