//! Ladder Harness: lexicon loading and the caller-facing engine.
//!
//! The harness reads word lists and wires a [`ladder_search`] neighbor index
//! behind [`engine::LadderEngine`]. It does NOT implement search logic; it
//! delegates to `ladder_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod lexicon_source;

pub use engine::LadderEngine;
