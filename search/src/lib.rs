//! Ladder Search: deterministic word-ladder search with an auditable report.
//!
//! This crate provides the search layer. It depends only on `ladder_kernel`;
//! it does NOT depend on `ladder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ladder_kernel  ←  ladder_search       ←  ladder_harness
//! (WordSet, hash)   (neighbors, searches)   (lexicon loading, engine facade)
//! ```
//!
//! # Key types
//!
//! - [`NeighborSource`] -- trait both searches expand through
//! - [`neighbors::NeighborIndex`] -- wildcard-bucket neighbor lookup
//! - [`bfs::shortest_ladder`] -- minimum-length ladder
//! - [`dfs::any_ladder`] -- some ladder, via backtracking depth-first search
//! - [`validate::is_ladder`] -- the legality predicate every result satisfies
//! - [`report::SearchReportV1`] -- termination reason, counters, optional expansion log

#![forbid(unsafe_code)]

pub mod bfs;
pub mod cancel;
pub mod contract;
pub mod dfs;
pub mod error;
pub mod frontier;
pub mod ladder;
pub mod neighbors;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod validate;

pub use contract::NeighborSource;
