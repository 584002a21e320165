//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Nothing in this module knows about words or ladders.

pub mod canon;
pub mod hash;
pub mod hash_domain;
