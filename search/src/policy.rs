//! Search policy types.

use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;

/// Search budget and recording configuration.
///
/// The default is unbounded, which is what the plain `min_ladder` /
/// `some_ladder` contracts require: with a default policy an empty ladder
/// always means "no ladder exists". A bounded policy may instead end with
/// `ExpansionBudgetExceeded` or `DepthLimited`, which prove nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on search steps: frontier pops for breadth-first search,
    /// stack steps (descend or backtrack) for depth-first search.
    pub max_expansions: u64,
    /// Maximum steps from the start word (a ladder has at most `max_depth + 1` words).
    pub max_depth: u32,
    /// Record one `ExpandEventV1` per search step in the report.
    pub record_expansions: bool,
}

impl SearchPolicyV1 {
    /// Reject policies that cannot run a single expansion.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical echo of the policy, as embedded in reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "record_expansions": self.record_expansions,
        })
    }

    /// Content digest of [`SearchPolicyV1::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: u64::MAX,
            max_depth: u32::MAX,
            record_expansions: false,
        }
    }
}
