//! `SearchReportV1`: what a search did and why it stopped.
//!
//! The metadata block is always present. The expansion log is only filled
//! when `SearchPolicyV1::record_expansions` is set. Same lexicon, same
//! policy, same endpoints → byte-identical canonical JSON.

use ladder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use ladder_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Which search produced the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyV1 {
    /// Breadth-first, minimum-length ladder.
    Shortest,
    /// Depth-first with backtracking, any ladder.
    Any,
}

impl StrategyV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::Any => "any",
        }
    }
}

/// Why a search was refused before the first expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionV1 {
    /// Start and end have different lengths.
    LengthMismatch,
    StartNotInLexicon,
    EndNotInLexicon,
}

/// Why the search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The end word was reached at `node_id`.
    GoalReached { node_id: u64 },
    /// `start == end`; the one-word ladder was returned without searching.
    TrivialIdentity,
    /// Inputs cannot form a ladder; nothing was searched.
    PreconditionFailed(PreconditionV1),
    /// Every reachable word was visited without meeting the end word.
    FrontierExhausted,
    /// `max_expansions` was hit.
    ExpansionBudgetExceeded,
    /// The frontier emptied, but only because `max_depth` cut some branches.
    DepthLimited,
    /// The cancel token fired.
    Cancelled,
}

impl TerminationReasonV1 {
    /// `true` iff a ladder was returned.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::GoalReached { .. } | Self::TrivialIdentity)
    }

    /// `true` iff the empty result is a proof that no ladder exists.
    ///
    /// Budget, depth and cancellation outcomes are inconclusive.
    #[must_use]
    pub fn proves_no_ladder(&self) -> bool {
        matches!(self, Self::FrontierExhausted | Self::PreconditionFailed(_))
    }
}

/// One search step: a frontier pop (BFS) or a stack step that either
/// descends into a child or backtracks (DFS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of steps.
    pub expansion_order: u64,
    pub node_id: u64,
    pub word: String,
    pub depth: u32,
    /// Words newly enqueued (BFS) or pushed (DFS) by this step.
    pub discovered: Vec<String>,
    /// Neighbors skipped because they were already visited.
    pub duplicates_suppressed: u64,
    /// DFS only: this step found no usable neighbor and unwound the frame.
    pub backtracked: bool,
}

/// Aggregate counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCountersV1 {
    pub total_expansions: u64,
    pub total_neighbors_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_backtracks: u64,
    pub nodes_created: u64,
    pub frontier_high_water: u64,
}

/// Report metadata with snapshot bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportMetadata {
    pub strategy: StrategyV1,
    pub start: String,
    pub end: String,
    /// Hex digest of the lexicon snapshot.
    pub lexicon_digest: String,
    /// Hex digest of the search policy.
    pub search_policy_digest: String,
    pub termination_reason: TerminationReasonV1,
    pub counters: SearchCountersV1,
    /// The returned ladder (empty when none).
    pub ladder: Vec<String>,
}

/// The complete search report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub metadata: SearchReportMetadata,
    /// Ordered step log; empty unless recording was requested.
    pub expansions: Vec<ExpandEventV1>,
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchReportV1 {
    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "backtracked": e.backtracked,
        "depth": e.depth,
        "discovered": e.discovered,
        "duplicates_suppressed": e.duplicates_suppressed,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "word": e.word,
    })
}

fn metadata_to_json(m: &SearchReportMetadata) -> serde_json::Value {
    let c = &m.counters;
    serde_json::json!({
        "end": m.end,
        "frontier_high_water": c.frontier_high_water,
        "ladder": m.ladder,
        "lexicon_digest": m.lexicon_digest,
        "nodes_created": c.nodes_created,
        "search_policy_digest": m.search_policy_digest,
        "start": m.start,
        "strategy": m.strategy.as_str(),
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_backtracks": c.total_backtracks,
        "total_duplicates_suppressed": c.total_duplicates_suppressed,
        "total_expansions": c.total_expansions,
        "total_neighbors_generated": c.total_neighbors_generated,
    })
}

fn precondition_str(p: PreconditionV1) -> &'static str {
    match p {
        PreconditionV1::LengthMismatch => "length_mismatch",
        PreconditionV1::StartNotInLexicon => "start_not_in_lexicon",
        PreconditionV1::EndNotInLexicon => "end_not_in_lexicon",
    }
}

fn termination_reason_to_json(r: &TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReasonV1::TrivialIdentity => serde_json::json!({"type": "trivial_identity"}),
        TerminationReasonV1::PreconditionFailed(p) => {
            serde_json::json!({"precondition": precondition_str(*p), "type": "precondition_failed"})
        }
        TerminationReasonV1::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
        TerminationReasonV1::DepthLimited => serde_json::json!({"type": "depth_limited"}),
        TerminationReasonV1::Cancelled => serde_json::json!({"type": "cancelled"}),
    }
}
