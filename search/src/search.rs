//! Shared search plumbing: pre-flight checks, result type, report assembly.

use ladder_kernel::lexicon::{WordId, WordSet};

use crate::contract::NeighborSource;
use crate::error::SearchError;
use crate::ladder::Ladder;
use crate::policy::SearchPolicyV1;
use crate::report::{
    ExpandEventV1, PreconditionV1, SearchCountersV1, SearchReportMetadata, SearchReportV1,
    StrategyV1, TerminationReasonV1,
};

/// Result of a ladder search.
///
/// Always contains a complete report regardless of how the search
/// terminated. `ladder` is either fully legal or empty, never partial.
#[derive(Debug, Clone)]
pub struct LadderSearchResult {
    pub ladder: Ladder,
    pub report: SearchReportV1,
}

impl LadderSearchResult {
    /// Returns `true` if a (possibly trivial) ladder was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.report.metadata.termination_reason.is_found()
    }

    #[must_use]
    pub fn termination_reason(&self) -> &TerminationReasonV1 {
        &self.report.metadata.termination_reason
    }
}

/// Outcome of checking the endpoints before any expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Preflight {
    /// `start == end`: answer `[start]`, membership not required.
    Trivial,
    Refused(PreconditionV1),
    Ready { start: WordId, end: WordId },
}

/// Classify the endpoints. Checks run in a fixed order: identity, length,
/// start membership, end membership.
pub(crate) fn preflight(words: &WordSet, start: &str, end: &str) -> Preflight {
    if start == end {
        return Preflight::Trivial;
    }
    if start.chars().count() != end.chars().count() {
        return Preflight::Refused(PreconditionV1::LengthMismatch);
    }
    let Some(start_id) = words.id_of(start) else {
        return Preflight::Refused(PreconditionV1::StartNotInLexicon);
    };
    let Some(end_id) = words.id_of(end) else {
        return Preflight::Refused(PreconditionV1::EndNotInLexicon);
    };
    Preflight::Ready {
        start: start_id,
        end: end_id,
    }
}

/// Accumulates counters and (optionally) expansion events for one search.
pub(crate) struct ReportBuilder {
    metadata: SearchReportMetadata,
    record_expansions: bool,
    expansions: Vec<ExpandEventV1>,
    pub(crate) counters: SearchCountersV1,
}

impl ReportBuilder {
    /// Validate `policy` and bind the report to the lexicon and policy digests.
    pub(crate) fn new(
        strategy: StrategyV1,
        source: &dyn NeighborSource,
        start: &str,
        end: &str,
        policy: &SearchPolicyV1,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        let policy_digest = policy.digest()?;
        Ok(Self {
            metadata: SearchReportMetadata {
                strategy,
                start: start.to_string(),
                end: end.to_string(),
                lexicon_digest: source.lexicon_digest().hex_digest().to_string(),
                search_policy_digest: policy_digest.hex_digest().to_string(),
                termination_reason: TerminationReasonV1::FrontierExhausted,
                counters: SearchCountersV1::default(),
                ladder: Vec::new(),
            },
            record_expansions: policy.record_expansions,
            expansions: Vec::new(),
            counters: SearchCountersV1::default(),
        })
    }

    /// Whether events should be built at all.
    pub(crate) fn is_recording(&self) -> bool {
        self.record_expansions
    }

    pub(crate) fn record(&mut self, event: ExpandEventV1) {
        if self.record_expansions {
            self.expansions.push(event);
        }
    }

    pub(crate) fn finish(mut self, reason: TerminationReasonV1, ladder: Ladder) -> LadderSearchResult {
        tracing::debug!(
            strategy = self.metadata.strategy.as_str(),
            start = %self.metadata.start,
            end = %self.metadata.end,
            reason = ?reason,
            ladder_len = ladder.len(),
            expansions = self.counters.total_expansions,
            high_water = self.counters.frontier_high_water,
            "ladder search finished"
        );
        self.metadata.termination_reason = reason;
        self.metadata.counters = self.counters;
        self.metadata.ladder = ladder.words().to_vec();
        LadderSearchResult {
            ladder,
            report: SearchReportV1 {
                metadata: self.metadata,
                expansions: self.expansions,
            },
        }
    }
}
