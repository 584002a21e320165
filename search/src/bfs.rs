//! Breadth-first search for a minimum-length ladder.
//!
//! Layer-by-layer expansion guarantees that the first time the end word is
//! discovered it is at its graph distance from the start, so the search
//! stops right there. Neighbors are enqueued in lexicographic order, which
//! fixes which of several shortest ladders is returned.

use ladder_kernel::lexicon::WordId;

use crate::cancel::CancelToken;
use crate::contract::NeighborSource;
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::ladder::Ladder;
use crate::node::NodeArena;
use crate::policy::SearchPolicyV1;
use crate::report::{ExpandEventV1, StrategyV1, TerminationReasonV1};
use crate::search::{preflight, LadderSearchResult, Preflight, ReportBuilder};

/// Find a minimum-length ladder from `start` to `end`.
///
/// Returns `Ok` for every runtime outcome; inspect
/// [`LadderSearchResult::termination_reason`] to tell "no ladder exists"
/// (`FrontierExhausted`, `PreconditionFailed`) from inconclusive stops.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight policy failures.
pub fn shortest_ladder(
    source: &dyn NeighborSource,
    start: &str,
    end: &str,
    policy: &SearchPolicyV1,
    cancel: &CancelToken,
) -> Result<LadderSearchResult, SearchError> {
    let mut report = ReportBuilder::new(StrategyV1::Shortest, source, start, end, policy)?;
    let words = source.word_set();

    let (start_id, end_id) = match preflight(words, start, end) {
        Preflight::Trivial => {
            return Ok(report.finish(TerminationReasonV1::TrivialIdentity, Ladder::single(start)));
        }
        Preflight::Refused(why) => {
            return Ok(report.finish(TerminationReasonV1::PreconditionFailed(why), Ladder::empty()));
        }
        Preflight::Ready { start, end } => (start, end),
    };

    let mut arena = NodeArena::new();
    let mut frontier = FifoFrontier::new(words.len());
    let root = arena.push_root(start_id);
    frontier.push(root, start_id);
    let mut depth_cut = false;

    let reason = loop {
        if frontier.is_empty() {
            break if depth_cut {
                TerminationReasonV1::DepthLimited
            } else {
                TerminationReasonV1::FrontierExhausted
            };
        }
        if cancel.is_cancelled() {
            break TerminationReasonV1::Cancelled;
        }
        if report.counters.total_expansions >= policy.max_expansions {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }
        let Some(node_id) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let node = *arena.get(node_id);
        let expansion_order = report.counters.total_expansions;
        report.counters.total_expansions += 1;

        let neighbors = source.neighbor_ids(words.word(node.word));
        report.counters.total_neighbors_generated += neighbors.len() as u64;

        let mut discovered: Vec<WordId> = Vec::new();
        let mut duplicates = 0u64;
        let mut goal = None;
        for id in neighbors {
            if frontier.is_visited(id) {
                duplicates += 1;
                continue;
            }
            if node.depth >= policy.max_depth {
                depth_cut = true;
                continue;
            }
            let child = arena.push_child(node_id, id);
            frontier.push(child, id);
            discovered.push(id);
            if id == end_id {
                goal = Some(child);
                break;
            }
        }
        report.counters.total_duplicates_suppressed += duplicates;

        tracing::trace!(
            expansion_order,
            word = words.word(node.word),
            depth = node.depth,
            discovered = discovered.len(),
            "bfs expand"
        );
        if report.is_recording() {
            report.record(ExpandEventV1 {
                expansion_order,
                node_id,
                word: words.word(node.word).to_string(),
                depth: node.depth,
                discovered: discovered.iter().map(|&id| words.word(id).to_string()).collect(),
                duplicates_suppressed: duplicates,
                backtracked: false,
            });
        }

        if let Some(goal_id) = goal {
            break TerminationReasonV1::GoalReached { node_id: goal_id };
        }
    };

    report.counters.nodes_created = arena.len() as u64;
    report.counters.frontier_high_water = frontier.high_water();

    let ladder = match reason {
        TerminationReasonV1::GoalReached { node_id } => {
            Ladder::from_ids(words, &arena.reconstruct_path(node_id))
        }
        _ => Ladder::empty(),
    };
    Ok(report.finish(reason, ladder))
}
