//! Depth-first search with backtracking for any ladder.
//!
//! The search commits to the first unvisited neighbor (lexicographic order)
//! and descends. A word with no unvisited neighbor is popped; its parent
//! then resumes with its next sibling. Popped words stay visited, so each
//! word is pushed at most once and the search always terminates. If the end
//! word is reachable at all, it is found: the returned ladder is legal but
//! not necessarily shortest.

use crate::cancel::CancelToken;
use crate::contract::NeighborSource;
use crate::error::SearchError;
use crate::frontier::DepthFirstStack;
use crate::ladder::Ladder;
use crate::node::NodeArena;
use crate::policy::SearchPolicyV1;
use crate::report::{ExpandEventV1, StrategyV1, TerminationReasonV1};
use crate::search::{preflight, LadderSearchResult, Preflight, ReportBuilder};

/// Find some ladder from `start` to `end`.
///
/// The ladder is the stack content, bottom to top, at the moment the end
/// word reaches the top.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight policy failures.
pub fn any_ladder(
    source: &dyn NeighborSource,
    start: &str,
    end: &str,
    policy: &SearchPolicyV1,
    cancel: &CancelToken,
) -> Result<LadderSearchResult, SearchError> {
    let mut report = ReportBuilder::new(StrategyV1::Any, source, start, end, policy)?;
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
    let mut stack = DepthFirstStack::new(words.len());
    let root = arena.push_root(start_id);
    stack.push(root, start_id, 0);
    let mut depth_cut = false;

    let reason = loop {
        if cancel.is_cancelled() {
            break TerminationReasonV1::Cancelled;
        }
        let Some(top) = stack.top() else {
            break if depth_cut {
                TerminationReasonV1::DepthLimited
            } else {
                TerminationReasonV1::FrontierExhausted
            };
        };
        let (node_id, word, depth, expanded) = (top.node_id, top.word, top.depth, top.is_expanded());
        if word == end_id {
            break TerminationReasonV1::GoalReached { node_id };
        }
        if report.counters.total_expansions >= policy.max_expansions {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }
        let expansion_order = report.counters.total_expansions;
        report.counters.total_expansions += 1;

        if !expanded {
            let neighbors = source.neighbor_ids(words.word(word));
            report.counters.total_neighbors_generated += neighbors.len() as u64;
            stack.expand_top(neighbors);
        }
        let step = stack.advance_top();
        report.counters.total_duplicates_suppressed += step.skipped;

        let mut discovered = Vec::new();
        let backtracked = match step.next {
            Some(next) if depth < policy.max_depth => {
                let child = arena.push_child(node_id, next);
                stack.push(child, next, depth + 1);
                discovered.push(words.word(next).to_string());
                false
            }
            Some(_) => {
                // Unvisited neighbors remain below the cut; the empty result proves nothing.
                depth_cut = true;
                stack.pop();
                true
            }
            None => {
                stack.pop();
                true
            }
        };
        if backtracked {
            report.counters.total_backtracks += 1;
        }

        tracing::trace!(
            expansion_order,
            word = words.word(word),
            depth,
            backtracked,
            "dfs step"
        );
        if report.is_recording() {
            report.record(ExpandEventV1 {
                expansion_order,
                node_id,
                word: words.word(word).to_string(),
                depth,
                discovered,
                duplicates_suppressed: step.skipped,
                backtracked,
            });
        }
    };

    report.counters.nodes_created = arena.len() as u64;
    report.counters.frontier_high_water = stack.high_water();

    let ladder = match reason {
        TerminationReasonV1::GoalReached { .. } => Ladder::from_ids(words, &stack.words()),
        _ => Ladder::empty(),
    };
    Ok(report.finish(reason, ladder))
}
