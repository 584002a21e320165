//! Shared-engine concurrency and cancellation.
//!
//! One engine is queried from many threads at once; every thread must see
//! the same answers a single-threaded caller sees. Cancellation is driven
//! through a neighbor source that fires the token after a fixed number of
//! lookups, so the stopping point is deterministic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use ladder_harness::LadderEngine;
use ladder_kernel::lexicon::{WordId, WordSet};
use ladder_kernel::proof::hash::ContentHash;
use ladder_search::bfs::shortest_ladder;
use ladder_search::cancel::CancelToken;
use ladder_search::dfs::any_ladder;
use ladder_search::neighbors::NeighborIndex;
use ladder_search::policy::SearchPolicyV1;
use ladder_search::report::TerminationReasonV1;
use ladder_search::NeighborSource;

const WORDS: &[&str] = &[
    "cat", "cot", "cog", "dog", "dot", "dig", "hot", "hog", "lot", "log", "bat", "bag", "big",
];

fn words() -> WordSet {
    WordSet::from_words(WORDS).unwrap()
}

/// Fires `cancel` once `neighbor_ids` has been called `limit` times.
struct CancelAfter {
    inner: NeighborIndex,
    calls: AtomicU64,
    limit: u64,
    cancel: CancelToken,
}

impl NeighborSource for CancelAfter {
    fn word_set(&self) -> &WordSet {
        self.inner.word_set()
    }

    fn lexicon_digest(&self) -> &ContentHash {
        self.inner.lexicon_digest()
    }

    fn neighbor_ids(&self, word: &str) -> Vec<WordId> {
        if self.calls.fetch_add(1, Ordering::SeqCst) + 1 >= self.limit {
            self.cancel.cancel();
        }
        self.inner.neighbor_ids(word)
    }
}

fn cancel_after(limit: u64) -> CancelAfter {
    CancelAfter {
        inner: NeighborIndex::new(Arc::new(words())).unwrap(),
        calls: AtomicU64::new(0),
        limit,
        cancel: CancelToken::new(),
    }
}

#[test]
fn scoped_threads_share_one_engine() {
    let engine = LadderEngine::new(words()).unwrap();
    let expected_min = engine.min_ladder("cat", "log");
    let expected_any = engine.some_ladder("bat", "hog");
    assert!(!expected_min.is_empty());
    assert!(!expected_any.is_empty());

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    assert_eq!(engine.min_ladder("cat", "log"), expected_min);
                    assert_eq!(engine.some_ladder("bat", "hog"), expected_any);
                    assert_eq!(engine.word_count(), WORDS.len());
                    assert!(engine.is_word("dig"));
                }
            });
        }
    });
}

#[test]
fn cloned_engines_move_across_threads() {
    let engine = LadderEngine::new(words()).unwrap();
    let expected = engine.min_ladder("big", "dot");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || engine.min_ladder("big", "dot"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn pre_cancelled_token_stops_before_any_expansion() {
    let engine = LadderEngine::new(words()).unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();

    for result in [
        engine
            .min_ladder_with("cat", "dog", &SearchPolicyV1::default(), &cancel)
            .unwrap(),
        engine
            .some_ladder_with("cat", "dog", &SearchPolicyV1::default(), &cancel)
            .unwrap(),
    ] {
        assert!(result.ladder.is_empty());
        assert_eq!(result.termination_reason(), &TerminationReasonV1::Cancelled);
        assert_eq!(result.report.metadata.counters.total_expansions, 0);
        assert!(!result.termination_reason().proves_no_ladder());
    }
}

#[test]
fn cancellation_mid_search_returns_empty_ladder() {
    let source = cancel_after(2);
    let result = shortest_ladder(
        &source,
        "cat",
        "log",
        &SearchPolicyV1::default(),
        &source.cancel,
    )
    .unwrap();
    assert!(result.ladder.is_empty());
    assert_eq!(result.termination_reason(), &TerminationReasonV1::Cancelled);
    assert_eq!(result.report.metadata.counters.total_expansions, 2);

    let source = cancel_after(2);
    let result = any_ladder(
        &source,
        "cat",
        "log",
        &SearchPolicyV1::default(),
        &source.cancel,
    )
    .unwrap();
    assert!(result.ladder.is_empty());
    assert_eq!(result.termination_reason(), &TerminationReasonV1::Cancelled);
    assert_eq!(result.report.metadata.counters.total_expansions, 2);
}

#[test]
fn cancelling_one_query_leaves_others_untouched() {
    let engine = LadderEngine::new(words()).unwrap();
    let expected = engine.min_ladder("cat", "log");
    let cancelled = CancelToken::new();
    cancelled.cancel();

    thread::scope(|s| {
        let stopped = s.spawn(|| {
            engine
                .min_ladder_with("cat", "log", &SearchPolicyV1::default(), &cancelled)
                .unwrap()
        });
        let free = s.spawn(|| {
            engine
                .min_ladder_with("cat", "log", &SearchPolicyV1::default(), &CancelToken::new())
                .unwrap()
        });
        assert!(stopped.join().unwrap().ladder.is_empty());
        assert_eq!(free.join().unwrap().ladder, expected);
    });
}
