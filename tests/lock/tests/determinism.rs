//! In-process determinism of search reports and digests.
//!
//! Repeated runs over the same lexicon and policy must produce identical
//! canonical report bytes. Input order of the word list must not leak into
//! the lexicon digest or any search output.

use ladder_harness::LadderEngine;
use ladder_kernel::lexicon::WordSet;
use ladder_search::cancel::CancelToken;
use ladder_search::policy::SearchPolicyV1;
use ladder_search::search::LadderSearchResult;

const WORDS: &[&str] = &[
    "cat", "cot", "cog", "dog", "dot", "dig", "hot", "hog", "lot", "log", "bat", "bag", "big",
];

fn engine(words: &[&str]) -> LadderEngine {
    LadderEngine::new(WordSet::from_words(words).unwrap()).unwrap()
}

fn recording() -> SearchPolicyV1 {
    SearchPolicyV1 {
        record_expansions: true,
        ..SearchPolicyV1::default()
    }
}

fn shortest(engine: &LadderEngine, start: &str, end: &str) -> LadderSearchResult {
    engine
        .min_ladder_with(start, end, &recording(), &CancelToken::new())
        .unwrap()
}

fn any(engine: &LadderEngine, start: &str, end: &str) -> LadderSearchResult {
    engine
        .some_ladder_with(start, end, &recording(), &CancelToken::new())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Determinism N=10
// ---------------------------------------------------------------------------

#[test]
fn shortest_report_bytes_deterministic_n10() {
    let e = engine(WORDS);
    let first = shortest(&e, "cat", "log").report.to_canonical_json_bytes().unwrap();
    for i in 1..10 {
        let again = shortest(&e, "cat", "log").report.to_canonical_json_bytes().unwrap();
        assert_eq!(first, again, "shortest report bytes differ on run {i}");
    }
}

#[test]
fn any_report_bytes_deterministic_n10() {
    let e = engine(WORDS);
    let first = any(&e, "bat", "hog").report.to_canonical_json_bytes().unwrap();
    for i in 1..10 {
        let again = any(&e, "bat", "hog").report.to_canonical_json_bytes().unwrap();
        assert_eq!(first, again, "any report bytes differ on run {i}");
    }
}

#[test]
fn fresh_engines_agree_n10() {
    let baseline = engine(WORDS);
    let expected = shortest(&baseline, "big", "lot").report.digest().unwrap();
    for i in 0..10 {
        let e = engine(WORDS);
        assert_eq!(e.lexicon_digest(), baseline.lexicon_digest());
        let digest = shortest(&e, "big", "lot").report.digest().unwrap();
        assert_eq!(digest, expected, "report digest differs for engine {i}");
    }
}

// ---------------------------------------------------------------------------
// Input order and normalization
// ---------------------------------------------------------------------------

#[test]
fn word_list_order_does_not_affect_results() {
    let forward = engine(WORDS);
    let reversed: Vec<&str> = WORDS.iter().rev().copied().collect();
    let backward = engine(&reversed);

    assert_eq!(forward.lexicon_digest(), backward.lexicon_digest());
    for (start, end) in [("cat", "log"), ("big", "hot"), ("bag", "dot")] {
        assert_eq!(
            shortest(&forward, start, end).report.digest().unwrap(),
            shortest(&backward, start, end).report.digest().unwrap(),
            "{start} -> {end}"
        );
        assert_eq!(
            any(&forward, start, end).report.digest().unwrap(),
            any(&backward, start, end).report.digest().unwrap(),
            "{start} -> {end}"
        );
    }
}

#[test]
fn duplicates_and_case_collapse_before_hashing() {
    let plain = engine(&["cat", "cot", "dot"]);
    let noisy = engine(&["COT", "cat", "dot", "Cat", "cot"]);
    assert_eq!(plain.lexicon_digest(), noisy.lexicon_digest());
    assert_eq!(noisy.word_count(), 3);
}

#[test]
fn different_lexicons_have_different_digests() {
    let a = engine(&["cat", "cot"]);
    let b = engine(&["cat", "cog"]);
    assert_ne!(a.lexicon_digest(), b.lexicon_digest());
}

// ---------------------------------------------------------------------------
// Report content
// ---------------------------------------------------------------------------

#[test]
fn report_binds_lexicon_and_policy_digests() {
    let e = engine(WORDS);
    let result = shortest(&e, "cat", "log");
    let json = result.report.to_json_value();
    assert_eq!(
        json["metadata"]["lexicon_digest"],
        e.lexicon_digest().hex_digest()
    );
    assert_eq!(
        json["metadata"]["search_policy_digest"],
        recording().digest().unwrap().hex_digest()
    );
    assert_eq!(json["metadata"]["strategy"], "shortest");
    assert_eq!(json["metadata"]["termination_reason"]["type"], "goal_reached");
}

#[test]
fn canonical_bytes_parse_back_to_report_fields() {
    let e = engine(WORDS);
    let result = shortest(&e, "cat", "log");
    let bytes = result.report.to_canonical_json_bytes().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(parsed, result.report.to_json_value());
    assert_eq!(parsed["metadata"]["termination_reason"]["type"], "goal_reached");
    let ladder: Vec<&str> = parsed["metadata"]["ladder"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap())
        .collect();
    assert_eq!(ladder, result.ladder.words());
    assert_eq!(
        parsed["expansions"].as_array().unwrap().len() as u64,
        result.report.metadata.counters.total_expansions
    );
}

#[test]
fn precondition_failure_is_named_in_json() {
    let e = engine(WORDS);
    let result = shortest(&e, "cat", "cats");
    let parsed: serde_json::Value =
        serde_json::from_slice(&result.report.to_canonical_json_bytes().unwrap()).unwrap();
    assert_eq!(parsed["metadata"]["termination_reason"]["type"], "precondition_failed");
    assert_eq!(
        parsed["metadata"]["termination_reason"]["precondition"],
        "length_mismatch"
    );
    assert_eq!(parsed["metadata"]["ladder"], serde_json::json!([]));
}

#[test]
fn recorded_expansions_match_counter() {
    let e = engine(WORDS);
    for result in [shortest(&e, "cat", "log"), any(&e, "cat", "log")] {
        let counters = &result.report.metadata.counters;
        assert_eq!(result.report.expansions.len() as u64, counters.total_expansions);
        for (i, event) in result.report.expansions.iter().enumerate() {
            assert_eq!(event.expansion_order, i as u64);
        }
    }
}

#[test]
fn policy_change_changes_report_digest() {
    let e = engine(WORDS);
    let recorded = shortest(&e, "cat", "log").report.digest().unwrap();
    let silent = e
        .min_ladder_with("cat", "log", &SearchPolicyV1::default(), &CancelToken::new())
        .unwrap()
        .report
        .digest()
        .unwrap();
    assert_ne!(recorded, silent);
}
