//! Shared helpers for ladder benchmark suites.
//!
//! Lexicons are synthetic and seeded, so every benchmark run measures the
//! same graph.

use ladder_harness::LadderEngine;
use ladder_kernel::lexicon::WordSet;

/// A named search workload: one lexicon and one query over it.
pub struct Regime {
    pub name: &'static str,
    pub engine: LadderEngine,
    pub start: String,
    pub end: String,
}

struct Lcg(u64);

impl Lcg {
    fn next_percent(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) % 100
    }
}

/// Every word of `length` letters over `alphabet`, each kept with
/// probability `keep_percent / 100`.
#[must_use]
pub fn synthetic_words(seed: u64, length: u32, alphabet: &[char], keep_percent: u64) -> Vec<String> {
    let base = alphabet.len();
    let total = base.pow(length);
    let mut rng = Lcg(seed);
    let mut words = Vec::new();
    for mut n in 0..total {
        let mut word = String::with_capacity(length as usize);
        for _ in 0..length {
            word.push(alphabet[n % base]);
            n /= base;
        }
        if rng.next_percent() < keep_percent {
            words.push(word);
        }
    }
    words
}

/// Build a regime whose lexicon always contains both endpoints.
///
/// # Panics
///
/// Panics if the engine cannot be built. Benchmark setup failures are fatal.
#[must_use]
pub fn regime(name: &'static str, mut words: Vec<String>, start: &str, end: &str) -> Regime {
    words.push(start.to_string());
    words.push(end.to_string());
    let set = WordSet::from_words(&words).expect("non-empty lexicon");
    Regime {
        name,
        engine: LadderEngine::new(set).expect("engine"),
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// The standard regimes:
///
/// - `dense`: most 5-letter words over `abcd`; short ladders, many duplicates.
/// - `sparse`: a thin sample over `abcdef`; longer, winding ladders.
/// - `unreachable`: the end word sits outside the start's component, so
///   both searches exhaust it.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let four = ['a', 'b', 'c', 'd'];
    let six = ['a', 'b', 'c', 'd', 'e', 'f'];
    vec![
        regime("dense", synthetic_words(1, 5, &four, 70), "aaaaa", "ddddd"),
        regime("sparse", synthetic_words(2, 5, &six, 25), "aaaaa", "fffff"),
        regime("unreachable", synthetic_words(3, 5, &four, 70), "aaaaa", "zzzzz"),
    ]
}
