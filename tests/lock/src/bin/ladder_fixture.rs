//! Binary that runs one ladder search over a lexicon file and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `ladder_fixture <lexicon-file> <shortest|any> <start> <end>`
//!
//! Output: key=value lines on stdout. Diagnostics go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

use std::path::Path;
use std::process::ExitCode;

use ladder_harness::LadderEngine;
use ladder_search::cancel::CancelToken;
use ladder_search::policy::SearchPolicyV1;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let [_, lexicon, strategy, start, end] = args.as_slice() else {
        eprintln!("usage: ladder_fixture <lexicon-file> <shortest|any> <start> <end>");
        return ExitCode::from(2);
    };

    let engine = match LadderEngine::from_path(Path::new(lexicon)) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("ladder_fixture: {err}");
            return ExitCode::FAILURE;
        }
    };

    let policy = SearchPolicyV1 {
        record_expansions: true,
        ..SearchPolicyV1::default()
    };
    let cancel = CancelToken::new();
    let result = match strategy.as_str() {
        "shortest" => engine.min_ladder_with(start, end, &policy, &cancel),
        "any" => engine.some_ladder_with(start, end, &policy, &cancel),
        other => {
            eprintln!("ladder_fixture: unknown strategy {other:?}");
            return ExitCode::from(2);
        }
    };
    let result = match result {
        Ok(result) => result,
        Err(err) => {
            eprintln!("ladder_fixture: {err}");
            return ExitCode::FAILURE;
        }
    };
    let report_digest = match result.report.digest() {
        Ok(digest) => digest,
        Err(err) => {
            eprintln!("ladder_fixture: {err}");
            return ExitCode::FAILURE;
        }
    };
    let report_json = result.report.to_json_value();

    println!("lexicon_digest={}", engine.lexicon_digest());
    println!("report_digest={report_digest}");
    println!(
        "termination_reason={}",
        report_json["metadata"]["termination_reason"]["type"]
            .as_str()
            .unwrap_or("unknown")
    );
    println!("ladder={}", result.ladder.words().join(","));
    println!(
        "total_expansions={}",
        result.report.metadata.counters.total_expansions
    );
    ExitCode::SUCCESS
}
