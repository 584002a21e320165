//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (no ladder, budget exhaustion, cancellation) are expressed via
//! [`crate::report::TerminationReasonV1`] and always produce a report.

use ladder_kernel::proof::canon::CanonError;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No report is
/// produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy cannot drive a search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// The policy echo could not be canonicalized for its digest.
    #[error("policy canonicalization failed: {0}")]
    Canon(#[from] CanonError),
}
