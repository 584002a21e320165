//! Domain separators for canonical hashing.
//!
//! Each artifact kind hashed in the workspace gets its own prefix, so a
//! lexicon snapshot and a report with identical bytes never share a digest.

/// Which artifact a [`super::hash::canonical_hash`] call is hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Ordered word list of a `WordSet`.
    LexiconSnapshot,
    /// Canonical echo of a `SearchPolicyV1`.
    SearchPolicy,
    /// Canonical bytes of a `SearchReportV1`.
    SearchReport,
}

impl HashDomain {
    /// Null-terminated prefix fed to SHA-256 ahead of the payload.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::LexiconSnapshot => b"LADDER::LEXICON_SNAPSHOT::V1\0",
            Self::SearchPolicy => b"LADDER::SEARCH_POLICY::V1\0",
            Self::SearchReport => b"LADDER::SEARCH_REPORT::V1\0",
        }
    }
}
