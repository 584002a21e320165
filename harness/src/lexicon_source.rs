//! Lexicon source: turns a word list into a [`WordSet`].
//!
//! # Format
//!
//! One entry per line. Only the first whitespace-delimited token of each
//! line is used; the rest of the line (frequencies, definitions, ...) is
//! ignored. Blank lines are skipped. Tokens are lower-cased and deduplicated
//! by [`WordSet::from_words`].
//!
//! I/O failures are surfaced as-is and never retried.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ladder_kernel::lexicon::{LexiconError, WordSet};

/// Error loading a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconLoadError {
    /// The lexicon file could not be opened.
    #[error("cannot open lexicon {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading a line failed (including invalid UTF-8).
    #[error("cannot read lexicon line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    /// The source held no words.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Read a lexicon from any buffered reader.
///
/// # Errors
///
/// Returns [`LexiconLoadError::Read`] on I/O failure and
/// [`LexiconLoadError::Lexicon`] if no word was found.
pub fn read_lexicon<R: BufRead>(reader: R) -> Result<WordSet, LexiconLoadError> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LexiconLoadError::Read {
            line: index + 1,
            source,
        })?;
        if let Some(token) = line.split_whitespace().next() {
            tokens.push(token.to_string());
        }
    }
    let words = WordSet::from_words(&tokens)?;
    tracing::info!(lines_with_words = tokens.len(), words = words.len(), "lexicon read");
    Ok(words)
}

/// Open `path` and read it with [`read_lexicon`].
///
/// # Errors
///
/// Returns [`LexiconLoadError::Open`] if the file cannot be opened, plus
/// every error [`read_lexicon`] can return.
pub fn load_lexicon(path: &Path) -> Result<WordSet, LexiconLoadError> {
    let file = File::open(path).map_err(|source| LexiconLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loading lexicon");
    read_lexicon(BufReader::new(file))
}
