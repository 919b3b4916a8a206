//! Error types and skip accounting

use serde::Serialize;
use thiserror::Error;

/// Why an identifier failed to parse as a verse reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Fewer than two whitespace-delimited tokens
    TooFewTokens,
    /// No token contains a colon
    NoChapterVerse,
    /// The chapter:verse token is not exactly two non-empty parts
    BadChapterVerse,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MalformedReason::TooFewTokens => "fewer than two tokens",
            MalformedReason::NoChapterVerse => "no chapter:verse token",
            MalformedReason::BadChapterVerse => "chapter:verse token does not split in two",
        };
        f.write_str(text)
    }
}

/// Errors raised while indexing verse content.
///
/// `MalformedIdentifier`, `MissingField` and `UnresolvedChapterStart` are
/// per-unit problems: indexing and import skip the unit, tally it in a
/// [`SkipReport`], and carry on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed verse identifier {id:?}: {reason}")]
    MalformedIdentifier { id: String, reason: MalformedReason },

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("chapter start without a chapter number: {text:?}")]
    UnresolvedChapterStart { text: String },

    #[error("unknown header policy: {0}")]
    UnknownPolicy(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Counts of units skipped during a walk or an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipReport {
    pub malformed_identifier: usize,
    pub missing_field: usize,
    pub unresolved_chapter_start: usize,
}

impl SkipReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a skipped unit. Errors that are not per-unit are not counted.
    pub fn record(&mut self, error: &Error) {
        match error {
            Error::MalformedIdentifier { .. } => self.malformed_identifier += 1,
            Error::MissingField(_) => self.missing_field += 1,
            Error::UnresolvedChapterStart { .. } => self.unresolved_chapter_start += 1,
            Error::UnknownPolicy(_) | Error::Json(_) | Error::Io(_) => {}
        }
    }

    /// Total number of skipped units
    pub fn total(&self) -> usize {
        self.malformed_identifier + self.missing_field + self.unresolved_chapter_start
    }
}
