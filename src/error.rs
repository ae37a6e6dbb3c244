// src/error.rs
use scraper::error::SelectorErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Every failure is terminal for the run. The message names the stage.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("extract: expected exactly one commented-out table, found {candidates}")]
    NoTableFound { candidates: usize },

    #[error("parse: malformed table: {reason}")]
    MalformedTable { reason: String },

    #[error(
        "normalize: schema mismatch, expected {expected} columns after dropping placeholders, \
         found {found}: {columns:?}"
    )]
    SchemaMismatch {
        expected: usize,
        found: usize,
        columns: Vec<String>,
    },

    #[error("parse: match data missing `{missing}`")]
    NoMatchData { missing: String },

    #[error("parse: invalid match JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("missing input: {0}")]
    MissingInput(&'static str),

    #[error("serialize: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ScrapeError::MalformedTable { reason: reason.into() }
    }

    pub(crate) fn no_match_data(missing: impl Into<String>) -> Self {
        ScrapeError::NoMatchData { missing: missing.into() }
    }
}

impl From<SelectorErrorKind<'_>> for ScrapeError {
    fn from(e: SelectorErrorKind<'_>) -> Self {
        ScrapeError::Selector(e.to_string())
    }
}
