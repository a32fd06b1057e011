//! Error handling for the census fetcher.

use std::num::ParseIntError;

/// Longest raw response excerpt carried into log lines
pub const BODY_EXCERPT_LIMIT: usize = 1024;

/// Specialized error type for census retrieval
#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    /// Missing or placeholder credential, or an unusable client setup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A single outbound call failed
    #[error("Fetch error for {scope}: {reason}")]
    Fetch {
        /// What the call was for, e.g. `Franklin County`
        scope: String,
        /// Transport, status or decode failure
        reason: String,
        /// Raw response body, when one was received
        body: Option<String>,
    },

    /// The response body is not a header-plus-rows grid
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl CensusError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a fetch error for the given scope
    pub fn fetch(scope: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            scope: scope.into(),
            reason: reason.into(),
            body: None,
        }
    }

    /// Attach the raw response body to a fetch error
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_body(self, raw: impl Into<String>) -> Self {
        match self {
            Self::Fetch { scope, reason, .. } => Self::Fetch {
                scope,
                reason,
                body: Some(raw.into()),
            },
            other => other,
        }
    }

    /// Raw response body, if this error carries one
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Fetch { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Whether this error must abort the run
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Errors raised while decoding a single response row
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RowError {
    /// Row width differs from the header row
    #[error("row has {found} values, header has {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// A required column holds `null`
    #[error("column '{column}' is null")]
    NullValue { column: String },

    /// A count column is not a non-negative integer
    #[error("column '{column}' has non-integer count '{value}': {source}")]
    InvalidCount {
        column: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Trim a response body to [`BODY_EXCERPT_LIMIT`] characters for logging
#[must_use]
pub fn body_excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT_LIMIT) {
        Some((idx, _)) => format!("{}... ({} bytes total)", &trimmed[..idx], trimmed.len()),
        None => trimmed.to_string(),
    }
}

/// Result type for census operations
pub type Result<T> = std::result::Result<T, CensusError>;
