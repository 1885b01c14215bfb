use thiserror::Error;
use tweetpulse_core::StoreError;

use crate::scorer::ScoreError;

/// Failure of a whole aggregation.
///
/// Carries only a generic message. The underlying cause is logged where it is
/// caught and then dropped, so callers never see store or scorer internals.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AggregationError {
    message: &'static str,
}

impl AggregationError {
    pub(crate) const SUMMARY: Self = Self {
        message: "failed to fetch sentiment data",
    };
    pub(crate) const PAGE: Self = Self {
        message: "failed to fetch paginated sentiment data",
    };
    pub(crate) const NEGATIVE_WORDS: Self = Self {
        message: "failed to fetch negative words",
    };

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Anything a collaborator can fail with while an aggregation is running.
#[derive(Debug, Error)]
pub(crate) enum SourceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
