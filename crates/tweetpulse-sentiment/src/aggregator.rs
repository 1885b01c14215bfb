//! Sentiment reports over the tweet store.

use std::sync::Arc;

use tweetpulse_core::{Page, SentimentLabel, TweetStore};

use crate::error::{AggregationError, SourceError};
use crate::frequency::{WordFrequencyTable, WordTally};
use crate::scorer::SentimentScorer;
use crate::types::{EnrichedTweet, PageResult, SentimentCounts};

/// Maximum number of tweets [`SentimentAggregator::summarize`] looks at.
pub const SUMMARY_LIMIT: u64 = 1000;
/// Tweets per page in [`SentimentAggregator::paginate`].
pub const PAGE_SIZE: u64 = 5;
/// Only tweets scoring at or below this feed the negative-word report.
pub const NEGATIVE_WORD_THRESHOLD: i64 = -2;
/// Entries kept in the negative-word report.
pub const TOP_NEGATIVE_WORDS: usize = 10;

/// Computes sentiment reports by reading tweets and scoring their translated text.
///
/// Holds no mutable state; cloning is cheap and every call reads the store afresh.
/// Each operation either returns a complete result or an [`AggregationError`].
#[derive(Clone)]
pub struct SentimentAggregator {
    store: Arc<dyn TweetStore>,
    scorer: Arc<dyn SentimentScorer>,
}

impl std::fmt::Debug for SentimentAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAggregator").finish_non_exhaustive()
    }
}

impl SentimentAggregator {
    #[must_use]
    pub fn new(store: Arc<dyn TweetStore>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { store, scorer }
    }

    /// Count positive, negative and neutral tweets among the first
    /// [`SUMMARY_LIMIT`] tweets in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] if the store or the scorer fails.
    pub async fn summarize(&self) -> Result<SentimentCounts, AggregationError> {
        self.try_summarize().await.map_err(|e| {
            tracing::error!(error = %e, "error fetching sentiment");
            AggregationError::SUMMARY
        })
    }

    /// One page of labelled tweets plus page counts.
    ///
    /// `page` values below 1 (or absent) mean page 1. Pages past the end are
    /// empty but still report `total_pages` and echo `current_page`.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] if the store or the scorer fails.
    pub async fn paginate(&self, page: Option<i64>) -> Result<PageResult, AggregationError> {
        self.try_paginate(normalize_page(page)).await.map_err(|e| {
            tracing::error!(error = %e, "error fetching paginated sentiment data");
            AggregationError::PAGE
        })
    }

    /// The [`TOP_NEGATIVE_WORDS`] most frequent negative words across the whole
    /// collection, counting only tweets that score at or below
    /// [`NEGATIVE_WORD_THRESHOLD`].
    ///
    /// Unlike [`summarize`](Self::summarize) this reads every tweet.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError`] if the store or the scorer fails.
    pub async fn top_negative_words(&self) -> Result<WordFrequencyTable, AggregationError> {
        self.try_top_negative_words().await.map_err(|e| {
            tracing::error!(error = %e, "error fetching negative words");
            AggregationError::NEGATIVE_WORDS
        })
    }

    async fn try_summarize(&self) -> Result<SentimentCounts, SourceError> {
        let tweets = self.store.find_limited(SUMMARY_LIMIT).await?;

        let mut counts = SentimentCounts::default();
        for tweet in &tweets {
            let result = self.scorer.score(&tweet.translated)?;
            counts.record(SentimentLabel::from_score(result.score));
        }

        tracing::debug!(
            scored = counts.total(),
            positive = counts.positive,
            negative = counts.negative,
            neutral = counts.neutral,
            "sentiment summary computed"
        );
        Ok(counts)
    }

    async fn try_paginate(&self, page: u64) -> Result<PageResult, SourceError> {
        let (tweets, total) = tokio::try_join!(
            self.store.find_page(Page::numbered(page, PAGE_SIZE)),
            self.store.count_all(),
        )?;

        let sentiment_result = tweets
            .into_iter()
            .map(|tweet| {
                let result = self.scorer.score(&tweet.translated)?;
                let sentiment = SentimentLabel::from_score(result.score);
                let negative_words = if sentiment == SentimentLabel::Negative {
                    result.negative
                } else {
                    Vec::new()
                };
                Ok(EnrichedTweet {
                    tweet,
                    sentiment,
                    negative_words,
                })
            })
            .collect::<Result<Vec<_>, SourceError>>()?;

        Ok(PageResult {
            sentiment_result,
            total_pages: total.div_ceil(PAGE_SIZE),
            current_page: page,
        })
    }

    async fn try_top_negative_words(&self) -> Result<WordFrequencyTable, SourceError> {
        let tweets = self.store.find_all().await?;

        let mut tally = WordTally::default();
        let mut contributing = 0_usize;
        for tweet in &tweets {
            let result = self.scorer.score(&tweet.translated)?;
            if result.score <= NEGATIVE_WORD_THRESHOLD {
                contributing += 1;
                for word in &result.negative {
                    tally.record(word);
                }
            }
        }

        let table = tally.into_top(TOP_NEGATIVE_WORDS);
        tracing::debug!(
            scanned = tweets.len(),
            contributing,
            words = table.len(),
            "negative word ranking computed"
        );
        Ok(table)
    }
}

/// Values below 1, or no value at all, mean the first page.
#[must_use]
pub fn normalize_page(page: Option<i64>) -> u64 {
    page.and_then(|p| u64::try_from(p).ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}
