//! Sentiment reports over stored tweets.
//!
//! Scores each tweet's translated text with an AFINN-style lexicon and reduces
//! the results into label counts, labelled pages and a ranked negative-word table.

pub mod aggregator;
pub mod error;
pub mod scorer;
pub mod types;

mod frequency;
mod lexicon;

pub use aggregator::{
    normalize_page, SentimentAggregator, NEGATIVE_WORD_THRESHOLD, PAGE_SIZE, SUMMARY_LIMIT,
    TOP_NEGATIVE_WORDS,
};
pub use error::AggregationError;
pub use frequency::WordFrequencyTable;
pub use scorer::{LexiconScorer, ScoreError, ScoreResult, SentimentScorer};
pub use types::{EnrichedTweet, PageResult, SentimentCounts};
