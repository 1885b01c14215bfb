use serde::Serialize;
use tweetpulse_core::{SentimentLabel, Tweet};

/// Label counts over a batch of scored tweets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentCounts {
    pub(crate) fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Number of tweets counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}

/// A stored tweet plus its computed label.
///
/// Serializes flat: every tweet field, then `sentiment` and `negativeWords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedTweet {
    #[serde(flatten)]
    pub tweet: Tweet,
    pub sentiment: SentimentLabel,
    /// Matched negative words; always empty unless `sentiment` is negative.
    #[serde(rename = "negativeWords")]
    pub negative_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub sentiment_result: Vec<EnrichedTweet>,
    pub total_pages: u64,
    pub current_page: u64,
}
