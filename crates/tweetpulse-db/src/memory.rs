//! In-memory tweet store backed by a `Vec`, used for fixtures and offline runs.

use std::path::Path;

use async_trait::async_trait;
use tweetpulse_core::{Page, StoreError, Tweet, TweetStore};

use crate::DbError;

/// Tweets held in insertion order, which is also the cursor order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTweetStore {
    tweets: Vec<Tweet>,
}

impl MemoryTweetStore {
    #[must_use]
    pub fn new(tweets: Vec<Tweet>) -> Self {
        Self { tweets }
    }

    /// Load a JSON array of tweets from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::FixtureIo`] if the file cannot be read or
    /// [`DbError::FixtureParse`] if it is not a JSON array of tweets.
    pub async fn from_fixture(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let tweets: Vec<Tweet> = serde_json::from_slice(&bytes)?;
        tracing::info!(path = %path.display(), count = tweets.len(), "loaded tweet fixture");
        Ok(Self::new(tweets))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    fn slice(&self, offset: u64, limit: u64) -> Vec<Tweet> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.tweets.iter().skip(offset).take(limit).cloned().collect()
    }
}

#[async_trait]
impl TweetStore for MemoryTweetStore {
    async fn find_limited(&self, limit: u64) -> Result<Vec<Tweet>, StoreError> {
        Ok(self.slice(0, limit))
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Tweet>, StoreError> {
        Ok(self.slice(page.offset, page.limit))
    }

    async fn find_all(&self) -> Result<Vec<Tweet>, StoreError> {
        Ok(self.tweets.clone())
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(u64::try_from(self.tweets.len()).unwrap_or(u64::MAX))
    }
}
