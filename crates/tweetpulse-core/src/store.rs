//! Read interface over the tweet collection.

use async_trait::async_trait;
use thiserror::Error;

use crate::tweet::Tweet;

/// An offset-based slice of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    /// Slice for a 1-based page number.
    ///
    /// The offset saturates instead of overflowing for absurd page numbers, which
    /// simply lands past the end of the collection.
    #[must_use]
    pub fn numbered(page: u64, page_size: u64) -> Self {
        Self {
            offset: page_size.saturating_mul(page.saturating_sub(1)),
            limit: page_size,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("tweet store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("malformed tweet document: {0}")]
    Malformed(String),
}

/// Read-only access to stored tweets.
///
/// Order is whatever the backend's natural cursor order is; no method sorts.
#[async_trait]
pub trait TweetStore: Send + Sync {
    /// At most `limit` tweets.
    async fn find_limited(&self, limit: u64) -> Result<Vec<Tweet>, StoreError>;

    /// The tweets inside `page`. A page past the end is empty, not an error.
    async fn find_page(&self, page: Page) -> Result<Vec<Tweet>, StoreError>;

    /// Every tweet in the collection.
    async fn find_all(&self) -> Result<Vec<Tweet>, StoreError>;

    async fn count_all(&self) -> Result<u64, StoreError>;

    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
