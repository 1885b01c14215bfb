//! MongoDB-backed tweet store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};
use tweetpulse_core::{Page, StoreError, Tweet, TweetStore};

use crate::DbError;

/// Top-level keys of a stored tweet that map onto [`TweetDocument`] fields.
const KNOWN_FIELDS: &[&str] = &[
    "_id",
    "conversation_id",
    "date",
    "time",
    "user_id",
    "username",
    "tweet",
    "mentions",
    "replies_count",
    "retweets_count",
    "likes_count",
    "hashtags",
    "translated",
];

/// A tweet document exactly as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub conversation_id: String,
    pub date: mongodb::bson::DateTime,
    pub time: String,
    pub user_id: String,
    pub username: String,
    pub tweet: String,
    #[serde(default)]
    pub mentions: Vec<String>,
    #[serde(default)]
    pub replies_count: i64,
    #[serde(default)]
    pub retweets_count: i64,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub translated: String,
    /// Every other top-level key, filled by [`TweetDocument::from_stored`].
    #[serde(skip)]
    pub extra: Document,
}

impl TweetDocument {
    /// Parse a raw stored document, keeping keys outside the schema in `extra`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] if a known field has the wrong type or a
    /// required one is missing.
    pub fn from_stored(raw: Document) -> Result<Self, StoreError> {
        let mut parsed: TweetDocument = mongodb::bson::from_document(raw.clone())
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        let mut extra = raw;
        for key in KNOWN_FIELDS {
            extra.remove(*key);
        }
        parsed.extra = extra;
        Ok(parsed)
    }
}

impl TryFrom<TweetDocument> for Tweet {
    type Error = StoreError;

    fn try_from(doc: TweetDocument) -> Result<Self, Self::Error> {
        let millis = doc.date.timestamp_millis();
        let date: DateTime<Utc> = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            StoreError::Malformed(format!("tweet {} has out-of-range date {millis}", doc.id))
        })?;

        Ok(Tweet {
            id: doc.id.to_hex(),
            conversation_id: doc.conversation_id,
            date,
            time: doc.time,
            user_id: doc.user_id,
            username: doc.username,
            tweet: doc.tweet,
            mentions: doc.mentions,
            replies_count: doc.replies_count,
            retweets_count: doc.retweets_count,
            likes_count: doc.likes_count,
            hashtags: doc.hashtags,
            translated: doc.translated,
            extra: doc
                .extra
                .into_iter()
                .map(|(key, value)| (key, value.into_relaxed_extjson()))
                .collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MongoTweetStore {
    database: Database,
    tweets: Collection<TweetDocument>,
}

impl MongoTweetStore {
    #[must_use]
    pub fn new(client: &Client, database_name: &str, collection_name: &str) -> Self {
        let database = client.database(database_name);
        let tweets = database.collection::<TweetDocument>(collection_name);
        Self { database, tweets }
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    async fn collect(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Tweet>, StoreError> {
        let raw = self.tweets.clone_with_type::<Document>();
        let mut find = raw.find(doc! {});
        if let Some(skip) = skip {
            find = find.skip(skip);
        }
        if let Some(limit) = limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let docs: Vec<Document> = find
            .await
            .map_err(DbError::from)?
            .try_collect()
            .await
            .map_err(DbError::from)?;

        docs.into_iter()
            .map(|raw| TweetDocument::from_stored(raw).and_then(Tweet::try_from))
            .collect()
    }
}

/// Skip and limit the driver can encode for `page`, or `None` when the page
/// cannot contain any document.
///
/// The server stores `skip` as a signed 64-bit integer, so any offset above
/// `i64::MAX` lies past every collection and is answered without a query.
/// A zero limit would mean "no limit" to the driver.
fn driver_window(page: Page) -> Option<(u64, u64)> {
    if page.limit == 0 {
        return None;
    }
    if i64::try_from(page.offset).is_err() {
        return None;
    }
    Some((page.offset, page.limit))
}

#[async_trait]
impl TweetStore for MongoTweetStore {
    async fn find_limited(&self, limit: u64) -> Result<Vec<Tweet>, StoreError> {
        // The driver treats a limit of 0 as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.collect(None, Some(limit)).await
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Tweet>, StoreError> {
        let Some((skip, limit)) = driver_window(page) else {
            return Ok(Vec::new());
        };
        self.collect(Some(skip), Some(limit)).await
    }

    async fn find_all(&self) -> Result<Vec<Tweet>, StoreError> {
        self.collect(None, None).await
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        let count = self
            .tweets
            .count_documents(doc! {})
            .await
            .map_err(DbError::from)?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(self).await?;
        Ok(())
    }
}
