use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client};
use thiserror::Error;
use tweetpulse_core::{AppConfig, StoreError};

pub mod memory;
pub mod mongo;

pub use memory::MemoryTweetStore;
pub use mongo::{MongoTweetStore, TweetDocument};

const DEFAULT_MAX_POOL_SIZE: u32 = 10;
const DEFAULT_MIN_POOL_SIZE: u32 = 1;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATABASE_NAME: &str = "twitter-sentiment";
const DEFAULT_TWEETS_COLLECTION: &str = "tweets";
const APP_NAME: &str = "tweetpulse";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub database_name: String,
    pub tweets_collection: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub server_selection_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            tweets_collection: DEFAULT_TWEETS_COLLECTION.to_string(),
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            database_name: config.database_name.clone(),
            tweets_collection: config.tweets_collection.clone(),
            max_pool_size: config.db_max_pool_size,
            min_pool_size: config.db_min_pool_size,
            server_selection_timeout_secs: config.db_server_selection_timeout_secs,
        }
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("failed to read tweet fixture: {0}")]
    FixtureIo(#[from] std::io::Error),
    #[error("failed to parse tweet fixture: {0}")]
    FixtureParse(#[from] serde_json::Error),
}

impl From<DbError> for StoreError {
    fn from(error: DbError) -> Self {
        StoreError::Backend(Box::new(error))
    }
}

/// Connect to MongoDB and return a store bound to the configured tweet collection.
///
/// The driver connects lazily; a bad URI fails here, an unreachable server
/// fails on the first query (or [`health_check`]).
///
/// # Errors
///
/// Returns [`DbError::Mongo`] if the URI cannot be parsed or the client cannot be built.
pub async fn connect_store(uri: &str, config: &ClientConfig) -> Result<MongoTweetStore, DbError> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    let client = Client::with_options(options)?;
    tracing::debug!(
        database = %config.database_name,
        collection = %config.tweets_collection,
        "mongodb client configured"
    );
    Ok(MongoTweetStore::new(
        &client,
        &config.database_name,
        &config.tweets_collection,
    ))
}

/// Send a `ping` command to verify the deployment is reachable.
///
/// # Errors
///
/// Returns [`DbError::Mongo`] if the command fails.
pub async fn health_check(store: &MongoTweetStore) -> Result<(), DbError> {
    store
        .database()
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}
