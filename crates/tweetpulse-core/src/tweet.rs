use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A tweet as held in the tweet store.
///
/// Records are created and updated outside this system; everything here is
/// read-only. Field names match the stored document so the JSON the API emits
/// looks like the documents in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    /// Store-assigned identifier, rendered as a hex string.
    #[serde(rename = "_id")]
    pub id: String,
    pub conversation_id: String,
    /// Emitted with millisecond precision, e.g. `2023-07-19T07:02:11.000Z`.
    #[serde(serialize_with = "serialize_millis")]
    pub date: DateTime<Utc>,
    /// Wall-clock time of the tweet as captured by the scraper, e.g. `"14:02:11"`.
    pub time: String,
    pub user_id: String,
    pub username: String,
    /// Original tweet body.
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
    /// English translation of `tweet`. This is the text that gets scored.
    #[serde(default)]
    pub translated: String,
    /// Stored fields outside the ones above (the `__v` version key, fields added
    /// by other writers). Passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn serialize_millis<S: Serializer>(
    date: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Categorical sentiment derived from the sign of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// `> 0` is positive, `< 0` is negative, zero is neutral.
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        match score.signum() {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
