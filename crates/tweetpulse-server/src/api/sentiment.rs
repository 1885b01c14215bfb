use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tweetpulse_sentiment::{PageResult, SentimentCounts, WordFrequencyTable};

use crate::middleware::RequestId;

use super::{map_aggregation_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SentimentDataQuery {
    /// Kept as text so a non-numeric value falls back to the first page
    /// instead of rejecting the request.
    pub page: Option<String>,
}

impl SentimentDataQuery {
    pub(super) fn page_number(&self) -> Option<i64> {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
    }
}

pub(super) async fn get_sentiment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<SentimentCounts>, ApiError> {
    let counts = state
        .aggregator
        .summarize()
        .await
        .map_err(|e| map_aggregation_error(req_id.0, &e))?;

    Ok(Json(counts))
}

pub(super) async fn get_sentiment_data(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SentimentDataQuery>,
) -> Result<Json<PageResult>, ApiError> {
    let page = state
        .aggregator
        .paginate(query.page_number())
        .await
        .map_err(|e| map_aggregation_error(req_id.0, &e))?;

    Ok(Json(page))
}

pub(super) async fn get_negative_words(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<WordFrequencyTable>, ApiError> {
    let words = state
        .aggregator
        .top_negative_words()
        .await
        .map_err(|e| map_aggregation_error(req_id.0, &e))?;

    Ok(Json(words))
}
