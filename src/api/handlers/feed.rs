use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::feed::{self, FeedQuery};
use crate::models::{FeedEvent, FeedEventType, FeedPage};
use crate::AppState;

#[derive(Deserialize)]
pub struct FeedParams {
    pub user_id: Option<String>,
    pub following_of: Option<String>,
    pub market_id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedPage>, AppError> {
    let event_type = params
        .event_type
        .as_deref()
        .map(|raw| {
            FeedEventType::from_api_str(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid feed event type: {raw}")))
        })
        .transpose()?;

    let query = FeedQuery {
        user_id: params.user_id,
        following_of: params.following_of,
        market_id: params.market_id,
        event_type,
    };

    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(feed::DEFAULT_PAGE_SIZE).clamp(1, 100);

    let feed_page = feed::get_feed(&state.db, &query, page, limit).await?;

    Ok(Json(feed_page))
}

#[derive(Deserialize)]
pub struct RecordEventBody {
    #[serde(rename = "type")]
    pub event_type: String,
    pub user_id: String,
    pub market_id: Option<String>,
    pub payload: Option<Value>,
}

pub async fn record(
    State(state): State<AppState>,
    Json(body): Json<RecordEventBody>,
) -> Result<Json<FeedEvent>, AppError> {
    let event_type = FeedEventType::from_api_str(&body.event_type).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid feed event type: {}", body.event_type))
    })?;

    let payload = body.payload.unwrap_or_else(|| json!({}));

    let event = feed::record_feed_event(
        &state.db,
        event_type,
        &body.user_id,
        payload,
        body.market_id.as_deref(),
    )
    .await?;

    Ok(Json(event))
}

#[derive(Deserialize)]
pub struct CleanupParams {
    pub days: Option<i64>,
}

pub async fn cleanup(
    State(state): State<AppState>,
    Query(params): Query<CleanupParams>,
) -> Result<Json<Value>, AppError> {
    let days = params.days.unwrap_or(state.config.feed_retention_days);
    let deleted = feed::cleanup_old_events(&state.db, days).await?;

    Ok(Json(json!({ "deleted": deleted })))
}
