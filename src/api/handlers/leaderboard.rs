use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::leaderboard;
use crate::models::{LeaderboardEntry, Metric, Period, UserRankings};
use crate::AppState;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<i64>,
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path((period, metric)): Path<(String, String)>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let period = Period::from_api_str(&period)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid period: {period}")))?;
    let metric = Metric::from_api_str(&metric)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid metric: {metric}")))?;

    let limit = params
        .limit
        .unwrap_or(leaderboard::DEFAULT_READ_LIMIT)
        .clamp(1, leaderboard::DEFAULT_CALC_LIMIT);

    let entries = leaderboard::get_leaderboard(&state.db, period, metric, limit).await?;

    Ok(Json(entries))
}

pub async fn recalculate_all(State(state): State<AppState>) -> Json<Value> {
    let calculated = leaderboard::calculate_all_leaderboards(&state.db).await;

    Json(json!({ "calculated": calculated }))
}

pub async fn user_rankings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRankings>, AppError> {
    let rankings = leaderboard::get_user_rankings(&state.db, &user_id).await?;

    Ok(Json(rankings))
}
