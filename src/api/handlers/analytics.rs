use axum::extract::{Path, State};
use axum::Json;

use crate::analytics;
use crate::db::stats_repo;
use crate::errors::AppError;
use crate::models::{UserStats, UserStatsSnapshot};
use crate::AppState;

/// Materialized stats for a user. A user the aggregator has never written
/// is reported as not-found — absence and zero are different things.
pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserStats>, AppError> {
    let stats = stats_repo::get_stats(&state.db, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No stats for user {user_id}")))?;

    Ok(Json(stats))
}

/// Force a synchronous recompute. Responds with the fresh snapshot, or
/// null when the user has no activity to compute from.
pub async fn recompute(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<UserStatsSnapshot>>, AppError> {
    let snapshot = analytics::recompute_stats(&state.db, &user_id).await?;

    Ok(Json(snapshot))
}
