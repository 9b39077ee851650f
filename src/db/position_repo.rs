use sqlx::SqlitePool;

use crate::models::Position;

/// Get every position (active and closed) for a user, newest first.
pub async fn get_positions_by_user(
    pool: &SqlitePool,
    user_id: &str,
) -> anyhow::Result<Vec<Position>> {
    let positions = sqlx::query_as::<_, Position>(
        "SELECT * FROM positions WHERE user_id = ? ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(positions)
}

/// Count a user's active positions.
pub async fn count_active_positions(pool: &SqlitePool, user_id: &str) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM positions WHERE user_id = ? AND status = 'active'",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}
