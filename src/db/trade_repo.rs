use sqlx::SqlitePool;

use crate::models::TradeEvent;

/// Get a user's full trade history, oldest first.
pub async fn get_trades_by_user(
    pool: &SqlitePool,
    user_id: &str,
) -> anyhow::Result<Vec<TradeEvent>> {
    let trades = sqlx::query_as::<_, TradeEvent>(
        "SELECT * FROM trade_events WHERE user_id = ? ORDER BY occurred_at ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(trades)
}

/// Count trade events for a user.
pub async fn count_trades(pool: &SqlitePool, user_id: &str) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trade_events WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
