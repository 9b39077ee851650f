use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{UserStats, UserStatsSnapshot};

/// Replace the user's stats row with a fresh snapshot. A single upsert
/// statement, so a concurrent recompute can never leave a partial merge
/// of two computations.
pub async fn upsert_stats(
    pool: &SqlitePool,
    user_id: &str,
    snapshot: &UserStatsSnapshot,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_stats
            (user_id, total_pnl, roi, win_rate, accuracy, avg_position_size,
             trading_streak, total_trades, total_volume, active_markets, last_updated)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            total_pnl = excluded.total_pnl,
            roi = excluded.roi,
            win_rate = excluded.win_rate,
            accuracy = excluded.accuracy,
            avg_position_size = excluded.avg_position_size,
            trading_streak = excluded.trading_streak,
            total_trades = excluded.total_trades,
            total_volume = excluded.total_volume,
            active_markets = excluded.active_markets,
            last_updated = excluded.last_updated
        "#,
    )
    .bind(user_id)
    .bind(snapshot.total_pnl)
    .bind(snapshot.roi)
    .bind(snapshot.win_rate)
    .bind(snapshot.accuracy)
    .bind(snapshot.avg_position_size)
    .bind(snapshot.trading_streak)
    .bind(snapshot.total_trades)
    .bind(snapshot.total_volume)
    .bind(snapshot.active_markets)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the materialized stats row for a user, if one has ever been computed.
pub async fn get_stats(pool: &SqlitePool, user_id: &str) -> anyhow::Result<Option<UserStats>> {
    let stats = sqlx::query_as::<_, UserStats>("SELECT * FROM user_stats WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(stats)
}

/// Every user id with at least one position or trade event — the set the
/// bulk analytics refresh iterates.
pub async fn get_users_with_activity(pool: &SqlitePool) -> anyhow::Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT user_id FROM positions
        UNION
        SELECT DISTINCT user_id FROM trade_events
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}
