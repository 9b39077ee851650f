use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{LeaderboardEntry, Metric, Period};

/// Qualifying users (at least one trade) ordered by the metric column
/// descending. Ties break on user_id ascending so repeated rankings over
/// unchanged stats are reproducible.
pub async fn top_users_by_metric(
    pool: &SqlitePool,
    metric: Metric,
    limit: i64,
) -> anyhow::Result<Vec<(String, f64)>> {
    let sql = format!(
        r#"
        SELECT user_id, CAST({col} AS REAL) AS value
        FROM user_stats
        WHERE total_trades > 0
        ORDER BY value DESC, user_id ASC
        LIMIT ?
        "#,
        col = metric.column(),
    );

    let rows: Vec<(String, f64)> = sqlx::query_as(&sql).bind(limit).fetch_all(pool).await?;

    Ok(rows)
}

/// Atomically replace the cache partition for one (period, metric) pair:
/// delete-then-insert inside a single transaction, ranks assigned 1..N in
/// the given order.
pub async fn replace_partition(
    pool: &SqlitePool,
    period: Period,
    metric: Metric,
    ranked: &[(String, f64)],
) -> anyhow::Result<usize> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM leaderboard_cache WHERE period = ? AND metric = ?")
        .bind(period.as_str())
        .bind(metric.as_str())
        .execute(&mut *tx)
        .await?;

    for (i, (user_id, value)) in ranked.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO leaderboard_cache (period, metric, rank, user_id, value, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(period.as_str())
        .bind(metric.as_str())
        .bind((i + 1) as i64)
        .bind(user_id)
        .bind(value)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(ranked.len())
}

/// Read the cached partition for a (period, metric) pair, best rank first.
pub async fn get_entries(
    pool: &SqlitePool,
    period: Period,
    metric: Metric,
    limit: i64,
) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let entries = sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        SELECT * FROM leaderboard_cache
        WHERE period = ? AND metric = ?
        ORDER BY rank ASC
        LIMIT ?
        "#,
    )
    .bind(period.as_str())
    .bind(metric.as_str())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Every cached rank a user currently holds, across all partitions.
pub async fn get_entries_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let entries = sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT * FROM leaderboard_cache WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}
