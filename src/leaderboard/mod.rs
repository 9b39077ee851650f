use std::collections::BTreeMap;

use metrics::{counter, gauge};
use sqlx::SqlitePool;

use crate::db::leaderboard_repo;
use crate::models::{LeaderboardEntry, Metric, Period, RankCell, UserRankings};

/// How many users a recalculation ranks.
pub const DEFAULT_CALC_LIMIT: i64 = 100;
/// How many entries a read returns unless the caller asks otherwise.
pub const DEFAULT_READ_LIMIT: i64 = 50;

/// Rank qualifying users for one (period, metric) pair and atomically
/// replace its cache partition. Returns the number of cached entries.
///
/// All three periods currently rank the same unwindowed stats snapshot;
/// the period only distinguishes cache partitions.
pub async fn calculate_leaderboard(
    pool: &SqlitePool,
    period: Period,
    metric: Metric,
    limit: i64,
) -> anyhow::Result<usize> {
    tracing::info!(period = %period, metric = %metric, "Calculating leaderboard");

    let ranked = leaderboard_repo::top_users_by_metric(pool, metric, limit).await?;
    let count = leaderboard_repo::replace_partition(pool, period, metric, &ranked).await?;

    counter!("leaderboard_calculations_total").increment(1);
    gauge!("ranked_users").set(count as f64);

    tracing::info!(period = %period, metric = %metric, entries = count, "Leaderboard cached");

    Ok(count)
}

/// Recalculate the full 3-period x 5-metric cross product sequentially.
/// A failing pair is logged and skipped; returns the success count.
pub async fn calculate_all_leaderboards(pool: &SqlitePool) -> u32 {
    tracing::info!("Calculating all leaderboards");

    let mut calculated = 0u32;

    for period in Period::ALL {
        for metric in Metric::ALL {
            match calculate_leaderboard(pool, period, metric, DEFAULT_CALC_LIMIT).await {
                Ok(_) => calculated += 1,
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        period = %period,
                        metric = %metric,
                        "Leaderboard calculation failed"
                    );
                }
            }
        }
    }

    tracing::info!(calculated, "Leaderboard batch complete");

    calculated
}

/// Cached leaderboard read with a self-healing miss path: an empty
/// partition triggers one recalculation and one re-read. The second read
/// is returned as-is — empty means no qualifying users, not a stale cache.
pub async fn get_leaderboard(
    pool: &SqlitePool,
    period: Period,
    metric: Metric,
    limit: i64,
) -> anyhow::Result<Vec<LeaderboardEntry>> {
    let cached = leaderboard_repo::get_entries(pool, period, metric, limit).await?;
    if !cached.is_empty() {
        return Ok(cached);
    }

    calculate_leaderboard(pool, period, metric, DEFAULT_CALC_LIMIT).await?;

    leaderboard_repo::get_entries(pool, period, metric, limit).await
}

/// A user's cached ranks across all partitions, grouped period -> metric.
/// Partitions the user is absent from are omitted rather than zero-filled.
pub async fn get_user_rankings(pool: &SqlitePool, user_id: &str) -> anyhow::Result<UserRankings> {
    let entries = leaderboard_repo::get_entries_for_user(pool, user_id).await?;

    let mut grouped: UserRankings = BTreeMap::new();
    for period in Period::ALL {
        grouped.insert(period.as_str().to_string(), BTreeMap::new());
    }

    for entry in entries {
        grouped.entry(entry.period.clone()).or_default().insert(
            entry.metric.clone(),
            RankCell {
                rank: entry.rank,
                value: entry.value,
                updated_at: entry.updated_at,
            },
        );
    }

    Ok(grouped)
}
