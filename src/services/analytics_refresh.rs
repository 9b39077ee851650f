use sqlx::SqlitePool;
use tokio::time::{interval, Duration};

use crate::analytics;
use crate::db::stats_repo;

/// Run the bulk analytics refresh loop. Every `interval_secs`, recompute
/// stats for every user with any position or trade history. A failure for
/// one user never stops the pass.
pub async fn run_analytics_refresh(pool: SqlitePool, interval_secs: u64) {
    tracing::info!(interval_secs, "Analytics refresh started");

    let mut ticker = interval(Duration::from_secs(interval_secs));

    loop {
        ticker.tick().await;

        let users = match stats_repo::get_users_with_activity(&pool).await {
            Ok(u) => u,
            Err(e) => {
                tracing::error!(error = %e, "Analytics refresh: failed to enumerate users");
                continue;
            }
        };

        if users.is_empty() {
            tracing::debug!("Analytics refresh: no users with activity");
            continue;
        }

        let mut updated = 0usize;
        for user_id in &users {
            match analytics::recompute_stats(&pool, user_id).await {
                Ok(_) => updated += 1,
                Err(e) => {
                    tracing::error!(error = %e, user_id = %user_id, "Stats recompute failed");
                }
            }
        }

        tracing::info!(updated, total = users.len(), "Analytics refresh pass complete");
    }
}
