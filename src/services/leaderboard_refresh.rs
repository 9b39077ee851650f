use sqlx::SqlitePool;
use tokio::time::{interval, Duration};

use crate::leaderboard;

/// Run the periodic leaderboard recalculation loop. Each pass reranks the
/// full period x metric cross product; partial failures are already
/// isolated inside the batch call.
pub async fn run_leaderboard_refresh(pool: SqlitePool, interval_secs: u64) {
    tracing::info!(interval_secs, "Leaderboard refresh started");

    let mut ticker = interval(Duration::from_secs(interval_secs));

    loop {
        ticker.tick().await;

        let calculated = leaderboard::calculate_all_leaderboards(&pool).await;
        tracing::info!(calculated, "Leaderboard refresh pass complete");
    }
}
