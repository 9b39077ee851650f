use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for the user_stats table. One row per user, fully
/// replaced on each recompute.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserStats {
    pub user_id: String,
    pub total_pnl: f64,
    pub roi: f64,
    pub win_rate: f64,
    pub accuracy: f64,
    pub avg_position_size: f64,
    pub trading_streak: i64,
    pub total_trades: i64,
    pub total_volume: f64,
    pub active_markets: i64,
    pub last_updated: DateTime<Utc>,
}

/// Freshly computed statistics, before being written to the store.
/// A pure function of the user's positions and trades at compute time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStatsSnapshot {
    pub total_pnl: f64,
    pub roi: f64,
    pub win_rate: f64,
    pub accuracy: f64,
    pub avg_position_size: f64,
    pub trading_streak: i64,
    pub total_trades: i64,
    pub total_volume: f64,
    pub active_markets: i64,
}
