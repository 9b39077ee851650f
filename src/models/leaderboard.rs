use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

/// Ranking time window. `daily` and `weekly` currently rank the same
/// unwindowed stats snapshot as `all_time`; the distinction is kept for
/// the cache key and API shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    AllTime,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::AllTime];

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "all_time" => Some(Period::AllTime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::AllTime => "all_time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// Ranking sort dimension, each mapped to one user_stats column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Pnl,
    Roi,
    Accuracy,
    Streak,
    Volume,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Pnl,
        Metric::Roi,
        Metric::Accuracy,
        Metric::Streak,
        Metric::Volume,
    ];

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "pnl" => Some(Metric::Pnl),
            "roi" => Some(Metric::Roi),
            "accuracy" => Some(Metric::Accuracy),
            "streak" => Some(Metric::Streak),
            "volume" => Some(Metric::Volume),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Pnl => "pnl",
            Metric::Roi => "roi",
            Metric::Accuracy => "accuracy",
            Metric::Streak => "streak",
            Metric::Volume => "volume",
        }
    }

    /// The user_stats column this metric ranks by.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Pnl => "total_pnl",
            Metric::Roi => "roi",
            Metric::Accuracy => "accuracy",
            Metric::Streak => "trading_streak",
            Metric::Volume => "total_volume",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Cache rows
// ---------------------------------------------------------------------------

/// Database row for the leaderboard_cache table. Ranks are a dense 1..N
/// sequence within each (period, metric) partition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub period: String,
    pub metric: String,
    pub rank: i64,
    pub user_id: String,
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

/// One cached rank for a user, as returned by the rankings lookup.
#[derive(Debug, Clone, Serialize)]
pub struct RankCell {
    pub rank: i64,
    pub value: f64,
    pub updated_at: DateTime<Utc>,
}

/// period -> metric -> cached rank. Pairs the user does not appear in
/// are simply absent.
pub type UserRankings = BTreeMap<String, BTreeMap<String, RankCell>>;
