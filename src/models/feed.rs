use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use std::fmt;

// ---------------------------------------------------------------------------
// FeedEventType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedEventType {
    PositionOpened,
    PositionClosed,
    StreakAchieved,
    WhaleTrade,
    BadgeEarned,
}

impl FeedEventType {
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "position_opened" => Some(FeedEventType::PositionOpened),
            "position_closed" => Some(FeedEventType::PositionClosed),
            "streak_achieved" => Some(FeedEventType::StreakAchieved),
            "whale_trade" => Some(FeedEventType::WhaleTrade),
            "badge_earned" => Some(FeedEventType::BadgeEarned),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedEventType::PositionOpened => "position_opened",
            FeedEventType::PositionClosed => "position_closed",
            FeedEventType::StreakAchieved => "streak_achieved",
            FeedEventType::WhaleTrade => "whale_trade",
            FeedEventType::BadgeEarned => "badge_earned",
        }
    }
}

impl fmt::Display for FeedEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// Database row for the feed_events table. Append-only; deleted only by
/// the retention cleanup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedEvent {
    pub id: String,
    pub event_type: String,
    pub user_id: String,
    pub market_id: Option<String>,
    pub payload: Json<Value>,
    pub created_at: DateTime<Utc>,
}

/// One page of feed events plus pagination totals.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub events: Vec<FeedEvent>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl FeedPage {
    pub fn empty(page: i64, limit: i64) -> Self {
        Self {
            events: Vec::new(),
            total: 0,
            page,
            limit,
            total_pages: 0,
        }
    }
}
