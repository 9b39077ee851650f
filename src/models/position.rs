use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for the positions table. Written by position sync;
/// read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Position {
    pub id: String,
    pub user_id: String,
    pub market_id: String,
    pub outcome: String,
    pub size: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Position {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    pub fn is_closed(&self) -> bool {
        self.status == "closed"
    }
}
