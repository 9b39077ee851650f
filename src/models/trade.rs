use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Side;

/// Database row for the trade_events table. One immutable record per
/// observed fill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TradeEvent {
    pub id: String,
    pub user_id: String,
    pub market_id: String,
    pub side: String,
    pub outcome: String,
    pub size: f64,
    pub price: f64,
    pub tx_hash: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl TradeEvent {
    /// Notional value of the fill.
    pub fn value(&self) -> f64 {
        self.size * self.price
    }

    pub fn is_sell(&self) -> bool {
        Side::from_api_str(&self.side) == Some(Side::Sell)
    }
}
