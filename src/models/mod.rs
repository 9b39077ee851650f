pub mod badge;
pub mod feed;
pub mod leaderboard;
pub mod position;
pub mod stats;
pub mod trade;

pub use badge::Badge;
pub use feed::{FeedEvent, FeedEventType, FeedPage};
pub use leaderboard::{LeaderboardEntry, Metric, Period, RankCell, UserRankings};
pub use position::Position;
pub use stats::{UserStats, UserStatsSnapshot};
pub use trade::TradeEvent;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
