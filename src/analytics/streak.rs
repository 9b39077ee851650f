use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::TradeEvent;

/// Consecutive most-recent trading days with strictly positive day PnL.
///
/// Day PnL is a cash-flow proxy: each sell contributes +size*price, each
/// buy contributes -size*price, grouped by the UTC calendar date of the
/// fill. The walk starts at the latest trading day and stops at the first
/// day at or below zero. Days without trades are not counted and do not
/// break the streak.
pub fn winning_day_streak(trades: &[TradeEvent]) -> i64 {
    if trades.is_empty() {
        return 0;
    }

    let mut pnl_by_day: HashMap<NaiveDate, f64> = HashMap::new();
    for trade in trades {
        let day = trade.occurred_at.date_naive();
        let value = trade.value();
        let delta = if trade.is_sell() { value } else { -value };
        *pnl_by_day.entry(day).or_insert(0.0) += delta;
    }

    let mut days: Vec<NaiveDate> = pnl_by_day.keys().copied().collect();
    days.sort_unstable();

    let mut streak = 0;
    for day in days.iter().rev() {
        if pnl_by_day[day] > 0.0 {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn make_trade(side: &str, size: f64, price: f64, days_ago: i64) -> TradeEvent {
        TradeEvent {
            id: format!("trade_{side}_{days_ago}"),
            user_id: "user_1".into(),
            market_id: "market_1".into(),
            side: side.into(),
            outcome: "YES".into(),
            size,
            price,
            tx_hash: None,
            occurred_at: Utc::now() - Duration::days(days_ago),
        }
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(winning_day_streak(&[]), 0);
    }

    #[test]
    fn test_streak_breaks_at_first_losing_day() {
        // Day PnL, most recent first: +50, +20, -10, +5
        let trades = vec![
            make_trade("sell", 50.0, 1.0, 0),
            make_trade("sell", 20.0, 1.0, 1),
            make_trade("buy", 10.0, 1.0, 2),
            make_trade("sell", 5.0, 1.0, 3),
        ];

        assert_eq!(winning_day_streak(&trades), 2);
    }

    #[test]
    fn test_single_winning_day() {
        let trades = vec![make_trade("sell", 100.0, 0.5, 0)];
        assert_eq!(winning_day_streak(&trades), 1);
    }

    #[test]
    fn test_gap_days_do_not_break_streak() {
        // Winning days at 0, 3 and 10 days ago — no trades in between.
        let trades = vec![
            make_trade("sell", 10.0, 1.0, 0),
            make_trade("sell", 10.0, 1.0, 3),
            make_trade("sell", 10.0, 1.0, 10),
        ];

        assert_eq!(winning_day_streak(&trades), 3);
    }

    #[test]
    fn test_mixed_trades_net_per_day() {
        // Same day: sell 30, buy 10 → day PnL +20. Previous day: buy only.
        let trades = vec![
            make_trade("sell", 30.0, 1.0, 0),
            make_trade("buy", 10.0, 1.0, 0),
            make_trade("buy", 5.0, 1.0, 1),
        ];

        assert_eq!(winning_day_streak(&trades), 1);
    }

    #[test]
    fn test_latest_day_nonpositive() {
        let trades = vec![
            make_trade("buy", 50.0, 1.0, 0),
            make_trade("sell", 80.0, 1.0, 1),
        ];

        assert_eq!(winning_day_streak(&trades), 0);
    }
}
