use metrics::counter;
use sqlx::SqlitePool;

use crate::db::{position_repo, stats_repo, trade_repo};
use crate::feed;
use crate::models::{Position, TradeEvent, UserStatsSnapshot};

use super::streak;

/// Recompute and persist a user's statistics from their full position and
/// trade history.
///
/// Returns `Ok(None)` without writing anything when the user has no
/// positions and no trades — a user who has never traded must stay absent
/// from the stats store rather than appear as all zeros.
pub async fn recompute_stats(
    pool: &SqlitePool,
    user_id: &str,
) -> anyhow::Result<Option<UserStatsSnapshot>> {
    let positions = position_repo::get_positions_by_user(pool, user_id).await?;
    let trades = trade_repo::get_trades_by_user(pool, user_id).await?;

    if positions.is_empty() && trades.is_empty() {
        tracing::debug!(user_id, "No positions or trades — skipping stats write");
        return Ok(None);
    }

    let snapshot = compute_snapshot(&positions, &trades);

    stats_repo::upsert_stats(pool, user_id, &snapshot).await?;
    counter!("stats_recomputes_total").increment(1);

    tracing::info!(
        user_id,
        total_pnl = snapshot.total_pnl,
        total_trades = snapshot.total_trades,
        streak = snapshot.trading_streak,
        "User stats updated"
    );

    // Streak announcements are best-effort; the emitter filters down to
    // notable values and swallows its own failures.
    if snapshot.trading_streak > 0 {
        feed::on_streak_achieved(pool, user_id, snapshot.trading_streak).await;
    }

    Ok(Some(snapshot))
}

/// Pure derivation of the stats snapshot from position and trade sets.
fn compute_snapshot(positions: &[Position], trades: &[TradeEvent]) -> UserStatsSnapshot {
    let total_pnl: f64 = positions
        .iter()
        .map(|p| p.unrealized_pnl + p.realized_pnl)
        .sum();

    let total_volume: f64 = trades.iter().map(|t| t.value()).sum();

    let total_invested: f64 = positions.iter().map(|p| p.size * p.avg_price).sum();

    let roi = if total_invested > 0.0 {
        total_pnl / total_invested * 100.0
    } else {
        0.0
    };

    let closed_count = positions.iter().filter(|p| p.is_closed()).count();
    let winning_count = positions
        .iter()
        .filter(|p| p.is_closed() && p.realized_pnl > 0.0)
        .count();

    let win_rate = if closed_count > 0 {
        winning_count as f64 / closed_count as f64 * 100.0
    } else {
        0.0
    };

    // Accuracy is the closed-position win rate for now.
    let accuracy = win_rate;

    let avg_position_size = if positions.is_empty() {
        0.0
    } else {
        total_invested / positions.len() as f64
    };

    let trading_streak = streak::winning_day_streak(trades);

    let active_markets = positions.iter().filter(|p| p.is_active()).count() as i64;

    UserStatsSnapshot {
        total_pnl,
        roi,
        win_rate,
        accuracy,
        avg_position_size,
        trading_streak,
        total_trades: trades.len() as i64,
        total_volume,
        active_markets,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
