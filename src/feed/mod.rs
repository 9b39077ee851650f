use chrono::{Duration, Utc};
use metrics::counter;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::feed_repo::{self, FeedFilter};
use crate::db::{badge_repo, follow_repo};
use crate::models::{FeedEvent, FeedEventType, FeedPage, Position};

/// Streak lengths worth announcing on the feed.
pub const NOTABLE_STREAKS: [i64; 7] = [3, 5, 7, 10, 15, 20, 30];

pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Append one activity record. The lifecycle hooks below wrap this and
/// swallow failures; direct callers get the error.
pub async fn record_feed_event(
    pool: &SqlitePool,
    event_type: FeedEventType,
    user_id: &str,
    payload: Value,
    market_id: Option<&str>,
) -> anyhow::Result<FeedEvent> {
    let event =
        feed_repo::insert_event(pool, event_type.as_str(), user_id, market_id, &payload).await?;

    counter!("feed_events_total").increment(1);
    tracing::info!(event_type = %event_type, user_id, "Feed event recorded");

    Ok(event)
}

/// Position-opened hook, invoked by the position-sync collaborator.
/// Classifies against the whale threshold on entry value. Never fails the
/// caller: feed writes are best-effort.
pub async fn on_position_opened(pool: &SqlitePool, position: &Position, whale_threshold: f64) {
    let value = position.size * position.avg_price;

    let (event_type, payload) = if value >= whale_threshold {
        (
            FeedEventType::WhaleTrade,
            json!({
                "position_id": position.id,
                "outcome": position.outcome,
                "size": position.size,
                "price": position.avg_price,
                "value": value,
                "action": "opened",
            }),
        )
    } else {
        (
            FeedEventType::PositionOpened,
            json!({
                "position_id": position.id,
                "outcome": position.outcome,
                "size": position.size,
                "price": position.avg_price,
                "value": value,
            }),
        )
    };

    if let Err(e) = record_feed_event(
        pool,
        event_type,
        &position.user_id,
        payload,
        Some(&position.market_id),
    )
    .await
    {
        tracing::warn!(
            error = %e,
            position_id = %position.id,
            "Failed to record position-opened feed event"
        );
    }
}

/// Position-closed hook. Classifies on exit value (size * current price)
/// and carries the realized pnl in the payload.
pub async fn on_position_closed(pool: &SqlitePool, position: &Position, whale_threshold: f64) {
    let value = position.size * position.current_price;
    let pnl = position.realized_pnl;

    let (event_type, payload) = if value >= whale_threshold {
        (
            FeedEventType::WhaleTrade,
            json!({
                "position_id": position.id,
                "outcome": position.outcome,
                "size": position.size,
                "price": position.current_price,
                "value": value,
                "pnl": pnl,
                "action": "closed",
            }),
        )
    } else {
        (
            FeedEventType::PositionClosed,
            json!({
                "position_id": position.id,
                "outcome": position.outcome,
                "size": position.size,
                "price": position.current_price,
                "value": value,
                "pnl": pnl,
            }),
        )
    };

    if let Err(e) = record_feed_event(
        pool,
        event_type,
        &position.user_id,
        payload,
        Some(&position.market_id),
    )
    .await
    {
        tracing::warn!(
            error = %e,
            position_id = %position.id,
            "Failed to record position-closed feed event"
        );
    }
}

/// Streak hook, invoked by the stats aggregator on every recompute with a
/// positive streak. Only notable values produce an event; a stable notable
/// streak therefore announces again on each recompute.
pub async fn on_streak_achieved(pool: &SqlitePool, user_id: &str, streak: i64) {
    if !NOTABLE_STREAKS.contains(&streak) {
        return;
    }

    if let Err(e) = record_feed_event(
        pool,
        FeedEventType::StreakAchieved,
        user_id,
        json!({ "streak": streak }),
        None,
    )
    .await
    {
        tracing::warn!(error = %e, user_id, streak, "Failed to record streak feed event");
    }
}

/// Badge hook. An unknown badge id is a silent no-op, not an error.
pub async fn on_badge_earned(pool: &SqlitePool, user_id: &str, badge_id: &str) {
    let badge = match badge_repo::get_badge(pool, badge_id).await {
        Ok(Some(badge)) => badge,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(error = %e, badge_id, "Badge lookup failed");
            return;
        }
    };

    if let Err(e) = record_feed_event(
        pool,
        FeedEventType::BadgeEarned,
        user_id,
        json!({
            "badge_id": badge.id,
            "badge_name": badge.name,
            "badge_description": badge.description,
        }),
        None,
    )
    .await
    {
        tracing::warn!(error = %e, user_id, badge_id, "Failed to record badge feed event");
    }
}

/// Feed query filters; all present conditions apply conjunctively.
/// `following_of` resolves to the followed-user set and takes precedence
/// over `user_id`.
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub user_id: Option<String>,
    pub following_of: Option<String>,
    pub market_id: Option<String>,
    pub event_type: Option<FeedEventType>,
}

/// Paginated feed read, newest first.
pub async fn get_feed(
    pool: &SqlitePool,
    query: &FeedQuery,
    page: i64,
    limit: i64,
) -> anyhow::Result<FeedPage> {
    let page = page.max(1);
    let limit = limit.max(1);

    let mut user_ids: Option<Vec<String>> = query.user_id.clone().map(|u| vec![u]);

    if let Some(follower) = &query.following_of {
        let following = follow_repo::get_following_ids(pool, follower).await?;
        if following.is_empty() {
            // Following nobody means an empty personal feed, not the
            // unfiltered global one.
            return Ok(FeedPage::empty(page, limit));
        }
        user_ids = Some(following);
    }

    let filter = FeedFilter {
        user_ids,
        market_id: query.market_id.clone(),
        event_type: query.event_type.map(|t| t.as_str().to_string()),
    };

    let offset = (page - 1) * limit;
    let events = feed_repo::query_events(pool, &filter, limit, offset).await?;
    let total = feed_repo::count_events(pool, &filter).await?;

    let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

    Ok(FeedPage {
        events,
        total,
        page,
        limit,
        total_pages,
    })
}

/// Retention cleanup: delete events older than `days_to_keep` days.
/// An explicit maintenance operation — never triggered by reads or writes.
pub async fn cleanup_old_events(pool: &SqlitePool, days_to_keep: i64) -> anyhow::Result<u64> {
    let cutoff = Utc::now() - Duration::days(days_to_keep);
    let deleted = feed_repo::delete_older_than(pool, cutoff).await?;

    tracing::info!(deleted, days_to_keep, "Feed retention cleanup complete");

    Ok(deleted)
}
