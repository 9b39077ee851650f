use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use praxis::models::{Position, TradeEvent};

/// Fresh in-memory database with the full schema applied.
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    praxis::db::init_memory_pool()
        .await
        .expect("Failed to create in-memory test database")
}

/// Seed a position row for testing.
#[allow(dead_code)]
pub async fn seed_position(
    pool: &SqlitePool,
    user_id: &str,
    market_id: &str,
    status: &str,
    size: f64,
    avg_price: f64,
    current_price: f64,
    realized_pnl: f64,
) -> Position {
    let unrealized_pnl = if status == "active" {
        size * (current_price - avg_price)
    } else {
        0.0
    };

    sqlx::query_as::<_, Position>(
        r#"
        INSERT INTO positions
            (id, user_id, market_id, outcome, size, avg_price, current_price,
             unrealized_pnl, realized_pnl, status, created_at, updated_at)
        VALUES (?, ?, ?, 'YES', ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(market_id)
    .bind(size)
    .bind(avg_price)
    .bind(current_price)
    .bind(unrealized_pnl)
    .bind(realized_pnl)
    .bind(status)
    .bind(Utc::now())
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .expect("Failed to seed position")
}

/// Seed a trade event `days_ago` days in the past.
#[allow(dead_code)]
pub async fn seed_trade(
    pool: &SqlitePool,
    user_id: &str,
    market_id: &str,
    side: &str,
    size: f64,
    price: f64,
    days_ago: i64,
) -> TradeEvent {
    let occurred_at = Utc::now() - Duration::days(days_ago);

    sqlx::query_as::<_, TradeEvent>(
        r#"
        INSERT INTO trade_events
            (id, user_id, market_id, side, outcome, size, price, tx_hash, occurred_at)
        VALUES (?, ?, ?, ?, 'YES', ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(user_id)
    .bind(market_id)
    .bind(side)
    .bind(size)
    .bind(price)
    .bind(format!("0x{}", Uuid::new_v4().simple()))
    .bind(occurred_at)
    .fetch_one(pool)
    .await
    .expect("Failed to seed trade")
}

/// Seed a user_stats row directly (bypassing the aggregator).
#[allow(dead_code)]
pub async fn seed_stats(
    pool: &SqlitePool,
    user_id: &str,
    total_pnl: f64,
    roi: f64,
    accuracy: f64,
    trading_streak: i64,
    total_volume: f64,
    total_trades: i64,
) {
    sqlx::query(
        r#"
        INSERT INTO user_stats
            (user_id, total_pnl, roi, win_rate, accuracy, avg_position_size,
             trading_streak, total_trades, total_volume, active_markets, last_updated)
        VALUES (?, ?, ?, ?, ?, 0, ?, ?, ?, 0, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            total_pnl = excluded.total_pnl,
            roi = excluded.roi,
            win_rate = excluded.win_rate,
            accuracy = excluded.accuracy,
            trading_streak = excluded.trading_streak,
            total_trades = excluded.total_trades,
            total_volume = excluded.total_volume,
            last_updated = excluded.last_updated
        "#,
    )
    .bind(user_id)
    .bind(total_pnl)
    .bind(roi)
    .bind(accuracy)
    .bind(accuracy)
    .bind(trading_streak)
    .bind(total_trades)
    .bind(total_volume)
    .bind(Utc::now())
    .execute(pool)
    .await
    .expect("Failed to seed user stats");
}

/// Seed a follow edge.
#[allow(dead_code)]
pub async fn seed_follow(pool: &SqlitePool, follower_id: &str, following_id: &str) {
    sqlx::query(
        "INSERT INTO follows (follower_id, following_id, created_at) VALUES (?, ?, ?)",
    )
    .bind(follower_id)
    .bind(following_id)
    .bind(Utc::now())
    .execute(pool)
    .await
    .expect("Failed to seed follow");
}

/// Seed a badge definition.
#[allow(dead_code)]
pub async fn seed_badge(pool: &SqlitePool, id: &str, name: &str, description: &str) {
    sqlx::query("INSERT INTO badges (id, name, description) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await
        .expect("Failed to seed badge");
}

/// Insert a feed event with an explicit timestamp (the service layer
/// always stamps now; retention and ordering tests need control).
#[allow(dead_code)]
pub async fn seed_feed_event_at(
    pool: &SqlitePool,
    event_type: &str,
    user_id: &str,
    market_id: Option<&str>,
    created_at: DateTime<Utc>,
) -> String {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO feed_events (id, event_type, user_id, market_id, payload, created_at)
        VALUES (?, ?, ?, ?, '{}', ?)
        "#,
    )
    .bind(&id)
    .bind(event_type)
    .bind(user_id)
    .bind(market_id)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to seed feed event");

    id
}
