//! SQLite schema for the praxis store.
//!
//! Tables are created idempotently at startup. `positions`, `trade_events`
//! and `follows` are written by the sync/social subsystems; `user_stats`,
//! `leaderboard_cache` and `feed_events` are owned by the analytics core
//! and safe to rebuild destructively.

pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS positions (
    id              TEXT PRIMARY KEY,
    user_id         TEXT NOT NULL,
    market_id       TEXT NOT NULL,
    outcome         TEXT NOT NULL DEFAULT 'YES',
    size            REAL NOT NULL DEFAULT 0,
    avg_price       REAL NOT NULL DEFAULT 0,
    current_price   REAL NOT NULL DEFAULT 0,
    unrealized_pnl  REAL NOT NULL DEFAULT 0,
    realized_pnl    REAL NOT NULL DEFAULT 0,
    status          TEXT NOT NULL DEFAULT 'active',
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL,
    UNIQUE(user_id, market_id, outcome)
);

CREATE INDEX IF NOT EXISTS idx_positions_user ON positions(user_id);
CREATE INDEX IF NOT EXISTS idx_positions_market ON positions(market_id);

CREATE TABLE IF NOT EXISTS trade_events (
    id          TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL,
    market_id   TEXT NOT NULL,
    side        TEXT NOT NULL,
    outcome     TEXT NOT NULL DEFAULT 'YES',
    size        REAL NOT NULL DEFAULT 0,
    price       REAL NOT NULL DEFAULT 0,
    tx_hash     TEXT UNIQUE,
    occurred_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_trade_events_user ON trade_events(user_id, occurred_at);
CREATE INDEX IF NOT EXISTS idx_trade_events_market ON trade_events(market_id);

CREATE TABLE IF NOT EXISTS user_stats (
    user_id           TEXT PRIMARY KEY,
    total_pnl         REAL NOT NULL DEFAULT 0,
    roi               REAL NOT NULL DEFAULT 0,
    win_rate          REAL NOT NULL DEFAULT 0,
    accuracy          REAL NOT NULL DEFAULT 0,
    avg_position_size REAL NOT NULL DEFAULT 0,
    trading_streak    INTEGER NOT NULL DEFAULT 0,
    total_trades      INTEGER NOT NULL DEFAULT 0,
    total_volume      REAL NOT NULL DEFAULT 0,
    active_markets    INTEGER NOT NULL DEFAULT 0,
    last_updated      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS leaderboard_cache (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    period     TEXT NOT NULL,
    metric     TEXT NOT NULL,
    rank       INTEGER NOT NULL,
    user_id    TEXT NOT NULL,
    value      REAL NOT NULL DEFAULT 0,
    updated_at TEXT NOT NULL,
    UNIQUE(period, metric, user_id)
);

CREATE INDEX IF NOT EXISTS idx_leaderboard_partition ON leaderboard_cache(period, metric, rank);
CREATE INDEX IF NOT EXISTS idx_leaderboard_user ON leaderboard_cache(user_id);

CREATE TABLE IF NOT EXISTS feed_events (
    id         TEXT PRIMARY KEY,
    event_type TEXT NOT NULL,
    user_id    TEXT NOT NULL,
    market_id  TEXT,
    payload    TEXT NOT NULL DEFAULT '{}',
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_feed_events_time ON feed_events(created_at);
CREATE INDEX IF NOT EXISTS idx_feed_events_user ON feed_events(user_id);
CREATE INDEX IF NOT EXISTS idx_feed_events_type ON feed_events(event_type);

CREATE TABLE IF NOT EXISTS follows (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    follower_id  TEXT NOT NULL,
    following_id TEXT NOT NULL,
    created_at   TEXT NOT NULL,
    UNIQUE(follower_id, following_id)
);

CREATE INDEX IF NOT EXISTS idx_follows_follower ON follows(follower_id);

CREATE TABLE IF NOT EXISTS badges (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL,
    icon_url    TEXT
);
"#;
