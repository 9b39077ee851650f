mod common;

use chrono::{Duration, Utc};
use serde_json::json;

use praxis::feed::{self, FeedQuery};
use praxis::models::FeedEventType;

const WHALE_THRESHOLD: f64 = 1000.0;

#[tokio::test]
async fn test_closing_large_position_emits_whale_trade() {
    let pool = common::setup_test_db().await;

    // size 100 at current price 15 → exit value 1500, over the threshold
    let position =
        common::seed_position(&pool, "user_1", "market_a", "closed", 100.0, 10.0, 15.0, 200.0)
            .await;

    feed::on_position_closed(&pool, &position, WHALE_THRESHOLD).await;

    let query = FeedQuery {
        user_id: Some("user_1".into()),
        ..Default::default()
    };
    let page = feed::get_feed(&pool, &query, 1, 20)
        .await
        .expect("Feed query should succeed");

    assert_eq!(page.total, 1);
    let event = &page.events[0];
    assert_eq!(event.event_type, "whale_trade");
    assert_eq!(event.market_id.as_deref(), Some("market_a"));
    assert_eq!(event.payload.0["action"], "closed");
    assert_eq!(event.payload.0["value"], 1500.0);
    assert_eq!(event.payload.0["pnl"], 200.0);
}

#[tokio::test]
async fn test_closing_small_position_emits_position_closed() {
    let pool = common::setup_test_db().await;

    // exit value 500 — under the threshold
    let position =
        common::seed_position(&pool, "user_2", "market_a", "closed", 100.0, 6.0, 5.0, -100.0)
            .await;

    feed::on_position_closed(&pool, &position, WHALE_THRESHOLD).await;

    let query = FeedQuery {
        user_id: Some("user_2".into()),
        ..Default::default()
    };
    let page = feed::get_feed(&pool, &query, 1, 20)
        .await
        .expect("Feed query should succeed");

    assert_eq!(page.total, 1);
    let event = &page.events[0];
    assert_eq!(event.event_type, "position_closed");
    assert!(event.payload.0.get("action").is_none());
    assert_eq!(event.payload.0["pnl"], -100.0);
}

#[tokio::test]
async fn test_opening_classifies_on_entry_value() {
    let pool = common::setup_test_db().await;

    // entry value 100 * 12 = 1200 → whale on open
    let whale_open =
        common::seed_position(&pool, "user_3", "market_a", "active", 100.0, 12.0, 12.0, 0.0)
            .await;
    feed::on_position_opened(&pool, &whale_open, WHALE_THRESHOLD).await;

    // entry value 100 * 2 = 200 → ordinary open
    let small_open =
        common::seed_position(&pool, "user_3", "market_b", "active", 100.0, 2.0, 2.0, 0.0).await;
    feed::on_position_opened(&pool, &small_open, WHALE_THRESHOLD).await;

    let whales = feed::get_feed(
        &pool,
        &FeedQuery {
            user_id: Some("user_3".into()),
            event_type: Some(FeedEventType::WhaleTrade),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(whales.total, 1);
    assert_eq!(whales.events[0].payload.0["action"], "opened");

    let opens = feed::get_feed(
        &pool,
        &FeedQuery {
            user_id: Some("user_3".into()),
            event_type: Some(FeedEventType::PositionOpened),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(opens.total, 1);
    assert_eq!(opens.events[0].market_id.as_deref(), Some("market_b"));
}

#[tokio::test]
async fn test_following_nobody_yields_empty_page() {
    let pool = common::setup_test_db().await;

    // Plenty of global activity from other users
    for i in 0..3 {
        common::seed_feed_event_at(
            &pool,
            "position_opened",
            &format!("user_{i}"),
            None,
            Utc::now(),
        )
        .await;
    }

    let page = feed::get_feed(
        &pool,
        &FeedQuery {
            following_of: Some("user_lonely".into()),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(page.total, 0, "Empty follow set must not fall back to the global feed");
    assert!(page.events.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_following_feed_shows_only_followed_users() {
    let pool = common::setup_test_db().await;

    common::seed_follow(&pool, "user_a", "user_b").await;

    common::seed_feed_event_at(&pool, "position_opened", "user_b", None, Utc::now()).await;
    common::seed_feed_event_at(&pool, "position_opened", "user_c", None, Utc::now()).await;

    let page = feed::get_feed(
        &pool,
        &FeedQuery {
            following_of: Some("user_a".into()),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(page.total, 1);
    assert_eq!(page.events[0].user_id, "user_b");
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let pool = common::setup_test_db().await;

    let now = Utc::now();
    common::seed_feed_event_at(&pool, "position_opened", "user_a", Some("market_1"), now).await;
    common::seed_feed_event_at(&pool, "position_closed", "user_a", Some("market_1"), now).await;
    common::seed_feed_event_at(&pool, "position_opened", "user_a", Some("market_2"), now).await;
    common::seed_feed_event_at(&pool, "position_opened", "user_b", Some("market_1"), now).await;

    let page = feed::get_feed(
        &pool,
        &FeedQuery {
            user_id: Some("user_a".into()),
            market_id: Some("market_1".into()),
            event_type: Some(FeedEventType::PositionOpened),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(page.total, 1, "All three filters must apply together");
    let event = &page.events[0];
    assert_eq!(event.user_id, "user_a");
    assert_eq!(event.market_id.as_deref(), Some("market_1"));
    assert_eq!(event.event_type, "position_opened");
}

#[tokio::test]
async fn test_pagination_newest_first() {
    let pool = common::setup_test_db().await;

    // 25 events, one minute apart, oldest first
    for i in 0..25 {
        common::seed_feed_event_at(
            &pool,
            "position_opened",
            "user_a",
            None,
            Utc::now() - Duration::minutes(25 - i),
        )
        .await;
    }

    let query = FeedQuery {
        user_id: Some("user_a".into()),
        ..Default::default()
    };

    let first = feed::get_feed(&pool, &query, 1, 10)
        .await
        .expect("Feed query should succeed");

    assert_eq!(first.total, 25);
    assert_eq!(first.events.len(), 10);
    assert_eq!(first.total_pages, 3);
    assert!(first
        .events
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));

    let last = feed::get_feed(&pool, &query, 3, 10)
        .await
        .expect("Feed query should succeed");

    assert_eq!(last.events.len(), 5);
    assert_eq!(last.page, 3);

    // No overlap between pages
    let newest_on_last = last.events.first().unwrap().created_at;
    let oldest_on_first = first.events.last().unwrap().created_at;
    assert!(newest_on_last < oldest_on_first);
}

#[tokio::test]
async fn test_record_feed_event_returns_stored_row() {
    let pool = common::setup_test_db().await;

    let event = feed::record_feed_event(
        &pool,
        FeedEventType::StreakAchieved,
        "user_a",
        json!({ "streak": 10 }),
        None,
    )
    .await
    .expect("Record should succeed");

    assert_eq!(event.event_type, "streak_achieved");
    assert_eq!(event.user_id, "user_a");
    assert!(event.market_id.is_none());
    assert_eq!(event.payload.0["streak"], 10);
}

#[tokio::test]
async fn test_unknown_badge_is_silent_noop() {
    let pool = common::setup_test_db().await;

    feed::on_badge_earned(&pool, "user_a", "badge_missing").await;

    let page = feed::get_feed(
        &pool,
        &FeedQuery {
            user_id: Some("user_a".into()),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_known_badge_emits_event_with_details() {
    let pool = common::setup_test_db().await;

    common::seed_badge(&pool, "hot_hand", "Hot Hand", "Achieve a 3-day winning streak").await;

    feed::on_badge_earned(&pool, "user_a", "hot_hand").await;

    let page = feed::get_feed(
        &pool,
        &FeedQuery {
            user_id: Some("user_a".into()),
            event_type: Some(FeedEventType::BadgeEarned),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(page.total, 1);
    assert_eq!(page.events[0].payload.0["badge_name"], "Hot Hand");
}

#[tokio::test]
async fn test_cleanup_deletes_only_expired_events() {
    let pool = common::setup_test_db().await;

    common::seed_feed_event_at(
        &pool,
        "position_opened",
        "user_a",
        None,
        Utc::now() - Duration::days(40),
    )
    .await;
    common::seed_feed_event_at(
        &pool,
        "position_closed",
        "user_a",
        None,
        Utc::now() - Duration::days(35),
    )
    .await;
    common::seed_feed_event_at(&pool, "streak_achieved", "user_a", None, Utc::now()).await;

    let deleted = feed::cleanup_old_events(&pool, 30)
        .await
        .expect("Cleanup should succeed");

    assert_eq!(deleted, 2);

    let page = feed::get_feed(
        &pool,
        &FeedQuery {
            user_id: Some("user_a".into()),
            ..Default::default()
        },
        1,
        20,
    )
    .await
    .expect("Feed query should succeed");

    assert_eq!(page.total, 1);
    assert_eq!(page.events[0].event_type, "streak_achieved");
}
