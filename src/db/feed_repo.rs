use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::models::FeedEvent;

/// Fully-resolved feed filter; conditions are conjunctive. `user_ids`
/// carries either the single-user filter or an already-resolved follow set.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub user_ids: Option<Vec<String>>,
    pub market_id: Option<String>,
    pub event_type: Option<String>,
}

/// Append one feed event and return the stored row.
pub async fn insert_event(
    pool: &SqlitePool,
    event_type: &str,
    user_id: &str,
    market_id: Option<&str>,
    payload: &Value,
) -> anyhow::Result<FeedEvent> {
    let id = Uuid::new_v4().to_string();

    let event = sqlx::query_as::<_, FeedEvent>(
        r#"
        INSERT INTO feed_events (id, event_type, user_id, market_id, payload, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&id)
    .bind(event_type)
    .bind(user_id)
    .bind(market_id)
    .bind(Json(payload))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(event)
}

fn push_filter<'a>(qb: &mut QueryBuilder<'a, Sqlite>, filter: &'a FeedFilter) {
    if let Some(ids) = &filter.user_ids {
        qb.push(" AND user_id IN (");
        let mut sep = qb.separated(", ");
        for id in ids {
            sep.push_bind(id.as_str());
        }
        sep.push_unseparated(")");
    }

    if let Some(market_id) = &filter.market_id {
        qb.push(" AND market_id = ");
        qb.push_bind(market_id.as_str());
    }

    if let Some(event_type) = &filter.event_type {
        qb.push(" AND event_type = ");
        qb.push_bind(event_type.as_str());
    }
}

/// One page of matching events, newest first.
pub async fn query_events(
    pool: &SqlitePool,
    filter: &FeedFilter,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<FeedEvent>> {
    let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM feed_events WHERE 1=1");
    push_filter(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    let events = qb
        .build_query_as::<FeedEvent>()
        .fetch_all(pool)
        .await?;

    Ok(events)
}

/// Total number of events matching the filter.
pub async fn count_events(pool: &SqlitePool, filter: &FeedFilter) -> anyhow::Result<i64> {
    let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM feed_events WHERE 1=1");
    push_filter(&mut qb, filter);

    let total: i64 = qb.build_query_scalar().fetch_one(pool).await?;

    Ok(total)
}

/// Delete events older than the cutoff; returns the deleted count.
pub async fn delete_older_than(
    pool: &SqlitePool,
    cutoff: DateTime<Utc>,
) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM feed_events WHERE created_at < ?")
        .bind(cutoff)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
