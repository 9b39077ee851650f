use sqlx::SqlitePool;

use crate::models::Badge;

/// Fetch a badge definition by id.
pub async fn get_badge(pool: &SqlitePool, id: &str) -> anyhow::Result<Option<Badge>> {
    let badge = sqlx::query_as::<_, Badge>("SELECT * FROM badges WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(badge)
}
