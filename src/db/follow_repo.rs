use sqlx::SqlitePool;

/// The set of user ids this user follows. Owned by the social subsystem;
/// the feed only reads it to resolve personalized queries.
pub async fn get_following_ids(
    pool: &SqlitePool,
    follower_id: &str,
) -> anyhow::Result<Vec<String>> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT following_id FROM follows WHERE follower_id = ?")
            .bind(follower_id)
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}
