pub mod badge_repo;
pub mod feed_repo;
pub mod follow_repo;
pub mod leaderboard_repo;
pub mod position_repo;
pub mod schema;
pub mod stats_repo;
pub mod trade_repo;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Connect to the database, bootstrap the schema, and tune pragmas.
pub async fn init_pool(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    configure_pragmas(&pool).await?;
    run_migrations(&pool).await?;

    Ok(pool)
}

/// An in-memory database for tests. A single connection keeps every
/// query on the same in-memory instance.
pub async fn init_memory_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Execute each schema statement individually; all statements are
/// IF NOT EXISTS so this is idempotent across restarts.
async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    for statement in schema::CREATE_TABLES.split(';') {
        let sql = statement.trim();
        if sql.is_empty() {
            continue;
        }
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| anyhow::anyhow!("migration failed: {e}: {sql}"))?;
    }

    Ok(())
}

async fn configure_pragmas(pool: &SqlitePool) -> anyhow::Result<()> {
    // WAL mode: allows concurrent reads during writes
    sqlx::query("PRAGMA journal_mode=WAL").execute(pool).await?;
    sqlx::query("PRAGMA synchronous=NORMAL").execute(pool).await?;
    sqlx::query("PRAGMA foreign_keys=ON").execute(pool).await?;

    Ok(())
}
