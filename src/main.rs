use praxis::api::router::create_router;
use praxis::config::AppConfig;
use praxis::{db, metrics, services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = metrics::init_metrics();

    tracing::info!("Connecting to database...");
    let pool = db::init_pool(&config.database_url).await?;
    tracing::info!("Database ready");

    // --- Background jobs: bulk stats refresh + leaderboard recalculation ---
    let analytics_pool = pool.clone();
    let analytics_interval = config.analytics_interval_secs;
    tokio::spawn(async move {
        services::analytics_refresh::run_analytics_refresh(analytics_pool, analytics_interval)
            .await;
    });

    let leaderboard_pool = pool.clone();
    let leaderboard_interval = config.leaderboard_interval_secs;
    tokio::spawn(async move {
        services::leaderboard_refresh::run_leaderboard_refresh(
            leaderboard_pool,
            leaderboard_interval,
        )
        .await;
    });

    if config.has_api_auth() {
        tracing::info!("API authentication enabled");
    } else {
        tracing::warn!("API_TOKEN not set — API authentication disabled");
    }

    let state = AppState {
        db: pool,
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
