use std::env;

/// How many days of feed history the cleanup job keeps by default.
pub const DEFAULT_FEED_RETENTION_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    // API token for the dashboard/API routes (optional — auth disabled when unset)
    pub api_token: Option<String>,

    // Feed
    pub whale_threshold: f64,
    pub feed_retention_days: i64,

    // Background jobs
    pub analytics_interval_secs: u64,
    pub leaderboard_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:praxis.db?mode=rwc".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".into())
                .parse()?,

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),

            whale_threshold: env::var("WHALE_THRESHOLD")
                .unwrap_or_else(|_| "1000".into())
                .parse()
                .unwrap_or(1000.0),
            feed_retention_days: env::var("FEED_RETENTION_DAYS")
                .unwrap_or_else(|_| DEFAULT_FEED_RETENTION_DAYS.to_string())
                .parse()
                .unwrap_or(DEFAULT_FEED_RETENTION_DAYS),

            analytics_interval_secs: env::var("ANALYTICS_INTERVAL_SECS")
                .unwrap_or_else(|_| "300".into())
                .parse()
                .unwrap_or(300),
            leaderboard_interval_secs: env::var("LEADERBOARD_INTERVAL_SECS")
                .unwrap_or_else(|_| "600".into())
                .parse()
                .unwrap_or(600),
        })
    }

    /// Returns true if API authentication is enabled.
    pub fn has_api_auth(&self) -> bool {
        self.api_token.is_some()
    }
}
