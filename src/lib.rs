pub mod analytics;
pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod feed;
pub mod leaderboard;
pub mod metrics;
pub mod models;
pub mod services;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
