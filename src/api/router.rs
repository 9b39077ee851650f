use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_auth;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected API routes — require Bearer token when API_TOKEN is set
    let protected = Router::new()
        // Analytics
        .route("/api/analytics/:user_id", get(handlers::analytics::get_stats))
        .route(
            "/api/analytics/:user_id/recompute",
            post(handlers::analytics::recompute),
        )
        // Leaderboards
        .route(
            "/api/leaderboard/recalculate",
            post(handlers::leaderboard::recalculate_all),
        )
        .route(
            "/api/leaderboard/rankings/:user_id",
            get(handlers::leaderboard::user_rankings),
        )
        .route(
            "/api/leaderboard/:period/:metric",
            get(handlers::leaderboard::get_leaderboard),
        )
        // Feed
        .route("/api/feed", get(handlers::feed::list))
        .route("/api/feed/events", post(handlers::feed::record))
        .route("/api/feed/cleanup", post(handlers::feed::cleanup))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // CORS: the frontend is served from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
