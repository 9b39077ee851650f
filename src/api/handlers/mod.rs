pub mod analytics;
pub mod feed;
pub mod health;
pub mod leaderboard;
pub mod metrics;
