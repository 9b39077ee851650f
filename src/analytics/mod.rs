pub mod stats;
pub mod streak;

pub use stats::recompute_stats;
pub use streak::winning_day_streak;
