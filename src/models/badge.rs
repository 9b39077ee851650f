use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for the badges lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
}
