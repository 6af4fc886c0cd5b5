use serde::Serialize;
use sqlx::FromRow;

/// A row from the `topics` table, keyed by `slug`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
