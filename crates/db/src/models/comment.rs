use newsroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub article_id: DbId,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: Timestamp,
}
