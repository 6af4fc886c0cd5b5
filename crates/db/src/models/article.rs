use newsroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An article joined with its derived comment count.
///
/// `comment_count` is aggregated from `comments` on every read and is never
/// stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: DbId,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub votes: i64,
    pub created_at: Timestamp,
    pub comment_count: i64,
}
