//! Repository for the `topics` table.

use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::topic::Topic;

/// Read-only access to topics.
pub struct TopicRepo;

impl TopicRepo {
    /// List every topic ordered by slug.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<Topic>> {
        let topics =
            sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
                .fetch_all(pool)
                .await?;
        Ok(topics)
    }
}
