//! Repository for the `users` table.

use newsroom_core::error::CoreError;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "username, name, avatar_url";

/// Read-only access to users.
pub struct UserRepo;

impl UserRepo {
    /// List every user ordered by username.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY username");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;
        Ok(users)
    }

    /// Fetch one user, failing with `NotFound` if the username is unknown.
    pub async fn get_by_username(pool: &PgPool, username: &str) -> DbResult<User> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::not_found("User", username).into())
    }
}
