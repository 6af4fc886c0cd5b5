//! Repository for the `comments` table.

use newsroom_core::error::CoreError;
use newsroom_core::input::NewComment;
use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::comment::Comment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List the comments on one article, newest first.
    ///
    /// An empty result does not distinguish "no comments" from "no such
    /// article"; callers confirm the article exists separately.
    pub async fn list_by_article(pool: &PgPool, article_id: DbId) -> DbResult<Vec<Comment>> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments \
             WHERE article_id = $1 \
             ORDER BY created_at DESC, comment_id DESC"
        );
        let comments = sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await?;
        Ok(comments)
    }

    /// List every comment in id order.
    pub async fn list_all(pool: &PgPool) -> DbResult<Vec<Comment>> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY comment_id");
        let comments = sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await?;
        Ok(comments)
    }

    /// Insert a comment on `article_id` authored by `input.username`.
    ///
    /// Fails with `ReferenceError` when the article or user does not exist.
    pub async fn create(pool: &PgPool, article_id: DbId, input: &NewComment) -> DbResult<Comment> {
        let query = format!(
            "INSERT INTO comments (article_id, author, body) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .bind(&input.username)
            .bind(&input.body)
            .fetch_one(pool)
            .await?;
        Ok(comment)
    }

    /// Atomically apply `votes = votes + delta`, returning the updated row.
    pub async fn update_votes(pool: &PgPool, id: DbId, delta: i64) -> DbResult<Comment> {
        let query = format!(
            "UPDATE comments SET votes = votes + $2 \
             WHERE comment_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::not_found("Comment", id).into())
    }

    /// Hard-delete a comment, failing with `NotFound` if no row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("Comment", id).into());
        }
        Ok(())
    }
}
