//! Repository for the `articles` table.
//!
//! Every returned [`Article`] carries `comment_count`, aggregated from
//! `comments` in the same statement that reads or writes the article.

use newsroom_core::error::CoreError;
use newsroom_core::input::NewArticle;
use newsroom_core::query::ArticleListQuery;
use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::article_query::{ArticleQueryBuilder, ARTICLE_GROUP_BY, ARTICLE_SELECT};
use crate::error::DbResult;
use crate::models::article::Article;

/// Projection over a single-row CTE named `r` (the row just inserted or
/// updated), with the comment count taken by correlated subquery.
const RETURNED_ARTICLE: &str = "\
    SELECT r.article_id, r.author, r.title, r.body, r.topic, r.votes, r.created_at, \
           (SELECT COUNT(*) FROM comments c WHERE c.article_id = r.article_id) AS comment_count \
    FROM r";

/// Provides the article operations behind the `/articles` endpoints.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Fetch one article with its comment count.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> DbResult<Article> {
        let query = format!("{ARTICLE_SELECT} WHERE a.article_id = $1{ARTICLE_GROUP_BY}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::not_found("Article", id).into())
    }

    /// One page of articles for a validated listing query.
    pub async fn list(pool: &PgPool, query: &ArticleListQuery) -> DbResult<Vec<Article>> {
        let mut qb = ArticleQueryBuilder::new(query).page_query();
        let articles = qb.build_query_as::<Article>().fetch_all(pool).await?;
        Ok(articles)
    }

    /// Total number of articles matching the listing's filter, ignoring pagination.
    pub async fn count(pool: &PgPool, query: &ArticleListQuery) -> DbResult<i64> {
        let mut qb = ArticleQueryBuilder::new(query).count_query();
        let total = qb.build_query_scalar::<i64>().fetch_one(pool).await?;
        Ok(total)
    }

    /// Insert a new article, returning the created row (`comment_count` 0).
    ///
    /// An unknown `author` or `topic` fails with `ReferenceError` via the
    /// foreign keys.
    pub async fn create(pool: &PgPool, input: &NewArticle) -> DbResult<Article> {
        let query = format!(
            "WITH r AS ( \
                 INSERT INTO articles (author, title, body, topic) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING * \
             ) {RETURNED_ARTICLE}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.author)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.topic)
            .fetch_one(pool)
            .await?;
        Ok(article)
    }

    /// Atomically apply `votes = votes + delta`, returning the updated row.
    pub async fn update_votes(pool: &PgPool, id: DbId, delta: i64) -> DbResult<Article> {
        let query = format!(
            "WITH r AS ( \
                 UPDATE articles SET votes = votes + $2 \
                 WHERE article_id = $1 \
                 RETURNING * \
             ) {RETURNED_ARTICLE}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::not_found("Article", id).into())
    }
}
