//! Integration tests for article reads, listing, creation, and vote updates.
//!
//! Runs against a real database seeded from `fixtures/seed.sql`
//! (12 articles, 18 comments).

use assert_matches::assert_matches;
use newsroom_core::error::CoreError;
use newsroom_core::input::NewArticle;
use newsroom_core::query::{ArticleListQuery, ArticleSortColumn, Pagination, SortOrder};
use newsroom_db::repositories::ArticleRepo;
use newsroom_db::DbError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn listing(
    sort_by: ArticleSortColumn,
    order: SortOrder,
    topic: Option<&str>,
    pagination: Option<Pagination>,
) -> ArticleListQuery {
    ArticleListQuery {
        sort_by,
        order,
        topic: topic.map(str::to_string),
        pagination,
    }
}

fn ids(articles: &[newsroom_db::models::article::Article]) -> Vec<i64> {
    articles.iter().map(|a| a.article_id).collect()
}

fn new_article(title: &str, topic: &str, author: &str) -> NewArticle {
    NewArticle {
        author: author.to_string(),
        title: title.to_string(),
        body: "Fresh off the press".to_string(),
        topic: topic.to_string(),
    }
}

// ---------------------------------------------------------------------------
// get_by_id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_get_by_id_includes_comment_count(pool: PgPool) {
    let article = ArticleRepo::get_by_id(&pool, 1).await.unwrap();
    assert_eq!(article.title, "Living in the shadow of a great man");
    assert_eq!(article.author, "butter_bridge");
    assert_eq!(article.votes, 100);
    assert_eq!(article.comment_count, 11);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_get_by_id_without_comments_counts_zero(pool: PgPool) {
    let article = ArticleRepo::get_by_id(&pool, 7).await.unwrap();
    assert_eq!(article.comment_count, 0);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_get_by_id_missing_is_not_found(pool: PgPool) {
    let err = ArticleRepo::get_by_id(&pool, 999).await.unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::NotFound { entity: "Article", .. })
    );
}

// ---------------------------------------------------------------------------
// list / count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_default_listing_is_newest_first_with_ten_rows(pool: PgPool) {
    let q = listing(
        ArticleSortColumn::CreatedAt,
        SortOrder::Desc,
        None,
        Some(Pagination::default()),
    );
    let articles = ArticleRepo::list(&pool, &q).await.unwrap();
    assert_eq!(ids(&articles), vec![12, 3, 6, 2, 8, 5, 1, 9, 10, 4]);

    let total = ArticleRepo::count(&pool, &q).await.unwrap();
    assert_eq!(total, 12);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_article_id_page_two_of_three(pool: PgPool) {
    let q = listing(
        ArticleSortColumn::ArticleId,
        SortOrder::Desc,
        None,
        Some(Pagination { limit: 3, page: 2 }),
    );
    let articles = ArticleRepo::list(&pool, &q).await.unwrap();
    assert_eq!(ids(&articles), vec![9, 8, 7]);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_vote_ties_are_broken_by_article_id(pool: PgPool) {
    let desc = listing(ArticleSortColumn::Votes, SortOrder::Desc, None, None);
    let articles = ArticleRepo::list(&pool, &desc).await.unwrap();
    assert_eq!(
        ids(&articles),
        vec![12, 1, 5, 10, 3, 8, 11, 9, 7, 6, 4, 2]
    );

    let asc = listing(ArticleSortColumn::Votes, SortOrder::Asc, None, None);
    let articles = ArticleRepo::list(&pool, &asc).await.unwrap();
    assert_eq!(
        ids(&articles),
        vec![2, 4, 6, 7, 9, 11, 8, 3, 10, 5, 1, 12]
    );
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_every_sort_column_orders_rows(pool: PgPool) {
    for column in ArticleSortColumn::ALL {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let q = listing(column, order, None, None);
            let articles = ArticleRepo::list(&pool, &q).await.unwrap();
            assert_eq!(articles.len(), 12);

            let keys: Vec<String> = articles
                .iter()
                .map(|a| match column {
                    ArticleSortColumn::Title => a.title.clone(),
                    ArticleSortColumn::Topic => a.topic.clone(),
                    ArticleSortColumn::Author => a.author.clone(),
                    ArticleSortColumn::Body => a.body.clone(),
                    ArticleSortColumn::CreatedAt => a.created_at.to_rfc3339(),
                    ArticleSortColumn::Votes => format!("{:020}", a.votes),
                    ArticleSortColumn::ArticleId => format!("{:020}", a.article_id),
                })
                .collect();

            let mut expected = keys.clone();
            expected.sort();
            if order == SortOrder::Desc {
                expected.reverse();
            }
            // Text columns use the database collation, so compare only for
            // columns whose ordering is collation-independent.
            if matches!(
                column,
                ArticleSortColumn::CreatedAt | ArticleSortColumn::Votes | ArticleSortColumn::ArticleId
            ) {
                assert_eq!(keys, expected, "sort_by={} order={order:?}", column.as_str());
            }
        }
    }
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_topic_filter_applies_to_page_and_count(pool: PgPool) {
    let q = listing(
        ArticleSortColumn::CreatedAt,
        SortOrder::Desc,
        Some("cats"),
        Some(Pagination { limit: 1, page: 1 }),
    );
    let articles = ArticleRepo::list(&pool, &q).await.unwrap();
    assert_eq!(ids(&articles), vec![5]);
    assert!(articles.iter().all(|a| a.topic == "cats"));

    let total = ArticleRepo::count(&pool, &q).await.unwrap();
    assert_eq!(total, 2);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_topic_without_articles_is_empty_not_error(pool: PgPool) {
    let q = listing(
        ArticleSortColumn::CreatedAt,
        SortOrder::Desc,
        Some("paper"),
        Some(Pagination::default()),
    );
    assert!(ArticleRepo::list(&pool, &q).await.unwrap().is_empty());
    assert_eq!(ArticleRepo::count(&pool, &q).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_page_beyond_range_is_empty(pool: PgPool) {
    let q = listing(
        ArticleSortColumn::CreatedAt,
        SortOrder::Desc,
        None,
        Some(Pagination { limit: 10, page: 3 }),
    );
    assert!(ArticleRepo::list(&pool, &q).await.unwrap().is_empty());
    assert_eq!(ArticleRepo::count(&pool, &q).await.unwrap(), 12);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_listing_comment_counts_match_comments(pool: PgPool) {
    let q = listing(ArticleSortColumn::ArticleId, SortOrder::Asc, None, None);
    let articles = ArticleRepo::list(&pool, &q).await.unwrap();

    for article in &articles {
        let expected: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE article_id = $1")
                .bind(article.article_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(article.comment_count, expected);
    }
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_create_returns_full_row(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("Paper cuts", "paper", "lurker"))
        .await
        .unwrap();
    assert_eq!(article.article_id, 13);
    assert_eq!(article.title, "Paper cuts");
    assert_eq!(article.topic, "paper");
    assert_eq!(article.votes, 0);
    assert_eq!(article.comment_count, 0);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_create_with_unknown_topic_is_reference_error(pool: PgPool) {
    let err = ArticleRepo::create(&pool, &new_article("Woof", "dogs", "lurker"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::ReferenceError { entity: "topic" })
    );
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_create_with_unknown_author_is_reference_error(pool: PgPool) {
    let err = ArticleRepo::create(&pool, &new_article("Hello", "cats", "nobody"))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::ReferenceError { entity: "user" })
    );
}

// ---------------------------------------------------------------------------
// update_votes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_vote_delta_round_trips(pool: PgPool) {
    let up = ArticleRepo::update_votes(&pool, 1, 10).await.unwrap();
    assert_eq!(up.votes, 110);
    assert_eq!(up.comment_count, 11);

    let down = ArticleRepo::update_votes(&pool, 1, -10).await.unwrap();
    assert_eq!(down.votes, 100);
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_vote_update_on_missing_article_is_not_found(pool: PgPool) {
    let err = ArticleRepo::update_votes(&pool, 999, 1).await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { .. }));
}
