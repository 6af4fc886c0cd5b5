//! Integration tests for the read-only user and topic repositories.

use assert_matches::assert_matches;
use newsroom_core::error::CoreError;
use newsroom_db::repositories::{TopicRepo, UserRepo};
use newsroom_db::DbError;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_list_topics(pool: PgPool) {
    let topics = TopicRepo::list_all(&pool).await.unwrap();
    let slugs: Vec<&str> = topics.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["cats", "mitch", "paper"]);
    assert!(topics.iter().all(|t| !t.description.is_empty()));
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_list_users(pool: PgPool) {
    let users = UserRepo::list_all(&pool).await.unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(users[0].username, "butter_bridge");
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_get_user_by_username(pool: PgPool) {
    let user = UserRepo::get_by_username(&pool, "rogersop").await.unwrap();
    assert_eq!(user.name, "paul");
    assert!(user.avatar_url.starts_with("https://"));
}

#[sqlx::test(migrations = "./migrations", fixtures("seed"))]
async fn test_get_unknown_user_is_not_found(pool: PgPool) {
    let err = UserRepo::get_by_username(&pool, "nobody").await.unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::NotFound { entity: "User", key }) if key == "nobody"
    );
}
