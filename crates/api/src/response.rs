//! Response envelope types for API handlers.
//!
//! Each resource is wrapped under its own key (`{ "article": ... }`,
//! `{ "comments": [...] }`). Use these structs instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety and consistent
//! serialization.

use newsroom_db::models::article::Article;
use newsroom_db::models::comment::Comment;
use newsroom_db::models::topic::Topic;
use newsroom_db::models::user::User;
use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
    pub code: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

/// A page of articles with the size of the full filtered set.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub total_count: i64,
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct TopicListResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct EndpointsResponse {
    pub endpoints: serde_json::Value,
}
