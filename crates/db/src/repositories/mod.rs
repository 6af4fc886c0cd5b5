//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return [`DbResult`], so a
//! missing row or a broken reference arrives as a typed
//! [`CoreError`](newsroom_core::error::CoreError).
//!
//! [`DbResult`]: crate::DbResult

pub mod article_repo;
pub mod comment_repo;
pub mod topic_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use comment_repo::CommentRepo;
pub use topic_repo::TopicRepo;
pub use user_repo::UserRepo;
