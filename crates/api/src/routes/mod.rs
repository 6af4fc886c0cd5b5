pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                      endpoint catalog
///
/// /topics                                list
///
/// /articles                              list, create
/// /articles/{article_id}                 get, update votes
/// /articles/{article_id}/comments        list, create
///
/// /comments                              list
/// /comments/{comment_id}                 update votes, delete
///
/// /users                                 list
/// /users/{username}                      get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::endpoints::catalog))
        .nest("/topics", topics::router())
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
