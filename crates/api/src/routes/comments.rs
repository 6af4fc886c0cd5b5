use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// GET    /                 list
/// PATCH  /{comment_id}     update votes
/// DELETE /{comment_id}     delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comments::list))
        .route(
            "/{comment_id}",
            patch(comments::update_votes).delete(comments::delete),
        )
}
