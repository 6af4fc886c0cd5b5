use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                            list (sort_by, order, topic, limit, page)
/// POST   /                            create
/// GET    /{article_id}                get
/// PATCH  /{article_id}                update votes
/// GET    /{article_id}/comments       list comments
/// POST   /{article_id}/comments       create comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list).post(articles::create))
        .route(
            "/{article_id}",
            get(articles::get_by_id).patch(articles::update_votes),
        )
        .route(
            "/{article_id}/comments",
            get(articles::list_comments).post(articles::create_comment),
        )
}
