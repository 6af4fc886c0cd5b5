use axum::routing::get;
use axum::Router;

use crate::handlers::topics;
use crate::state::AppState;

/// Routes mounted at `/topics`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(topics::list))
}
