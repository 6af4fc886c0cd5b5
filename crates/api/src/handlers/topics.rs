//! Handlers for the `/topics` resource.

use axum::extract::State;
use axum::Json;
use newsroom_db::repositories::TopicRepo;

use crate::error::AppResult;
use crate::response::TopicListResponse;
use crate::state::AppState;

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> AppResult<Json<TopicListResponse>> {
    let topics = TopicRepo::list_all(&state.pool).await?;
    Ok(Json(TopicListResponse { topics }))
}
