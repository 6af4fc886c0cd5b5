//! Handlers for the top-level `/comments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use newsroom_core::input::{parse_id, parse_vote_delta};
use newsroom_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::{CommentListResponse, CommentResponse};
use crate::state::AppState;

/// GET /api/comments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CommentListResponse>> {
    let comments = CommentRepo::list_all(&state.pool).await?;
    Ok(Json(CommentListResponse { comments }))
}

/// PATCH /api/comments/{comment_id}
///
/// Body: `{ "inc_votes": <integer> }`.
pub async fn update_votes(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<CommentResponse>> {
    let id = parse_id("comment_id", &raw_id)?;
    let delta = parse_vote_delta(&body)?;
    let comment = CommentRepo::update_votes(&state.pool, id, delta).await?;

    tracing::info!(comment_id = id, delta, votes = comment.votes, "Comment votes updated");

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id("comment_id", &raw_id)?;
    CommentRepo::delete(&state.pool, id).await?;

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
