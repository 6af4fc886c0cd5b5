//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use newsroom_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::{UserListResponse, UserResponse};
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<UserListResponse>> {
    let users = UserRepo::list_all(&state.pool).await?;
    Ok(Json(UserListResponse { users }))
}

/// GET /api/users/{username}
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::get_by_username(&state.pool, &username).await?;
    Ok(Json(UserResponse { user }))
}
