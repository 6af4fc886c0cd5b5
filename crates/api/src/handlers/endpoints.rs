//! Handler for the `GET /api` endpoint catalog and the routing fallbacks.

use axum::http::StatusCode;
use axum::Json;

use newsroom_core::error::CoreError;

use crate::error::AppResult;
use crate::response::{EndpointsResponse, ErrorBody};

/// Machine-readable description of every endpoint, compiled into the binary.
pub const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

/// GET /api
pub async fn catalog() -> AppResult<Json<EndpointsResponse>> {
    let endpoints = serde_json::from_str(ENDPOINTS_JSON)
        .map_err(|e| CoreError::Internal(format!("endpoint catalog is invalid: {e}")))?;
    Ok(Json(EndpointsResponse { endpoints }))
}

/// Fallback for any path no route matches.
pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            msg: "Endpoint not found".to_string(),
            code: "NOT_FOUND",
        }),
    )
}

/// Fallback for a known path called with a method it does not serve.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            msg: "Method not allowed".to_string(),
            code: "METHOD_NOT_ALLOWED",
        }),
    )
}
