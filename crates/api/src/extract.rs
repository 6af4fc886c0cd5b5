//! Extractors whose rejections use the API's error envelope.
//!
//! Axum's stock `Json` and `Query` reject with plain-text bodies; these
//! wrappers convert those rejections into [`AppError`] so clients always get
//! `{ "msg", "code" }`.

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use newsroom_core::error::CoreError;
use serde_json::Value;

use crate::error::AppError;

/// An untyped JSON request body. Field validation happens in
/// `newsroom_core::input`.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::InvalidInput(rejection.body_text())))?;
        Ok(JsonBody(value))
    }
}

/// Raw query-string parameters, validated later against an allow-list.
#[derive(Debug, Default)]
pub struct QueryParams(pub HashMap<String, String>);

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::InvalidInput(rejection.body_text())))?;
        Ok(QueryParams(params))
    }
}
