//! Validation of request bodies and path identifiers.
//!
//! Bodies are accepted as untyped JSON and checked here so that unknown keys,
//! missing or empty fields, and mistyped values all surface as
//! [`CoreError::InvalidInput`] instead of framework-specific rejections.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Keys accepted by `POST /api/articles`.
pub const NEW_ARTICLE_FIELDS: &[&str] = &["author", "title", "body", "topic"];

/// Keys accepted by `POST /api/articles/{article_id}/comments`.
pub const NEW_COMMENT_FIELDS: &[&str] = &["username", "body"];

/// Keys accepted by the vote PATCH endpoints.
pub const VOTE_FIELDS: &[&str] = &["inc_votes"];

/// A validated article submission. Empty strings count as missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewArticle {
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    #[validate(length(min = 1))]
    pub topic: String,
}

impl NewArticle {
    pub fn from_body(body: &Value) -> Result<Self, CoreError> {
        parse_strict(body, NEW_ARTICLE_FIELDS)
    }
}

/// A validated comment submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub body: String,
}

impl NewComment {
    pub fn from_body(body: &Value) -> Result<Self, CoreError> {
        parse_strict(body, NEW_COMMENT_FIELDS)
    }
}

/// Extract the signed `inc_votes` delta from a vote PATCH body.
///
/// Accepts a JSON integer or a string holding one (`"-10"`).
pub fn parse_vote_delta(body: &Value) -> Result<i64, CoreError> {
    let object = expect_object(body)?;
    reject_unknown_keys(object, VOTE_FIELDS)?;

    let value = object
        .get("inc_votes")
        .ok_or_else(|| CoreError::InvalidInput("missing field `inc_votes`".into()))?;

    let delta = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    delta.ok_or_else(|| CoreError::InvalidInput(format!("inc_votes must be an integer, got {value}")))
}

/// Parse a numeric path identifier such as `article_id`.
pub fn parse_id(name: &'static str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::MalformedIdentifier {
            name,
            value: raw.to_string(),
        })
}

/* --------------------------------------------------------------------------
   Helpers
   -------------------------------------------------------------------------- */

fn parse_strict<T>(body: &Value, allowed: &[&str]) -> Result<T, CoreError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let object = expect_object(body)?;
    reject_unknown_keys(object, allowed)?;

    let parsed: T =
        T::deserialize(body).map_err(|e| CoreError::InvalidInput(e.to_string()))?;
    parsed.validate().map_err(empty_fields)?;
    Ok(parsed)
}

fn expect_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object()
        .ok_or_else(|| CoreError::InvalidInput("request body must be a JSON object".into()))
}

fn reject_unknown_keys(object: &Map<String, Value>, allowed: &[&str]) -> Result<(), CoreError> {
    let unknown: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|k| !allowed.contains(k))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "unexpected field(s): {}",
            unknown.join(", ")
        )))
    }
}

fn empty_fields(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    CoreError::InvalidInput(format!("missing field(s): {}", fields.join(", ")))
}
