//! Handlers for the `/articles` resource and its nested comments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use newsroom_core::input::{parse_id, parse_vote_delta, NewArticle, NewComment};
use newsroom_core::query::{validate_article_query, ARTICLE_PAGE_PARAMS};
use newsroom_db::repositories::{ArticleRepo, CommentRepo};

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::response::{
    ArticleListResponse, ArticleResponse, CommentListResponse, CommentResponse,
};
use crate::state::AppState;

/// GET /api/articles
///
/// Sorted, optionally topic-filtered page of articles plus the total size of
/// the filtered set. The page and count queries run concurrently.
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams,
) -> AppResult<Json<ArticleListResponse>> {
    let query = validate_article_query(&params, ARTICLE_PAGE_PARAMS)?;

    let (articles, total_count) = tokio::try_join!(
        ArticleRepo::list(&state.pool, &query),
        ArticleRepo::count(&state.pool, &query),
    )?;

    let pagination = query.pagination.unwrap_or_default();
    Ok(Json(ArticleListResponse {
        articles,
        total_count,
        page: pagination.page,
        limit: pagination.limit,
    }))
}

/// POST /api/articles
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<ArticleResponse>)> {
    let input = NewArticle::from_body(&body)?;
    let article = ArticleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        article_id = article.article_id,
        author = %article.author,
        topic = %article.topic,
        "Article created",
    );

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

/// GET /api/articles/{article_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ArticleResponse>> {
    let id = parse_id("article_id", &raw_id)?;
    let article = ArticleRepo::get_by_id(&state.pool, id).await?;
    Ok(Json(ArticleResponse { article }))
}

/// PATCH /api/articles/{article_id}
///
/// Body: `{ "inc_votes": <integer> }`. Negative deltas decrement.
pub async fn update_votes(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<ArticleResponse>> {
    let id = parse_id("article_id", &raw_id)?;
    let delta = parse_vote_delta(&body)?;
    let article = ArticleRepo::update_votes(&state.pool, id, delta).await?;

    tracing::info!(article_id = id, delta, votes = article.votes, "Article votes updated");

    Ok(Json(ArticleResponse { article }))
}

/// GET /api/articles/{article_id}/comments
///
/// The article lookup runs alongside the comment query so a missing article
/// is a 404 rather than an empty list.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<CommentListResponse>> {
    let id = parse_id("article_id", &raw_id)?;

    let (_article, comments) = tokio::try_join!(
        ArticleRepo::get_by_id(&state.pool, id),
        CommentRepo::list_by_article(&state.pool, id),
    )?;

    Ok(Json(CommentListResponse { comments }))
}

/// POST /api/articles/{article_id}/comments
///
/// Body: `{ "username", "body" }`. An unknown article or user is a 404.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    let article_id = parse_id("article_id", &raw_id)?;
    let input = NewComment::from_body(&body)?;
    let comment = CommentRepo::create(&state.pool, article_id, &input).await?;

    tracing::info!(
        comment_id = comment.comment_id,
        article_id,
        author = %comment.author,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
