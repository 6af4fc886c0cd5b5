//! Validation of list-endpoint query strings.
//!
//! Query parameters arrive as raw `name -> value` strings. Validation runs in
//! two passes: every parameter *name* is checked against the endpoint's
//! allow-list first, then each recognized *value* is parsed into a typed
//! field. Sort column and direction come out as enums, so nothing a client
//! sends is ever spliced into SQL text.

use std::collections::HashMap;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Parameter names and allow-lists
   -------------------------------------------------------------------------- */

pub const PARAM_SORT_BY: &str = "sort_by";
pub const PARAM_ORDER: &str = "order";
pub const PARAM_TOPIC: &str = "topic";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_PAGE: &str = "page";

/// Filter and sort only; the result set is not paginated.
pub const ARTICLE_FILTER_PARAMS: &[&str] = &[PARAM_SORT_BY, PARAM_ORDER, PARAM_TOPIC];

/// Filter, sort, and paginate.
pub const ARTICLE_PAGE_PARAMS: &[&str] = &[
    PARAM_SORT_BY,
    PARAM_ORDER,
    PARAM_TOPIC,
    PARAM_LIMIT,
    PARAM_PAGE,
];

/// Page size when `limit` is allowed but not supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// Page number when `page` is allowed but not supplied.
pub const DEFAULT_PAGE: i64 = 1;

/* --------------------------------------------------------------------------
   Typed values
   -------------------------------------------------------------------------- */

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortColumn {
    Title,
    Topic,
    Author,
    Body,
    #[default]
    CreatedAt,
    Votes,
    ArticleId,
}

impl ArticleSortColumn {
    pub const ALL: [ArticleSortColumn; 7] = [
        ArticleSortColumn::Title,
        ArticleSortColumn::Topic,
        ArticleSortColumn::Author,
        ArticleSortColumn::Body,
        ArticleSortColumn::CreatedAt,
        ArticleSortColumn::Votes,
        ArticleSortColumn::ArticleId,
    ];

    /// The name clients use in `?sort_by=`.
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleSortColumn::Title => "title",
            ArticleSortColumn::Topic => "topic",
            ArticleSortColumn::Author => "author",
            ArticleSortColumn::Body => "body",
            ArticleSortColumn::CreatedAt => "created_at",
            ArticleSortColumn::Votes => "votes",
            ArticleSortColumn::ArticleId => "article_id",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Sort direction. Matching is case-sensitive: only `asc` and `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A validated page window. `limit` is non-negative, `page` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl Pagination {
    /// Number of rows skipped before this page: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Validated parameters for listing articles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListQuery {
    pub sort_by: ArticleSortColumn,
    pub order: SortOrder,
    /// Equality filter on the article's topic slug. `None` means no filter.
    pub topic: Option<String>,
    /// `None` when the endpoint's allow-list has no pagination parameters.
    pub pagination: Option<Pagination>,
}

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

/// Validate raw query parameters against `allowed` and normalize them.
///
/// Fails with [`CoreError::InvalidQueryProperty`] when any name is outside
/// `allowed`, regardless of whether the other values are valid. Only then
/// are values checked, failing with [`CoreError::InvalidQueryParameter`].
pub fn validate_article_query(
    params: &HashMap<String, String>,
    allowed: &[&str],
) -> Result<ArticleListQuery, CoreError> {
    check_property_names(params, allowed)?;

    let sort_by = match params.get(PARAM_SORT_BY) {
        Some(raw) => ArticleSortColumn::parse(raw).ok_or_else(|| invalid(PARAM_SORT_BY, raw))?,
        None => ArticleSortColumn::default(),
    };

    let order = match params.get(PARAM_ORDER) {
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| invalid(PARAM_ORDER, raw))?,
        None => SortOrder::default(),
    };

    let topic = params.get(PARAM_TOPIC).cloned();

    let paginated = allowed.contains(&PARAM_LIMIT) || allowed.contains(&PARAM_PAGE);
    let pagination = if paginated {
        let limit = match params.get(PARAM_LIMIT) {
            Some(raw) => parse_bounded(PARAM_LIMIT, raw, 0)?,
            None => DEFAULT_LIMIT,
        };
        let page = match params.get(PARAM_PAGE) {
            Some(raw) => parse_bounded(PARAM_PAGE, raw, 1)?,
            None => DEFAULT_PAGE,
        };
        Some(Pagination { limit, page })
    } else {
        None
    };

    Ok(ArticleListQuery {
        sort_by,
        order,
        topic,
        pagination,
    })
}

/// Reject names outside `allowed`. Offenders are reported sorted so the
/// message does not depend on map iteration order.
fn check_property_names(
    params: &HashMap<String, String>,
    allowed: &[&str],
) -> Result<(), CoreError> {
    let mut unknown: Vec<&str> = params
        .keys()
        .map(String::as_str)
        .filter(|name| !allowed.contains(name))
        .collect();

    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(CoreError::InvalidQueryProperty(unknown.join(", ")))
}

fn parse_bounded(name: &'static str, raw: &str, min: i64) -> Result<i64, CoreError> {
    match raw.parse::<i64>() {
        Ok(n) if n >= min => Ok(n),
        _ => Err(invalid(name, raw)),
    }
}

fn invalid(name: &'static str, raw: &str) -> CoreError {
    CoreError::InvalidQueryParameter {
        name,
        value: raw.to_string(),
    }
}
