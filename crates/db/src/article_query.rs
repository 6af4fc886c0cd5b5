//! SQL composition for article listings.
//!
//! [`ArticleQueryBuilder`] turns a validated [`ArticleListQuery`] into two
//! parameterized statements: the page itself and the total row count of the
//! filtered set. Both apply the identical topic predicate so the count always
//! describes the set the page was cut from.
//!
//! The topic, limit, and offset are bound parameters. Sort column and
//! direction are the only interpolated fragments and both come from fixed
//! enum mappings, never from request text.

use newsroom_core::query::{ArticleListQuery, ArticleSortColumn, SortOrder};
use sqlx::{Postgres, QueryBuilder};

/// Select list and join shared by every article read.
pub(crate) const ARTICLE_SELECT: &str = "\
    SELECT a.article_id, a.author, a.title, a.body, a.topic, a.votes, a.created_at, \
           COUNT(c.comment_id) AS comment_count \
    FROM articles a \
    LEFT JOIN comments c ON c.article_id = a.article_id";

/// Grouping that pairs with [`ARTICLE_SELECT`].
pub(crate) const ARTICLE_GROUP_BY: &str = " GROUP BY a.article_id";

/// Builds the page and count statements for one listing request.
#[derive(Debug, Clone, Copy)]
pub struct ArticleQueryBuilder<'q> {
    query: &'q ArticleListQuery,
}

impl<'q> ArticleQueryBuilder<'q> {
    pub fn new(query: &'q ArticleListQuery) -> Self {
        Self { query }
    }

    /// `SELECT ... GROUP BY ... ORDER BY ... [LIMIT .. OFFSET ..]`
    pub fn page_query(&self) -> QueryBuilder<'q, Postgres> {
        let mut qb = QueryBuilder::new(ARTICLE_SELECT);
        self.push_topic_filter(&mut qb);
        qb.push(ARTICLE_GROUP_BY);
        qb.push(order_by_clause(self.query.sort_by, self.query.order));

        if let Some(pagination) = self.query.pagination {
            qb.push(" LIMIT ");
            qb.push_bind(pagination.limit);
            qb.push(" OFFSET ");
            qb.push_bind(pagination.offset());
        }
        qb
    }

    /// `SELECT COUNT(*) FROM articles a [WHERE ...]`, without the comment join.
    pub fn count_query(&self) -> QueryBuilder<'q, Postgres> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        self.push_topic_filter(&mut qb);
        qb
    }

    fn push_topic_filter(&self, qb: &mut QueryBuilder<'q, Postgres>) {
        if let Some(topic) = self.query.topic.as_deref() {
            qb.push(" WHERE a.topic = ");
            qb.push_bind(topic);
        }
    }
}

/// Qualified column for a sort key.
fn sort_column_sql(column: ArticleSortColumn) -> &'static str {
    match column {
        ArticleSortColumn::Title => "a.title",
        ArticleSortColumn::Topic => "a.topic",
        ArticleSortColumn::Author => "a.author",
        ArticleSortColumn::Body => "a.body",
        ArticleSortColumn::CreatedAt => "a.created_at",
        ArticleSortColumn::Votes => "a.votes",
        ArticleSortColumn::ArticleId => "a.article_id",
    }
}

/// `ORDER BY <column> <dir>`, tie-broken by `article_id` in the same direction.
fn order_by_clause(column: ArticleSortColumn, order: SortOrder) -> String {
    let dir = order.as_sql();
    match column {
        ArticleSortColumn::ArticleId => format!(" ORDER BY a.article_id {dir}"),
        other => format!(
            " ORDER BY {} {dir}, a.article_id {dir}",
            sort_column_sql(other)
        ),
    }
}
