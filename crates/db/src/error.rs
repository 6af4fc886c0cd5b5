//! Translation of store failures into the domain taxonomy.
//!
//! Every repository method returns [`DbResult`]. The `From<sqlx::Error>`
//! impl below is the only place PostgreSQL SQLSTATE codes are inspected, so
//! `?` on a sqlx call is enough to surface a typed [`CoreError`].

use newsroom_core::error::CoreError;

/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";
/// PostgreSQL `check_violation`.
const CHECK_VIOLATION: &str = "23514";
/// PostgreSQL `invalid_text_representation`.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// PostgreSQL `numeric_value_out_of_range`.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Client-visible text for NOT NULL and CHECK failures. The store's own
/// wording only goes to the debug log.
const CONSTRAINT_MESSAGE: &str = "value violates a constraint";

/// Named foreign keys from the migrations and the entity each one targets.
const FOREIGN_KEYS: &[(&str, &str)] = &[
    ("fk_articles_topic", "topic"),
    ("fk_articles_author", "user"),
    ("fk_comments_article", "article"),
    ("fk_comments_author", "user"),
];

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A failure with a client-visible meaning (not found, bad reference, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything the store reported that has no domain meaning.
    #[error("Database error: {0}")]
    Store(sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let translated = match &err {
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => Some(CoreError::ReferenceError {
                    entity: referenced_entity(db_err.constraint()),
                }),
                Some(NOT_NULL_VIOLATION) | Some(CHECK_VIOLATION) => Some(
                    CoreError::InvalidInput(CONSTRAINT_MESSAGE.into()),
                ),
                Some(NUMERIC_VALUE_OUT_OF_RANGE) => Some(CoreError::InvalidInput(
                    "numeric value out of range".into(),
                )),
                Some(INVALID_TEXT_REPRESENTATION) => Some(CoreError::InvalidInput(
                    "value has the wrong format".into(),
                )),
                _ => None,
            },
            _ => None,
        };

        match translated {
            Some(core) => {
                tracing::debug!(
                    error = %err,
                    translated = %core,
                    "Translated store error",
                );
                DbError::Core(core)
            }
            None => DbError::Store(err),
        }
    }
}

fn referenced_entity(constraint: Option<&str>) -> &'static str {
    constraint
        .and_then(|name| {
            FOREIGN_KEYS
                .iter()
                .find(|(fk, _)| *fk == name)
                .map(|(_, entity)| *entity)
        })
        .unwrap_or("record")
}
