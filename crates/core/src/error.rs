/// Domain failures raised by validation and repository code.
///
/// Each variant maps to exactly one client-visible status in the API crate.
/// Store-specific error codes never appear here; the db crate translates
/// them into these variants before they leave the repository layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// A query-string parameter name outside the endpoint's allow-list.
    #[error("Invalid query property: {0}")]
    InvalidQueryProperty(String),

    /// A recognized query-string parameter with an unacceptable value.
    #[error("Invalid query parameter: {name}={value}")]
    InvalidQueryParameter { name: &'static str, value: String },

    /// A request body with unknown, missing, empty, or mistyped fields.
    #[error("Invalid data entry: {0}")]
    InvalidInput(String),

    /// A foreign-key target (article, user, topic) does not exist.
    #[error("Referenced {entity} does not exist")]
    ReferenceError { entity: &'static str },

    /// An identifier that does not have the expected shape (e.g. non-numeric id).
    #[error("Invalid {name}: '{value}'")]
    MalformedIdentifier { name: &'static str, value: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] keyed by any displayable value.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
