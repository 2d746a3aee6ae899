//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id={id} not found")]
    NotFound { entity_type: &'static str, id: String },

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("Post with id={id} is already liked by the caller")]
    AlreadyLiked { id: String },

    #[error("Post with id={id} is not liked by the caller")]
    NotLiked { id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id: id.into(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_post() {
        let err = DomainError::post_not_found("abc");
        assert_eq!(err.to_string(), "Post with id=abc not found");

        let err = DomainError::AlreadyLiked { id: "abc".into() };
        assert!(err.to_string().contains("id=abc"));
    }

    #[test]
    fn test_repo_error_becomes_internal() {
        let err: DomainError = RepoError::Query("boom".into()).into();
        assert!(matches!(err, DomainError::Internal(msg) if msg.contains("boom")));
    }
}
