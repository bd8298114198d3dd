//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

impl RepoError {
    /// Attach the entity type and id to a repository failure.
    pub fn for_entity(self, entity_type: &'static str, id: Uuid) -> DomainError {
        match self {
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
            RepoError::Connection(msg) | RepoError::Query(msg) => DomainError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity() {
        let err = RepoError::NotFound.for_entity("Formula", Uuid::new_v4());
        assert_eq!(err.to_string(), "Formula not found");
    }

    #[test]
    fn test_query_error_becomes_internal() {
        let err = RepoError::Query("boom".to_string()).for_entity("Formula", Uuid::nil());
        assert!(matches!(err, DomainError::Internal(msg) if msg == "boom"));
    }
}
