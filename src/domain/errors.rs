//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Another record already holds this ISBN
    DuplicateKey(String),
    /// Resource not found
    NotFound,
    /// Main subject is not part of the classification table
    UnknownSubject {
        subject: String,
        suggestion: Option<String>,
    },
    /// Validation error with message
    Validation(String),
    /// Database/persistence error
    Storage(String),
    /// External service error
    External(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::DuplicateKey(isbn) => {
                write!(f, "A book with ISBN {} already exists", isbn)
            }
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::UnknownSubject {
                subject,
                suggestion: Some(hint),
            } => write!(f, "Unknown main subject '{}' (did you mean '{}'?)", subject, hint),
            DomainError::UnknownSubject { subject, .. } => {
                write!(f, "Unknown main subject '{}'", subject)
            }
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::External(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer).
// Unique violations are not mapped here: only the caller knows which ISBN collided.
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => DomainError::NotFound,
            other => DomainError::Storage(other.to_string()),
        }
    }
}

/// Map a write error, turning a unique-constraint violation into `DuplicateKey`.
pub fn map_write_error(e: DbErr, isbn: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateKey(isbn.to_string()),
        _ => DomainError::from(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_subject_message_includes_hint() {
        let err = DomainError::UnknownSubject {
            subject: "Sciense".to_string(),
            suggestion: Some("Science".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown main subject 'Sciense' (did you mean 'Science'?)"
        );
    }

    #[test]
    fn test_record_not_updated_maps_to_not_found() {
        assert_eq!(DomainError::from(DbErr::RecordNotUpdated), DomainError::NotFound);
    }

    #[test]
    fn test_other_db_errors_map_to_storage() {
        let err = map_write_error(DbErr::Custom("disk full".to_string()), "123");
        assert!(matches!(err, DomainError::Storage(msg) if msg.contains("disk full")));
    }
}
