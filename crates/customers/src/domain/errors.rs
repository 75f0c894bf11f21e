//! Domain Errors
//!
//! Error types for validation, persistence and service operations.

use std::fmt;

use thiserror::Error;

/// A single rejected input value.
///
/// Every variant knows which transport field it refers to, so adapters can
/// report failures without re-validating anything themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("id must be a positive integer, got {0}")]
    NonPositiveId(i64),

    #[error("id in body ({body}) does not match id in path ({path})")]
    IdMismatch { path: i64, body: i64 },

    #[error("{field} must not be empty")]
    EmptyNamePart { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    NamePartTooLong { field: &'static str, max: usize },

    #[error("email must not be empty")]
    EmptyEmail,

    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },

    #[error("email must look like local@domain")]
    MalformedEmail,
}

impl ValidationError {
    /// Transport field name (camelCase) the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveId(_) | Self::IdMismatch { .. } => "id",
            Self::EmptyNamePart { field } | Self::NamePartTooLong { field, .. } => *field,
            Self::EmptyEmail | Self::EmailTooLong { .. } | Self::MalformedEmail => "email",
        }
    }
}

/// Every validation failure found while building a value.
///
/// Never empty: it is only constructed from at least one [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Collect failures, returning `None` when there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any failure refers to the given transport field.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    /// Start an accumulator; callers must push at least one failure.
    pub(crate) fn collecting() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Failures a customer store may signal.
///
/// Callers decide whether to surface, retry or ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("customer {0} already exists")]
    DuplicateKey(i64),

    #[error("customer {0} does not exist")]
    KeyNotFound(i64),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Notification error: {0}")]
    Notification(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error.into())
    }
}

impl From<RepositoryError> for DomainError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::DuplicateKey(_) => Self::Conflict(error.to_string()),
            RepositoryError::KeyNotFound(id) => Self::not_found("Customer", id),
            RepositoryError::Backend(msg) => Self::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display_joins_messages() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::NonPositiveId(0),
            ValidationError::EmptyEmail,
        ])
        .unwrap();

        assert_eq!(
            errors.to_string(),
            "id must be a positive integer, got 0; email must not be empty"
        );
        assert!(errors.has_field("id"));
        assert!(errors.has_field("email"));
        assert!(!errors.has_field("firstName"));
    }

    #[test]
    fn test_empty_validation_errors_are_none() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_repository_errors_map_to_domain_taxonomy() {
        assert!(matches!(
            DomainError::from(RepositoryError::DuplicateKey(1)),
            DomainError::Conflict(_)
        ));
        assert!(matches!(
            DomainError::from(RepositoryError::KeyNotFound(2)),
            DomainError::NotFound { ref id, .. } if id == "2"
        ));
        assert!(matches!(
            DomainError::from(RepositoryError::Backend("lock poisoned".into())),
            DomainError::Repository(_)
        ));
    }
}
