//! Repository port for person record persistence and lookup.

use crate::person::domain::{AffectedRows, NewPerson, Person, PersonChanges, PersonId};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Name of the unique constraint on the `cpf` column.
pub const CPF_UNIQUE_CONSTRAINT: &str = "persons_cpf_key";

/// Name of the unique constraint on the `email` column.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "persons_email_key";

/// Result type for person repository operations.
pub type PersonRepositoryResult<T> = Result<T, PersonRepositoryError>;

/// Person persistence contract.
///
/// Implementations own uniqueness of `cpf` and `email`: a write that would
/// duplicate either value must fail with
/// [`PersonRepositoryError::UniqueViolation`] rather than being pre-checked by
/// callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Persists a new record and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersonRepositoryError::UniqueViolation`] when `cpf` or
    /// `email` is already taken, or [`PersonRepositoryError::Persistence`] on
    /// any other storage failure.
    async fn save(&self, record: &NewPerson) -> PersonRepositoryResult<Person>;

    /// Returns every stored record in insertion order.
    async fn find_all(&self) -> PersonRepositoryResult<Vec<Person>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: PersonId) -> PersonRepositoryResult<Option<Person>>;

    /// Applies a partial update to the record with the given identifier.
    ///
    /// A missing record is reported as zero affected rows, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PersonRepositoryError::EmptyChangeSet`] when `changes` sets
    /// no field, [`PersonRepositoryError::UniqueViolation`] when the new
    /// `cpf` or `email` belongs to another record, or
    /// [`PersonRepositoryError::Persistence`] on storage failure.
    async fn update(
        &self,
        id: PersonId,
        changes: &PersonChanges,
    ) -> PersonRepositoryResult<AffectedRows>;

    /// Deletes the record with the given identifier.
    ///
    /// A missing record is reported as zero affected rows, not an error.
    async fn delete(&self, id: PersonId) -> PersonRepositoryResult<AffectedRows>;
}

/// Details of a rejected write that would have duplicated a unique column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueViolation {
    constraint: Option<String>,
    detail: Option<String>,
}

impl UniqueViolation {
    /// Creates a violation from the storage-reported constraint name and
    /// detail message, either of which may be unavailable.
    #[must_use]
    pub const fn new(constraint: Option<String>, detail: Option<String>) -> Self {
        Self { constraint, detail }
    }

    /// Returns the name of the violated constraint, when reported.
    #[must_use]
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    /// Returns the storage detail message, e.g.
    /// `Key (cpf)=(52998224725) already exists.`, when reported.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for UniqueViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.constraint, &self.detail) {
            (Some(constraint), Some(detail)) => write!(f, "{constraint}: {detail}"),
            (Some(constraint), None) => f.write_str(constraint),
            (None, Some(detail)) => f.write_str(detail),
            (None, None) => f.write_str("unspecified constraint"),
        }
    }
}

/// Errors returned by person repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PersonRepositoryError {
    /// The write would duplicate a unique column.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(UniqueViolation),

    /// An update was requested without any field to change.
    #[error("update requires at least one field")]
    EmptyChangeSet,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersonRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
