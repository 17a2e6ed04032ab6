//! Caller-facing error taxonomy for person record operations.

use crate::person::{
    domain::{PersonDomainError, PersonId},
    ports::{
        CPF_UNIQUE_CONSTRAINT, EMAIL_UNIQUE_CONSTRAINT, PersonRepositoryError, UniqueViolation,
    },
};
use std::fmt;
use thiserror::Error;

/// Result type for person record service operations.
pub type PersonServiceResult<T> = Result<T, PersonServiceError>;

/// Unique column that a rejected write collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    /// Another record already holds the CPF.
    Cpf,
    /// Another record already holds the email address.
    Email,
    /// The colliding column could not be determined.
    Unknown,
}

impl DuplicateField {
    /// Identifies the colliding column from a storage violation.
    ///
    /// A known constraint name decides first. Otherwise the column is read
    /// from the `Key (<column>)=(<value>)` prefix of the detail, so the
    /// duplicated value itself is never inspected. A detail without that
    /// prefix is searched for `cpf` before `email`. Anything else is
    /// [`DuplicateField::Unknown`].
    #[must_use]
    pub fn from_violation(violation: &UniqueViolation) -> Self {
        violation
            .constraint()
            .and_then(Self::from_constraint)
            .or_else(|| violation.detail().map(Self::from_detail))
            .unwrap_or(Self::Unknown)
    }

    fn from_constraint(constraint: &str) -> Option<Self> {
        match constraint {
            CPF_UNIQUE_CONSTRAINT => Some(Self::Cpf),
            EMAIL_UNIQUE_CONSTRAINT => Some(Self::Email),
            _ => None,
        }
    }

    fn from_detail(detail: &str) -> Self {
        let key_column = detail
            .strip_prefix("Key (")
            .and_then(|rest| rest.split_once(")="))
            .map(|(column, _)| column);

        match key_column {
            Some("cpf") => Self::Cpf,
            Some("email") => Self::Email,
            Some(_) => Self::Unknown,
            None if detail.contains("cpf") => Self::Cpf,
            None if detail.contains("email") => Self::Email,
            None => Self::Unknown,
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpf => "CPF already registered",
            Self::Email => "email already registered",
            Self::Unknown => "CPF or email already registered",
        })
    }
}

/// Service operation during which a storage failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonOperation {
    /// Creating a record.
    Register,
    /// Listing all records.
    List,
    /// Loading one record.
    Load,
    /// Applying a partial update.
    Update,
    /// Deleting a record.
    Remove,
}

impl fmt::Display for PersonOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Register => "registering person",
            Self::List => "listing persons",
            Self::Load => "loading person",
            Self::Update => "updating person",
            Self::Remove => "removing person",
        })
    }
}

/// Fieldless classification of [`PersonServiceError`] for transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input broke a domain rule.
    ValidationFailed,
    /// A unique column collided.
    DuplicateField,
    /// The referenced record does not exist.
    NotFound,
    /// Storage failed for a reason the caller cannot fix.
    InternalFailure,
}

/// Service-level errors for person record operations.
#[derive(Debug, Error)]
pub enum PersonServiceError {
    /// Caller-supplied data failed a domain rule; storage was not touched.
    #[error(transparent)]
    ValidationFailed(#[from] PersonDomainError),

    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    DuplicateField(DuplicateField),

    /// No record has the requested identifier.
    #[error("person with id {0} not found")]
    NotFound(PersonId),

    /// Storage failed for a reason other than a known uniqueness violation.
    #[error("internal error while {operation}")]
    InternalFailure {
        /// Operation that was running.
        operation: PersonOperation,
        /// Underlying repository failure.
        #[source]
        source: PersonRepositoryError,
    },
}

impl PersonServiceError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationFailed(_) => ErrorKind::ValidationFailed,
            Self::DuplicateField(_) => ErrorKind::DuplicateField,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InternalFailure { .. } => ErrorKind::InternalFailure,
        }
    }

    pub(crate) const fn internal(
        operation: PersonOperation,
        source: PersonRepositoryError,
    ) -> Self {
        Self::InternalFailure { operation, source }
    }

    /// Translates a failed create or update.
    ///
    /// Uniqueness violations become [`PersonServiceError::DuplicateField`];
    /// anything else is an internal failure of `operation`.
    pub(crate) fn from_write_failure(
        operation: PersonOperation,
        source: PersonRepositoryError,
    ) -> Self {
        match source {
            PersonRepositoryError::UniqueViolation(violation) => {
                Self::DuplicateField(DuplicateField::from_violation(&violation))
            }
            other => Self::internal(operation, other),
        }
    }
}
