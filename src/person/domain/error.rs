//! Error types for person domain validation.

use thiserror::Error;

/// Errors returned when a person payload breaks a domain rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonDomainError {
    /// The CPF failed the structural or checksum check.
    #[error("invalid CPF")]
    InvalidCpf,

    /// The name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The email address is not shaped like `local@domain`.
    #[error("invalid email '{0}'")]
    InvalidEmail(String),
}
