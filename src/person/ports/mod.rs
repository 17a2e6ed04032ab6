//! Port contracts for person record storage.
//!
//! Ports define infrastructure-agnostic interfaces used by person services.

pub mod repository;

#[cfg(test)]
pub use repository::MockPersonRepository;
pub use repository::{
    CPF_UNIQUE_CONSTRAINT, EMAIL_UNIQUE_CONSTRAINT, PersonRepository, PersonRepositoryError,
    PersonRepositoryResult, UniqueViolation,
};
