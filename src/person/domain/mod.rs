//! Domain model for person records.
//!
//! The person domain covers the persisted record, the unsaved record handed
//! to storage, partial updates, and the pure validation rules applied before
//! a record is registered. All infrastructure concerns are kept outside the
//! domain boundary.

pub mod cpf;
mod email;
mod error;
mod ids;
mod person;

pub use email::is_email_shaped;
pub use error::PersonDomainError;
pub use ids::{AffectedRows, PersonId};
pub use person::{NewPerson, PersistedPersonData, Person, PersonChanges};
