//! Application services for person record management.

mod error;
mod records;

pub use error::{
    DuplicateField, ErrorKind, PersonOperation, PersonServiceError, PersonServiceResult,
};
pub use records::{CreatePersonRequest, PersonRecordService};
