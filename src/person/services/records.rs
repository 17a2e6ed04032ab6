//! Service layer for person record management.
//!
//! Provides [`PersonRecordService`], which validates create payloads,
//! delegates all I/O to a [`PersonRepository`], and turns storage failures
//! into [`PersonServiceError`] values.

use super::error::{PersonOperation, PersonServiceError, PersonServiceResult};
use crate::person::{
    domain::{
        AffectedRows, NewPerson, Person, PersonChanges, PersonDomainError, PersonId, cpf,
        is_email_shaped,
    },
    ports::PersonRepository,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Request payload for registering a new person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePersonRequest {
    name: String,
    cpf: String,
    birth_date: NaiveDate,
    email: String,
}

impl CreatePersonRequest {
    /// Creates a request with every person field.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        birth_date: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            birth_date,
            email: email.into(),
        }
    }

    /// Checks the payload against the registration rules.
    ///
    /// The CPF is checked first so an invalid CPF is always reported as such,
    /// whatever else is wrong with the payload.
    fn validate(&self) -> Result<(), PersonDomainError> {
        if !cpf::is_valid(&self.cpf) {
            return Err(PersonDomainError::InvalidCpf);
        }
        if self.name.trim().is_empty() {
            return Err(PersonDomainError::EmptyName);
        }
        if !is_email_shaped(&self.email) {
            return Err(PersonDomainError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl From<CreatePersonRequest> for NewPerson {
    fn from(request: CreatePersonRequest) -> Self {
        let CreatePersonRequest {
            name,
            cpf,
            birth_date,
            email,
        } = request;
        Self {
            name,
            cpf,
            birth_date,
            email,
        }
    }
}

/// Person record orchestration service.
///
/// Holds no state between calls. Uniqueness of `cpf` and `email` is never
/// pre-checked: concurrent writers race on the storage constraint and the
/// loser receives [`PersonServiceError::DuplicateField`].
pub struct PersonRecordService<R>
where
    R: PersonRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for PersonRecordService<R>
where
    R: PersonRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> PersonRecordService<R>
where
    R: PersonRepository,
{
    /// Creates a new person record service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and registers a new person.
    ///
    /// # Errors
    ///
    /// Returns [`PersonServiceError::ValidationFailed`] without touching
    /// storage when the payload is invalid,
    /// [`PersonServiceError::DuplicateField`] when the CPF or email is already
    /// registered, or [`PersonServiceError::InternalFailure`] on any other
    /// storage failure.
    pub async fn create(&self, request: CreatePersonRequest) -> PersonServiceResult<Person> {
        debug!(operation = %PersonOperation::Register, "registering person");
        request
            .validate()
            .map_err(|err| report(PersonServiceError::ValidationFailed(err)))?;

        let record = NewPerson::from(request);
        let person = self
            .repository
            .save(&record)
            .await
            .map_err(|err| {
                report(PersonServiceError::from_write_failure(
                    PersonOperation::Register,
                    err,
                ))
            })?;

        info!(person_id = %person.id(), "registered person");
        Ok(person)
    }

    /// Returns every person in the order storage reports them.
    ///
    /// # Errors
    ///
    /// Returns [`PersonServiceError::InternalFailure`] when storage fails.
    pub async fn find_all(&self) -> PersonServiceResult<Vec<Person>> {
        debug!(operation = %PersonOperation::List, "listing persons");
        self.repository
            .find_all()
            .await
            .map_err(|err| report(PersonServiceError::internal(PersonOperation::List, err)))
    }

    /// Loads one person by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersonServiceError::NotFound`] when no person has `id`, or
    /// [`PersonServiceError::InternalFailure`] when storage fails.
    pub async fn find_one(&self, id: PersonId) -> PersonServiceResult<Person> {
        debug!(operation = %PersonOperation::Load, person_id = %id, "loading person");
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| report(PersonServiceError::internal(PersonOperation::Load, err)))?
            .ok_or_else(|| report(PersonServiceError::NotFound(id)))
    }

    /// Applies a partial update to the person with `id`.
    ///
    /// Existence is not checked beforehand and a changed CPF is not
    /// re-validated; a missing person yields zero affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`PersonServiceError::DuplicateField`] when the new CPF or
    /// email belongs to another person, or
    /// [`PersonServiceError::InternalFailure`] on any other storage failure.
    pub async fn update(
        &self,
        id: PersonId,
        changes: &PersonChanges,
    ) -> PersonServiceResult<AffectedRows> {
        debug!(operation = %PersonOperation::Update, person_id = %id, "updating person");
        self.repository
            .update(id, changes)
            .await
            .map_err(|err| {
                report(PersonServiceError::from_write_failure(
                    PersonOperation::Update,
                    err,
                ))
            })
    }

    /// Deletes the person with `id`; a missing person yields zero affected
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns [`PersonServiceError::InternalFailure`] when storage fails.
    pub async fn remove(&self, id: PersonId) -> PersonServiceResult<AffectedRows> {
        debug!(operation = %PersonOperation::Remove, person_id = %id, "removing person");
        self.repository
            .delete(id)
            .await
            .map_err(|err| report(PersonServiceError::internal(PersonOperation::Remove, err)))
    }
}

/// Logs a service error at a level matching its kind and passes it through.
fn report(err: PersonServiceError) -> PersonServiceError {
    match &err {
        PersonServiceError::InternalFailure { source, .. } => {
            error!(error = %err, cause = %source, "person storage failure");
        }
        PersonServiceError::DuplicateField(field) => {
            warn!(error = %field, "person write rejected by uniqueness constraint");
        }
        PersonServiceError::NotFound(id) => debug!(person_id = %id, "person not found"),
        PersonServiceError::ValidationFailed(domain) => {
            warn!(error = %domain, "rejected invalid person data");
        }
    }
    err
}
