//! In-memory repository for person record tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::person::{
    domain::{AffectedRows, NewPerson, Person, PersonChanges, PersonId},
    ports::{
        CPF_UNIQUE_CONSTRAINT, EMAIL_UNIQUE_CONSTRAINT, PersonRepository, PersonRepositoryError,
        PersonRepositoryResult, UniqueViolation,
    },
};

/// Thread-safe in-memory person repository.
///
/// Enforces the same `cpf` and `email` uniqueness as the `persons` table and
/// reports collisions with `PostgreSQL`-style constraint names and details.
/// Identifiers are allocated from a counter that never rewinds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    state: Arc<RwLock<InMemoryPersonState>>,
}

#[derive(Debug, Default)]
struct InMemoryPersonState {
    last_id: i32,
    persons: BTreeMap<PersonId, Person>,
}

impl InMemoryPersonRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PersonRepositoryResult<RwLockReadGuard<'_, InMemoryPersonState>> {
        self.state.read().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> PersonRepositoryResult<RwLockWriteGuard<'_, InMemoryPersonState>> {
        self.state.write().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryPersonState {
    /// Rejects `cpf` or `email` values held by any record other than `owner`.
    fn ensure_unique(
        &self,
        cpf: Option<&str>,
        email: Option<&str>,
        owner: Option<PersonId>,
    ) -> PersonRepositoryResult<()> {
        let others = self
            .persons
            .values()
            .filter(|person| Some(person.id()) != owner);

        for person in others {
            if let Some(value) = cpf
                && person.cpf() == value
            {
                return Err(duplicate(CPF_UNIQUE_CONSTRAINT, "cpf", value));
            }
            if let Some(value) = email
                && person.email() == value
            {
                return Err(duplicate(EMAIL_UNIQUE_CONSTRAINT, "email", value));
            }
        }
        Ok(())
    }

    fn next_id(&mut self) -> PersonRepositoryResult<PersonId> {
        let next = self.last_id.checked_add(1).ok_or_else(|| {
            PersonRepositoryError::persistence(std::io::Error::other(
                "person identifier sequence exhausted",
            ))
        })?;
        self.last_id = next;
        Ok(PersonId::new(next))
    }
}

fn duplicate(constraint: &str, column: &str, value: &str) -> PersonRepositoryError {
    PersonRepositoryError::UniqueViolation(UniqueViolation::new(
        Some(constraint.to_owned()),
        Some(format!("Key ({column})=({value}) already exists.")),
    ))
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn save(&self, record: &NewPerson) -> PersonRepositoryResult<Person> {
        let mut state = self.write()?;
        state.ensure_unique(Some(&record.cpf), Some(&record.email), None)?;

        let id = state.next_id()?;
        let person = Person::assign(id, record.clone());
        state.persons.insert(id, person.clone());
        Ok(person)
    }

    async fn find_all(&self) -> PersonRepositoryResult<Vec<Person>> {
        let state = self.read()?;
        Ok(state.persons.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> PersonRepositoryResult<Option<Person>> {
        let state = self.read()?;
        Ok(state.persons.get(&id).cloned())
    }

    async fn update(
        &self,
        id: PersonId,
        changes: &PersonChanges,
    ) -> PersonRepositoryResult<AffectedRows> {
        if changes.is_empty() {
            return Err(PersonRepositoryError::EmptyChangeSet);
        }

        let mut state = self.write()?;
        if !state.persons.contains_key(&id) {
            return Ok(AffectedRows::new(0));
        }
        state.ensure_unique(changes.cpf.as_deref(), changes.email.as_deref(), Some(id))?;

        let Some(person) = state.persons.get_mut(&id) else {
            return Ok(AffectedRows::new(0));
        };
        person.apply(changes);
        Ok(AffectedRows::new(1))
    }

    async fn delete(&self, id: PersonId) -> PersonRepositoryResult<AffectedRows> {
        let mut state = self.write()?;
        let removed = state.persons.remove(&id).map_or(0, |_| 1);
        Ok(AffectedRows::new(removed))
    }
}
