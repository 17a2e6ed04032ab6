//! `PostgreSQL` repository implementation for person record storage.

use super::{
    models::{NewPersonRow, PersonChangeset, PersonRow},
    schema::persons,
};
use crate::config::DatabaseConfig;
use crate::person::{
    domain::{AffectedRows, NewPerson, PersistedPersonData, Person, PersonChanges, PersonId},
    ports::{PersonRepository, PersonRepositoryError, PersonRepositoryResult, UniqueViolation},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by person adapters.
pub type PersonPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed person repository.
#[derive(Debug, Clone)]
pub struct PostgresPersonRepository {
    pool: PersonPgPool,
}

impl PostgresPersonRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PersonPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool from `config` and wraps it in a repository.
    ///
    /// # Errors
    ///
    /// Returns [`PersonRepositoryError::Persistence`] when the pool cannot
    /// open its initial connections.
    pub fn connect(config: &DatabaseConfig) -> PersonRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.url());
        let pool = Pool::builder()
            .max_size(config.max_connections())
            .build(manager)
            .map_err(PersonRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> PersonRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PersonRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(PersonRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PersonRepositoryError::persistence)?
    }
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn save(&self, record: &NewPerson) -> PersonRepositoryResult<Person> {
        let new_row = to_new_row(record);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(persons::table)
                .values(&new_row)
                .returning(PersonRow::as_returning())
                .get_result::<PersonRow>(connection)
                .map_err(map_write_error)?;
            Ok(row_to_person(row))
        })
        .await
    }

    async fn find_all(&self) -> PersonRepositoryResult<Vec<Person>> {
        self.run_blocking(move |connection| {
            let rows = persons::table
                .order(persons::id.asc())
                .select(PersonRow::as_select())
                .load::<PersonRow>(connection)
                .map_err(PersonRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_person).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: PersonId) -> PersonRepositoryResult<Option<Person>> {
        self.run_blocking(move |connection| {
            let row = persons::table
                .filter(persons::id.eq(id.into_inner()))
                .select(PersonRow::as_select())
                .first::<PersonRow>(connection)
                .optional()
                .map_err(PersonRepositoryError::persistence)?;
            Ok(row.map(row_to_person))
        })
        .await
    }

    async fn update(
        &self,
        id: PersonId,
        changes: &PersonChanges,
    ) -> PersonRepositoryResult<AffectedRows> {
        if changes.is_empty() {
            return Err(PersonRepositoryError::EmptyChangeSet);
        }
        let changeset = to_changeset(changes);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(persons::table.find(id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(map_write_error)?;
            Ok(AffectedRows::new(updated_count))
        })
        .await
    }

    async fn delete(&self, id: PersonId) -> PersonRepositoryResult<AffectedRows> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(persons::table.find(id.into_inner()))
                .execute(connection)
                .map_err(PersonRepositoryError::persistence)?;
            Ok(AffectedRows::new(deleted_count))
        })
        .await
    }
}

fn to_new_row(record: &NewPerson) -> NewPersonRow {
    NewPersonRow {
        name: record.name.clone(),
        cpf: record.cpf.clone(),
        birth_date: record.birth_date,
        email: record.email.clone(),
    }
}

fn to_changeset(changes: &PersonChanges) -> PersonChangeset {
    PersonChangeset {
        name: changes.name.clone(),
        cpf: changes.cpf.clone(),
        birth_date: changes.birth_date,
        email: changes.email.clone(),
    }
}

fn row_to_person(row: PersonRow) -> Person {
    let PersonRow {
        id,
        name,
        cpf,
        birth_date,
        email,
    } = row;

    Person::from_persisted(PersistedPersonData {
        id: PersonId::new(id),
        name,
        cpf,
        birth_date,
        email,
    })
}

fn map_write_error(err: DieselError) -> PersonRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
            PersonRepositoryError::UniqueViolation(unique_violation(info.as_ref()))
        }
        _ => PersonRepositoryError::persistence(err),
    }
}

fn unique_violation(info: &dyn DatabaseErrorInformation) -> UniqueViolation {
    UniqueViolation::new(
        info.constraint_name().map(str::to_owned),
        info.details().map(str::to_owned),
    )
}
