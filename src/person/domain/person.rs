//! Person record types.

use super::PersonId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered individual as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: PersonId,
    name: String,
    cpf: String,
    birth_date: NaiveDate,
    email: String,
}

/// Parameter object for reconstructing a person from storage.
#[derive(Debug, Clone)]
pub struct PersistedPersonData {
    /// Storage-assigned identifier.
    pub id: PersonId,
    /// Full name.
    pub name: String,
    /// Taxpayer number exactly as stored.
    pub cpf: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact email address.
    pub email: String,
}

impl Person {
    /// Reconstructs a person from persisted storage data.
    #[must_use]
    pub fn from_persisted(data: PersistedPersonData) -> Self {
        let PersistedPersonData {
            id,
            name,
            cpf,
            birth_date,
            email,
        } = data;
        Self {
            id,
            name,
            cpf,
            birth_date,
            email,
        }
    }

    /// Combines a storage-assigned identifier with an unsaved record.
    #[must_use]
    pub fn assign(id: PersonId, record: NewPerson) -> Self {
        let NewPerson {
            name,
            cpf,
            birth_date,
            email,
        } = record;
        Self {
            id,
            name,
            cpf,
            birth_date,
            email,
        }
    }

    /// Returns the storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the taxpayer number exactly as stored.
    #[must_use]
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    /// Returns the date of birth.
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Applies every field set in `changes`, leaving the others untouched.
    pub fn apply(&mut self, changes: &PersonChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(cpf) = &changes.cpf {
            self.cpf.clone_from(cpf);
        }
        if let Some(birth_date) = changes.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
    }
}

/// A person record that storage has not yet assigned an identifier to.
///
/// Field values are carried exactly as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    /// Full name.
    pub name: String,
    /// Taxpayer number as supplied, punctuation included.
    pub cpf: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact email address.
    pub email: String,
}

/// Field-level partial update for a person record.
///
/// Unset fields are left unchanged by storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement taxpayer number.
    pub cpf: Option<String>,
    /// Replacement date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Replacement email address.
    pub email: Option<String>,
}

impl PersonChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement taxpayer number.
    #[must_use]
    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    /// Sets the replacement date of birth.
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Sets the replacement email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.cpf.is_none()
            && self.birth_date.is_none()
            && self.email.is_none()
    }
}
