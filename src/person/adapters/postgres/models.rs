//! Diesel row models for person record persistence.

use super::schema::persons;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for person records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PersonRow {
    /// Surrogate key.
    pub id: i32,
    /// Full name.
    pub name: String,
    /// Taxpayer number.
    pub cpf: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact email address.
    pub email: String,
}

/// Insert model for person records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = persons)]
pub struct NewPersonRow {
    /// Full name.
    pub name: String,
    /// Taxpayer number.
    pub cpf: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Contact email address.
    pub email: String,
}

/// Partial update model; `None` fields are left out of the `SET` clause.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = persons)]
pub struct PersonChangeset {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement taxpayer number.
    pub cpf: Option<String>,
    /// Replacement date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Replacement email address.
    pub email: Option<String>,
}
